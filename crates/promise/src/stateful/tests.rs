use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::oneshot;

use super::*;

type TestPromise = StatefulPromise<i32, String>;

/// A promise settled by sending into the returned channel.
fn controlled() -> (oneshot::Sender<Result<i32, String>>, TestPromise) {
	let (tx, rx) = oneshot::channel();
	let promise = StatefulPromise::new(async move { rx.await.unwrap_or_else(|_| Err("sender dropped".to_string())) });
	(tx, promise)
}

fn delayed_success(value: i32) -> TestPromise {
	StatefulPromise::new(async move {
		tokio::time::sleep(Duration::from_millis(20)).await;
		Ok(value)
	})
}

#[tokio::test]
async fn pending_then_success() {
	let (tx, promise) = controlled();
	assert!(promise.is_pending());
	assert!(!promise.is_completed());
	assert!(promise.result().is_empty());
	assert!(promise.success().is_empty());
	assert!(promise.failure().is_empty());
	assert!(!promise.is_success());
	assert!(!promise.is_failure());
	assert!(!promise.poll_state());

	tx.send(Ok(7)).unwrap();
	let outcome = promise.clone().await;

	assert_eq!(outcome, Try::Success(7));
	assert!(promise.is_completed());
	assert!(!promise.is_pending());
	assert!(promise.is_success());
	assert_eq!(promise.success().into_inner(), Some(&7));
	assert!(promise.failure().is_empty());
}

#[tokio::test]
async fn rejection_becomes_failure_value() {
	let (tx, promise) = controlled();
	tx.send(Err("E".to_string())).unwrap();
	promise.settled().await;

	assert!(promise.is_failure());
	assert!(!promise.is_success());
	assert_eq!(promise.failure().into_inner(), Some(&"E".to_string()));
}

#[tokio::test]
async fn map_failure_recovers() {
	let (tx, promise) = controlled();
	let recovered = promise.map_failure(|error| error.len() as i32 * 100);
	tx.send(Err("E".to_string())).unwrap();

	assert_eq!(recovered.clone().await, Try::Success(100));
	assert_eq!(recovered.success().into_inner(), Some(&100));
	assert!(promise.is_failure());
}

#[tokio::test]
async fn map_failure_preserves_success() {
	let promise = TestPromise::resolve(3).map_failure(|_| -1);
	assert_eq!(promise.await, Try::Success(3));
}

#[tokio::test]
async fn map_success_preserves_failure() {
	let failed = TestPromise::reject("nope".into()).map_success(|v| v + 1);
	assert_eq!(failed.await, Try::Failure("nope".to_string()));

	let succeeded = TestPromise::resolve(1).map_success(|v| v + 1);
	assert_eq!(succeeded.await, Try::Success(2));
}

#[tokio::test]
async fn map_sees_terminal_outcome() {
	let described = TestPromise::reject("x".into()).map(|outcome| -> Try<String, ()> {
		Try::Success(outcome.match_with(|v| format!("ok {v}"), |e| format!("err {e}")))
	});
	assert_eq!(described.await, Try::Success("err x".to_string()));
}

#[tokio::test]
async fn then_with_state_tracks_chained_computation() {
	let first = delayed_success(1);
	let second = first.then_with_state(
		|value| async move {
			tokio::time::sleep(Duration::from_millis(20)).await;
			Ok::<_, String>(value + 1)
		},
		|error| async move { Err(error) },
	);

	assert_eq!(first.clone().await, Try::Success(1));
	assert!(first.is_completed());
	assert!(second.is_pending());

	assert_eq!(second.clone().await, Try::Success(2));
	assert!(second.is_success());
}

#[tokio::test]
async fn then_with_state_routes_failures() {
	let chained = TestPromise::reject("bad".into()).then_with_state(
		|value| async move { Ok::<i32, usize>(value) },
		|error| async move { Err(error.len()) },
	);
	assert_eq!(chained.await, Try::Failure(3));

	let passed = TestPromise::reject("bad".into()).and_then_with_state(|value| async move { Ok(value * 2) });
	assert_eq!(passed.await, Try::Failure("bad".to_string()));
}

#[tokio::test]
async fn pre_classified_outcome_recorded_as_is() {
	let promise: TestPromise = StatefulPromise::from_try_future(async { Try::Failure("classified".to_string()) });
	assert_eq!(promise.clone().await, Try::Failure("classified".to_string()));
	assert!(promise.is_failure());
}

#[test]
fn resolve_and_reject_complete_immediately() {
	let ok = TestPromise::resolve(1);
	assert!(ok.is_completed());
	assert_eq!(ok.success().into_inner(), Some(&1));

	let err = TestPromise::reject("e".into());
	assert!(err.is_failure());
}

#[test]
fn poll_state_advances_ready_computation() {
	let promise: TestPromise = StatefulPromise::new(async { Ok(5) });
	assert!(promise.is_pending());
	assert!(promise.poll_state());
	assert_eq!(promise.success().into_inner(), Some(&5));
}

#[tokio::test]
async fn computation_runs_once_for_all_observers() {
	let runs = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&runs);
	let promise: TestPromise = StatefulPromise::new(async move {
		counter.fetch_add(1, Ordering::SeqCst);
		Ok(1)
	});
	let doubled = promise.map_success(|v| v * 2);
	let clone = promise.clone();

	assert_eq!(doubled.await, Try::Success(2));
	assert_eq!(clone.await, Try::Success(1));
	assert_eq!(promise.await, Try::Success(1));
	assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn stateful_normalizes_every_shape() {
	let from_future: TestPromise = stateful(Pending(async { Ok(1) }));
	assert_eq!(from_future.await, Try::Success(1));

	let from_try: TestPromise = stateful(Try::Failure("t".to_string()));
	assert!(from_try.is_failure());

	let from_result: TestPromise = stateful(Ok(2));
	assert_eq!(from_result.success().into_inner(), Some(&2));

	let calls = AtomicUsize::new(0);
	let from_fn: TestPromise = stateful(Attempt(|| {
		calls.fetch_add(1, Ordering::SeqCst);
		Ok(3)
	}));
	assert_eq!(calls.load(Ordering::SeqCst), 1);
	assert!(from_fn.is_success());

	let from_err_fn: TestPromise = stateful(Attempt(|| Err("boom".to_string())));
	assert_eq!(from_err_fn.failure().into_inner(), Some(&"boom".to_string()));

	let from_value: TestPromise = stateful(Ready(4));
	assert_eq!(from_value.success().into_inner(), Some(&4));

	let same: TestPromise = stateful(from_value.clone());
	assert_eq!(same.success().into_inner(), Some(&4));
}
