//! Stateful handles over one-shot asynchronous computations.
//!
//! A [`StatefulPromise`] attaches a single completion handler to the wrapped
//! future when it is constructed. That handler owns the only write handle of
//! the promise's result slot, so the captured outcome moves from empty to
//! exactly one [`Try`] once and never changes again. Everything else (the
//! introspection methods and every clone of the promise) only reads.
//!
//! Futures in Rust are lazy: the wrapped computation advances whenever the
//! promise, a clone of it, or a promise derived from it is awaited or polled.
//! [`StatefulPromise::poll_state`] gives callers that are not awaiting a way
//! to advance it without blocking.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{self, Shared};
use roundabout_collections::Optional;

use crate::cell::{CellReader, result_cell};
use crate::future::{BoxFutureStatic, poll_once};
use crate::outcome::Try;

#[cfg(test)]
mod tests;

/// Bounds required of success and failure values.
///
/// The settled outcome is shared between the completion handler, every clone
/// of the promise, and any promise chained from it.
pub trait Settle: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Settle for T {}

/// A handle to a single asynchronous computation whose completion, success
/// and failure can be queried synchronously.
pub struct StatefulPromise<T, E> {
	result: CellReader<Try<T, E>>,
	completion: Shared<BoxFutureStatic<Try<T, E>>>,
}

impl<T: Settle, E: Settle> StatefulPromise<T, E> {
	/// Wraps a computation that reports failure through its `Err` variant.
	pub fn new<F>(computation: F) -> Self
	where
		F: Future<Output = Result<T, E>> + Send + 'static,
	{
		Self::from_try_future(computation.map(Try::from))
	}

	/// Wraps a computation that resolves with an already classified outcome.
	///
	/// The outcome is recorded as-is.
	pub fn from_try_future<F>(computation: F) -> Self
	where
		F: Future<Output = Try<T, E>> + Send + 'static,
	{
		let (writer, result) = result_cell();
		let completion: BoxFutureStatic<Try<T, E>> = Box::pin(async move {
			let outcome = computation.await;
			tracing::trace!(success = outcome.is_success(), "stateful_promise.settled");
			writer.settle(outcome.clone());
			outcome
		});
		Self {
			result,
			completion: completion.shared(),
		}
	}

	/// A promise that has already succeeded with `value`.
	pub fn resolve(value: T) -> Self {
		Self::from_outcome(Try::Success(value))
	}

	/// A promise that has already failed with `error`.
	pub fn reject(error: E) -> Self {
		Self::from_outcome(Try::Failure(error))
	}

	fn from_outcome(outcome: Try<T, E>) -> Self {
		let (writer, result) = result_cell();
		writer.settle(outcome.clone());
		let completion: BoxFutureStatic<Try<T, E>> = Box::pin(future::ready(outcome));
		Self {
			result,
			completion: completion.shared(),
		}
	}

	/// The captured outcome; empty while pending.
	pub fn result(&self) -> Optional<&Try<T, E>> {
		Optional::new(self.result.get())
	}

	pub fn is_completed(&self) -> bool {
		self.result.is_settled()
	}

	pub fn is_pending(&self) -> bool {
		!self.is_completed()
	}

	/// The success value, once the computation has succeeded.
	pub fn success(&self) -> Optional<&T> {
		self.result().flat_map(Try::success)
	}

	/// The failure, once the computation has failed.
	pub fn failure(&self) -> Optional<&E> {
		self.result().flat_map(Try::failure)
	}

	pub fn is_success(&self) -> bool {
		self.success().is_defined()
	}

	pub fn is_failure(&self) -> bool {
		self.failure().is_defined()
	}

	/// Advances the computation by one non-blocking poll and reports whether
	/// it has completed.
	pub fn poll_state(&self) -> bool {
		if self.is_completed() {
			return true;
		}
		poll_once(self.completion.clone());
		self.is_completed()
	}

	/// Waits for the outcome.
	pub fn settled(&self) -> impl Future<Output = Try<T, E>> + Send + 'static {
		self.completion.clone()
	}

	/// Applies `f` to the terminal outcome, whichever it is.
	pub fn map<U, G, F>(&self, f: F) -> StatefulPromise<U, G>
	where
		U: Settle,
		G: Settle,
		F: FnOnce(Try<T, E>) -> Try<U, G> + Send + 'static,
	{
		let upstream = self.completion.clone();
		StatefulPromise::from_try_future(upstream.map(f))
	}

	/// Applies `f` to a success; failures pass through unchanged.
	pub fn map_success<U, F>(&self, f: F) -> StatefulPromise<U, E>
	where
		U: Settle,
		F: FnOnce(T) -> U + Send + 'static,
	{
		self.map(|outcome| outcome.map(f))
	}

	/// Turns a failure into a success through `f`; successes pass through
	/// unchanged.
	pub fn map_failure<F>(&self, f: F) -> StatefulPromise<T, E>
	where
		F: FnOnce(E) -> T + Send + 'static,
	{
		self.map(|outcome| Try::Success(outcome.recover(f)))
	}

	/// Chains an asynchronous continuation for each outcome.
	///
	/// The returned promise tracks the continuation's own state: it stays
	/// pending until the continuation has finished, even after `self` settled.
	pub fn then_with_state<U, G, S, R, SF, RF>(&self, on_success: S, on_failure: R) -> StatefulPromise<U, G>
	where
		U: Settle,
		G: Settle,
		S: FnOnce(T) -> SF + Send + 'static,
		R: FnOnce(E) -> RF + Send + 'static,
		SF: Future<Output = Result<U, G>> + Send + 'static,
		RF: Future<Output = Result<U, G>> + Send + 'static,
	{
		let upstream = self.completion.clone();
		StatefulPromise::new(async move {
			match upstream.await {
				Try::Success(value) => on_success(value).await,
				Try::Failure(error) => on_failure(error).await,
			}
		})
	}

	/// [`then_with_state`](Self::then_with_state) for a success continuation;
	/// failures pass through unchanged.
	pub fn and_then_with_state<U, S, SF>(&self, on_success: S) -> StatefulPromise<U, E>
	where
		U: Settle,
		S: FnOnce(T) -> SF + Send + 'static,
		SF: Future<Output = Result<U, E>> + Send + 'static,
	{
		self.then_with_state(on_success, |error| future::ready(Err(error)))
	}
}

impl<T, E> Clone for StatefulPromise<T, E> {
	fn clone(&self) -> Self {
		Self {
			result: self.result.clone(),
			completion: self.completion.clone(),
		}
	}
}

impl<T, E> std::fmt::Debug for StatefulPromise<T, E>
where
	T: std::fmt::Debug,
	E: std::fmt::Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StatefulPromise").field("result", &self.result.get()).finish()
	}
}

impl<T: Settle, E: Settle> Future for StatefulPromise<T, E> {
	type Output = Try<T, E>;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		Pin::new(&mut self.get_mut().completion).poll(cx)
	}
}

/// Conversion of the shapes [`stateful`] accepts into a [`StatefulPromise`].
pub trait IntoStateful<T, E> {
	fn into_stateful(self) -> StatefulPromise<T, E>;
}

/// A pending computation reporting failure through `Err`.
#[derive(Debug)]
pub struct Pending<F>(pub F);

/// A plain function, evaluated eagerly; an `Err` becomes a failure.
#[derive(Debug)]
pub struct Attempt<F>(pub F);

/// A plain value, wrapped as an immediate success.
#[derive(Debug)]
pub struct Ready<T>(pub T);

impl<T: Settle, E: Settle> IntoStateful<T, E> for StatefulPromise<T, E> {
	fn into_stateful(self) -> StatefulPromise<T, E> {
		self
	}
}

impl<T: Settle, E: Settle> IntoStateful<T, E> for Try<T, E> {
	fn into_stateful(self) -> StatefulPromise<T, E> {
		self.match_with(StatefulPromise::resolve, StatefulPromise::reject)
	}
}

impl<T: Settle, E: Settle> IntoStateful<T, E> for Result<T, E> {
	fn into_stateful(self) -> StatefulPromise<T, E> {
		Try::from(self).into_stateful()
	}
}

impl<T: Settle, E: Settle, F> IntoStateful<T, E> for Pending<F>
where
	F: Future<Output = Result<T, E>> + Send + 'static,
{
	fn into_stateful(self) -> StatefulPromise<T, E> {
		StatefulPromise::new(self.0)
	}
}

impl<T: Settle, E: Settle, F> IntoStateful<T, E> for Attempt<F>
where
	F: FnOnce() -> Result<T, E>,
{
	fn into_stateful(self) -> StatefulPromise<T, E> {
		let outcome = (self.0)();
		if outcome.is_err() {
			tracing::debug!("stateful_promise.attempt_failed");
		}
		outcome.into_stateful()
	}
}

impl<T: Settle, E: Settle> IntoStateful<T, E> for Ready<T> {
	fn into_stateful(self) -> StatefulPromise<T, E> {
		StatefulPromise::resolve(self.0)
	}
}

/// Normalizes a pending computation, a classified outcome, a function or a
/// plain value into a [`StatefulPromise`].
pub fn stateful<T, E>(source: impl IntoStateful<T, E>) -> StatefulPromise<T, E> {
	source.into_stateful()
}
