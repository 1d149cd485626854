use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

/// A pinned, boxed future that is required to be Send and 'static.
pub type BoxFutureStatic<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Polls a future once without registering for wakeups.
///
/// Returns `None` if the future is still pending. Only use this for
/// intentional non-blocking checks; a pending future polled this way will not
/// be woken.
pub fn poll_once<F: Future + Unpin>(mut fut: F) -> Option<F::Output> {
	let mut cx = Context::from_waker(Waker::noop());
	match Pin::new(&mut fut).poll(&mut cx) {
		Poll::Ready(res) => Some(res),
		Poll::Pending => None,
	}
}
