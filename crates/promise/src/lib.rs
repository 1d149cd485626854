//! Stateful promises: one-shot asynchronous computations whose completion,
//! success and failure can be inspected synchronously.

/// Write-once result slot.
mod cell;
/// Async future aliases.
pub mod future;
/// Success/failure outcomes.
pub mod outcome;
/// The stateful promise and its normalizing constructor.
pub mod stateful;

pub use future::{BoxFutureStatic, poll_once};
pub use outcome::Try;
pub use stateful::{Attempt, IntoStateful, Pending, Ready, Settle, StatefulPromise, stateful};
