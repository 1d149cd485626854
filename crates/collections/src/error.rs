//! Error types for container access and cursor traversal.

use thiserror::Error;

/// Contract violations raised by cursors and containers.
///
/// None of these are recovered inside the crate; they are returned to the
/// caller as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
	/// `next()` was called on a cursor whose `has_next()` is false.
	#[error("cursor advanced past the end of its source")]
	ExhaustedIterator,

	/// A value was forced out of an empty [`Optional`](crate::Optional).
	#[error("no value present in an empty optional")]
	EmptyValue,

	/// An index outside `[0, size)` was read from a [`Vector`](crate::Vector).
	#[error("index {index} out of bounds for vector of size {size}")]
	IndexOutOfBounds {
		/// The requested index.
		index: usize,
		/// Size of the vector at the time of access.
		size: usize,
	},
}

/// Result alias defaulting to [`CollectionError`].
pub type Result<T, E = CollectionError> = std::result::Result<T, E>;
