//! Cursor-based iteration, builders and the functional containers built on
//! them: [`Optional`], [`Pair`] and [`Vector`].

/// Accumulators that decide the output shape of bulk transforms.
pub mod builder;
/// The `has_next`/`next` traversal protocol.
pub mod cursor;
/// Contract-violation errors.
pub mod error;
/// Generic bulk algorithms over cursors.
pub mod iterable;
/// Zero-or-one element container.
pub mod optional;
/// Two-slot tuple.
pub mod pair;
/// Common re-exports for convenience.
pub mod prelude;
/// Immutable indexed sequence.
pub mod vector;

pub use builder::{Addition, Builder, JoinBuilder, OptionalBuilder, SeqBuilder, VectorBuilder};
pub use cursor::{Cursor, CursorIter, SliceCursor};
pub use error::{CollectionError, Result};
pub use iterable::Iterable;
pub use optional::{Optional, OptionalCursor};
pub use pair::{Pair, PairCursor};
pub use vector::Vector;
