pub use crate::builder::{Addition, Builder};
pub use crate::cursor::Cursor;
pub use crate::iterable::Iterable;
pub use crate::optional::Optional;
pub use crate::pair::Pair;
pub use crate::vector::Vector;
