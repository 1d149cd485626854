use std::iter::FusedIterator;

use crate::error::{CollectionError, Result};

#[cfg(test)]
mod tests;

/// A single forward traversal over some source.
///
/// Once [`has_next`](Cursor::has_next) reports `false` it never reports `true`
/// again, and [`next`](Cursor::next) fails with
/// [`CollectionError::ExhaustedIterator`]. Cursors are created fresh for each
/// traversal and are never rewound.
pub trait Cursor {
	/// Element produced by each step.
	type Item;

	/// Whether another call to [`next`](Cursor::next) will succeed.
	fn has_next(&self) -> bool;

	/// Advances the cursor and returns the element it moved past.
	fn next(&mut self) -> Result<Self::Item>;

	/// Feeds every remaining element to `f`.
	fn foreach<F>(self, f: F)
	where
		Self: Sized,
		F: FnMut(Self::Item),
	{
		self.into_std_iter().for_each(f);
	}

	/// Adapts this cursor to [`std::iter::Iterator`] so it works with `for`
	/// loops and iterator adapters.
	fn into_std_iter(self) -> CursorIter<Self>
	where
		Self: Sized,
	{
		CursorIter { cursor: self }
	}
}

/// Standard iterator view over a [`Cursor`].
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
	cursor: C,
}

impl<C: Cursor> Iterator for CursorIter<C> {
	type Item = C::Item;

	fn next(&mut self) -> Option<Self::Item> {
		if self.cursor.has_next() { self.cursor.next().ok() } else { None }
	}
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}

/// Cursor over a borrowed slice, advancing by index.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
	items: &'a [T],
	next_index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
	/// Starts a traversal at the first element of `items`.
	pub fn new(items: &'a [T]) -> Self {
		Self { items, next_index: 0 }
	}

	/// Number of elements not yet returned.
	pub fn remaining(&self) -> usize {
		self.items.len().saturating_sub(self.next_index)
	}
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
	type Item = &'a T;

	fn has_next(&self) -> bool {
		self.next_index < self.items.len()
	}

	fn next(&mut self) -> Result<&'a T> {
		let item = self.items.get(self.next_index).ok_or(CollectionError::ExhaustedIterator)?;
		self.next_index += 1;
		Ok(item)
	}
}
