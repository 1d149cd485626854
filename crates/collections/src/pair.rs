use std::fmt;

use crate::cursor::Cursor;
use crate::error::{CollectionError, Result};
use crate::iterable::{Iterable, find_raw};
use crate::optional::Optional;


/// An ordered 2-tuple.
///
/// When both slots share a type the pair iterates as exactly two elements,
/// `first` then `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B>(A, B);

impl<A, B> Pair<A, B> {
	pub const fn new(first: A, second: B) -> Self {
		Self(first, second)
	}

	pub fn first(&self) -> &A {
		&self.0
	}

	pub fn second(&self) -> &B {
		&self.1
	}

	pub fn into_tuple(self) -> (A, B) {
		(self.0, self.1)
	}

	/// Swaps the two slots.
	pub fn reverse(self) -> Pair<B, A> {
		Pair(self.1, self.0)
	}

	pub fn with_first<C>(self, first: C) -> Pair<C, B> {
		Pair(first, self.1)
	}

	pub fn with_second<C>(self, second: C) -> Pair<A, C> {
		Pair(self.0, second)
	}

	pub fn map_first<C, F>(self, f: F) -> Pair<C, B>
	where
		F: FnOnce(A) -> C,
	{
		Pair(f(self.0), self.1)
	}

	pub fn map_second<C, F>(self, f: F) -> Pair<A, C>
	where
		F: FnOnce(B) -> C,
	{
		Pair(self.0, f(self.1))
	}
}

impl<T> Pair<T, T> {
	/// Applies `f` to both slots.
	pub fn map<U, F>(self, mut f: F) -> Pair<U, U>
	where
		F: FnMut(T) -> U,
	{
		let first = f(self.0);
		Pair(first, f(self.1))
	}

	/// The first of (`first`, `second`) accepted by `f`.
	pub fn find<F>(&self, f: F) -> Optional<&T>
	where
		F: FnMut(&T) -> bool,
	{
		Optional::new(find_raw(self, f))
	}
}

impl<A, B> From<(A, B)> for Pair<A, B> {
	fn from((first, second): (A, B)) -> Self {
		Self(first, second)
	}
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.0, self.1)
	}
}

impl<T> IntoIterator for Pair<T, T> {
	type Item = T;
	type IntoIter = std::array::IntoIter<T, 2>;

	fn into_iter(self) -> Self::IntoIter {
		[self.0, self.1].into_iter()
	}
}

/// Cursor over the two slots of a [`Pair`].
#[derive(Debug, Clone)]
pub struct PairCursor<'a, T> {
	pair: &'a Pair<T, T>,
	next_index: u8,
}

impl<'a, T> Cursor for PairCursor<'a, T> {
	type Item = &'a T;

	fn has_next(&self) -> bool {
		self.next_index < 2
	}

	fn next(&mut self) -> Result<&'a T> {
		let item = match self.next_index {
			0 => &self.pair.0,
			1 => &self.pair.1,
			_ => return Err(CollectionError::ExhaustedIterator),
		};
		self.next_index += 1;
		Ok(item)
	}
}

impl<T> Iterable for Pair<T, T> {
	type Item = T;
	type Cursor<'a>
		= PairCursor<'a, T>
	where
		Self: 'a;

	fn cursor(&self) -> Self::Cursor<'_> {
		PairCursor { pair: self, next_index: 0 }
	}
}
