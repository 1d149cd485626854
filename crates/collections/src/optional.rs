use crate::cursor::Cursor;
use crate::error::{CollectionError, Result};
use crate::iterable::Iterable;


/// A value that may be absent.
///
/// Iterates as zero or one element, so every [`Iterable`] operation applies.
/// Two optionals are equal when both are empty or both hold equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Optional<T> {
	value: Option<T>,
}

impl<T> Optional<T> {
	/// The empty optional.
	pub const fn none() -> Self {
		Self { value: None }
	}

	/// An optional holding `value`.
	pub const fn some(value: T) -> Self {
		Self { value: Some(value) }
	}

	/// Wraps a nullable value; `None` becomes the empty optional.
	pub fn new(value: Option<T>) -> Self {
		Self { value }
	}

	/// Wraps text, treating the empty string as absent.
	pub fn non_blank(text: T) -> Self
	where
		T: AsRef<str>,
	{
		if text.as_ref().is_empty() { Self::none() } else { Self::some(text) }
	}

	pub fn is_empty(&self) -> bool {
		self.value.is_none()
	}

	pub fn non_empty(&self) -> bool {
		self.value.is_some()
	}

	/// Alias of [`non_empty`](Self::non_empty).
	pub fn is_defined(&self) -> bool {
		self.non_empty()
	}

	/// Nullable view of the contained value.
	pub fn value(&self) -> Option<&T> {
		self.value.as_ref()
	}

	/// Returns the contained value.
	///
	/// # Errors
	///
	/// [`CollectionError::EmptyValue`] if this optional is empty.
	pub fn get(&self) -> Result<&T> {
		self.value.as_ref().ok_or(CollectionError::EmptyValue)
	}

	pub fn into_inner(self) -> Option<T> {
		self.value
	}

	pub fn as_ref(&self) -> Optional<&T> {
		Optional {
			value: self.value.as_ref(),
		}
	}

	/// Returns the value, or `default` when empty.
	pub fn get_or_else(self, default: T) -> T {
		self.value.unwrap_or(default)
	}

	/// Returns the value, or calls `default` when empty.
	pub fn get_or_else_with<F>(self, default: F) -> T
	where
		F: FnOnce() -> T,
	{
		self.value.unwrap_or_else(default)
	}

	/// Calls `on_value` with the value, or `on_empty` when there is none.
	pub fn match_with<R, V, E>(self, on_value: V, on_empty: E) -> R
	where
		V: FnOnce(T) -> R,
		E: FnOnce() -> R,
	{
		match self.value {
			Some(value) => on_value(value),
			None => on_empty(),
		}
	}

	pub fn map<U, F>(self, f: F) -> Optional<U>
	where
		F: FnOnce(T) -> U,
	{
		self.match_with(|value| Optional::some(f(value)), Optional::none)
	}

	/// Like [`map`](Self::map), for functions that already return an optional.
	pub fn flat_map<U, F>(self, f: F) -> Optional<U>
	where
		F: FnOnce(T) -> Optional<U>,
	{
		self.match_with(f, Optional::none)
	}

	/// Keeps the value only if `f` accepts it.
	pub fn filter<F>(self, f: F) -> Self
	where
		F: FnOnce(&T) -> bool,
	{
		if self.value.as_ref().is_some_and(f) { self } else { Self::none() }
	}

	/// Keeps the value only if `f` rejects it.
	pub fn filter_not<F>(self, f: F) -> Self
	where
		F: FnOnce(&T) -> bool,
	{
		self.filter(|value| !f(value))
	}
}

impl<T> Optional<Optional<T>> {
	/// Removes one level of nesting.
	pub fn flatten(self) -> Optional<T> {
		self.flat_map(|inner| inner)
	}
}

impl<T> Default for Optional<T> {
	fn default() -> Self {
		Self::none()
	}
}

impl<T> From<Option<T>> for Optional<T> {
	fn from(value: Option<T>) -> Self {
		Self { value }
	}
}

impl<T> From<Optional<T>> for Option<T> {
	fn from(optional: Optional<T>) -> Self {
		optional.value
	}
}

impl<T> IntoIterator for Optional<T> {
	type Item = T;
	type IntoIter = std::option::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.value.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Optional<T> {
	type Item = &'a T;
	type IntoIter = std::option::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.value.iter()
	}
}

/// Cursor yielding the value of an [`Optional`] at most once.
#[derive(Debug, Clone)]
pub struct OptionalCursor<'a, T> {
	pending: Option<&'a T>,
}

impl<'a, T> Cursor for OptionalCursor<'a, T> {
	type Item = &'a T;

	fn has_next(&self) -> bool {
		self.pending.is_some()
	}

	fn next(&mut self) -> Result<&'a T> {
		self.pending.take().ok_or(CollectionError::ExhaustedIterator)
	}
}

impl<T> Iterable for Optional<T> {
	type Item = T;
	type Cursor<'a>
		= OptionalCursor<'a, T>
	where
		Self: 'a;

	fn cursor(&self) -> Self::Cursor<'_> {
		OptionalCursor {
			pending: self.value.as_ref(),
		}
	}
}
