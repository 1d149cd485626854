use std::fmt;
use std::future::Future;
use std::ops::Index;
use std::sync::Arc;

use crate::builder::{Addition, Builder, JoinBuilder, VectorBuilder};
use crate::cursor::SliceCursor;
use crate::error::{CollectionError, Result};
use crate::iterable::{Iterable, find_raw};
use crate::optional::Optional;


/// An immutable, indexed sequence.
///
/// Transformations never touch the receiver; each one builds a new vector
/// through a [`VectorBuilder`]. Clones share the backing buffer.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector<T> {
	items: Arc<[T]>,
}

impl<T> Vector<T> {
	pub fn new(items: Vec<T>) -> Self {
		Self { items: items.into() }
	}

	/// The empty vector.
	pub fn empty() -> Self {
		Self::new(Vec::new())
	}

	/// A vector holding exactly `item`.
	pub fn single(item: T) -> Self {
		Self::new(vec![item])
	}

	pub fn size(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn non_empty(&self) -> bool {
		!self.is_empty()
	}

	pub fn as_slice(&self) -> &[T] {
		&self.items
	}

	/// Element at `index`.
	///
	/// # Errors
	///
	/// [`CollectionError::IndexOutOfBounds`] if `index >= size`.
	pub fn get(&self, index: usize) -> Result<&T> {
		self.items.get(index).ok_or(CollectionError::IndexOutOfBounds {
			index,
			size: self.size(),
		})
	}

	/// Element at `index`, or empty when out of range.
	pub fn option(&self, index: usize) -> Optional<&T> {
		Optional::new(self.items.get(index))
	}

	/// The first element.
	///
	/// # Errors
	///
	/// [`CollectionError::IndexOutOfBounds`] if the vector is empty.
	pub fn head(&self) -> Result<&T> {
		self.get(0)
	}

	pub fn head_option(&self) -> Optional<&T> {
		self.option(0)
	}

	pub fn map<U, F>(&self, f: F) -> Vector<U>
	where
		F: FnMut(&T) -> U,
	{
		self.map_with(f, &mut VectorBuilder::with_capacity(self.size()))
	}

	/// Maps each element to a sequence and concatenates the sequences.
	pub fn flat_map<U, I, F>(&self, f: F) -> Vector<U>
	where
		F: FnMut(&T) -> I,
		I: IntoIterator<Item = U>,
	{
		self.flat_map_with(f, &mut VectorBuilder::new())
	}

	/// The first element accepted by `f`.
	pub fn find<F>(&self, f: F) -> Optional<&T>
	where
		F: FnMut(&T) -> bool,
	{
		Optional::new(find_raw(self, f))
	}

	/// Maps every element through `f`, awaiting each result before starting
	/// the next.
	pub async fn async_map<U, Fut, F>(&self, f: F) -> Vector<U>
	where
		F: FnMut(&T) -> Fut,
		Fut: Future<Output = U>,
	{
		let mut builder = VectorBuilder::with_capacity(self.size());
		self.async_map_with(f, &mut builder).await
	}
}

impl<T: Clone> Vector<T> {
	pub fn filter<F>(&self, f: F) -> Self
	where
		F: FnMut(&T) -> bool,
	{
		self.filter_with(f, &mut VectorBuilder::new())
	}

	pub fn filter_not<F>(&self, mut f: F) -> Self
	where
		F: FnMut(&T) -> bool,
	{
		self.filter(|item| !f(item))
	}

	/// A copy of this vector with `item` appended.
	pub fn plus_one(&self, item: T) -> Self {
		self.plus_addition(Addition::<T>::One(item))
	}

	/// A copy of this vector with every element of `items` appended.
	pub fn plus<I>(&self, items: I) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		self.plus_addition(Addition::Many(items))
	}

	/// A copy of this vector followed by the elements of `other`.
	pub fn concat(&self, other: &Vector<T>) -> Self {
		if other.is_empty() {
			return self.clone();
		}
		if self.is_empty() {
			return other.clone();
		}
		self.plus(other.items.iter().cloned())
	}

	/// Appends one element or a sequence, as tagged.
	pub fn plus_addition<I>(&self, addition: Addition<T, I>) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		let mut builder = VectorBuilder::with_capacity(self.size() + 1);
		builder.add_many(self.items.iter().cloned());
		builder.add(addition);
		builder.result()
	}

	/// Drops every element that `same` pairs with an earlier kept element.
	///
	/// Each candidate is compared against all elements kept so far, so the
	/// first occurrence wins and order is preserved.
	pub fn distinct_by<F>(&self, mut same: F) -> Self
	where
		F: FnMut(&T, &T) -> bool,
	{
		let mut kept: Vec<&T> = Vec::with_capacity(self.size());
		for item in self.iter() {
			if !kept.iter().any(|existing| same(*existing, item)) {
				kept.push(item);
			}
		}
		let mut builder = VectorBuilder::with_capacity(kept.len());
		builder.add_many(kept.into_iter().cloned());
		builder.result()
	}

	pub fn distinct(&self) -> Self
	where
		T: PartialEq,
	{
		self.distinct_by(|a, b| a == b)
	}
}

impl<T> Vector<T>
where
	T: Iterable,
	T::Item: Clone,
{
	/// Concatenates the nested sequences one level deep.
	pub fn flatten(&self) -> Vector<T::Item> {
		self.flatten_with(&mut VectorBuilder::new())
	}
}

impl<T> Clone for Vector<T> {
	fn clone(&self) -> Self {
		Self {
			items: Arc::clone(&self.items),
		}
	}
}

impl<T> Default for Vector<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.items.iter()).finish()
	}
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let joined = self.map_with(ToString::to_string, &mut JoinBuilder::new(", "));
		write!(f, "[{joined}]")
	}
}

impl<T> From<Vec<T>> for Vector<T> {
	fn from(items: Vec<T>) -> Self {
		Self::new(items)
	}
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
	fn from(items: [T; N]) -> Self {
		Self::new(Vec::from(items))
	}
}

impl<T> FromIterator<T> for Vector<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut builder = VectorBuilder::new();
		builder.add_many(iter);
		builder.result()
	}
}

impl<T> Index<usize> for Vector<T> {
	type Output = T;

	fn index(&self, index: usize) -> &T {
		&self.items[index]
	}
}

impl<'a, T> IntoIterator for &'a Vector<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T: Clone> IntoIterator for Vector<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.to_vec().into_iter()
	}
}

impl<T> Iterable for Vector<T> {
	type Item = T;
	type Cursor<'a>
		= SliceCursor<'a, T>
	where
		Self: 'a;

	fn cursor(&self) -> Self::Cursor<'_> {
		SliceCursor::new(&self.items)
	}
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Vector<T> {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_seq(self.items.iter())
	}
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Vector<T> {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		<Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::new)
	}
}
