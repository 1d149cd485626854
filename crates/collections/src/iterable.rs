//! Bulk operations shared by every container, written once against the
//! [`Cursor`] protocol and a caller-chosen [`Builder`].
//!
//! Each method asks for a fresh cursor, so no traversal state survives between
//! calls. The output shape is decided entirely by the builder: the same
//! `filter_with` produces a `Vec`, a [`Vector`](crate::Vector) or an
//! [`Optional`] depending on what is passed in.

use std::future::Future;

use crate::builder::{Builder, SeqBuilder};
use crate::cursor::{Cursor, CursorIter};
use crate::optional::Optional;


/// A source that can be traversed any number of times through fresh cursors.
pub trait Iterable {
	/// Element type, handed out by reference.
	type Item;

	/// Cursor returned by [`cursor`](Iterable::cursor).
	type Cursor<'a>: Cursor<Item = &'a Self::Item>
	where
		Self: 'a;

	/// Starts a new, independent traversal.
	fn cursor(&self) -> Self::Cursor<'_>;

	/// Standard iterator over a fresh cursor.
	fn iter(&self) -> CursorIter<Self::Cursor<'_>> {
		self.cursor().into_std_iter()
	}

	fn non_empty(&self) -> bool {
		self.cursor().has_next()
	}

	fn is_empty(&self) -> bool {
		!self.non_empty()
	}

	/// Number of elements, counted by walking a cursor to its end.
	fn size(&self) -> usize {
		self.iter().count()
	}

	/// First element, if any.
	fn head_option(&self) -> Optional<&Self::Item> {
		Optional::new(self.iter().next())
	}

	fn foreach<F>(&self, f: F)
	where
		F: FnMut(&Self::Item),
	{
		self.cursor().foreach(f);
	}

	/// Whether any element satisfies `f`. Stops at the first match.
	fn exists<F>(&self, mut f: F) -> bool
	where
		F: FnMut(&Self::Item) -> bool,
	{
		let mut cursor = self.cursor();
		while cursor.has_next() {
			match cursor.next() {
				Ok(item) if f(item) => return true,
				Ok(_) => {}
				Err(_) => break,
			}
		}
		false
	}

	/// Whether every element satisfies `f`. True for an empty source.
	fn forall<F>(&self, mut f: F) -> bool
	where
		F: FnMut(&Self::Item) -> bool,
	{
		!self.exists(|item| !f(item))
	}

	fn contains(&self, value: &Self::Item) -> bool
	where
		Self::Item: PartialEq,
	{
		self.exists(|item| item == value)
	}

	/// Appends `f(item)` for every element into `builder` and returns its result.
	fn map_with<U, F, B>(&self, mut f: F, builder: &mut B) -> B::Output
	where
		F: FnMut(&Self::Item) -> U,
		B: Builder<Item = U>,
	{
		self.foreach(|item| builder.add_one(f(item)));
		builder.result()
	}

	/// Appends clones of the elements accepted by `f` into `builder`.
	fn filter_with<F, B>(&self, mut f: F, builder: &mut B) -> B::Output
	where
		Self::Item: Clone,
		F: FnMut(&Self::Item) -> bool,
		B: Builder<Item = Self::Item>,
	{
		self.foreach(|item| {
			if f(item) {
				builder.add_one(item.clone());
			}
		});
		builder.result()
	}

	/// Maps every element to a sequence and splices each sequence one level
	/// deep into `builder`.
	///
	/// Functions producing a single value belong in [`map_with`](Iterable::map_with).
	fn flat_map_with<U, I, F, B>(&self, mut f: F, builder: &mut B) -> B::Output
	where
		F: FnMut(&Self::Item) -> I,
		I: IntoIterator<Item = U>,
		B: Builder<Item = U>,
	{
		self.foreach(|item| builder.add_many(f(item)));
		builder.result()
	}

	/// Splices the elements of every nested iterable into `builder`.
	fn flatten_with<B>(&self, builder: &mut B) -> B::Output
	where
		Self::Item: Iterable,
		<Self::Item as Iterable>::Item: Clone,
		B: Builder<Item = <Self::Item as Iterable>::Item>,
	{
		self.foreach(|inner| builder.add_many(inner.iter().cloned()));
		builder.result()
	}

	/// Maps elements through an asynchronous function, one at a time.
	///
	/// The future for an element is created only after the previous element's
	/// output has been appended, so outputs and side effects follow iteration
	/// order.
	fn async_map_with<U, Fut, F, B>(&self, mut f: F, builder: &mut B) -> impl Future<Output = B::Output>
	where
		F: FnMut(&Self::Item) -> Fut,
		Fut: Future<Output = U>,
		B: Builder<Item = U>,
	{
		async move {
			for (step, item) in self.iter().enumerate() {
				tracing::trace!(step, "iterable.async_map.step");
				let mapped = f(item).await;
				builder.add_one(mapped);
			}
			builder.result()
		}
	}

	/// Folds every element into `builder`.
	fn to<B>(&self, builder: &mut B) -> B::Output
	where
		Self::Item: Clone,
		B: Builder<Item = Self::Item>,
	{
		builder.add_many(self.iter().cloned());
		builder.result()
	}

	/// Materializes the elements into a plain `Vec`, in iteration order.
	fn to_vec(&self) -> Vec<Self::Item>
	where
		Self::Item: Clone,
	{
		self.to(&mut SeqBuilder::new())
	}
}

/// First element satisfying `f`, unwrapped.
///
/// Public APIs wrap this in an [`Optional`].
pub(crate) fn find_raw<'a, S, F>(source: &'a S, mut f: F) -> Option<&'a S::Item>
where
	S: Iterable + ?Sized,
	F: FnMut(&S::Item) -> bool,
{
	source.iter().find(|item| f(item))
}

impl<T> Iterable for Vec<T> {
	type Item = T;
	type Cursor<'a>
		= crate::cursor::SliceCursor<'a, T>
	where
		Self: 'a;

	fn cursor(&self) -> Self::Cursor<'_> {
		crate::cursor::SliceCursor::new(self)
	}
}
