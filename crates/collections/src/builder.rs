use std::marker::PhantomData;

use crate::{Optional, Vector};

#[cfg(test)]
mod tests;

/// Input accepted by [`Builder::add`]: one element or a run of elements to
/// splice in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addition<T, I = Vec<T>> {
	/// Append a single element.
	One(T),
	/// Append every element of the sequence, in order.
	Many(I),
}

/// Accumulates elements and then hands out the built value.
///
/// [`result`](Builder::result) leaves the builder empty, so the same instance
/// can start a new accumulation right away.
pub trait Builder {
	/// Element accepted by the builder.
	type Item;
	/// Value produced by [`result`](Builder::result).
	type Output;

	/// Appends exactly one element.
	fn add_one(&mut self, item: Self::Item);

	/// Returns the accumulated value and resets the buffer.
	fn result(&mut self) -> Self::Output;

	/// Appends every element of `items`.
	fn add_many<I>(&mut self, items: I)
	where
		I: IntoIterator<Item = Self::Item>,
	{
		for item in items {
			self.add_one(item);
		}
	}

	/// Appends a single element or splices a sequence, as tagged.
	fn add<I>(&mut self, addition: Addition<Self::Item, I>)
	where
		I: IntoIterator<Item = Self::Item>,
	{
		match addition {
			Addition::One(item) => self.add_one(item),
			Addition::Many(items) => self.add_many(items),
		}
	}
}

/// Generic sequence builder producing a plain `Vec`.
#[derive(Debug, Clone)]
pub struct SeqBuilder<T> {
	buffer: Vec<T>,
}

impl<T> SeqBuilder<T> {
	pub fn new() -> Self {
		Self { buffer: Vec::new() }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(capacity),
		}
	}

	/// Number of elements accumulated since the last [`result`](Builder::result).
	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}
}

impl<T> Default for SeqBuilder<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Builder for SeqBuilder<T> {
	type Item = T;
	type Output = Vec<T>;

	fn add_one(&mut self, item: T) {
		self.buffer.push(item);
	}

	fn result(&mut self) -> Vec<T> {
		std::mem::take(&mut self.buffer)
	}
}

/// Builder producing a [`Vector`].
#[derive(Debug, Clone)]
pub struct VectorBuilder<T> {
	buffer: Vec<T>,
}

impl<T> VectorBuilder<T> {
	pub fn new() -> Self {
		Self { buffer: Vec::new() }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(capacity),
		}
	}
}

impl<T> Default for VectorBuilder<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Builder for VectorBuilder<T> {
	type Item = T;
	type Output = Vector<T>;

	fn add_one(&mut self, item: T) {
		self.buffer.push(item);
	}

	fn result(&mut self) -> Vector<T> {
		Vector::new(std::mem::take(&mut self.buffer))
	}
}

/// Builder producing an [`Optional`] that holds the first element added.
///
/// Later elements are dropped.
#[derive(Debug, Clone)]
pub struct OptionalBuilder<T> {
	first: Option<T>,
}

impl<T> OptionalBuilder<T> {
	pub fn new() -> Self {
		Self { first: None }
	}
}

impl<T> Default for OptionalBuilder<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Builder for OptionalBuilder<T> {
	type Item = T;
	type Output = Optional<T>;

	fn add_one(&mut self, item: T) {
		if self.first.is_none() {
			self.first = Some(item);
		}
	}

	fn result(&mut self) -> Optional<T> {
		Optional::new(self.first.take())
	}
}

/// Builder that renders elements into one separator-joined `String`.
#[derive(Debug, Clone)]
pub struct JoinBuilder<T = String> {
	separator: String,
	buffer: String,
	started: bool,
	_item: PhantomData<fn(T)>,
}

impl<T> JoinBuilder<T> {
	pub fn new(separator: impl Into<String>) -> Self {
		Self {
			separator: separator.into(),
			buffer: String::new(),
			started: false,
			_item: PhantomData,
		}
	}
}

impl<T: std::fmt::Display> Builder for JoinBuilder<T> {
	type Item = T;
	type Output = String;

	fn add_one(&mut self, item: T) {
		use std::fmt::Write;

		if self.started {
			self.buffer.push_str(&self.separator);
		}
		self.started = true;
		// Writing into a String cannot fail.
		let _ = write!(self.buffer, "{item}");
	}

	fn result(&mut self) -> String {
		self.started = false;
		std::mem::take(&mut self.buffer)
	}
}
