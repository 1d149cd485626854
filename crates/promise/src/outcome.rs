use roundabout_collections::Optional;


/// A classified outcome: exactly one of a success value or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<T, E> {
	Success(T),
	Failure(E),
}

impl<T, E> Try<T, E> {
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success(_))
	}

	pub fn is_failure(&self) -> bool {
		matches!(self, Self::Failure(_))
	}

	/// The success value, if this is a success.
	pub fn success(&self) -> Optional<&T> {
		match self {
			Self::Success(value) => Optional::some(value),
			Self::Failure(_) => Optional::none(),
		}
	}

	/// The failure, if this is a failure.
	pub fn failure(&self) -> Optional<&E> {
		match self {
			Self::Success(_) => Optional::none(),
			Self::Failure(error) => Optional::some(error),
		}
	}

	pub fn into_success(self) -> Optional<T> {
		self.into_result().ok().into()
	}

	pub fn into_failure(self) -> Optional<E> {
		self.into_result().err().into()
	}

	pub fn as_ref(&self) -> Try<&T, &E> {
		match self {
			Self::Success(value) => Try::Success(value),
			Self::Failure(error) => Try::Failure(error),
		}
	}

	/// Calls the handler matching this outcome.
	pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
	where
		S: FnOnce(T) -> R,
		F: FnOnce(E) -> R,
	{
		match self {
			Self::Success(value) => on_success(value),
			Self::Failure(error) => on_failure(error),
		}
	}

	pub fn map<U, F>(self, f: F) -> Try<U, E>
	where
		F: FnOnce(T) -> U,
	{
		self.match_with(|value| Try::Success(f(value)), Try::Failure)
	}

	pub fn map_error<G, F>(self, f: F) -> Try<T, G>
	where
		F: FnOnce(E) -> G,
	{
		self.match_with(Try::Success, |error| Try::Failure(f(error)))
	}

	/// The success value, or `f(error)` for a failure.
	pub fn recover<F>(self, f: F) -> T
	where
		F: FnOnce(E) -> T,
	{
		self.match_with(|value| value, f)
	}

	pub fn into_result(self) -> Result<T, E> {
		self.match_with(Ok, Err)
	}
}

impl<T, E> From<Result<T, E>> for Try<T, E> {
	fn from(result: Result<T, E>) -> Self {
		match result {
			Ok(value) => Self::Success(value),
			Err(error) => Self::Failure(error),
		}
	}
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
	fn from(outcome: Try<T, E>) -> Self {
		outcome.into_result()
	}
}
