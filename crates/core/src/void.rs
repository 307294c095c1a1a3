//! Result variant whose value state carries no payload.

use std::borrow::Cow;
use std::fmt;

use crate::error::BadResultAccess;
use crate::failure::Failure;
use crate::outcome::Outcome;
use crate::result::Result;
use crate::storage::Storage;

/// Either success (no payload) or an error of type `E`.
///
/// Success is the default state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VoidResult<E> {
    pub(crate) storage: Storage<(), E>,
}

impl<E> VoidResult<E> {
    /// Create a successful result.
    #[inline]
    pub const fn success() -> Self {
        Self {
            storage: Storage::construct_value(()),
        }
    }

    /// Create a result holding an error built from `args`.
    #[inline]
    pub fn in_place_error<A>(args: A) -> Self
    where
        E: From<A>,
    {
        Self {
            storage: Storage::construct_error(E::from(args)),
        }
    }

    /// Create a result holding an error collected from `items`.
    #[inline]
    pub fn in_place_error_from_iter<I>(items: I) -> Self
    where
        I: IntoIterator,
        E: FromIterator<I::Item>,
    {
        Self {
            storage: Storage::construct_error(items.into_iter().collect()),
        }
    }

    /// Create a result holding the error carried by `failure`.
    #[inline]
    pub fn from_failure<G>(failure: Failure<G>) -> Self
    where
        E: From<G>,
    {
        Self::in_place_error(failure.into_error())
    }

    /// Convert from a void result over another error type.
    #[inline]
    pub fn from_void<G>(other: VoidResult<G>) -> Self
    where
        E: From<G>,
    {
        Self {
            storage: other.storage.map_error(E::from),
        }
    }

    /// Convert from a void result through a fallible error conversion.
    ///
    /// # Errors
    ///
    /// Returns the conversion error when the held error cannot be converted.
    #[inline]
    pub fn try_from_void<G>(other: VoidResult<G>) -> std::result::Result<Self, E::Error>
    where
        E: TryFrom<G>,
    {
        match other.storage {
            Storage::Value(()) => Ok(Self::success()),
            Storage::Error(error) => E::try_from(error).map(Self::in_place_error),
        }
    }

    /// Keep only the state of `other`, discarding any value it holds.
    #[inline]
    pub fn from_result<T, G>(other: Result<T, G>) -> Self
    where
        E: From<G>,
    {
        Self {
            storage: other.storage.map_value(drop).map_error(E::from),
        }
    }

    /// Adopt a standard library result.
    #[inline]
    pub fn from_std(result: std::result::Result<(), E>) -> Self {
        Self {
            storage: Storage::from_std(result),
        }
    }

    /// Replace the whole state with a converted copy of `other`.
    #[inline]
    pub fn assign<G>(&mut self, other: VoidResult<G>)
    where
        E: From<G>,
    {
        self.storage.reconstruct(Self::from_void(other).storage);
    }

    /// Replace the state with the error carried by `failure`.
    #[inline]
    pub fn assign_failure<G>(&mut self, failure: Failure<G>)
    where
        E: From<G>,
    {
        self.storage
            .reconstruct(Storage::construct_error(E::from(failure.into_error())));
    }

    /// Switch to the success state, dropping any held error.
    #[inline]
    pub fn emplace(&mut self) {
        self.storage.reconstruct(Storage::construct_value(()));
    }

    /// Exchange states with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.storage, &mut other.storage);
    }

    #[inline]
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.storage.is_value()
    }

    #[inline]
    #[must_use]
    pub const fn has_error(&self) -> bool {
        !self.storage.is_value()
    }

    /// Check for success.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying a copy of the error when the
    /// result holds an error.
    #[inline]
    pub fn value(&self) -> std::result::Result<(), BadResultAccess<E>>
    where
        E: Clone,
    {
        match &self.storage {
            Storage::Value(()) => Ok(()),
            Storage::Error(error) => Err(BadResultAccess::new(error.clone())),
        }
    }

    /// Check for success, attaching `message` to the access error.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying `message` and a copy of the error
    /// when the result holds an error.
    #[inline]
    pub fn expect(
        &self,
        message: impl Into<Cow<'static, str>>,
    ) -> std::result::Result<(), BadResultAccess<E>>
    where
        E: Clone,
    {
        match &self.storage {
            Storage::Value(()) => Ok(()),
            Storage::Error(error) => Err(BadResultAccess::with_message(error.clone(), message)),
        }
    }

    /// Consume and check for success, attaching `message` to the access error.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying `message` and the error when the
    /// result holds an error.
    #[inline]
    pub fn into_expect(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> std::result::Result<(), BadResultAccess<E>> {
        self.storage
            .into_std()
            .map_err(|error| BadResultAccess::with_message(error, message))
    }

    /// A copy of the error, or `E::default()` on success.
    #[inline]
    #[must_use]
    pub fn error(&self) -> E
    where
        E: Clone + Default,
    {
        self.storage.error_ref().cloned().unwrap_or_default()
    }

    /// Take the error, or `E::default()` on success.
    #[inline]
    pub fn into_error(self) -> E
    where
        E: Default,
    {
        self.storage.into_std().err().unwrap_or_default()
    }

    /// View the active error as a [`Failure`].
    #[inline]
    #[must_use]
    pub fn failure(&self) -> Option<Failure<&E>> {
        self.storage.error_ref().map(Failure::new)
    }

    /// The error, or `fallback` converted into `E` on success.
    #[inline]
    pub fn error_or<G>(self, fallback: G) -> E
    where
        G: Into<E>,
    {
        match self.storage {
            Storage::Value(()) => fallback.into(),
            Storage::Error(error) => error,
        }
    }

    /// Produce a value with `f` on success; an error is carried over.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce() -> U,
    {
        Result {
            storage: self.storage.map_value(|()| f()),
        }
    }

    /// Run `f` on success; an error is carried over.
    #[inline]
    pub fn map_unit<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        Self {
            storage: self.storage.map_value(|()| f()),
        }
    }

    /// Chain a computation that produces an outcome.
    ///
    /// When an error is held, `f` is not called and the error is re-typed
    /// into the returned outcome.
    #[inline]
    pub fn flat_map<R, F>(self, f: F) -> R
    where
        F: FnOnce() -> R,
        R: Outcome + From<Failure<E>>,
    {
        match self.storage {
            Storage::Value(()) => f(),
            Storage::Error(error) => R::from(Failure::new(error)),
        }
    }

    /// Apply `f` to the error; success is carried over.
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> VoidResult<G>
    where
        F: FnOnce(E) -> G,
    {
        VoidResult {
            storage: self.storage.map_error(f),
        }
    }

    /// Recover from an error with a computation that produces an outcome.
    ///
    /// On success `f` is not called and the returned outcome holds its
    /// default value.
    #[inline]
    pub fn flat_map_error<R, F>(self, f: F) -> R
    where
        F: FnOnce(E) -> R,
        R: Outcome + Default,
    {
        match self.storage {
            Storage::Value(()) => R::default(),
            Storage::Error(error) => f(error),
        }
    }

    /// Substitute `replacement` as the value on success; an error is
    /// carried over.
    #[inline]
    pub fn and_then<U>(self, replacement: U) -> Result<U, E> {
        self.map(|| replacement)
    }

    /// Convert into a standard library result.
    #[inline]
    pub fn into_std(self) -> std::result::Result<(), E> {
        self.storage.into_std()
    }
}

impl<E> Outcome for VoidResult<E> {
    type Value = ();
    type Error = E;

    #[inline]
    fn has_value(&self) -> bool {
        self.storage.is_value()
    }

    #[inline]
    fn value_ref(&self) -> Option<&()> {
        self.storage.value_ref()
    }

    #[inline]
    fn error_ref(&self) -> Option<&E> {
        self.storage.error_ref()
    }

    #[inline]
    fn into_std(self) -> std::result::Result<(), E> {
        self.storage.into_std()
    }
}

impl<E> Default for VoidResult<E> {
    #[inline]
    fn default() -> Self {
        Self::success()
    }
}

impl<E: fmt::Debug> fmt::Debug for VoidResult<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.storage, f)
    }
}

impl<E, G> From<Failure<G>> for VoidResult<E>
where
    E: From<G>,
{
    #[inline]
    fn from(failure: Failure<G>) -> Self {
        Self::from_failure(failure)
    }
}

impl<T, E, G> From<Result<T, G>> for VoidResult<E>
where
    E: From<G>,
{
    #[inline]
    fn from(result: Result<T, G>) -> Self {
        Self::from_result(result)
    }
}

impl<E> From<std::result::Result<(), E>> for VoidResult<E> {
    #[inline]
    fn from(result: std::result::Result<(), E>) -> Self {
        Self::from_std(result)
    }
}
