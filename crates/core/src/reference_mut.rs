//! Result variant whose value state mutably borrows its payload.
//!
//! The value alternative stores only `&'a mut T`, so writes through the
//! result land in the referent. The container is move-only: a unique borrow
//! cannot be duplicated, and assigning a new value rebinds it.

use std::borrow::Cow;
use std::fmt;

use crate::error::BadResultAccess;
use crate::failure::Failure;
use crate::outcome::Outcome;
use crate::reference::RefResult;
use crate::result::Result;
use crate::storage::Storage;
use crate::void::VoidResult;

/// Either a unique borrow `&'a mut T` or an owned error `E`.
///
/// Never `Clone` or `Copy`. Downgrade with [`RefMutResult::into_shared`]
/// when a copyable view is needed.
pub struct RefMutResult<'a, T: ?Sized, E> {
    pub(crate) storage: Storage<&'a mut T, E>,
}

impl<'a, T: ?Sized, E> RefMutResult<'a, T, E> {
    /// Bind to `value`.
    #[inline]
    pub const fn new(value: &'a mut T) -> Self {
        Self {
            storage: Storage::construct_value(value),
        }
    }

    /// Bind to the `T` viewed through `value`, such as `&mut [u8]` from
    /// `&mut Vec<u8>`.
    #[inline]
    pub fn bind<U>(value: &'a mut U) -> Self
    where
        U: AsMut<T> + ?Sized,
    {
        Self::new(<U as AsMut<T>>::as_mut(value))
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

    /// Create a result holding the error carried by `failure`.
    #[inline]
    pub fn from_failure<G>(failure: Failure<G>) -> Self
    where
        E: From<G>,
    {
        Self::in_place_error(failure.into_error())
    }

    /// Adopt a standard library result holding a unique borrow.
    #[inline]
    pub fn from_std(result: std::result::Result<&'a mut T, E>) -> Self {
        Self {
            storage: Storage::from_std(result),
        }
    }

    /// Rebind the value state to `value`, dropping any held error. The
    /// previous referent is released untouched.
    #[inline]
    pub fn rebind(&mut self, value: &'a mut T) {
        self.storage.reconstruct(Storage::construct_value(value));
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

    /// Read the referent.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying a copy of the error when the
    /// result holds an error.
    #[inline]
    pub fn value(&self) -> std::result::Result<&T, BadResultAccess<E>>
    where
        E: Clone,
    {
        match &self.storage {
            Storage::Value(value) => Ok(&**value),
            Storage::Error(error) => Err(BadResultAccess::new(error.clone())),
        }
    }

    /// Write access to the referent.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying a copy of the error when the
    /// result holds an error.
    #[inline]
    pub fn value_mut(&mut self) -> std::result::Result<&mut T, BadResultAccess<E>>
    where
        E: Clone,
    {
        match &mut self.storage {
            Storage::Value(value) => Ok(&mut **value),
            Storage::Error(error) => Err(BadResultAccess::new(error.clone())),
        }
    }

    /// Take the unique borrow back out.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] owning the error when the result holds
    /// an error.
    #[inline]
    pub fn into_value(self) -> std::result::Result<&'a mut T, BadResultAccess<E>> {
        self.storage.into_std().map_err(BadResultAccess::new)
    }

    /// Take the unique borrow, attaching `message` to the access error.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying `message` and the error when the
    /// result holds an error.
    #[inline]
    pub fn into_expect(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> std::result::Result<&'a mut T, BadResultAccess<E>> {
        self.storage
            .into_std()
            .map_err(|error| BadResultAccess::with_message(error, message))
    }

    /// Read the referent, attaching `message` to the access error.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying `message` and a copy of the error
    /// when the result holds an error.
    #[inline]
    pub fn expect(
        &self,
        message: impl Into<Cow<'static, str>>,
    ) -> std::result::Result<&T, BadResultAccess<E>>
    where
        E: Clone,
    {
        match &self.storage {
            Storage::Value(value) => Ok(&**value),
            Storage::Error(error) => Err(BadResultAccess::with_message(error.clone(), message)),
        }
    }

    /// A copy of the error, or `E::default()` when a value is bound.
    #[inline]
    #[must_use]
    pub fn error(&self) -> E
    where
        E: Clone + Default,
    {
        self.storage.error_ref().cloned().unwrap_or_default()
    }

    /// Take the error, or `E::default()` when a value is bound.
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

    /// The unique borrow, or `default` when an error is held.
    #[inline]
    pub fn value_or(self, default: &'a mut T) -> &'a mut T {
        match self.storage {
            Storage::Value(value) => value,
            Storage::Error(_) => default,
        }
    }

    /// The error, or `fallback` converted into `E` when a value is bound.
    #[inline]
    pub fn error_or<G>(self, fallback: G) -> E
    where
        G: Into<E>,
    {
        match self.storage {
            Storage::Value(_) => fallback.into(),
            Storage::Error(error) => error,
        }
    }

    /// Give up write access, keeping the binding as a shared borrow.
    #[inline]
    pub fn into_shared(self) -> RefResult<'a, T, E> {
        RefResult {
            storage: self.storage.map_value(|value| &*value),
        }
    }

    /// Apply `f` to the unique borrow; an error is carried over.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(&'a mut T) -> U,
    {
        Result {
            storage: self.storage.map_value(f),
        }
    }

    /// Apply a unit-returning `f` to the unique borrow, collapsing to
    /// [`VoidResult`].
    #[inline]
    pub fn map_unit<F>(self, f: F) -> VoidResult<E>
    where
        F: FnOnce(&'a mut T),
    {
        VoidResult {
            storage: self.storage.map_value(f),
        }
    }

    /// Chain a computation that produces an outcome.
    ///
    /// When an error is held, `f` is not called and the error is re-typed
    /// into the returned outcome.
    #[inline]
    pub fn flat_map<R, F>(self, f: F) -> R
    where
        F: FnOnce(&'a mut T) -> R,
        R: Outcome + From<Failure<E>>,
    {
        match self.storage {
            Storage::Value(value) => f(value),
            Storage::Error(error) => R::from(Failure::new(error)),
        }
    }

    /// Apply `f` to the error; the binding is carried over.
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> RefMutResult<'a, T, G>
    where
        F: FnOnce(E) -> G,
    {
        RefMutResult {
            storage: self.storage.map_error(f),
        }
    }

    /// Recover from an error with a computation that produces an outcome.
    ///
    /// When a value is bound, `f` is not called and the returned outcome
    /// holds its default value.
    #[inline]
    pub fn flat_map_error<R, F>(self, f: F) -> R
    where
        F: FnOnce(E) -> R,
        R: Outcome + Default,
    {
        match self.storage {
            Storage::Value(_) => R::default(),
            Storage::Error(error) => f(error),
        }
    }

    /// Substitute `replacement` for the unique borrow; an error is carried
    /// over.
    #[inline]
    pub fn and_then<U>(self, replacement: U) -> Result<U, E> {
        self.map(|_| replacement)
    }

    /// Convert into a standard library result.
    #[inline]
    pub fn into_std(self) -> std::result::Result<&'a mut T, E> {
        self.storage.into_std()
    }
}

impl<'a, T: ?Sized, E> Outcome for RefMutResult<'a, T, E> {
    type Value = &'a mut T;
    type Error = E;

    #[inline]
    fn has_value(&self) -> bool {
        self.storage.is_value()
    }

    #[inline]
    fn value_ref(&self) -> Option<&&'a mut T> {
        self.storage.value_ref()
    }

    #[inline]
    fn error_ref(&self) -> Option<&E> {
        self.storage.error_ref()
    }

    #[inline]
    fn into_std(self) -> std::result::Result<&'a mut T, E> {
        self.storage.into_std()
    }
}

impl<T: ?Sized + fmt::Debug, E: fmt::Debug> fmt::Debug for RefMutResult<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.storage, f)
    }
}

impl<'a, T: ?Sized, E> From<&'a mut T> for RefMutResult<'a, T, E> {
    #[inline]
    fn from(value: &'a mut T) -> Self {
        Self::new(value)
    }
}

impl<T: ?Sized, E, G> From<Failure<G>> for RefMutResult<'_, T, E>
where
    E: From<G>,
{
    #[inline]
    fn from(failure: Failure<G>) -> Self {
        Self::from_failure(failure)
    }
}

impl<'a, T: ?Sized, E> From<std::result::Result<&'a mut T, E>> for RefMutResult<'a, T, E> {
    #[inline]
    fn from(result: std::result::Result<&'a mut T, E>) -> Self {
        Self::from_std(result)
    }
}

impl<'a, T: ?Sized, E> From<RefMutResult<'a, T, E>> for RefResult<'a, T, E> {
    #[inline]
    fn from(result: RefMutResult<'a, T, E>) -> Self {
        result.into_shared()
    }
}
