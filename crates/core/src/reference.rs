//! Result variant whose value state borrows its payload.
//!
//! The value alternative stores only `&'a T`. Copying the container copies
//! the borrow, never the referent, and assigning a new value rebinds it.

use std::borrow::Cow;
use std::fmt;

use crate::error::BadResultAccess;
use crate::failure::Failure;
use crate::outcome::Outcome;
use crate::result::Result;
use crate::storage::Storage;
use crate::void::VoidResult;

/// Either a borrowed `&'a T` or an owned error `E`.
///
/// There is no default state: a value must always be bound to something.
pub struct RefResult<'a, T: ?Sized, E> {
    pub(crate) storage: Storage<&'a T, E>,
}

impl<'a, T: ?Sized, E> RefResult<'a, T, E> {
    /// Bind to `value`.
    #[inline]
    pub const fn new(value: &'a T) -> Self {
        Self {
            storage: Storage::construct_value(value),
        }
    }

    /// Bind to the `T` viewed through `value`, such as `&str` from `&String`.
    #[inline]
    pub fn bind<U>(value: &'a U) -> Self
    where
        U: AsRef<T> + ?Sized,
    {
        Self::new(<U as AsRef<T>>::as_ref(value))
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

    /// Convert from a borrowed result whose referent can be viewed as `T`.
    #[inline]
    pub fn from_ref_result<U, G>(other: RefResult<'a, U, G>) -> Self
    where
        U: AsRef<T> + ?Sized,
        E: From<G>,
    {
        Self {
            storage: other.storage.map_value(<U as AsRef<T>>::as_ref).map_error(E::from),
        }
    }

    /// Adopt a standard library result holding a borrow.
    #[inline]
    pub fn from_std(result: std::result::Result<&'a T, E>) -> Self {
        Self {
            storage: Storage::from_std(result),
        }
    }

    /// Rebind the value state to `value`, dropping any held error.
    #[inline]
    pub fn rebind(&mut self, value: &'a T) {
        self.storage.reconstruct(Storage::construct_value(value));
    }

    /// Replace the whole state with a converted copy of `other`.
    #[inline]
    pub fn assign<U, G>(&mut self, other: RefResult<'a, U, G>)
    where
        U: AsRef<T> + ?Sized,
        E: From<G>,
    {
        self.storage.reconstruct(Self::from_ref_result(other).storage);
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

    /// The bound reference. The referent is never copied.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying a copy of the error when the
    /// result holds an error.
    #[inline]
    pub fn value(&self) -> std::result::Result<&'a T, BadResultAccess<E>>
    where
        E: Clone,
    {
        match &self.storage {
            Storage::Value(value) => Ok(*value),
            Storage::Error(error) => Err(BadResultAccess::new(error.clone())),
        }
    }

    /// Take the bound reference.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] owning the error when the result holds
    /// an error.
    #[inline]
    pub fn into_value(self) -> std::result::Result<&'a T, BadResultAccess<E>> {
        self.storage.into_std().map_err(BadResultAccess::new)
    }

    /// The bound reference, attaching `message` to the access error.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying `message` and a copy of the error
    /// when the result holds an error.
    #[inline]
    pub fn expect(
        &self,
        message: impl Into<Cow<'static, str>>,
    ) -> std::result::Result<&'a T, BadResultAccess<E>>
    where
        E: Clone,
    {
        match &self.storage {
            Storage::Value(value) => Ok(*value),
            Storage::Error(error) => Err(BadResultAccess::with_message(error.clone(), message)),
        }
    }

    /// Take the bound reference, attaching `message` to the access error.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying `message` and the error when the
    /// result holds an error.
    #[inline]
    pub fn into_expect(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> std::result::Result<&'a T, BadResultAccess<E>> {
        self.storage
            .into_std()
            .map_err(|error| BadResultAccess::with_message(error, message))
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

    /// The bound reference, or `default` when an error is held.
    #[inline]
    pub fn value_or(self, default: &'a T) -> &'a T {
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

    /// Copy the referent out into an owning [`Result`].
    #[inline]
    pub fn cloned(self) -> Result<T, E>
    where
        T: Clone,
    {
        Result {
            storage: self.storage.map_value(T::clone),
        }
    }

    /// Apply `f` to the bound reference; an error is carried over.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(&'a T) -> U,
    {
        Result {
            storage: self.storage.map_value(f),
        }
    }

    /// Apply a unit-returning `f` to the bound reference, collapsing to
    /// [`VoidResult`].
    #[inline]
    pub fn map_unit<F>(self, f: F) -> VoidResult<E>
    where
        F: FnOnce(&'a T),
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
        F: FnOnce(&'a T) -> R,
        R: Outcome + From<Failure<E>>,
    {
        match self.storage {
            Storage::Value(value) => f(value),
            Storage::Error(error) => R::from(Failure::new(error)),
        }
    }

    /// Apply `f` to the error; the binding is carried over.
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> RefResult<'a, T, G>
    where
        F: FnOnce(E) -> G,
    {
        RefResult {
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

    /// Substitute `replacement` for the bound reference; an error is
    /// carried over.
    #[inline]
    pub fn and_then<U>(self, replacement: U) -> Result<U, E> {
        self.map(|_| replacement)
    }

    /// Convert into a standard library result.
    #[inline]
    pub fn into_std(self) -> std::result::Result<&'a T, E> {
        self.storage.into_std()
    }
}

impl<'a, T: ?Sized, E> Outcome for RefResult<'a, T, E> {
    type Value = &'a T;
    type Error = E;

    #[inline]
    fn has_value(&self) -> bool {
        self.storage.is_value()
    }

    #[inline]
    fn value_ref(&self) -> Option<&&'a T> {
        self.storage.value_ref()
    }

    #[inline]
    fn error_ref(&self) -> Option<&E> {
        self.storage.error_ref()
    }

    #[inline]
    fn into_std(self) -> std::result::Result<&'a T, E> {
        self.storage.into_std()
    }
}

impl<T: ?Sized + fmt::Debug, E: fmt::Debug> fmt::Debug for RefResult<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.storage, f)
    }
}

impl<'a, T: ?Sized, E> From<&'a T> for RefResult<'a, T, E> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Self::new(value)
    }
}

impl<T: ?Sized, E, G> From<Failure<G>> for RefResult<'_, T, E>
where
    E: From<G>,
{
    #[inline]
    fn from(failure: Failure<G>) -> Self {
        Self::from_failure(failure)
    }
}

impl<'a, T: ?Sized, E> From<std::result::Result<&'a T, E>> for RefResult<'a, T, E> {
    #[inline]
    fn from(result: std::result::Result<&'a T, E>) -> Self {
        Self::from_std(result)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::failure::fail;

    #[test]
    fn test_value_returns_same_address() {
        let owned = 42;
        let r: RefResult<'_, i32, String> = RefResult::new(&owned);
        assert!(r.value().is_ok_and(|v| std::ptr::eq(v, &owned)));
    }

    #[test]
    fn test_bind_views_through_as_ref() {
        let owned = String::from("hello");
        let r: RefResult<'_, str, ()> = RefResult::bind(&owned);
        assert_eq!(r.value(), Ok("hello"));
    }

    #[test]
    fn test_bind_to_slice() {
        let owned = vec![1, 2, 3];
        let r: RefResult<'_, [i32], ()> = RefResult::bind(&owned);
        assert_eq!(r.value().map(<[i32]>::len), Ok(3));
    }

    #[test]
    fn test_copy_rebinds_not_duplicates() {
        let owned = String::from("shared");
        let a: RefResult<'_, String, i32> = RefResult::new(&owned);
        let b = a;
        let (Ok(left), Ok(right)) = (a.value(), b.value()) else {
            return;
        };
        assert!(std::ptr::eq(left, right));
    }

    #[test]
    fn test_rebind_replaces_target() {
        let first = 1;
        let second = 2;
        let mut r: RefResult<'_, i32, ()> = RefResult::new(&first);
        r.rebind(&second);
        assert!(r.value().is_ok_and(|v| std::ptr::eq(v, &second)));
        assert_eq!(first, 1);
    }

    #[test]
    fn test_rebind_clears_error() {
        let target = 5;
        let mut r: RefResult<'_, i32, String> = fail("e".to_string()).into();
        r.rebind(&target);
        assert_eq!(r.value(), Ok(&5));
    }

    #[test]
    fn test_failure_and_access_error() {
        let r: RefResult<'_, i32, i32> = fail(42).into();
        assert!(r.has_error());
        assert_eq!(r.error(), 42);
        assert_eq!(r.value().map_err(BadResultAccess::into_error), Err(42));
        assert_eq!(
            r.expect("bound").map_err(|e| e.message().to_string()),
            Err("bound".to_string())
        );
    }

    #[test]
    fn test_from_ref_result_converts_view() {
        let owned = String::from("abc");
        let source: RefResult<'_, String, u8> = RefResult::new(&owned);
        let view: RefResult<'_, str, u16> = RefResult::from_ref_result(source);
        assert_eq!(view.into_std(), Ok("abc"));
    }

    #[test]
    fn test_assign_and_failure() {
        let owned = String::from("x");
        let mut r: RefResult<'_, str, u16> = RefResult::new("start");
        r.assign(RefResult::<String, u8>::new(&owned));
        assert_eq!(r.value(), Ok("x"));
        r.assign_failure(fail(3_u8));
        assert_eq!(r.error(), 3);
    }

    #[test]
    fn test_cloned_copies_referent() {
        let owned = String::from("copy me");
        let r: RefResult<'_, String, ()> = RefResult::new(&owned);
        assert_eq!(r.cloned().into_std(), Ok("copy me".to_string()));
    }

    #[test]
    fn test_map_receives_reference() {
        let owned = vec![1, 2, 3];
        let r: RefResult<'_, Vec<i32>, ()> = RefResult::new(&owned);
        assert_eq!(r.map(Vec::len).into_std(), Ok(3));
    }

    #[test]
    fn test_map_skips_on_error() {
        let called = Cell::new(false);
        let r: RefResult<'_, i32, i32> = fail(1).into();
        let out = r.map(|v| {
            called.set(true);
            *v
        });
        assert!(!called.get());
        assert_eq!(out.into_std(), Err(1));
    }

    #[test]
    fn test_combinators() {
        let owned = 10;
        let r: RefResult<'_, i32, u8> = RefResult::new(&owned);
        let chained: Result<i32, u8> = r.flat_map(|v| Result::new(v.saturating_add(1)));
        assert_eq!(chained.into_std(), Ok(11));

        let r: RefResult<'_, i32, u8> = fail(4_u8).into();
        assert_eq!(r.map_error(u32::from).error(), 4_u32);

        let r: RefResult<'_, i32, u8> = fail(4_u8).into();
        let recovered: Result<i32, ()> = r.flat_map_error(|e| Result::new(i32::from(e)));
        assert_eq!(recovered.into_std(), Ok(4));

        let r: RefResult<'_, i32, u8> = RefResult::new(&owned);
        assert_eq!(r.and_then("swapped").into_std(), Ok("swapped"));

        let r: RefResult<'_, i32, u8> = RefResult::new(&owned);
        assert_eq!(r.error_or(1_u8), 1);
    }

    #[test]
    fn test_value_or_falls_back() {
        let fallback = 0;
        let r: RefResult<'_, i32, ()> = fail(()).into();
        assert!(std::ptr::eq(r.value_or(&fallback), &fallback));
    }

    #[test]
    fn test_swap() {
        let target = 1;
        let mut a: RefResult<'_, i32, i32> = RefResult::new(&target);
        let mut b: RefResult<'_, i32, i32> = fail(2).into();
        a.swap(&mut b);
        assert!(a.has_error());
        assert_eq!(b.value(), Ok(&1));
    }

    #[test]
    fn test_failure_views_active_error() {
        let target = 1;
        let bound: RefResult<'_, i32, u8> = RefResult::new(&target);
        assert!(bound.failure().is_none());

        let error: RefResult<'_, i32, u8> = fail(6_u8).into();
        assert_eq!(error.failure().map(|f| *f.into_error()), Some(6));
    }
}
