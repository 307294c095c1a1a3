//! The generic value-or-error container.
//!
//! A [`Result`] holds exactly one of a value `T` or an error `E`. Errors are
//! ordinary values: nothing here unwinds. Reading a value that is not there
//! is reported as [`BadResultAccess`] instead.
//!
//! # Examples
//!
//! ```
//! use resultant_core::{fail, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Result::new(port),
//!         Err(e) => fail(e.to_string()).into(),
//!     }
//! }
//!
//! let port = parse_port("8080").map(u32::from);
//! assert_eq!(port.value_or(0_u32), 8080);
//! assert!(parse_port("http").has_error());
//! ```

use std::fmt;

use either::Either;

use crate::error::{BadResultAccess, ConversionError};
use crate::failure::Failure;
use crate::outcome::Outcome;
use crate::propagation::stage_then_commit;
use crate::storage::Storage;
use crate::void::VoidResult;

/// Holds either a value of type `T` or an error of type `E`.
///
/// `Result<T, E>` is `Copy` when both `T` and `E` are, and has no drop glue
/// when neither has.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Result<T, E> {
    pub(crate) storage: Storage<T, E>,
}

impl<T, E> Result<T, E> {
    // ---------------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------------

    /// Create a result holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            storage: Storage::construct_value(value),
        }
    }

    /// Create a result holding a value built from `args`.
    #[inline]
    pub fn in_place<A>(args: A) -> Self
    where
        T: From<A>,
    {
        Self::new(T::from(args))
    }

    /// Create a result holding a value collected from `items`.
    #[inline]
    pub fn in_place_from_iter<I>(items: I) -> Self
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        Self::new(items.into_iter().collect())
    }

    /// Create a result holding a value built from `args` by a fallible
    /// conversion.
    ///
    /// # Errors
    ///
    /// Returns the conversion error when `T::try_from(args)` fails.
    #[inline]
    pub fn try_in_place<A>(args: A) -> std::result::Result<Self, T::Error>
    where
        T: TryFrom<A>,
    {
        T::try_from(args).map(Self::new)
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

    /// Convert from another instantiation, keeping the active alternative.
    #[inline]
    pub fn from_result<T2, E2>(other: Result<T2, E2>) -> Self
    where
        T: From<T2>,
        E: From<E2>,
    {
        Self {
            storage: other.storage.map_value(T::from).map_error(E::from),
        }
    }

    /// Convert from another instantiation through fallible conversions.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Value`] or [`ConversionError::Error`]
    /// depending on which active member failed to convert.
    #[inline]
    pub fn try_from_result<T2, E2>(
        other: Result<T2, E2>,
    ) -> std::result::Result<Self, ConversionError<T::Error, E::Error>>
    where
        T: TryFrom<T2>,
        E: TryFrom<E2>,
    {
        let storage = match other.storage {
            Storage::Value(value) => T::try_from(value)
                .map(Storage::construct_value)
                .map_err(ConversionError::Value),
            Storage::Error(error) => E::try_from(error)
                .map(Storage::construct_error)
                .map_err(ConversionError::Error),
        };
        storage.map(|storage| Self { storage })
    }

    /// Adopt a standard library result.
    #[inline]
    pub fn from_std(result: std::result::Result<T, E>) -> Self {
        Self {
            storage: Storage::from_std(result),
        }
    }

    // ---------------------------------------------------------------------
    // Assignment
    // ---------------------------------------------------------------------

    /// Replace the whole state with a converted copy of `other`.
    #[inline]
    pub fn assign<T2, E2>(&mut self, other: Result<T2, E2>)
    where
        T: From<T2>,
        E: From<E2>,
    {
        self.storage.reconstruct(Self::from_result(other).storage);
    }

    /// Replace the whole state with `other` through fallible conversions.
    ///
    /// The conversion runs before `self` is touched, so on error `self`
    /// still holds its previous state.
    ///
    /// # Errors
    ///
    /// Returns the [`ConversionError`] of the failed member conversion.
    #[inline]
    pub fn try_assign<T2, E2>(
        &mut self,
        other: Result<T2, E2>,
    ) -> std::result::Result<(), ConversionError<T::Error, E::Error>>
    where
        T: TryFrom<T2>,
        E: TryFrom<E2>,
    {
        stage_then_commit(&mut self.storage, || {
            Self::try_from_result(other).map(|staged| staged.storage)
        })
    }

    /// Replace the state with a value converted from `value`.
    #[inline]
    pub fn assign_value<U>(&mut self, value: U)
    where
        T: From<U>,
    {
        self.storage.reconstruct(Storage::construct_value(T::from(value)));
    }

    /// Replace the state with a value converted fallibly from `value`.
    ///
    /// # Errors
    ///
    /// Returns the conversion error; `self` is unchanged in that case.
    #[inline]
    pub fn try_assign_value<U>(&mut self, value: U) -> std::result::Result<(), T::Error>
    where
        T: TryFrom<U>,
    {
        stage_then_commit(&mut self.storage, || {
            T::try_from(value).map(Storage::construct_value)
        })
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

    /// Replace the state with a value built from `args`.
    #[inline]
    pub fn emplace<A>(&mut self, args: A)
    where
        T: From<A>,
    {
        self.assign_value(args);
    }

    /// Exchange states with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.storage, &mut other.storage);
    }

    // ---------------------------------------------------------------------
    // Observers
    // ---------------------------------------------------------------------

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

    /// Borrow the value.
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
            Storage::Value(value) => Ok(value),
            Storage::Error(error) => Err(BadResultAccess::new(error.clone())),
        }
    }

    /// Mutably borrow the value.
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
            Storage::Value(value) => Ok(value),
            Storage::Error(error) => Err(BadResultAccess::new(error.clone())),
        }
    }

    /// Take the value.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] owning the error when the result holds
    /// an error.
    #[inline]
    pub fn into_value(self) -> std::result::Result<T, BadResultAccess<E>> {
        self.storage.into_std().map_err(BadResultAccess::new)
    }

    /// Borrow the value, attaching `message` to the access error.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying `message` and a copy of the error
    /// when the result holds an error.
    #[inline]
    pub fn expect(
        &self,
        message: impl Into<std::borrow::Cow<'static, str>>,
    ) -> std::result::Result<&T, BadResultAccess<E>>
    where
        E: Clone,
    {
        match &self.storage {
            Storage::Value(value) => Ok(value),
            Storage::Error(error) => Err(BadResultAccess::with_message(error.clone(), message)),
        }
    }

    /// Take the value, attaching `message` to the access error.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] carrying `message` and the error when the
    /// result holds an error.
    #[inline]
    pub fn into_expect(
        self,
        message: impl Into<std::borrow::Cow<'static, str>>,
    ) -> std::result::Result<T, BadResultAccess<E>> {
        self.storage
            .into_std()
            .map_err(|error| BadResultAccess::with_message(error, message))
    }

    /// A copy of the error, or `E::default()` when a value is held.
    #[inline]
    #[must_use]
    pub fn error(&self) -> E
    where
        E: Clone + Default,
    {
        self.storage.error_ref().cloned().unwrap_or_default()
    }

    /// Take the error, or `E::default()` when a value is held.
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

    /// The value, or `default` converted into `T` when an error is held.
    #[inline]
    pub fn value_or<U>(self, default: U) -> T
    where
        U: Into<T>,
    {
        match self.storage {
            Storage::Value(value) => value,
            Storage::Error(_) => default.into(),
        }
    }

    /// The error, or `fallback` converted into `E` when a value is held.
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

    /// View the active member by reference.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        Result {
            storage: self.storage.as_ref(),
        }
    }

    /// View the active member by mutable reference.
    #[inline]
    pub const fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        Result {
            storage: self.storage.as_mut(),
        }
    }

    // ---------------------------------------------------------------------
    // Combinators
    // ---------------------------------------------------------------------

    /// Apply `f` to the value; an error is carried over untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Result {
            storage: self.storage.map_value(f),
        }
    }

    /// Apply a unit-returning `f` to the value, collapsing to [`VoidResult`].
    #[inline]
    pub fn map_unit<F>(self, f: F) -> VoidResult<E>
    where
        F: FnOnce(T),
    {
        VoidResult {
            storage: self.storage.map_value(f),
        }
    }

    /// Chain a computation that itself produces an outcome.
    ///
    /// When an error is held, `f` is not called and the error is re-typed
    /// into the returned outcome.
    #[inline]
    pub fn flat_map<R, F>(self, f: F) -> R
    where
        F: FnOnce(T) -> R,
        R: Outcome + From<Failure<E>>,
    {
        match self.storage {
            Storage::Value(value) => f(value),
            Storage::Error(error) => R::from(Failure::new(error)),
        }
    }

    /// Apply `f` to the error; a value is carried over untouched.
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        Result {
            storage: self.storage.map_error(f),
        }
    }

    /// Recover from an error with a computation that produces an outcome.
    ///
    /// When a value is held, `f` is not called and the returned outcome holds
    /// its default value. The original value is not carried over.
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

    /// Substitute `replacement` for the value; an error is carried over.
    ///
    /// `replacement` is a constant, not a function of the current value.
    #[inline]
    pub fn and_then<U>(self, replacement: U) -> Result<U, E> {
        self.map(|_| replacement)
    }

    // ---------------------------------------------------------------------
    // Interop
    // ---------------------------------------------------------------------

    /// Convert into a standard library result.
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, E> {
        self.storage.into_std()
    }

    /// Convert into an [`Either`] with the error on the left.
    #[inline]
    pub fn into_either(self) -> Either<E, T> {
        match self.storage {
            Storage::Value(value) => Either::Right(value),
            Storage::Error(error) => Either::Left(error),
        }
    }
}

impl<T, E> Outcome for Result<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn has_value(&self) -> bool {
        self.storage.is_value()
    }

    #[inline]
    fn value_ref(&self) -> Option<&T> {
        self.storage.value_ref()
    }

    #[inline]
    fn error_ref(&self) -> Option<&E> {
        self.storage.error_ref()
    }

    #[inline]
    fn into_std(self) -> std::result::Result<T, E> {
        self.storage.into_std()
    }
}

/// A default result holds `T::default()`.
impl<T: Default, E> Default for Result<T, E> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, E: fmt::Debug> fmt::Debug for Result<T, E>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.storage, f)
    }
}

impl<T, E, G> From<Failure<G>> for Result<T, E>
where
    E: From<G>,
{
    #[inline]
    fn from(failure: Failure<G>) -> Self {
        Self::from_failure(failure)
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    #[inline]
    fn from(result: std::result::Result<T, E>) -> Self {
        Self::from_std(result)
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

impl<T, E> From<Either<E, T>> for Result<T, E> {
    #[inline]
    fn from(either: Either<E, T>) -> Self {
        match either {
            Either::Left(error) => Self::in_place_error(error),
            Either::Right(value) => Self::new(value),
        }
    }
}

/// Collects values until the first error, which becomes the result.
impl<T, E, V> FromIterator<Result<T, E>> for Result<V, E>
where
    V: FromIterator<T>,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        Self::from_std(iter.into_iter().map(Result::into_std).collect())
    }
}

/// Exchange the states of two results.
#[inline]
pub fn swap<T, E>(lhs: &mut Result<T, E>, rhs: &mut Result<T, E>) {
    lhs.swap(rhs);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::failure::fail;

    #[test]
    fn test_default_holds_default_value() {
        let r: Result<String, i32> = Result::default();
        assert!(r.has_value());
        assert_eq!(r.value().map(String::as_str), Ok(""));
    }

    #[test]
    fn test_new_holds_value() {
        let r: Result<i32, i32> = Result::new(42);
        assert!(r.has_value());
        assert!(!r.has_error());
        assert_eq!(r.value(), Ok(&42));
    }

    #[test]
    fn test_failure_holds_error() {
        let r: Result<i32, i32> = fail(42).into();
        assert!(r.has_error());
        assert_eq!(r.error(), 42);
    }

    #[test]
    fn test_value_on_error_reports_error() {
        let r: Result<i32, i32> = fail(42).into();
        let err = r.value().err();
        assert_eq!(err.map(BadResultAccess::into_error), Some(42));
    }

    #[test]
    fn test_expect_carries_message() {
        let r: Result<i32, &str> = fail("offline").into();
        let err = r.expect("network must be up").err();
        assert_eq!(err.as_ref().map(BadResultAccess::message), Some("network must be up"));
        assert_eq!(err.map(BadResultAccess::into_error), Some("offline"));
    }

    #[test]
    fn test_into_expect_on_value() {
        let r: Result<String, i32> = Result::new("ok".to_string());
        assert_eq!(r.into_expect("present"), Ok("ok".to_string()));
    }

    #[test]
    fn test_error_on_value_is_default() {
        let r: Result<i32, String> = Result::new(1);
        assert_eq!(r.error(), String::new());
        assert_eq!(r.into_error(), String::new());
    }

    #[test]
    fn test_in_place_builds_value() {
        let r: Result<String, i32> = Result::in_place("hello");
        assert_eq!(r.into_value().ok(), Some("hello".to_string()));
    }

    #[test]
    fn test_in_place_from_iter_builds_value() {
        let r: Result<Vec<i32>, ()> = Result::in_place_from_iter([1, 2, 3]);
        assert_eq!(r.into_std(), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_in_place_error_builds_error() {
        let r: Result<i32, String> = Result::in_place_error("bad");
        assert_eq!(r.error(), "bad");
    }

    #[test]
    fn test_in_place_error_from_iter_builds_error() {
        let r: Result<i32, String> = Result::in_place_error_from_iter(['a', 'b']);
        assert_eq!(r.error(), "ab");
    }

    #[test]
    fn test_try_in_place_narrowing() {
        let ok: std::result::Result<Result<u8, ()>, _> = Result::try_in_place(200_i32);
        assert!(ok.is_ok());
        let too_big: std::result::Result<Result<u8, ()>, _> = Result::try_in_place(300_i32);
        assert!(too_big.is_err());
    }

    #[test]
    fn test_from_result_widens_both_sides() {
        let narrow: Result<i32, u8> = Result::new(5);
        let wide: Result<i64, u16> = Result::from_result(narrow);
        assert_eq!(wide.into_std(), Ok(5_i64));

        let narrow: Result<i32, u8> = fail(3_u8).into();
        let wide: Result<i64, u16> = Result::from_result(narrow);
        assert_eq!(wide.into_std(), Err(3_u16));
    }

    #[test]
    fn test_try_from_result_reports_failing_side() {
        let big: Result<i64, i64> = Result::new(1 << 40);
        let narrowed = Result::<i32, i32>::try_from_result(big);
        assert!(matches!(narrowed, Err(ConversionError::Value(_))));

        let big: Result<i64, i64> = fail(1_i64 << 40).into();
        let narrowed = Result::<i32, i32>::try_from_result(big);
        assert!(matches!(narrowed, Err(ConversionError::Error(_))));
    }

    #[test]
    fn test_assign_switches_alternative() {
        let mut r: Result<i64, i64> = Result::new(1);
        r.assign(Result::<i32, i32>::from(fail(2)));
        assert_eq!(r.into_std(), Err(2));
    }

    #[test]
    fn test_try_assign_failure_keeps_state() {
        let mut r: Result<u8, u8> = Result::new(9);
        let outcome = r.try_assign(Result::<i32, i32>::new(1000));
        assert!(outcome.is_err());
        assert_eq!(r.value(), Ok(&9));
    }

    #[test]
    fn test_try_assign_success_replaces_state() {
        let mut r: Result<u8, u8> = Result::new(9);
        let outcome = r.try_assign(Result::<i32, i32>::from(fail(4)));
        assert!(outcome.is_ok());
        assert_eq!(r.into_std(), Err(4));
    }

    #[test]
    fn test_try_assign_value_failure_keeps_state() {
        let mut r: Result<u8, ()> = fail(()).into();
        assert!(r.try_assign_value(-1_i32).is_err());
        assert!(r.has_error());
        assert!(r.try_assign_value(7_i32).is_ok());
        assert_eq!(r.value(), Ok(&7));
    }

    #[test]
    fn test_assign_value_and_failure() {
        let mut r: Result<String, String> = Result::default();
        r.assign_failure(fail("e1"));
        assert_eq!(r.error(), "e1");
        r.assign_value("v1");
        assert_eq!(r.value().map(String::as_str), Ok("v1"));
    }

    #[test]
    fn test_emplace_replaces_error() {
        let mut r: Result<String, i32> = fail(3).into();
        r.emplace('x');
        assert_eq!(r.into_std(), Ok("x".to_string()));
    }

    #[test]
    fn test_value_mut_edits_value() {
        let mut r: Result<Vec<i32>, ()> = Result::new(vec![1]);
        if let Ok(values) = r.value_mut() {
            values.push(2);
        }
        assert_eq!(r.into_std(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_swap_value_and_error() {
        let mut a: Result<i32, i32> = Result::new(42);
        let mut b: Result<i32, i32> = fail(7).into();

        swap(&mut a, &mut b);

        assert_eq!(a.into_std(), Err(7));
        assert_eq!(b.into_std(), Ok(42));
    }

    #[test]
    fn test_map_doubles_value() {
        let r: Result<i32, i32> = Result::new(5);
        assert_eq!(r.map(|x| x.saturating_mul(2)).into_std(), Ok(10));
    }

    #[test]
    fn test_map_skips_on_error() {
        let called = Cell::new(false);
        let r: Result<i32, i32> = fail(1).into();
        let mapped = r.map(|x| {
            called.set(true);
            x
        });
        assert!(!called.get());
        assert_eq!(mapped.into_std(), Err(1));
    }

    #[test]
    fn test_map_unit_collapses_to_void() {
        let seen = Cell::new(0);
        let r: Result<i32, String> = Result::new(3);
        let v: VoidResult<String> = r.map_unit(|x| seen.set(x));
        assert!(v.has_value());
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn test_flat_map_chains() {
        let r: Result<i32, String> = Result::new(42);
        let out: Result<String, String> = r.flat_map(|x| Result::new(x.to_string()));
        assert_eq!(out.into_std(), Ok("42".to_string()));
    }

    #[test]
    fn test_flat_map_retypes_error() {
        let called = Cell::new(false);
        let r: Result<i32, u8> = fail(9_u8).into();
        let out: Result<String, u32> = r.flat_map(|x| {
            called.set(true);
            Result::new(x.to_string())
        });
        assert!(!called.get());
        assert_eq!(out.into_std(), Err(9_u32));
    }

    #[test]
    fn test_map_error_skips_on_value() {
        let called = Cell::new(false);
        let r: Result<i32, i32> = Result::new(1);
        let mapped: Result<i32, String> = r.map_error(|e| {
            called.set(true);
            e.to_string()
        });
        assert!(!called.get());
        assert_eq!(mapped.into_std(), Ok(1));
    }

    #[test]
    fn test_flat_map_error_recovers() {
        let r: Result<i32, String> = fail("retry".to_string()).into();
        let out: Result<i32, ()> =
            r.flat_map_error(|e| Result::new(i32::try_from(e.len()).unwrap_or(0)));
        assert_eq!(out.into_std(), Ok(5));
    }

    #[test]
    fn test_flat_map_error_on_value_defaults() {
        let r: Result<i32, String> = Result::new(42);
        let out: Result<i64, ()> = r.flat_map_error(|_| Result::new(99));
        assert_eq!(out.into_std(), Ok(0));
    }

    #[test]
    fn test_and_then_substitutes_constant() {
        let r: Result<i32, String> = Result::default();
        assert_eq!(r.and_then("done").into_std(), Ok("done"));

        let r: Result<i32, String> = fail("nope".to_string()).into();
        assert_eq!(r.and_then("done").into_std(), Err("nope".to_string()));
    }

    #[test]
    fn test_error_or() {
        let r: Result<i32, String> = Result::new(1);
        assert_eq!(r.error_or("fallback"), "fallback");

        let r: Result<i32, String> = fail("real".to_string()).into();
        assert_eq!(r.error_or("fallback"), "real");
    }

    #[test]
    fn test_value_or() {
        let r: Result<i64, ()> = fail(()).into();
        assert_eq!(r.value_or(7_i32), 7);
    }

    #[test]
    fn test_as_ref_borrows() {
        let r: Result<String, String> = Result::new("x".to_string());
        let len = r.as_ref().map(String::len).value_or(0_usize);
        assert_eq!(len, 1);
        assert!(r.has_value());
    }

    #[test]
    fn test_either_round_trip() {
        let r: Result<i32, String> = Result::new(1);
        assert_eq!(r.into_either(), Either::Right(1));

        let r: Result<i32, String> = Either::Left("e".to_string()).into();
        assert!(r.has_error());
    }

    #[test]
    fn test_collect_stops_at_first_error() {
        let items: Vec<Result<i32, &str>> =
            vec![Result::new(1), fail("two").into(), fail("three").into()];
        let collected: Result<Vec<i32>, &str> = items.into_iter().collect();
        assert_eq!(collected.into_std(), Err("two"));

        let collected: Result<Vec<i32>, &str> = [1, 2].into_iter().map(Result::new).collect();
        assert_eq!(collected.into_std(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_std_conversions() {
        let r: Result<i32, i32> = Ok(3).into();
        let back: std::result::Result<i32, i32> = r.into();
        assert_eq!(back, Ok(3));
    }

    #[test]
    fn test_debug_shows_active_member() {
        let r: Result<i32, i32> = fail(4).into();
        assert_eq!(format!("{r:?}"), "Error(4)");
    }

    #[test]
    fn test_failure_views_active_error() {
        let error: Result<i32, String> = fail("lost".to_string()).into();
        assert_eq!(error.failure().map(|f| f.into_error().as_str()), Some("lost"));
        assert_eq!(error.failure().map(Failure::into_error), Some(&"lost".to_string()));

        let value: Result<i32, String> = Result::new(1);
        assert!(value.failure().is_none());
    }
}
