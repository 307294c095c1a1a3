//! Equality and ordering for every result variant.
//!
//! Ordering laws:
//!
//! - Same alternative: delegate to the members.
//! - Different alternatives: value-active < error-active, always.
//! - Against a bare value: an error-active result is greater than any value.
//! - Against a [`Failure`]: a value-active result is less than any failure.
//!
//! Comparisons work across instantiations whenever the members compare, so
//! `Result<String, i32>` can be compared with `Result<&str, i64>` as long as
//! `String: PartialEq<&str>` and `i32: PartialEq<i64>` hold.

use std::cmp::Ordering;

use crate::failure::Failure;
use crate::reference::RefResult;
use crate::reference_mut::RefMutResult;
use crate::result::Result;
use crate::storage::Storage;
use crate::void::VoidResult;

fn storage_eq<A, B, X, Y>(
    lhs: &Storage<A, X>,
    rhs: &Storage<B, Y>,
    value_eq: impl FnOnce(&A, &B) -> bool,
    error_eq: impl FnOnce(&X, &Y) -> bool,
) -> bool {
    match (lhs, rhs) {
        (Storage::Value(a), Storage::Value(b)) => value_eq(a, b),
        (Storage::Error(x), Storage::Error(y)) => error_eq(x, y),
        _ => false,
    }
}

fn storage_partial_cmp<A, B, X, Y>(
    lhs: &Storage<A, X>,
    rhs: &Storage<B, Y>,
    value_cmp: impl FnOnce(&A, &B) -> Option<Ordering>,
    error_cmp: impl FnOnce(&X, &Y) -> Option<Ordering>,
) -> Option<Ordering> {
    match (lhs, rhs) {
        (Storage::Value(a), Storage::Value(b)) => value_cmp(a, b),
        (Storage::Error(x), Storage::Error(y)) => error_cmp(x, y),
        (Storage::Value(_), Storage::Error(_)) => Some(Ordering::Less),
        (Storage::Error(_), Storage::Value(_)) => Some(Ordering::Greater),
    }
}

fn storage_eq_failure<A, X, G>(lhs: &Storage<A, X>, failure: &Failure<G>) -> bool
where
    X: PartialEq<G>,
{
    lhs.error_ref().is_some_and(|error| *error == *failure.error())
}

fn storage_cmp_failure<A, X, G>(lhs: &Storage<A, X>, failure: &Failure<G>) -> Option<Ordering>
where
    X: PartialOrd<G>,
{
    match lhs {
        Storage::Value(_) => Some(Ordering::Less),
        Storage::Error(error) => error.partial_cmp(failure.error()),
    }
}

fn storage_cmp_value<A, X, U: ?Sized>(
    lhs: &Storage<A, X>,
    value: &U,
    value_cmp: impl FnOnce(&A, &U) -> Option<Ordering>,
) -> Option<Ordering> {
    match lhs {
        Storage::Value(held) => value_cmp(held, value),
        Storage::Error(_) => Some(Ordering::Greater),
    }
}

// Storage

impl<T, E, U, G> PartialEq<Storage<U, G>> for Storage<T, E>
where
    T: PartialEq<U>,
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &Storage<U, G>) -> bool {
        storage_eq(self, other, |a, b| *a == *b, |x, y| *x == *y)
    }
}

impl<T: Eq, E: Eq> Eq for Storage<T, E> {}

impl<T, E, U, G> PartialOrd<Storage<U, G>> for Storage<T, E>
where
    T: PartialOrd<U>,
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &Storage<U, G>) -> Option<Ordering> {
        storage_partial_cmp(
            self,
            other,
            <T as PartialOrd<U>>::partial_cmp,
            <E as PartialOrd<G>>::partial_cmp,
        )
    }
}

impl<T: Ord, E: Ord> Ord for Storage<T, E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a.cmp(b),
            (Self::Error(x), Self::Error(y)) => x.cmp(y),
            (Self::Value(_), Self::Error(_)) => Ordering::Less,
            (Self::Error(_), Self::Value(_)) => Ordering::Greater,
        }
    }
}

// Result

impl<T, E, U, G> PartialEq<Result<U, G>> for Result<T, E>
where
    T: PartialEq<U>,
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &Result<U, G>) -> bool {
        self.storage == other.storage
    }
}

impl<T: Eq, E: Eq> Eq for Result<T, E> {}

impl<T, E, U, G> PartialOrd<Result<U, G>> for Result<T, E>
where
    T: PartialOrd<U>,
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &Result<U, G>) -> Option<Ordering> {
        self.storage.partial_cmp(&other.storage)
    }
}

impl<T: Ord, E: Ord> Ord for Result<T, E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.storage.cmp(&other.storage)
    }
}

impl<T, E, G> PartialEq<Failure<G>> for Result<T, E>
where
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &Failure<G>) -> bool {
        storage_eq_failure(&self.storage, other)
    }
}

impl<T, E, G> PartialOrd<Failure<G>> for Result<T, E>
where
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &Failure<G>) -> Option<Ordering> {
        storage_cmp_failure(&self.storage, other)
    }
}

impl<G, T, E> PartialEq<Result<T, E>> for Failure<G>
where
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &Result<T, E>) -> bool {
        storage_eq_failure(&other.storage, self)
    }
}

impl<G, T, E> PartialOrd<Result<T, E>> for Failure<G>
where
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &Result<T, E>) -> Option<Ordering> {
        storage_cmp_failure(&other.storage, self).map(Ordering::reverse)
    }
}

impl<'b, T, E, U, G> PartialEq<RefResult<'b, U, G>> for Result<T, E>
where
    T: PartialEq<U>,
    U: ?Sized,
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &RefResult<'b, U, G>) -> bool {
        storage_eq(&self.storage, &other.storage, |a, b| a.eq(*b), |x, y| *x == *y)
    }
}

impl<'b, T, E, U, G> PartialOrd<RefResult<'b, U, G>> for Result<T, E>
where
    T: PartialOrd<U>,
    U: ?Sized,
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &RefResult<'b, U, G>) -> Option<Ordering> {
        storage_partial_cmp(
            &self.storage,
            &other.storage,
            |a, b| a.partial_cmp(*b),
            <E as PartialOrd<G>>::partial_cmp,
        )
    }
}

impl<T, E> Result<T, E> {
    /// Whether the value state is active and holds something equal to `value`.
    #[inline]
    pub fn eq_value<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.storage.value_ref().is_some_and(|held| held.eq(value))
    }

    /// Order against a bare value. An error-active result is greater than
    /// every value.
    ///
    /// For the value-on-left direction, reverse the ordering:
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use resultant_core::{fail, Result};
    ///
    /// let r: Result<i32, String> = fail("late".to_string()).into();
    /// let value_vs_result = r.partial_cmp_value(&7).map(Ordering::reverse);
    /// assert_eq!(value_vs_result, Some(Ordering::Less));
    /// ```
    #[inline]
    pub fn partial_cmp_value<U>(&self, value: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
        U: ?Sized,
    {
        storage_cmp_value(&self.storage, value, <T as PartialOrd<U>>::partial_cmp)
    }
}

// VoidResult

impl<E, G> PartialEq<VoidResult<G>> for VoidResult<E>
where
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &VoidResult<G>) -> bool {
        self.storage == other.storage
    }
}

impl<E: Eq> Eq for VoidResult<E> {}

impl<E, G> PartialOrd<VoidResult<G>> for VoidResult<E>
where
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &VoidResult<G>) -> Option<Ordering> {
        self.storage.partial_cmp(&other.storage)
    }
}

impl<E: Ord> Ord for VoidResult<E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.storage.cmp(&other.storage)
    }
}

impl<E, G> PartialEq<Failure<G>> for VoidResult<E>
where
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &Failure<G>) -> bool {
        storage_eq_failure(&self.storage, other)
    }
}

impl<E, G> PartialOrd<Failure<G>> for VoidResult<E>
where
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &Failure<G>) -> Option<Ordering> {
        storage_cmp_failure(&self.storage, other)
    }
}

impl<G, E> PartialEq<VoidResult<E>> for Failure<G>
where
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &VoidResult<E>) -> bool {
        storage_eq_failure(&other.storage, self)
    }
}

impl<G, E> PartialOrd<VoidResult<E>> for Failure<G>
where
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &VoidResult<E>) -> Option<Ordering> {
        storage_cmp_failure(&other.storage, self).map(Ordering::reverse)
    }
}

// RefResult

impl<'b, T, E, U, G> PartialEq<RefResult<'b, U, G>> for RefResult<'_, T, E>
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &RefResult<'b, U, G>) -> bool {
        self.storage == other.storage
    }
}

impl<T: Eq + ?Sized, E: Eq> Eq for RefResult<'_, T, E> {}

impl<'b, T, E, U, G> PartialOrd<RefResult<'b, U, G>> for RefResult<'_, T, E>
where
    T: PartialOrd<U> + ?Sized,
    U: ?Sized,
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &RefResult<'b, U, G>) -> Option<Ordering> {
        self.storage.partial_cmp(&other.storage)
    }
}

impl<T: Ord + ?Sized, E: Ord> Ord for RefResult<'_, T, E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.storage.cmp(&other.storage)
    }
}

impl<T, E, U, G> PartialEq<Result<U, G>> for RefResult<'_, T, E>
where
    T: PartialEq<U> + ?Sized,
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &Result<U, G>) -> bool {
        storage_eq(&self.storage, &other.storage, |a, b| (*a).eq(b), |x, y| *x == *y)
    }
}

impl<T, E, U, G> PartialOrd<Result<U, G>> for RefResult<'_, T, E>
where
    T: PartialOrd<U> + ?Sized,
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &Result<U, G>) -> Option<Ordering> {
        storage_partial_cmp(
            &self.storage,
            &other.storage,
            |a, b| (*a).partial_cmp(b),
            <E as PartialOrd<G>>::partial_cmp,
        )
    }
}

impl<T: ?Sized, E, G> PartialEq<Failure<G>> for RefResult<'_, T, E>
where
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &Failure<G>) -> bool {
        storage_eq_failure(&self.storage, other)
    }
}

impl<T: ?Sized, E, G> PartialOrd<Failure<G>> for RefResult<'_, T, E>
where
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &Failure<G>) -> Option<Ordering> {
        storage_cmp_failure(&self.storage, other)
    }
}

impl<G, T: ?Sized, E> PartialEq<RefResult<'_, T, E>> for Failure<G>
where
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &RefResult<'_, T, E>) -> bool {
        storage_eq_failure(&other.storage, self)
    }
}

impl<G, T: ?Sized, E> PartialOrd<RefResult<'_, T, E>> for Failure<G>
where
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &RefResult<'_, T, E>) -> Option<Ordering> {
        storage_cmp_failure(&other.storage, self).map(Ordering::reverse)
    }
}

impl<T: ?Sized, E> RefResult<'_, T, E> {
    /// Whether a value is bound and its referent equals `value`.
    #[inline]
    pub fn eq_value<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.storage.value_ref().is_some_and(|held| (**held).eq(value))
    }

    /// Order the referent against a bare value. An error-active result is
    /// greater than every value.
    ///
    /// Reverse the result for the value-on-left direction:
    /// `r.partial_cmp_value(v).map(Ordering::reverse)` orders `v` against `r`.
    #[inline]
    pub fn partial_cmp_value<U>(&self, value: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
        U: ?Sized,
    {
        storage_cmp_value(&self.storage, value, |held, value| (**held).partial_cmp(value))
    }
}

// RefMutResult

impl<'b, T, E, U, G> PartialEq<RefMutResult<'b, U, G>> for RefMutResult<'_, T, E>
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &RefMutResult<'b, U, G>) -> bool {
        storage_eq(&self.storage, &other.storage, |a, b| (**a).eq(&**b), |x, y| *x == *y)
    }
}

impl<T: Eq + ?Sized, E: Eq> Eq for RefMutResult<'_, T, E> {}

impl<'b, T, E, U, G> PartialOrd<RefMutResult<'b, U, G>> for RefMutResult<'_, T, E>
where
    T: PartialOrd<U> + ?Sized,
    U: ?Sized,
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &RefMutResult<'b, U, G>) -> Option<Ordering> {
        storage_partial_cmp(
            &self.storage,
            &other.storage,
            |a, b| (**a).partial_cmp(&**b),
            <E as PartialOrd<G>>::partial_cmp,
        )
    }
}

impl<T: ?Sized, E, G> PartialEq<Failure<G>> for RefMutResult<'_, T, E>
where
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &Failure<G>) -> bool {
        storage_eq_failure(&self.storage, other)
    }
}

impl<T: ?Sized, E, G> PartialOrd<Failure<G>> for RefMutResult<'_, T, E>
where
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &Failure<G>) -> Option<Ordering> {
        storage_cmp_failure(&self.storage, other)
    }
}

impl<G, T: ?Sized, E> PartialEq<RefMutResult<'_, T, E>> for Failure<G>
where
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &RefMutResult<'_, T, E>) -> bool {
        storage_eq_failure(&other.storage, self)
    }
}

impl<G, T: ?Sized, E> PartialOrd<RefMutResult<'_, T, E>> for Failure<G>
where
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &RefMutResult<'_, T, E>) -> Option<Ordering> {
        storage_cmp_failure(&other.storage, self).map(Ordering::reverse)
    }
}

impl<T: ?Sized, E> RefMutResult<'_, T, E> {
    /// Whether a value is bound and its referent equals `value`.
    #[inline]
    pub fn eq_value<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.storage.value_ref().is_some_and(|held| (**held).eq(value))
    }

    /// Order the referent against a bare value. An error-active result is
    /// greater than every value.
    #[inline]
    pub fn partial_cmp_value<U>(&self, value: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
        U: ?Sized,
    {
        storage_cmp_value(&self.storage, value, |held, value| (**held).partial_cmp(value))
    }
}
