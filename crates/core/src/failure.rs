//! Error-only wrapper used to put a result into its error state.
//!
//! A bare `E` passed to a constructor is always read as a value. Wrapping it in
//! [`Failure`] (usually through [`fail`]) is how callers say "this is the
//! error", even when `T` and `E` are the same type.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Holds an error destined for a result's error state.
///
/// `Failure<&E>` is the non-owning form; build it with `fail(&error)`.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Failure<E> {
    error: E,
}

impl<E> Failure<E> {
    /// Wrap `error`.
    #[inline]
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// Build the error from `args`.
    #[inline]
    pub fn in_place<A>(args: A) -> Self
    where
        E: From<A>,
    {
        Self::new(E::from(args))
    }

    /// Build the error by collecting `items`.
    #[inline]
    pub fn in_place_from_iter<I>(items: I) -> Self
    where
        I: IntoIterator,
        E: FromIterator<I::Item>,
    {
        Self::new(items.into_iter().collect())
    }

    /// Convert into a failure over another error type.
    #[inline]
    pub fn convert<G>(self) -> Failure<G>
    where
        G: From<E>,
    {
        Failure::new(G::from(self.error))
    }

    /// Replace the held error with one converted from `error`.
    #[inline]
    pub fn assign<G>(&mut self, error: G)
    where
        E: From<G>,
    {
        self.error = E::from(error);
    }

    #[inline]
    #[must_use]
    pub const fn error(&self) -> &E {
        &self.error
    }

    #[inline]
    pub const fn error_mut(&mut self) -> &mut E {
        &mut self.error
    }

    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Exchange the held errors.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.error, &mut other.error);
    }
}

/// Wrap `error` as a [`Failure`], deducing its type.
///
/// ```
/// use resultant_core::{fail, Result};
///
/// let r: Result<i32, String> = fail("no route to host".to_string()).into();
/// assert!(r.has_error());
/// ```
#[inline]
pub const fn fail<E>(error: E) -> Failure<E> {
    Failure::new(error)
}

/// Build a [`Failure<E>`] from constructor arguments.
#[inline]
pub fn fail_with<E, A>(args: A) -> Failure<E>
where
    E: From<A>,
{
    Failure::in_place(args)
}

/// Build a [`Failure<E>`] by collecting `items` into `E`.
#[inline]
pub fn fail_from_iter<E, I>(items: I) -> Failure<E>
where
    I: IntoIterator,
    E: FromIterator<I::Item>,
{
    Failure::in_place_from_iter(items)
}

impl<E, G> PartialEq<Failure<G>> for Failure<E>
where
    E: PartialEq<G>,
{
    #[inline]
    fn eq(&self, other: &Failure<G>) -> bool {
        self.error == other.error
    }
}

impl<E, G> PartialOrd<Failure<G>> for Failure<E>
where
    E: PartialOrd<G>,
{
    #[inline]
    fn partial_cmp(&self, other: &Failure<G>) -> Option<Ordering> {
        self.error.partial_cmp(&other.error)
    }
}

impl<E: Eq> Eq for Failure<E> {}

impl<E: Ord> Ord for Failure<E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.error.cmp(&other.error)
    }
}

impl<E: Hash> Hash for Failure<E> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.error.hash(state);
    }
}
