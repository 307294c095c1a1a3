//! Capability shared by every result variant, and extension helpers built on it.
//!
//! [`Result`](crate::Result), [`VoidResult`](crate::VoidResult),
//! [`RefResult`](crate::RefResult) and [`RefMutResult`](crate::RefMutResult)
//! are distinct types. Code that only needs to
//! ask "value or error?" can be written once against [`Outcome`].

use std::fmt::Display;

use itertools::{Either, Itertools};

use crate::error::BadResultAccess;

/// A value-or-error container.
pub trait Outcome: Sized {
    /// The payload yielded when the value state is active.
    type Value;
    /// The payload held in the error state.
    type Error;

    /// Whether the value state is active.
    fn has_value(&self) -> bool;

    /// Whether the error state is active.
    #[inline]
    fn has_error(&self) -> bool {
        !self.has_value()
    }

    /// Borrow the value, if held.
    fn value_ref(&self) -> Option<&Self::Value>;

    /// Borrow the error, if held.
    fn error_ref(&self) -> Option<&Self::Error>;

    /// Convert into a standard library result.
    fn into_std(self) -> std::result::Result<Self::Value, Self::Error>;

    /// Take the value.
    ///
    /// # Errors
    ///
    /// Returns [`BadResultAccess`] owning the error when an error is held.
    #[inline]
    fn try_into_value(self) -> std::result::Result<Self::Value, BadResultAccess<Self::Error>> {
        self.into_std().map_err(BadResultAccess::new)
    }

    /// Take the error, or `Self::Error::default()` when a value is held.
    #[inline]
    fn take_error(self) -> Self::Error
    where
        Self::Error: Default,
    {
        self.into_std().err().unwrap_or_default()
    }
}

/// Extension trait providing logging and tap-style helpers for any [`Outcome`].
pub trait OutcomeExt: Outcome {
    /// Convert to an Option, logging the error if present.
    #[inline]
    fn into_option_logged(self) -> Option<Self::Value>
    where
        Self::Error: Display,
    {
        match self.into_std() {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::error!(%error, "outcome dropped to None");
                None
            }
        }
    }

    /// Get the value or a default, logging the error if present.
    #[inline]
    fn or_default_logged(self, default: Self::Value) -> Self::Value
    where
        Self::Error: Display,
    {
        match self.into_std() {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(%error, "outcome replaced by default value");
                default
            }
        }
    }

    /// Perform a side effect on the value without consuming the outcome.
    #[inline]
    fn tap_value<F: FnOnce(&Self::Value)>(self, f: F) -> Self {
        if let Some(value) = self.value_ref() {
            f(value);
        }
        self
    }

    /// Perform a side effect on the error without consuming the outcome.
    #[inline]
    fn tap_error<F: FnOnce(&Self::Error)>(self, f: F) -> Self {
        if let Some(error) = self.error_ref() {
            f(error);
        }
        self
    }

    /// Pair the error with context built by `context`. The error keeps its
    /// type; `context` only runs when an error is held.
    #[inline]
    fn with_context<C, F: FnOnce() -> C>(
        self,
        context: F,
    ) -> std::result::Result<Self::Value, (C, Self::Error)> {
        self.into_std().map_err(|error| (context(), error))
    }
}

impl<O: Outcome> OutcomeExt for O {}

/// Split outcomes into their values and their errors, preserving order.
pub fn partition_outcomes<I>(
    outcomes: I,
) -> (
    Vec<<I::Item as Outcome>::Value>,
    Vec<<I::Item as Outcome>::Error>,
)
where
    I: IntoIterator,
    I::Item: Outcome,
{
    outcomes
        .into_iter()
        .partition_map(|outcome| match outcome.into_std() {
            Ok(value) => Either::Left(value),
            Err(error) => Either::Right(error),
        })
}
