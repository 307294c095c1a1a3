//! Error types reported by the container itself.
//!
//! Domain failures live in a result's error state and are never raised.
//! The types here cover misuse (reading a value that is not there) and
//! fallible conversions between instantiations.

use std::borrow::Cow;

use thiserror::Error;

const DEFAULT_ACCESS_MESSAGE: &str = "bad result access";

/// Returned by value observers when the result holds an error.
///
/// Carries its own copy of the error, so the caller can recover the failure
/// reason even after the original result is gone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BadResultAccess<E> {
    error: E,
    message: Cow<'static, str>,
}

impl<E> BadResultAccess<E> {
    /// Create an access error carrying `error` and the default message.
    #[inline]
    pub fn new(error: E) -> Self {
        tracing::debug!("value accessed on a result holding an error");
        Self {
            error,
            message: Cow::Borrowed(DEFAULT_ACCESS_MESSAGE),
        }
    }

    /// Create an access error carrying `error` and a caller-supplied message.
    #[inline]
    pub fn with_message(error: E, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        tracing::debug!(%message, "value expected on a result holding an error");
        Self { error, message }
    }

    /// The error that was active when the access failed.
    #[inline]
    #[must_use]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Take the carried error.
    #[inline]
    #[must_use]
    pub fn into_error(self) -> E {
        self.error
    }

    /// The diagnostic message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Which side of a fallible conversion between instantiations failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError<V, R> {
    #[error("value conversion failed: {0}")]
    Value(V),

    #[error("error conversion failed: {0}")]
    Error(R),
}
