//! # Resultant Core
//!
//! A value-or-error container that never panics.
//!
//! [`Result<T, E>`] holds exactly one of a value `T` or an error `E`. The
//! error state is entered only through [`Failure`] (usually via [`fail`]),
//! so a bare `E` is never mistaken for an error even when `T == E`.
//! [`VoidResult<E>`] carries no value. [`RefResult<'a, T, E>`] borrows its
//! value and [`RefMutResult<'a, T, E>`] borrows it for writing.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` - observers return
//!   [`BadResultAccess`] instead
//! - No `unsafe` - the union is a plain enum
//! - `Clone`, `Copy` and drop glue follow `T` and `E` exactly
//!
//! ## Ordering
//!
//! - A value-active result orders before every error-active one
//! - An error-active result is greater than any bare value
//! - A value-active result is less than any [`Failure`]
//!
//! ```
//! use resultant_core::{fail, Result};
//!
//! let ok: Result<i32, String> = Result::new(5);
//! let err: Result<i32, String> = fail("disk full".to_string()).into();
//!
//! assert_eq!(ok.clone().map(|x| x * 2), Result::<i32, String>::new(10));
//! assert!(ok < err);
//! assert_eq!(err.error(), "disk full");
//! ```

mod compare;
mod error;
mod failure;
mod hash;
mod outcome;
mod propagation;
mod reference;
mod reference_mut;
mod result;
mod storage;
mod void;

pub use error::{BadResultAccess, ConversionError};
pub use failure::{fail, fail_from_iter, fail_with, Failure};
pub use outcome::{partition_outcomes, Outcome, OutcomeExt};
pub use propagation::is_trivially_destructible;
pub use reference::RefResult;
pub use reference_mut::RefMutResult;
pub use result::{swap, Result};
pub use void::VoidResult;

/// Common imports.
///
/// ```rust
/// use resultant_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        fail, fail_from_iter, fail_with, BadResultAccess, Failure, Outcome, OutcomeExt,
        RefMutResult, RefResult, Result, VoidResult,
    };
}
