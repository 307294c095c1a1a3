#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Resultant
//!
//! Value-or-error container with an explicit access policy and monadic
//! combinators.
//!
//! This library re-exports the workspace crates for convenience.
//!
//! ```
//! use resultant::prelude::*;
//!
//! let r: Result<u16, String> = fail("refused".to_string()).into();
//! assert_eq!(r.error_or("none"), "refused");
//! ```

pub use resultant_core;
pub use resultant_core::*;
