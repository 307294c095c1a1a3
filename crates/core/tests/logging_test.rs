//! Integration tests for the logged helpers.
//!
//! These tests verify that:
//! - Logged conversions keep their return values with a subscriber installed
//! - Access failures and failed staged assignments emit no panics while traced

#![forbid(clippy::unwrap_used)]
#![forbid(clippy::expect_used)]
#![forbid(clippy::panic)]

use resultant_core::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("resultant_core=debug"))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Test logged conversion of an error.
///
/// # GIVEN
/// A subscriber and an error-active result
///
/// # WHEN
/// It is converted with the logged helpers
///
/// # THEN
/// The fallback is returned
#[test]
fn test_logged_helpers_fall_back() {
    init_tracing();

    let r: Result<u32, String> = fail("cache miss".to_string()).into();
    assert_eq!(r.clone().into_option_logged(), None);
    assert_eq!(r.or_default_logged(5), 5);
}

/// Test traced access failure and staged assignment.
///
/// # GIVEN
/// A subscriber at debug level
///
/// # WHEN
/// A missing value is read and a narrowing assignment fails
///
/// # THEN
/// Both are reported as values
#[test]
fn test_traced_failures_are_values() {
    init_tracing();

    let r: Result<u8, u8> = fail(1_u8).into();
    assert!(r.value().is_err());

    let mut target: Result<u8, u8> = Result::new(2);
    assert!(target.try_assign_value(1024_u32).is_err());
    assert!(target.eq_value(&2));
}
