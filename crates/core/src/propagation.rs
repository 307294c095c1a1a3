//! Trait propagation for [`Storage`].
//!
//! `Storage<T, E>` is `Clone` exactly when both members are, and `Copy`
//! exactly when both members are. It has no `Drop` impl of its own, so it
//! carries drop glue only when `T` or `E` does. Every container in this crate
//! wraps a single `Storage` and forwards to it, so the same rules hold for
//! the containers. [`RefResult`] stores a borrow, which is always `Copy`, so
//! only its error type matters.
//!
//! Assignment from a fallible source goes through [`stage_then_commit`]: the
//! replacement is built completely before `self` is touched.

use std::mem::needs_drop;

use crate::reference::RefResult;
use crate::result::Result;
use crate::storage::Storage;
use crate::void::VoidResult;

impl<T: Clone, E: Clone> Clone for Storage<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Error(error) => Self::Error(error.clone()),
        }
    }

    /// Reuses the existing member when both sides hold the same alternative.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Self::Value(dst), Self::Value(src)) => dst.clone_from(src),
            (Self::Error(dst), Self::Error(src)) => dst.clone_from(src),
            (dst, src) => dst.reconstruct(src.clone()),
        }
    }
}

impl<T: Copy, E: Copy> Copy for Storage<T, E> {}

impl<T: Clone, E: Clone> Clone for Result<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
    }
}

impl<T: Copy, E: Copy> Copy for Result<T, E> {}

impl<E: Clone> Clone for VoidResult<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
    }
}

impl<E: Copy> Copy for VoidResult<E> {}

// A borrow is always `Copy`, so only the error decides.
impl<T: ?Sized, E: Clone> Clone for RefResult<'_, T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: match &self.storage {
                Storage::Value(value) => Storage::Value(*value),
                Storage::Error(error) => Storage::Error(error.clone()),
            },
        }
    }
}

impl<T: ?Sized, E: Copy> Copy for RefResult<'_, T, E> {}

/// Whether a container over `T` and `E` runs no code when dropped.
///
/// Agrees with `std::mem::needs_drop` for every container in this crate.
#[inline]
#[must_use]
pub const fn is_trivially_destructible<T, E>() -> bool {
    !needs_drop::<T>() && !needs_drop::<E>()
}

/// Build a replacement storage and install it only if building succeeded.
///
/// On failure `dest` is left exactly as it was.
pub(crate) fn stage_then_commit<T, E, X, F>(
    dest: &mut Storage<T, E>,
    build: F,
) -> std::result::Result<(), X>
where
    F: FnOnce() -> std::result::Result<Storage<T, E>, X>,
{
    match build() {
        Ok(staged) => {
            dest.reconstruct(staged);
            Ok(())
        }
        Err(error) => {
            tracing::debug!("staged assignment failed; destination left unchanged");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_members_are_trivially_destructible() {
        assert!(is_trivially_destructible::<i32, u8>());
        assert!(is_trivially_destructible::<(), char>());
    }

    #[test]
    fn test_owning_member_removes_triviality() {
        assert!(!is_trivially_destructible::<String, i32>());
        assert!(!is_trivially_destructible::<i32, Vec<u8>>());
    }

    #[test]
    fn test_predicate_matches_needs_drop() {
        assert_eq!(
            is_trivially_destructible::<i32, String>(),
            !needs_drop::<Storage<i32, String>>()
        );
        assert_eq!(
            is_trivially_destructible::<i32, i64>(),
            !needs_drop::<Storage<i32, i64>>()
        );
    }

    #[test]
    fn test_clone_from_same_alternative_keeps_buffer() {
        let mut dest: Storage<String, i32> = Storage::construct_value(String::with_capacity(64));
        let capacity = dest.value_ref().map_or(0, String::capacity);
        let source: Storage<String, i32> = Storage::construct_value("hi".to_string());

        dest.clone_from(&source);

        assert_eq!(dest.value_ref().map(String::as_str), Some("hi"));
        assert_eq!(dest.value_ref().map_or(0, String::capacity), capacity);
    }

    #[test]
    fn test_clone_from_switches_alternative() {
        let mut dest: Storage<String, i32> = Storage::construct_value("x".to_string());
        let source: Storage<String, i32> = Storage::construct_error(5);

        dest.clone_from(&source);

        assert_eq!(dest.error_ref(), Some(&5));
    }

    #[test]
    fn test_result_clone_from_forwards_to_storage() {
        let mut dest: Result<String, i32> = Result::new(String::with_capacity(32));
        let capacity = dest.as_ref().map(String::capacity).into_std().unwrap_or(0);

        dest.clone_from(&Result::new("copied".to_string()));

        assert_eq!(dest.as_ref().map(String::as_str).into_std(), Ok("copied"));
        assert_eq!(
            dest.as_ref().map(String::capacity).into_std().unwrap_or(0),
            capacity
        );
    }

    #[test]
    fn test_containers_copy_with_members() {
        let result: Result<i32, u8> = Result::new(3);
        let copy = result;
        assert_eq!((result.into_std(), copy.into_std()), (Ok(3), Ok(3)));

        let void: VoidResult<u8> = VoidResult::success();
        let copy = void;
        assert!(void.has_value() && copy.has_value());
    }

    #[test]
    fn test_ref_result_clones_error_not_referent() {
        let owned = String::from("target");
        let original: RefResult<'_, String, String> = RefResult::new(&owned);
        let copy = original.clone();
        let (Ok(left), Ok(right)) = (original.into_std(), copy.into_std()) else {
            return;
        };
        assert!(std::ptr::eq(left, right));
    }

    #[test]
    fn test_failed_stage_leaves_destination() {
        let mut dest: Storage<i32, i32> = Storage::construct_value(1);

        let outcome = stage_then_commit(&mut dest, || Err::<Storage<i32, i32>, _>("bad"));

        assert_eq!(outcome, Err("bad"));
        assert_eq!(dest.value_ref(), Some(&1));
    }

    #[test]
    fn test_successful_stage_replaces_destination() {
        let mut dest: Storage<i32, i32> = Storage::construct_value(1);

        let outcome: std::result::Result<(), ()> =
            stage_then_commit(&mut dest, || Ok(Storage::construct_error(2)));

        assert_eq!(outcome, Ok(()));
        assert_eq!(dest.error_ref(), Some(&2));
    }
}
