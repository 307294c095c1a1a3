//! Discriminated dual-member storage shared by every result variant.
//!
//! `Storage` is the only place that knows which alternative is active. The
//! public containers never hold a discriminant of their own; they read it back
//! through [`Storage::is_value`] so the two can never disagree.

/// Raw value-or-error storage.
///
/// Exactly one alternative is alive at any time. Switching alternatives is a
/// whole replacement through [`Storage::reconstruct`]: the previous member is
/// dropped before the new one becomes observable.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub(crate) enum Storage<T, E> {
    Value(T),
    Error(E),
}

impl<T, E> Storage<T, E> {
    #[inline]
    pub(crate) const fn construct_value(value: T) -> Self {
        Self::Value(value)
    }

    #[inline]
    pub(crate) const fn construct_error(error: E) -> Self {
        Self::Error(error)
    }

    /// Replace the active member with `next`, dropping the old one.
    #[inline]
    pub(crate) fn reconstruct(&mut self, next: Self) {
        let previous = std::mem::replace(self, next);
        previous.destroy_active();
    }

    /// Drop whichever member is active.
    #[inline]
    pub(crate) fn destroy_active(self) {
        match self {
            Self::Value(value) => drop(value),
            Self::Error(error) => drop(error),
        }
    }

    #[inline]
    pub(crate) const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    #[inline]
    pub(crate) const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    #[inline]
    pub(crate) const fn error_ref(&self) -> Option<&E> {
        match self {
            Self::Value(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    #[inline]
    pub(crate) const fn as_ref(&self) -> Storage<&T, &E> {
        match self {
            Self::Value(value) => Storage::Value(value),
            Self::Error(error) => Storage::Error(error),
        }
    }

    #[inline]
    pub(crate) const fn as_mut(&mut self) -> Storage<&mut T, &mut E> {
        match self {
            Self::Value(value) => Storage::Value(value),
            Self::Error(error) => Storage::Error(error),
        }
    }

    /// Move the active member out as a standard result.
    #[inline]
    pub(crate) fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }

    #[inline]
    pub(crate) fn from_std(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Error(error),
        }
    }

    #[inline]
    pub(crate) fn map_value<U, F: FnOnce(T) -> U>(self, f: F) -> Storage<U, E> {
        match self {
            Self::Value(value) => Storage::Value(f(value)),
            Self::Error(error) => Storage::Error(error),
        }
    }

    #[inline]
    pub(crate) fn map_error<G, F: FnOnce(E) -> G>(self, f: F) -> Storage<T, G> {
        match self {
            Self::Value(value) => Storage::Value(value),
            Self::Error(error) => Storage::Error(f(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct DropCounter(Rc<Cell<u32>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get().saturating_add(1));
        }
    }

    #[test]
    fn test_construct_value_is_value() {
        let storage: Storage<i32, String> = Storage::construct_value(7);
        assert!(storage.is_value());
        assert_eq!(storage.value_ref(), Some(&7));
        assert_eq!(storage.error_ref(), None);
    }

    #[test]
    fn test_construct_error_is_error() {
        let storage: Storage<i32, String> = Storage::construct_error("boom".into());
        assert!(!storage.is_value());
        assert_eq!(storage.value_ref(), None);
        assert_eq!(storage.error_ref().map(String::as_str), Some("boom"));
    }

    #[test]
    fn test_reconstruct_drops_previous_member() {
        let drops = Rc::new(Cell::new(0));
        let mut storage: Storage<DropCounter, i32> =
            Storage::construct_value(DropCounter(Rc::clone(&drops)));

        storage.reconstruct(Storage::construct_error(3));

        assert_eq!(drops.get(), 1);
        assert_eq!(storage.error_ref(), Some(&3));
    }

    #[test]
    fn test_destroy_active_drops_once() {
        let drops = Rc::new(Cell::new(0));
        let storage: Storage<i32, DropCounter> =
            Storage::construct_error(DropCounter(Rc::clone(&drops)));

        storage.destroy_active();

        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_value_mut_edits_in_place() {
        let mut storage: Storage<i32, ()> = Storage::construct_value(1);
        if let Storage::Value(value) = storage.as_mut() {
            *value = 9;
        }
        assert_eq!(storage.into_std(), Ok(9));
    }

    #[test]
    fn test_std_round_trip_keeps_alternative() {
        let storage: Storage<i32, &str> = Storage::from_std(Err("nope"));
        assert_eq!(storage.into_std(), Err("nope"));
    }

    #[test]
    fn test_map_error_skips_value() {
        let storage: Storage<i32, i32> = Storage::construct_value(4);
        let mapped = storage.map_error(|e| e.to_string());
        assert_eq!(mapped.into_std(), Ok(4));
    }
}
