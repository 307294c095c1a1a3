//! Hashing for the result variants.
//!
//! A seed chosen by the active alternative is written before the member, so
//! `Value(x)` and `Error(x)` hash differently even when `T` and `E` agree.
//! [`VoidResult`] has no payload in its value state: it hashes as `0_u64`
//! there and exactly like `E` in its error state.

use std::hash::{Hash, Hasher};

use crate::reference::RefResult;
use crate::reference_mut::RefMutResult;
use crate::result::Result;
use crate::storage::Storage;
use crate::void::VoidResult;

const VALUE_SEED: u64 = 0x9e37_79b9_7f4a_7c15;
const ERROR_SEED: u64 = 0xc2b2_ae3d_27d4_eb4f;

impl<T: Hash, E: Hash> Hash for Storage<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Value(value) => {
                state.write_u64(VALUE_SEED);
                value.hash(state);
            }
            Self::Error(error) => {
                state.write_u64(ERROR_SEED);
                error.hash(state);
            }
        }
    }
}

impl<T: Hash, E: Hash> Hash for Result<T, E> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.hash(state);
    }
}

// `&T` hashes as `T`, so a borrowed result agrees with the owned one.
impl<T: Hash + ?Sized, E: Hash> Hash for RefResult<'_, T, E> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.hash(state);
    }
}

impl<T: Hash + ?Sized, E: Hash> Hash for RefMutResult<'_, T, E> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.hash(state);
    }
}

impl<E: Hash> Hash for VoidResult<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.storage {
            Storage::Value(()) => state.write_u64(0),
            Storage::Error(error) => error.hash(state),
        }
    }
}
