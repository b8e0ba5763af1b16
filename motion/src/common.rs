// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack-allocated storage aliases and shared-state aliases used across the crate.
//! Smaller static allocation sizes are better than larger; these spill to the heap
//! when they outgrow their inline capacity.

use std::sync::{Arc, Mutex};

use smallstr::SmallString;
use smallvec::SmallVec;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap. A step snapshot of a short greeting fits inline; long texts spill.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;

pub type StdMutex<T> = Mutex<T>;
pub type SafeBool = Arc<StdMutex<bool>>;

#[cfg(test)]
mod tests {
    use super::{DEFAULT_STRING_STORAGE_SIZE, InlineString};

    #[test]
    fn test_single_jamo_step_stays_inline() {
        // The smallest step snapshots (one jamo, 3 UTF-8 bytes) must not spill.
        let mut step = InlineString::new();
        step.push('ㅇ');
        assert!(step.len() <= DEFAULT_STRING_STORAGE_SIZE);
        assert!(!step.spilled());
    }
}
