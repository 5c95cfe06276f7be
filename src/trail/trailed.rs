// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Typed handles to values stored on the trail.

use std::fmt::Debug;
use std::marker::PhantomData;

/// A value that can be stored in a trail slot.
///
/// Slots hold raw `u64` words; implementors provide a lossless bitwise encoding.
pub trait TrailValue: Copy + Debug {
    fn encode(self) -> u64;
    fn decode(word: u64) -> Self;
}

impl TrailValue for i64 {
    fn encode(self) -> u64 {
        self as u64
    }

    fn decode(word: u64) -> Self {
        word as i64
    }
}

impl TrailValue for usize {
    fn encode(self) -> u64 {
        self as u64
    }

    fn decode(word: u64) -> Self {
        word as usize
    }
}

/// Handle to a trailed variable.
///
/// The value itself lives in the [`Trail`](super::Trail) that issued the handle;
/// read it with `trail.get(&var)` and write it with `trail.set(&var, value)` so
/// that every change is recorded for backtracking.
///
/// # Example
///
/// ```
/// use minimize_difference::trail::Trail;
///
/// let mut trail = Trail::new();
/// let value = trail.register(42i64);
///
/// let checkpoint = trail.len();
/// trail.set(&value, -7);
/// assert_eq!(trail.get(&value), -7);
///
/// trail.rewind_to(checkpoint);
/// assert_eq!(trail.get(&value), 42); // Value restored
/// ```
#[derive(Debug)]
pub struct Trailed<T: TrailValue> {
    slot: usize,
    _phantom: PhantomData<T>,
}

impl<T: TrailValue> Trailed<T> {
    pub(crate) fn new(slot: usize) -> Self {
        Self {
            slot,
            _phantom: PhantomData,
        }
    }

    /// Slot index inside the owning trail.
    pub(crate) fn slot(&self) -> usize {
        self.slot
    }
}

impl<T: TrailValue> Clone for Trailed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TrailValue> Copy for Trailed<T> {}
