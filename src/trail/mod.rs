// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the search engine.
//!
//! The trail owns the storage of every trailed variable, and logs the old value
//! whenever one is overwritten. Rewinding replays the log backwards, so undoing
//! a branch costs one step per change made on it.

pub mod trailed;

pub use trailed::{TrailValue, Trailed};

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    /// Slot that was overwritten.
    slot: usize,
    /// Encoded value before the change.
    old_value: u64,
}

/// The trail system for O(1) backtracking.
///
/// A checkpoint is simply the trail length at some moment; the engine keeps one
/// per stack entry and rewinds to it before running the entry.
///
/// # Memory Model
///
/// - DYNAMIC: the trail is the mutable state of the search
/// - Each SearchContext owns its own trail, so independent searches can run in parallel
#[derive(Debug)]
pub struct Trail {
    /// Current encoded value of every registered variable.
    slots: Vec<u64>,
    /// All trail entries recorded so far.
    entries: Vec<TrailEntry>,
    /// Entries allowed before the trail is considered runaway.
    limit: usize,
}

impl Trail {
    /// Default trail size.
    pub const MAX_SIZE: usize = 16384;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::with_limit(Self::MAX_SIZE)
    }

    /// Create a trail that panics once more than `limit` entries are live.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            slots: Vec::new(),
            entries: Vec::with_capacity(limit.min(Self::MAX_SIZE)),
            limit,
        }
    }

    /// Allocate a new trailed variable holding `initial`.
    ///
    /// Registration itself is not recorded, so rewinding never unregisters.
    pub fn register<T: TrailValue>(&mut self, initial: T) -> Trailed<T> {
        let slot = self.slots.len();
        self.slots.push(initial.encode());
        Trailed::new(slot)
    }

    /// Current value of a trailed variable.
    pub fn get<T: TrailValue>(&self, var: &Trailed<T>) -> T {
        T::decode(self.slots[var.slot()])
    }

    /// Set a trailed variable, recording the old value.
    pub fn set<T: TrailValue>(&mut self, var: &Trailed<T>, new_value: T) {
        let slot = var.slot();
        let old_value = self.slots[slot];
        self.record_change(slot, old_value);
        self.slots[slot] = new_value.encode();
    }

    /// Rewind to `checkpoint` (a previous [`len`](Self::len)), restoring every
    /// value changed since, newest first.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                self.slots[entry.slot] = entry.old_value;
            }
        }
    }

    /// # Panics
    ///
    /// Panics if the trail exceeds its limit (indicates a bug in the search algorithm).
    fn record_change(&mut self, slot: usize, old_value: u64) {
        if self.entries.len() >= self.limit {
            panic!("Trail overflow: exceeded {} entries", self.limit);
        }
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
