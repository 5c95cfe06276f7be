// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! State that lives outside the trail.
//!
//! Counters are kept across backtracking, so they are not trail-tracked.

pub mod statistics;

pub use statistics::{Counters, Statistics};
