// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! Computed once per matrix, before the search starts:
//! - Rows sorted ascending with duplicate values removed
//! - Achievable sum range of every row suffix, for pruning

pub mod bounds;
pub mod rows;

pub use bounds::RowBounds;
pub use rows::SortedRows;
