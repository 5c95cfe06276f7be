// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Choose one element from each row of an integer matrix so that the sum is as
//! close as possible to a target, and report `|target − sum|`.
//!
//! ```
//! use minimize_difference::minimize_the_difference;
//!
//! let matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
//! assert_eq!(minimize_the_difference(matrix, 13).unwrap(), 0);
//! ```
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed once per matrix:
//! - Rows sorted ascending, duplicates removed
//! - Achievable sum range of every row suffix
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records state changes for O(1) backtracking
//! - Residual - target minus the sum chosen so far
//! - Chosen column of every row
//!
//! The running best, the explored (row, residual) nodes and the statistics are
//! not on the trail: they outlive the branch that produced them.
//!
//! # Search Algorithm
//!
//! A predicate program runs on a non-deterministic engine: `RowChoicePredicate`
//! walks the rows, offering every distinct value of the row as a choice, and
//! `RecordBestPredicate` scores each leaf. A closing `FailPredicate` forces the
//! engine through every alternative. Branches whose achievable sum range cannot
//! beat the best leaf are pruned, as are nodes reached a second time with the
//! same row and residual, which keeps the search polynomial in the sum range.
//!
//! # Parallelization
//!
//! The subtrees below the distinct values of the first row are independent.
//! With the `parallel` feature each gets its own `SearchContext` on the rayon
//! pool; the results are combined by taking the minimum.
//!
//! # Reachable sums
//!
//! `Strategy::ReachableSums` computes the same minimum from the set of partial
//! sums reachable after each row, without enumerating paths.

pub mod config;
pub mod context;
pub mod dynamic;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod memo;
pub mod minimizer;
pub mod predicates;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use config::{SearchConfig, Strategy};
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::InvalidInput;
pub use matrix::Matrix;
pub use minimizer::{minimize_the_difference, Minimizer, Solution};
pub use trail::Trail;
