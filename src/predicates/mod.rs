// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the search algorithm.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `row_choice`: RowChoicePredicate, one round per row, one choice per distinct value
//! - `fixed_choice`: FixedChoicePredicate, forces one element (splits the search)
//! - `record_best`: RecordBestPredicate, evaluates a leaf
//! - Built-in predicate: `FailPredicate`

pub mod fixed_choice;
pub mod record_best;
pub mod row_choice;

// Re-export main predicates for convenience
pub use fixed_choice::FixedChoicePredicate;
pub use record_best::RecordBestPredicate;
pub use row_choice::RowChoicePredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with it
/// makes the engine explore every alternative, which is how an exhaustive
/// minimization visits all leaves.
///
/// # Example
///
/// ```
/// use minimize_difference::context::SearchContext;
/// use minimize_difference::engine::EngineBuilder;
/// use minimize_difference::matrix::Matrix;
/// use minimize_difference::predicates::{FailPredicate, RowChoicePredicate};
///
/// let matrix = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let mut ctx = SearchContext::new(&matrix, 0);
/// let engine = EngineBuilder::new()
///     .add(Box::new(RowChoicePredicate::new(0)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all row choices then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution at every leaf.
///
/// The engine hands control back to the caller with the current path still in
/// place, so the state of one leaf can be inspected before resuming.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct SuspendPredicate;

#[cfg(test)]
impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

#[cfg(test)]
impl TerminalPredicate for SuspendPredicate {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    fn context() -> SearchContext {
        SearchContext::new(&Matrix::new(vec![vec![0]]).unwrap(), 0)
    }

    #[test]
    fn test_suspend_predicate() {
        let mut ctx = context();
        let mut pred = SuspendPredicate;

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Suspend);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_fail_predicate() {
        let mut ctx = context();
        let mut pred = FailPredicate;

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::Failure);
    }
}
