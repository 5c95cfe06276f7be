// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! FixedChoicePredicate - Forces the choice in one row.
//!
//! Splitting the decision tree on the first row gives independent subtrees, one
//! per distinct first-row value. Each subtree is searched by a program that
//! starts with this predicate.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Deterministically chooses column `column` of sorted row `row`.
#[derive(Debug)]
pub struct FixedChoicePredicate {
    row: usize,
    column: usize,
}

impl FixedChoicePredicate {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl Predicate for FixedChoicePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        assert_eq!(
            round, 0,
            "FixedChoicePredicate must be called exactly once with round=0"
        );

        if self.row >= ctx.nrows() || self.column >= ctx.memo.rows.row(self.row).len() {
            return PredicateResult::Failure;
        }

        ctx.choose(self.row, self.column);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "FixedChoice"
    }
}
