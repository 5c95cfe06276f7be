// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RowChoicePredicate - Chooses one element in each row.
//!
//! This predicate runs one round per row, from `start_row` to the last row. In
//! each round it offers every distinct value of the row as a choice, subtracting
//! the chosen value from the residual.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// RowChoicePredicate explores every element of every row.
///
/// Round `r` chooses in row `start_row + r`; once past the last row the
/// predicate succeeds, handing the complete choice to the next predicate.
///
/// # Choices
///
/// Choice `c` is the `c`-th smallest distinct value of the row, so a row's
/// alternatives are explored in ascending order.
///
/// # Pruning
///
/// With pruning enabled, a node is abandoned when no sum reachable from it can
/// get strictly closer to the target than the best leaf so far. Two tests are
/// used:
///
/// - the achievable sum range of the remaining rows cannot reach within the
///   best difference of the residual;
/// - the same row was already entered with the same residual, so the subtree
///   has already been searched.
///
/// Neither discards a strictly better leaf, so the result is the same with or
/// without pruning. The second bounds the search by the number of distinct
/// (row, residual) pairs rather than the number of paths.
#[derive(Debug)]
pub struct RowChoicePredicate {
    start_row: usize,
    prune: bool,
}

impl RowChoicePredicate {
    /// Choose in rows `start_row..`, pruning enabled.
    pub fn new(start_row: usize) -> Self {
        Self {
            start_row,
            prune: true,
        }
    }

    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Whether the subtree whose first unchosen row is `row` can be skipped.
    fn prunes(&self, ctx: &mut SearchContext, row: usize, residual: i64) -> bool {
        if self.prune
            && ctx
                .memo
                .bounds
                .cannot_improve(row, residual, ctx.best_difference())
        {
            ctx.statistics.increment_counter(Counters::Pruned);
            true
        } else {
            false
        }
    }

    /// Whether the node at `row` with `residual` was searched before.
    fn revisits(&self, ctx: &mut SearchContext, row: usize, residual: i64) -> bool {
        if self.prune && !ctx.explore(row, residual) {
            ctx.statistics.increment_counter(Counters::Pruned);
            true
        } else {
            false
        }
    }
}

impl Predicate for RowChoicePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let row = self.start_row + round;
        if row >= ctx.nrows() {
            // Every row has been chosen
            return PredicateResult::Success;
        }

        let residual = ctx.residual();
        if self.prunes(ctx, row, residual) || self.revisits(ctx, row, residual) {
            return PredicateResult::Failure;
        }

        PredicateResult::Choices(ctx.memo.rows.row(row).len())
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let row = self.start_row + round;

        // Invariant: the engine only offers choices 0..len for this row.
        debug_assert!(
            choice < ctx.memo.rows.row(row).len(),
            "Invalid choice {} for row {} with {} distinct values",
            choice,
            row,
            ctx.memo.rows.row(row).len()
        );

        let residual = ctx.residual() - ctx.memo.rows.value(row, choice) as i64;
        if self.prunes(ctx, row + 1, residual) {
            return PredicateResult::Failure;
        }

        ctx.choose(row, choice);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "RowChoice"
    }
}
