// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RecordBestPredicate - Evaluates a complete choice.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// Offers the current leaf to the running best.
///
/// Runs after every row has been chosen, when the residual is exactly
/// `target − sum`. A difference of 0 cannot be beaten; with `stop_on_exact` the
/// predicate suspends there so the caller can stop the search.
#[derive(Debug)]
pub struct RecordBestPredicate {
    stop_on_exact: bool,
}

impl RecordBestPredicate {
    pub fn new(stop_on_exact: bool) -> Self {
        Self { stop_on_exact }
    }
}

impl Predicate for RecordBestPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let difference = ctx.residual().unsigned_abs();
        ctx.offer(difference);

        if difference == 0 {
            ctx.statistics.increment_counter(Counters::ExactMatches);
            if self.stop_on_exact {
                return PredicateResult::Suspend;
            }
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "RecordBest"
    }
}
