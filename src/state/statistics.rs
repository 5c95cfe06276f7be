// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by additional methods.

use std::fmt;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Complete choices (one element per row) evaluated.
    Leaves,
    /// Leaves that lowered the running best.
    Improvements,
    /// Nodes and choices cut because their bound could not beat the best.
    Pruned,
    /// Leaves whose sum hit the target exactly.
    ExactMatches,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Add every counter of `other` into `self`.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in Counters::iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl fmt::Debug for CountingPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingPredicate")
            .field("counter", &self.counter)
            .finish()
    }
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            ctx.statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn test_increment_and_merge() {
        let mut a = Statistics::new();
        a.increment_counter(Counters::Leaves);
        a.increment_counter(Counters::Leaves);
        let mut b = Statistics::new();
        b.increment_counter(Counters::Leaves);
        b.increment_counter(Counters::Pruned);

        a.merge(&b);
        assert_eq!(a.get(Counters::Leaves), 3);
        assert_eq!(a.get(Counters::Pruned), 1);
        assert_eq!(a.get(Counters::ExactMatches), 0);
    }

    #[test]
    fn test_display_lists_every_counter() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::ExactMatches);
        assert_eq!(
            stats.to_string(),
            "leaves=0 improvements=0 pruned=0 exact_matches=1"
        );
    }

    #[test]
    fn test_counting_predicate_filter() {
        let matrix = Matrix::new(vec![vec![1]]).unwrap();
        let mut ctx = SearchContext::new(&matrix, 0);

        let mut always = Statistics::counting_predicate(Counters::Leaves, None);
        let mut never = Statistics::counting_predicate(Counters::Pruned, Some(|_| false));

        assert_eq!(always.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(never.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.statistics.get(Counters::Leaves), 1);
        assert_eq!(ctx.statistics.get(Counters::Pruned), 0);
    }
}
