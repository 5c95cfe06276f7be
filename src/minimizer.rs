// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The minimizer: one element per row, sum as close to the target as possible.
//!
//! The backtracking strategies run this program on the engine:
//!
//! ```text
//! [FixedChoice(row 0)]   only when splitting on the first row
//! RowChoice              one round per row, every distinct value, pruned by
//!                        bounds and by (row, residual) nodes already searched
//! Counting(Leaves)
//! RecordBest             |residual| offered to the running best
//! Fail                   forces the engine through every remaining alternative
//! ```

use tracing::{debug, info_span};

use crate::config::{SearchConfig, Strategy};
use crate::context::{MemoizedData, SearchContext};
use crate::dynamic;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::InvalidInput;
use crate::matrix::Matrix;
use crate::predicates::{
    FailPredicate, FixedChoicePredicate, RecordBestPredicate, RowChoicePredicate,
};
use crate::state::{Counters, Statistics};

/// The best choice found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// `|target − sum|`, minimal over all choices.
    pub difference: u64,
    /// The chosen element of each row, in row order.
    pub values: Vec<i32>,
}

impl Solution {
    /// Sum of the chosen elements.
    pub fn sum(&self) -> i64 {
        self.values.iter().map(|&value| value as i64).sum()
    }
}

/// Minimum of `|target − Σ one element per row|` for `rows`.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `rows` is empty, contains an empty row, or is
/// not rectangular.
///
/// # Example
///
/// ```
/// use minimize_difference::minimize_the_difference;
///
/// assert_eq!(minimize_the_difference(vec![vec![1, 2, 9, 8, 7]], 6).unwrap(), 1);
/// assert_eq!(minimize_the_difference(vec![vec![1, 2, 3], vec![4, 5, 6]], 6).unwrap(), 0);
/// assert!(minimize_the_difference(vec![], 6).is_err());
/// ```
pub fn minimize_the_difference(rows: Vec<Vec<i32>>, target: i32) -> Result<u64, InvalidInput> {
    let matrix = Matrix::new(rows)?;
    Ok(Minimizer::new(&matrix).minimize(target))
}

/// Reusable minimizer over one matrix.
///
/// The memoized rows and bounds do not depend on the target, so one minimizer
/// can answer any number of targets.
#[derive(Debug, Clone)]
pub struct Minimizer {
    memo: MemoizedData,
    config: SearchConfig,
}

impl Minimizer {
    pub fn new(matrix: &Matrix) -> Self {
        Self {
            memo: MemoizedData::new(matrix),
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Minimum achievable `|target − sum|`.
    pub fn minimize(&self, target: i32) -> u64 {
        self.solve(target).difference
    }

    /// Minimum difference together with a choice attaining it.
    pub fn solve(&self, target: i32) -> Solution {
        self.solve_with_statistics(target).0
    }

    /// Like [`solve`](Self::solve), also returning the search counters.
    ///
    /// Counters are all zero for [`Strategy::ReachableSums`], which does not
    /// visit leaves.
    pub fn solve_with_statistics(&self, target: i32) -> (Solution, Statistics) {
        let span = info_span!("minimize", target, strategy = %self.config.strategy);
        let _enter = span.enter();

        let (solution, statistics) = match self.config.strategy {
            Strategy::Backtrack => self.run(target, None),
            Strategy::Parallel => self.run_parallel(target),
            Strategy::ReachableSums => (
                dynamic::minimize_by_reachable_sums(&self.memo, target),
                Statistics::new(),
            ),
        };

        debug!(
            difference = solution.difference,
            leaves = statistics.get(Counters::Leaves),
            pruned = statistics.get(Counters::Pruned),
            "search complete"
        );
        (solution, statistics)
    }

    fn program(&self, first_column: Option<usize>) -> SearchEngine {
        let mut builder = EngineBuilder::new();
        let start_row = match first_column {
            Some(column) => {
                builder = builder.add(Box::new(FixedChoicePredicate::new(0, column)));
                1
            }
            None => 0,
        };

        builder
            .add(Box::new(
                RowChoicePredicate::new(start_row).with_pruning(self.config.prune),
            ))
            .add(Statistics::counting_predicate(Counters::Leaves, None))
            .add(Box::new(RecordBestPredicate::new(self.config.stop_on_exact)))
            .terminal(Box::new(FailPredicate))
            .build()
    }

    /// Search the whole tree, or the subtree below one first-row column.
    fn run(&self, target: i32, first_column: Option<usize>) -> (Solution, Statistics) {
        let mut ctx = SearchContext::with_memo(self.memo.clone(), target);

        // Suspends only on an exact match, which nothing can improve
        if let Some(engine) = self.program(first_column).search(&mut ctx) {
            let (tries, retries) = engine.statistics();
            debug!(tries, retries, "stopped on exact match");
        }

        let solution = ctx
            .solution()
            .expect("nothing is pruned before the first leaf, so one is always recorded");
        (solution, ctx.statistics)
    }

    /// Independent searches below each distinct first-row value.
    ///
    /// Subtrees share nothing; their results are reduced by minimum, keeping the
    /// lowest first-row value on ties, which matches the sequential search.
    #[cfg(feature = "parallel")]
    fn run_parallel(&self, target: i32) -> (Solution, Statistics) {
        use rayon::prelude::*;

        let subtrees: Vec<(Solution, Statistics)> = (0..self.memo.rows.row(0).len())
            .into_par_iter()
            .map(|column| self.run(target, Some(column)))
            .collect();

        debug!(subtrees = subtrees.len(), "parallel subtrees finished");

        subtrees
            .into_iter()
            .reduce(|(best, mut statistics), (candidate, other)| {
                statistics.merge(&other);
                if candidate.difference < best.difference {
                    (candidate, statistics)
                } else {
                    (best, statistics)
                }
            })
            .unwrap_or_else(|| self.run(target, None))
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel(&self, target: i32) -> (Solution, Statistics) {
        debug!("built without the parallel feature, searching sequentially");
        self.run(target, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimizer(rows: Vec<Vec<i32>>) -> Minimizer {
        Minimizer::new(&Matrix::new(rows).unwrap())
    }

    #[test]
    fn test_single_row() {
        let solution = minimizer(vec![vec![1, 2, 9, 8, 7]]).solve(6);
        assert_eq!(solution.difference, 1);
        assert_eq!(solution.values, vec![7]);
    }

    #[test]
    fn test_explores_beyond_first_element() {
        // Only the first elements would give |6 - 5| = 1
        let solution = minimizer(vec![vec![1, 2, 3], vec![4, 5, 6]]).solve(6);
        assert_eq!(solution.difference, 0);
        assert_eq!(solution.values, vec![1, 5]);
        assert_eq!(solution.sum(), 6);
    }

    #[test]
    fn test_single_column() {
        assert_eq!(minimizer(vec![vec![1], vec![2], vec![3]]).minimize(100), 94);
    }

    #[test]
    fn test_target_below_range() {
        let m = minimizer(vec![vec![10, 20], vec![30, 40]]);
        let solution = m.solve(-5);
        assert_eq!(solution.difference, 45);
        assert_eq!(solution.values, vec![10, 30]);
    }

    #[test]
    fn test_exhaustive_counts_every_leaf() {
        let m = minimizer(vec![vec![1, 2, 3], vec![4, 5, 6]])
            .with_config(SearchConfig::default().exhaustive());
        let (solution, statistics) = m.solve_with_statistics(6);
        assert_eq!(solution.difference, 0);
        assert_eq!(statistics.get(Counters::Leaves), 9);
        // 1+5, 2+4
        assert_eq!(statistics.get(Counters::ExactMatches), 2);
    }

    #[test]
    fn test_stop_on_exact_ends_early() {
        let m = minimizer(vec![vec![1, 2, 3], vec![4, 5, 6]])
            .with_config(SearchConfig::default().with_pruning(false));
        let (solution, statistics) = m.solve_with_statistics(6);
        assert_eq!(solution.difference, 0);
        // (1,4) then (1,5)
        assert_eq!(statistics.get(Counters::Leaves), 2);
    }

    #[test]
    fn test_strategies_agree() {
        let rows = vec![vec![3, -8, 14], vec![7, 0, -2], vec![5, 5, 11]];
        for target in -30..40 {
            let expected = minimizer(rows.clone())
                .with_config(SearchConfig::default().exhaustive())
                .solve(target);
            for strategy in [Strategy::Backtrack, Strategy::Parallel] {
                let config = SearchConfig::default().with_strategy(strategy);
                assert_eq!(minimizer(rows.clone()).with_config(config).solve(target), expected);
            }
            let config = SearchConfig::default().with_strategy(Strategy::ReachableSums);
            assert_eq!(
                minimizer(rows.clone()).with_config(config).minimize(target),
                expected.difference
            );
        }
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(minimize_the_difference(vec![], 1), Err(InvalidInput::EmptyMatrix));
        assert_eq!(
            minimize_the_difference(vec![vec![]], 1),
            Err(InvalidInput::EmptyRow { row: 0 })
        );
        assert!(matches!(
            minimize_the_difference(vec![vec![1, 2], vec![3]], 1),
            Err(InvalidInput::RaggedRow { row: 1, .. })
        ));
    }
}
