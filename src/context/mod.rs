// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): Immutable precomputed data
//! - Tier 2 (DYNAMIC): Mutable search state with trail-based backtracking
//!
//! Independent SearchContext instances built from clones of the same MEMO data
//! can search disjoint subtrees on different threads.

mod dynamic;
mod memoized;

pub use dynamic::{Best, DynamicState};
pub use memoized::MemoizedData;

use tracing::trace;

use crate::matrix::Matrix;
use crate::minimizer::Solution;
use crate::state::statistics::{Counters, Statistics};
use crate::trail::Trail;

/// Search context combining MEMO and DYNAMIC state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,        // Tier 1: Immutable
///     trail: Trail,              // Tier 2: Mutable, owns trailed values
///     state: DynamicState,       // Tier 2: Trail handles, running best, explored nodes
///     statistics: Statistics,    // Counters, survive backtracking
/// }
/// ```
///
/// # Example
///
/// ```
/// use minimize_difference::context::SearchContext;
/// use minimize_difference::matrix::Matrix;
///
/// let matrix = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let mut ctx = SearchContext::new(&matrix, 10);
///
/// let checkpoint = ctx.trail.len();
/// ctx.choose(0, 1); // picks 2
/// assert_eq!(ctx.residual(), 8);
///
/// ctx.trail.rewind_to(checkpoint);
/// assert_eq!(ctx.residual(), 10);
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable precomputed data (Tier 1)
    pub memo: MemoizedData,
    /// Trail for O(1) backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    /// Search counters
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a new search context for `matrix` and `target`.
    pub fn new(matrix: &Matrix, target: i32) -> Self {
        Self::with_memo(MemoizedData::new(matrix), target)
    }

    /// Create a search context with existing MEMO data.
    ///
    /// This is useful for parallel searches that share the same MEMO data.
    pub fn with_memo(memo: MemoizedData, target: i32) -> Self {
        // Each row contributes a column and a residual entry on the current path
        let mut trail = Trail::with_limit(Trail::MAX_SIZE.max(4 * memo.nrows() + 16));
        let state = DynamicState::new(&memo, target, &mut trail);
        Self {
            memo,
            trail,
            state,
            statistics: Statistics::new(),
        }
    }

    /// Number of rows, i.e. the depth of every leaf.
    pub fn nrows(&self) -> usize {
        self.memo.nrows()
    }

    pub fn target(&self) -> i32 {
        self.state.target
    }

    /// Target minus the sum of the choices on the current path.
    pub fn residual(&self) -> i64 {
        self.trail.get(&self.state.residual)
    }

    /// Column chosen for `row` on the current path.
    pub fn column(&self, row: usize) -> usize {
        self.trail.get(&self.state.columns[row])
    }

    /// Choose column `column` of sorted row `row` (trail-tracked).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of range.
    pub fn choose(&mut self, row: usize, column: usize) {
        let value = self.memo.rows.value(row, column) as i64;
        let residual = self.residual() - value;
        self.trail.set(&self.state.columns[row], column);
        self.trail.set(&self.state.residual, residual);
    }

    /// Offer the current leaf as a candidate best.
    ///
    /// Records the leaf only if `difference` is strictly smaller than the best so
    /// far, so among equal leaves the first one visited is kept. Returns true if
    /// the leaf was recorded.
    pub fn offer(&mut self, difference: u64) -> bool {
        if self.best_difference().is_some_and(|best| difference >= best) {
            return false;
        }

        let columns = (0..self.nrows()).map(|row| self.column(row)).collect();
        trace!(difference, ?columns, "improved");
        self.state.best = Some(Best {
            difference,
            columns,
        });
        self.statistics.increment_counter(Counters::Improvements);
        true
    }

    /// Mark the node (`row`, `residual`) as explored.
    ///
    /// Returns false if the same row was already entered with the same residual.
    pub fn explore(&mut self, row: usize, residual: i64) -> bool {
        self.state.explored[row].insert(residual)
    }

    /// Smallest difference recorded so far.
    pub fn best_difference(&self) -> Option<u64> {
        self.state.best.as_ref().map(|best| best.difference)
    }

    /// The best leaf as element values, in row order.
    pub fn solution(&self) -> Option<Solution> {
        self.state.best.as_ref().map(|best| Solution {
            difference: best.difference,
            values: best
                .columns
                .iter()
                .enumerate()
                .map(|(row, &column)| self.memo.rows.value(row, column))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Matrix {
        Matrix::new(vec![vec![3, 1, 2], vec![6, 5, 4]]).unwrap()
    }

    #[test]
    fn test_search_context_new() {
        let ctx = SearchContext::new(&matrix(), 6);
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.nrows(), 2);
        assert_eq!(ctx.residual(), 6);
        assert_eq!(ctx.best_difference(), None);
        assert_eq!(ctx.state.columns.len(), 2);
    }

    #[test]
    fn test_choose_uses_sorted_rows() {
        let mut ctx = SearchContext::new(&matrix(), 6);
        ctx.choose(0, 0); // 1
        ctx.choose(1, 2); // 6
        assert_eq!(ctx.residual(), -1);
        assert_eq!(ctx.column(1), 2);
        assert_eq!(ctx.trail.len(), 4);
    }

    #[test]
    fn test_offer_keeps_strict_improvements_only() {
        let mut ctx = SearchContext::new(&matrix(), 6);
        ctx.choose(0, 0);
        ctx.choose(1, 0);
        assert!(ctx.offer(1));

        let checkpoint = ctx.trail.len();
        ctx.choose(1, 1);
        assert!(!ctx.offer(1));
        assert!(ctx.offer(0));
        ctx.trail.rewind_to(checkpoint);

        // Best survives backtracking
        assert_eq!(ctx.best_difference(), Some(0));
        let solution = ctx.solution().unwrap();
        assert_eq!(solution.values, vec![1, 5]);
        assert_eq!(ctx.statistics.get(Counters::Improvements), 2);
    }

    #[test]
    fn test_explore_reports_revisits() {
        let mut ctx = SearchContext::new(&matrix(), 6);
        assert!(ctx.explore(1, 5));
        assert!(ctx.explore(1, 4));
        assert!(!ctx.explore(1, 5));

        // Survives backtracking
        ctx.choose(0, 0);
        ctx.trail.rewind_to(0);
        assert!(!ctx.explore(1, 4));
        assert!(ctx.explore(0, 4));
    }

    #[test]
    fn test_independent_contexts() {
        let memo = MemoizedData::new(&matrix());
        let mut ctx1 = SearchContext::with_memo(memo.clone(), 6);
        let ctx2 = SearchContext::with_memo(memo, -6);

        ctx1.choose(0, 1);
        assert_eq!(ctx1.residual(), 4);
        assert_eq!(ctx2.residual(), -6);
        assert_eq!(ctx2.trail.len(), 0);
    }
}
