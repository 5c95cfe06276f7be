// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use strum_macros::{Display, EnumIter, EnumString};

/// How the minimum is computed. Every strategy returns the same difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Depth-first search on the predicate engine, one thread.
    #[default]
    Backtrack,

    /// One independent search per distinct first-row value, on the rayon pool.
    ///
    /// Falls back to `Backtrack` when built without the `parallel` feature.
    Parallel,

    /// Row-by-row set of reachable partial sums.
    ReachableSums,
}

/// Options for [`Minimizer`](crate::minimizer::Minimizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,

    /// Skip subtrees whose achievable sum range cannot beat the best leaf.
    pub prune: bool,

    /// Stop as soon as some choice hits the target exactly.
    pub stop_on_exact: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Backtrack,
            prune: true,
            stop_on_exact: true,
        }
    }
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_stop_on_exact(mut self, stop_on_exact: bool) -> Self {
        self.stop_on_exact = stop_on_exact;
        self
    }

    /// Visit every leaf: no pruning, no early stop.
    pub fn exhaustive(self) -> Self {
        self.with_pruning(false).with_stop_on_exact(false)
    }
}
