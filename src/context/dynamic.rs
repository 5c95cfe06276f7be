// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).

use std::collections::HashSet;

use super::MemoizedData;
use crate::trail::{Trail, Trailed};

/// Best leaf seen so far.
///
/// Not trail-tracked: it must survive backtracking out of the branch that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Best {
    /// `|target − sum|` at the leaf.
    pub difference: u64,
    /// Chosen column of every row, indexing the sorted rows.
    pub columns: Vec<usize>,
}

/// Mutable search state (Tier 2: DYNAMIC).
///
/// The residual and the chosen columns fully describe a node of the decision
/// tree together with the engine's round; both are trail-tracked, so
/// backtracking restores them.
#[derive(Debug)]
pub struct DynamicState {
    pub target: i32,

    /// Target minus the sum of the choices made so far.
    pub residual: Trailed<i64>,

    /// Chosen column for each row. Only meaningful for rows already chosen.
    pub columns: Vec<Trailed<usize>>,

    /// Running best, monotonically decreasing.
    pub best: Option<Best>,

    /// Residuals already searched below each row, not trail-tracked.
    ///
    /// The subtree below a node depends only on its row and residual, so a
    /// second visit cannot find a strictly better leaf.
    pub explored: Vec<HashSet<i64>>,
}

impl DynamicState {
    /// Create initial dynamic state, registering its variables on `trail`.
    pub fn new(memo: &MemoizedData, target: i32, trail: &mut Trail) -> Self {
        let residual = trail.register(target as i64);
        let columns = (0..memo.nrows()).map(|_| trail.register(0usize)).collect();
        Self {
            target,
            residual,
            columns,
            best: None,
            explored: vec![HashSet::new(); memo.nrows()],
        }
    }
}
