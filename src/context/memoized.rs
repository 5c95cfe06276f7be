// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (Tier 1: MEMO).

use tracing::debug;

use crate::matrix::Matrix;
use crate::memo::{RowBounds, SortedRows};

/// Immutable precomputed data (Tier 1: MEMO).
///
/// Computed once per matrix and never changed during search. It does not depend
/// on the target, so one copy serves any number of searches over the same matrix.
///
/// # Size
///
/// One `i32` per distinct row value plus two `i64` per row. For the problem sizes
/// of interest (70 rows of 70 values) that is well under 64 KB, so each
/// SearchContext simply owns a clone.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// Rows sorted ascending, duplicates removed.
    pub rows: SortedRows,

    /// Achievable sum range of each row suffix.
    pub bounds: RowBounds,
}

impl MemoizedData {
    pub fn new(matrix: &Matrix) -> Self {
        let rows = SortedRows::new(matrix);
        let bounds = RowBounds::new(&rows);

        debug!(
            rows = rows.nrows(),
            columns = matrix.ncols(),
            distinct = rows.iter().map(<[i32]>::len).sum::<usize>(),
            range = ?bounds.achievable_range(0),
            "memoized data initialized"
        );

        Self { rows, bounds }
    }

    /// Number of rows, which is the depth of the decision tree.
    pub fn nrows(&self) -> usize {
        self.rows.nrows()
    }
}
