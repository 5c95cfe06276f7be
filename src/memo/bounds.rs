// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Achievable sum ranges of row suffixes.
//!
//! For row `i` the range is `[Σ min(row j), Σ max(row j)]` over `j in i..n`. Every
//! completion of a partial choice lands in that range, which gives a lower bound
//! on the difference any completion can reach.

use super::SortedRows;

/// Suffix sum bounds, indexed by the first row not yet chosen.
///
/// Entry `n` (all rows chosen) is the empty range `[0, 0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBounds {
    suffix_min: Vec<i64>,
    suffix_max: Vec<i64>,
}

impl RowBounds {
    pub fn new(rows: &SortedRows) -> Self {
        let n = rows.nrows();
        let mut suffix_min = vec![0i64; n + 1];
        let mut suffix_max = vec![0i64; n + 1];

        for (i, row) in rows.iter().enumerate().rev() {
            // Rows are sorted and non-empty
            let lo = row[0] as i64;
            let hi = row[row.len() - 1] as i64;
            suffix_min[i] = suffix_min[i + 1] + lo;
            suffix_max[i] = suffix_max[i + 1] + hi;
        }

        Self {
            suffix_min,
            suffix_max,
        }
    }

    /// Smallest and largest sum reachable by choosing in rows `row..n`.
    pub fn achievable_range(&self, row: usize) -> (i64, i64) {
        (self.suffix_min[row], self.suffix_max[row])
    }

    /// Lower bound on `|residual − s|` over every sum `s` reachable from `row`.
    ///
    /// Zero whenever `residual` lies inside the range; the bound is then not
    /// necessarily attained.
    pub fn lower_bound(&self, row: usize, residual: i64) -> u64 {
        let (lo, hi) = self.achievable_range(row);
        if residual < lo {
            (lo - residual) as u64
        } else if residual > hi {
            (residual - hi) as u64
        } else {
            0
        }
    }

    /// Whether nothing reachable from `row` can get strictly below `best`.
    pub fn cannot_improve(&self, row: usize, residual: i64, best: Option<u64>) -> bool {
        match best {
            Some(best) => self.lower_bound(row, residual) >= best,
            None => false,
        }
    }
}
