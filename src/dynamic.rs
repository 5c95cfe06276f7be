// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reachable-sums strategy.
//!
//! Instead of enumerating paths, keep the set of partial sums reachable after
//! each row. A partial sum `s` ahead of rows with achievable range `[lo, hi]`
//! ends somewhere in `[s + lo, s + hi]`. When that whole interval is at or above
//! the target, the smallest such `s` is at least as good as every other one;
//! symmetrically for intervals at or below the target. Only the sums whose
//! interval straddles the target, plus those two representatives, survive.
//!
//! The set is therefore bounded by the spread of the remaining rows rather than
//! by the number of paths. With small values (70 × 70 entries up to 70) it stays
//! within a few thousand sums.

use std::collections::BTreeMap;

use tracing::debug;

use crate::context::MemoizedData;
use crate::minimizer::Solution;

/// How a partial sum was first reached.
#[derive(Debug, Clone, Copy)]
struct Step {
    previous: i64,
    value: i32,
}

/// Minimize `|target − sum|` over one choice per row by reachable partial sums.
pub fn minimize_by_reachable_sums(memo: &MemoizedData, target: i32) -> Solution {
    let target = target as i64;
    let nrows = memo.nrows();
    let mut layers: Vec<BTreeMap<i64, Step>> = Vec::with_capacity(nrows);
    let mut frontier: Vec<i64> = vec![0];

    for row in 0..nrows {
        let mut next = BTreeMap::new();
        for &previous in &frontier {
            for &value in memo.rows.row(row) {
                next.entry(previous + value as i64)
                    .or_insert(Step { previous, value });
            }
        }

        let (lo, hi) = memo.bounds.achievable_range(row + 1);
        let next = collapse(next, target - lo, target - hi);
        frontier = next.keys().copied().collect();
        layers.push(next);
    }

    let (difference, sum) = frontier
        .iter()
        .map(|&sum| ((target - sum).unsigned_abs(), sum))
        .fold((u64::MAX, 0), |best, candidate| best.min(candidate));

    let mut values = vec![0; nrows];
    let mut sum_at = sum;
    for (row, layer) in layers.iter().enumerate().rev() {
        let step = layer[&sum_at];
        values[row] = step.value;
        sum_at = step.previous;
    }

    debug!(
        difference,
        peak = layers.iter().map(BTreeMap::len).max().unwrap_or(0),
        "reachable sums done"
    );

    Solution { difference, values }
}

/// Keep the sums in `[largest ≤ below, smallest ≥ above]`.
///
/// Sums at or above `above` can only finish at or above the target, and the
/// smallest of them dominates; likewise the largest sum at or below `below`.
fn collapse(mut sums: BTreeMap<i64, Step>, above: i64, below: i64) -> BTreeMap<i64, Step> {
    if let Some(smallest_above) = sums.range(above..).next().map(|(&sum, _)| sum) {
        let _ = sums.split_off(&(smallest_above + 1));
    }
    match sums.range(..=below).next_back().map(|(&sum, _)| sum) {
        Some(largest_below) => sums.split_off(&largest_below),
        None => sums,
    }
}
