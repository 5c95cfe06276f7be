// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use minimize_difference::engine::{Predicate, PredicateResult, TerminalPredicate};
use minimize_difference::SearchContext;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Terminal predicate that suspends at every leaf, so tests can inspect it.
#[derive(Debug)]
pub struct Pause;

impl Predicate for Pause {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }
}

impl TerminalPredicate for Pause {}

/// Minimum difference by enumerating every row-wise combination.
pub fn brute_force(rows: &[Vec<i32>], target: i32) -> u64 {
    fn walk(rows: &[Vec<i32>], residual: i64) -> u64 {
        match rows.split_first() {
            None => residual.unsigned_abs(),
            Some((row, rest)) => row
                .iter()
                .map(|&value| walk(rest, residual - value as i64))
                .min()
                .unwrap_or(u64::MAX),
        }
    }
    walk(rows, target as i64)
}

/// Deterministic random number generator for reproducible tests.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random rectangular matrix with values in `values`.
pub fn random_matrix(
    rng: &mut StdRng,
    nrows: usize,
    ncols: usize,
    values: std::ops::RangeInclusive<i32>,
) -> Vec<Vec<i32>> {
    (0..nrows)
        .map(|_| (0..ncols).map(|_| rng.gen_range(values.clone())).collect())
        .collect()
}
