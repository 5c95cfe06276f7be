// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Behaviour of the minimizer on known inputs, edge cases and random matrices
//! checked against exhaustive enumeration.

mod common;

use common::{brute_force, random_matrix, rng};
use minimize_difference::{
    minimize_the_difference, InvalidInput, Matrix, Minimizer, SearchConfig, Strategy,
};
use rand::seq::SliceRandom;

#[test]
fn test_single_row_picks_closest() {
    assert_eq!(minimize_the_difference(vec![vec![1, 2, 9, 8, 7]], 6), Ok(1));
}

#[test]
fn test_two_rows_hit_target() {
    let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
    assert_eq!(brute_force(&rows, 6), 0);
    assert_eq!(minimize_the_difference(rows, 6), Ok(0));
}

#[test]
fn test_single_combination() {
    assert_eq!(minimize_the_difference(vec![vec![1], vec![2], vec![3]], 100), Ok(94));
}

#[test]
fn test_target_outside_achievable_range() {
    let rows = vec![vec![4, 9], vec![1, 3], vec![7, 2]];
    let minimizer = Minimizer::new(&Matrix::new(rows).unwrap());
    // All-maximum sum is 9 + 3 + 7 = 19, all-minimum is 4 + 1 + 2 = 7
    assert_eq!(minimizer.minimize(1000), 981);
    assert_eq!(minimizer.minimize(-50), 57);
}

#[test]
fn test_negative_values() {
    let rows = vec![vec![-5, -1, 3], vec![-7, 2, 6], vec![0, -3, 4]];
    for target in -20..=20 {
        assert_eq!(
            minimize_the_difference(rows.clone(), target),
            Ok(brute_force(&rows, target)),
            "target {}",
            target
        );
    }
}

#[test]
fn test_duplicate_values() {
    let rows = vec![vec![5, 5, 5], vec![5, 5, 5]];
    assert_eq!(minimize_the_difference(rows.clone(), 10), Ok(0));
    assert_eq!(minimize_the_difference(rows, 3), Ok(7));
}

#[test]
fn test_invalid_input_rejected() {
    assert_eq!(minimize_the_difference(vec![], 0), Err(InvalidInput::EmptyMatrix));
    assert_eq!(
        minimize_the_difference(vec![vec![], vec![]], 0),
        Err(InvalidInput::EmptyRow { row: 0 })
    );
    assert_eq!(
        minimize_the_difference(vec![vec![1, 2], vec![3, 4, 5]], 0),
        Err(InvalidInput::RaggedRow {
            row: 1,
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn test_repeated_calls_agree() {
    let matrix = Matrix::new(vec![vec![3, 8, 1], vec![9, 2, 4], vec![6, 6, 5]]).unwrap();
    let minimizer = Minimizer::new(&matrix);
    let first = minimizer.solve(14);
    for _ in 0..5 {
        assert_eq!(minimizer.solve(14), first);
    }
    assert_eq!(Minimizer::new(&matrix).solve(14), first);
}

#[test]
fn test_witness_attains_difference() {
    let mut rng = rng(7);
    for _ in 0..50 {
        let rows = random_matrix(&mut rng, 4, 4, -20..=20);
        let target = rng_target(&mut rng);
        let solution = Minimizer::new(&Matrix::new(rows.clone()).unwrap()).solve(target);

        assert_eq!(solution.values.len(), rows.len());
        for (row, value) in rows.iter().zip(&solution.values) {
            assert!(row.contains(value));
        }
        assert_eq!(
            solution.difference,
            (target as i64 - solution.sum()).unsigned_abs()
        );
    }
}

#[test]
fn test_matches_brute_force() {
    let mut rng = rng(1981);
    for nrows in 1..=4 {
        for ncols in 1..=4 {
            for _ in 0..20 {
                let rows = random_matrix(&mut rng, nrows, ncols, -10..=70);
                let target = rng_target(&mut rng);
                assert_eq!(
                    minimize_the_difference(rows.clone(), target),
                    Ok(brute_force(&rows, target)),
                    "rows {:?} target {}",
                    rows,
                    target
                );
            }
        }
    }
}

#[test]
fn test_permutation_invariance() {
    let mut rng = rng(42);
    for _ in 0..30 {
        let mut rows = random_matrix(&mut rng, 4, 4, 1..=70);
        let target = rng_target(&mut rng);
        let expected = minimize_the_difference(rows.clone(), target);

        for row in rows.iter_mut() {
            row.shuffle(&mut rng);
        }
        assert_eq!(minimize_the_difference(rows.clone(), target), expected);

        rows.shuffle(&mut rng);
        assert_eq!(minimize_the_difference(rows, target), expected);
    }
}

#[test]
fn test_full_size_matrix() {
    // 70 rows, each a shuffle of 1..=70: every sum in [70, 4900] is reachable
    let mut rng = rng(70);
    let rows: Vec<Vec<i32>> = (0..70)
        .map(|_| {
            let mut row: Vec<i32> = (1..=70).collect();
            row.shuffle(&mut rng);
            row
        })
        .collect();
    let matrix = Matrix::new(rows).unwrap();
    let minimizer = Minimizer::new(&matrix);

    assert_eq!(minimizer.minimize(1), 69);
    assert_eq!(minimizer.minimize(800), 0);

    let reachable = Minimizer::new(&matrix)
        .with_config(SearchConfig::default().with_strategy(Strategy::ReachableSums));
    assert_eq!(reachable.minimize(2345), 0);
    assert_eq!(reachable.minimize(5000), 100);
}

#[test]
fn test_odd_target_with_even_values() {
    // Every sum is even, so no exact match exists inside the range
    let row: Vec<i32> = (2..=70).step_by(2).collect();
    assert_eq!(minimize_the_difference(vec![row; 12], 301), Ok(1));
}

#[test]
fn test_odd_target_with_even_values_at_full_size() {
    // 70 rows of 70 even values in [2, 70]
    let row: Vec<i32> = (1..=70).map(|v| 2 * ((v + 1) / 2)).collect();
    let rows = vec![row; 70];

    assert_eq!(minimize_the_difference(rows.clone(), 2001), Ok(1));
    assert_eq!(minimize_the_difference(rows.clone(), 4899), Ok(1));

    let matrix = Matrix::new(rows).unwrap();
    let solution = Minimizer::new(&matrix).solve(2001);
    assert_eq!(solution.difference, 1);
    assert_eq!((2001 - solution.sum()).abs(), 1);

    let reachable = Minimizer::new(&matrix)
        .with_config(SearchConfig::default().with_strategy(Strategy::ReachableSums));
    assert_eq!(reachable.minimize(2001), 1);
}

fn rng_target(rng: &mut rand::rngs::StdRng) -> i32 {
    use rand::Rng;
    rng.gen_range(-50..=300)
}
