// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sorted, deduplicated rows.
//!
//! Row choices are explored in ascending order. Two equal values in one row
//! head identical subtrees, so only one copy is kept.

use crate::matrix::Matrix;

/// Rows of a matrix, each sorted ascending without duplicates.
///
/// Row order is preserved: row `i` here is row `i` of the input. Only the order
/// of elements within a row changes, which cannot affect any sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedRows {
    rows: Vec<Vec<i32>>,
}

impl SortedRows {
    pub fn new(matrix: &Matrix) -> Self {
        let rows = matrix
            .rows()
            .iter()
            .map(|row| {
                let mut sorted = row.clone();
                sorted.sort_unstable();
                sorted.dedup();
                sorted
            })
            .collect();
        Self { rows }
    }

    /// Distinct values of row `row`, ascending.
    pub fn row(&self, row: usize) -> &[i32] {
        &self.rows[row]
    }

    /// Value of choice `column` in row `row`.
    pub fn value(&self, row: usize, column: usize) -> i32 {
        self.rows[row][column]
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Rows in input order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[i32]> + ExactSizeIterator {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sorted_and_deduplicated() {
        let matrix = Matrix::new(vec![vec![3, 1, 3, 2], vec![5, 5, 5, 5]]).unwrap();
        let rows = SortedRows::new(&matrix);

        assert_eq!(rows.nrows(), 2);
        assert_eq!(rows.iter().rev().next(), Some(&[5][..]));
        assert_eq!(rows.row(0), &[1, 2, 3]);
        assert_eq!(rows.row(1), &[5]);
        assert_eq!(rows.value(0, 2), 3);
    }

    #[test]
    fn test_negative_values_sort_first() {
        let matrix = Matrix::new(vec![vec![0, -3, 7, -10]]).unwrap();
        let rows = SortedRows::new(&matrix);
        assert_eq!(rows.row(0), &[-10, -3, 0, 7]);
    }
}
