// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated input matrix.
//!
//! A [`Matrix`] is non-empty and rectangular with at least one column, so every
//! row offers at least one choice. All search code relies on this.

mod parse;

use crate::error::InvalidInput;

/// A rectangular, non-empty matrix of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<i32>>,
    ncols: usize,
}

impl Matrix {
    /// Validate `rows` and wrap them.
    ///
    /// # Errors
    ///
    /// - [`InvalidInput::EmptyMatrix`] if there are no rows
    /// - [`InvalidInput::EmptyRow`] if a row has no elements
    /// - [`InvalidInput::RaggedRow`] if a row differs in length from row 0
    ///
    /// # Example
    ///
    /// ```
    /// use minimize_difference::matrix::Matrix;
    ///
    /// let matrix = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!((matrix.nrows(), matrix.ncols()), (2, 3));
    /// assert!(Matrix::new(vec![]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<i32>>) -> Result<Self, InvalidInput> {
        let ncols = match rows.first() {
            None => return Err(InvalidInput::EmptyMatrix),
            Some(first) => first.len(),
        };

        for (row, values) in rows.iter().enumerate() {
            if values.is_empty() {
                return Err(InvalidInput::EmptyRow { row });
            }
            if values.len() != ncols {
                return Err(InvalidInput::RaggedRow {
                    row,
                    expected: ncols,
                    found: values.len(),
                });
            }
        }

        Ok(Self { rows, ncols })
    }

    /// All rows, in input order.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// One row.
    ///
    /// # Panics
    ///
    /// Panics if `index >= nrows()`.
    pub fn row(&self, index: usize) -> &[i32] {
        &self.rows[index]
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of leaves in the full decision tree, saturating at `u64::MAX`.
    pub fn combinations(&self) -> u64 {
        let ncols = self.ncols as u64;
        self.rows.iter().fold(1u64, |acc, _| acc.saturating_mul(ncols))
    }
}
