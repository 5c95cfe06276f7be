// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text matrix format used by the `mindiff` binary.
//!
//! One row per line; values separated by whitespace or commas. Blank lines are
//! skipped and `#` starts a comment that runs to the end of the line.

use std::str::FromStr;

use super::Matrix;
use crate::error::InvalidInput;

impl FromStr for Matrix {
    type Err = InvalidInput;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let content = match line.find('#') {
                Some(hash) => &line[..hash],
                None => line,
            };

            let row = content
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token.parse::<i32>().map_err(|_| InvalidInput::Parse {
                        line: index + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if !row.is_empty() {
                rows.push(row);
            }
        }

        Matrix::new(rows)
    }
}
