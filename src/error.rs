// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for matrix validation.
//!
//! Once a [`Matrix`](crate::matrix::Matrix) exists the search cannot fail, so
//! rejecting malformed input at construction is the only error path.

use thiserror::Error;

/// A matrix that cannot be searched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The matrix has no rows.
    #[error("matrix has no rows")]
    EmptyMatrix,

    /// A row has no elements, so no choice can be made for it.
    #[error("row {row} has no elements")]
    EmptyRow { row: usize },

    /// Rows differ in length.
    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A token of the text format is not an integer.
    #[error("line {line}: cannot parse {token:?} as an integer")]
    Parse { line: usize, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_row() {
        let err = InvalidInput::RaggedRow {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(err.to_string(), "row 2 has 1 elements, expected 3");
        assert_eq!(
            InvalidInput::EmptyRow { row: 0 }.to_string(),
            "row 0 has no elements"
        );
    }

    #[test]
    fn test_parse_message_quotes_token() {
        let err = InvalidInput::Parse {
            line: 4,
            token: String::from("x1"),
        };
        assert_eq!(err.to_string(), "line 4: cannot parse \"x1\" as an integer");
    }
}
