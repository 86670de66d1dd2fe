//! Error types for overpass prediction parsing.

use thiserror::Error;

/// Errors raised while parsing a prediction file.
///
/// Line numbers are 1-based positions in the input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read prediction file: {0}")]
    Io(#[from] std::io::Error),

    #[error("prediction input is empty")]
    Empty,

    #[error("line 1: invalid date '{value}': expected YYYY/MM/DD")]
    InvalidDate { value: String },

    #[error("line {line}: expected 4 or 8 columns, got {count}")]
    ColumnCount { line: usize, count: usize },

    #[error("line {line}: invalid time '{value}': expected HH:MM:SS")]
    InvalidTime { line: usize, value: String },

    #[error("line {line}: invalid {field} value '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Result type for prediction parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
