//! Error types for the contam-prj crate.
//!
//! PRJ files are positional with no delimiters, so nothing is recoverable:
//! every failure aborts the parse of the current document. Errors carry the
//! physical line number because hand-edited PRJ files are common and the
//! line number is usually the only useful pointer into one.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for PRJ record parsing and file access.
#[derive(Debug, Error)]
pub enum PrjError {
    /// Underlying I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// File does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The input ended while a record still expected more tokens.
    #[error("unexpected end of input at line {line}")]
    UnexpectedEof { line: u32 },

    /// A token could not be parsed as an integer.
    #[error("expected an integer, found '{token}' at line {line}")]
    BadInt { token: String, line: u32 },

    /// A token could not be parsed as a number.
    #[error("expected a number, found '{token}' at line {line}")]
    BadNumber { token: String, line: u32 },

    /// A fixed literal token (such as the `1D:` axis marker) was not found
    /// where the record layout requires it.
    #[error("expected '{expected}', found '{found}' at line {line}")]
    Mismatch {
        expected: String,
        found: String,
        line: u32,
    },

    /// A control node carried a discriminator outside the known set.
    #[error("unknown control node type '{tag}' at line {line}")]
    UnknownControlNode { tag: String, line: u32 },

    /// An airflow element carried a discriminator outside the known set.
    #[error("unknown airflow element type '{tag}' at line {line}")]
    UnknownAirflowElement { tag: String, line: u32 },
}

/// Result type for PRJ operations.
pub type Result<T> = std::result::Result<T, PrjError>;
