// numconv/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// A token is not a decimal integer
    #[error("'{token}' is not a valid number - {reason}")]
    Parse {
        /// Offending input token
        token: String,
        /// Parser message
        reason: String,
    },

    /// Nothing in the input could be converted
    #[error("no valid numbers in input ({skipped} records skipped)")]
    EmptyInput {
        /// Tokens rejected while processing the batch
        skipped: usize,
    },

    /// Value outside the two's-complement range of the width
    #[error("value {value} does not fit in {width} bits")]
    WidthOverflow {
        /// Rejected value
        value: i64,
        /// Width it was encoded at
        width: u32,
    },

    /// Bit width outside 1..=64
    #[error("invalid bit width {0}: expected 1..=64")]
    InvalidWidth(u32),

    /// Character outside a digit alphabet
    #[error("invalid digit {digit:?}: expected {expected}")]
    InvalidDigit {
        /// Offending character
        digit: char,
        /// Accepted alphabet
        expected: &'static str,
    },

    /// Input file does not exist
    #[error("file not found - {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the per-value conditions the pipeline recovers from by
    /// skipping the offending token.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::WidthOverflow { .. })
    }
}

/// Crate result alias
pub type Result<T> = std::result::Result<T, Error>;
