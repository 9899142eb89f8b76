//! Error types shared across the crate.

use thiserror::Error;

/// Why a piece of text could not be read as a digit sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,
    #[error("input is not numeric: {found:?}")]
    NonNumeric { found: String },
}

/// Contract violations detected by the classification engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("guess has {actual} digits but the secret has {expected}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("value {value} at position {position} is not a decimal digit")]
    InvalidDigit { position: usize, value: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("secret has {length} digits, analysis supports at most {max}")]
    TooLong { length: usize, max: usize },
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}
