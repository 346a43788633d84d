//! Error type for structural misuse of the engine
//!
//! Numeric paths never fail; they return empty candidate sets, no-op
//! components or documented sentinels. Only malformed inputs that a caller can
//! fix (a bad index, a non-positive reference, mismatched vectors, an
//! unrecognised name) are errors.

use thiserror::Error;

/// Errors raised by `smith-core`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmithError {
    #[error("reference impedance must be positive, got {0}")]
    InvalidReference(f64),

    #[error("segment index {index} out of range for trajectory with {len} segments")]
    SegmentIndex { index: usize, len: usize },

    #[error("length mismatch: {frequencies} frequency points but {samples} reflection samples")]
    LengthMismatch { frequencies: usize, samples: usize },

    #[error("unknown {what}: {value:?}")]
    UnknownName { what: &'static str, value: String },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SmithError>;
