//! Crate `error` provides the boundary error type for malformed input and
//! internal invariant failures. The search itself never surfaces a
//! `SolverError` for an ordinary conflict or a reached limit; both of those
//! stay on the lower-level `bool`/counter protocol internal to `bcp` and
//! `search`.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("puzzle string has invalid length {got} (expected 81 or 729 bytes)")]
    InvalidPuzzleLength { got: usize },

    #[error("invalid digit at position {position}: byte {byte:#04x}")]
    InvalidDigit { position: usize, byte: u8 },

    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),
}
