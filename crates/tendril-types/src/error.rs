//! Error types for the tendril simulator.
//!
//! Construction and I/O paths return `TendrilResult<T>`. Per-tick
//! updates never fail; degenerate geometry is skipped, not reported.

use thiserror::Error;

/// Unified error type for tendril.
#[derive(Debug, Error)]
pub enum TendrilError {
    /// Configuration value is out of its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Chain topology or initial geometry is unusable.
    #[error("Invalid chain: {0}")]
    InvalidChain(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A simulation invariant was violated (e.g., a non-finite position).
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for `Result<T, TendrilError>`.
pub type TendrilResult<T> = Result<T, TendrilError>;
