// File: crates/survey-sim/src/error.rs
// Summary: Error taxonomy for generation, aggregation and observation I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Caller configuration error (bad spread, mean or sample count). Raised before any draw.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A category reached aggregation without a single observation.
    #[error("insufficient data: category '{category}' has no observations")]
    InsufficientData { category: String },

    /// An observation refers to a category outside the supplied sequence.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
