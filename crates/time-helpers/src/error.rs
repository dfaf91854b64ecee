//! Error types for time-helpers operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeHelpersError {
    #[error("Invalid offset: {0}")]
    Parse(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, TimeHelpersError>;
