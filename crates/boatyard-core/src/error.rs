//! Errors raised by the yard controller and layout loading.

use thiserror::Error;

/// Yard errors.
#[derive(Debug, Error)]
pub enum YardError {
    #[error("Invalid {field}: {value} (must be a finite number greater than 0)")]
    InvalidDimension { field: &'static str, value: f64 },
    #[error("Invalid setting {field}: {value}")]
    InvalidSetting { field: &'static str, value: f64 },
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Boat not found: {0}")]
    BoatNotFound(String),
    #[error("Duplicate boat id: {0}")]
    DuplicateBoat(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for YardError {
    fn from(err: serde_json::Error) -> Self {
        YardError::Serialization(err.to_string())
    }
}

/// Result type for yard operations.
pub type YardResult<T> = Result<T, YardError>;
