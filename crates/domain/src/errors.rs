//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for NutriFlow
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum NutriFlowError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("No active session")]
    Unauthenticated,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    #[error("No food recognized: {0}")]
    NoFoodRecognized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for NutriFlow operations
pub type Result<T> = std::result::Result<T, NutriFlowError>;

/// Field-level validation failure for a meal candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("{field} out of range: {value} exceeds {max}")]
    OutOfRange { field: String, value: u32, max: u32 },
}

impl From<ValidationError> for NutriFlowError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
