//! Error types for slit planning and child-reel materialization.

use thiserror::Error;

use crate::model::UpsTier;

/// Error classes reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Missing or zero required selection (1)
    Validation = 1,
    /// Strip width not configured for the chosen tier (2)
    Configuration = 2,
    /// Referenced parent reel missing at materialization time (3)
    NotFound = 3,
    /// Opaque failure from the storage collaborator (4)
    Persistence = 4,
}

/// Main error type for the planner.
#[derive(Debug, Error)]
pub enum SlitError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{ups} width not configured for fan size '{fan}'")]
    Configuration { fan: String, ups: UpsTier },

    #[error("Reel not found: {id}")]
    NotFound { id: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SlitError {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SlitError::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a persistence error.
    pub fn persistence(message: impl Into<String>) -> Self {
        SlitError::Persistence {
            message: message.into(),
        }
    }

    /// Get the error class for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SlitError::Validation { .. } => ErrorCode::Validation,
            SlitError::Configuration { .. } => ErrorCode::Configuration,
            SlitError::NotFound { .. } => ErrorCode::NotFound,
            SlitError::Persistence { .. } => ErrorCode::Persistence,
            SlitError::Io(_) => ErrorCode::Persistence,
            SlitError::Json(_) => ErrorCode::Persistence,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, SlitError>;
