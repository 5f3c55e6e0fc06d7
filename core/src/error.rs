use serde::Serialize;
use thiserror::Error;

use crate::classify::ParseCodeError;
use crate::config::ConfigError;
use crate::tickets::book::BookError;
use crate::tickets::model::ValidationError;
use crate::tickets::storage::StorageError;

/// Unified error type for the triage CLI and HTTP API.
///
/// Serializes to JSON so callers can branch on `type`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    #[error("Invalid input: {message}")]
    Validation { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a Not Found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (user can retry or take action)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Fix the input and resend, or reload and retry
            Self::Validation { .. }
            | Self::Conflict { .. }
            | Self::Storage { .. }
            | Self::Io { .. } => true,
            Self::NotFound { .. } | Self::Config { .. } => false,
        }
    }
}

impl From<ParseCodeError> for AppError {
    fn from(err: ParseCodeError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<BookError> for AppError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(id) => AppError::not_found(format!("ticket {id}")),
            BookError::UnknownStaff(id) => AppError::not_found(format!("staff member {id}")),
            BookError::InvalidId(_) => AppError::validation(err.to_string()),
            BookError::Validation(e) => e.into(),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => AppError::storage(format!("IO: {e}")),
            StorageError::Json(e) => AppError::storage(format!("JSON: {e}")),
            StorageError::VersionConflict { .. } => AppError::conflict(err.to_string()),
            StorageError::Book(e) => e.into(),
            StorageError::Poisoned => AppError::storage(err.to_string()),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::io(err.to_string())
    }
}

// CLI commands report errors as plain strings
impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}
