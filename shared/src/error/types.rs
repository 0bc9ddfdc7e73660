//! Application error type

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// The core view computations are total; this type only appears at the
/// loading, validation, deletion and configuration boundaries.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (file path, offending record, ...)
    pub details: Option<BTreeMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from(self.code)
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a party not found error
    pub fn party_not_found(party_id: i64) -> Self {
        Self::with_message(ErrorCode::PartyNotFound, format!("Party {} not found", party_id))
            .with_detail("party_id", party_id)
    }

    /// Create a dataset not found error
    pub fn dataset_not_found(path: impl Into<String>) -> Self {
        let p = path.into();
        Self::with_message(ErrorCode::DatasetNotFound, format!("Dataset file {} not found", p))
            .with_detail("path", p)
    }

    /// Create a dataset unreadable error
    pub fn unreadable(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatasetUnreadable, msg)
    }

    /// Create a malformed dataset error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatasetMalformed, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
            .with_detail("line", err.line())
            .with_detail("column", err.column())
    }
}

/// Result type for fallible boundary operations
pub type AppResult<T> = Result<T, AppError>;
