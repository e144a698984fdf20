//! Error Types
//!
//! None of these are fatal: validation errors block a form submission,
//! export errors become a notice or a log line.

use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;
pub type ExportResult<T> = Result<T, ExportError>;

/// Rejected add-item input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("quantity must be at least 1")]
    NonPositiveQuantity,
    #[error("quantity must be a whole number, got {0:?}")]
    InvalidQuantity(String),
}

/// Failure talking to an export collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The host platform does not offer this capability
    #[error("{capability} is not supported on this platform")]
    Unsupported { capability: &'static str },
    /// The collaborator exists but the action failed or was rejected
    #[error("{action} failed: {message}")]
    ExternalAction { action: &'static str, message: String },
}

impl ExportError {
    pub fn unsupported(capability: &'static str) -> Self {
        ExportError::Unsupported { capability }
    }

    pub fn external(action: &'static str, message: impl Into<String>) -> Self {
        ExportError::ExternalAction {
            action,
            message: message.into(),
        }
    }

    /// Whether the user should be told (as opposed to just logging it)
    pub fn is_user_visible(&self) -> bool {
        matches!(self, ExportError::Unsupported { .. })
    }
}
