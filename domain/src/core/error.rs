//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported locale: {0} (expected one of EN, AR, DE)")]
    UnsupportedLocale(String),

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidFieldValue { field: String, value: String },
}

impl DomainError {
    /// Check if this error is a configuration error.
    ///
    /// Configuration errors come from outside the closed set of supported
    /// values and are not recoverable by the user at runtime.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, DomainError::UnsupportedLocale(_))
    }
}
