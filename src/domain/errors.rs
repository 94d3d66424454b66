//! # Domain Errors
//!
//! Error types for domain invariant violations.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_service_token("04510]");
//! assert!(err.to_string().contains("04510]"));
//! ```

use thiserror::Error;

/// Error type for domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A service code is empty or contains reserved characters.
    #[error("invalid service code: {0:?}")]
    InvalidServiceCode(String),

    /// A token of the enabled-services string is not bracket-delimited.
    #[error("invalid service token: {0:?}")]
    InvalidServiceToken(String),

    /// The same service code appears twice in a service catalog.
    #[error("duplicate service code in catalog: {0}")]
    DuplicateServiceCode(String),

    /// The same service name appears twice in a service catalog.
    #[error("duplicate service name in catalog: {0}")]
    DuplicateServiceName(String),

    /// A configured minimum is greater than its maximum.
    #[error("invalid bounds for {measure}: minimum {min} exceeds maximum {max}")]
    InvalidBounds {
        /// The measure the bounds apply to.
        measure: &'static str,
        /// The configured minimum.
        min: String,
        /// The configured maximum.
        max: String,
    },

    /// A configured value is outside its accepted range.
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// Description of the problem.
        message: String,
    },
}

impl DomainError {
    /// Creates an invalid service code error.
    #[must_use]
    pub fn invalid_service_code(code: impl Into<String>) -> Self {
        Self::InvalidServiceCode(code.into())
    }

    /// Creates an invalid service token error.
    #[must_use]
    pub fn invalid_service_token(token: impl Into<String>) -> Self {
        Self::InvalidServiceToken(token.into())
    }

    /// Creates an invalid bounds error.
    #[must_use]
    pub fn invalid_bounds(
        measure: &'static str,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::InvalidBounds {
            measure,
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
