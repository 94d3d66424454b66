//! # Application Errors
//!
//! Errors that abort a whole quoting call.
//!
//! Failures scoped to one carrier service never reach this type: the rate
//! engine records them as [`ServiceFailure`](super::services::rate_computation::ServiceFailure)
//! and carries on. What remains are problems with the deployment itself.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Configuration(String)   - Unit or currency not resolvable, invalid settings
//! ├── Domain(DomainError)     - Settings invariant violations
//! ├── Store(StoreError)       - Store collaborator failures
//! ├── Arithmetic              - Store values out of decimal range
//! └── IncompleteRequest       - Required shipment fields missing
//! ```
//!
//! # Examples
//!
//! ```
//! use correios_rates::application::error::ApplicationError;
//!
//! let err = ApplicationError::measure_weight_not_found("kg");
//! assert!(err.is_configuration());
//! assert!(err.to_string().contains("\"kg\""));
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{ArithmeticError, RequestIssue};
use crate::infrastructure::store::StoreError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    /// The deployment is misconfigured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Settings violate a domain invariant.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A store collaborator failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Amounts or measures from the store overflowed.
    #[error("arithmetic error in {context}: {source}")]
    Arithmetic {
        /// What was being computed.
        context: &'static str,
        /// The underlying failure.
        source: ArithmeticError,
    },

    /// The shipment request lacks required fields.
    #[error("incomplete request: {}", join_issues(.0))]
    IncompleteRequest(Vec<RequestIssue>),
}

fn join_issues(issues: &[RequestIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApplicationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Wraps an arithmetic failure while computing `context`.
    #[must_use]
    pub fn arithmetic(context: &'static str, source: ArithmeticError) -> Self {
        Self::Arithmetic { context, source }
    }

    /// The carrier's weight unit is not known to the store.
    #[must_use]
    pub fn measure_weight_not_found(keyword: &str) -> Self {
        Self::configuration(format!(
            "Correios shipping service. Could not load \"{keyword}\" measure weight"
        ))
    }

    /// The carrier's dimension unit is not known to the store.
    #[must_use]
    pub fn measure_dimension_not_found(keyword: &str) -> Self {
        Self::configuration(format!(
            "Correios shipping service. Could not load \"{keyword}\" measure dimension"
        ))
    }

    /// A currency is not known to the store.
    #[must_use]
    pub fn currency_not_found(code: &str) -> Self {
        Self::configuration(format!(
            "Correios shipping service. Could not load \"{code}\" currency"
        ))
    }

    /// Returns true if this is an operator configuration problem.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Domain(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
