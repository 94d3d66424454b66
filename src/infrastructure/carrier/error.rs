//! # Carrier Errors
//!
//! Transport-level errors from the carrier gateway.
//!
//! Every variant concerns a single service code: the rate engine logs it and
//! carries on with the other services.
//!
//! # Examples
//!
//! ```
//! use correios_rates::infrastructure::carrier::error::CarrierError;
//!
//! let error = CarrierError::timeout("no answer after 5000ms");
//! assert!(error.is_transient());
//!
//! let error = CarrierError::authentication("invalid company code");
//! assert!(!error.is_transient());
//! ```

use thiserror::Error;

/// Error type for carrier gateway calls.
#[derive(Debug, Clone, Error)]
pub enum CarrierError {
    /// Request timed out.
    #[error("carrier timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("carrier connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Credentials rejected.
    #[error("carrier authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// The answer could not be decoded.
    #[error("carrier protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// The carrier has no answer for this service.
    #[error("carrier service unavailable: {message}")]
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal gateway error.
    #[error("carrier internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl CarrierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates a service unavailable error.
    #[must_use]
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the failure is transient.
    ///
    /// Quotes are never retried within a call; this only informs logging.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }

    /// Returns the timeout in milliseconds, if this is a timeout.
    #[must_use]
    pub fn timeout_ms(&self) -> Option<u64> {
        match self {
            Self::Timeout { timeout_ms, .. } => *timeout_ms,
            _ => None,
        }
    }
}

/// Result type for carrier gateway calls.
pub type CarrierResult<T> = Result<T, CarrierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_transient() {
        let error = CarrierError::timeout_with_duration("slow", 5000);
        assert!(error.is_transient());
        assert_eq!(error.timeout_ms(), Some(5000));
    }

    #[test]
    fn connection_is_transient() {
        assert!(CarrierError::connection("reset").is_transient());
    }

    #[test]
    fn protocol_is_not_transient() {
        let error = CarrierError::protocol("unexpected body");
        assert!(!error.is_transient());
        assert!(error.timeout_ms().is_none());
    }

    #[test]
    fn display_format() {
        let display = CarrierError::timeout("request timed out").to_string();
        assert!(display.contains("timeout"));
        assert!(display.contains("request timed out"));
    }
}
