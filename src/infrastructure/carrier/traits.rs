//! # Carrier Gateway Trait
//!
//! Port definition for the carrier's price-and-lead-time service.
//!
//! The rate engine calls [`CarrierGateway::quote`] once per enabled service
//! code. Implementations own the wire protocol; the engine only sees a
//! [`RawCarrierResult`] or a [`CarrierError`](super::error::CarrierError).
//!
//! # Examples
//!
//! ```ignore
//! use correios_rates::infrastructure::carrier::traits::CarrierGateway;
//!
//! struct SoapGateway { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl CarrierGateway for SoapGateway {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::value_objects::{CarrierRateRequest, RawCarrierResult};
use crate::infrastructure::carrier::error::CarrierResult;
use async_trait::async_trait;
use std::fmt;

/// Interface to the carrier's rate service.
///
/// Calls may be slow or fail; the engine bounds each one with a timeout and
/// treats any error as affecting that service code only.
#[async_trait]
pub trait CarrierGateway: Send + Sync + fmt::Debug {
    /// Returns the gateway name, for logs.
    fn name(&self) -> &str;

    /// Requests price and lead time for one service code.
    ///
    /// # Errors
    ///
    /// - `CarrierError::Timeout` - The carrier did not answer in time
    /// - `CarrierError::Connection` - The carrier could not be reached
    /// - `CarrierError::Protocol` - The answer could not be decoded
    async fn quote(&self, request: &CarrierRateRequest) -> CarrierResult<RawCarrierResult>;
}
