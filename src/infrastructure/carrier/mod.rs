//! # Carrier Integration
//!
//! Port and supporting types for the carrier's rate service.
//!
//! - [`CarrierGateway`]: The outbound per-service call
//! - [`CarrierError`]: Transport failures, scoped to one service code
//! - [`ReplayGateway`]: Gateway answering from recorded results

pub mod error;
pub mod replay;
pub mod traits;

pub use error::{CarrierError, CarrierResult};
pub use replay::{Recording, ReplayGateway};
pub use traits::CarrierGateway;
