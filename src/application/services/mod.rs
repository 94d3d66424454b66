//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`RateComputationEngine`]: The "get shipping options" operation
//! - [`RateRequestBuilder`]: Outbound carrier requests from a shipment
//! - [`ShippingEligibility`]: Size and declared value limits

pub mod rate_computation;
pub mod rate_request_builder;
pub mod shipping_eligibility;

pub use rate_computation::{
    RateComputationEngine, ServiceFailure, ServiceOutcome, ShippingOptionResponse,
};
pub use rate_request_builder::{RateRequestBuilder, StoreCollaborators};
pub use shipping_eligibility::ShippingEligibility;
