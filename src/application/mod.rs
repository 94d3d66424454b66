//! # Application Layer
//!
//! Use cases over the domain and the carrier and store ports.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{
    RateComputationEngine, RateRequestBuilder, ServiceFailure, ShippingEligibility,
    ShippingOptionResponse, StoreCollaborators,
};
