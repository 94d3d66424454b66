//! # Domain Services
//!
//! Pure rate-computation rules: measurement normalization, carrier answer
//! validation, quote composition, fallback pricing and tracking links.

pub mod currency_adjustment;
pub mod fallback;
pub mod quote_composer;
pub mod response_validator;
pub mod shipment_tracker;
pub mod unit_normalizer;

pub use currency_adjustment::CurrencyAdjustment;
pub use fallback::FallbackPolicy;
pub use quote_composer::{PricingRules, QuoteComposer};
pub use response_validator::{QuoteRejection, ValidatedQuote};
pub use shipment_tracker::ShipmentTracker;
pub use unit_normalizer::DimensionBounds;
