//! # Entities
//!
//! Values that leave the rate engine.
//!
//! - [`ShippingOption`]: A priced, labelled delivery choice

pub mod shipping_option;

pub use shipping_option::ShippingOption;
