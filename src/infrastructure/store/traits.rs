//! # Store Collaborator Traits
//!
//! Ports to the e-commerce store the engine quotes for.
//!
//! - [`MeasureService`]: Unit lookup by system keyword and conversion
//! - [`ShippingAggregator`]: Total weight and bounding dimensions of items
//! - [`AddressLookup`]: Address postal codes by id
//! - [`CurrencyService`]: Currency lookup by code and the store's primary currency

use crate::domain::value_objects::{Currency, LineItem, MeasureUnit, PackageDimensions};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Error returned by store collaborators.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store could not be queried.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A conversion could not be performed.
    #[error("conversion failed: {0}")]
    Conversion(String),
}

impl StoreError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a conversion error.
    #[must_use]
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion(message.into())
    }
}

/// Result type for store collaborator calls.
pub type StoreResult<T> = Result<T, StoreError>;

/// Measure unit lookup and conversion from the store's primary units.
#[async_trait]
pub trait MeasureService: Send + Sync + fmt::Debug {
    /// Finds a weight unit by system keyword, e.g. `kg`.
    async fn weight_unit(&self, keyword: &str) -> StoreResult<Option<MeasureUnit>>;

    /// Finds a dimension unit by system keyword, e.g. `centimeter`.
    async fn dimension_unit(&self, keyword: &str) -> StoreResult<Option<MeasureUnit>>;

    /// Converts a weight from the primary weight unit into `unit`.
    async fn convert_weight(&self, value: Decimal, unit: &MeasureUnit) -> StoreResult<Decimal>;

    /// Converts a dimension from the primary dimension unit into `unit`.
    async fn convert_dimension(&self, value: Decimal, unit: &MeasureUnit)
    -> StoreResult<Decimal>;
}

/// Aggregates line items into a single parcel, in the store's primary units.
#[async_trait]
pub trait ShippingAggregator: Send + Sync + fmt::Debug {
    /// Total weight of the items.
    async fn total_weight(&self, items: &[LineItem]) -> StoreResult<Decimal>;

    /// Bounding dimensions of the items packed together.
    async fn dimensions(&self, items: &[LineItem]) -> StoreResult<PackageDimensions>;
}

/// Address lookup.
#[async_trait]
pub trait AddressLookup: Send + Sync + fmt::Debug {
    /// Returns the postal code of an address, if the address exists and has one.
    async fn postal_code(&self, address_id: u32) -> StoreResult<Option<String>>;
}

/// Currency lookup.
#[async_trait]
pub trait CurrencyService: Send + Sync + fmt::Debug {
    /// Finds a currency by ISO code.
    async fn currency_by_code(&self, code: &str) -> StoreResult<Option<Currency>>;

    /// Returns the store's primary pricing currency.
    async fn primary_store_currency(&self) -> StoreResult<Option<Currency>>;
}
