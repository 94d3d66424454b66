//! # Shipment Request
//!
//! The per-call description of what is being shipped and where.
//!
//! A request is complete only when it has items and a shipping address with
//! country, state and postal code. [`ShipmentRequest::issues`] collects every
//! missing field rather than stopping at the first one.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::value_objects::shipment::{RequestIssue, ShipmentRequest};
//!
//! let request = ShipmentRequest::default();
//! assert_eq!(request.issues().len(), 5);
//! assert_eq!(request.issues()[0], RequestIssue::NoShipmentItems);
//! ```

use crate::domain::value_objects::arithmetic::{ArithmeticResult, checked_sum};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A product as seen by the rate engine, in the store's primary units.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: u32,
    /// Unit price in the store's primary currency.
    pub price: Decimal,
    /// Unit weight.
    pub weight: Decimal,
    /// Unit length.
    pub length: Decimal,
    /// Unit width.
    pub width: Decimal,
    /// Unit height.
    pub height: Decimal,
}

/// A cart or order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The product shipped.
    pub product: Product,
    /// Number of units.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item.
    #[must_use]
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }
}

/// Destination address fields the carrier needs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Country identifier.
    pub country_id: Option<u32>,
    /// State or province identifier.
    pub state_province_id: Option<u32>,
    /// Postal code (CEP).
    pub zip_postal_code: Option<String>,
}

impl ShippingAddress {
    /// Returns the postal code if present and not blank.
    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        non_blank(self.zip_postal_code.as_deref())
    }
}

/// Reference to the warehouse a shipment leaves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseRef {
    /// Warehouse identifier.
    pub id: u32,
    /// Identifier of the warehouse's address.
    pub address_id: u32,
}

/// Something missing from a shipment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RequestIssue {
    /// The request has no line items.
    #[error("No shipment items")]
    NoShipmentItems,
    /// The request has no shipping address.
    #[error("Shipping address is not set")]
    AddressNotSet,
    /// The address has no country.
    #[error("Shipping country is not set")]
    CountryNotSet,
    /// The address has no state or province.
    #[error("Shipping state is not set")]
    StateNotSet,
    /// The address has no postal code.
    #[error("Shipping zip postal code is not set")]
    PostalCodeNotSet,
}

/// A request for shipping options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Items to ship.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Destination address.
    pub shipping_address: Option<ShippingAddress>,
    /// Origin postal code supplied by the caller.
    pub zip_postal_code_from: Option<String>,
    /// Warehouse the shipment leaves from.
    pub warehouse_from: Option<WarehouseRef>,
}

impl ShipmentRequest {
    /// Creates a request for items shipped to an address.
    #[must_use]
    pub fn new(items: Vec<LineItem>, shipping_address: ShippingAddress) -> Self {
        Self {
            items,
            shipping_address: Some(shipping_address),
            zip_postal_code_from: None,
            warehouse_from: None,
        }
    }

    /// Sets the caller-supplied origin postal code.
    #[must_use]
    pub fn with_zip_postal_code_from(mut self, zip: impl Into<String>) -> Self {
        self.zip_postal_code_from = Some(zip.into());
        self
    }

    /// Sets the origin warehouse.
    #[must_use]
    pub fn with_warehouse(mut self, warehouse: WarehouseRef) -> Self {
        self.warehouse_from = Some(warehouse);
        self
    }

    /// Returns every missing field, in a fixed order.
    ///
    /// A missing address also reports its country, state and postal code.
    #[must_use]
    pub fn issues(&self) -> Vec<RequestIssue> {
        let mut issues = Vec::new();
        if self.items.is_empty() {
            issues.push(RequestIssue::NoShipmentItems);
        }

        let address = self.shipping_address.as_ref();
        if address.is_none() {
            issues.push(RequestIssue::AddressNotSet);
        }
        if address.and_then(|a| a.country_id).is_none() {
            issues.push(RequestIssue::CountryNotSet);
        }
        if address.and_then(|a| a.state_province_id).is_none() {
            issues.push(RequestIssue::StateNotSet);
        }
        if address.and_then(ShippingAddress::postal_code).is_none() {
            issues.push(RequestIssue::PostalCodeNotSet);
        }
        issues
    }

    /// Returns true if nothing required is missing.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.issues().is_empty()
    }

    /// Returns the destination postal code, if set.
    #[must_use]
    pub fn destination_postal_code(&self) -> Option<&str> {
        self.shipping_address
            .as_ref()
            .and_then(ShippingAddress::postal_code)
    }

    /// Returns the caller-supplied origin postal code, if set.
    #[must_use]
    pub fn origin_postal_code(&self) -> Option<&str> {
        non_blank(self.zip_postal_code_from.as_deref())
    }

    /// Sum of the items' unit prices.
    ///
    /// Quantities are not applied: the declared value has always been the
    /// sum of unit prices.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the total is out of range.
    pub fn unit_price_total(&self) -> ArithmeticResult<Decimal> {
        checked_sum(self.items.iter().map(|item| item.product.price))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
