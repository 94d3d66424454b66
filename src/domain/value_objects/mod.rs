//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Services
//!
//! - [`ServiceCode`]: Opaque carrier service identifier
//! - [`ServiceCatalog`]: Static code/name lookup
//! - [`EnabledServices`]: Operator-selected services, bracket-token encoded
//!
//! ## Shipment
//!
//! - [`ShipmentRequest`], [`LineItem`], [`Product`], [`ShippingAddress`]
//! - [`PackageDimensions`], [`MeasureBounds`], [`MeasureUnit`]
//!
//! ## Carrier exchange
//!
//! - [`CarrierRateRequest`]: One outbound request per service code
//! - [`RawCarrierResult`]: Unparsed per-service answer

pub mod arithmetic;
pub mod carrier_result;
pub mod currency;
pub mod measures;
pub mod service_code;
pub mod service_selection;
pub mod shipment;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use carrier_result::{CarrierCredentials, CarrierRateRequest, RawCarrierResult};
pub use currency::Currency;
pub use measures::{MeasureBounds, MeasureUnit, PackageDimensions};
pub use service_code::{ServiceCatalog, ServiceCode};
pub use service_selection::EnabledServices;
pub use shipment::{
    LineItem, Product, RequestIssue, ShipmentRequest, ShippingAddress, WarehouseRef,
};
