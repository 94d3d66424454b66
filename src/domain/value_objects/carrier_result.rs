//! # Carrier Exchange Types
//!
//! The outbound per-service rate request and the raw per-service answer.
//!
//! [`RawCarrierResult`] keeps the carrier's fields as text: prices use the
//! Brazilian number format (`1.234,56`) and lead times may be blank. Parsing
//! happens in the response validator.

use crate::domain::value_objects::measures::PackageDimensions;
use crate::domain::value_objects::service_code::ServiceCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code the carrier uses for success.
pub const SUCCESS_CODE: &str = "0";

/// Package format code for a box or package.
pub const FORMAT_BOX_OR_PACKAGE: u8 = 1;

/// Company credentials for contract pricing.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarrierCredentials {
    /// Administrative company code.
    pub company_code: String,
    /// Password for the company code.
    pub password: String,
}

impl fmt::Debug for CarrierCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarrierCredentials")
            .field("company_code", &self.company_code)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One outbound rate request, for a single service code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierRateRequest {
    /// Service being quoted.
    pub service_code: ServiceCode,
    /// Company credentials (may be empty).
    pub credentials: CarrierCredentials,
    /// Origin postal code.
    pub origin_zip: String,
    /// Destination postal code.
    pub destination_zip: String,
    /// Weight in whole kilograms.
    pub weight_kg: i32,
    /// Package format code.
    pub format_code: u8,
    /// Package dimensions in centimetres.
    pub dimensions: PackageDimensions,
    /// Diameter in centimetres (rolls only).
    pub diameter: Decimal,
    /// Delivery to the addressee in person.
    pub own_hand: bool,
    /// Declared value in the carrier's currency.
    pub declared_value: Decimal,
    /// Signed receipt notice.
    pub receipt_notice: bool,
}

/// Raw answer for one service code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawCarrierResult {
    /// Service the answer is for.
    pub service_code: Option<ServiceCode>,
    /// Carrier error code; blank or `"0"` means success.
    #[serde(default)]
    pub error_code: Option<String>,
    /// Carrier error message.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Quoted price, Brazilian number format.
    #[serde(default)]
    pub price: String,
    /// Quoted lead time in days.
    #[serde(default)]
    pub lead_time_days: String,
}

impl RawCarrierResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(
        service_code: ServiceCode,
        price: impl Into<String>,
        lead_time_days: impl Into<String>,
    ) -> Self {
        Self {
            service_code: Some(service_code),
            error_code: None,
            error_message: None,
            price: price.into(),
            lead_time_days: lead_time_days.into(),
        }
    }

    /// Attaches a carrier error code and message.
    #[must_use]
    pub fn with_error(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self.error_message = Some(message.into());
        self
    }

    /// Returns the error code when it reports something other than success.
    #[must_use]
    pub fn reported_error(&self) -> Option<&str> {
        self.error_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty() && *code != SUCCESS_CODE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reported_error_ignores_success_sentinel() {
        let code = ServiceCode::new("04510").unwrap();
        let ok = RawCarrierResult::success(code.clone(), "20,00", "5");
        assert!(ok.reported_error().is_none());
        assert!(ok.clone().with_error("0", "").reported_error().is_none());
        assert!(ok.clone().with_error("", "").reported_error().is_none());
        assert_eq!(
            ok.with_error("-3", "CEP de destino invalido").reported_error(),
            Some("-3")
        );
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let credentials = CarrierCredentials {
            company_code: "08082650".to_string(),
            password: "secret".to_string(),
        };
        let debug = format!("{credentials:?}");
        assert!(debug.contains("08082650"));
        assert!(!debug.contains("secret"));
    }
}
