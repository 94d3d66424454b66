//! # Shipping Option
//!
//! A priced, labelled delivery choice shown to the customer.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::entities::shipping_option::ShippingOption;
//! use rust_decimal::Decimal;
//!
//! let option = ShippingOption::new("PAC", 7, Decimal::new(2200, 2), None);
//! assert_eq!(option.name(), "PAC - 7 day(s)");
//! ```

use crate::domain::value_objects::ServiceCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A shipping option in the store's pricing currency.
///
/// # Invariants
///
/// - `rate` is never negative
/// - `name` is `"{service} - {days} day(s)"`, followed by `" - {observation}"`
///   when an observation is present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    name: String,
    rate: Decimal,
    delivery_days: i32,
    service_code: Option<ServiceCode>,
}

impl ShippingOption {
    /// Creates an option, labelling it from the service name and lead time.
    ///
    /// A negative rate is floored at zero. A blank observation is ignored.
    #[must_use]
    pub fn new(
        service_name: &str,
        delivery_days: i32,
        rate: Decimal,
        observation: Option<&str>,
    ) -> Self {
        let mut name = format!("{service_name} - {delivery_days} day(s)");
        if let Some(obs) = observation.map(str::trim).filter(|o| !o.is_empty()) {
            name.push_str(" - ");
            name.push_str(obs);
        }
        Self {
            name,
            rate: rate.max(Decimal::ZERO),
            delivery_days,
            service_code: None,
        }
    }

    /// Records the carrier service the option was quoted for.
    #[must_use]
    pub fn with_service_code(mut self, code: ServiceCode) -> Self {
        self.service_code = Some(code);
        self
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price in the store's currency.
    #[inline]
    #[must_use]
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Returns the delivery estimate in days.
    #[inline]
    #[must_use]
    pub fn delivery_days(&self) -> i32 {
        self.delivery_days
    }

    /// Returns the service code, or `None` for the fallback option.
    #[inline]
    #[must_use]
    pub fn service_code(&self) -> Option<&ServiceCode> {
        self.service_code.as_ref()
    }
}

impl fmt::Display for ShippingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rate)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn name_with_observation() {
        let option = ShippingOption::new(
            "SEDEX",
            3,
            Decimal::new(4590, 2),
            Some("Área com entrega temporariamente sujeita a prazo diferenciado"),
        );
        assert_eq!(
            option.name(),
            "SEDEX - 3 day(s) - Área com entrega temporariamente sujeita a prazo diferenciado"
        );
    }

    #[test]
    fn blank_observation_is_ignored() {
        let option = ShippingOption::new("PAC", 8, Decimal::new(20, 0), Some("  "));
        assert_eq!(option.name(), "PAC - 8 day(s)");
    }

    #[test]
    fn negative_rate_is_floored() {
        let option = ShippingOption::new("PAC", 8, Decimal::new(-5, 0), None);
        assert_eq!(option.rate(), Decimal::ZERO);
    }

    #[test]
    fn carries_service_code() {
        let code = ServiceCode::new("04510").unwrap();
        let option =
            ShippingOption::new("PAC", 8, Decimal::new(20, 0), None).with_service_code(code.clone());
        assert_eq!(option.service_code(), Some(&code));
        assert_eq!(option.delivery_days(), 8);
    }
}
