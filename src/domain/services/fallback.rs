//! # Fallback Policy
//!
//! Supplies a single configured option when no carrier service produced a
//! usable quote.

use crate::domain::entities::ShippingOption;
use rust_decimal::Decimal;

/// The operator-configured default option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    service_name: String,
    rate: Decimal,
    delivery_days: i32,
}

impl FallbackPolicy {
    /// Creates a policy from the configured default name, rate and lead time.
    #[must_use]
    pub fn new(service_name: impl Into<String>, rate: Decimal, delivery_days: i32) -> Self {
        Self {
            service_name: service_name.into(),
            rate,
            delivery_days,
        }
    }

    /// Returns true if both a positive rate and lead time are configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.rate > Decimal::ZERO && self.delivery_days > 0
    }

    /// Returns the default option if `quoted` is empty and a default is
    /// configured. The configured rate is final: no fee is applied.
    #[must_use]
    pub fn apply(&self, quoted: &[ShippingOption]) -> Option<ShippingOption> {
        if !quoted.is_empty() || !self.is_configured() {
            return None;
        }
        Some(ShippingOption::new(
            &self.service_name,
            self.delivery_days,
            self.rate,
            None,
        ))
    }
}
