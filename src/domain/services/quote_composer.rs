//! # Quote Composer
//!
//! Turns a validated carrier answer into a [`ShippingOption`].
//!
//! ```text
//! lead time = carrier lead time + extra days        (extra days only if > 0)
//! price     = carrier price × fee multiplier × fx   (multiplier only if > 0)
//! ```

use crate::domain::entities::ShippingOption;
use crate::domain::services::currency_adjustment::CurrencyAdjustment;
use crate::domain::services::response_validator::{QuoteRejection, ValidatedQuote};
use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;

/// Operator pricing rules applied to every carrier quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingRules {
    /// Days added to the carrier's lead time.
    pub additional_delivery_days: i32,
    /// Multiplier applied to the carrier's price.
    pub fee_multiplier: Decimal,
}

impl PricingRules {
    /// Applies the extra delivery days, when positive.
    #[must_use]
    pub fn lead_time(&self, carrier_days: i32) -> i32 {
        if self.additional_delivery_days > 0 {
            carrier_days.saturating_add(self.additional_delivery_days)
        } else {
            carrier_days
        }
    }

    /// Applies the fee multiplier, when positive.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the marked-up price is out of range.
    pub fn marked_up(&self, price: Decimal) -> ArithmeticResult<Decimal> {
        if self.fee_multiplier > Decimal::ZERO {
            price.safe_mul(self.fee_multiplier)
        } else {
            Ok(price)
        }
    }
}

/// Composes priced, labelled options from validated quotes.
#[derive(Debug, Clone)]
pub struct QuoteComposer {
    rules: PricingRules,
    currency: CurrencyAdjustment,
}

impl QuoteComposer {
    /// Creates a composer.
    #[must_use]
    pub fn new(rules: PricingRules, currency: CurrencyAdjustment) -> Self {
        Self { rules, currency }
    }

    /// Composes the option for a validated quote shown as `service_name`.
    ///
    /// # Errors
    ///
    /// Returns `QuoteRejection::PriceOutOfRange` if the fee multiplier pushes
    /// the price out of range.
    pub fn compose(
        &self,
        quote: &ValidatedQuote,
        service_name: &str,
    ) -> Result<ShippingOption, QuoteRejection> {
        let days = self.rules.lead_time(quote.lead_time_days);
        let marked_up = self
            .rules
            .marked_up(quote.price)
            .map_err(|_| QuoteRejection::PriceOutOfRange { price: quote.price })?;
        let price = self.currency.to_store(marked_up);
        Ok(
            ShippingOption::new(service_name, days, price, quote.observation.as_deref())
                .with_service_code(quote.service_code.clone()),
        )
    }

    /// Returns the pricing rules.
    #[must_use]
    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }
}
