//! # Currency Adjustment
//!
//! Conversion seam between the carrier's currency and the store's.
//!
//! Amounts currently pass through unchanged, even across different codes:
//! no exchange-rate source has been agreed for quotes, so the hook keeps the
//! shape of the conversion without inventing the arithmetic.

use crate::domain::value_objects::Currency;
use rust_decimal::Decimal;

/// Converts `amount` from `source` into `target`.
#[must_use]
pub fn convert(amount: Decimal, source: &Currency, target: &Currency) -> Decimal {
    if source.same_code(target) {
        return amount;
    }
    // TODO: apply `target.rate / source.rate` once exchange rates are owned by a
    // collaborator that guarantees them fresh for quoting.
    amount
}

/// A resolved carrier/store currency pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAdjustment {
    carrier: Currency,
    store: Currency,
}

impl CurrencyAdjustment {
    /// Creates an adjustment between the carrier's and the store's currency.
    #[must_use]
    pub fn new(carrier: Currency, store: Currency) -> Self {
        Self { carrier, store }
    }

    /// Converts a store amount into the carrier's currency.
    #[must_use]
    pub fn to_carrier(&self, amount: Decimal) -> Decimal {
        convert(amount, &self.store, &self.carrier)
    }

    /// Converts a carrier amount into the store's currency.
    #[must_use]
    pub fn to_store(&self, amount: Decimal) -> Decimal {
        convert(amount, &self.carrier, &self.store)
    }

    /// Returns the carrier's currency.
    #[must_use]
    pub fn carrier_currency(&self) -> &Currency {
        &self.carrier
    }

    /// Returns the store's currency.
    #[must_use]
    pub fn store_currency(&self) -> &Currency {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_currency_is_identity() {
        let brl = Currency::new(1, "BRL", Decimal::ONE);
        let adjustment = CurrencyAdjustment::new(brl.clone(), brl);
        assert_eq!(adjustment.to_store(Decimal::new(2250, 2)), Decimal::new(2250, 2));
    }

    #[test]
    fn cross_currency_passes_through() {
        let brl = Currency::new(1, "BRL", Decimal::new(5, 0));
        let usd = Currency::new(2, "USD", Decimal::ONE);
        let adjustment = CurrencyAdjustment::new(brl, usd);
        assert_eq!(adjustment.to_store(Decimal::new(100, 0)), Decimal::new(100, 0));
        assert_eq!(adjustment.to_carrier(Decimal::new(100, 0)), Decimal::new(100, 0));
        assert_eq!(adjustment.carrier_currency().code, "BRL");
        assert_eq!(adjustment.store_currency().code, "USD");
    }
}
