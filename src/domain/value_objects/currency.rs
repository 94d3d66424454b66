//! # Currency
//!
//! Store currency records as returned by the currency lookup collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A store currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Store identifier.
    pub id: u32,
    /// ISO 4217 code, e.g. `BRL`.
    pub code: String,
    /// Exchange rate relative to the store's primary exchange currency.
    pub rate: Decimal,
}

impl Currency {
    /// Creates a currency.
    #[must_use]
    pub fn new(id: u32, code: impl Into<String>, rate: Decimal) -> Self {
        Self {
            id,
            code: code.into(),
            rate,
        }
    }

    /// Returns true if both currencies share an ISO code.
    #[must_use]
    pub fn same_code(&self, other: &Currency) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
