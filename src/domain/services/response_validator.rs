//! # Response Validator
//!
//! Classifies a raw per-service carrier answer as usable, usable with an
//! advisory note, or rejected.
//!
//! Checks run in order:
//!
//! 1. A reported error code in [`ADVISORY_CODES`] becomes an observation on
//!    the quote; any other reported code rejects the service.
//! 2. A lead time of zero or less rejects the service.
//! 3. A price of zero or less rejects the service.
//!
//! A rejection concerns one service only; sibling services are unaffected.

use crate::domain::value_objects::{RawCarrierResult, ServiceCode};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Carrier codes that still come with a usable price and lead time.
///
/// `009`, `010` and `011` flag restricted or differentiated delivery areas.
pub const ADVISORY_CODES: [&str; 3] = ["009", "010", "011"];

/// Why a carrier answer could not be turned into a quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteRejection {
    /// The carrier reported a non-advisory error.
    #[error("{code} - {message}")]
    CarrierReported {
        /// Carrier error code.
        code: String,
        /// Carrier error message.
        message: String,
    },

    /// The lead time was missing or not positive.
    #[error("Delivery uninformed")]
    DeliveryUninformed,

    /// The price was not positive.
    #[error("Invalid value delivery")]
    InvalidValueDelivery,

    /// The price left the representable range once pricing rules applied.
    #[error("price out of range after markup: {price}")]
    PriceOutOfRange {
        /// Carrier price before markup.
        price: Decimal,
    },

    /// A field could not be parsed as a number.
    #[error("malformed {field}: {value:?}")]
    Malformed {
        /// Field name.
        field: &'static str,
        /// Raw text received.
        value: String,
    },
}

/// A carrier answer that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuote {
    /// Service the quote is for.
    pub service_code: ServiceCode,
    /// Price in the carrier's currency.
    pub price: Decimal,
    /// Carrier lead time in days.
    pub lead_time_days: i32,
    /// Advisory message carried from the carrier, if any.
    pub observation: Option<String>,
}

/// Validates a raw answer for `service_code`.
///
/// # Errors
///
/// Returns the first [`QuoteRejection`] that applies.
pub fn validate(
    service_code: &ServiceCode,
    raw: &RawCarrierResult,
) -> Result<ValidatedQuote, QuoteRejection> {
    let observation = match raw.reported_error() {
        None => None,
        Some(code) if ADVISORY_CODES.contains(&code) => raw.error_message.clone(),
        Some(code) => {
            return Err(QuoteRejection::CarrierReported {
                code: code.to_string(),
                message: raw.error_message.clone().unwrap_or_default(),
            });
        }
    };

    let lead_time_days = parse_lead_time(&raw.lead_time_days)?;
    if lead_time_days <= 0 {
        return Err(QuoteRejection::DeliveryUninformed);
    }

    let price = parse_brazilian_decimal(&raw.price).ok_or_else(|| QuoteRejection::Malformed {
        field: "price",
        value: raw.price.clone(),
    })?;
    if price <= Decimal::ZERO {
        return Err(QuoteRejection::InvalidValueDelivery);
    }

    Ok(ValidatedQuote {
        service_code: raw
            .service_code
            .clone()
            .unwrap_or_else(|| service_code.clone()),
        price,
        lead_time_days,
        observation,
    })
}

/// Parses a number written as `1.234,56`.
#[must_use]
pub fn parse_brazilian_decimal(text: &str) -> Option<Decimal> {
    let normalized: String = text
        .trim()
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

// A blank lead time reads as zero days.
fn parse_lead_time(text: &str) -> Result<i32, QuoteRejection> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| QuoteRejection::Malformed {
        field: "lead_time_days",
        value: text.to_string(),
    })
}
