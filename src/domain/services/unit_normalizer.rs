//! # Unit Normalizer
//!
//! Brings weights and dimensions, already expressed in kilograms and
//! centimetres, into the ranges the carrier accepts.
//!
//! Out-of-range values are clamped to the nearest bound, never rejected, so an
//! oversized parcel is quoted at the maximum size.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::services::unit_normalizer::{normalize_dimension, normalize_weight};
//! use correios_rates::domain::value_objects::MeasureBounds;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(normalize_weight(Decimal::new(12, 1), MeasureBounds::new(1, 30)), 2);
//! assert_eq!(
//!     normalize_dimension(Decimal::new(5, 0), MeasureBounds::new(Decimal::new(16, 0), Decimal::new(105, 0))),
//!     Decimal::new(16, 0),
//! );
//! ```

use crate::domain::value_objects::{MeasureBounds, PackageDimensions};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Carrier bounds for each package dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionBounds {
    /// Length bounds.
    pub length: MeasureBounds<Decimal>,
    /// Width bounds.
    pub width: MeasureBounds<Decimal>,
    /// Height bounds.
    pub height: MeasureBounds<Decimal>,
}

/// Rounds a weight in kilograms up to a whole kilogram, then clamps it.
///
/// Weights too large for `i32` are treated as the maximum.
#[must_use]
pub fn normalize_weight(total_kg: Decimal, bounds: MeasureBounds<i32>) -> i32 {
    let ceiled = total_kg.ceil();
    let whole = ceiled.to_i32().unwrap_or(if ceiled.is_sign_negative() {
        bounds.min
    } else {
        bounds.max
    });
    clamp(whole, bounds)
}

/// Clamps a dimension in centimetres.
#[must_use]
pub fn normalize_dimension(value_cm: Decimal, bounds: MeasureBounds<Decimal>) -> Decimal {
    clamp(value_cm, bounds)
}

/// Clamps every dimension independently.
#[must_use]
pub fn normalize_dimensions(
    dimensions: PackageDimensions,
    bounds: &DimensionBounds,
) -> PackageDimensions {
    PackageDimensions::new(
        normalize_dimension(dimensions.length, bounds.length),
        normalize_dimension(dimensions.width, bounds.width),
        normalize_dimension(dimensions.height, bounds.height),
    )
}

// `Ord::clamp` panics on inverted bounds; this settles on the maximum instead.
fn clamp<T: Ord>(value: T, bounds: MeasureBounds<T>) -> T {
    value.max(bounds.min).min(bounds.max)
}
