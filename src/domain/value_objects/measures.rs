//! # Measures
//!
//! Weight and dimension value types in the carrier's units.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive `[min, max]` range accepted by the carrier for one measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureBounds<T> {
    /// Smallest accepted value.
    pub min: T,
    /// Largest accepted value.
    pub max: T,
}

impl<T: PartialOrd + fmt::Display + Copy> MeasureBounds<T> {
    /// Creates bounds.
    #[must_use]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Checks that `min <= max`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBounds` naming `measure` when inverted.
    pub fn validate(&self, measure: &'static str) -> DomainResult<()> {
        if self.min > self.max {
            return Err(DomainError::invalid_bounds(measure, self.min, self.max));
        }
        Ok(())
    }
}

/// Package dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackageDimensions {
    /// Length.
    pub length: Decimal,
    /// Width.
    pub width: Decimal,
    /// Height.
    pub height: Decimal,
}

impl PackageDimensions {
    /// Creates dimensions.
    #[must_use]
    pub const fn new(length: Decimal, width: Decimal, height: Decimal) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

impl fmt::Display for PackageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{} cm", self.length, self.width, self.height)
    }
}

/// A store measure unit, as resolved by system keyword (`kg`, `centimeter`).
///
/// `ratio` converts from the store's primary unit: `converted = value * ratio`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureUnit {
    /// Store identifier of the unit.
    pub id: u32,
    /// System keyword the unit is looked up by.
    pub system_keyword: String,
    /// Ratio relative to the primary unit.
    pub ratio: Decimal,
}

impl MeasureUnit {
    /// Creates a measure unit.
    #[must_use]
    pub fn new(id: u32, system_keyword: impl Into<String>, ratio: Decimal) -> Self {
        Self {
            id,
            system_keyword: system_keyword.into(),
            ratio,
        }
    }

    /// Converts a value expressed in the primary unit into this unit.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the converted value is out of range.
    pub fn from_primary(&self, value: Decimal) -> ArithmeticResult<Decimal> {
        value.safe_mul(self.ratio)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bounds_validate() {
        assert!(MeasureBounds::new(1, 30).validate("weight").is_ok());
        assert!(MeasureBounds::new(5, 5).validate("weight").is_ok());
        let err = MeasureBounds::new(Decimal::new(20, 0), Decimal::new(10, 0))
            .validate("length")
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidBounds { measure: "length", .. }));
    }

    #[test]
    fn unit_converts_from_primary() {
        let grams = MeasureUnit::new(2, "grams", Decimal::new(1000, 0));
        assert_eq!(grams.from_primary(Decimal::new(15, 1)).unwrap(), Decimal::new(1500, 0));
        assert!(grams.from_primary(Decimal::MAX).is_err());
    }

    #[test]
    fn dimensions_display() {
        let dims = PackageDimensions::new(Decimal::new(16, 0), Decimal::new(11, 0), Decimal::new(2, 0));
        assert_eq!(dims.to_string(), "16x11x2 cm");
    }
}
