//! # Enabled Service Selection
//!
//! The set of carrier services an operator has enabled.
//!
//! The selection is persisted as bracket-delimited tokens joined by `:`, for
//! example `[04510]:[04014]`. Brackets keep one code from matching inside a
//! longer one, so `[045101]` never enables `04510`. A trailing separator is
//! accepted when parsing and never written.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::value_objects::service_selection::EnabledServices;
//! use correios_rates::domain::value_objects::service_code::ServiceCode;
//!
//! let enabled: EnabledServices = "[04510]:[04014]:".parse().unwrap();
//! assert!(enabled.contains(&ServiceCode::new("04510").unwrap()));
//! assert_eq!(enabled.to_string(), "[04510]:[04014]");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::service_code::{ServiceCatalog, ServiceCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between tokens in the persisted form.
const SEPARATOR: char = ':';

/// Ordered, duplicate-free list of enabled service codes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnabledServices {
    codes: Vec<ServiceCode>,
}

impl EnabledServices {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection from codes, dropping repeats.
    #[must_use]
    pub fn from_codes(codes: impl IntoIterator<Item = ServiceCode>) -> Self {
        let mut selection = Self::new();
        for code in codes {
            selection.insert(code);
        }
        selection
    }

    /// Creates a selection from display names, skipping names the catalog
    /// does not know.
    #[must_use]
    pub fn from_names<'a>(
        names: impl IntoIterator<Item = &'a str>,
        catalog: &ServiceCatalog,
    ) -> Self {
        Self::from_codes(
            names
                .into_iter()
                .filter_map(|name| catalog.code_for(name).cloned()),
        )
    }

    /// Parses the persisted token string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidServiceToken` if a token is not wrapped
    /// in brackets, or `DomainError::InvalidServiceCode` if its content is
    /// not a valid code.
    pub fn parse(encoded: &str) -> DomainResult<Self> {
        let encoded = encoded.trim();
        let encoded = encoded.strip_suffix(SEPARATOR).unwrap_or(encoded);
        if encoded.is_empty() {
            return Ok(Self::new());
        }

        let mut selection = Self::new();
        for token in encoded.split(SEPARATOR) {
            let inner = token
                .trim()
                .strip_prefix('[')
                .and_then(|t| t.strip_suffix(']'))
                .ok_or_else(|| DomainError::invalid_service_token(token))?;
            selection.insert(ServiceCode::new(inner)?);
        }
        Ok(selection)
    }

    /// Adds a code if it is not already enabled.
    pub fn insert(&mut self, code: ServiceCode) {
        if !self.codes.contains(&code) {
            self.codes.push(code);
        }
    }

    /// Returns true if the code is enabled.
    #[must_use]
    pub fn contains(&self, code: &ServiceCode) -> bool {
        self.codes.contains(code)
    }

    /// Returns the enabled codes in selection order.
    #[must_use]
    pub fn codes(&self) -> &[ServiceCode] {
        &self.codes
    }

    /// Returns the catalog names of the enabled services, in catalog order.
    #[must_use]
    pub fn enabled_names<'c>(&self, catalog: &'c ServiceCatalog) -> Vec<&'c str> {
        catalog
            .iter()
            .filter(|(code, _)| self.contains(code))
            .map(|(_, name)| name)
            .collect()
    }

    /// Returns the number of enabled services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if no service is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl fmt::Display for EnabledServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.codes.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{}", code.token())?;
        }
        Ok(())
    }
}

impl FromStr for EnabledServices {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EnabledServices {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EnabledServices> for String {
    fn from(selection: EnabledServices) -> Self {
        selection.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn code(s: &str) -> ServiceCode {
        ServiceCode::new(s).unwrap()
    }

    #[test]
    fn parses_trailing_separator() {
        let enabled = EnabledServices::parse("[04510]:[04014]:").unwrap();
        assert_eq!(enabled.codes(), &[code("04510"), code("04014")]);
    }

    #[test]
    fn parses_empty() {
        assert!(EnabledServices::parse("").unwrap().is_empty());
        assert!(EnabledServices::parse(":").unwrap().is_empty());
    }

    #[test]
    fn longer_code_does_not_enable_prefix() {
        let enabled = EnabledServices::parse("[045101]").unwrap();
        assert!(!enabled.contains(&code("04510")));
        assert!(enabled.contains(&code("045101")));
    }

    #[test]
    fn rejects_unbracketed_token() {
        let err = EnabledServices::parse("[04510]:04014").unwrap_err();
        assert_eq!(err, DomainError::invalid_service_token("04014"));
        assert!(EnabledServices::parse("[]").is_err());
    }

    #[test]
    fn encodes_without_trailing_separator() {
        let enabled = EnabledServices::from_codes([code("04510"), code("04014"), code("04510")]);
        assert_eq!(enabled.len(), 2);
        assert_eq!(enabled.to_string(), "[04510]:[04014]");
    }

    #[test]
    fn from_names_skips_unknown() {
        let catalog = ServiceCatalog::standard().unwrap();
        let enabled = EnabledServices::from_names(["PAC", "Carta Registrada", "SEDEX"], catalog);
        assert_eq!(enabled.to_string(), "[04510]:[04014]");
    }

    #[test]
    fn enabled_names_follow_catalog_order() {
        let catalog = ServiceCatalog::standard().unwrap();
        let enabled = EnabledServices::parse("[04510]:[04014]:[99999]").unwrap();
        assert_eq!(enabled.enabled_names(catalog), vec!["SEDEX", "PAC"]);
    }

    #[test]
    fn serde_as_encoded_string() {
        let enabled: EnabledServices = serde_json::from_str("\"[04510]:[04014]:\"").unwrap();
        assert_eq!(enabled.len(), 2);
        assert_eq!(
            serde_json::to_string(&enabled).unwrap(),
            "\"[04510]:[04014]\""
        );
    }
}
