//! # Service Codes
//!
//! Carrier service identifiers and the static code/name lookup table.
//!
//! This module provides:
//! - [`ServiceCode`] - An opaque carrier-defined service identifier
//! - [`ServiceCatalog`] - A bidirectional code/name table, validated on construction
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::value_objects::service_code::{ServiceCatalog, ServiceCode};
//!
//! let catalog = ServiceCatalog::standard().unwrap();
//! let code = catalog.code_for("PAC").unwrap();
//! assert_eq!(code.as_str(), "04510");
//! assert_eq!(catalog.name_for(code), Some("PAC"));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Characters that delimit codes in the persisted enabled-services string.
const RESERVED_CHARS: [char; 3] = ['[', ']', ':'];

/// Correios services offered for selection, as `(code, name)` pairs.
const CORREIOS_SERVICES: &[(&str, &str)] = &[
    ("04014", "SEDEX"),
    ("04510", "PAC"),
    ("04782", "SEDEX 12"),
    ("04790", "SEDEX 10"),
    ("04804", "SEDEX Hoje"),
    ("04162", "SEDEX Contrato Agência"),
    ("04669", "PAC Contrato Agência"),
    ("40215", "SEDEX 10 (Pacote)"),
    ("40290", "SEDEX Hoje (Pacote)"),
    ("40045", "SEDEX a Cobrar"),
    ("41068", "PAC Contrato"),
    ("40096", "SEDEX Contrato"),
];

static STANDARD_CATALOG: LazyLock<DomainResult<ServiceCatalog>> =
    LazyLock::new(|| ServiceCatalog::new(CORREIOS_SERVICES.iter().copied()));

/// A carrier-defined service identifier, e.g. `04510`.
///
/// The code is opaque; the only constraint is that it is non-empty and free of
/// the characters used to delimit codes in the persisted selection string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceCode(String);

impl ServiceCode {
    /// Creates a service code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidServiceCode` if the code is blank or
    /// contains `[`, `]` or `:`.
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() || trimmed.contains(RESERVED_CHARS) {
            return Err(DomainError::invalid_service_code(code));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the bracket-delimited token used in the persisted selection.
    #[must_use]
    pub fn token(&self) -> String {
        format!("[{}]", self.0)
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ServiceCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ServiceCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ServiceCode> for String {
    fn from(code: ServiceCode) -> Self {
        code.0
    }
}

/// Bidirectional lookup between service codes and display names.
///
/// # Invariants
///
/// - Every code maps to exactly one name and every name to exactly one code
/// - Entries keep their declaration order for listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCatalog {
    entries: Vec<(ServiceCode, String)>,
    by_code: HashMap<ServiceCode, usize>,
    by_name: HashMap<String, usize>,
}

impl ServiceCatalog {
    /// Builds a catalog from `(code, name)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a code is invalid, or if a code or a name appears
    /// more than once.
    pub fn new<C, N>(entries: impl IntoIterator<Item = (C, N)>) -> DomainResult<Self>
    where
        C: Into<String>,
        N: Into<String>,
    {
        let mut catalog = Self {
            entries: Vec::new(),
            by_code: HashMap::new(),
            by_name: HashMap::new(),
        };

        for (code, name) in entries {
            let code = ServiceCode::new(code)?;
            let name = name.into();
            let index = catalog.entries.len();

            if catalog.by_code.insert(code.clone(), index).is_some() {
                return Err(DomainError::DuplicateServiceCode(code.to_string()));
            }
            if catalog.by_name.insert(name.clone(), index).is_some() {
                return Err(DomainError::DuplicateServiceName(name));
            }
            catalog.entries.push((code, name));
        }

        Ok(catalog)
    }

    /// Returns the process-wide Correios catalog.
    ///
    /// The table is built and validated once, on first use.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the built-in table is inconsistent.
    pub fn standard() -> DomainResult<&'static ServiceCatalog> {
        STANDARD_CATALOG.as_ref().map_err(Clone::clone)
    }

    /// Returns the display name for a code.
    #[must_use]
    pub fn name_for(&self, code: &ServiceCode) -> Option<&str> {
        self.by_code
            .get(code)
            .and_then(|&i| self.entries.get(i))
            .map(|(_, name)| name.as_str())
    }

    /// Returns the code for a display name.
    #[must_use]
    pub fn code_for(&self, name: &str) -> Option<&ServiceCode> {
        self.by_name
            .get(name)
            .and_then(|&i| self.entries.get(i))
            .map(|(code, _)| code)
    }

    /// Returns the display name for a code, or the raw code when unknown.
    #[must_use]
    pub fn display_name(&self, code: &ServiceCode) -> String {
        self.name_for(code)
            .map_or_else(|| code.to_string(), str::to_string)
    }

    /// Iterates over the service names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, name)| name.as_str())
    }

    /// Iterates over `(code, name)` entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ServiceCode, &str)> {
        self.entries.iter().map(|(code, name)| (code, name.as_str()))
    }

    /// Returns the number of services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no services.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod service_code {
        use super::*;

        #[test]
        fn trims_whitespace() {
            let code = ServiceCode::new(" 04510 ").unwrap();
            assert_eq!(code.as_str(), "04510");
            assert_eq!(code.token(), "[04510]");
        }

        #[test]
        fn rejects_blank_and_reserved() {
            assert!(ServiceCode::new("").is_err());
            assert!(ServiceCode::new("   ").is_err());
            assert!(ServiceCode::new("[04510]").is_err());
            assert!(ServiceCode::new("04510:").is_err());
        }

        #[test]
        fn serde_as_string() {
            let code = ServiceCode::new("04014").unwrap();
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, "\"04014\"");
            let back: ServiceCode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, code);
            assert!(serde_json::from_str::<ServiceCode>("\"\"").is_err());
        }
    }

    mod catalog {
        use super::*;

        #[test]
        fn standard_is_valid() {
            let catalog = ServiceCatalog::standard().unwrap();
            assert_eq!(catalog.len(), CORREIOS_SERVICES.len());
        }

        #[test]
        fn name_code_round_trip() {
            let catalog = ServiceCatalog::standard().unwrap();
            for name in catalog.names() {
                let code = catalog.code_for(name).unwrap();
                assert_eq!(catalog.name_for(code), Some(name));
            }
            for (code, _) in catalog.iter() {
                let name = catalog.name_for(code).unwrap();
                assert_eq!(catalog.code_for(name), Some(code));
            }
        }

        #[test]
        fn rejects_duplicate_code() {
            let result = ServiceCatalog::new([("04014", "SEDEX"), ("04014", "Other")]);
            assert_eq!(
                result.unwrap_err(),
                DomainError::DuplicateServiceCode("04014".to_string())
            );
        }

        #[test]
        fn rejects_duplicate_name() {
            let result = ServiceCatalog::new([("04014", "SEDEX"), ("04015", "SEDEX")]);
            assert_eq!(
                result.unwrap_err(),
                DomainError::DuplicateServiceName("SEDEX".to_string())
            );
        }

        #[test]
        fn unknown_code_displays_raw_code() {
            let catalog = ServiceCatalog::standard().unwrap();
            let code = ServiceCode::new("99999").unwrap();
            assert!(catalog.name_for(&code).is_none());
            assert_eq!(catalog.display_name(&code), "99999");
        }
    }
}
