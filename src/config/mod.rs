//! # Configuration
//!
//! Carrier settings and engine tuning.
//!
//! [`CarrierSettings`] is the operator-maintained record for the carrier; it
//! is read-only to the engine and passed into every quoting call.
//! [`EngineConfig`] holds deployment constants such as timeouts and unit
//! keywords. [`AppConfig::load`] reads both from an optional file and
//! `CORREIOS__*` environment variables.
//!
//! # Examples
//!
//! ```
//! use correios_rates::config::CarrierSettings;
//!
//! let settings = CarrierSettings::default()
//!     .with_postal_code_from("01001-000")
//!     .with_services("[04510]:[04014]:")
//!     .unwrap();
//! assert!(settings.validate().is_ok());
//! assert_eq!(settings.services_offered.len(), 2);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::{DimensionBounds, FallbackPolicy, PricingRules};
use crate::domain::value_objects::{CarrierCredentials, EnabledServices, MeasureBounds};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Default carrier endpoint.
const DEFAULT_URL: &str = "http://ws.correios.com.br/calculador/CalcPrecoPrazo.asmx";

/// Default per-service timeout in milliseconds.
const DEFAULT_PER_SERVICE_TIMEOUT_MS: u64 = 5000;

/// Environment variable prefix.
const ENV_PREFIX: &str = "CORREIOS";

/// Error loading or validating configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or deserialized.
    #[error("configuration source error: {0}")]
    Source(#[from] config::ConfigError),

    /// The values violate a settings invariant.
    #[error("invalid settings: {0}")]
    Invalid(#[from] DomainError),

    /// A `.env` file exists but could not be read or parsed.
    #[error("env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Operator settings for the carrier.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarrierSettings {
    /// Carrier endpoint.
    pub url: String,
    /// Default origin postal code.
    pub postal_code_from: String,
    /// Company code for contract pricing.
    pub company_code: String,
    /// Password for the company code.
    pub password: String,
    /// Days added to every carrier lead time.
    pub add_days_for_delivery: i32,
    /// Multiplier applied to carrier prices; `0` disables it.
    pub fee_multiplier: Decimal,
    /// Declared value floor, in the carrier's currency.
    pub declared_minimum_value: Decimal,
    /// Accepted weight in whole kilograms.
    pub weight: MeasureBounds<i32>,
    /// Accepted length in centimetres.
    pub length: MeasureBounds<Decimal>,
    /// Accepted width in centimetres.
    pub width: MeasureBounds<Decimal>,
    /// Accepted height in centimetres.
    pub height: MeasureBounds<Decimal>,
    /// Name of the fallback option.
    pub service_name_default: String,
    /// Rate of the fallback option; `0` disables the fallback.
    pub shipping_rate_default: Decimal,
    /// Lead time of the fallback option; `0` disables the fallback.
    pub delivery_days_default: i32,
    /// Enabled services, persisted as `[code]:[code]`.
    pub services_offered: EnabledServices,
}

impl Default for CarrierSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            postal_code_from: String::new(),
            company_code: String::new(),
            password: String::new(),
            add_days_for_delivery: 0,
            fee_multiplier: Decimal::ONE,
            declared_minimum_value: Decimal::new(195, 1),
            weight: MeasureBounds::new(1, 30),
            length: MeasureBounds::new(Decimal::new(16, 0), Decimal::new(105, 0)),
            width: MeasureBounds::new(Decimal::new(11, 0), Decimal::new(105, 0)),
            height: MeasureBounds::new(Decimal::new(2, 0), Decimal::new(105, 0)),
            service_name_default: String::new(),
            shipping_rate_default: Decimal::ZERO,
            delivery_days_default: 0,
            services_offered: EnabledServices::new(),
        }
    }
}

impl CarrierSettings {
    /// Sets the default origin postal code.
    #[must_use]
    pub fn with_postal_code_from(mut self, zip: impl Into<String>) -> Self {
        self.postal_code_from = zip.into();
        self
    }

    /// Sets the enabled services from their persisted form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid token list.
    pub fn with_services(mut self, encoded: &str) -> DomainResult<Self> {
        self.services_offered = EnabledServices::parse(encoded)?;
        Ok(self)
    }

    /// Sets the extra delivery days.
    #[must_use]
    pub fn with_add_days_for_delivery(mut self, days: i32) -> Self {
        self.add_days_for_delivery = days;
        self
    }

    /// Sets the fee multiplier.
    #[must_use]
    pub fn with_fee_multiplier(mut self, multiplier: Decimal) -> Self {
        self.fee_multiplier = multiplier;
        self
    }

    /// Sets the fallback option.
    #[must_use]
    pub fn with_default_service(
        mut self,
        name: impl Into<String>,
        rate: Decimal,
        delivery_days: i32,
    ) -> Self {
        self.service_name_default = name.into();
        self.shipping_rate_default = rate;
        self.delivery_days_default = delivery_days;
        self
    }

    /// Checks the settings invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if any min/max pair is inverted, or the fee
    /// multiplier or declared value floor is negative.
    pub fn validate(&self) -> DomainResult<()> {
        self.weight.validate("weight")?;
        self.length.validate("length")?;
        self.width.validate("width")?;
        self.height.validate("height")?;
        if self.fee_multiplier < Decimal::ZERO {
            return Err(DomainError::invalid_value(
                "fee_multiplier",
                "must not be negative",
            ));
        }
        if self.declared_minimum_value < Decimal::ZERO {
            return Err(DomainError::invalid_value(
                "declared_minimum_value",
                "must not be negative",
            ));
        }
        Ok(())
    }

    /// Returns the company credentials.
    #[must_use]
    pub fn credentials(&self) -> CarrierCredentials {
        CarrierCredentials {
            company_code: self.company_code.clone(),
            password: self.password.clone(),
        }
    }

    /// Returns the pricing rules applied to carrier quotes.
    #[must_use]
    pub fn pricing_rules(&self) -> PricingRules {
        PricingRules {
            additional_delivery_days: self.add_days_for_delivery,
            fee_multiplier: self.fee_multiplier,
        }
    }

    /// Returns the fallback policy.
    #[must_use]
    pub fn fallback_policy(&self) -> FallbackPolicy {
        FallbackPolicy::new(
            self.service_name_default.clone(),
            self.shipping_rate_default,
            self.delivery_days_default,
        )
    }

    /// Returns the accepted dimension ranges.
    #[must_use]
    pub fn dimension_bounds(&self) -> DimensionBounds {
        DimensionBounds {
            length: self.length,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Debug for CarrierSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarrierSettings")
            .field("url", &self.url)
            .field("postal_code_from", &self.postal_code_from)
            .field("company_code", &self.company_code)
            .field("password", &"<redacted>")
            .field("add_days_for_delivery", &self.add_days_for_delivery)
            .field("fee_multiplier", &self.fee_multiplier)
            .field("declared_minimum_value", &self.declared_minimum_value)
            .field("weight", &self.weight)
            .field("length", &self.length)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("service_name_default", &self.service_name_default)
            .field("shipping_rate_default", &self.shipping_rate_default)
            .field("delivery_days_default", &self.delivery_days_default)
            .field("services_offered", &self.services_offered.to_string())
            .finish()
    }
}

/// Deployment constants for the rate engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Timeout for each per-service carrier call, in milliseconds.
    pub per_service_timeout_ms: u64,
    /// ISO code of the currency the carrier prices in.
    pub carrier_currency_code: String,
    /// System keyword of the carrier's weight unit.
    pub weight_unit_keyword: String,
    /// System keyword of the carrier's dimension unit.
    pub dimension_unit_keyword: String,
    /// Declared value above which shipping is refused.
    pub max_declared_value: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            per_service_timeout_ms: DEFAULT_PER_SERVICE_TIMEOUT_MS,
            carrier_currency_code: "BRL".to_string(),
            weight_unit_keyword: "kg".to_string(),
            dimension_unit_keyword: "centimeter".to_string(),
            max_declared_value: Decimal::new(3000, 0),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the specified per-service timeout.
    #[must_use]
    pub fn with_timeout(per_service_timeout_ms: u64) -> Self {
        Self {
            per_service_timeout_ms,
            ..Default::default()
        }
    }

    /// Sets the carrier currency code.
    #[must_use]
    pub fn with_carrier_currency(mut self, code: impl Into<String>) -> Self {
        self.carrier_currency_code = code.into();
        self
    }

    /// Sets the declared value ceiling.
    #[must_use]
    pub fn with_max_declared_value(mut self, value: Decimal) -> Self {
        self.max_declared_value = value;
        self
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Carrier settings.
    pub carrier: CarrierSettings,
    /// Engine constants.
    pub engine: EngineConfig,
    /// Log format.
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Loads configuration from an optional file and the environment.
    ///
    /// A `.env` file is read first if present. Environment variables use the
    /// `CORREIOS` prefix and `__` as separator, e.g.
    /// `CORREIOS__CARRIER__POSTAL_CODE_FROM=01001-000`.
    ///
    /// # Errors
    ///
    /// Returns an error if a `.env` file or another source cannot be parsed,
    /// or the carrier settings are invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        env_file_loaded(dotenvy::dotenv())?;

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let loaded: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        loaded.carrier.validate()?;
        Ok(loaded)
    }
}

/// A missing `.env` file is fine; any other failure is reported.
fn env_file_loaded<T>(result: dotenvy::Result<T>) -> Result<(), SettingsError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
