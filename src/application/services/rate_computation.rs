//! # Rate Computation Engine
//!
//! The public "get shipping options" operation.
//!
//! A call moves through `Validating -> Fanout -> Aggregating -> Done`:
//!
//! - **Validating**: an incomplete request short-circuits with every issue in
//!   `errors` and no options. Settings, units and currencies are resolved
//!   here; a failure aborts the call with [`ApplicationError`].
//! - **Fanout**: one task per enabled service code, each bounded by the
//!   per-service timeout.
//! - **Aggregating**: each answer is validated and composed. Anything that
//!   goes wrong for one service becomes a [`ServiceFailure`], is logged, and
//!   the service is left out.
//! - **Done**: if no service produced an option, the fallback policy may
//!   supply one.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::rate_request_builder::{RateRequestBuilder, StoreCollaborators};
use crate::application::services::shipping_eligibility::ShippingEligibility;
use crate::config::{CarrierSettings, EngineConfig};
use crate::domain::entities::ShippingOption;
use crate::domain::services::response_validator::validate;
use crate::domain::services::{QuoteComposer, QuoteRejection, ShipmentTracker, ValidatedQuote};
use crate::domain::value_objects::{
    CarrierRateRequest, RawCarrierResult, ServiceCatalog, ServiceCode, ShipmentRequest,
};
use crate::infrastructure::carrier::{CarrierError, CarrierGateway};
use futures::future::join_all;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

/// Why one service code produced no option.
#[derive(Debug, Clone, Error)]
pub enum ServiceFailure {
    /// The gateway call failed.
    #[error("transport error: {0}")]
    Transport(#[from] CarrierError),

    /// The gateway call did not finish in time.
    #[error("carrier request timed out after {timeout_ms}ms")]
    TimedOut {
        /// The per-service timeout that elapsed.
        timeout_ms: u64,
    },

    /// The carrier answered but the answer was not usable.
    #[error("{0}")]
    Rejected(#[from] QuoteRejection),

    /// The task running the call panicked or was cancelled.
    #[error("task failed: {0}")]
    TaskPanicked(String),
}

/// Outcome of one service code's call.
#[derive(Debug, Clone)]
pub struct ServiceOutcome {
    /// The service the call was for.
    pub service_code: ServiceCode,
    /// The validated quote, or why there is none.
    pub result: Result<ValidatedQuote, ServiceFailure>,
}

/// Result of a quoting call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOptionResponse {
    /// Request-level problems. Non-empty only for incomplete requests.
    pub errors: Vec<String>,
    /// Options, in enabled-service order.
    pub options: Vec<ShippingOption>,
}

impl ShippingOptionResponse {
    /// Returns true if the call completed without request-level errors.
    #[must_use]
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Orchestrates request building, fan-out, validation and composition.
#[derive(Debug, Clone)]
pub struct RateComputationEngine {
    builder: RateRequestBuilder,
    gateway: Arc<dyn CarrierGateway>,
    catalog: &'static ServiceCatalog,
    config: EngineConfig,
}

impl RateComputationEngine {
    /// Creates an engine using the standard service catalog.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the standard catalog is invalid.
    pub fn new(
        store: StoreCollaborators,
        gateway: Arc<dyn CarrierGateway>,
        config: EngineConfig,
    ) -> ApplicationResult<Self> {
        let catalog = ServiceCatalog::standard()?;
        Ok(Self::with_catalog(store, gateway, config, catalog))
    }

    /// Creates an engine with an explicit service catalog.
    #[must_use]
    pub fn with_catalog(
        store: StoreCollaborators,
        gateway: Arc<dyn CarrierGateway>,
        config: EngineConfig,
        catalog: &'static ServiceCatalog,
    ) -> Self {
        Self {
            builder: RateRequestBuilder::new(store, config.clone()),
            gateway,
            catalog,
            config,
        }
    }

    /// Gets shipping options for a shipment.
    ///
    /// Carrier-side problems never fail the call; see the module docs.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid, a required unit or
    /// currency cannot be resolved, or a store collaborator fails.
    pub async fn get_shipping_options(
        &self,
        request: &ShipmentRequest,
        settings: &CarrierSettings,
    ) -> ApplicationResult<ShippingOptionResponse> {
        let issues = request.issues();
        if !issues.is_empty() {
            debug!(issues = issues.len(), "shipment request incomplete");
            return Ok(ShippingOptionResponse {
                errors: issues.iter().map(ToString::to_string).collect(),
                options: Vec::new(),
            });
        }

        let prepared = self.prepare(request, settings).await;
        let (requests, composer) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                error!(error = %e, "rate computation aborted");
                return Err(e);
            }
        };

        let outcomes = self.fan_out(requests).await;
        let mut options = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            let composed = outcome.result.and_then(|quote| {
                let name = self.catalog.display_name(&quote.service_code);
                composer.compose(&quote, &name).map_err(ServiceFailure::from)
            });
            match composed {
                Ok(option) => options.push(option),
                Err(failure) => {
                    warn!(
                        service_code = %outcome.service_code,
                        error = %failure,
                        "carrier service dropped"
                    );
                }
            }
        }

        if let Some(fallback) = settings.fallback_policy().apply(&options) {
            info!(
                name = fallback.name(),
                rate = %fallback.rate(),
                "no carrier quote, using default rate"
            );
            options.push(fallback);
        }

        Ok(ShippingOptionResponse {
            errors: Vec::new(),
            options,
        })
    }

    /// Queries every request concurrently and validates the answers.
    ///
    /// Outcomes come back in the order of `requests`.
    pub async fn fan_out(&self, requests: Vec<CarrierRateRequest>) -> Vec<ServiceOutcome> {
        let per_service_timeout_ms = self.config.per_service_timeout_ms;
        let per_service_timeout = Duration::from_millis(per_service_timeout_ms);
        let mut codes = Vec::with_capacity(requests.len());
        let mut handles = Vec::with_capacity(requests.len());

        for request in requests {
            codes.push(request.service_code.clone());
            let gateway = Arc::clone(&self.gateway);
            handles.push(tokio::spawn(async move {
                match timeout(per_service_timeout, gateway.quote(&request)).await {
                    Ok(Ok(raw)) => Ok(raw),
                    Ok(Err(e)) => Err(ServiceFailure::Transport(e)),
                    Err(_) => Err(ServiceFailure::TimedOut {
                        timeout_ms: per_service_timeout_ms,
                    }),
                }
            }));
        }

        join_all(handles)
            .await
            .into_iter()
            .zip(codes)
            .map(|(joined, service_code)| {
                let result = joined
                    .map_err(|e| ServiceFailure::TaskPanicked(e.to_string()))
                    .and_then(|answer| answer)
                    .and_then(|raw: RawCarrierResult| {
                        validate(&service_code, &raw).map_err(ServiceFailure::from)
                    });
                ServiceOutcome {
                    service_code,
                    result,
                }
            })
            .collect()
    }

    /// The carrier has no fixed rate.
    #[must_use]
    pub fn fixed_rate(&self) -> Option<Decimal> {
        None
    }

    /// Returns the shipment tracker.
    #[must_use]
    pub fn tracker(&self) -> ShipmentTracker {
        ShipmentTracker
    }

    /// Returns a shipping eligibility checker sharing this engine's store.
    #[must_use]
    pub fn eligibility(&self) -> ShippingEligibility {
        ShippingEligibility::new(self.builder.clone(), &self.config)
    }

    /// Returns the service catalog.
    #[must_use]
    pub fn catalog(&self) -> &'static ServiceCatalog {
        self.catalog
    }

    /// Returns the request builder.
    #[must_use]
    pub fn builder(&self) -> &RateRequestBuilder {
        &self.builder
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn prepare(
        &self,
        request: &ShipmentRequest,
        settings: &CarrierSettings,
    ) -> ApplicationResult<(Vec<CarrierRateRequest>, QuoteComposer)> {
        settings.validate().map_err(ApplicationError::from)?;
        let currency = self.builder.resolve_currencies().await?;
        let requests = self.builder.build(request, settings, &currency).await?;
        for built in &requests {
            debug!(
                service_code = %built.service_code,
                origin = %built.origin_zip,
                destination = %built.destination_zip,
                weight_kg = built.weight_kg,
                dimensions = %built.dimensions,
                declared_value = %built.declared_value,
                "carrier request built"
            );
        }
        Ok((requests, QuoteComposer::new(settings.pricing_rules(), currency)))
    }
}
