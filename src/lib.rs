//! # Correios Rates
//!
//! Shipping rate computation for the Correios postal carrier.
//!
//! Given a shipment (items, origin, destination) and the operator's carrier
//! settings, the engine normalizes the parcel into the carrier's units and
//! bounds, asks the carrier for a quote once per enabled service, validates
//! each answer and turns the usable ones into priced, labelled shipping
//! options. One service failing never fails the whole quote.
//!
//! ## Layers
//!
//! - [`domain`]: Value objects, entities and pure rate rules
//! - [`application`]: The rate computation engine and its request builder
//! - [`infrastructure`]: Carrier gateway and store ports
//! - [`config`]: Carrier settings and engine configuration
//! - [`telemetry`]: Tracing subscriber setup
//!
//! ## Example
//!
//! ```no_run
//! use correios_rates::application::{RateComputationEngine, StoreCollaborators};
//! use correios_rates::config::{CarrierSettings, EngineConfig};
//! use correios_rates::domain::value_objects::ShipmentRequest;
//! use correios_rates::infrastructure::carrier::ReplayGateway;
//! use correios_rates::infrastructure::store::{
//!     InMemoryAddressBook, InMemoryCurrencyService, InMemoryMeasureService,
//!     StackingShippingAggregator,
//! };
//! use std::sync::Arc;
//!
//! # async fn run(request: ShipmentRequest) -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreCollaborators {
//!     measures: Arc::new(InMemoryMeasureService::metric()),
//!     aggregator: Arc::new(StackingShippingAggregator),
//!     addresses: Arc::new(InMemoryAddressBook::new()),
//!     currencies: Arc::new(InMemoryCurrencyService::single("BRL")),
//! };
//! let engine = RateComputationEngine::new(
//!     store,
//!     Arc::new(ReplayGateway::new()),
//!     EngineConfig::default(),
//! )?;
//! let settings = CarrierSettings::default().with_services("[04510]:[04014]")?;
//! let response = engine.get_shipping_options(&request, &settings).await?;
//! for option in &response.options {
//!     println!("{}: {}", option.name(), option.rate());
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
