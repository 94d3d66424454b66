//! Runs the rate engine against recorded carrier answers.
//!
//! ```text
//! quote_replay --shipment shipment.json --recordings answers.json [--config correios.toml]
//! ```
//!
//! `answers.json` maps service codes to recordings:
//!
//! ```json
//! {
//!   "04510": { "kind": "answer", "price": "20,00", "lead_time_days": "5" },
//!   "04014": { "kind": "failure", "message": "connection reset" }
//! }
//! ```

use clap::Parser;
use correios_rates::application::{RateComputationEngine, StoreCollaborators};
use correios_rates::config::AppConfig;
use correios_rates::domain::value_objects::{ServiceCode, ShipmentRequest};
use correios_rates::infrastructure::carrier::{Recording, ReplayGateway};
use correios_rates::infrastructure::store::{
    InMemoryAddressBook, InMemoryCurrencyService, InMemoryMeasureService,
    StackingShippingAggregator,
};
use correios_rates::telemetry::init_tracing;
use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "quote_replay", about = "Quote a shipment against recorded carrier answers")]
struct Args {
    /// Shipment request as JSON.
    #[arg(long)]
    shipment: PathBuf,

    /// Recorded carrier answers keyed by service code, as JSON.
    #[arg(long)]
    recordings: PathBuf,

    /// Configuration file; `CORREIOS__*` environment variables also apply.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the response.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("quote_replay: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load(args.config.as_deref())?;
    init_tracing(config.log_format)?;

    let shipment: ShipmentRequest = serde_json::from_str(&std::fs::read_to_string(&args.shipment)?)?;
    let recordings: HashMap<ServiceCode, Recording> =
        serde_json::from_str(&std::fs::read_to_string(&args.recordings)?)?;

    let store = StoreCollaborators {
        measures: Arc::new(InMemoryMeasureService::metric()),
        aggregator: Arc::new(StackingShippingAggregator),
        addresses: Arc::new(InMemoryAddressBook::new()),
        currencies: Arc::new(InMemoryCurrencyService::single(
            &config.engine.carrier_currency_code,
        )),
    };
    let gateway = Arc::new(ReplayGateway::from_recordings(recordings));
    let engine = RateComputationEngine::new(store, gateway, config.engine.clone())?;

    let response = engine
        .get_shipping_options(&shipment, &config.carrier)
        .await?;
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{rendered}");
    Ok(())
}
