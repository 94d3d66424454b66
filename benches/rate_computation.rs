//! Benchmarks for the rate computation engine.
//!
//! ```bash
//! cargo bench --bench rate_computation
//! ```

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

use correios_rates::application::{RateComputationEngine, StoreCollaborators};
use correios_rates::config::{CarrierSettings, EngineConfig};
use correios_rates::domain::services::response_validator::parse_brazilian_decimal;
use correios_rates::domain::value_objects::{
    LineItem, Product, RawCarrierResult, ServiceCatalog, ServiceCode, ShipmentRequest,
    ShippingAddress,
};
use correios_rates::infrastructure::carrier::ReplayGateway;
use correios_rates::infrastructure::store::{
    InMemoryAddressBook, InMemoryCurrencyService, InMemoryMeasureService,
    StackingShippingAggregator,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::hint::black_box;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn shipment(items: usize) -> ShipmentRequest {
    let items = (0..items)
        .map(|i| {
            LineItem::new(
                Product {
                    id: u32::try_from(i).unwrap_or(u32::MAX),
                    price: Decimal::new(4990, 2),
                    weight: Decimal::new(3, 1),
                    length: Decimal::new(20, 0),
                    width: Decimal::new(15, 0),
                    height: Decimal::new(4, 0),
                },
                2,
            )
        })
        .collect();
    ShipmentRequest::new(
        items,
        ShippingAddress {
            country_id: Some(1),
            state_province_id: Some(26),
            zip_postal_code: Some("20040-020".to_string()),
        },
    )
    .with_zip_postal_code_from("01001-000")
}

fn engine(rt: &Runtime, services: &[&str]) -> RateComputationEngine {
    let gateway = ReplayGateway::new();
    rt.block_on(async {
        for (i, code) in services.iter().enumerate() {
            let code = ServiceCode::new(*code).unwrap();
            let price = format!("{},90", 18 + i);
            gateway
                .answer(code.clone(), RawCarrierResult::success(code, price, "4"))
                .await;
        }
    });
    let store = StoreCollaborators {
        measures: Arc::new(InMemoryMeasureService::metric()),
        aggregator: Arc::new(StackingShippingAggregator),
        addresses: Arc::new(InMemoryAddressBook::new()),
        currencies: Arc::new(InMemoryCurrencyService::single("BRL")),
    };
    RateComputationEngine::new(store, Arc::new(gateway), EngineConfig::default()).unwrap()
}

fn bench_get_shipping_options(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let catalog = ServiceCatalog::standard().unwrap();
    let all_codes: Vec<&str> = catalog.iter().map(|(code, _)| code.as_str()).collect();
    let request = shipment(5);

    let mut group = c.benchmark_group("get_shipping_options");
    for count in [1usize, 4, all_codes.len()] {
        let codes = all_codes.iter().take(count).copied().collect::<Vec<_>>();
        let encoded = codes
            .iter()
            .map(|code| format!("[{code}]"))
            .collect::<Vec<_>>()
            .join(":");
        let settings = CarrierSettings::default().with_services(&encoded).unwrap();
        let engine = engine(&rt, &codes);

        group.bench_with_input(BenchmarkId::new("services", count), &count, |b, _| {
            b.to_async(&rt).iter(|| async {
                black_box(
                    engine
                        .get_shipping_options(black_box(&request), &settings)
                        .await
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

fn bench_parse_price(c: &mut Criterion) {
    c.bench_function("parse_brazilian_decimal", |b| {
        b.iter(|| parse_brazilian_decimal(black_box("1.234,56")));
    });
}

criterion_group!(benches, bench_get_shipping_options, bench_parse_price);
criterion_main!(benches);
