//! # Rate Request Builder
//!
//! Assembles one [`CarrierRateRequest`] per enabled service code.
//!
//! Everything except the service code is shared across the requests of a
//! call and computed once:
//!
//! - **Origin postal code**: the warehouse address, else the code on the
//!   request, else the configured default; first non-blank wins
//! - **Weight**: aggregated, converted to kilograms, rounded up and clamped
//! - **Dimensions**: aggregated, converted to centimetres and clamped
//! - **Declared value**: sum of unit prices in the carrier's currency, floored
//!   at the configured minimum

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::{CarrierSettings, EngineConfig};
use crate::domain::services::unit_normalizer::{normalize_dimensions, normalize_weight};
use crate::domain::services::CurrencyAdjustment;
use crate::domain::value_objects::carrier_result::FORMAT_BOX_OR_PACKAGE;
use crate::domain::value_objects::{
    CarrierRateRequest, MeasureUnit, PackageDimensions, ShipmentRequest,
};
use crate::infrastructure::store::{
    AddressLookup, CurrencyService, MeasureService, ShippingAggregator,
};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Store collaborators the builder reads from.
#[derive(Debug, Clone)]
pub struct StoreCollaborators {
    /// Unit lookup and conversion.
    pub measures: Arc<dyn MeasureService>,
    /// Parcel aggregation.
    pub aggregator: Arc<dyn ShippingAggregator>,
    /// Address lookup.
    pub addresses: Arc<dyn AddressLookup>,
    /// Currency lookup.
    pub currencies: Arc<dyn CurrencyService>,
}

/// Builds outbound carrier requests from a shipment request.
#[derive(Debug, Clone)]
pub struct RateRequestBuilder {
    store: StoreCollaborators,
    config: EngineConfig,
}

impl RateRequestBuilder {
    /// Creates a builder.
    #[must_use]
    pub fn new(store: StoreCollaborators, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Returns the store collaborators.
    #[must_use]
    pub fn store(&self) -> &StoreCollaborators {
        &self.store
    }

    /// Resolves the carrier and store currencies.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either currency is unknown.
    pub async fn resolve_currencies(&self) -> ApplicationResult<CurrencyAdjustment> {
        let code = &self.config.carrier_currency_code;
        let carrier = self
            .store
            .currencies
            .currency_by_code(code)
            .await?
            .ok_or_else(|| ApplicationError::currency_not_found(code))?;
        let store = self
            .store
            .currencies
            .primary_store_currency()
            .await?
            .ok_or_else(|| ApplicationError::configuration("primary store currency is not set"))?;
        Ok(CurrencyAdjustment::new(carrier, store))
    }

    /// Builds one request per enabled service, in selection order.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteRequest` if the request lacks required fields, a
    /// configuration error if a unit cannot be resolved, or a store error.
    pub async fn build(
        &self,
        request: &ShipmentRequest,
        settings: &CarrierSettings,
        currency: &CurrencyAdjustment,
    ) -> ApplicationResult<Vec<CarrierRateRequest>> {
        let destination_zip = request
            .destination_postal_code()
            .ok_or_else(|| ApplicationError::IncompleteRequest(request.issues()))?
            .to_string();
        let origin_zip = self.origin_postal_code(request, settings).await?;
        let dimensions = self.dimensions(request, settings).await?;
        let weight_kg = self.weight(request, settings).await?;
        let declared_value = self.declared_value(request, settings, currency)?;
        let credentials = settings.credentials();

        Ok(settings
            .services_offered
            .codes()
            .iter()
            .map(|code| CarrierRateRequest {
                service_code: code.clone(),
                credentials: credentials.clone(),
                origin_zip: origin_zip.clone(),
                destination_zip: destination_zip.clone(),
                weight_kg,
                format_code: FORMAT_BOX_OR_PACKAGE,
                dimensions,
                diameter: Decimal::ZERO,
                own_hand: false,
                declared_value,
                receipt_notice: false,
            })
            .collect())
    }

    /// Resolves the origin postal code.
    ///
    /// # Errors
    ///
    /// Returns a store error if the warehouse address lookup fails.
    pub async fn origin_postal_code(
        &self,
        request: &ShipmentRequest,
        settings: &CarrierSettings,
    ) -> ApplicationResult<String> {
        if let Some(warehouse) = request.warehouse_from {
            let warehouse_zip = self
                .store
                .addresses
                .postal_code(warehouse.address_id)
                .await?
                .filter(|zip| !zip.trim().is_empty());
            if let Some(zip) = warehouse_zip {
                return Ok(zip);
            }
        }
        if let Some(zip) = request.origin_postal_code() {
            return Ok(zip.to_string());
        }
        Ok(settings.postal_code_from.clone())
    }

    /// Sum of unit prices in the carrier's currency, floored at the
    /// configured minimum.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error if the unit prices overflow.
    pub fn declared_value(
        &self,
        request: &ShipmentRequest,
        settings: &CarrierSettings,
        currency: &CurrencyAdjustment,
    ) -> ApplicationResult<Decimal> {
        let total = request
            .unit_price_total()
            .map_err(|e| ApplicationError::arithmetic("declared value", e))?;
        Ok(currency
            .to_carrier(total)
            .max(settings.declared_minimum_value))
    }

    /// Total weight in whole kilograms, within the carrier's bounds.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the weight unit is unknown.
    pub async fn weight(
        &self,
        request: &ShipmentRequest,
        settings: &CarrierSettings,
    ) -> ApplicationResult<i32> {
        let unit = self.weight_unit().await?;
        let total = self.store.aggregator.total_weight(&request.items).await?;
        let kg = self.store.measures.convert_weight(total, &unit).await?;
        Ok(normalize_weight(kg, settings.weight))
    }

    /// Parcel dimensions in centimetres, within the carrier's bounds.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the dimension unit is unknown.
    pub async fn dimensions(
        &self,
        request: &ShipmentRequest,
        settings: &CarrierSettings,
    ) -> ApplicationResult<PackageDimensions> {
        let unit = self.dimension_unit().await?;
        let raw = self.store.aggregator.dimensions(&request.items).await?;
        let converted = self.to_centimetres(raw, &unit).await?;
        Ok(normalize_dimensions(converted, &settings.dimension_bounds()))
    }

    pub(crate) async fn weight_unit(&self) -> ApplicationResult<MeasureUnit> {
        let keyword = &self.config.weight_unit_keyword;
        self.store
            .measures
            .weight_unit(keyword)
            .await?
            .ok_or_else(|| ApplicationError::measure_weight_not_found(keyword))
    }

    pub(crate) async fn dimension_unit(&self) -> ApplicationResult<MeasureUnit> {
        let keyword = &self.config.dimension_unit_keyword;
        self.store
            .measures
            .dimension_unit(keyword)
            .await?
            .ok_or_else(|| ApplicationError::measure_dimension_not_found(keyword))
    }

    pub(crate) async fn to_centimetres(
        &self,
        dimensions: PackageDimensions,
        unit: &MeasureUnit,
    ) -> ApplicationResult<PackageDimensions> {
        let measures = &self.store.measures;
        Ok(PackageDimensions::new(
            measures.convert_dimension(dimensions.length, unit).await?,
            measures.convert_dimension(dimensions.width, unit).await?,
            measures.convert_dimension(dimensions.height, unit).await?,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        Currency, LineItem, Product, ShippingAddress, WarehouseRef,
    };
    use crate::infrastructure::store::{
        InMemoryAddressBook, InMemoryCurrencyService, InMemoryMeasureService,
        StackingShippingAggregator, StoreError,
    };

    fn store(measures: InMemoryMeasureService, addresses: InMemoryAddressBook) -> StoreCollaborators {
        StoreCollaborators {
            measures: Arc::new(measures),
            aggregator: Arc::new(StackingShippingAggregator),
            addresses: Arc::new(addresses),
            currencies: Arc::new(InMemoryCurrencyService::single("BRL")),
        }
    }

    fn builder() -> RateRequestBuilder {
        RateRequestBuilder::new(
            store(InMemoryMeasureService::metric(), InMemoryAddressBook::new()),
            EngineConfig::default(),
        )
    }

    fn brl() -> CurrencyAdjustment {
        let brl = Currency::new(1, "BRL", Decimal::ONE);
        CurrencyAdjustment::new(brl.clone(), brl)
    }

    fn item(price: i64, weight_tenths: i64, quantity: u32) -> LineItem {
        LineItem::new(
            Product {
                id: 1,
                price: Decimal::new(price, 0),
                weight: Decimal::new(weight_tenths, 1),
                length: Decimal::new(30, 0),
                width: Decimal::new(5, 0),
                height: Decimal::new(60, 0),
            },
            quantity,
        )
    }

    fn request(items: Vec<LineItem>) -> ShipmentRequest {
        ShipmentRequest::new(
            items,
            ShippingAddress {
                country_id: Some(1),
                state_province_id: Some(26),
                zip_postal_code: Some("20040-020".to_string()),
            },
        )
    }

    fn settings() -> CarrierSettings {
        CarrierSettings::default()
            .with_postal_code_from("01001-000")
            .with_services("[04510]:[04014]")
            .unwrap()
    }

    #[tokio::test]
    async fn builds_one_request_per_service() {
        let requests = builder()
            .build(&request(vec![item(50, 15, 1)]), &settings(), &brl())
            .await
            .unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].service_code.as_str(), "04510");
        assert_eq!(requests[1].service_code.as_str(), "04014");

        let first = &requests[0];
        assert_eq!(first.origin_zip, "01001-000");
        assert_eq!(first.destination_zip, "20040-020");
        assert_eq!(first.weight_kg, 2);
        assert_eq!(first.format_code, 1);
        assert!(!first.own_hand);
        assert!(!first.receipt_notice);
        assert_eq!(
            first.dimensions,
            PackageDimensions::new(Decimal::new(30, 0), Decimal::new(11, 0), Decimal::new(60, 0))
        );
        assert_eq!(first.declared_value, Decimal::new(50, 0));
    }

    #[tokio::test]
    async fn clamps_oversized_parcel() {
        let requests = builder()
            .build(&request(vec![item(50, 400, 2)]), &settings(), &brl())
            .await
            .unwrap();
        assert_eq!(requests[0].weight_kg, 30);
        assert_eq!(requests[0].dimensions.height, Decimal::new(105, 0));
    }

    #[tokio::test]
    async fn declared_value_is_floored() {
        let value = builder()
            .declared_value(&request(vec![item(5, 10, 1)]), &settings(), &brl())
            .unwrap();
        assert_eq!(value, Decimal::new(195, 1));
    }

    #[tokio::test]
    async fn declared_value_sums_unit_prices_without_quantity() {
        let value = builder()
            .declared_value(&request(vec![item(40, 10, 3), item(25, 10, 2)]), &settings(), &brl())
            .unwrap();
        assert_eq!(value, Decimal::new(65, 0));
    }

    #[tokio::test]
    async fn overflowing_store_values_fail_the_build() {
        let mut priced = item(5, 10, 1);
        priced.product.price = Decimal::MAX;
        let err = builder()
            .build(&request(vec![priced, item(5, 10, 1)]), &settings(), &brl())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Arithmetic { context: "declared value", .. }));

        let mut heavy = item(5, 10, 2);
        heavy.product.weight = Decimal::MAX;
        let err = builder()
            .build(&request(vec![heavy]), &settings(), &brl())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Store(StoreError::Conversion(_))));
    }

    #[tokio::test]
    async fn origin_prefers_warehouse_then_request_then_settings() {
        let addresses = InMemoryAddressBook::new();
        addresses.insert(10, "88010-400").await;
        addresses.insert(11, " ").await;
        let builder = RateRequestBuilder::new(
            store(InMemoryMeasureService::metric(), addresses),
            EngineConfig::default(),
        );
        let settings = settings();

        let from_warehouse = request(vec![])
            .with_zip_postal_code_from("30130-010")
            .with_warehouse(WarehouseRef { id: 1, address_id: 10 });
        assert_eq!(builder.origin_postal_code(&from_warehouse, &settings).await.unwrap(), "88010-400");

        let blank_warehouse = request(vec![])
            .with_zip_postal_code_from("30130-010")
            .with_warehouse(WarehouseRef { id: 2, address_id: 11 });
        assert_eq!(builder.origin_postal_code(&blank_warehouse, &settings).await.unwrap(), "30130-010");

        let unknown_warehouse = request(vec![]).with_warehouse(WarehouseRef { id: 3, address_id: 99 });
        assert_eq!(builder.origin_postal_code(&unknown_warehouse, &settings).await.unwrap(), "01001-000");
    }

    #[tokio::test]
    async fn missing_weight_unit_is_configuration_error() {
        let builder = RateRequestBuilder::new(
            store(InMemoryMeasureService::new(), InMemoryAddressBook::new()),
            EngineConfig::default(),
        );
        let err = builder.weight(&request(vec![item(5, 10, 1)]), &settings()).await.unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("\"kg\" measure weight"));
    }

    #[tokio::test]
    async fn missing_dimension_unit_is_configuration_error() {
        let measures = InMemoryMeasureService::new();
        measures.add_weight_unit(MeasureUnit::new(1, "kg", Decimal::ONE)).await;
        let builder = RateRequestBuilder::new(
            store(measures, InMemoryAddressBook::new()),
            EngineConfig::default(),
        );
        let err = builder
            .build(&request(vec![item(5, 10, 1)]), &settings(), &brl())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("\"centimeter\" measure dimension"));
    }

    #[tokio::test]
    async fn missing_carrier_currency_is_configuration_error() {
        let mut collaborators = store(InMemoryMeasureService::metric(), InMemoryAddressBook::new());
        collaborators.currencies = Arc::new(InMemoryCurrencyService::single("USD"));
        let builder = RateRequestBuilder::new(collaborators, EngineConfig::default());
        let err = builder.resolve_currencies().await.unwrap_err();
        assert!(err.to_string().contains("\"BRL\" currency"));
    }

    #[tokio::test]
    async fn incomplete_request_is_rejected() {
        let incomplete = ShipmentRequest {
            items: vec![item(5, 10, 1)],
            ..ShipmentRequest::default()
        };
        let err = builder().build(&incomplete, &settings(), &brl()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::IncompleteRequest(_)));
    }
}
