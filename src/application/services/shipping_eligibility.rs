//! # Shipping Eligibility
//!
//! Decides whether a set of products can be shipped by the carrier at all.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::rate_request_builder::RateRequestBuilder;
use crate::config::{CarrierSettings, EngineConfig};
use crate::domain::value_objects::arithmetic::checked_sum;
use crate::domain::value_objects::{PackageDimensions, Product};
use rust_decimal::Decimal;
use tracing::debug;

/// Checks products against the carrier's size and value limits.
#[derive(Debug, Clone)]
pub struct ShippingEligibility {
    builder: RateRequestBuilder,
    max_declared_value: Decimal,
}

impl ShippingEligibility {
    /// Creates a checker reading units and currencies through `builder`.
    #[must_use]
    pub fn new(builder: RateRequestBuilder, config: &EngineConfig) -> Self {
        Self {
            builder,
            max_declared_value: config.max_declared_value,
        }
    }

    /// Returns true if the products must not be shipped.
    ///
    /// Denied when any product's length, width or height in centimetres is
    /// above the configured maximum, or when the summed unit prices in the
    /// carrier's currency exceed the declared value ceiling.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the dimension unit or a currency
    /// cannot be resolved, or an arithmetic error if the prices overflow.
    pub async fn deny_product_shipping(
        &self,
        products: &[Product],
        settings: &CarrierSettings,
    ) -> ApplicationResult<bool> {
        let unit = self.builder.dimension_unit().await?;
        let bounds = settings.dimension_bounds();
        for product in products {
            let size = self
                .builder
                .to_centimetres(
                    PackageDimensions::new(product.length, product.width, product.height),
                    &unit,
                )
                .await?;
            if size.length > bounds.length.max
                || size.width > bounds.width.max
                || size.height > bounds.height.max
            {
                debug!(product_id = product.id, %size, "product exceeds carrier dimensions");
                return Ok(true);
            }
        }

        let currency = self.builder.resolve_currencies().await?;
        let declared = checked_sum(products.iter().map(|p| p.price))
            .map_err(|e| ApplicationError::arithmetic("declared value", e))?;
        let declared = currency.to_carrier(declared);
        Ok(declared > self.max_declared_value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::application::services::rate_request_builder::StoreCollaborators;
    use crate::domain::value_objects::MeasureUnit;
    use crate::infrastructure::store::{
        InMemoryAddressBook, InMemoryCurrencyService, InMemoryMeasureService,
        StackingShippingAggregator,
    };
    use std::sync::Arc;

    fn checker(measures: InMemoryMeasureService) -> ShippingEligibility {
        let config = EngineConfig::default();
        let store = StoreCollaborators {
            measures: Arc::new(measures),
            aggregator: Arc::new(StackingShippingAggregator),
            addresses: Arc::new(InMemoryAddressBook::new()),
            currencies: Arc::new(InMemoryCurrencyService::single("BRL")),
        };
        ShippingEligibility::new(RateRequestBuilder::new(store, config.clone()), &config)
    }

    fn product(price: i64, length: i64) -> Product {
        Product {
            id: 1,
            price: Decimal::new(price, 0),
            weight: Decimal::ONE,
            length: Decimal::new(length, 0),
            width: Decimal::new(20, 0),
            height: Decimal::new(20, 0),
        }
    }

    #[tokio::test]
    async fn allows_ordinary_products() {
        let denied = checker(InMemoryMeasureService::metric())
            .deny_product_shipping(&[product(100, 30), product(900, 105)], &CarrierSettings::default())
            .await
            .unwrap();
        assert!(!denied);
    }

    #[tokio::test]
    async fn denies_oversized_product() {
        let denied = checker(InMemoryMeasureService::metric())
            .deny_product_shipping(&[product(100, 106)], &CarrierSettings::default())
            .await
            .unwrap();
        assert!(denied);
    }

    #[tokio::test]
    async fn denies_declared_value_over_ceiling() {
        let denied = checker(InMemoryMeasureService::metric())
            .deny_product_shipping(&[product(2000, 30), product(1001, 30)], &CarrierSettings::default())
            .await
            .unwrap();
        assert!(denied);
    }

    #[tokio::test]
    async fn overflowing_prices_are_an_error() {
        let mut priceless = product(1, 30);
        priceless.price = Decimal::MAX;
        let err = checker(InMemoryMeasureService::metric())
            .deny_product_shipping(&[priceless, product(1, 30)], &CarrierSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Arithmetic { .. }));
    }

    #[tokio::test]
    async fn converts_from_primary_unit() {
        // Store measures in metres; 1.2 m is over the 105 cm limit.
        let measures = InMemoryMeasureService::new();
        measures
            .add_dimension_unit(MeasureUnit::new(3, "centimeter", Decimal::new(100, 0)))
            .await;
        let mut tall = product(100, 1);
        tall.height = Decimal::new(12, 1);
        tall.width = Decimal::new(2, 1);
        let denied = checker(measures)
            .deny_product_shipping(&[tall], &CarrierSettings::default())
            .await
            .unwrap();
        assert!(denied);
    }

    #[tokio::test]
    async fn missing_dimension_unit_is_configuration_error() {
        let err = checker(InMemoryMeasureService::new())
            .deny_product_shipping(&[product(100, 30)], &CarrierSettings::default())
            .await
            .unwrap_err();
        assert!(err.is_configuration());
    }
}
