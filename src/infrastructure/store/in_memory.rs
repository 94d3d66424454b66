//! # In-Memory Store Collaborators
//!
//! In-memory implementations of the store traits.
//!
//! These back the replay tool and the tests; a real deployment supplies its
//! own store-backed implementations.

use crate::domain::value_objects::{
    ArithmeticResult, CheckedArithmetic, Currency, LineItem, MeasureUnit, PackageDimensions,
};
use crate::infrastructure::store::traits::{
    AddressLookup, CurrencyService, MeasureService, ShippingAggregator, StoreError, StoreResult,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Measure units held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMeasureService {
    weights: Arc<RwLock<HashMap<String, MeasureUnit>>>,
    dimensions: Arc<RwLock<HashMap<String, MeasureUnit>>>,
}

impl InMemoryMeasureService {
    /// Creates a service with no units.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service whose primary units already are kilograms and
    /// centimetres.
    #[must_use]
    pub fn metric() -> Self {
        let weights = HashMap::from([(
            "kg".to_string(),
            MeasureUnit::new(2, "kg", Decimal::ONE),
        )]);
        let dimensions = HashMap::from([(
            "centimeter".to_string(),
            MeasureUnit::new(3, "centimeter", Decimal::ONE),
        )]);
        Self {
            weights: Arc::new(RwLock::new(weights)),
            dimensions: Arc::new(RwLock::new(dimensions)),
        }
    }

    /// Registers a weight unit.
    pub async fn add_weight_unit(&self, unit: MeasureUnit) {
        let mut weights = self.weights.write().await;
        weights.insert(unit.system_keyword.clone(), unit);
    }

    /// Registers a dimension unit.
    pub async fn add_dimension_unit(&self, unit: MeasureUnit) {
        let mut dimensions = self.dimensions.write().await;
        dimensions.insert(unit.system_keyword.clone(), unit);
    }
}

#[async_trait]
impl MeasureService for InMemoryMeasureService {
    async fn weight_unit(&self, keyword: &str) -> StoreResult<Option<MeasureUnit>> {
        Ok(self.weights.read().await.get(keyword).cloned())
    }

    async fn dimension_unit(&self, keyword: &str) -> StoreResult<Option<MeasureUnit>> {
        Ok(self.dimensions.read().await.get(keyword).cloned())
    }

    async fn convert_weight(&self, value: Decimal, unit: &MeasureUnit) -> StoreResult<Decimal> {
        unit.from_primary(value)
            .map_err(|e| StoreError::conversion(format!("weight {value}: {e}")))
    }

    async fn convert_dimension(
        &self,
        value: Decimal,
        unit: &MeasureUnit,
    ) -> StoreResult<Decimal> {
        unit.from_primary(value)
            .map_err(|e| StoreError::conversion(format!("dimension {value}: {e}")))
    }
}

/// Packs items by stacking them: the parcel is as long and wide as the
/// largest item and as tall as all units piled up.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackingShippingAggregator;

#[async_trait]
impl ShippingAggregator for StackingShippingAggregator {
    async fn total_weight(&self, items: &[LineItem]) -> StoreResult<Decimal> {
        items
            .iter()
            .try_fold(Decimal::ZERO, |total, item| {
                item.product
                    .weight
                    .safe_mul(Decimal::from(item.quantity))
                    .and_then(|line| total.safe_add(line))
            })
            .map_err(|e| StoreError::conversion(format!("total weight: {e}")))
    }

    async fn dimensions(&self, items: &[LineItem]) -> StoreResult<PackageDimensions> {
        items
            .iter()
            .try_fold(
                PackageDimensions::default(),
                |acc, item| -> ArithmeticResult<PackageDimensions> {
                    let stacked = item
                        .product
                        .height
                        .safe_mul(Decimal::from(item.quantity))
                        .and_then(|height| acc.height.safe_add(height))?;
                    Ok(PackageDimensions::new(
                        acc.length.max(item.product.length),
                        acc.width.max(item.product.width),
                        stacked,
                    ))
                },
            )
            .map_err(|e| StoreError::conversion(format!("stacked height: {e}")))
    }
}

/// Address postal codes held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAddressBook {
    postal_codes: Arc<RwLock<HashMap<u32, String>>>,
}

impl InMemoryAddressBook {
    /// Creates an empty address book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the postal code of an address.
    pub async fn insert(&self, address_id: u32, postal_code: impl Into<String>) {
        let mut postal_codes = self.postal_codes.write().await;
        postal_codes.insert(address_id, postal_code.into());
    }
}

#[async_trait]
impl AddressLookup for InMemoryAddressBook {
    async fn postal_code(&self, address_id: u32) -> StoreResult<Option<String>> {
        Ok(self.postal_codes.read().await.get(&address_id).cloned())
    }
}

/// Currencies held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCurrencyService {
    currencies: Arc<RwLock<HashMap<String, Currency>>>,
    primary_code: Option<String>,
}

impl InMemoryCurrencyService {
    /// Creates a service with no currencies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service whose only and primary currency is `code`.
    #[must_use]
    pub fn single(code: &str) -> Self {
        let currency = Currency::new(1, code, Decimal::ONE);
        Self {
            currencies: Arc::new(RwLock::new(HashMap::from([(code.to_string(), currency)]))),
            primary_code: Some(code.to_string()),
        }
    }

    /// Sets the primary store currency code.
    #[must_use]
    pub fn with_primary(mut self, code: impl Into<String>) -> Self {
        self.primary_code = Some(code.into());
        self
    }

    /// Registers a currency.
    pub async fn insert(&self, currency: Currency) {
        let mut currencies = self.currencies.write().await;
        currencies.insert(currency.code.clone(), currency);
    }
}

#[async_trait]
impl CurrencyService for InMemoryCurrencyService {
    async fn currency_by_code(&self, code: &str) -> StoreResult<Option<Currency>> {
        Ok(self.currencies.read().await.get(code).cloned())
    }

    async fn primary_store_currency(&self) -> StoreResult<Option<Currency>> {
        match &self.primary_code {
            Some(code) => self.currency_by_code(code).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Product;

    fn item(weight: i64, length: i64, width: i64, height: i64, quantity: u32) -> LineItem {
        LineItem::new(
            Product {
                weight: Decimal::new(weight, 1),
                length: Decimal::new(length, 0),
                width: Decimal::new(width, 0),
                height: Decimal::new(height, 0),
                ..Product::default()
            },
            quantity,
        )
    }

    #[test]
    fn stacking_aggregates_items() {
        let items = [item(5, 20, 10, 4, 2), item(12, 30, 8, 5, 1)];
        let aggregator = StackingShippingAggregator;
        let weight = tokio_test::block_on(aggregator.total_weight(&items)).unwrap();
        assert_eq!(weight, Decimal::new(22, 1));
        let dims = tokio_test::block_on(aggregator.dimensions(&items)).unwrap();
        assert_eq!(
            dims,
            PackageDimensions::new(Decimal::new(30, 0), Decimal::new(10, 0), Decimal::new(13, 0))
        );
    }

    #[tokio::test]
    async fn overflowing_items_are_conversion_errors() {
        let mut heavy = item(1, 10, 10, 10, 3);
        heavy.product.weight = Decimal::MAX;
        heavy.product.height = Decimal::MAX;
        let aggregator = StackingShippingAggregator;
        let err = aggregator.total_weight(&[heavy.clone()]).await.unwrap_err();
        assert!(matches!(err, StoreError::Conversion(_)));
        let err = aggregator.dimensions(&[heavy]).await.unwrap_err();
        assert!(matches!(err, StoreError::Conversion(_)));

        let measures = InMemoryMeasureService::new();
        let grams = MeasureUnit::new(2, "g", Decimal::new(1000, 0));
        assert!(measures.convert_weight(Decimal::MAX, &grams).await.is_err());
    }

    #[tokio::test]
    async fn metric_measures_resolve() {
        let measures = InMemoryMeasureService::metric();
        let kg = measures.weight_unit("kg").await.unwrap().unwrap();
        assert_eq!(measures.convert_weight(Decimal::new(3, 0), &kg).await.unwrap(), Decimal::new(3, 0));
        assert!(measures.weight_unit("lb").await.unwrap().is_none());
        assert!(measures.dimension_unit("centimeter").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn grams_convert_to_kilograms() {
        let measures = InMemoryMeasureService::new();
        measures
            .add_weight_unit(MeasureUnit::new(2, "kg", Decimal::new(1, 3)))
            .await;
        let kg = measures.weight_unit("kg").await.unwrap().unwrap();
        assert_eq!(
            measures.convert_weight(Decimal::new(2500, 0), &kg).await.unwrap(),
            Decimal::new(25, 1)
        );
    }

    #[tokio::test]
    async fn address_book_lookup() {
        let book = InMemoryAddressBook::new();
        book.insert(7, "88010-400").await;
        assert_eq!(book.postal_code(7).await.unwrap().as_deref(), Some("88010-400"));
        assert!(book.postal_code(8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn currency_primary() {
        let currencies = InMemoryCurrencyService::single("BRL");
        assert_eq!(currencies.primary_store_currency().await.unwrap().unwrap().code, "BRL");
        let none = InMemoryCurrencyService::new();
        assert!(none.primary_store_currency().await.unwrap().is_none());
        none.insert(Currency::new(2, "USD", Decimal::ONE)).await;
        assert!(none.currency_by_code("USD").await.unwrap().is_some());
    }
}
