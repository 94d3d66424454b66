//! # Store Collaborators
//!
//! Ports to the store for units, parcel aggregation, addresses and
//! currencies, with in-memory implementations.

pub mod in_memory;
pub mod traits;

pub use in_memory::{
    InMemoryAddressBook, InMemoryCurrencyService, InMemoryMeasureService,
    StackingShippingAggregator,
};
pub use traits::{
    AddressLookup, CurrencyService, MeasureService, ShippingAggregator, StoreError, StoreResult,
};
