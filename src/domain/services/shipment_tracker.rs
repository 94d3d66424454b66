//! # Shipment Tracker
//!
//! Tracking links for shipped parcels. Tracking events are not fetched.

use serde::{Deserialize, Serialize};

/// Public tracking page prefix.
const TRACKING_URL_PREFIX: &str = "https://melhorrastreio.com.br/rastreio/";

/// A tracking event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentStatusEvent {
    /// Event description.
    pub description: String,
    /// Where the event happened.
    pub location: Option<String>,
}

/// Tracker for Correios parcels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShipmentTracker;

impl ShipmentTracker {
    /// Returns the tracking page for a tracking number.
    #[must_use]
    pub fn tracking_url(&self, tracking_number: &str) -> String {
        format!("{TRACKING_URL_PREFIX}{}", tracking_number.trim())
    }

    /// Tracking numbers are never claimed by this tracker.
    #[must_use]
    pub fn is_match(&self, _tracking_number: &str) -> bool {
        false
    }

    /// Returns the known events for a tracking number (none).
    #[must_use]
    pub fn shipment_events(&self, _tracking_number: &str) -> Vec<ShipmentStatusEvent> {
        Vec::new()
    }
}
