//! # Replay Gateway
//!
//! A [`CarrierGateway`] that answers from recorded per-service results.
//!
//! Useful for tests, demos and replaying production answers offline. Service
//! codes without a recording fail with `CarrierError::ServiceUnavailable`.

use crate::domain::value_objects::{CarrierRateRequest, RawCarrierResult, ServiceCode};
use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use crate::infrastructure::carrier::traits::CarrierGateway;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// A recorded answer for one service code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recording {
    /// The carrier answered.
    Answer(RawCarrierResult),
    /// The transport failed with this message.
    Failure {
        /// Failure message.
        message: String,
    },
}

#[derive(Debug, Clone)]
struct Entry {
    recording: Recording,
    delay: Duration,
}

/// Gateway backed by recorded answers.
#[derive(Debug, Clone, Default)]
pub struct ReplayGateway {
    entries: Arc<RwLock<HashMap<ServiceCode, Entry>>>,
    requests: Arc<RwLock<Vec<CarrierRateRequest>>>,
}

impl ReplayGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway from recordings keyed by service code.
    #[must_use]
    pub fn from_recordings(recordings: HashMap<ServiceCode, Recording>) -> Self {
        let entries = recordings
            .into_iter()
            .map(|(code, recording)| {
                (
                    code,
                    Entry {
                        recording,
                        delay: Duration::ZERO,
                    },
                )
            })
            .collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
            requests: Arc::default(),
        }
    }

    /// Records an answer for a service code.
    pub async fn answer(&self, code: ServiceCode, result: RawCarrierResult) {
        self.record(code, Recording::Answer(result), Duration::ZERO)
            .await;
    }

    /// Records a transport failure for a service code.
    pub async fn fail(&self, code: ServiceCode, message: impl Into<String>) {
        let recording = Recording::Failure {
            message: message.into(),
        };
        self.record(code, recording, Duration::ZERO).await;
    }

    /// Records an answer that arrives after `delay`.
    pub async fn answer_after(&self, code: ServiceCode, result: RawCarrierResult, delay: Duration) {
        self.record(code, Recording::Answer(result), delay).await;
    }

    /// Returns the requests received so far.
    pub async fn requests(&self) -> Vec<CarrierRateRequest> {
        self.requests.read().await.clone()
    }

    async fn record(&self, code: ServiceCode, recording: Recording, delay: Duration) {
        let mut entries = self.entries.write().await;
        entries.insert(code, Entry { recording, delay });
    }
}

#[async_trait]
impl CarrierGateway for ReplayGateway {
    fn name(&self) -> &str {
        "replay"
    }

    async fn quote(&self, request: &CarrierRateRequest) -> CarrierResult<RawCarrierResult> {
        self.requests.write().await.push(request.clone());

        let entry = self
            .entries
            .read()
            .await
            .get(&request.service_code)
            .cloned()
            .ok_or_else(|| {
                CarrierError::service_unavailable(format!(
                    "no recording for service {}",
                    request.service_code
                ))
            })?;

        if !entry.delay.is_zero() {
            tokio::time::sleep(entry.delay).await;
        }

        match entry.recording {
            Recording::Answer(result) => Ok(result),
            Recording::Failure { message } => Err(CarrierError::connection(message)),
        }
    }
}
