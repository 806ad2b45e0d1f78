//! Persistence endpoint client.
//!
//! Delivery is best effort: any transport or HTTP failure downgrades to the
//! offline ledger and the caller sees `SavedLocallyOffline`, never an error.
//! Triage must stay usable with no backend running.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::LoggerConfig;
use crate::triage::Verdict;

use super::storage;
use super::types::{IncidentRecord, LogOutcome};

pub struct EndpointClient {
    endpoint_url: String,
    timeout: Duration,
    ledger_path: PathBuf,
}

impl EndpointClient {
    pub fn new(config: &LoggerConfig) -> Self {
        Self {
            endpoint_url: config.endpoint_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            ledger_path: config
                .ledger_path
                .clone()
                .unwrap_or_else(storage::default_ledger_path),
        }
    }

    /// Liveness probe against `GET /`; any successful response counts
    pub fn probe(&self) -> bool {
        ureq::get(&format!("{}/", self.endpoint_url))
            .timeout(self.timeout)
            .call()
            .is_ok()
    }

    /// Deliver a verdict summary, falling back to the offline ledger.
    ///
    /// Never fails and never blocks beyond the configured timeout; both
    /// outcomes leave the classification cycle successful.
    pub fn log(&self, verdict: &Verdict) -> LogOutcome {
        let record = IncidentRecord::from_verdict(verdict);
        match self.post_incident(&record) {
            Ok(()) => {
                log::info!("incident delivered to {}", self.endpoint_url);
                LogOutcome::Delivered
            }
            Err(e) => {
                log::warn!(
                    "persistence endpoint unreachable ({:#}), saving incident locally",
                    e
                );
                self.save_locally(&record)
            }
        }
    }

    /// Record the incident in the offline ledger without trying the network
    pub fn log_offline(&self, verdict: &Verdict) -> LogOutcome {
        let record = IncidentRecord::from_verdict(verdict);
        self.save_locally(&record)
    }

    fn save_locally(&self, record: &IncidentRecord) -> LogOutcome {
        if let Err(e) = storage::append_incident(&self.ledger_path, record) {
            // Logging must not take down the user flow even here
            log::error!("failed to save incident locally: {:#}", e);
        }
        LogOutcome::SavedLocallyOffline
    }

    fn post_incident(&self, record: &IncidentRecord) -> Result<()> {
        let body = serde_json::to_string(record).context("failed to serialize incident record")?;
        let url = format!("{}/log-incident", self.endpoint_url);

        log::debug!("posting incident for {} to {}", record.species, url);

        // Non-2xx statuses come back as errors from ureq, so a plain Ok
        // here means the endpoint acknowledged the record
        ureq::post(&url)
            .set("Content-Type", "application/json")
            .timeout(self.timeout)
            .send_string(&body)
            .context("failed to reach persistence endpoint")?;
        Ok(())
    }
}
