use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::triage::Verdict;

/// Wire body for `POST /log-incident`, also the offline ledger line format
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub species: String,
    pub risk: String,
    pub confidence: u8,
    /// RFC 3339 timestamp, assigned at logging time
    pub time: String,
}

impl IncidentRecord {
    /// Snapshot a verdict for delivery. The timestamp is taken now, not at
    /// classification time.
    pub fn from_verdict(verdict: &Verdict) -> Self {
        Self {
            species: verdict.subject_name.clone(),
            risk: verdict.risk_tier.label().to_string(),
            confidence: verdict.confidence_percent,
            time: Local::now().to_rfc3339(),
        }
    }
}

/// How a log attempt ended. Both variants are successful cycle outcomes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogOutcome {
    /// The persistence endpoint acknowledged the record
    Delivered,
    /// The endpoint was unreachable; the record went to the offline ledger
    SavedLocallyOffline,
}
