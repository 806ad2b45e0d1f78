use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Tunables for the triage decision chain
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Maximum number of ranked predictions kept per classification call
    pub top_k: usize,
    /// Confidence percent below which the uncertainty rule fires
    pub confidence_gate_percent: u8,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            confidence_gate_percent: 70,
        }
    }
}

/// Incident logger settings
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Persistence endpoint base URL
    pub endpoint_url: String,
    /// Timeout for the probe and delivery requests, in seconds
    pub timeout_secs: u64,
    /// Offline ledger location; defaults to a dotfile in the home directory
    pub ledger_path: Option<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "http://localhost:5000".to_string(),
            timeout_secs: 5,
            ledger_path: None,
        }
    }
}
