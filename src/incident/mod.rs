pub mod client;
pub mod storage;
pub mod types;

// Re-export commonly used items
pub use client::EndpointClient;
pub use storage::{append_incident, default_ledger_path, load_incidents};
pub use types::{IncidentRecord, LogOutcome};
