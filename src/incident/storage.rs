//! Offline incident ledger.
//!
//! When the persistence endpoint is unreachable, incident records are
//! appended to a JSON-lines dotfile in the home directory so triage keeps
//! working with no backend present.

use std::fs::{self, OpenOptions, Permissions};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::IncidentRecord;

const LEDGER_FILE: &str = ".serpentguard-incidents.jsonl";

/// Ledger location when none is configured
pub fn default_ledger_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(LEDGER_FILE)
}

/// Append one record, creating the ledger with owner-only permissions
pub fn append_incident(path: &Path, record: &IncidentRecord) -> Result<()> {
    let line = serde_json::to_string(record).context("failed to serialize incident record")?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open incident ledger")?;
    writeln!(file, "{}", line).context("failed to write incident ledger")?;
    fs::set_permissions(path, Permissions::from_mode(0o600))
        .context("failed to set incident ledger permissions")?;
    Ok(())
}

/// Load all locally saved records; a missing ledger is an empty ledger
pub fn load_incidents(path: &Path) -> Result<Vec<IncidentRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).context("failed to read incident ledger")?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).context("failed to parse incident ledger line"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_ledger(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "serpentguard-ledger-{}-{}.jsonl",
            tag,
            std::process::id()
        ))
    }

    fn sample_record(species: &str) -> IncidentRecord {
        IncidentRecord {
            species: species.to_string(),
            risk: "CRITICAL".to_string(),
            confidence: 95,
            time: "2026-08-07T12:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_default_path_is_in_home() {
        let path = default_ledger_path();
        assert!(path.to_string_lossy().ends_with(LEDGER_FILE));
    }

    #[test]
    fn test_missing_ledger_is_empty() {
        let path = temp_ledger("missing");
        fs::remove_file(&path).ok();
        assert!(load_incidents(&path).unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let path = temp_ledger("roundtrip");
        fs::remove_file(&path).ok();

        append_incident(&path, &sample_record("Indian Cobra")).unwrap();
        append_incident(&path, &sample_record("Rat Snake")).unwrap();

        let records = load_incidents(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].species, "Indian Cobra");
        assert_eq!(records[1].species, "Rat Snake");

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        fs::remove_file(&path).ok();
    }
}
