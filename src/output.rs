//! JSON serialization of the collected roster. Absent optional fields are
//! omitted from the output, not rendered as null. The file is overwritten in
//! place; no atomicity is attempted.

use crate::types::Legislator;
use std::fs;
use std::path::Path;

pub fn write_records(records: &[Legislator], path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| format!("Failed to serialize records: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

    tracing::info!("Saved to: {}", path.display());
    tracing::info!("Total records: {}", records.len());
    if let Some(sample) = records.first() {
        tracing::info!("Sample record: {sample:?}");
    }

    Ok(())
}
