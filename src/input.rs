use crate::error::Result;
use crate::types::FdoRecord;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// The input file may hold either a single record object or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordInput {
    Many(Vec<FdoRecord>),
    One(FdoRecord),
}

/// Loads FDO records from a JSON file, normalizing a single object to a
/// one-element list. A missing file or malformed JSON aborts the run.
pub fn load_records(path: &Path) -> Result<Vec<FdoRecord>> {
    let content = fs::read_to_string(path)?;
    let input: RecordInput = serde_json::from_str(&content)?;
    let records = match input {
        RecordInput::Many(records) => records,
        RecordInput::One(record) => vec![record],
    };
    info!(count = records.len(), "Loaded FDO records");
    Ok(records)
}
