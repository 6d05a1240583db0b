use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde_json::Value;

use crate::domain::MatchRecord;
use crate::errors::{MatchError, with_parse_context, with_read_context};

/// A match file decoded record by record.
///
/// The file must be a JSON array; an entry that does not fit the record
/// shape is kept as an error so that one bad entry cannot sink the file.
#[derive(Debug)]
pub struct MatchFile {
    pub entries: Vec<Result<MatchRecord, MatchError>>,
}

impl MatchFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = with_read_context(fs::read_to_string(path), path)?;
        let file = Self::parse(&json).with_context(|| format!("Invalid match file {}", path.display()))?;
        info!("Loaded {} match records from {}", file.len(), path.display());
        Ok(file)
    }

    pub fn parse(json: &str) -> Result<Self> {
        let values: Vec<Value> = with_parse_context(serde_json::from_str(json), "match list")?;
        let entries = values.into_iter().map(decode_record).collect();
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn decode_record(value: Value) -> Result<MatchRecord, MatchError> {
    serde_json::from_value(value).map_err(|e| MatchError::MalformedMatch(format!("undecodable record: {}", e)))
}

/// Teams named by an entry, or none if it did not decode.
pub fn entry_teams(entry: &Result<MatchRecord, MatchError>) -> Vec<String> {
    entry.as_ref().map(|r| r.teams.clone()).unwrap_or_default()
}

/// Write `data` as pretty JSON.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved report to {}", path.display());
    Ok(())
}
