//! Parser for version-table.txt
//!
//! Each line is `<version> <Mon> <DD> <YYYY>`, e.g. `10.2.3 Jan 15 2023`.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::table::types::{VersionEntry, VersionTable};

/// Date format of the trailing three fields of a record
const RELEASE_DATE_FORMAT: &str = "%b %d %Y";

/// Error type for version table loading
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The table file could not be read
    #[error("Failed to read version table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A record has fewer than four whitespace-separated fields
    #[error("Line {line}: expected `<version> <Mon> <DD> <YYYY>`, got {content:?}")]
    MissingFields { line: usize, content: String },

    /// The date portion of a record does not match `Mon DD YYYY`
    #[error("Line {line}: invalid release date {date:?}: {source}")]
    InvalidDate {
        line: usize,
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Load the version table from a file
pub fn load_version_table(path: &Path) -> Result<VersionTable, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = parse_version_table(&content)?;
    debug!("Loaded {} versions from {:?}", table.len(), path);
    Ok(table)
}

/// Parse version table content
///
/// Blank lines are skipped. A version listed twice keeps the date from its
/// last occurrence.
pub fn parse_version_table(content: &str) -> Result<VersionTable, ParseError> {
    let mut entries: Vec<VersionEntry> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let entry = parse_record(index + 1, line, &fields)?;

        if let Some(previous) = entries.iter().rev().find(|e| e.version == entry.version) {
            warn!(
                "Duplicate version {} on line {}: {} replaces {}",
                entry.version,
                index + 1,
                entry.release_date,
                previous.release_date
            );
        }
        entries.push(entry);
    }

    Ok(VersionTable::new(entries))
}

fn parse_record(line: usize, content: &str, fields: &[&str]) -> Result<VersionEntry, ParseError> {
    let missing_fields = || ParseError::MissingFields {
        line,
        content: content.to_string(),
    };
    let (version, date_fields) = fields.split_first().ok_or_else(missing_fields)?;
    if date_fields.len() < 3 {
        return Err(missing_fields());
    }

    let date = date_fields.join(" ");
    let release_date = NaiveDate::parse_from_str(&date, RELEASE_DATE_FORMAT)
        .map_err(|source| ParseError::InvalidDate { line, date, source })?;

    Ok(VersionEntry {
        version: version.to_string(),
        release_date,
    })
}
