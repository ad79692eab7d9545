//! Common types for the version table

use chrono::NaiveDate;
use indexmap::IndexMap;

/// A single release: version identifier and the day it shipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    /// Version identifier (e.g., "10.2.3")
    pub version: String,
    /// Release date, without time component
    pub release_date: NaiveDate,
}

/// Immutable mapping from version identifier to release date
///
/// Entries keep the order in which they were inserted, so every lookup
/// returns versions in table-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionTable {
    entries: IndexMap<String, NaiveDate>,
}

impl VersionTable {
    /// Build a table from entries; a repeated version keeps its last date
    /// but its original position.
    pub fn new(entries: impl IntoIterator<Item = VersionEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.version, entry.release_date))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Release date of a version, if known
    #[cfg(test)]
    pub fn release_date(&self, version: &str) -> Option<NaiveDate> {
        self.entries.get(version).copied()
    }

    /// All versions released on `date`, in table order
    pub fn versions_released_on(&self, date: NaiveDate) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, release_date)| **release_date == date)
            .map(|(version, _)| version.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = VersionEntry> + '_ {
        self.entries.iter().map(|(version, release_date)| VersionEntry {
            version: version.clone(),
            release_date: *release_date,
        })
    }
}
