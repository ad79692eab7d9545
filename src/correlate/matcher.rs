//! Date correlation against the version table

use chrono::{Days, NaiveDate};

use crate::table::VersionTable;

/// Day offsets relative to an observed date, in priority order
pub const DAY_OFFSETS: [i64; 5] = [0, 1, -1, 2, -2];

/// How closely a release date matches an observed date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Released on the observed date
    Exact,
    /// Released within a couple of days of the observed date
    Approximate,
}

impl Precision {
    /// Every precision class, in output order
    pub const ALL: [Precision; 2] = [Precision::Exact, Precision::Approximate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Exact => "exact",
            Precision::Approximate => "approximate",
        }
    }

    fn of_offset(offset: i64) -> Self {
        if offset == 0 {
            Precision::Exact
        } else {
            Precision::Approximate
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Versions released on `reference_date`, matched with the given precision
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchResult {
    pub precision: Precision,
    pub reference_date: NaiveDate,
    /// May be empty: the reference date is reported even when nothing shipped on it
    pub matched_versions: Vec<String>,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.matched_versions.is_empty()
    }
}

/// Renders `<versions> <YYYY-MM-DD> (<precision>)`
impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.matched_versions.join(","),
            self.reference_date.format("%Y-%m-%d"),
            self.precision
        )
    }
}

/// Result of correlating one observed date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatches {
    pub exact: MatchResult,
    pub approximate: MatchResult,
}

impl DateMatches {
    pub fn get(&self, precision: Precision) -> &MatchResult {
        match precision {
            Precision::Exact => &self.exact,
            Precision::Approximate => &self.approximate,
        }
    }

    /// Matches that name at least one version, exact first
    pub fn non_empty(&self) -> impl Iterator<Item = &MatchResult> {
        Precision::ALL
            .into_iter()
            .map(|precision| self.get(precision))
            .filter(|result| !result.is_empty())
    }
}

/// Selection rule for the approximate bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApproximateStrategy {
    /// The first non-zero offset (+1) always fills the bucket, even when no
    /// version shipped that day; later offsets are never consulted.
    #[default]
    FirstOffset,
    /// The first non-zero offset with at least one release fills the bucket,
    /// falling back to an empty +1 entry.
    FirstNonEmpty,
}

/// Correlate an observed date with the version table
pub fn check_date(table: &VersionTable, date: NaiveDate) -> DateMatches {
    check_date_with(table, date, ApproximateStrategy::default())
}

/// Correlate an observed date with the version table using `strategy`
pub fn check_date_with(
    table: &VersionTable,
    date: NaiveDate,
    strategy: ApproximateStrategy,
) -> DateMatches {
    let mut exact: Option<MatchResult> = None;
    let mut approximate: Option<MatchResult> = None;

    for offset in DAY_OFFSETS {
        let Some(nearby_date) = shift(date, offset) else {
            continue;
        };
        let precision = Precision::of_offset(offset);
        let slot = match precision {
            Precision::Exact => &mut exact,
            Precision::Approximate => &mut approximate,
        };

        let replaceable = match (slot.as_ref(), strategy) {
            (None, _) => true,
            (Some(current), ApproximateStrategy::FirstNonEmpty) => current.is_empty(),
            (Some(_), ApproximateStrategy::FirstOffset) => false,
        };
        if !replaceable {
            continue;
        }

        let matched_versions = table.versions_released_on(nearby_date);
        if slot.is_none() || !matched_versions.is_empty() {
            *slot = Some(MatchResult {
                precision,
                reference_date: nearby_date,
                matched_versions,
            });
        }
    }

    DateMatches {
        exact: exact.unwrap_or_else(|| empty_match(Precision::Exact, date)),
        approximate: approximate.unwrap_or_else(|| empty_match(Precision::Approximate, date)),
    }
}

fn shift(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

// Only reachable at the edges of the representable date range
fn empty_match(precision: Precision, reference_date: NaiveDate) -> MatchResult {
    MatchResult {
        precision,
        reference_date,
        matched_versions: Vec::new(),
    }
}
