//! Aggregation of matches across probed resources

use crate::correlate::matcher::{DateMatches, MatchResult, Precision};

/// Running collection of non-empty matches, one list per precision class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    exact: Vec<MatchResult>,
    approximate: Vec<MatchResult>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the non-empty matches of one observation
    ///
    /// Returns the matches that were recorded.
    pub fn record<'a>(&mut self, matches: &'a DateMatches) -> Vec<&'a MatchResult> {
        let recorded: Vec<&MatchResult> = matches.non_empty().collect();
        for result in &recorded {
            self.bucket_mut(result.precision).push((*result).clone());
        }
        recorded
    }

    /// Every recorded match, duplicates included
    pub fn len(&self) -> usize {
        self.exact.len() + self.approximate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.approximate.is_empty()
    }

    /// Structurally distinct matches: exact ones first, each class in
    /// first-seen order
    pub fn deduplicated(&self) -> Vec<&MatchResult> {
        let mut unique: Vec<&MatchResult> = Vec::new();
        for result in self.exact.iter().chain(self.approximate.iter()) {
            if !unique.contains(&result) {
                unique.push(result);
            }
        }
        unique
    }

    fn bucket_mut(&mut self, precision: Precision) -> &mut Vec<MatchResult> {
        match precision {
            Precision::Exact => &mut self.exact,
            Precision::Approximate => &mut self.approximate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn matched(precision: Precision, reference_date: NaiveDate, versions: &[&str]) -> MatchResult {
        MatchResult {
            precision,
            reference_date,
            matched_versions: versions.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn record_skips_empty_matches() {
        let mut set = MatchSet::new();
        let matches = DateMatches {
            exact: matched(Precision::Exact, date(2023, 1, 3), &[]),
            approximate: matched(Precision::Approximate, date(2023, 1, 4), &[]),
        };

        let recorded = set.record(&matches);

        assert!(recorded.is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn deduplicated_collapses_identical_matches_from_different_resources() {
        let mut set = MatchSet::new();
        let matches = DateMatches {
            exact: matched(Precision::Exact, date(2023, 1, 1), &["A"]),
            approximate: matched(Precision::Approximate, date(2023, 1, 2), &["B"]),
        };

        set.record(&matches.clone());
        set.record(&matches);

        assert_eq!(set.len(), 4);
        assert_eq!(
            set.deduplicated(),
            vec![&matches.exact, &matches.approximate]
        );
    }

    #[test]
    fn deduplicated_keeps_matches_differing_in_any_field() {
        let mut set = MatchSet::new();
        set.record(&DateMatches {
            exact: matched(Precision::Exact, date(2023, 1, 2), &["B"]),
            approximate: matched(Precision::Approximate, date(2023, 1, 3), &[]),
        });
        set.record(&DateMatches {
            exact: matched(Precision::Exact, date(2023, 1, 1), &[]),
            approximate: matched(Precision::Approximate, date(2023, 1, 2), &["B"]),
        });
        set.record(&DateMatches {
            exact: matched(Precision::Exact, date(2023, 1, 2), &["B", "C"]),
            approximate: matched(Precision::Approximate, date(2023, 1, 3), &[]),
        });

        let lines: Vec<String> = set.deduplicated().iter().map(|m| m.to_string()).collect();

        assert_eq!(
            lines,
            vec![
                "B 2023-01-02 (exact)",
                "B,C 2023-01-02 (exact)",
                "B 2023-01-02 (approximate)",
            ]
        );
    }
}
