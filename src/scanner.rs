//! Scan driver: probe each static resource, correlate its dates, aggregate

use tracing::{info, warn};

use crate::correlate::{ApproximateStrategy, MatchSet, check_date_with};
use crate::date::ObservedTimestamp;
use crate::probe::{ProbeError, Prober};
use crate::table::VersionTable;

/// Outcome of a completed scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Resources requested
    pub probed: usize,
    /// Resources that answered with a non-error status
    pub responded: usize,
    /// Every date header that could be decoded, in observation order
    pub observations: Vec<ObservedTimestamp>,
    pub matches: MatchSet,
}

/// Correlates the date headers of a target's static resources with a
/// version table
pub struct Scanner<'a, P: Prober> {
    prober: P,
    table: &'a VersionTable,
    strategy: ApproximateStrategy,
}

impl<'a, P: Prober> Scanner<'a, P> {
    pub fn new(prober: P, table: &'a VersionTable) -> Self {
        Self {
            prober,
            table,
            strategy: ApproximateStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: ApproximateStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Probe `resources` one at a time, in order
    ///
    /// Stops at the first transport failure; no later resource is requested.
    pub async fn scan<S: AsRef<str>>(&self, resources: &[S]) -> Result<ScanReport, ProbeError> {
        let mut report = ScanReport::default();

        for resource in resources {
            let resource = resource.as_ref();
            report.probed += 1;

            let Some(headers) = self.prober.fetch_date_headers(resource).await? else {
                continue;
            };
            report.responded += 1;

            for (kind, raw_value) in headers.iter() {
                let observed = match ObservedTimestamp::resolve(kind, raw_value) {
                    Ok(observed) => observed,
                    Err(e) => {
                        warn!("Skipping {} of {}: {}", kind, resource, e);
                        continue;
                    }
                };

                let matches = check_date_with(self.table, observed.resolved_date, self.strategy);
                for result in report.matches.record(&matches) {
                    if result.reference_date == observed.resolved_date {
                        info!(
                            "[*] {} => {}",
                            observed.resolved_date,
                            result.matched_versions.join(",")
                        );
                    } else {
                        info!(
                            "[*] {} ~ {} => {}",
                            observed.resolved_date,
                            result.reference_date,
                            result.matched_versions.join(",")
                        );
                    }
                }
                report.observations.push(observed);
            }
        }

        Ok(report)
    }
}
