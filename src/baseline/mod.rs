// src/baseline/mod.rs

//! Classical linear-scan baseline used as a timing comparator for the
//! quantum search demos.
//!
//! The scan walks the full database sequentially and never stops early on
//! a match, so the elapsed figure is an honest full-scan timing rather
//! than a best-case one. Timing uses a monotonic clock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// The outcome of one full database scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Per-entry visit counts; every entry is visited exactly once.
    visits: HashMap<String, u64>,
    /// Number of entries equal to the target.
    matches: u64,
    /// Wall-clock duration of the scan, from a monotonic clock.
    elapsed: Duration,
}

impl ScanReport {
    /// Per-entry visit counts.
    pub fn visits(&self) -> &HashMap<String, u64> {
        &self.visits
    }

    /// Number of entries that matched the target.
    pub fn matches(&self) -> u64 {
        self.matches
    }

    /// Wall-clock duration of the scan.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Scans `database` sequentially for `target`, visiting every entry exactly
/// once, in order, regardless of where (or whether) the target occurs.
///
/// Returns the per-entry visit counts, the match count, and the elapsed
/// wall-clock time measured with [`Instant`].
pub fn scan(database: &[String], target: &str) -> ScanReport {
    let start = Instant::now();
    let mut visits: HashMap<String, u64> = HashMap::new();
    let mut matches = 0u64;

    for entry in database {
        *visits.entry(entry.clone()).or_insert(0) += 1;
        if entry == target {
            matches += 1;
        }
        // A match does not stop the walk; the timing baseline is the full scan.
    }

    ScanReport {
        visits,
        matches,
        elapsed: start.elapsed(),
    }
}

/// Builds the synthetic search database: every `num_bits`-wide bitstring in
/// ascending order, one entry per basis state.
pub fn synthetic_database(num_bits: usize) -> Vec<String> {
    (0..1usize << num_bits)
        .map(|value| format!("{:0width$b}", value, width = num_bits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_database_enumerates_all_patterns() {
        let db = synthetic_database(3);
        assert_eq!(db.len(), 8);
        assert_eq!(db[0], "000");
        assert_eq!(db[5], "101");
        assert_eq!(db[7], "111");
    }

    #[test]
    fn scan_visits_every_entry_exactly_once() {
        let db = synthetic_database(4);
        let report = scan(&db, "1011");
        assert_eq!(report.visits().len(), 16);
        assert!(report.visits().values().all(|&count| count == 1));
        assert_eq!(report.matches(), 1);
    }

    #[test]
    fn scan_reports_zero_matches_for_absent_target() {
        let db = synthetic_database(2);
        let report = scan(&db, "10101");
        assert_eq!(report.matches(), 0);
        assert_eq!(report.visits().values().sum::<u64>(), 4);
    }
}
