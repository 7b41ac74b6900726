// src/simulation/results.rs

use std::collections::HashMap;
use std::fmt;

/// Holds the sampled outcomes of one simulation run.
///
/// Keys are bitstrings over the circuit's classical register, written
/// most-significant classical bit first (character 0 is classical bit
/// `m-1`). Counts sum to the requested shot count. The result is built
/// once by the simulator and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementResult {
    /// Maps measured bitstrings to their observed counts.
    counts: HashMap<String, u64>,
    /// Total number of shots drawn.
    shots: u64,
}

impl MeasurementResult {
    /// Wraps sampled counts. (Internal visibility)
    pub(crate) fn from_counts(counts: HashMap<String, u64>, shots: u64) -> Self {
        Self { counts, shots }
    }

    /// The full bitstring-to-count mapping.
    pub fn counts(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    /// Total number of shots drawn for this result.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// Count observed for one bitstring; zero if the outcome never occurred.
    pub fn count(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Empirical frequency of one bitstring in `[0, 1]`.
    pub fn frequency(&self, bitstring: &str) -> f64 {
        self.count(bitstring) as f64 / self.shots as f64
    }

    /// The plurality outcome, with ties broken towards the smaller
    /// bitstring so the answer is deterministic.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|(key_a, count_a), (key_b, count_b)| {
                count_a.cmp(count_b).then_with(|| key_b.cmp(key_a))
            })
            .map(|(key, count)| (key.as_str(), *count))
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement Results ({} shots):", self.shots)?;
        if self.counts.is_empty() {
            writeln!(f, "  (no outcomes)")?;
        } else {
            // Sort by bitstring for consistent and readable output
            let mut sorted: Vec<_> = self.counts.iter().collect();
            sorted.sort_by_key(|(bitstring, _)| bitstring.as_str());
            for (bitstring, count) in sorted {
                writeln!(f, "  {}: {}", bitstring, count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_of(pairs: &[(&str, u64)]) -> MeasurementResult {
        let counts: HashMap<String, u64> =
            pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        let shots = pairs.iter().map(|(_, v)| v).sum();
        MeasurementResult::from_counts(counts, shots)
    }

    #[test]
    fn count_and_frequency_accessors() {
        let result = result_of(&[("00", 512), ("11", 512)]);
        assert_eq!(result.shots(), 1024);
        assert_eq!(result.count("00"), 512);
        assert_eq!(result.count("01"), 0);
        assert!((result.frequency("11") - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn most_frequent_breaks_ties_deterministically() {
        let result = result_of(&[("01", 10), ("10", 10), ("11", 3)]);
        assert_eq!(result.most_frequent(), Some(("01", 10)));
    }
}
