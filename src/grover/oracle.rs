// src/grover/oracle.rs

//! Phase-flip oracle construction for amplitude amplification.

use crate::core::QsearchError;
use crate::operations::Operation;

/// The phase-flip oracle for one target bit pattern.
///
/// The oracle acts on `k` search qubits (indices `0..k`) plus one ancilla
/// (index `k`) that the surrounding circuit has prepared in the `|->`
/// state. Construction follows the phase-kickback recipe:
///
/// 1. Pauli-X on every search qubit whose target bit is 0, so the target
///    pattern becomes all-ones.
/// 2. Multi-controlled X with all `k` search qubits as controls and the
///    ancilla as target — because the ancilla is the `-1` eigenstate of X,
///    exactly the target pattern picks up a `-1` phase.
/// 3. The step-1 X layer again, restoring qubit meaning.
///
/// The X layers cancel and the multi-controlled X is self-inverse, so
/// applying the oracle twice restores the register exactly. Tests rely on
/// that invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Oracle {
    /// Required value of each search qubit; index `i` is qubit `i`.
    pattern_bits: Vec<bool>,
}

impl Oracle {
    /// Parses a target bitstring into an oracle.
    ///
    /// The pattern is read as a binary numeral: its leftmost character is
    /// the highest search qubit. Measured with the engine's qubit-`i`-to-
    /// classical-bit-`i` mapping, the amplified outcome therefore prints
    /// exactly as the pattern was written.
    ///
    /// # Errors
    /// [`QsearchError::Configuration`] if the pattern is empty or contains
    /// characters other than `0` and `1`.
    pub fn from_pattern(pattern: &str) -> Result<Self, QsearchError> {
        if pattern.is_empty() {
            return Err(QsearchError::configuration(
                "target pattern must name at least one search qubit",
            ));
        }
        let mut pattern_bits = Vec::with_capacity(pattern.len());
        for ch in pattern.chars().rev() {
            match ch {
                '0' => pattern_bits.push(false),
                '1' => pattern_bits.push(true),
                other => {
                    return Err(QsearchError::configuration(format!(
                        "target pattern may contain only '0' and '1', found {:?}",
                        other
                    )));
                }
            }
        }
        Ok(Self { pattern_bits })
    }

    /// Number of search qubits the oracle matches against.
    pub fn num_search_qubits(&self) -> usize {
        self.pattern_bits.len()
    }

    /// The target pattern, most significant search qubit first.
    pub fn pattern(&self) -> String {
        self.pattern_bits
            .iter()
            .rev()
            .map(|bit| if *bit { '1' } else { '0' })
            .collect()
    }

    /// Emits the oracle's operation sequence, ready to be spliced into a
    /// circuit of `num_search_qubits() + 1` qubits (ancilla last).
    pub fn operations(&self) -> Vec<Operation> {
        let k = self.pattern_bits.len();
        let ancilla = k;
        let mut ops = Vec::with_capacity(2 * k + 1);

        for (qubit, bit) in self.pattern_bits.iter().enumerate() {
            if !bit {
                ops.push(Operation::PauliX { target: qubit });
            }
        }
        ops.push(Operation::MultiControlledX {
            controls: (0..k).collect(),
            target: ancilla,
        });
        for (qubit, bit) in self.pattern_bits.iter().enumerate() {
            if !bit {
                ops.push(Operation::PauliX { target: qubit });
            }
        }
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_round_trips() {
        let oracle = Oracle::from_pattern("1011").unwrap();
        assert_eq!(oracle.num_search_qubits(), 4);
        assert_eq!(oracle.pattern(), "1011");
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let err = Oracle::from_pattern("").unwrap_err();
        assert!(matches!(err, QsearchError::Configuration { .. }));
    }

    #[test]
    fn non_binary_pattern_is_rejected() {
        assert!(Oracle::from_pattern("10x1").is_err());
    }

    #[test]
    fn zero_bits_get_flip_layers() {
        // "10" => qubit 0 requires 0 (flanked by X), qubit 1 requires 1.
        let ops = Oracle::from_pattern("10").unwrap().operations();
        assert_eq!(
            ops,
            vec![
                Operation::PauliX { target: 0 },
                Operation::MultiControlledX { controls: vec![0, 1], target: 2 },
                Operation::PauliX { target: 0 },
            ]
        );
    }

    #[test]
    fn all_ones_pattern_needs_no_flips() {
        let ops = Oracle::from_pattern("11").unwrap().operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(ops[0], Operation::MultiControlledX { .. }));
    }
}
