// src/grover/mod.rs

//! Grover amplitude amplification: oracle construction, the
//! inversion-about-mean diffuser, and the engine that assembles and runs
//! the full search circuit.

mod oracle;

pub use oracle::Oracle;

use crate::circuits::Circuit;
use crate::core::QsearchError;
use crate::operations::Operation;
use crate::simulation::{MeasurementResult, Simulator};
use std::f64::consts::PI;

/// Emits the diffuser (inversion about the mean) over search qubits
/// `0..num_search_qubits`.
///
/// Layer structure: Hadamard on every search qubit, Pauli-X on every search
/// qubit, then a multi-controlled phase flip on the all-ones state — built
/// as a Hadamard sandwich around a multi-controlled X targeting the last
/// search qubit, conditioned on all the others — and finally the X and
/// Hadamard layers undone. Net effect: every amplitude is reflected about
/// the mean, amplifying whatever the oracle marked.
///
/// # Panics
/// Panics if `num_search_qubits` is zero; the engine rejects zero-width
/// search registers before this is reached.
pub fn diffuser(num_search_qubits: usize) -> Vec<Operation> {
    let k = num_search_qubits;
    let last = k - 1;
    let mut ops = Vec::with_capacity(4 * k + 3);

    for qubit in 0..k {
        ops.push(Operation::Hadamard { target: qubit });
    }
    for qubit in 0..k {
        ops.push(Operation::PauliX { target: qubit });
    }
    ops.push(Operation::Hadamard { target: last });
    ops.push(Operation::MultiControlledX {
        controls: (0..last).collect(),
        target: last,
    });
    ops.push(Operation::Hadamard { target: last });
    for qubit in 0..k {
        ops.push(Operation::PauliX { target: qubit });
    }
    for qubit in 0..k {
        ops.push(Operation::Hadamard { target: qubit });
    }
    ops
}

/// The optimal Grover iteration count `round(pi/4 * sqrt(2^k))` for a
/// single marked state in a `k`-qubit search space.
///
/// Iterating past this overshoots the rotation and *lowers* the target's
/// probability; the non-monotonic curve is a property tests pin down.
pub fn optimal_iterations(num_search_qubits: usize) -> usize {
    let space = (1usize << num_search_qubits) as f64;
    (PI / 4.0 * space.sqrt()).round() as usize
}

/// Orchestrates a Grover search: uniform superposition over the search
/// register, the computed optimal number of oracle+diffuser rounds, and a
/// sampled measurement of the search qubits (the ancilla is excluded from
/// the classical output).
#[derive(Debug, Default, Clone, Copy)]
pub struct GroverEngine {
    simulator: Simulator,
}

impl GroverEngine {
    /// Creates an engine sampling from OS entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a fixed sampling seed for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            simulator: Simulator::with_seed(seed),
        }
    }

    /// Runs the search for `target_pattern` over `num_search_qubits` search
    /// qubits, drawing `shots` measurement samples from the final state.
    ///
    /// The amplified outcome dominates the returned distribution at the
    /// optimal iteration count, but residual mass on non-target states is
    /// real and reported as-is.
    ///
    /// # Errors
    /// [`QsearchError::Configuration`] for a zero-width search register, a
    /// malformed pattern, or a pattern whose length differs from
    /// `num_search_qubits`; [`QsearchError::Sampling`] for zero shots.
    pub fn search(
        &self,
        target_pattern: &str,
        num_search_qubits: usize,
        shots: u64,
    ) -> Result<MeasurementResult, QsearchError> {
        if num_search_qubits == 0 {
            return Err(QsearchError::configuration(
                "Grover search requires at least one search qubit",
            ));
        }
        let oracle = Oracle::from_pattern(target_pattern)?;
        if oracle.num_search_qubits() != num_search_qubits {
            return Err(QsearchError::configuration(format!(
                "target pattern {:?} is {} bits but {} search qubits were requested",
                target_pattern,
                oracle.num_search_qubits(),
                num_search_qubits
            )));
        }
        let circuit = assemble(&oracle, optimal_iterations(num_search_qubits));
        self.simulator.run(&circuit, shots)
    }

    /// Builds the search circuit with an explicit iteration count instead
    /// of the optimum. Zero iterations is legal and leaves the search
    /// register in its uniform superposition.
    pub fn build_circuit(target_pattern: &str, iterations: usize) -> Result<Circuit, QsearchError> {
        let oracle = Oracle::from_pattern(target_pattern)?;
        Ok(assemble(&oracle, iterations))
    }
}

/// Lays out the full search circuit: `k` search qubits plus the ancilla at
/// index `k`, prepared in `|->` by X then Hadamard; Hadamard across the
/// search register; `iterations` oracle+diffuser rounds; measurement of
/// qubit `i` into classical bit `i` for the search register only.
fn assemble(oracle: &Oracle, iterations: usize) -> Circuit {
    let k = oracle.num_search_qubits();
    let ancilla = k;
    let mut circuit = Circuit::new(k + 1, k);

    circuit.add_operation(Operation::PauliX { target: ancilla });
    circuit.add_operation(Operation::Hadamard { target: ancilla });
    for qubit in 0..k {
        circuit.add_operation(Operation::Hadamard { target: qubit });
    }

    for _ in 0..iterations {
        circuit.add_operations(oracle.operations());
        circuit.add_operations(diffuser(k));
    }

    for qubit in 0..k {
        circuit.add_measurement(qubit, qubit);
    }
    circuit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diffuser_layers_are_balanced() {
        let ops = diffuser(3);
        let hadamards = ops
            .iter()
            .filter(|op| matches!(op, Operation::Hadamard { .. }))
            .count();
        let flips = ops
            .iter()
            .filter(|op| matches!(op, Operation::PauliX { .. }))
            .count();
        // 2 full H layers + the sandwich, 2 full X layers.
        assert_eq!(hadamards, 8);
        assert_eq!(flips, 6);
    }

    #[test]
    fn search_rejects_zero_search_qubits() {
        let err = GroverEngine::new().search("", 0, 64).unwrap_err();
        assert!(matches!(err, QsearchError::Configuration { .. }));
    }

    #[test]
    fn search_rejects_pattern_length_mismatch() {
        let err = GroverEngine::new().search("101", 4, 64).unwrap_err();
        assert!(matches!(err, QsearchError::Configuration { .. }));
    }

    #[test]
    fn assembled_circuit_measures_search_register_only() {
        let circuit = GroverEngine::build_circuit("1011", 3).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 4);
        assert_eq!(circuit.measurements().len(), 4);
        assert!(circuit.measurements().iter().all(|&(qubit, _)| qubit < 4));
        assert!(circuit.validate().is_ok());
    }
}
