// src/simulation/mod.rs

//! Simulates the execution of `qsearch::circuits::Circuit` on a classical
//! state-vector engine. This module contains the `Simulator` entry point
//! and the internal `SimulationEngine` responsible for evolving the state,
//! plus the measurement-sampling step that turns the final distribution
//! into counts.

mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::MeasurementResult;

use crate::circuits::Circuit;
use crate::core::{QsearchError, StateVector};
use crate::validation::{check_normalization, check_shot_count};
use engine::SimulationEngine;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::collections::HashMap;

/// The main simulator orchestrating the execution of circuits.
///
/// Holds no state across calls: every run validates its circuit, owns a
/// fresh state vector for the duration of the run, and discards it on
/// completion. With a fixed seed ([`Simulator::with_seed`]) results are
/// exactly reproducible; without one, each run draws fresh OS entropy and
/// outcomes converge to the analytic probabilities as the shot count grows.
#[derive(Debug, Default, Clone, Copy)]
pub struct Simulator {
    /// Optional fixed seed for the sampling RNG.
    seed: Option<u64>,
}

impl Simulator {
    /// Creates a simulator sampling from OS entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator whose measurement sampling is driven by a fixed
    /// seed, making runs exactly reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Runs a simulation of the provided circuit and samples `shots`
    /// measurement outcomes.
    ///
    /// The pipeline: structural validation (fail-fast, before any gate is
    /// applied), in-order gate application, the probability-sum drift check,
    /// marginalization onto the measured qubits, and an independent
    /// multinomial draw per shot.
    ///
    /// # Arguments
    /// * `circuit` - The [`Circuit`] definition to simulate.
    /// * `shots` - Number of measurement samples to draw (must be positive).
    ///
    /// # Returns
    /// * `Ok(MeasurementResult)` mapping measured bitstrings to counts.
    /// * `Err(QsearchError)` for malformed circuits, a zero shot count, or
    ///   a normalization failure (which indicates a kernel bug).
    pub fn run(&self, circuit: &Circuit, shots: u64) -> Result<MeasurementResult, QsearchError> {
        check_shot_count(shots)?;
        let state = self.statevector(circuit)?;
        let marginal = marginal_distribution(&state, circuit);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let counts = sample_counts(&marginal, circuit.num_clbits(), shots, &mut rng);
        Ok(MeasurementResult::from_counts(counts, shots))
    }

    /// Runs the circuit's operations and returns the final pre-measurement
    /// state vector, for callers that want analytic probabilities instead
    /// of sampled counts.
    ///
    /// # Errors
    /// Same validation and drift failures as [`Simulator::run`].
    pub fn statevector(&self, circuit: &Circuit) -> Result<StateVector, QsearchError> {
        circuit.validate()?;
        let mut engine = SimulationEngine::init(circuit.num_qubits())?;
        for op in circuit.operations() {
            engine.apply_operation(op)?;
        }
        check_normalization(engine.state(), None)?;
        Ok(engine.into_state())
    }
}

/// Collapses the full `2^n` distribution onto the measured qubits: basis
/// states agreeing on every measured bit pool their probability into the
/// same classical outcome, which marginalizes out the unmeasured qubits.
fn marginal_distribution(state: &StateVector, circuit: &Circuit) -> Vec<f64> {
    let mut marginal = vec![0.0; 1 << circuit.num_clbits()];
    for (index, probability) in state.probabilities().into_iter().enumerate() {
        let mut outcome = 0usize;
        for &(qubit, clbit) in circuit.measurements() {
            if (index >> qubit) & 1 == 1 {
                outcome |= 1 << clbit;
            }
        }
        marginal[outcome] += probability;
    }
    marginal
}

/// Draws `shots` independent samples from the marginal distribution and
/// accumulates them into bitstring counts (most-significant classical bit
/// first).
fn sample_counts(
    marginal: &[f64],
    num_clbits: usize,
    shots: u64,
    rng: &mut StdRng,
) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for _ in 0..shots {
        let sample: f64 = rng.random();
        let mut cumulative = 0.0;
        let mut chosen = None;
        let mut last_nonzero = 0usize;
        for (outcome, probability) in marginal.iter().enumerate() {
            if *probability > 0.0 {
                last_nonzero = outcome;
            }
            cumulative += probability;
            if sample < cumulative {
                chosen = Some(outcome);
                break;
            }
        }
        // Floating-point fallback: cumulative may top out fractionally
        // below 1, in which case the draw lands on the last live outcome.
        let outcome = chosen.unwrap_or(last_nonzero);
        let bitstring = format!("{:0width$b}", outcome, width = num_clbits);
        *counts.entry(bitstring).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;

    #[test]
    fn basis_state_measures_deterministically() -> Result<(), QsearchError> {
        let circuit = CircuitBuilder::new(1, 1).x(0).measure(0, 0).build();
        let result = Simulator::new().run(&circuit, 256)?;
        assert_eq!(result.count("1"), 256);
        assert_eq!(result.count("0"), 0);
        Ok(())
    }

    #[test]
    fn unmeasured_qubits_are_marginalized_out() -> Result<(), QsearchError> {
        // q1 is flipped but never measured; the single classical bit tracks
        // q0's superposition only.
        let circuit = CircuitBuilder::new(2, 1)
            .h(0)
            .x(1)
            .measure(0, 0)
            .build();
        let result = Simulator::with_seed(7).run(&circuit, 1024)?;
        assert_eq!(result.count("0") + result.count("1"), 1024);
        assert!(result.frequency("0") > 0.4 && result.frequency("0") < 0.6);
        Ok(())
    }

    #[test]
    fn classical_bit_mapping_orders_the_bitstring() -> Result<(), QsearchError> {
        // q0 is |1> and lands in classical bit 1, the most significant of
        // two, so the reported bitstring is "10".
        let circuit = CircuitBuilder::new(2, 2)
            .x(0)
            .measure(0, 1)
            .measure(1, 0)
            .build();
        let result = Simulator::new().run(&circuit, 64)?;
        assert_eq!(result.count("10"), 64);
        Ok(())
    }

    #[test]
    fn fixed_seed_reproduces_counts_exactly() -> Result<(), QsearchError> {
        let circuit = CircuitBuilder::new(2, 2)
            .h(0)
            .cx(0, 1)
            .measure_all()
            .build();
        let first = Simulator::with_seed(42).run(&circuit, 1024)?;
        let second = Simulator::with_seed(42).run(&circuit, 1024)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn zero_shots_is_a_sampling_error() {
        let circuit = CircuitBuilder::new(1, 1).measure(0, 0).build();
        let err = Simulator::new().run(&circuit, 0).unwrap_err();
        assert!(matches!(err, QsearchError::Sampling { .. }));
    }

    #[test]
    fn malformed_circuit_fails_before_simulation() {
        let circuit = CircuitBuilder::new(1, 1).h(5).measure(0, 0).build();
        let err = Simulator::new().run(&circuit, 16).unwrap_err();
        assert!(matches!(err, QsearchError::Configuration { .. }));
    }
}
