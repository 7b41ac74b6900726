// src/lib.rs

//! `qsearch` - state-vector quantum circuit simulation with Grover
//! amplitude amplification
//!
//! This library represents a circuit as an ordered sequence of unitary
//! operations over a register of qubits, applies those operations to a
//! complex state vector, samples measurement outcomes from the resulting
//! distribution, and builds Grover oracle-plus-diffuser searches with the
//! provably optimal iteration count. A classical linear-scan baseline is
//! included as an honest timing comparator.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod grover;
pub mod baseline;

// Re-export the most common types for easier top-level use
pub use core::{QsearchError, StateVector};
pub use operations::Operation;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{MeasurementResult, Simulator};
pub use grover::{diffuser, optimal_iterations, GroverEngine, Oracle};
pub use baseline::{scan, synthetic_database, ScanReport};

// Example 1: Bell pair
// Demonstrates preparing and sampling an entangled two-qubit state; only
// the correlated outcomes ever occur.
/// ```
/// use qsearch::{CircuitBuilder, Simulator};
///
/// let circuit = CircuitBuilder::new(2, 2)
///     .h(0)
///     .cx(0, 1)
///     .measure_all()
///     .build();
///
/// let result = Simulator::with_seed(7).run(&circuit, 1024).unwrap();
///
/// // The marginal probability of the anti-correlated outcomes is exactly
/// // zero, so every shot lands on "00" or "11".
/// assert_eq!(result.count("00") + result.count("11"), 1024);
/// assert_eq!(result.count("01"), 0);
/// assert_eq!(result.count("10"), 0);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Grover search
// Demonstrates a four-qubit search whose amplified target dominates the
// sampled distribution at the optimal iteration count.
/// ```
/// use qsearch::{optimal_iterations, GroverEngine};
///
/// // 16-state space: the optimum is round(pi/4 * 4) = 3 rounds.
/// assert_eq!(optimal_iterations(4), 3);
///
/// let result = GroverEngine::with_seed(11)
///     .search("1011", 4, 1024)
///     .unwrap();
///
/// let (winner, _) = result.most_frequent().unwrap();
/// assert_eq!(winner, "1011");
/// assert!(result.frequency("1011") > 0.7);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
