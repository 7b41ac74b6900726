// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// The complex amplitude vector describing a register of qubits.
///
/// A register of `n` qubits is represented by `2^n` amplitudes, indexed by
/// the integer value of the qubit bitstring: bit `i` of a basis index is the
/// value of qubit `i`. The vector starts in the all-zero basis state
/// (amplitude 1 at index 0) and is mutated in place by each gate
/// application; after a run it is discarded.
///
/// Invariant: the sum of squared magnitudes stays 1 within floating-point
/// tolerance after every operation, because every supported gate is unitary.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    /// Amplitudes over the `2^n` basis states.
    amplitudes: Vec<Complex<f64>>,
    /// Number of qubits `n` the vector spans.
    num_qubits: usize,
}

impl StateVector {
    /// Creates the `|0...0>` state over `num_qubits` qubits.
    ///
    /// The dimension is `2^num_qubits`; callers guard against register sizes
    /// whose dimension would overflow before constructing the vector.
    pub(crate) fn zero_state(num_qubits: usize, dim: usize) -> Self {
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Self { amplitudes, num_qubits }
    }

    /// Builds a state directly from an amplitude vector. Test scaffolding;
    /// the caller is responsible for normalization.
    #[cfg(test)]
    pub(crate) fn from_amplitudes(amplitudes: Vec<Complex<f64>>, num_qubits: usize) -> Self {
        debug_assert_eq!(amplitudes.len(), 1 << num_qubits);
        Self { amplitudes, num_qubits }
    }

    /// Number of qubits the vector spans.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state vector (`2^n`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Mutable access for the gate kernels.
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Squared magnitude of each amplitude, i.e. the probability of each
    /// basis state under measurement in the computational basis.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Sum of squared magnitudes. Exactly 1.0 for a normalized state, up to
    /// floating-point error accumulated by the gate pipeline.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateVector[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
