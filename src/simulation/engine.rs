// src/simulation/engine.rs

use crate::core::{QsearchError, StateVector};
use crate::operations::Operation;
use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

/// The core simulation engine: owns the run's state vector and applies one
/// operation at a time, in place. (Internal visibility — the public entry
/// point is [`Simulator`](crate::simulation::Simulator).)
///
/// Basis convention: bit `i` of a basis-state index is the value of qubit
/// `i`, so every kernel works with the mask `1 << qubit`. Each kernel
/// visits the amplitude pairs (or diagonal entries) its unitary touches and
/// leaves every other amplitude untouched, which is what keeps the register
/// normalized across the run.
pub(crate) struct SimulationEngine {
    /// The global state of the full register.
    state: StateVector,
    /// Number of qubits being simulated.
    num_qubits: usize,
}

impl SimulationEngine {
    /// Initializes the engine for a register of `num_qubits` qubits in the
    /// `|0...0>` state.
    pub(crate) fn init(num_qubits: usize) -> Result<Self, QsearchError> {
        if num_qubits == 0 {
            return Err(QsearchError::configuration(
                "cannot initialize a simulation engine with zero qubits",
            ));
        }
        let dim = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or_else(|| {
                QsearchError::configuration(format!(
                    "register of {} qubits overflows the state-vector dimension",
                    num_qubits
                ))
            })?;
        Ok(Self {
            state: StateVector::zero_state(num_qubits, dim),
            num_qubits,
        })
    }

    /// Read-only access to the current state.
    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    /// Consumes the engine, yielding the final state of the run.
    pub(crate) fn into_state(self) -> StateVector {
        self.state
    }

    /// Replaces the state directly. Test scaffolding only.
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) {
        assert_eq!(state.dim(), self.state.dim(), "state dimension mismatch");
        self.state = state;
    }

    /// Applies a single operation to the global state.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), QsearchError> {
        match op {
            Operation::Hadamard { target } => self.apply_hadamard(*target),
            Operation::PauliX { target } => self.apply_pauli_x(*target),
            Operation::PauliZ { target } => self.apply_pauli_z(*target),
            Operation::ControlledX { control, target } => {
                self.apply_controlled_x(*control, *target)
            }
            Operation::MultiControlledX { controls, target } => {
                self.apply_multi_controlled_x(controls, *target)
            }
            Operation::RotationZ { target, theta } => self.apply_rotation_z(*target, *theta),
            // Ordering/visual marker only; the state is untouched.
            Operation::Barrier => Ok(()),
        }
    }

    /// Bounds check shared by every kernel. Circuit validation rejects
    /// out-of-range indices before a run starts; this guards direct engine
    /// use (tests, future callers) the same way.
    fn check_qubit(&self, qubit: usize) -> Result<(), QsearchError> {
        if qubit >= self.num_qubits {
            Err(QsearchError::configuration(format!(
                "qubit {} is out of range for a {}-qubit register",
                qubit, self.num_qubits
            )))
        } else {
            Ok(())
        }
    }

    /// Hadamard on `target`: for every index pair differing only in the
    /// target bit, `(a0, a1) -> ((a0+a1)/sqrt(2), (a0-a1)/sqrt(2))`.
    pub(crate) fn apply_hadamard(&mut self, target: usize) -> Result<(), QsearchError> {
        self.check_qubit(target)?;
        let mask = 1 << target;
        let amps = self.state.amplitudes_mut();
        for i in 0..amps.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = amps[i];
                let b = amps[j];
                amps[i] = (a + b) * FRAC_1_SQRT_2;
                amps[j] = (a - b) * FRAC_1_SQRT_2;
            }
        }
        Ok(())
    }

    /// Pauli-X on `target`: swaps the amplitudes of every index pair
    /// differing only in the target bit.
    pub(crate) fn apply_pauli_x(&mut self, target: usize) -> Result<(), QsearchError> {
        self.check_qubit(target)?;
        let mask = 1 << target;
        let amps = self.state.amplitudes_mut();
        for i in 0..amps.len() {
            if i & mask == 0 {
                amps.swap(i, i | mask);
            }
        }
        Ok(())
    }

    /// Pauli-Z on `target`: negates every amplitude whose target bit is 1.
    pub(crate) fn apply_pauli_z(&mut self, target: usize) -> Result<(), QsearchError> {
        self.check_qubit(target)?;
        let mask = 1 << target;
        let amps = self.state.amplitudes_mut();
        for (i, amp) in amps.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp = -*amp;
            }
        }
        Ok(())
    }

    /// Controlled-X: swaps the target-bit amplitude pair wherever the
    /// control bit reads 1; indices with control bit 0 pass through.
    pub(crate) fn apply_controlled_x(
        &mut self,
        control: usize,
        target: usize,
    ) -> Result<(), QsearchError> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(QsearchError::configuration(
                "control and target qubits must differ for a controlled operation",
            ));
        }
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let amps = self.state.amplitudes_mut();
        for i in 0..amps.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                amps.swap(i, i | tgt_mask);
            }
        }
        Ok(())
    }

    /// Multi-controlled X: flips the target bit's amplitude pairing only
    /// where *all* control bits read 1. An empty control set degenerates to
    /// plain Pauli-X, a singleton to Controlled-X.
    pub(crate) fn apply_multi_controlled_x(
        &mut self,
        controls: &[usize],
        target: usize,
    ) -> Result<(), QsearchError> {
        self.check_qubit(target)?;
        let mut ctrl_mask = 0usize;
        for &control in controls {
            self.check_qubit(control)?;
            if control == target {
                return Err(QsearchError::configuration(
                    "control and target qubits must differ for a controlled operation",
                ));
            }
            ctrl_mask |= 1 << control;
        }
        let tgt_mask = 1 << target;
        let amps = self.state.amplitudes_mut();
        for i in 0..amps.len() {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                amps.swap(i, i | tgt_mask);
            }
        }
        Ok(())
    }

    /// Z rotation by `theta`: multiplies amplitudes by `e^(-i*theta/2)`
    /// where the target bit is 0 and `e^(+i*theta/2)` where it is 1.
    pub(crate) fn apply_rotation_z(&mut self, target: usize, theta: f64) -> Result<(), QsearchError> {
        self.check_qubit(target)?;
        let mask = 1 << target;
        let phase_0 = Complex::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex::from_polar(1.0, theta / 2.0);
        let amps = self.state.amplitudes_mut();
        for (i, amp) in amps.iter_mut().enumerate() {
            if i & mask == 0 {
                *amp *= phase_0;
            } else {
                *amp *= phase_1;
            }
        }
        Ok(())
    }
}
