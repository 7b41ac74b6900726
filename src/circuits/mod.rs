// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! operations (`qsearch::operations::Operation`).
//!
//! A [`Circuit`] owns a fixed-size qubit register, a classical register for
//! measurement outcomes, the ordered operation list, and the mapping from
//! measured qubits to classical bit positions. Construction is most
//! convenient through [`CircuitBuilder`], which offers one method per gate.

use crate::core::QsearchError;
use crate::operations::Operation;
use std::fmt;

/// An ordered sequence of operations over `num_qubits` qubits, together
/// with a mapping from measured qubits to `num_clbits` classical bits.
///
/// The operation order is the execution order; the simulator replays it
/// verbatim. Structural invariants (indices in range, classical bits
/// unique) are enforced by [`Circuit::validate`], which the simulator runs
/// before any gate is applied, so malformed circuits fail fast rather than
/// partway through a run.
#[derive(Clone, PartialEq)] // PartialEq useful for testing circuits
pub struct Circuit {
    /// Size of the qubit register.
    num_qubits: usize,
    /// Size of the classical register receiving measurement outcomes.
    num_clbits: usize,
    /// The ordered sequence of operations defining the circuit's logic.
    operations: Vec<Operation>,
    /// Measurement mapping: `(qubit, classical bit)` pairs.
    measurements: Vec<(usize, usize)>,
}

impl Circuit {
    /// Creates an empty circuit over `num_qubits` qubits and `num_clbits`
    /// classical bits.
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            num_qubits,
            num_clbits,
            operations: Vec::new(),
            measurements: Vec::new(),
        }
    }

    /// Appends a single operation to the end of the circuit's sequence.
    pub fn add_operation(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Appends multiple operations from an iterator, preserving their order.
    ///
    /// This is also the splice point for composed sub-circuits: the Grover
    /// oracle and diffuser are built as `Vec<Operation>` and concatenated
    /// into the surrounding circuit here.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// Declares that `qubit` is measured into classical bit `clbit`.
    pub fn add_measurement(&mut self, qubit: usize, clbit: usize) {
        self.measurements.push((qubit, clbit));
    }

    /// Size of the qubit register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Size of the classical register.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    /// The ordered operation sequence.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The `(qubit, classical bit)` measurement mapping.
    pub fn measurements(&self) -> &[(usize, usize)] {
        &self.measurements
    }

    /// Total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Checks the circuit's structural invariants.
    ///
    /// Verifies that every operation's qubit indices are below
    /// `num_qubits`, that controlled gates do not reuse a qubit as both
    /// control and target, and that the measurement mapping addresses
    /// in-range qubits and pairwise-distinct classical bits. The simulator
    /// calls this before touching the state vector.
    ///
    /// # Errors
    /// Returns [`QsearchError::Configuration`] describing the first
    /// violation found.
    pub fn validate(&self) -> Result<(), QsearchError> {
        if self.num_qubits == 0 {
            return Err(QsearchError::configuration(
                "circuit must have at least one qubit",
            ));
        }

        for (pos, op) in self.operations.iter().enumerate() {
            for qubit in op.involved_qubits() {
                if qubit >= self.num_qubits {
                    return Err(QsearchError::configuration(format!(
                        "operation {} references qubit {} but the register has {} qubits",
                        pos, qubit, self.num_qubits
                    )));
                }
            }
            match op {
                Operation::ControlledX { control, target } if control == target => {
                    return Err(QsearchError::configuration(format!(
                        "operation {}: control and target qubits must differ",
                        pos
                    )));
                }
                Operation::MultiControlledX { controls, target } => {
                    for (i, c) in controls.iter().enumerate() {
                        if c == target {
                            return Err(QsearchError::configuration(format!(
                                "operation {}: qubit {} is both control and target",
                                pos, c
                            )));
                        }
                        if controls[..i].contains(c) {
                            return Err(QsearchError::configuration(format!(
                                "operation {}: duplicate control qubit {}",
                                pos, c
                            )));
                        }
                    }
                }
                _ => {}
            }
        }

        for (i, &(qubit, clbit)) in self.measurements.iter().enumerate() {
            if qubit >= self.num_qubits {
                return Err(QsearchError::configuration(format!(
                    "measurement of qubit {} is out of range for a {}-qubit register",
                    qubit, self.num_qubits
                )));
            }
            if clbit >= self.num_clbits {
                return Err(QsearchError::configuration(format!(
                    "classical bit {} is out of range for {} classical bits",
                    clbit, self.num_clbits
                )));
            }
            for &(prev_qubit, prev_clbit) in &self.measurements[..i] {
                if prev_clbit == clbit {
                    return Err(QsearchError::configuration(format!(
                        "classical bit {} is written by both qubit {} and qubit {}",
                        clbit, prev_qubit, qubit
                    )));
                }
                if prev_qubit == qubit {
                    return Err(QsearchError::configuration(format!(
                        "qubit {} is measured into both classical bit {} and classical bit {}",
                        qubit, prev_clbit, clbit
                    )));
                }
            }
        }

        Ok(())
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing [`Circuit`] instances
/// using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a builder for a circuit over `num_qubits` qubits and
    /// `num_clbits` classical bits.
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits, num_clbits),
        }
    }

    /// Adds a single operation to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Hadamard on `target`.
    pub fn h(self, target: usize) -> Self {
        self.add_op(Operation::Hadamard { target })
    }

    /// Pauli-X on `target`.
    pub fn x(self, target: usize) -> Self {
        self.add_op(Operation::PauliX { target })
    }

    /// Pauli-Z on `target`.
    pub fn z(self, target: usize) -> Self {
        self.add_op(Operation::PauliZ { target })
    }

    /// Controlled-NOT with the given control and target.
    pub fn cx(self, control: usize, target: usize) -> Self {
        self.add_op(Operation::ControlledX { control, target })
    }

    /// Multi-controlled X: flips `target` when every control reads 1.
    pub fn mcx(self, controls: Vec<usize>, target: usize) -> Self {
        self.add_op(Operation::MultiControlledX { controls, target })
    }

    /// Z rotation by `theta` radians on `target`.
    pub fn rz(self, theta: f64, target: usize) -> Self {
        self.add_op(Operation::RotationZ { target, theta })
    }

    /// Visual barrier across the register.
    pub fn barrier(self) -> Self {
        self.add_op(Operation::Barrier)
    }

    /// Measures `qubit` into classical bit `clbit`.
    pub fn measure(mut self, qubit: usize, clbit: usize) -> Self {
        self.circuit.add_measurement(qubit, clbit);
        self
    }

    /// Measures qubit `i` into classical bit `i` for the whole register.
    /// The classical register must be at least as wide as the qubit
    /// register for the resulting circuit to validate.
    pub fn measure_all(mut self) -> Self {
        for qubit in 0..self.circuit.num_qubits() {
            self.circuit.add_measurement(qubit, qubit);
        }
        self
    }

    /// Finalizes the construction process and returns the built [`Circuit`].
    /// Structural validation is deferred to the simulator (or an explicit
    /// [`Circuit::validate`] call), keeping the builder chain infallible.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "qsearch::Circuit[{} operations on {} qubits, {} classical bits]",
            self.operations.len(),
            self.num_qubits,
            self.num_clbits
        )?;
        if self.operations.is_empty() && self.measurements.is_empty() {
            return Ok(());
        }

        // --- Setup ---
        let ops = &self.operations;
        let num_ops = ops.len();
        let num_qubits = self.num_qubits;

        let max_label_width = format!("q{}", num_qubits.saturating_sub(1)).len();
        let label_padding = " ".repeat(max_label_width + 2); // Label + ": "

        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const WIRE: &str = "───────"; // GATE_WIDTH dashes
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // op_grid[row][time] stores the gate/wire segment string
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];
        // v_connect[row][time] stores the vertical connector char below this row
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        // Helper to center a gate symbol within the wire segment
        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre_dashes = total_dashes / 2;
                let post_dashes = total_dashes - pre_dashes;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre_dashes),
                    symbol,
                    H_WIRE.to_string().repeat(post_dashes)
                )
            }
        }

        // --- Populate Grids ---
        // Out-of-range indices (possible on a not-yet-validated circuit)
        // simply leave their column as bare wire.
        for (t, op) in ops.iter().enumerate() {
            match op {
                Operation::Hadamard { target } => {
                    if let Some(row) = op_grid.get_mut(*target) {
                        row[t] = format_gate("H");
                    }
                }
                Operation::PauliX { target } => {
                    if let Some(row) = op_grid.get_mut(*target) {
                        row[t] = format_gate("X");
                    }
                }
                Operation::PauliZ { target } => {
                    if let Some(row) = op_grid.get_mut(*target) {
                        row[t] = format_gate("Z");
                    }
                }
                Operation::RotationZ { target, .. } => {
                    if let Some(row) = op_grid.get_mut(*target) {
                        row[t] = format_gate("RZ");
                    }
                }
                Operation::ControlledX { control, target } => {
                    if *control < num_qubits && *target < num_qubits {
                        op_grid[*control][t] = format_gate("@");
                        op_grid[*target][t] = format_gate("X");
                        let r_min = (*control).min(*target);
                        let r_max = (*control).max(*target);
                        for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                            row_vec[t] = V_WIRE;
                        }
                    }
                }
                Operation::MultiControlledX { controls, target } => {
                    if *target < num_qubits && controls.iter().all(|c| *c < num_qubits) {
                        for c in controls {
                            op_grid[*c][t] = format_gate("@");
                        }
                        op_grid[*target][t] = format_gate("X");
                        let r_min = controls.iter().copied().chain([*target]).min().unwrap_or(*target);
                        let r_max = controls.iter().copied().chain([*target]).max().unwrap_or(*target);
                        for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                            row_vec[t] = V_WIRE;
                        }
                    }
                }
                Operation::Barrier => {
                    for row in op_grid.iter_mut() {
                        row[t] = format_gate("░");
                    }
                }
            }
        }

        // --- Format Output String ---
        for r in 0..num_qubits {
            let label = format!("q{}: ", r);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let connector = v_connect[r][t];
                    let padding_needed = GATE_WIDTH.saturating_sub(1);
                    let pre_pad = padding_needed / 2;
                    let post_pad = padding_needed - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), connector, " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
        }

        if !self.measurements.is_empty() {
            let pairs: Vec<String> = self
                .measurements
                .iter()
                .map(|(q, c)| format!("q{} => c{}", q, c))
                .collect();
            writeln!(f, "meas: {}", pairs.join(", "))?;
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
