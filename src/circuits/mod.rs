// src/circuits/mod.rs

//! Defines circuit fragments: named, ordered sequences of
//! [`Operation`]s over a fixed number of wires.
//!
//! A `Circuit` is built once, by appending gates or by composing other
//! fragments into it at a wire mapping, and then handed around by value.
//! Gate order is the operator product and is never rearranged.

use crate::core::{OracleError, Result, Unitary2};
use crate::operations::Operation;
use num_complex::Complex;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// A named gate sequence over `nqubits` wires.
///
/// Analogy: `qiskit.QuantumCircuit` restricted to unitary gates.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    /// Display label, no functional effect.
    name: String,
    /// Width of the fragment; every operation stays within `0..nqubits`.
    nqubits: usize,
    /// The ordered gate list.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates an empty circuit of the given width.
    pub fn new(nqubits: usize, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nqubits,
            operations: Vec::new(),
        }
    }

    /// The display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display label.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Number of wires.
    pub fn nqubits(&self) -> usize {
        self.nqubits
    }

    /// Adds a single operation to the end of the circuit.
    ///
    /// # Errors
    /// * `WireOutOfRange` if the operation touches a wire `>= nqubits`.
    /// * `InvalidOperation` if it touches the same wire twice or a diagonal
    ///   has the wrong number of entries.
    pub fn add_operation(&mut self, op: Operation) -> Result<()> {
        self.check_operation(&op)?;
        self.operations.push(op);
        Ok(())
    }

    /// Adds multiple operations in order, stopping at the first invalid one.
    pub fn add_operations<I>(&mut self, ops: I) -> Result<()>
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op)?;
        }
        Ok(())
    }

    /// Appends Pauli-X on `target`.
    pub fn x(&mut self, target: usize) -> Result<()> {
        self.add_operation(Operation::X { target })
    }

    /// Appends Pauli-Z on `target`.
    pub fn z(&mut self, target: usize) -> Result<()> {
        self.add_operation(Operation::Z { target })
    }

    /// Appends an arbitrary single-wire unitary.
    pub fn unitary(&mut self, matrix: Unitary2, target: usize, label: impl Into<String>) -> Result<()> {
        self.add_operation(Operation::Unitary { target, matrix, label: label.into() })
    }

    /// Appends a singly-controlled unitary.
    pub fn controlled_unitary(
        &mut self,
        matrix: Unitary2,
        control: usize,
        target: usize,
        label: impl Into<String>,
    ) -> Result<()> {
        self.add_operation(Operation::ControlledUnitary { control, target, matrix, label: label.into() })
    }

    /// Appends the one-wire block `gate` controlled by `control`, labelled
    /// with the block's name.
    ///
    /// # Errors
    /// `InvalidOperation` unless `gate` is a single-wire circuit holding
    /// exactly one [`Operation::Unitary`].
    pub fn controlled(&mut self, gate: &Circuit, control: usize, target: usize) -> Result<()> {
        match (gate.nqubits, gate.operations.as_slice()) {
            (1, [Operation::Unitary { matrix, .. }]) => {
                self.controlled_unitary(*matrix, control, target, gate.name.clone())
            }
            _ => Err(OracleError::InvalidOperation {
                message: format!("Cannot control '{}': expected a single one-wire unitary", gate.name),
            }),
        }
    }

    /// Appends a controlled X-rotation by `theta`.
    pub fn crx(&mut self, theta: f64, control: usize, target: usize) -> Result<()> {
        self.add_operation(Operation::Crx { control, target, theta })
    }

    /// Appends a diagonal unitary over `wires`.
    pub fn diagonal(&mut self, phases: Vec<Complex<f64>>, wires: Vec<usize>) -> Result<()> {
        self.add_operation(Operation::Diagonal { wires, phases })
    }

    /// Splices `other` into this circuit, sending wire `i` of `other` to
    /// `wires[i]`.
    ///
    /// # Errors
    /// * `InvalidOperation` if `wires` does not have one distinct entry per
    ///   wire of `other`.
    /// * `WireOutOfRange` if a mapped wire does not exist here.
    pub fn compose(&mut self, other: &Circuit, wires: &[usize]) -> Result<()> {
        if wires.len() != other.nqubits {
            return Err(OracleError::InvalidOperation {
                message: format!(
                    "Cannot compose '{}': {} wires given for a {}-qubit fragment",
                    other.name,
                    wires.len(),
                    other.nqubits
                ),
            });
        }
        let mut seen = HashSet::with_capacity(wires.len());
        for &wire in wires {
            if wire >= self.nqubits {
                return Err(OracleError::WireOutOfRange { wire, nqubits: self.nqubits });
            }
            if !seen.insert(wire) {
                return Err(OracleError::InvalidOperation {
                    message: format!("Cannot compose '{}': wire {} mapped twice", other.name, wire),
                });
            }
        }
        // Mapping is validated, so remapped operations are in range.
        self.operations.extend(other.operations.iter().map(|op| op.remap(wires)));
        Ok(())
    }

    /// The adjoint circuit: operations reversed and individually inverted.
    pub fn inverse(&self) -> Circuit {
        Circuit {
            name: format!("{}_dg", self.name),
            nqubits: self.nqubits,
            operations: self.operations.iter().rev().map(Operation::adjoint).collect(),
        }
    }

    /// Returns the ordered operations.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Total number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of layers when every gate waits for all of its wires to be free.
    pub fn depth(&self) -> usize {
        let mut levels = vec![0usize; self.nqubits];
        for op in &self.operations {
            let wires = op.involved_wires();
            let level = wires.iter().map(|w| levels[*w]).max().unwrap_or(0) + 1;
            for w in wires {
                levels[w] = level;
            }
        }
        levels.into_iter().max().unwrap_or(0)
    }

    /// Operation counts keyed by [`Operation::kind`].
    pub fn count_ops(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for op in &self.operations {
            *counts.entry(op.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of two-wire gates.
    pub fn two_qubit_count(&self) -> usize {
        self.operations.iter().filter(|op| op.is_two_qubit()).count()
    }

    /// Cost summary of the circuit.
    pub fn metrics(&self) -> CircuitMetrics {
        CircuitMetrics {
            ops: self.len(),
            depth: self.depth(),
            two_qubit: self.two_qubit_count(),
            by_kind: self.count_ops(),
        }
    }

    fn check_operation(&self, op: &Operation) -> Result<()> {
        let wires = op.involved_wires();
        let mut seen = HashSet::with_capacity(wires.len());
        for &wire in &wires {
            if wire >= self.nqubits {
                return Err(OracleError::WireOutOfRange { wire, nqubits: self.nqubits });
            }
            if !seen.insert(wire) {
                return Err(OracleError::InvalidOperation {
                    message: format!("Operation '{}' uses wire {} more than once", op.kind(), wire),
                });
            }
        }
        if let Operation::Diagonal { wires, phases } = op {
            let expected = u32::try_from(wires.len()).ok().and_then(|n| 1usize.checked_shl(n));
            if expected != Some(phases.len()) {
                return Err(OracleError::InvalidOperation {
                    message: format!("Diagonal over {} wires needs 2^{} entries, got {}", wires.len(), wires.len(), phases.len()),
                });
            }
        }
        Ok(())
    }
}

/// Resource figures used to compare synthesis strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitMetrics {
    /// Total operations.
    pub ops: usize,
    /// Layered depth.
    pub depth: usize,
    /// Two-wire gates.
    pub two_qubit: usize,
    /// Per-kind counts.
    pub by_kind: BTreeMap<&'static str, usize>,
}

impl fmt::Display for CircuitMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ops={} depth={} two_qubit={}", self.ops, self.depth, self.two_qubit)?;
        for (kind, count) in &self.by_kind {
            write!(f, " {}={}", kind, count)?;
        }
        Ok(())
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper for constructing `Circuit` instances by method chaining.
///
/// Validation is deferred to [`CircuitBuilder::build`].
pub struct CircuitBuilder {
    nqubits: usize,
    name: String,
    operations: Vec<Operation>,
}

impl CircuitBuilder {
    /// Creates a builder for a circuit of the given width.
    pub fn new(nqubits: usize) -> Self {
        Self {
            nqubits,
            name: String::new(),
            operations: Vec::new(),
        }
    }

    /// Sets the display label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a single operation.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.operations.push(op);
        self
    }

    /// Adds multiple operations.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.operations.extend(ops);
        self
    }

    /// Validates every operation and returns the built `Circuit`.
    pub fn build(self) -> Result<Circuit> {
        let mut circuit = Circuit::new(self.nqubits, self.name);
        circuit.add_operations(self.operations)?;
        Ok(circuit)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operations.is_empty() {
            return writeln!(f, "Circuit '{}'[0 operations on {} qubits]", self.name, self.nqubits);
        }

        let ops = &self.operations;
        let num_ops = ops.len();
        let num_wires = self.nqubits;

        let labels: Vec<String> = (0..num_wires).map(|w| format!("q{}: ", w)).collect();
        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let label_padding = " ".repeat(label_width);

        const GATE_WIDTH: usize = 9; // e.g., "──U^1/4──"
        const WIRE: &str = "─────────"; // GATE_WIDTH dashes
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // grid[wire][time] holds the cell text, v_connect[wire][time] the connector below it
        let mut grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_wires];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_wires];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre_dashes = total_dashes / 2;
                let post_dashes = total_dashes - pre_dashes;
                format!("{}{}{}", H_WIRE.to_string().repeat(pre_dashes), symbol, H_WIRE.to_string().repeat(post_dashes))
            }
        }

        fn connect(v_connect: &mut [Vec<char>], a: usize, b: usize, t: usize) {
            let (lo, hi) = (a.min(b), a.max(b));
            for row in v_connect.iter_mut().take(hi).skip(lo) {
                row[t] = V_WIRE;
            }
        }

        for (t, op) in ops.iter().enumerate() {
            match op {
                Operation::X { target } => grid[*target][t] = format_gate("X"),
                Operation::Z { target } => grid[*target][t] = format_gate("Z"),
                Operation::Unitary { target, label, .. } => grid[*target][t] = format_gate(label),
                Operation::ControlledUnitary { control, target, label, .. } => {
                    grid[*control][t] = format_gate("@");
                    grid[*target][t] = format_gate(label);
                    connect(&mut v_connect, *control, *target, t);
                }
                Operation::Crx { control, target, .. } => {
                    grid[*control][t] = format_gate("@");
                    grid[*target][t] = format_gate("Rx");
                    connect(&mut v_connect, *control, *target, t);
                }
                Operation::Diagonal { wires, .. } => {
                    for w in wires {
                        grid[*w][t] = format_gate("D");
                    }
                    if let (Some(lo), Some(hi)) = (wires.iter().min(), wires.iter().max()) {
                        connect(&mut v_connect, *lo, *hi, t);
                    }
                }
            }
        }

        writeln!(f, "Circuit '{}'[{} operations on {} qubits]", self.name, num_ops, num_wires)?;
        for w in 0..num_wires {
            write!(f, "{:<width$}", labels[w], width = label_width)?;
            writeln!(f, "{}", grid[w].join(""))?;

            if w + 1 < num_wires {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let padding_needed = GATE_WIDTH - 1;
                    let pre_pad = padding_needed / 2;
                    let post_pad = padding_needed - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), v_connect[w][t], " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
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
