// src/operations/mod.rs

//! Defines the gate vocabulary a [`Circuit`](crate::circuits::Circuit) is made of.
//!
//! The set is deliberately small: it is exactly what the multi-controlled
//! synthesizer and the comparison oracles emit. Wires are plain indices into
//! the owning circuit, `0..nqubits`.

use num_complex::Complex;

use crate::core::Unitary2;

/// One gate in a circuit.
#[derive(Debug, Clone, PartialEq)] // f64 payloads, so no Eq
pub enum Operation {
    /// Pauli-X on `target`.
    X {
        /// Wire flipped by the gate.
        target: usize,
    },

    /// Pauli-Z on `target`.
    Z {
        /// Wire whose `|1>` component picks up phase π.
        target: usize,
    },

    /// An arbitrary single-wire unitary.
    Unitary {
        /// Wire the matrix acts on.
        target: usize,
        /// The 2×2 matrix.
        matrix: Unitary2,
        /// Display label, e.g. `U^1/4`.
        label: String,
    },

    /// A single-wire unitary applied to `target` only when `control` is `|1>`.
    ControlledUnitary {
        /// Wire that must be `|1>`.
        control: usize,
        /// Wire the matrix acts on.
        target: usize,
        /// The 2×2 matrix applied on the `|1>` branch of the control.
        matrix: Unitary2,
        /// Display label.
        label: String,
    },

    /// Controlled X-rotation, `Rx(θ) = exp(-iθX/2)` on `target` when `control` is `|1>`.
    Crx {
        /// Wire that must be `|1>`.
        control: usize,
        /// Wire that is rotated.
        target: usize,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// A diagonal unitary over `wires`. Entry `j` of `phases` multiplies the
    /// basis states where `wires[i]` holds bit `i` of `j`.
    Diagonal {
        /// Wires spanned, least significant first.
        wires: Vec<usize>,
        /// `2^wires.len()` diagonal entries.
        phases: Vec<Complex<f64>>,
    },
}

impl Operation {
    /// Returns every wire the operation touches, controls first.
    pub fn involved_wires(&self) -> Vec<usize> {
        match self {
            Operation::X { target } | Operation::Z { target } => vec![*target],
            Operation::Unitary { target, .. } => vec![*target],
            Operation::ControlledUnitary { control, target, .. } => vec![*control, *target],
            Operation::Crx { control, target, .. } => vec![*control, *target],
            Operation::Diagonal { wires, .. } => wires.clone(),
        }
    }

    /// Short kind name used by metrics and diagrams.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::X { .. } => "x",
            Operation::Z { .. } => "z",
            Operation::Unitary { .. } => "unitary",
            Operation::ControlledUnitary { .. } => "cu",
            Operation::Crx { .. } => "crx",
            Operation::Diagonal { .. } => "diagonal",
        }
    }

    /// `true` for gates acting on exactly two wires.
    pub fn is_two_qubit(&self) -> bool {
        self.involved_wires().len() == 2
    }

    /// The same gate with every wire `w` replaced by `mapping[w]`.
    ///
    /// Callers guarantee that `mapping` covers every wire of the gate.
    pub(crate) fn remap(&self, mapping: &[usize]) -> Operation {
        match self {
            Operation::X { target } => Operation::X { target: mapping[*target] },
            Operation::Z { target } => Operation::Z { target: mapping[*target] },
            Operation::Unitary { target, matrix, label } => Operation::Unitary {
                target: mapping[*target],
                matrix: *matrix,
                label: label.clone(),
            },
            Operation::ControlledUnitary { control, target, matrix, label } => Operation::ControlledUnitary {
                control: mapping[*control],
                target: mapping[*target],
                matrix: *matrix,
                label: label.clone(),
            },
            Operation::Crx { control, target, theta } => Operation::Crx {
                control: mapping[*control],
                target: mapping[*target],
                theta: *theta,
            },
            Operation::Diagonal { wires, phases } => Operation::Diagonal {
                wires: wires.iter().map(|w| mapping[*w]).collect(),
                phases: phases.clone(),
            },
        }
    }

    /// The adjoint gate, so that applying `op` then `op.adjoint()` is the identity.
    pub fn adjoint(&self) -> Operation {
        match self {
            Operation::X { .. } | Operation::Z { .. } => self.clone(),
            Operation::Unitary { target, matrix, label } => Operation::Unitary {
                target: *target,
                matrix: matrix.adjoint(),
                label: dagger_label(label),
            },
            Operation::ControlledUnitary { control, target, matrix, label } => Operation::ControlledUnitary {
                control: *control,
                target: *target,
                matrix: matrix.adjoint(),
                label: dagger_label(label),
            },
            Operation::Crx { control, target, theta } => Operation::Crx {
                control: *control,
                target: *target,
                theta: -*theta,
            },
            Operation::Diagonal { wires, phases } => Operation::Diagonal {
                wires: wires.clone(),
                phases: phases.iter().map(|p| p.conj()).collect(),
            },
        }
    }
}

fn dagger_label(label: &str) -> String {
    match label.strip_suffix('†') {
        Some(base) => base.to_string(),
        None => format!("{}†", label),
    }
}
