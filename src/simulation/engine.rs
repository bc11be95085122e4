// src/simulation/engine.rs
use crate::core::state::dimension;
use crate::core::{OracleError, Result, StateVector, Unitary2};
use crate::core::matrix::rx;
use crate::operations::Operation;
use num_complex::Complex;

/// Dense state-vector engine that evolves one register through a gate list.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    /// Number of wires (N). The state has 2^N amplitudes.
    num_wires: usize,
    state: StateVector,
}

impl SimulationEngine {
    /// Initializes the engine in `|0...0>`.
    pub(crate) fn init(num_wires: usize) -> Result<Self> {
        if num_wires == 0 {
            return Err(OracleError::SimulationError { message: "Cannot initialize simulation engine with zero qubits".to_string() });
        }
        dimension(num_wires)?;
        Ok(Self {
            num_wires,
            state: StateVector::basis(num_wires, 0)?,
        })
    }

    /// Replaces the current state. The dimension must match.
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<()> {
        if state.dim() != self.state.dim() {
            return Err(OracleError::SimulationError {
                message: format!("Cannot set state: provided dimension {} does not match engine dimension {}", state.dim(), self.state.dim()),
            });
        }
        self.state = state;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    pub(crate) fn into_state(self) -> StateVector {
        self.state
    }

    /// Applies a single operation to the state.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<()> {
        for wire in op.involved_wires() {
            if wire >= self.num_wires {
                return Err(OracleError::WireOutOfRange { wire, nqubits: self.num_wires });
            }
        }
        match op {
            Operation::X { target } => self.apply_pauli_x(*target),
            Operation::Z { target } => self.apply_pauli_z(*target),
            Operation::Unitary { target, matrix, .. } => self.apply_single_wire_gate(*target, None, matrix),
            Operation::ControlledUnitary { control, target, matrix, .. } => {
                self.apply_single_wire_gate(*target, Some(*control), matrix)
            }
            Operation::Crx { control, target, theta } => {
                self.apply_single_wire_gate(*target, Some(*control), &rx(*theta))
            }
            Operation::Diagonal { wires, phases } => self.apply_diagonal(wires, phases),
        }
        Ok(())
    }

    fn apply_pauli_x(&mut self, target: usize) {
        let mask = 1usize << target;
        let amplitudes = self.state.vector_mut();
        for i in 0..amplitudes.len() {
            if i & mask == 0 {
                amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_pauli_z(&mut self, target: usize) {
        let mask = 1usize << target;
        for (i, amp) in self.state.vector_mut().iter_mut().enumerate() {
            if i & mask != 0 {
                *amp = -*amp;
            }
        }
    }

    /// Applies a 2×2 matrix to `target`, restricted to basis states where
    /// `control` (if any) is 1.
    fn apply_single_wire_gate(&mut self, target: usize, control: Option<usize>, matrix: &Unitary2) {
        let t_mask = 1usize << target;
        let c_mask = control.map_or(0, |c| 1usize << c);
        let amplitudes = self.state.vector_mut();

        // Iterate over pairs of basis states differing only at the target wire
        for i0 in 0..amplitudes.len() {
            if i0 & t_mask != 0 || i0 & c_mask != c_mask {
                continue;
            }
            let i1 = i0 | t_mask;
            let psi_0 = amplitudes[i0];
            let psi_1 = amplitudes[i1];
            amplitudes[i0] = matrix[(0, 0)] * psi_0 + matrix[(0, 1)] * psi_1;
            amplitudes[i1] = matrix[(1, 0)] * psi_0 + matrix[(1, 1)] * psi_1;
        }
    }

    fn apply_diagonal(&mut self, wires: &[usize], phases: &[Complex<f64>]) {
        for (i, amp) in self.state.vector_mut().iter_mut().enumerate() {
            let j = wires
                .iter()
                .enumerate()
                .fold(0usize, |acc, (bit, w)| acc | (((i >> w) & 1) << bit));
            *amp *= phases[j];
        }
    }
}

/// Total probability of a state, `Σ|c_i|²`.
pub(crate) fn norm_sqr(state: &StateVector) -> f64 {
    state.vector().iter().map(|c| c.norm_sqr()).sum()
}

/// Amplitude magnitude outside index `keep`.
pub(crate) fn leakage(state: &StateVector, keep: usize) -> f64 {
    state
        .vector()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != keep)
        .map(|(_, c)| c.norm())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::{pauli_x, pauli_z};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_x_on_wire_one_moves_basis_state() -> Result<()> {
        let mut engine = SimulationEngine::init(3)?;
        engine.apply_operation(&Operation::X { target: 1 })?;
        assert_abs_diff_eq!(engine.state().vector()[2].re, 1.0, epsilon = 1e-12);
        assert_eq!(leakage(engine.state(), 2), 0.0);
        Ok(())
    }

    #[test]
    fn test_controlled_unitary_respects_control() -> Result<()> {
        let mut engine = SimulationEngine::init(2)?;
        let cx = Operation::ControlledUnitary { control: 0, target: 1, matrix: pauli_x(), label: "X".to_string() };

        // Control |0>: nothing happens
        engine.apply_operation(&cx)?;
        assert_abs_diff_eq!(engine.state().vector()[0].re, 1.0, epsilon = 1e-12);

        // Control |1>: target flips, |01> (index 1) -> |11> (index 3)
        engine.set_state(StateVector::basis(2, 1)?)?;
        engine.apply_operation(&cx)?;
        assert_abs_diff_eq!(engine.state().vector()[3].re, 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_unitary_z_matches_pauli_z() -> Result<()> {
        let mut engine = SimulationEngine::init(1)?;
        engine.set_state(StateVector::basis(1, 1)?)?;
        engine.apply_operation(&Operation::Unitary { target: 0, matrix: pauli_z(), label: "Z".to_string() })?;
        assert_abs_diff_eq!(engine.state().vector()[1].re, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_sqr(engine.state()), 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_diagonal_uses_wire_order() -> Result<()> {
        // phases indexed by (bit of wire 2) + 2 * (bit of wire 0)
        let phases = vec![
            Complex::new(1.0, 0.0),
            Complex::new(2.0, 0.0),
            Complex::new(3.0, 0.0),
            Complex::new(4.0, 0.0),
        ];
        let op = Operation::Diagonal { wires: vec![2, 0], phases };
        let mut engine = SimulationEngine::init(3)?;
        engine.set_state(StateVector::basis(3, 0b001)?)?;
        engine.apply_operation(&op)?;
        assert_abs_diff_eq!(engine.state().vector()[1].re, 3.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_set_state_dimension_mismatch() -> Result<()> {
        let mut engine = SimulationEngine::init(2)?;
        let err = engine.set_state(StateVector::basis(3, 0)?).unwrap_err();
        assert!(matches!(err, OracleError::SimulationError { .. }));
        Ok(())
    }
}
