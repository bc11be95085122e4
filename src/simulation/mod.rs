// src/simulation/mod.rs

//! State-vector simulation of [`Circuit`]s.
//!
//! The simulator is how the crate checks its own output: a multi-controlled
//! block must reproduce the controlled unitary, and an oracle must be
//! diagonal with the expected ±1 pattern.

mod results;
pub(crate) mod engine;

pub use results::PhaseSignature;

use crate::circuits::Circuit;
use crate::core::constants::oracle_constants::DEFAULT_AMPLITUDE_TOLERANCE;
use crate::core::state::dimension;
use crate::core::{OracleError, Result, StateVector};
use crate::validation::check_normalization;
use engine::SimulationEngine;
use nalgebra::DMatrix;
use num_complex::Complex;
use tracing::trace;

/// Runs circuits on a dense state vector.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    /// Amplitudes below this magnitude count as zero when classifying results.
    amplitude_tolerance: f64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self { amplitude_tolerance: DEFAULT_AMPLITUDE_TOLERANCE }
    }
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with a custom amplitude tolerance.
    pub fn with_tolerance(amplitude_tolerance: f64) -> Self {
        Self { amplitude_tolerance }
    }

    /// Runs `circuit` on basis state `|basis_index>`.
    ///
    /// # Returns
    /// * `Ok(StateVector)` holding the final amplitudes.
    /// * `Err(OracleError)` if the basis index or circuit width is unusable.
    pub fn run(&self, circuit: &Circuit, basis_index: usize) -> Result<StateVector> {
        let initial = StateVector::basis(circuit.nqubits(), basis_index)?;
        self.run_state(circuit, initial)
    }

    /// Runs `circuit` on an arbitrary initial state of matching dimension.
    ///
    /// # Errors
    /// `SimulationError` if `initial` is not normalized or has the wrong
    /// dimension.
    pub fn run_state(&self, circuit: &Circuit, initial: StateVector) -> Result<StateVector> {
        check_normalization(&initial, Some(self.amplitude_tolerance))?;
        let mut engine = SimulationEngine::init(circuit.nqubits())?;
        engine.set_state(initial)?;
        for op in circuit.operations() {
            engine.apply_operation(op)?;
        }
        Ok(engine.into_state())
    }

    /// The full `2^n × 2^n` matrix of `circuit`, built column by column.
    pub fn unitary(&self, circuit: &Circuit) -> Result<DMatrix<Complex<f64>>> {
        let dim = dimension(circuit.nqubits())?;
        let mut matrix = DMatrix::from_element(dim, dim, Complex::new(0.0, 0.0));
        for col in 0..dim {
            let state = self.run(circuit, col)?;
            for (row, amp) in state.vector().iter().enumerate() {
                matrix[(row, col)] = *amp;
            }
        }
        Ok(matrix)
    }

    /// Extracts the diagonal of a circuit that maps every basis state onto
    /// itself up to a phase.
    ///
    /// # Errors
    /// `SimulationError` if some basis state leaks amplitude onto another one
    /// or loses norm, i.e. the circuit is not a diagonal unitary.
    pub fn phase_signature(&self, circuit: &Circuit) -> Result<PhaseSignature> {
        let dim = dimension(circuit.nqubits())?;
        let mut phases = Vec::with_capacity(dim);
        for x in 0..dim {
            let state = self.run(circuit, x)?;
            let leak = engine::leakage(&state, x);
            if leak > self.amplitude_tolerance {
                return Err(OracleError::SimulationError {
                    message: format!("Circuit '{}' is not diagonal: basis state {} leaks amplitude {:.3e}", circuit.name(), x, leak),
                });
            }
            let norm = engine::norm_sqr(&state);
            if (norm - 1.0).abs() > self.amplitude_tolerance {
                return Err(OracleError::SimulationError {
                    message: format!("Circuit '{}' is not unitary: basis state {} ends with norm {}", circuit.name(), x, norm),
                });
            }
            phases.push(state.vector()[x]);
        }
        trace!(circuit = circuit.name(), dim, "extracted phase signature");
        Ok(PhaseSignature::new(phases, self.amplitude_tolerance.sqrt()))
    }

    /// Basis states a phase oracle marks with −1, ascending.
    pub fn marked_states(&self, circuit: &Circuit) -> Result<Vec<usize>> {
        Ok(self.phase_signature(circuit)?.marked())
    }
}
