// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

use super::error::{OracleError, Result};

/// Amplitudes of an `n`-wire register over the computational basis.
///
/// Index `i` is the basis state whose bit `w` is the value of wire `w`
/// (wire 0 is the least significant bit).
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Wraps an amplitude vector. The length must be a power of two.
    pub fn new(amplitudes: Vec<Complex<f64>>) -> Result<Self> {
        if amplitudes.is_empty() || !amplitudes.len().is_power_of_two() {
            return Err(OracleError::SimulationError {
                message: format!("State dimension {} is not a positive power of two", amplitudes.len()),
            });
        }
        Ok(Self { amplitudes })
    }

    /// The basis state `|index>` of an `nqubits`-wire register.
    pub fn basis(nqubits: usize, index: usize) -> Result<Self> {
        let dim = dimension(nqubits)?;
        if index >= dim {
            return Err(OracleError::SimulationError {
                message: format!("Basis index {} out of range for {} qubits", index, nqubits),
            });
        }
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[index] = Complex::new(1.0, 0.0);
        Ok(Self { amplitudes })
    }

    /// Read-only access to the amplitudes.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    pub(crate) fn vector_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Number of basis states.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of wires this state describes.
    pub fn nqubits(&self) -> usize {
        self.amplitudes.len().trailing_zeros() as usize
    }

    /// Amplitude of basis state `index`.
    pub fn amplitude(&self, index: usize) -> Option<Complex<f64>> {
        self.amplitudes.get(index).copied()
    }
}

/// `2^nqubits`, failing instead of overflowing.
pub(crate) fn dimension(nqubits: usize) -> Result<usize> {
    u32::try_from(nqubits)
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .ok_or_else(|| OracleError::SimulationError {
            message: format!("{} qubits overflow the addressable state dimension", nqubits),
        })
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
