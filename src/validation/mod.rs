// src/validation/mod.rs

//! Input checks run before any gate is emitted, plus state sanity checks.

use std::collections::HashSet;

use crate::core::constants::oracle_constants::{DEFAULT_AMPLITUDE_TOLERANCE, DEFAULT_UNITARITY_TOLERANCE};
use crate::core::matrix::max_abs_diff;
use crate::core::{OracleError, Result, StateVector, Unitary2};

/// Checks that `matrix` is unitary, i.e. `U·U† ≈ I` entry-wise.
///
/// # Arguments
/// * `matrix` - The candidate 2×2 unitary.
/// * `tolerance` - Allowed entry-wise deviation (default 1e-9).
///
/// # Returns
/// * `Ok(())` if unitary within tolerance.
/// * `Err(OracleError::DegenerateUnitary)` otherwise, including matrices with
///   non-finite entries.
pub fn check_unitary(matrix: &Unitary2, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_UNITARITY_TOLERANCE);
    if matrix.iter().any(|c| !c.re.is_finite() || !c.im.is_finite()) {
        return Err(OracleError::DegenerateUnitary {
            message: "Matrix has non-finite entries".to_string(),
        });
    }
    let deviation = max_abs_diff(&(matrix * matrix.adjoint()), &Unitary2::identity());
    if deviation > effective_tolerance {
        Err(OracleError::DegenerateUnitary {
            message: format!("Matrix is not unitary: max |U·U† - I| = {:.3e} (tolerance {:.1e})", deviation, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

/// Checks that `controls` is non-empty, free of duplicates and disjoint from
/// `target`.
pub fn check_control_set(controls: &[usize], target: usize) -> Result<()> {
    if controls.is_empty() {
        return Err(OracleError::MalformedControlSet {
            message: "At least one control wire is required".to_string(),
        });
    }
    let mut seen = HashSet::with_capacity(controls.len());
    for &control in controls {
        if control == target {
            return Err(OracleError::MalformedControlSet {
                message: format!("Target wire {} also listed as a control", target),
            });
        }
        if !seen.insert(control) {
            return Err(OracleError::MalformedControlSet {
                message: format!("Control wire {} listed more than once", control),
            });
        }
    }
    Ok(())
}

/// Checks that the state vector is normalized (`Σ|c_i|² ≈ 1`).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(OracleError::SimulationError)` if normalization fails.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_AMPLITUDE_TOLERANCE);
    let norm_sq: f64 = state.vector().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(OracleError::SimulationError {
            message: format!("State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})", norm_sq, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::{pauli_x, pauli_z};
    use num_complex::Complex;

    #[test]
    fn test_paulis_are_unitary() {
        assert!(check_unitary(&pauli_x(), None).is_ok());
        assert!(check_unitary(&pauli_z(), None).is_ok());
    }

    #[test]
    fn test_scaled_matrix_is_rejected() {
        let doubled = pauli_z() * Complex::new(2.0, 0.0);
        assert!(matches!(check_unitary(&doubled, None), Err(OracleError::DegenerateUnitary { .. })));
    }

    #[test]
    fn test_nan_matrix_is_rejected() {
        let mut m = pauli_x();
        m[(0, 0)] = Complex::new(f64::NAN, 0.0);
        assert!(matches!(check_unitary(&m, None), Err(OracleError::DegenerateUnitary { .. })));
    }

    #[test]
    fn test_control_set_rules() {
        assert!(check_control_set(&[0, 1, 2], 3).is_ok());
        assert!(matches!(check_control_set(&[], 0), Err(OracleError::MalformedControlSet { .. })));
        assert!(matches!(check_control_set(&[0, 1, 0], 3), Err(OracleError::MalformedControlSet { .. })));
        assert!(matches!(check_control_set(&[0, 3], 3), Err(OracleError::MalformedControlSet { .. })));
    }

    #[test]
    fn test_normalization() -> Result<()> {
        assert!(check_normalization(&StateVector::basis(2, 1)?, None).is_ok());
        let half = StateVector::new(vec![Complex::new(0.5, 0.0), Complex::new(0.5, 0.0)])?;
        assert!(check_normalization(&half, None).is_err());
        Ok(())
    }
}
