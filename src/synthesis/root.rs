// src/synthesis/root.rs

//! Fractional powers of single-qubit unitaries.
//!
//! A unitary is normal, so it has an orthonormal eigenbasis `v1, v2` and
//! `U = λ1·v1v1† + λ2·v2v2†`. Roots are taken eigenvalue by eigenvalue.
//!
//! Branch cut: every eigenvalue `λ = r·e^(iφ)` is raised with the principal
//! branch, `φ ∈ (-π, π]`, so `λ^(1/k) = r^(1/k)·e^(iφ/k)`. An eigenvalue
//! exactly on the negative real axis (Pauli-Z's −1) takes `φ = +π`; a signed
//! zero imaginary part is folded to `+0.0` first so that `-1 - 0i` does not
//! land on the other side of the cut. All roots used inside one synthesized
//! block come from the same decomposition, which keeps
//! `(U^(1/2k))² = U^(1/k)` exact up to rounding.

use nalgebra::linalg::Schur;
use num_complex::Complex;
use tracing::trace;

use crate::circuits::Circuit;
use crate::core::constants::oracle_constants::{SCHUR_EPSILON, SCHUR_MAX_ITERATIONS};
use crate::core::matrix::max_abs_diff;
use crate::core::{OracleError, Result, SynthesisConfig, Unitary2};
use crate::validation::check_unitary;

/// Eigendecomposition of a single-qubit unitary, ready to produce roots.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitaryRoots {
    eigenvalues: [Complex<f64>; 2],
    /// `v_i·v_i†` for each eigenvector.
    projectors: [Unitary2; 2],
}

impl UnitaryRoots {
    /// Decomposes `unitary` with the default configuration.
    pub fn new(unitary: &Unitary2) -> Result<Self> {
        Self::with_config(unitary, &SynthesisConfig::default())
    }

    /// Decomposes `unitary`.
    ///
    /// The Schur form `U = Q·T·Q†` of a normal matrix has a diagonal `T`, so
    /// the columns of `Q` are orthonormal eigenvectors and `T`'s diagonal
    /// holds the eigenvalues.
    ///
    /// # Errors
    /// `DegenerateUnitary` if the matrix is not unitary within
    /// `config.unitarity_tolerance`, if the Schur iteration does not
    /// converge, or if the spectral reconstruction `λ1·P1 + λ2·P2` misses the
    /// input by more than `config.normality_tolerance` (the matrix is not
    /// normal).
    pub fn with_config(unitary: &Unitary2, config: &SynthesisConfig) -> Result<Self> {
        check_unitary(unitary, Some(config.unitarity_tolerance))?;

        let schur = Schur::try_new(*unitary, SCHUR_EPSILON, SCHUR_MAX_ITERATIONS).ok_or_else(|| {
            OracleError::DegenerateUnitary {
                message: "Schur decomposition did not converge".to_string(),
            }
        })?;
        let (q, t) = schur.unpack();
        let eigenvalues = [t[(0, 0)], t[(1, 1)]];
        let projectors = [0, 1].map(|i| {
            let v = q.column(i);
            v * v.adjoint()
        });

        let rebuilt = projectors[0] * eigenvalues[0] + projectors[1] * eigenvalues[1];
        let residual = max_abs_diff(&rebuilt, unitary);
        if residual > config.normality_tolerance {
            return Err(OracleError::DegenerateUnitary {
                message: format!("Matrix has no orthonormal eigenbasis (reconstruction error {:.3e})", residual),
            });
        }

        Ok(Self {
            eigenvalues: [fold_signed_zero(eigenvalues[0]), fold_signed_zero(eigenvalues[1])],
            projectors,
        })
    }

    /// The eigenvalues, in the order of the Schur diagonal.
    pub fn eigenvalues(&self) -> [Complex<f64>; 2] {
        self.eigenvalues
    }

    /// `U^(1/k)`, or its inverse when `inverse` is set.
    ///
    /// # Errors
    /// * `InvalidOperation` if `k == 0`.
    /// * `DegenerateUnitary` if the root is singular and cannot be inverted.
    pub fn root(&self, k: u64, inverse: bool) -> Result<Unitary2> {
        if k == 0 {
            return Err(OracleError::InvalidOperation {
                message: "Root order must be a positive integer".to_string(),
            });
        }
        let exponent = 1.0 / k as f64;
        let gate = self.projectors[0] * self.eigenvalues[0].powf(exponent)
            + self.projectors[1] * self.eigenvalues[1].powf(exponent);

        if !inverse {
            return Ok(gate);
        }
        gate.try_inverse().ok_or_else(|| OracleError::DegenerateUnitary {
            message: format!("Root of order {} is singular", k),
        })
    }

    /// [`root`](Self::root) as a one-wire block named by [`root_label`].
    ///
    /// The ladders lift this block with [`Circuit::controlled`], so the
    /// label seen in a synthesized circuit always matches the matrix.
    pub fn root_gate(&self, k: u64, inverse: bool) -> Result<Circuit> {
        let matrix = self.root(k, inverse)?;
        let label = root_label(k, inverse);
        trace!(k, inverse, "built root gate");
        let mut gate = Circuit::new(1, label.clone());
        gate.unitary(matrix, 0, label)?;
        Ok(gate)
    }
}

/// `-0.0 + 0.0 == +0.0`, which moves `-1 - 0i` onto the `+π` side of the cut.
fn fold_signed_zero(z: Complex<f64>) -> Complex<f64> {
    Complex::new(z.re + 0.0, z.im + 0.0)
}

/// Label of a root gate: `U^1/k` or `Udg^1/k`.
pub fn root_label(k: u64, inverse: bool) -> String {
    if inverse {
        format!("Udg^1/{}", k)
    } else {
        format!("U^1/{}", k)
    }
}

/// `U^(1/k)` (or its inverse) for a single unitary.
pub fn root_power(unitary: &Unitary2, k: u64, inverse: bool) -> Result<Unitary2> {
    UnitaryRoots::new(unitary)?.root(k, inverse)
}

/// `U^(1/k)` (or its inverse) wrapped as a named one-wire circuit.
pub fn root_power_gate(unitary: &Unitary2, k: u64, inverse: bool) -> Result<Circuit> {
    UnitaryRoots::new(unitary)?.root_gate(k, inverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::{identity, max_abs_diff, pauli_x, pauli_z, phase, random_unitary, rx};
    use crate::core::PI;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TOL: f64 = 1e-10;

    fn matrix_power(m: &Unitary2, n: u64) -> Unitary2 {
        (0..n).fold(identity(), |acc, _| acc * m)
    }

    #[test]
    fn test_square_root_of_z_is_s() -> Result<()> {
        let root = root_power(&pauli_z(), 2, false)?;
        // principal branch: (-1)^(1/2) = e^(iπ/2) = i
        assert!(max_abs_diff(&root, &phase(PI / 2.0)) < TOL);
        Ok(())
    }

    #[test]
    fn test_roots_raise_back_to_input() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let u = random_unitary(&mut rng);
            let roots = UnitaryRoots::new(&u)?;
            for k in [1u64, 2, 4, 8, 16] {
                let root = roots.root(k, false)?;
                assert!(max_abs_diff(&matrix_power(&root, k), &u) < 1e-9, "k = {}", k);
            }
        }
        Ok(())
    }

    #[test]
    fn test_halving_is_consistent() -> Result<()> {
        let roots = UnitaryRoots::new(&pauli_x())?;
        let quarter = roots.root(4, false)?;
        let half = roots.root(2, false)?;
        assert!(max_abs_diff(&(quarter * quarter), &half) < TOL);
        Ok(())
    }

    #[test]
    fn test_inverse_root_cancels_root() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(3);
        let u = random_unitary(&mut rng);
        let roots = UnitaryRoots::new(&u)?;
        let product = roots.root(8, false)? * roots.root(8, true)?;
        assert!(max_abs_diff(&product, &identity()) < TOL);
        Ok(())
    }

    #[test]
    fn test_roots_stay_unitary() -> Result<()> {
        let roots = UnitaryRoots::new(&pauli_x())?;
        for k in [3u64, 5, 1024] {
            let root = roots.root(k, false)?;
            assert!(max_abs_diff(&(root * root.adjoint()), &identity()) < TOL);
        }
        Ok(())
    }

    #[test]
    fn test_identity_has_trivial_roots() -> Result<()> {
        let root = root_power(&identity(), 7, true)?;
        assert!(max_abs_diff(&root, &identity()) < TOL);
        Ok(())
    }

    #[test]
    fn test_zero_order_is_rejected() {
        assert!(matches!(root_power(&pauli_z(), 0, false), Err(OracleError::InvalidOperation { .. })));
    }

    #[test]
    fn test_non_unitary_is_rejected() {
        let scaled = pauli_x() * Complex::new(0.5, 0.0);
        assert!(matches!(root_power(&scaled, 2, false), Err(OracleError::DegenerateUnitary { .. })));
    }

    #[test]
    fn test_non_normal_is_rejected_even_with_loose_tolerance() {
        // Jordan-like block: passes a very loose unitarity check but has no orthonormal eigenbasis
        let jordan = Unitary2::new(
            Complex::new(1.0, 0.0), Complex::new(0.5, 0.0),
            Complex::new(0.0, 0.0), Complex::new(1.0, 0.0),
        );
        let config = SynthesisConfig::default().with_unitarity_tolerance(10.0);
        let err = UnitaryRoots::with_config(&jordan, &config).unwrap_err();
        assert!(matches!(err, OracleError::DegenerateUnitary { .. }));
    }

    #[test]
    fn test_root_gate_is_named() -> Result<()> {
        let gate = root_power_gate(&pauli_z(), 4, true)?;
        assert_eq!(gate.name(), "Udg^1/4");
        assert_eq!(gate.nqubits(), 1);
        assert_eq!(gate.len(), 1);
        Ok(())
    }

    #[test]
    fn test_near_identity_rotations_keep_their_angle() -> Result<()> {
        let tilt = Complex::from_polar(1.0, 0.7);
        for theta in [1e-6, 1e-7, 1e-8, 1e-9, 1e-10, 1e-12] {
            for u in [rx(theta), rx(theta) * tilt] {
                let roots = UnitaryRoots::new(&u)?;
                for k in [1u64, 2, 4, 8] {
                    let root = roots.root(k, false)?;
                    let error = max_abs_diff(&matrix_power(&root, k), &u);
                    // dropping the rotation would leave an error of θ/2
                    assert!(error < 1e-13, "θ = {:e}, k = {}: error {:.3e}", theta, k, error);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_eigenvalues_of_tiny_rotation_are_split() -> Result<()> {
        let theta = 1e-10;
        let [l1, l2] = UnitaryRoots::new(&rx(theta))?.eigenvalues();
        // e^(±iθ/2), in either order
        assert!(((l1 - l2).norm() - theta).abs() < 1e-14);
        assert!((l1 * l2 - Complex::new(1.0, 0.0)).norm() < 1e-14);
        Ok(())
    }

    #[test]
    fn test_root_gate_matches_root() -> Result<()> {
        let roots = UnitaryRoots::new(&rx(0.3))?;
        let gate = roots.root_gate(8, false)?;
        match gate.operations() {
            [crate::operations::Operation::Unitary { target: 0, matrix, label }] => {
                assert_eq!(label, "U^1/8");
                assert_eq!(*matrix, roots.root(8, false)?);
            }
            other => panic!("unexpected operations {:?}", other),
        }
        Ok(())
    }
}
