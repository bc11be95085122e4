// src/core/matrix.rs

//! Single-qubit matrices used as gate payloads.

use nalgebra::Matrix2;
use num_complex::Complex;
use num_traits::{One, Zero};
use rand::Rng;

use super::constants::oracle_constants::PI;

/// A 2×2 complex matrix acting on one wire. Rows and columns are ordered
/// `|0>, |1>`.
pub type Unitary2 = Matrix2<Complex<f64>>;

/// The identity on one wire.
pub fn identity() -> Unitary2 {
    Unitary2::identity()
}

/// Pauli-X, the bit flip.
pub fn pauli_x() -> Unitary2 {
    Matrix2::new(
        Complex::zero(), Complex::one(),
        Complex::one(), Complex::zero(),
    )
}

/// Pauli-Z, the phase flip used to build comparison oracles.
pub fn pauli_z() -> Unitary2 {
    Matrix2::new(
        Complex::one(), Complex::zero(),
        Complex::zero(), -Complex::one(),
    )
}

/// `diag(1, e^(iθ))`.
pub fn phase(theta: f64) -> Unitary2 {
    Matrix2::new(
        Complex::one(), Complex::zero(),
        Complex::zero(), Complex::from_polar(1.0, theta),
    )
}

/// `Rx(θ) = exp(-iθX/2)`.
pub fn rx(theta: f64) -> Unitary2 {
    let half = theta / 2.0;
    let cos = Complex::new(half.cos(), 0.0);
    let isin = Complex::new(0.0, -half.sin());
    Matrix2::new(
        cos, isin,
        isin, cos,
    )
}

/// Draws a unitary from the Euler-angle family
/// `e^(iγ)·[[cos(θ/2), -e^(iλ)sin(θ/2)], [e^(iφ)sin(θ/2), e^(i(φ+λ))cos(θ/2)]]`
/// with every angle uniform over its range.
///
/// Pair with a seeded `StdRng` for reproducible draws.
pub fn random_unitary<R: Rng + ?Sized>(rng: &mut R) -> Unitary2 {
    let theta = rng.random::<f64>() * PI;
    let phi = rng.random::<f64>() * 2.0 * PI;
    let lambda = rng.random::<f64>() * 2.0 * PI;
    let gamma = rng.random::<f64>() * 2.0 * PI;

    let global = Complex::from_polar(1.0, gamma);
    let (c, s) = ((theta / 2.0).cos(), (theta / 2.0).sin());
    Matrix2::new(
        global * c,
        -global * Complex::from_polar(s, lambda),
        global * Complex::from_polar(s, phi),
        global * Complex::from_polar(c, phi + lambda),
    )
}

/// Largest entry-wise distance between two matrices.
pub fn max_abs_diff(a: &Unitary2, b: &Unitary2) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_unitary_is_unitary() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let u = random_unitary(&mut rng);
            let product = u * u.adjoint();
            assert!(max_abs_diff(&product, &identity()) < 1e-12);
        }
    }

    #[test]
    fn test_rx_pi_is_minus_i_x() {
        let expected = pauli_x() * Complex::new(0.0, -1.0);
        assert!(max_abs_diff(&rx(PI), &expected) < 1e-12);
    }

    #[test]
    fn test_phase_pi_is_z() {
        assert!(max_abs_diff(&phase(PI), &pauli_z()) < 1e-12);
    }
}
