// src/simulation/results.rs
use num_complex::Complex;
use std::fmt;

/// The per-basis-state phases of a circuit that is diagonal in the
/// computational basis, as produced by
/// [`Simulator::phase_signature`](super::Simulator::phase_signature).
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSignature {
    /// `phases[x]` is the factor that basis state `|x>` picks up.
    phases: Vec<Complex<f64>>,
    tolerance: f64,
}

impl PhaseSignature {
    pub(crate) fn new(phases: Vec<Complex<f64>>, tolerance: f64) -> Self {
        Self { phases, tolerance }
    }

    /// All phases, indexed by basis state.
    pub fn phases(&self) -> &[Complex<f64>] {
        &self.phases
    }

    /// Phase of basis state `index`, if in range.
    pub fn phase(&self, index: usize) -> Option<Complex<f64>> {
        self.phases.get(index).copied()
    }

    /// `true` when basis state `index` picks up a factor of −1.
    pub fn is_marked(&self, index: usize) -> bool {
        self.phase(index)
            .is_some_and(|p| (p + Complex::new(1.0, 0.0)).norm() < self.tolerance)
    }

    /// Basis states that pick up a factor of −1, ascending.
    pub fn marked(&self) -> Vec<usize> {
        (0..self.phases.len()).filter(|i| self.is_marked(*i)).collect()
    }

    /// `true` when every phase is either +1 or −1.
    pub fn is_sign_pattern(&self) -> bool {
        self.phases.iter().all(|p| {
            (p - Complex::new(1.0, 0.0)).norm() < self.tolerance || (p + Complex::new(1.0, 0.0)).norm() < self.tolerance
        })
    }

    /// Largest distance between matching phases of two signatures, or
    /// `None` if they describe different widths.
    pub fn max_deviation(&self, other: &PhaseSignature) -> Option<f64> {
        if self.phases.len() != other.phases.len() {
            return None;
        }
        Some(
            self.phases
                .iter()
                .zip(&other.phases)
                .map(|(a, b)| (a - b).norm())
                .fold(0.0, f64::max),
        )
    }
}

impl fmt::Display for PhaseSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Phase Signature ({} basis states):", self.phases.len())?;
        let marked = self.marked();
        if marked.is_empty() {
            writeln!(f, "  No basis states marked.")?;
        } else {
            writeln!(f, "  Marked: {:?}", marked)?;
        }
        Ok(())
    }
}
