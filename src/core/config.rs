//! Tunable numeric settings for the synthesizer.

use super::constants::oracle_constants::{DEFAULT_NORMALITY_TOLERANCE, DEFAULT_UNITARITY_TOLERANCE};

/// Numeric settings consumed by root extraction and the multi-controlled
/// gate synthesizer.
///
/// `SynthesisConfig::default()` is what the plain entry points use; the
/// `*_with` variants accept an explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisConfig {
    /// Maximum entry-wise deviation of `U·U†` from `I` accepted as unitary.
    pub unitarity_tolerance: f64,
    /// Maximum entry-wise error of the spectral reconstruction `λ1·P1 + λ2·P2`.
    pub normality_tolerance: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            unitarity_tolerance: DEFAULT_UNITARITY_TOLERANCE,
            normality_tolerance: DEFAULT_NORMALITY_TOLERANCE,
        }
    }
}

impl SynthesisConfig {
    /// Returns a copy with a different unitarity tolerance.
    pub fn with_unitarity_tolerance(mut self, tolerance: f64) -> Self {
        self.unitarity_tolerance = tolerance;
        self
    }

    /// Returns a copy with a different reconstruction tolerance.
    pub fn with_normality_tolerance(mut self, tolerance: f64) -> Self {
        self.normality_tolerance = tolerance;
        self
    }
}
