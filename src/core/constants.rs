//! Numeric constants shared by synthesis, validation and simulation.

/// Constants used across the crate
pub mod oracle_constants {
    /// Used for rotation angles and phases (`e^(iθ)`)
    pub const PI: f64 = std::f64::consts::PI;

    /// Allowed deviation of `U·U†` from the identity, entry-wise.
    pub const DEFAULT_UNITARITY_TOLERANCE: f64 = 1e-9;

    /// Allowed error when rebuilding a matrix from its eigendecomposition.
    pub const DEFAULT_NORMALITY_TOLERANCE: f64 = 1e-9;

    /// Convergence threshold handed to the Schur decomposition.
    pub const SCHUR_EPSILON: f64 = 1e-12;

    /// Iteration cap of the Schur decomposition.
    pub const SCHUR_MAX_ITERATIONS: usize = 100_000;

    /// Amplitudes below this magnitude are treated as zero by the simulator.
    pub const DEFAULT_AMPLITUDE_TOLERANCE: f64 = 1e-9;
}
