//! Error handling logic

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OracleError>;

/// Failures raised while synthesizing, composing or simulating circuits.
///
/// Every builder validates its inputs before the first gate is appended, so an
/// error never leaves a half-built circuit behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The register is too narrow to hold the binary form of a threshold.
    #[error("Invalid Width: {number} needs {required} bits but only {nqubits} qubits were given")]
    InvalidWidth {
        /// Threshold that did not fit
        number: u64,
        /// Qubits available
        nqubits: usize,
        /// Bits needed to write `number`
        required: usize,
    },

    /// A threshold given as a binary string could not be parsed.
    #[error("Invalid Threshold: {message}")]
    InvalidThreshold {
        /// InvalidThreshold failure message
        message: String,
    },

    /// The matrix handed to the synthesizer is not unitary, or its
    /// eigendecomposition could not be carried out.
    #[error("Degenerate Unitary: {message}")]
    DegenerateUnitary {
        /// DegenerateUnitary failure message
        message: String,
    },

    /// Controls are empty, repeated, or contain the target.
    #[error("Malformed Control Set: {message}")]
    MalformedControlSet {
        /// MalformedControlSet failure message
        message: String,
    },

    /// A gate or a composition mapping references a wire outside the circuit.
    #[error("Wire Out Of Range: wire {wire} does not exist in a {nqubits}-qubit circuit")]
    WireOutOfRange {
        /// Offending wire
        wire: usize,
        /// Width of the circuit
        nqubits: usize,
    },

    /// Parameters that are inconsistent with the operation requested.
    #[error("Invalid Operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// General error encountered by the state-vector simulator.
    #[error("Simulation Process Error: {message}")]
    SimulationError {
        /// SimulationError failure message
        message: String,
    },
}
