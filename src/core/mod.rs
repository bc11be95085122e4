// src/core/mod.rs

//! Core data structures and types

pub mod config;
pub mod constants;
pub mod error;
pub mod matrix;
pub mod state;

// Re-export public types for convenient access via `qoracle::core::TypeName`
pub use config::SynthesisConfig;
pub use constants::oracle_constants::PI;
pub use error::{OracleError, Result};
pub use matrix::Unitary2;
pub use state::StateVector;
