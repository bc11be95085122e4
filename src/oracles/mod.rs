// src/oracles/mod.rs

//! Phase oracles for integer comparisons.
//!
//! Every oracle maps `|x>` to `-|x>` when the integer `x` satisfies its
//! comparison and leaves it unchanged otherwise. Wire `w` carries bit `w` of
//! `x`.

mod composite;
mod diagonal;
mod less_than;
mod threshold;

pub use composite::{oracle_greater_than, oracle_interval};
pub use diagonal::{array_less_than, diagonal_less_than};
pub use less_than::{multi_controlled_z, oracle_less_than};
pub use threshold::{Threshold, bit_length, to_binary};

use crate::core::{OracleError, Result};

fn check_register(nqubits: usize) -> Result<()> {
    if nqubits == 0 {
        return Err(OracleError::InvalidOperation {
            message: "An oracle needs at least one qubit".to_string(),
        });
    }
    Ok(())
}
