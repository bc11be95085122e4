// src/synthesis/mod.rs

//! Linear-depth synthesis of multi-controlled single-qubit unitaries.
//!
//! The block for `n = controls + 1` wires is, in order: the P ladder, the
//! root `U^(1/2^(n-2))` controlled on wire 0, the Q ladder over the control
//! wires, then the inverse P ladder and inverse Q ladder.

mod ladders;
mod linear_mc;
mod root;

pub use ladders::{QubitPair, build_p_ladder, build_q_ladder};
pub use linear_mc::{apply_linear_multi_control, linear_multi_control, linear_multi_control_with};
pub use root::{UnitaryRoots, root_label, root_power, root_power_gate};
