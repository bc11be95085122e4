// src/synthesis/linear_mc.rs

//! Multi-controlled single-qubit unitaries with depth linear in the number
//! of controls.

use tracing::debug;

use super::ladders::{build_p_ladder, build_q_ladder, power_of_two};
use super::root::UnitaryRoots;
use crate::circuits::Circuit;
use crate::core::{Result, SynthesisConfig, Unitary2};
use crate::validation::check_control_set;

/// Builds the block applying `unitary` to `target` iff every wire in
/// `controls` is |1⟩, with the default [`SynthesisConfig`].
///
/// The block has `controls.len() + 1` wires: block wire `i` stands for
/// `(controls ++ [target])[i]`, so the target is always the last block wire.
/// Splice it with [`Circuit::compose`] at that mapping, or use
/// [`apply_linear_multi_control`].
///
/// # Errors
/// * `MalformedControlSet` for an empty control list, a repeated control or
///   a target listed among the controls.
/// * `DegenerateUnitary` if `unitary` is not unitary.
/// * `InvalidOperation` if there are too many controls for a `u64` root order.
///
/// # Examples
/// ```
/// use qoracle::core::matrix::pauli_x;
/// use qoracle::synthesis::linear_multi_control;
///
/// let toffoli = linear_multi_control(&pauli_x(), &[0, 1], 2).unwrap();
/// assert_eq!(toffoli.nqubits(), 3);
/// assert_eq!(toffoli.name(), "MC_T2");
/// ```
pub fn linear_multi_control(unitary: &Unitary2, controls: &[usize], target: usize) -> Result<Circuit> {
    linear_multi_control_with(unitary, controls, target, &SynthesisConfig::default())
}

/// [`linear_multi_control`] with explicit numeric settings.
pub fn linear_multi_control_with(
    unitary: &Unitary2,
    controls: &[usize],
    target: usize,
    config: &SynthesisConfig,
) -> Result<Circuit> {
    check_control_set(controls, target)?;
    let roots = UnitaryRoots::with_config(unitary, config)?;

    let nqubits = controls.len() + 1;
    let last = nqubits - 1;
    let mut block = Circuit::new(nqubits, format!("MC_T{}", target));

    build_p_ladder(&roots, nqubits, &mut block, false)?;

    let order = power_of_two(nqubits.saturating_sub(2))?;
    block.controlled(&roots.root_gate(order, false)?, 0, last)?;

    build_q_ladder(last, &mut block, false)?;
    build_p_ladder(&roots, nqubits, &mut block, true)?;
    build_q_ladder(last, &mut block, true)?;

    debug!(
        controls = controls.len(),
        target,
        ops = block.len(),
        depth = block.depth(),
        "synthesized multi-controlled block"
    );
    Ok(block)
}

/// Appends the multi-controlled `unitary` to `circuit`.
///
/// Nothing is appended unless synthesis and composition both succeed.
pub fn apply_linear_multi_control(
    circuit: &mut Circuit,
    unitary: &Unitary2,
    controls: &[usize],
    target: usize,
) -> Result<()> {
    let block = linear_multi_control(unitary, controls, target)?;
    let mut wires = controls.to_vec();
    wires.push(target);
    circuit.compose(&block, &wires)
}
