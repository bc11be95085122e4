// src/oracles/less_than.rs

//! The strictly-less-than phase oracle, built bit by bit from
//! multi-controlled Z gates.

use tracing::debug;

use super::threshold::{Threshold, to_binary};
use super::check_register;
use crate::circuits::Circuit;
use crate::core::matrix::pauli_z;
use crate::core::{OracleError, Result};
use crate::synthesis::linear_multi_control;

/// Z on wire `nqubits - 1` controlled by every other wire.
///
/// Marks exactly the all-ones basis state. The block is symmetric in its
/// wires, so callers may map it onto any ordering.
///
/// # Errors
/// `InvalidOperation` for fewer than two wires.
pub fn multi_controlled_z(nqubits: usize) -> Result<Circuit> {
    if nqubits < 2 {
        return Err(OracleError::InvalidOperation {
            message: format!("A multi-controlled Z needs at least 2 qubits, got {}", nqubits),
        });
    }
    let controls: Vec<usize> = (0..nqubits - 1).collect();
    let mut block = linear_multi_control(&pauli_z(), &controls, nqubits - 1)?;
    block.set_name(format!(" CZ ({})", nqubits));
    Ok(block)
}

/// Oracle flipping the phase of every basis state `|x>` with `x < threshold`.
///
/// The threshold is written with `nqubits` bits, most significant bit on
/// wire `nqubits - 1`, and its trailing zeros are dropped. Walking the
/// remaining bits from the top, a 1 at position `p` marks all states that
/// agree with the threshold above `p` and hold 0 at `p`; a multi-controlled Z
/// over the top `p + 1` wires does that once the agreeing prefix is flipped
/// to all ones.
///
/// A threshold of 0 gives an empty circuit. The default name is `" < N "`.
///
/// # Errors
/// * `InvalidOperation` for a zero-width register.
/// * `InvalidThreshold` or `InvalidWidth` from resolving `threshold`.
///
/// # Examples
/// ```
/// use qoracle::Simulator;
/// use qoracle::oracles::oracle_less_than;
///
/// let oracle = oracle_less_than(5u64, 3, None).unwrap();
/// let marked = Simulator::new().marked_states(&oracle).unwrap();
/// assert_eq!(marked, vec![0, 1, 2, 3, 4]);
/// ```
pub fn oracle_less_than(threshold: impl Into<Threshold>, nqubits: usize, name: Option<&str>) -> Result<Circuit> {
    check_register(nqubits)?;
    let number = threshold.into().resolve(nqubits)?;
    let name = name.map_or_else(|| format!(" < {} ", number), str::to_string);
    let mut circuit = Circuit::new(nqubits, name);

    let binary = to_binary(number, nqubits)?;
    let bits: Vec<bool> = binary.trim_end_matches('0').chars().map(|c| c == '1').collect();
    let Some((&leading, rest)) = bits.split_first() else {
        debug!(nqubits, "less-than 0 marks nothing");
        return Ok(circuit);
    };

    let top = nqubits - 1;
    circuit.x(top)?;
    if leading {
        circuit.z(top)?;
        circuit.x(top)?;
    }

    for (offset, &bit) in rest.iter().enumerate() {
        let position = offset + 1;
        let wire = top - position;
        circuit.x(wire)?;
        if bit {
            let mcz = multi_controlled_z(position + 1)?;
            let wires: Vec<usize> = (wire..=top).rev().collect();
            circuit.compose(&mcz, &wires)?;
            circuit.x(wire)?;
        }
    }

    // undo the flips left on zero bits
    for (position, &bit) in bits.iter().enumerate() {
        if !bit {
            circuit.x(top - position)?;
        }
    }

    debug!(number, nqubits, ops = circuit.len(), depth = circuit.depth(), "built less-than oracle");
    Ok(circuit)
}
