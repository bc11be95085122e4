// src/oracles/composite.rs

//! Greater-than and interval oracles, composed from less-than oracles.

use tracing::debug;

use super::check_register;
use super::less_than::oracle_less_than;
use super::threshold::{Threshold, bit_length};
use crate::circuits::Circuit;
use crate::core::Result;

/// Z, X, Z, X on wire 0: `(ZX)² = -I`, a global phase of −1.
fn flip_global_phase(circuit: &mut Circuit) -> Result<()> {
    circuit.z(0)?;
    circuit.x(0)?;
    circuit.z(0)?;
    circuit.x(0)
}

/// Oracle flipping the phase of every basis state `|x>` with `x > threshold`.
///
/// Built as `less_than(threshold + 1)` followed by a global phase of −1,
/// which turns "marks `x <= N`" into "marks `x > N`". When `threshold + 1`
/// does not fit in the register nothing is greater and the result is the
/// empty circuit. The default name is `" > N"`.
pub fn oracle_greater_than(threshold: impl Into<Threshold>, nqubits: usize, name: Option<&str>) -> Result<Circuit> {
    check_register(nqubits)?;
    let number = threshold.into().resolve(nqubits)?;
    let name = name.map_or_else(|| format!(" > {}", number), str::to_string);

    let Some(successor) = number.checked_add(1).filter(|s| bit_length(*s) <= nqubits) else {
        debug!(number, nqubits, "greater-than the largest basis state marks nothing");
        return Ok(Circuit::new(nqubits, name));
    };

    let mut circuit = oracle_less_than(successor, nqubits, Some(name.as_str()))?;
    flip_global_phase(&mut circuit)?;
    Ok(circuit)
}

/// Oracle flipping the phase of every basis state `|x>` with
/// `lower < x < upper`.
///
/// Less-than `upper` and greater-than `lower` together flip every state
/// outside the open interval once and every state inside twice; a final
/// global phase of −1 leaves only the inside marked. An empty interval
/// (`lower >= upper`) gives the empty circuit. The default name is
/// `"(lower,upper)"`.
///
/// # Examples
/// ```
/// use qoracle::Simulator;
/// use qoracle::oracles::oracle_interval;
///
/// let oracle = oracle_interval(2u64, 6u64, 3, None).unwrap();
/// assert_eq!(oracle.name(), "(2,6)");
/// assert_eq!(Simulator::new().marked_states(&oracle).unwrap(), vec![3, 4, 5]);
/// ```
pub fn oracle_interval(
    lower: impl Into<Threshold>,
    upper: impl Into<Threshold>,
    nqubits: usize,
    name: Option<&str>,
) -> Result<Circuit> {
    check_register(nqubits)?;
    let lower = lower.into().resolve(nqubits)?;
    let upper = upper.into().resolve(nqubits)?;
    let name = name.map_or_else(|| format!("({},{})", lower, upper), str::to_string);
    let mut circuit = Circuit::new(nqubits, name);

    if lower >= upper {
        debug!(lower, upper, "empty interval marks nothing");
        return Ok(circuit);
    }

    let wires: Vec<usize> = (0..nqubits).collect();
    circuit.compose(&oracle_less_than(upper, nqubits, None)?, &wires)?;
    circuit.compose(&oracle_greater_than(lower, nqubits, None)?, &wires)?;
    flip_global_phase(&mut circuit)?;

    debug!(lower, upper, nqubits, ops = circuit.len(), "built interval oracle");
    Ok(circuit)
}
