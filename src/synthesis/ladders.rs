// src/synthesis/ladders.rs

//! The two gate ladders of the linear multi-controlled construction.
//!
//! The P ladder spreads fractional powers of `U` from the controls onto the
//! target. The Q ladder is a cascade of controlled X-rotations among the
//! controls that cancels the relative phases the P ladder leaves behind.
//! Direct and inverse passes of each ladder visit wires in mirrored order and
//! must stay exact mirrors of each other.

use std::cmp::Reverse;

use tracing::trace;

use super::root::UnitaryRoots;
use crate::circuits::Circuit;
use crate::core::{OracleError, PI, Result};

/// A (control, target) pair of the Q ladder, `control < target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QubitPair {
    /// Controlling wire.
    pub control: usize,
    /// Rotated wire.
    pub target: usize,
}

impl QubitPair {
    /// Sort key of the ladder: the sum of both wire indices.
    pub fn index_sum(&self) -> usize {
        self.control + self.target
    }

    /// `target - control`, one less when the pair starts at wire 0.
    pub fn exponent(&self) -> usize {
        let distance = self.target - self.control;
        if self.control == 0 { distance - 1 } else { distance }
    }

    /// `π / 2^exponent`, the magnitude of this pair's rotation.
    pub fn turn(&self) -> f64 {
        PI / 2f64.powi(self.exponent() as i32)
    }
}

/// All pairs with `start <= control < target < nqubits`, target-major.
fn qubit_pairs(nqubits: usize, start: usize) -> Vec<QubitPair> {
    (0..nqubits)
        .flat_map(|target| (start..target).map(move |control| QubitPair { control, target }))
        .collect()
}

/// `2^exponent` as a root order.
pub(crate) fn power_of_two(exponent: usize) -> Result<u64> {
    u32::try_from(exponent)
        .ok()
        .and_then(|e| 1u64.checked_shl(e))
        .ok_or_else(|| OracleError::InvalidOperation {
            message: format!("Root order 2^{} does not fit in 64 bits; too many controls", exponent),
        })
}

/// Appends the P ladder to `block`.
///
/// For every control wire `k` in `1..=nqubits-2` a gate
/// `U^(1/2^(nqubits-1-k))` (its inverse when `inverse` is set) controlled on
/// `k` and targeting wire `nqubits-1`. Direct order is descending `k`,
/// inverse order ascending.
pub fn build_p_ladder(roots: &UnitaryRoots, nqubits: usize, block: &mut Circuit, inverse: bool) -> Result<()> {
    let target = nqubits.saturating_sub(1);
    let controls: Vec<usize> = if inverse {
        (1..target).collect()
    } else {
        (1..target).rev().collect()
    };

    for k in controls {
        let order = power_of_two(nqubits - 1 - k)?;
        block.controlled(&roots.root_gate(order, inverse)?, k, target)?;
    }
    trace!(nqubits, inverse, "appended P ladder");
    Ok(())
}

/// Appends the Q ladder over wires `0..nqubits` to `block`.
///
/// Pass 1 rotates by `+π/2^e`, controls starting at 1 (inverse) or 0
/// (direct), pairs by descending index sum. Pass 2 rotates by `-π/2^e`,
/// controls starting at 0 (inverse) or 1 (direct), pairs by ascending index
/// sum. Equal sums keep generation order; such pairs never share a wire.
pub fn build_q_ladder(nqubits: usize, block: &mut Circuit, inverse: bool) -> Result<()> {
    let mut pairs = qubit_pairs(nqubits, if inverse { 1 } else { 0 });
    pairs.sort_by_key(|pair| Reverse(pair.index_sum()));
    for pair in &pairs {
        block.crx(pair.turn(), pair.control, pair.target)?;
    }

    let mut pairs = qubit_pairs(nqubits, if inverse { 0 } else { 1 });
    pairs.sort_by_key(|pair| pair.index_sum());
    for pair in &pairs {
        block.crx(-pair.turn(), pair.control, pair.target)?;
    }

    trace!(nqubits, inverse, "appended Q ladder");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::pauli_z;
    use crate::operations::Operation;

    fn crx_pairs(block: &Circuit) -> Vec<(usize, usize, f64)> {
        block
            .operations()
            .iter()
            .filter_map(|op| match op {
                Operation::Crx { control, target, theta } => Some((*control, *target, *theta)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_pair_exponent_rule() {
        assert_eq!(QubitPair { control: 0, target: 1 }.exponent(), 0);
        assert_eq!(QubitPair { control: 0, target: 3 }.exponent(), 2);
        assert_eq!(QubitPair { control: 1, target: 3 }.exponent(), 2);
        assert_eq!(QubitPair { control: 2, target: 3 }.exponent(), 1);
    }

    #[test]
    fn test_p_ladder_orders_are_mirrored() -> Result<()> {
        let roots = UnitaryRoots::new(&pauli_z())?;
        let mut direct = Circuit::new(5, "p");
        build_p_ladder(&roots, 5, &mut direct, false)?;
        let mut inverse = Circuit::new(5, "p_inv");
        build_p_ladder(&roots, 5, &mut inverse, true)?;

        let controls = |c: &Circuit| -> Vec<(usize, String)> {
            c.operations()
                .iter()
                .map(|op| match op {
                    Operation::ControlledUnitary { control, target, label, .. } => {
                        assert_eq!(*target, 4);
                        (*control, label.clone())
                    }
                    other => panic!("unexpected operation {:?}", other),
                })
                .collect()
        };

        assert_eq!(
            controls(&direct),
            vec![(3, "U^1/2".to_string()), (2, "U^1/4".to_string()), (1, "U^1/8".to_string())]
        );
        assert_eq!(
            controls(&inverse),
            vec![(1, "Udg^1/8".to_string()), (2, "Udg^1/4".to_string()), (3, "Udg^1/2".to_string())]
        );
        Ok(())
    }

    #[test]
    fn test_p_ladder_lifts_root_gates() -> Result<()> {
        let u = crate::core::matrix::rx(0.4);
        let roots = UnitaryRoots::new(&u)?;
        let mut block = Circuit::new(4, "p");
        build_p_ladder(&roots, 4, &mut block, true)?;
        for (op, (control, order)) in block.operations().iter().zip([(1, 4u64), (2, 2)]) {
            let gate = crate::synthesis::root_power_gate(&u, order, true)?;
            let Operation::Unitary { matrix, .. } = &gate.operations()[0] else {
                panic!("root gate holds {:?}", gate.operations());
            };
            assert_eq!(
                op,
                &Operation::ControlledUnitary { control, target: 3, matrix: *matrix, label: gate.name().to_string() }
            );
        }
        assert_eq!(block.len(), 2);
        Ok(())
    }

    #[test]
    fn test_p_ladder_is_empty_for_two_wires() -> Result<()> {
        let roots = UnitaryRoots::new(&pauli_z())?;
        let mut block = Circuit::new(2, "p");
        build_p_ladder(&roots, 2, &mut block, false)?;
        assert!(block.is_empty());
        Ok(())
    }

    #[test]
    fn test_q_ladder_direct_sequence() -> Result<()> {
        let mut block = Circuit::new(3, "q");
        build_q_ladder(3, &mut block, false)?;
        let expected = vec![
            // pass 1, descending sums: (1,2) sum 3, (0,2) sum 2, (0,1) sum 1
            (1, 2, PI / 2.0),
            (0, 2, PI / 2.0),
            (0, 1, PI),
            // pass 2, controls from 1: only (1,2)
            (1, 2, -PI / 2.0),
        ];
        assert_eq!(crx_pairs(&block), expected);
        Ok(())
    }

    #[test]
    fn test_q_ladder_inverse_sequence() -> Result<()> {
        let mut block = Circuit::new(3, "q_inv");
        build_q_ladder(3, &mut block, true)?;
        let expected = vec![
            // pass 1, controls from 1: only (1,2)
            (1, 2, PI / 2.0),
            // pass 2, ascending sums
            (0, 1, -PI),
            (0, 2, -PI / 2.0),
            (1, 2, -PI / 2.0),
        ];
        assert_eq!(crx_pairs(&block), expected);
        Ok(())
    }

    #[test]
    fn test_q_ladder_single_wire_is_empty() -> Result<()> {
        let mut block = Circuit::new(1, "q");
        build_q_ladder(1, &mut block, false)?;
        build_q_ladder(1, &mut block, true)?;
        assert!(block.is_empty());
        Ok(())
    }
}
