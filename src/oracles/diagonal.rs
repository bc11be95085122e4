// src/oracles/diagonal.rs

//! Less-than oracle written directly as a diagonal unitary.
//!
//! Needs `2^n` phases, so it only serves as a reference for small registers.

use num_complex::Complex;
use tracing::debug;

use super::check_register;
use super::threshold::Threshold;
use crate::circuits::Circuit;
use crate::core::Result;
use crate::core::state::dimension;

/// `len` entries, the first `number` of them −1 and the rest +1.
///
/// A `number` beyond `len` marks every entry.
pub fn array_less_than(number: u64, len: usize) -> Vec<f64> {
    let marked = usize::try_from(number).map_or(len, |n| n.min(len));
    let mut signs = vec![-1.0; marked];
    signs.resize(len, 1.0);
    signs
}

/// Less-than oracle as a single [`Diagonal`](crate::operations::Operation::Diagonal)
/// operation over all wires. The default name is `"diag < N"`.
///
/// # Errors
/// Same as [`oracle_less_than`](super::oracle_less_than), plus
/// `SimulationError` when `2^nqubits` overflows `usize`.
pub fn diagonal_less_than(threshold: impl Into<Threshold>, nqubits: usize, name: Option<&str>) -> Result<Circuit> {
    check_register(nqubits)?;
    let number = threshold.into().resolve(nqubits)?;
    let name = name.map_or_else(|| format!("diag < {}", number), str::to_string);

    let phases: Vec<Complex<f64>> = array_less_than(number, dimension(nqubits)?)
        .into_iter()
        .map(|sign| Complex::new(sign, 0.0))
        .collect();

    let mut circuit = Circuit::new(nqubits, name);
    circuit.diagonal(phases, (0..nqubits).collect())?;
    debug!(number, nqubits, "built diagonal less-than oracle");
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Simulator;

    #[test]
    fn test_array_less_than() {
        assert_eq!(array_less_than(2, 4), vec![-1.0, -1.0, 1.0, 1.0]);
        assert_eq!(array_less_than(0, 3), vec![1.0, 1.0, 1.0]);
        assert_eq!(array_less_than(9, 2), vec![-1.0, -1.0]);
    }

    #[test]
    fn test_diagonal_oracle_marks_prefix() -> Result<()> {
        let oracle = diagonal_less_than(42u64, 6, Some("Diagonal Oracle"))?;
        assert_eq!(oracle.len(), 1);
        assert_eq!(oracle.name(), "Diagonal Oracle");
        let marked = Simulator::new().marked_states(&oracle)?;
        assert_eq!(marked, (0..42).collect::<Vec<_>>());
        Ok(())
    }
}
