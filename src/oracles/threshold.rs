// src/oracles/threshold.rs

//! Comparison thresholds and their binary expansion.

use std::fmt;

use tracing::{debug, trace};

use crate::core::{OracleError, Result};

/// The number an oracle compares basis states against.
///
/// Accepts either an integer or its binary form written most significant bit
/// first, e.g. `Threshold::from(42u64)` and `Threshold::from("101010")` are the
/// same threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Threshold {
    /// Plain integer value.
    Number(u64),
    /// Binary digits, most significant first. Leading zeros are allowed.
    Binary(String),
}

impl Threshold {
    /// The integer value, checked against a register of `nqubits` wires.
    ///
    /// # Errors
    /// * `InvalidThreshold` for an empty string, a character other than `0`
    ///   or `1`, or a value beyond `u64`.
    /// * `InvalidWidth` if the value needs more than `nqubits` bits.
    pub fn resolve(&self, nqubits: usize) -> Result<u64> {
        let number = match self {
            Threshold::Number(n) => *n,
            Threshold::Binary(digits) => parse_binary(digits)?,
        };
        let required = bit_length(number);
        if required > nqubits {
            debug!(threshold = %self, nqubits, required, "threshold does not fit the register");
            return Err(OracleError::InvalidWidth { number, nqubits, required });
        }
        trace!(threshold = %self, number, "resolved threshold");
        Ok(number)
    }
}

impl From<u64> for Threshold {
    fn from(number: u64) -> Self {
        Threshold::Number(number)
    }
}

impl From<&str> for Threshold {
    fn from(digits: &str) -> Self {
        Threshold::Binary(digits.to_string())
    }
}

impl From<String> for Threshold {
    fn from(digits: String) -> Self {
        Threshold::Binary(digits)
    }
}

/// Renders `42` for a number and `0b101010` for binary digits, as written.
impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Number(n) => write!(f, "{}", n),
            Threshold::Binary(digits) => write!(f, "0b{}", digits),
        }
    }
}

fn parse_binary(digits: &str) -> Result<u64> {
    if digits.is_empty() {
        return Err(OracleError::InvalidThreshold {
            message: "Binary threshold is empty".to_string(),
        });
    }
    if let Some(bad) = digits.chars().find(|c| *c != '0' && *c != '1') {
        return Err(OracleError::InvalidThreshold {
            message: format!("Binary threshold '{}' contains '{}'", digits, bad),
        });
    }
    u64::from_str_radix(digits, 2).map_err(|e| OracleError::InvalidThreshold {
        message: format!("Binary threshold '{}' does not fit in 64 bits: {}", digits, e),
    })
}

/// Number of bits needed to write `number`; zero needs none.
pub fn bit_length(number: u64) -> usize {
    (u64::BITS - number.leading_zeros()) as usize
}

/// `number` in binary, most significant bit first, zero-padded to exactly
/// `nbits` digits.
///
/// # Errors
/// `InvalidWidth` if `number` needs more than `nbits` bits.
///
/// # Examples
/// ```
/// use qoracle::oracles::to_binary;
///
/// assert_eq!(to_binary(42, 8).unwrap(), "00101010");
/// assert!(to_binary(42, 5).is_err());
/// ```
pub fn to_binary(number: u64, nbits: usize) -> Result<String> {
    let required = bit_length(number);
    if required > nbits {
        return Err(OracleError::InvalidWidth { number, nqubits: nbits, required });
    }
    if nbits == 0 {
        return Ok(String::new());
    }
    Ok(format!("{:0>width$b}", number, width = nbits))
}
