//! # Numbers
//!
//! Numeric leaves of the value tree and their fixed textual form.

use crate::errors::EncodeError;
use std::fmt::Write as _;

/// Largest integer a double represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A numeric leaf.
///
/// Integers and integral floats are interchangeable on the wire: `Int(5)`,
/// `UInt(5)` and `Float(5.0)` all encode as `5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer beyond `i64::MAX`.
    UInt(u64),
    /// Double precision float.
    Float(f64),
}

impl Number {
    /// Append the canonical text of this number to `out`.
    pub fn write_canonical(&self, out: &mut String) -> Result<(), EncodeError> {
        let written = match *self {
            Number::Int(n) => write!(out, "{n}"),
            Number::UInt(n) => write!(out, "{n}"),
            Number::Float(f) => {
                if !f.is_finite() {
                    return Err(EncodeError::NonFiniteNumber(f));
                }
                if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
                    // Also folds -0.0 into 0.
                    #[allow(clippy::cast_possible_truncation)]
                    let n = f as i64;
                    write!(out, "{n}")
                } else {
                    // Shortest round-trip form; large integral values such as
                    // 1e20 keep the exponent rather than expanding to digits.
                    let n = serde_json::Number::from_f64(f)
                        .ok_or(EncodeError::NonFiniteNumber(f))?;
                    write!(out, "{n}")
                }
            }
        };
        written.map_err(|e| EncodeError::Serialization(e.to_string()))
    }

    /// Canonical text of this number.
    pub fn to_canonical(&self) -> Result<String, EncodeError> {
        let mut out = String::new();
        self.write_canonical(&mut out)?;
        Ok(out)
    }

    /// Lossy view as a double.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(n) => n as f64,
            Number::UInt(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::Int(i)
        } else if let Some(u) = n.as_u64() {
            Number::UInt(u)
        } else {
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::UInt(n)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(Number::Int(0).to_canonical().unwrap(), "0");
        assert_eq!(Number::Int(-42).to_canonical().unwrap(), "-42");
        assert_eq!(Number::UInt(u64::MAX).to_canonical().unwrap(), "18446744073709551615");
    }

    #[test]
    fn test_integral_float_matches_integer() {
        let float = Number::Float(200_000.0).to_canonical().unwrap();
        let int = Number::Int(200_000).to_canonical().unwrap();
        assert_eq!(float, "200000");
        assert_eq!(float, int);
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(Number::Float(-0.0).to_canonical().unwrap(), "0");
    }

    #[test]
    fn test_fractional_float() {
        assert_eq!(Number::Float(0.1).to_canonical().unwrap(), "0.1");
        assert_eq!(Number::Float(-1.5).to_canonical().unwrap(), "-1.5");
    }

    #[test]
    fn test_integral_float_beyond_safe_range_uses_exponent() {
        assert_eq!(Number::Float(1e20).to_canonical().unwrap(), "1e20");
        assert_eq!(Number::Float(MAX_SAFE_INTEGER).to_canonical().unwrap(), "9007199254740992");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Number::Float(f64::NAN).to_canonical(),
            Err(EncodeError::NonFiniteNumber(_))
        ));
        assert!(Number::Float(f64::NEG_INFINITY).to_canonical().is_err());
    }

    #[test]
    fn test_from_serde_number() {
        let n: serde_json::Number = serde_json::from_str("603000").unwrap();
        assert_eq!(Number::from(&n), Number::Int(603_000));

        let n: serde_json::Number = serde_json::from_str("2.5").unwrap();
        assert_eq!(Number::from(&n), Number::Float(2.5));
    }
}
