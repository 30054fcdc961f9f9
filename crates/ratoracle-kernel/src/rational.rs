//! Exact rational numbers.
//!
//! The kernel never rounds: every endpoint, delta, and epsilon is a
//! [`BigRational`]. This module adds the constructors and the textual form
//! used by configuration files and the CLI.

use crate::error::OracleError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::str::FromStr;

/// An exact rational number in canonical form (denominator > 0).
pub type Rational = BigRational;

/// Build `numer / denom`.
///
/// # Panics
///
/// Panics if `denom` is zero, like [`BigRational::new`].
pub fn rational(numer: i64, denom: i64) -> Rational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Build the integer `n` as a rational.
pub fn integer(n: i64) -> Rational {
    BigRational::from_integer(BigInt::from(n))
}

/// `1 / 10^exp`.
pub fn inverse_power_of_ten(exp: u32) -> Rational {
    BigRational::new(BigInt::one(), num_traits::pow(BigInt::from(10), exp as usize))
}

/// Parse `a/b`, a signed integer, or a finite decimal such as `-0.25`.
pub fn parse_rational(text: &str) -> Result<Rational, OracleError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(OracleError::InvalidRational("empty input".into()));
    }
    let invalid = || OracleError::InvalidRational(text.to_string());

    if let Some((numer, denom)) = text.split_once('/') {
        let numer = BigInt::from_str(numer.trim()).map_err(|_| invalid())?;
        let denom = BigInt::from_str(denom.trim()).map_err(|_| invalid())?;
        if denom.is_zero() {
            return Err(OracleError::InvalidRational(format!(
                "{text}: zero denominator"
            )));
        }
        return Ok(BigRational::new(numer, denom));
    }

    if let Some((whole, frac)) = text.split_once('.') {
        let (negative, whole) = match whole.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, whole.strip_prefix('+').unwrap_or(whole)),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }
        let digits = format!("{whole}{frac}");
        let mut numer = BigInt::from_str(&digits).map_err(|_| invalid())?;
        if negative {
            numer = -numer;
        }
        let denom = num_traits::pow(BigInt::from(10), frac.len());
        return Ok(BigRational::new(numer, denom));
    }

    BigInt::from_str(text)
        .map(BigRational::from_integer)
        .map_err(|_| invalid())
}

/// Serde adapter storing a rational as its canonical string (`n/d`).
///
/// Deserialization also accepts bare integers, so TOML can say
/// `max = 1000` as well as `epsilon = "1/1000000000"`.
pub mod serde_str {
    use super::{Rational, parse_rational};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Int(i64),
    }

    pub fn serialize<S: Serializer>(value: &Rational, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rational, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Text(text) => parse_rational(&text).map_err(serde::de::Error::custom),
            Repr::Int(n) => Ok(super::integer(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fraction() {
        assert_eq!(parse_rational("6/8").unwrap(), rational(3, 4));
        assert_eq!(parse_rational(" -1/3 ").unwrap(), rational(-1, 3));
    }

    #[test]
    fn parse_integer_and_decimal() {
        assert_eq!(parse_rational("42").unwrap(), integer(42));
        assert_eq!(parse_rational("0.25").unwrap(), rational(1, 4));
        assert_eq!(parse_rational("-1.5").unwrap(), rational(-3, 2));
        assert_eq!(parse_rational(".5").unwrap(), rational(1, 2));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_rational("").is_err());
        assert!(parse_rational("1/0").is_err());
        assert!(parse_rational("abc").is_err());
        assert!(parse_rational("1.2.3").is_err());
        assert!(parse_rational(".").is_err());
    }

    #[test]
    fn inverse_powers() {
        assert_eq!(inverse_power_of_ten(0), integer(1));
        assert_eq!(inverse_power_of_ten(3), rational(1, 1000));
    }
}
