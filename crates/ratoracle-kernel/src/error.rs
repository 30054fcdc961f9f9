//! Error types for oracle construction and querying.

use crate::interval::Interval;
use crate::rational::Rational;

/// Errors raised by the oracle protocol and its primitives.
///
/// Only the two division variants can come out of a well-formed oracle
/// network; the rest signal misuse of the primitives or a failing custom
/// prophecy.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// The denominator's yes-interval is exactly `[0, 0]`.
    #[error("division by zero: denominator is known to be zero")]
    DivisionByZero,

    /// At query time the live denominator still spans zero once tightened
    /// by the requested delta.
    #[error(
        "division by zero under requested delta: denominator {denominator} still spans zero at delta {delta}"
    )]
    DivisionByZeroUnderDelta {
        denominator: Interval,
        delta: Rational,
    },

    /// Primitive interval division was handed a divisor containing zero.
    #[error("interval division with divisor {divisor} containing zero")]
    DivisorContainsZero { divisor: Interval },

    /// Text could not be read as an exact rational.
    #[error("invalid rational: {0}")]
    InvalidRational(String),

    /// A caller-supplied prophecy failed.
    #[error("prophecy failed: {0}")]
    Compute(String),
}

/// Errors loading or validating a [`KernelConfig`](crate::config::KernelConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
