//! Kernel configuration.
//!
//! Every tunable constant of the kernel lives here: the division epsilon
//! policy, the narrowing iteration cap, and the defaults for membership-test
//! oracles. All fields default, so an empty TOML document is a valid config.
//!
//! ```toml
//! [division]
//! epsilon_floor = "1/1000000000"
//! epsilon_width_factor = "1/1000000"
//!
//! [narrowing]
//! max_iterations = 10000
//!
//! [test_function]
//! bounds = { low = "-1000000000", high = "1000000000" }
//! miss_offset = "1/1000000"
//! ```

use crate::error::ConfigError;
use crate::interval::Interval;
use crate::rational::{Rational, integer, inverse_power_of_ten, serde_str};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Iteration cap shared by every narrowing procedure unless overridden.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub division: DivisionPolicy,
    pub narrowing: NarrowingLimits,
    pub test_function: TestFunctionConfig,
}

impl KernelConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, "<inline>")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::ParseToml {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.division.epsilon_floor.is_positive() {
            return Err(ConfigError::Invalid(format!(
                "division.epsilon_floor must be positive, got {}",
                self.division.epsilon_floor
            )));
        }
        if self.division.epsilon_width_factor.is_negative() {
            return Err(ConfigError::Invalid(format!(
                "division.epsilon_width_factor must not be negative, got {}",
                self.division.epsilon_width_factor
            )));
        }
        if self.narrowing.max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "narrowing.max_iterations must be at least 1".into(),
            ));
        }
        if self.test_function.miss_offset.is_zero() {
            return Err(ConfigError::Invalid(
                "test_function.miss_offset must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// How far division pushes a zero-touching denominator away from zero.
///
/// The epsilon is `max(width(denominator) * epsilon_width_factor, epsilon_floor)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivisionPolicy {
    #[serde(with = "serde_str")]
    pub epsilon_floor: Rational,
    #[serde(with = "serde_str")]
    pub epsilon_width_factor: Rational,
}

impl DivisionPolicy {
    pub fn epsilon(&self, denominator: &Interval) -> Rational {
        let scaled = denominator.width() * &self.epsilon_width_factor;
        scaled.max(self.epsilon_floor.clone())
    }
}

impl Default for DivisionPolicy {
    fn default() -> Self {
        Self {
            epsilon_floor: inverse_power_of_ten(9),
            epsilon_width_factor: inverse_power_of_ten(6),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowingLimits {
    pub max_iterations: usize,
}

impl Default for NarrowingLimits {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Defaults for oracles built from a boolean membership test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestFunctionConfig {
    /// Starting yes-interval.
    pub bounds: Interval,

    /// Distance from the target midpoint of the point prophecy returned
    /// when the test rejects a target.
    #[serde(with = "serde_str")]
    pub miss_offset: Rational,
}

impl Default for TestFunctionConfig {
    fn default() -> Self {
        let billion = integer(1_000_000_000);
        Self {
            bounds: Interval::new(-billion.clone(), billion),
            miss_offset: inverse_power_of_ten(6),
        }
    }
}
