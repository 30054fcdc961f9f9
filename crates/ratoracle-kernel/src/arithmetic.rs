//! Arithmetic combinators over oracles.
//!
//! Each combinator reads its operands' current yes-intervals once, combines
//! them with interval arithmetic, and returns a new oracle whose prophecy
//! restates the combined interval. Later refinement of the operands does not
//! flow into an already-built result; rebuild it to pick that up.
//!
//! Division is the exception in two ways. A denominator touching zero is
//! pushed away from zero before dividing (with a warning to the sink), and
//! the resulting oracle keeps a live handle on the denominator so every
//! query that reaches its prophecy re-checks the denominator.

use crate::config::DivisionPolicy;
use crate::diagnostics::DiagnosticSink;
use crate::error::OracleError;
use crate::interval::Interval;
use crate::oracle::{Operand, Oracle, Prophecy, SharedOracle};
use crate::rational::Rational;
use num_traits::{Signed, Zero};

pub fn negate(a: &impl Operand) -> Oracle {
    Oracle::constant(a.current_yes().negate())
}

pub fn add(a: &impl Operand, b: &impl Operand) -> Oracle {
    Oracle::constant(a.current_yes().add(&b.current_yes()))
}

/// `a - b`.
pub fn subtract(a: &impl Operand, b: &impl Operand) -> Oracle {
    Oracle::constant(a.current_yes().sub(&b.current_yes()))
}

pub fn multiply(a: &impl Operand, b: &impl Operand) -> Oracle {
    Oracle::constant(a.current_yes().mul(&b.current_yes()))
}

/// `numer / denom` under the default [`DivisionPolicy`].
pub fn divide(
    numer: &impl Operand,
    denom: &SharedOracle,
    sink: &dyn DiagnosticSink,
) -> Result<Oracle, OracleError> {
    divide_with(numer, denom, &DivisionPolicy::default(), sink)
}

/// `numer / denom`.
///
/// Fails with [`OracleError::DivisionByZero`] when the denominator is known
/// to be exactly zero. A denominator that merely contains zero is reported
/// to `sink` and contracted away from zero by the policy's epsilon:
///
/// - `high <= 0`: `high` moves down by epsilon
/// - `low >= 0`: `low` moves up by epsilon
/// - straddling: the side with the larger magnitude is kept and the other
///   bound is clamped to `∓epsilon` (ties keep the positive side)
pub fn divide_with(
    numer: &impl Operand,
    denom: &SharedOracle,
    policy: &DivisionPolicy,
    sink: &dyn DiagnosticSink,
) -> Result<Oracle, OracleError> {
    let denominator = denom.yes();
    if denominator.low().is_zero() && denominator.high().is_zero() {
        return Err(OracleError::DivisionByZero);
    }
    if denominator.contains_zero() {
        sink.warn(&format!(
            "division setup warning: denominator yes-interval {denominator} contains zero"
        ));
    }

    let safe = avoid_zero(&denominator, policy);
    let quotient = numer.current_yes().div(&safe)?;
    tracing::debug!(
        denominator = %denominator,
        contracted = %safe,
        quotient = %quotient,
        "built quotient oracle"
    );

    Ok(Oracle::new(
        quotient.clone(),
        QuotientGuard {
            quotient,
            denominator: denom.clone(),
        },
    ))
}

fn avoid_zero(denominator: &Interval, policy: &DivisionPolicy) -> Interval {
    if !denominator.contains_zero() {
        return denominator.clone();
    }
    let epsilon = policy.epsilon(denominator);
    let (low, high) = denominator.clone().into_bounds();

    if !high.is_positive() {
        Interval::new(low, high - epsilon)
    } else if !low.is_negative() {
        Interval::new(low + epsilon, high)
    } else if low.abs() > high.abs() {
        Interval::new(low, -epsilon)
    } else {
        Interval::new(epsilon, high)
    }
}

/// Prophecy of a quotient oracle.
///
/// Restates the quotient computed at construction, but first re-reads the
/// denominator's live yes-interval. If that still contains zero after
/// tightening both ends by `|delta|`, the query fails.
pub struct QuotientGuard {
    quotient: Interval,
    denominator: SharedOracle,
}

impl Prophecy for QuotientGuard {
    fn prophesy(&mut self, _target: &Interval, delta: &Rational) -> Result<Interval, OracleError> {
        let live = self.denominator.yes();
        if live.contains_zero() {
            let slack = delta.abs();
            let low = live.low() + &slack;
            let high = live.high() - &slack;
            if !low.is_positive() && !high.is_negative() {
                return Err(OracleError::DivisionByZeroUnderDelta {
                    denominator: live,
                    delta: delta.clone(),
                });
            }
        }
        Ok(self.quotient.clone())
    }
}
