//! Oracle-guided narrowing.
//!
//! A narrowing search starts from an oracle's yes-interval, cuts it in two,
//! asks the oracle about each half (delta zero), and keeps the first half it
//! accepts, clipped to whatever the oracle knows by then. It stops once the
//! interval is no wider than the requested precision, when the oracle
//! accepts neither half, or when the iteration cap runs out. Reaching the cap
//! is not an error: the best interval so far is returned.

use crate::config::NarrowingLimits;
use crate::error::OracleError;
use crate::interval::Interval;
use crate::oracle::{Oracle, Prophecy, SharedOracle};
use crate::rational::Rational;
use num_traits::{Signed, Zero};

/// Halve the oracle's yes-interval until its width is at most `|precision|`.
pub fn bisect(oracle: &mut Oracle, precision: &Rational) -> Result<Interval, OracleError> {
    bisect_with(oracle, precision, &NarrowingLimits::default())
}

pub fn bisect_with(
    oracle: &mut Oracle,
    precision: &Rational,
    limits: &NarrowingLimits,
) -> Result<Interval, OracleError> {
    narrow_with_cutter_limited(oracle, precision, midpoint_cutter, limits)
}

/// Narrow using `cutter` to choose each split point.
///
/// Split points outside the current interval are clamped onto its nearest
/// endpoint.
pub fn narrow_with_cutter<C>(
    oracle: &mut Oracle,
    precision: &Rational,
    cutter: C,
) -> Result<Interval, OracleError>
where
    C: FnMut(&Interval) -> Rational,
{
    narrow_with_cutter_limited(oracle, precision, cutter, &NarrowingLimits::default())
}

pub fn narrow_with_cutter_limited<C>(
    oracle: &mut Oracle,
    precision: &Rational,
    mut cutter: C,
    limits: &NarrowingLimits,
) -> Result<Interval, OracleError>
where
    C: FnMut(&Interval) -> Rational,
{
    let target_width = precision.abs();
    let exact = Rational::zero();
    let mut current = oracle.yes().clone();
    let mut iterations = 0;

    while current.width() > target_width {
        if iterations == limits.max_iterations {
            tracing::debug!(
                iterations,
                interval = %current,
                precision = %target_width,
                "narrowing stopped at iteration cap"
            );
            break;
        }
        iterations += 1;

        let (left, right) = current.split_at(cutter(&current));
        let kept = if oracle.query(&left, &exact)?.ans {
            left
        } else if oracle.query(&right, &exact)?.ans {
            right
        } else {
            tracing::debug!(interval = %current, "oracle accepted neither half");
            break;
        };
        current = kept.intersect(oracle.yes()).unwrap_or(kept);
    }

    Ok(current)
}

/// Split at the midpoint.
pub fn midpoint_cutter(interval: &Interval) -> Rational {
    interval.midpoint()
}

/// Split at `low + weight * width`; a weight of one half is plain bisection.
pub fn weighted_cutter(weight: Rational) -> impl FnMut(&Interval) -> Rational {
    move |interval: &Interval| interval.low() + interval.width() * &weight
}

/// Bisect a shared oracle, then wrap the result in a new oracle.
///
/// The new oracle starts from the narrowed interval and defers every
/// prophecy to the source oracle, so both keep learning from the same
/// evidence.
pub fn refine(oracle: &SharedOracle, precision: &Rational) -> Result<Oracle, OracleError> {
    let narrowed = oracle.with_mut(|inner| bisect(inner, precision))?;
    Ok(Oracle::new(
        narrowed,
        Delegate {
            inner: oracle.clone(),
        },
    ))
}

/// Prophecy that forwards the query to another oracle and offers the
/// interval it judged from.
pub struct Delegate {
    inner: SharedOracle,
}

impl Prophecy for Delegate {
    fn prophesy(&mut self, target: &Interval, delta: &Rational) -> Result<Interval, OracleError> {
        self.inner.query(target, delta).map(|answer| answer.cd)
    }
}
