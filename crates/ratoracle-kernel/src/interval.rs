//! Closed intervals over exact rationals.
//!
//! An [`Interval`] is always normalized: `low <= high`. Every constructor
//! and every operation re-establishes that invariant, so callers never see
//! a reversed pair.

use crate::error::OracleError;
use crate::rational::{Rational, serde_str};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A closed, exact range `[low, high]` of possible true values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    #[serde(with = "serde_str")]
    low: Rational,
    #[serde(with = "serde_str")]
    high: Rational,
}

impl Interval {
    /// Build an interval from two endpoints in either order.
    pub fn new(a: Rational, b: Rational) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The degenerate interval `[q, q]`.
    pub fn point(q: Rational) -> Self {
        Self {
            low: q.clone(),
            high: q,
        }
    }

    pub fn low(&self) -> &Rational {
        &self.low
    }

    pub fn high(&self) -> &Rational {
        &self.high
    }

    pub fn into_bounds(self) -> (Rational, Rational) {
        (self.low, self.high)
    }

    pub fn width(&self) -> Rational {
        &self.high - &self.low
    }

    pub fn midpoint(&self) -> Rational {
        (&self.low + &self.high) / Rational::from_integer(2.into())
    }

    pub fn is_point(&self) -> bool {
        self.low == self.high
    }

    /// Whether `q` lies in `[low, high]`.
    pub fn contains(&self, q: &Rational) -> bool {
        &self.low <= q && q <= &self.high
    }

    /// Whether zero lies in the interval, endpoints included.
    pub fn contains_zero(&self) -> bool {
        self.contains(&Rational::zero())
    }

    /// The overlap of two intervals, or `None` when they are disjoint.
    ///
    /// Intervals that merely touch intersect in a point.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let low = (&self.low).max(&other.low);
        let high = (&self.high).min(&other.high);
        (low <= high).then(|| Interval {
            low: low.clone(),
            high: high.clone(),
        })
    }

    pub fn intersects(&self, other: &Interval) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// Widen by `|delta|` on each side.
    pub fn expand(&self, delta: &Rational) -> Interval {
        let d = delta.abs();
        Interval {
            low: &self.low - &d,
            high: &self.high + &d,
        }
    }

    /// Whether `self` overlaps `target` once the target is widened by `|delta|`.
    pub fn within_delta(&self, target: &Interval, delta: &Rational) -> bool {
        self.intersects(&target.expand(delta))
    }

    /// Clamp `q` into `[low, high]`.
    pub fn clamp(&self, q: Rational) -> Rational {
        if q < self.low {
            self.low.clone()
        } else if q > self.high {
            self.high.clone()
        } else {
            q
        }
    }

    /// Split at `q` (clamped into the interval) into `[low, q]` and `[q, high]`.
    pub fn split_at(&self, q: Rational) -> (Interval, Interval) {
        let cut = self.clamp(q);
        (
            Interval {
                low: self.low.clone(),
                high: cut.clone(),
            },
            Interval {
                low: cut,
                high: self.high.clone(),
            },
        )
    }

    pub fn negate(&self) -> Interval {
        Interval {
            low: -&self.high,
            high: -&self.low,
        }
    }

    pub fn add(&self, other: &Interval) -> Interval {
        Interval {
            low: &self.low + &other.low,
            high: &self.high + &other.high,
        }
    }

    pub fn sub(&self, other: &Interval) -> Interval {
        Interval {
            low: &self.low - &other.high,
            high: &self.high - &other.low,
        }
    }

    pub fn mul(&self, other: &Interval) -> Interval {
        Self::hull([
            &self.low * &other.low,
            &self.low * &other.high,
            &self.high * &other.low,
            &self.high * &other.high,
        ])
    }

    /// Interval quotient. The divisor must exclude zero.
    pub fn div(&self, divisor: &Interval) -> Result<Interval, OracleError> {
        if divisor.contains_zero() {
            return Err(OracleError::DivisorContainsZero {
                divisor: divisor.clone(),
            });
        }
        Ok(Self::hull([
            &self.low / &divisor.low,
            &self.low / &divisor.high,
            &self.high / &divisor.low,
            &self.high / &divisor.high,
        ]))
    }

    fn hull(candidates: [Rational; 4]) -> Interval {
        let [first, rest @ ..] = candidates;
        let (low, high) = rest
            .into_iter()
            .fold((first.clone(), first), |(low, high), q| {
                (low.min(q.clone()), high.max(q))
            });
        Interval { low, high }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(with = "serde_str")]
            low: Rational,
            #[serde(with = "serde_str")]
            high: Rational,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Interval::new(raw.low, raw.high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::{integer, rational};

    fn iv(a: i64, b: i64) -> Interval {
        Interval::new(integer(a), integer(b))
    }

    #[test]
    fn new_normalizes() {
        let i = iv(5, 1);
        assert_eq!(i.low(), &integer(1));
        assert_eq!(i.high(), &integer(5));
    }

    #[test]
    fn width_and_midpoint() {
        let i = iv(1, 4);
        assert_eq!(i.width(), integer(3));
        assert_eq!(i.midpoint(), rational(5, 2));
        assert!(Interval::point(integer(7)).is_point());
    }

    #[test]
    fn intersection_cases() {
        assert_eq!(iv(0, 10).intersect(&iv(2, 4)), Some(iv(2, 4)));
        assert_eq!(iv(0, 2).intersect(&iv(2, 4)), Some(iv(2, 2)));
        assert_eq!(iv(0, 1).intersect(&iv(2, 4)), None);
        assert!(!iv(0, 1).intersects(&iv(2, 4)));
    }

    #[test]
    fn expand_uses_absolute_delta() {
        assert_eq!(iv(1, 2).expand(&integer(-1)), iv(0, 3));
        assert!(iv(0, 1).within_delta(&iv(2, 3), &integer(1)));
        assert!(!iv(0, 1).within_delta(&iv(3, 4), &integer(1)));
    }

    #[test]
    fn arithmetic() {
        let a = iv(1, 2);
        let b = iv(3, 4);
        assert_eq!(a.add(&b), iv(4, 6));
        assert_eq!(b.sub(&a), iv(1, 3));
        assert_eq!(a.mul(&b), iv(3, 8));
        assert_eq!(a.negate(), iv(-2, -1));
        assert_eq!(iv(-2, 3).mul(&iv(-1, 4)), iv(-8, 12));
    }

    #[test]
    fn division_requires_zero_free_divisor() {
        let q = iv(1, 2).div(&iv(2, 4)).unwrap();
        assert_eq!(q, Interval::new(rational(1, 4), integer(1)));
        assert!(matches!(
            iv(1, 2).div(&iv(-1, 1)),
            Err(OracleError::DivisorContainsZero { .. })
        ));
    }

    #[test]
    fn split_clamps_cut_point() {
        let (left, right) = iv(0, 10).split_at(integer(20));
        assert_eq!(left, iv(0, 10));
        assert_eq!(right, iv(10, 10));
    }

    #[test]
    fn serde_renormalizes() {
        let json = serde_json::json!({ "low": "3", "high": "1/2" });
        let i: Interval = serde_json::from_value(json).unwrap();
        assert_eq!(i, Interval::new(rational(1, 2), integer(3)));
        let back = serde_json::to_value(&i).unwrap();
        assert_eq!(back, serde_json::json!({ "low": "1/2", "high": "3" }));
    }

    #[test]
    fn display() {
        let interval = Interval::new(rational(-1, 3), integer(2));
        insta::assert_snapshot!(interval.to_string(), @"[-1/3, 2]");
    }
}
