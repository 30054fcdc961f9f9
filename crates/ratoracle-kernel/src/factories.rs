//! Constructors for leaf oracles.

use crate::config::TestFunctionConfig;
use crate::error::OracleError;
use crate::interval::Interval;
use crate::oracle::{Oracle, Prophecy};
use crate::rational::Rational;
use num_traits::Signed;

/// An oracle that knows its value exactly: yes is `[q, q]`.
pub fn from_rational(q: Rational) -> Oracle {
    Oracle::constant(Interval::point(q))
}

/// An oracle that knows its value lies somewhere in `interval`.
pub fn from_interval(interval: Interval) -> Oracle {
    Oracle::constant(interval)
}

/// An oracle driven by a boolean membership test, starting from the default
/// broad bounds `[-10^9, 10^9]`.
pub fn from_test_function<F>(test: F) -> Oracle
where
    F: FnMut(&Interval) -> bool + Send + 'static,
{
    from_test_function_with(&TestFunctionConfig::default(), test)
}

/// Like [`from_test_function`] with explicit starting bounds.
pub fn from_test_function_within<F>(bounds: Interval, test: F) -> Oracle
where
    F: FnMut(&Interval) -> bool + Send + 'static,
{
    let config = TestFunctionConfig {
        bounds,
        ..TestFunctionConfig::default()
    };
    from_test_function_with(&config, test)
}

pub fn from_test_function_with<F>(config: &TestFunctionConfig, test: F) -> Oracle
where
    F: FnMut(&Interval) -> bool + Send + 'static,
{
    Oracle::new(
        config.bounds.clone(),
        MembershipTest {
            test,
            miss_offset: config.miss_offset.clone(),
        },
    )
}

/// Prophecy wrapping a membership test.
///
/// An accepted target is returned as-is. A rejected target gets a point
/// prophecy just outside it (past `high` for a positive offset, before `low`
/// for a negative one), which can never meet the target and so forces a No.
pub struct MembershipTest<F> {
    test: F,
    miss_offset: Rational,
}

impl<F> Prophecy for MembershipTest<F>
where
    F: FnMut(&Interval) -> bool + Send,
{
    fn prophesy(&mut self, target: &Interval, _delta: &Rational) -> Result<Interval, OracleError> {
        if (self.test)(target) {
            return Ok(target.clone());
        }
        let miss = if self.miss_offset.is_negative() {
            target.low() + &self.miss_offset
        } else {
            target.high() + &self.miss_offset
        };
        Ok(Interval::point(miss))
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
    fn from_rational_is_a_point() {
        let oracle = from_rational(rational(3, 7));
        assert_eq!(oracle.yes(), &Interval::point(rational(3, 7)));
        assert_eq!(oracle.yes().width(), integer(0));
    }

    #[test]
    fn from_interval_normalizes() {
        let oracle = from_interval(Interval::new(integer(5), integer(1)));
        assert_eq!(oracle.yes(), &iv(1, 5));
    }

    #[test]
    fn test_function_default_bounds() {
        let oracle = from_test_function(|_| true);
        assert_eq!(oracle.yes(), &iv(-1_000_000_000, 1_000_000_000));
    }

    #[test]
    fn accepted_target_refines_to_target() {
        let mut prophecy = MembershipTest {
            test: |i: &Interval| i.contains(&integer(3)),
            miss_offset: rational(1, 1_000_000),
        };
        let got = prophecy.prophesy(&iv(2, 4), &integer(0)).unwrap();
        assert_eq!(got, iv(2, 4));
    }

    #[test]
    fn rejected_target_gets_disjoint_point() {
        let mut prophecy = MembershipTest {
            test: |_: &Interval| false,
            miss_offset: rational(1, 1_000_000),
        };
        let got = prophecy.prophesy(&iv(0, 100), &integer(0)).unwrap();
        assert!(got.is_point());
        assert!(!got.intersects(&iv(0, 100)));

        prophecy.miss_offset = rational(-1, 2);
        let got = prophecy.prophesy(&iv(0, 100), &integer(0)).unwrap();
        assert_eq!(got, Interval::point(rational(-1, 2)));
    }

    #[test]
    fn rejecting_test_oracle_discards_evidence() {
        let mut oracle = from_test_function_within(iv(0, 10), |_| false);
        let answer = oracle.query(&iv(20, 30), &integer(0)).unwrap();
        assert!(!answer.ans);
        assert_eq!(oracle.yes(), &iv(0, 10));
    }
}
