//! The oracle query/refinement protocol.
//!
//! An [`Oracle`] pairs a yes-interval (everything currently known about its
//! value) with a [`Prophecy`] that can be asked for fresh evidence. A query
//! either resolves from the yes-interval alone or consults the prophecy and
//! merges its answer by intersection.
//!
//! ## Query protocol
//!
//! Given a target `[a, b]` and a tolerance delta:
//!
//! 1. If `yes` overlaps the target widened by `|delta|`, answer from `yes`
//!    directly: `ans` is whether `yes` meets the unwidened target. Nothing
//!    is computed and nothing changes.
//! 2. Otherwise ask the prophecy. If its interval overlaps `yes`, the overlap
//!    becomes the new `yes` and the answer is whether it lies within delta of
//!    the target. If it does not overlap, the prophecy is discarded as
//!    inconsistent with prior evidence and the answer is `false`.
//!
//! Step 2 is the only place in the kernel where a yes-interval changes, and
//! it can only shrink.

use crate::error::OracleError;
use crate::interval::Interval;
use crate::rational::Rational;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// The result of a single oracle query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Whether the target is consistent with the oracle's knowledge.
    pub ans: bool,

    /// The interval the judgment was made from: the unchanged yes-interval,
    /// or the freshly refined one.
    pub cd: Interval,

    /// Opaque payload attached by the oracle's owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<Value>,
}

/// A source of fresh evidence about an oracle's value.
///
/// Given a candidate target and tolerance, returns an interval believed to
/// contain the true value. The result is only a candidate; the oracle decides
/// whether to merge it.
pub trait Prophecy: Send {
    fn prophesy(&mut self, target: &Interval, delta: &Rational) -> Result<Interval, OracleError>;
}

impl<F> Prophecy for F
where
    F: FnMut(&Interval, &Rational) -> Result<Interval, OracleError> + Send,
{
    fn prophesy(&mut self, target: &Interval, delta: &Rational) -> Result<Interval, OracleError> {
        self(target, delta)
    }
}

/// A prophecy that always returns the same interval.
#[derive(Debug, Clone)]
pub struct Constant(pub Interval);

impl Prophecy for Constant {
    fn prophesy(&mut self, _target: &Interval, _delta: &Rational) -> Result<Interval, OracleError> {
        Ok(self.0.clone())
    }
}

/// Stateful query object holding a monotonically shrinking yes-interval.
pub struct Oracle {
    yes: Interval,
    prophecy: Box<dyn Prophecy>,
    payload: Option<Value>,
}

impl Oracle {
    /// An oracle with an explicit starting interval and prophecy.
    pub fn new(yes: Interval, prophecy: impl Prophecy + 'static) -> Self {
        Self {
            yes,
            prophecy: Box::new(prophecy),
            payload: None,
        }
    }

    /// An oracle whose prophecy always restates its starting interval.
    pub fn constant(yes: Interval) -> Self {
        Self::new(yes.clone(), Constant(yes))
    }

    /// Attach a payload returned in every [`Answer::out`].
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// The current best-known enclosing interval.
    pub fn yes(&self) -> &Interval {
        &self.yes
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Ask whether `target` is consistent with this oracle within `delta`.
    ///
    /// Errors only when the prophecy itself fails; an inconsistent prophecy
    /// is reported as `ans: false`.
    pub fn query(&mut self, target: &Interval, delta: &Rational) -> Result<Answer, OracleError> {
        let expanded = target.expand(delta);

        if self.yes.intersects(&expanded) {
            tracing::trace!(yes = %self.yes, target = %target, "answered from current knowledge");
            let ans = self.yes.intersects(target);
            return Ok(self.answer(ans, self.yes.clone()));
        }

        let prophecy = self.prophecy.prophesy(target, delta)?;
        match prophecy.intersect(&self.yes) {
            Some(refined) => {
                tracing::debug!(
                    before = %self.yes,
                    after = %refined,
                    target = %target,
                    "refined yes-interval"
                );
                self.yes = refined;
                let ans = self.yes.within_delta(target, delta);
                Ok(self.answer(ans, self.yes.clone()))
            }
            None => {
                tracing::debug!(
                    yes = %self.yes,
                    prophecy = %prophecy,
                    "discarded prophecy disjoint from current knowledge"
                );
                Ok(self.answer(false, self.yes.clone()))
            }
        }
    }

    /// Move this oracle behind a lock so it can be shared.
    pub fn into_shared(self) -> SharedOracle {
        SharedOracle::new(self)
    }

    fn answer(&self, ans: bool, cd: Interval) -> Answer {
        Answer {
            ans,
            cd,
            out: self.payload.clone(),
        }
    }
}

impl fmt::Debug for Oracle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Oracle")
            .field("yes", &self.yes)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}

/// A cloneable handle to an oracle behind a mutex.
///
/// Each query holds the lock for its whole read-modify-write of the
/// yes-interval. Derived oracles that must observe an operand's live state
/// (division's denominator, refinement's delegate) keep one of these.
#[derive(Clone)]
pub struct SharedOracle(Arc<Mutex<Oracle>>);

impl SharedOracle {
    pub fn new(oracle: Oracle) -> Self {
        Self(Arc::new(Mutex::new(oracle)))
    }

    pub fn query(&self, target: &Interval, delta: &Rational) -> Result<Answer, OracleError> {
        self.with_mut(|oracle| oracle.query(target, delta))
    }

    /// Snapshot of the current yes-interval.
    pub fn yes(&self) -> Interval {
        self.with_mut(|oracle| oracle.yes.clone())
    }

    /// Run `f` with exclusive access to the oracle.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Oracle) -> R) -> R {
        // The yes-interval is only ever replaced whole, so a poisoned lock
        // still guards a consistent oracle.
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl From<Oracle> for SharedOracle {
    fn from(oracle: Oracle) -> Self {
        Self::new(oracle)
    }
}

impl fmt::Debug for SharedOracle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedOracle").field(&self.yes()).finish()
    }
}

/// Anything that can report a current yes-interval to a combinator.
pub trait Operand {
    fn current_yes(&self) -> Interval;
}

impl Operand for Oracle {
    fn current_yes(&self) -> Interval {
        self.yes.clone()
    }
}

impl Operand for SharedOracle {
    fn current_yes(&self) -> Interval {
        self.yes()
    }
}
