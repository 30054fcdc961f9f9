//! # Ratoracle Kernel
//!
//! An oracle encapsulates uncertain knowledge about a single numeric value
//! as a closed interval of exact rationals (its *yes-interval*). Callers ask
//! whether a target interval is consistent with that knowledge, within a
//! tolerance delta. Answering may consult the oracle's prophecy, and any new
//! evidence is merged by intersection: the yes-interval only ever shrinks.
//!
//! ## Architecture
//!
//! ```text
//! Rational / Interval    ← exact primitives (num-rational)
//!     │
//! Oracle                 ← yes-interval + Prophecy, query/refinement protocol
//!     │
//! factories              ← point, interval, membership-test oracles
//! arithmetic             ← negate/add/subtract/multiply/divide combinators
//!     │
//! narrowing              ← oracle-guided bisection to a target precision
//! ```
//!
//! Division is the only combinator that can fail. Non-fatal setup warnings
//! go through an injected [`DiagnosticSink`].

pub mod arithmetic;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod factories;
pub mod interval;
pub mod narrowing;
pub mod oracle;
pub mod rational;

pub use arithmetic::{add, divide, divide_with, multiply, negate, subtract};
pub use config::{DivisionPolicy, KernelConfig, NarrowingLimits, TestFunctionConfig};
pub use diagnostics::{DiagnosticSink, MemorySink, NullSink, TracingSink};
pub use error::{ConfigError, OracleError};
pub use factories::{
    from_interval, from_rational, from_test_function, from_test_function_with,
    from_test_function_within,
};
pub use interval::Interval;
pub use narrowing::{
    bisect, bisect_with, midpoint_cutter, narrow_with_cutter, narrow_with_cutter_limited, refine,
    weighted_cutter,
};
pub use oracle::{Answer, Operand, Oracle, Prophecy, SharedOracle};
pub use rational::{Rational, integer, parse_rational, rational};
