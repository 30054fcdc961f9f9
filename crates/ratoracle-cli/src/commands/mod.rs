pub mod arith;
pub mod narrow;
pub mod query;
