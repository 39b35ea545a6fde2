// ============================================================================
// Numeric Module
// Exact monetary amounts with six fractional digits
// ============================================================================
//
// This module provides:
// - ScaledAmount: i64 count of micro-units (amount × 10^6)
// - Decimal parser and canonical formatter
// - Checked arithmetic with explicit rounding
// - f64 and rust_decimal conversions
// - AmountError: the failure taxonomy shared by all of the above
//
// Design principles:
// - No floating point inside parsing, formatting or arithmetic
// - All fallible operations return Result (no panics)
// - One bounds predicate consulted at every conversion boundary

mod amount;
mod arithmetic;
pub mod bounds;
mod config;
mod conversions;
mod errors;
mod formatter;
mod parser;
#[cfg(feature = "serde")]
mod serialization;

pub use amount::ScaledAmount;
pub use bounds::{in_bounds, MAX_BOUND, MIN_BOUND};
pub use config::ParseConfig;
pub use errors::{AmountError, AmountResult};
pub use rust_decimal::RoundingStrategy;
