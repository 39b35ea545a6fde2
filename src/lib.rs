// ============================================================================
// Micro Amount Library
// Exact fixed-point monetary amounts with overflow-checked arithmetic
// ============================================================================

//! # Micro Amount
//!
//! Monetary amounts stored as a signed count of micro-units (10^-6 of a
//! whole unit), so values never pick up binary floating-point error.
//!
//! ## Features
//!
//! - **Exact parsing** of decimal literals, rounding half away from zero on
//!   the seventh fractional digit
//! - **Canonical formatting** that round-trips through the parser
//! - **Checked arithmetic**: addition, integer multiplication and division
//!   with a selectable rounding strategy
//! - **Bounds policy** of ±9 billion units applied at every conversion;
//!   `f64` round trips are exact below 2^32 units
//! - Optional **serde** support (feature `serde`)
//!
//! ## Example
//!
//! ```rust
//! use micro_amount::prelude::*;
//!
//! let balance = ScaledAmount::from_units(100)?;
//! let fee: ScaledAmount = "0.1".parse()?;
//!
//! let remaining = balance.checked_sub(fee)?;
//! assert_eq!(remaining.to_decimal_string()?, "99.9");
//!
//! let share = remaining.checked_div(3, Some(RoundingStrategy::MidpointAwayFromZero))?;
//! assert_eq!(share.to_decimal_string()?, "33.3");
//!
//! assert_eq!("1e5".parse::<ScaledAmount>(), Err(AmountError::InvalidInput));
//! # Ok::<(), AmountError>(())
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        AmountError, AmountResult, ParseConfig, RoundingStrategy, ScaledAmount,
    };
}
