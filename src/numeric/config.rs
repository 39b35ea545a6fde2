// ============================================================================
// Parse Configuration
// Options controlling which literal forms the parser accepts
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for [`ScaledAmount::parse_with`](super::ScaledAmount::parse_with).
///
/// The default is strict: plain decimal literals only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseConfig {
    /// Accept scientific notation such as `625e-3` or `0.1E10`.
    ///
    /// The exponent is applied by shifting the decimal point, so the result
    /// is exact and rounds by the same rule as a plain literal.
    pub allow_exponent: bool,
}

impl ParseConfig {
    /// Plain decimal literals only
    pub const fn strict() -> Self {
        Self {
            allow_exponent: false,
        }
    }

    /// Plain decimal literals and scientific notation
    pub const fn lenient() -> Self {
        Self {
            allow_exponent: true,
        }
    }

    /// Builder method: toggle exponent support
    pub const fn with_exponent(mut self, allow: bool) -> Self {
        self.allow_exponent = allow;
        self
    }
}
