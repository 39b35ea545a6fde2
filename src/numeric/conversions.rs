// ============================================================================
// Conversions
// Float and rust_decimal entry/exit points, all gated by the bounds policy
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::amount::ScaledAmount;
use super::bounds::{self, MAX_BOUND, MIN_BOUND};
use super::errors::{AmountError, AmountResult};

impl ScaledAmount {
    // ========================================================================
    // Floating point
    // ========================================================================

    /// Convert from a float number of whole units.
    ///
    /// The value is scaled by 10^6 and rounded half away from zero.
    ///
    /// # Errors
    /// Returns `Overflow` for NaN, infinities and out-of-range values.
    pub fn from_f64(units: f64) -> AmountResult<Self> {
        if !units.is_finite() {
            debug!(units, "rejected non-finite float amount");
            return Err(AmountError::Overflow);
        }

        let scaled = (units * Self::SCALE as f64).round();
        if scaled < MIN_BOUND as f64 || scaled > MAX_BOUND as f64 {
            return Err(AmountError::Overflow);
        }

        // Exact: the bounds lie below 2^53
        Ok(Self(scaled as i64))
    }

    /// Convert to a float number of whole units.
    ///
    /// Above 2^32 whole units the `f64` spacing approaches one micro-unit, so
    /// `from_f64(to_f64(x))` is only guaranteed to return `x` for
    /// `|x| < 2^32` units. Use the text or decimal conversions for exact
    /// transport of larger amounts.
    ///
    /// # Errors
    /// Returns `Overflow` if the amount is outside the bounds.
    pub fn to_f64(self) -> AmountResult<f64> {
        let micros = bounds::check_bounds(self.0)?;
        Ok(micros as f64 / Self::SCALE as f64)
    }

    // ========================================================================
    // rust_decimal
    // ========================================================================

    /// Convert from an arbitrary-precision decimal.
    ///
    /// The decimal is rendered with seven fractional digits (the last one
    /// rounded half away from zero) and handed to the parser, which then
    /// rounds on that seventh digit like any text input.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is outside the bounds.
    pub fn from_decimal(value: Decimal) -> AmountResult<Self> {
        let literal = value
            .round_dp_with_strategy(Self::DECIMALS + 1, RoundingStrategy::MidpointAwayFromZero)
            .to_string();
        Self::parse(&literal)
    }

    /// Convert to a normalized `Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the amount is outside the bounds.
    pub fn to_decimal(self) -> AmountResult<Decimal> {
        let micros = bounds::check_bounds(self.0)?;
        Ok(Decimal::new(micros, Self::DECIMALS).normalize())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl TryFrom<f64> for ScaledAmount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<ScaledAmount> for f64 {
    type Error = AmountError;

    fn try_from(value: ScaledAmount) -> Result<Self, Self::Error> {
        value.to_f64()
    }
}

impl TryFrom<Decimal> for ScaledAmount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl TryFrom<ScaledAmount> for Decimal {
    type Error = AmountError;

    fn try_from(value: ScaledAmount) -> Result<Self, Self::Error> {
        value.to_decimal()
    }
}
