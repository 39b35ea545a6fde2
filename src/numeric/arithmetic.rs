// ============================================================================
// Arithmetic Operators
// Overflow-checked operations producing new amounts
// ============================================================================
//
// Operators detect wrapping of the underlying i64. They don't consult the
// bounds policy; an out-of-range result is rejected the next time it crosses
// a conversion boundary (formatting, float or decimal export).

use rust_decimal::RoundingStrategy;

use super::amount::ScaledAmount;
use super::errors::{AmountError, AmountResult};

impl ScaledAmount {
    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum wraps.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> AmountResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if the difference wraps.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> AmountResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Multiply by an integer scalar. A zero scalar always yields zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the product wraps.
    #[inline]
    pub fn checked_mul_int(self, scalar: i64) -> AmountResult<Self> {
        if scalar == 0 {
            return Ok(Self::ZERO);
        }
        self.0
            .checked_mul(scalar)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Divide by an integer with an explicit rounding strategy.
    ///
    /// - `None`: truncating division
    /// - `Some(MidpointAwayFromZero)`: round half away from zero
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero, whatever the strategy
    /// - `UnsupportedRounding` for any other strategy
    /// - `Overflow` for `i64::MIN / -1`, or if the rounding adjustment wraps
    pub fn checked_div(self, divisor: i64, rounding: Option<RoundingStrategy>) -> AmountResult<Self> {
        if divisor == 0 {
            return Err(AmountError::DivisionByZero);
        }

        let dividend = match rounding {
            None => self.0,
            Some(RoundingStrategy::MidpointAwayFromZero) => {
                let half = divisor / 2;
                // Push the dividend away from zero in the direction of the quotient
                if (self.0 < 0) != (divisor < 0) {
                    self.0.checked_sub(half)
                } else {
                    self.0.checked_add(half)
                }
                .ok_or(AmountError::Overflow)?
            },
            Some(_) => return Err(AmountError::UnsupportedRounding),
        };

        dividend
            .checked_div(divisor)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Divide by an integer, rounding half away from zero.
    ///
    /// # Errors
    /// See [`ScaledAmount::checked_div`].
    #[inline]
    pub fn div_round(self, divisor: i64) -> AmountResult<Self> {
        self.checked_div(divisor, Some(RoundingStrategy::MidpointAwayFromZero))
    }

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` for `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> AmountResult<Self> {
        self.0.checked_neg().map(Self).ok_or(AmountError::Overflow)
    }

    /// Checked absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `i64::MIN`.
    #[inline]
    pub fn checked_abs(self) -> AmountResult<Self> {
        self.0.checked_abs().map(Self).ok_or(AmountError::Overflow)
    }

    /// Sum amounts, failing on the first wrap.
    ///
    /// # Errors
    /// Returns `Overflow` if any partial sum wraps.
    pub fn checked_sum<I>(amounts: I) -> AmountResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

// ============================================================================
// Tests
// ============================================================================
