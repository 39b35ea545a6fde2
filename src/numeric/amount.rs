// ============================================================================
// Scaled Amount
// Monetary amount stored as an integer count of micro-units
// ============================================================================

use super::bounds::{self, MAX_BOUND, MIN_BOUND};
use super::errors::{AmountError, AmountResult};

/// Exact monetary amount with six fractional digits.
///
/// Internally stores `amount × 10^6` as an `i64`. One whole unit is
/// `1_000_000` micro-units and one cent is `10_000`.
///
/// Values are immutable: every operation returns a new amount. The raw
/// constructor [`ScaledAmount::from_micros`] accepts any `i64`; the bounds
/// policy ([`MIN_BOUND`]..=[`MAX_BOUND`]) is enforced whenever a value crosses
/// a boundary (parsing, formatting, float and decimal conversion).
///
/// # Example
/// ```
/// use micro_amount::numeric::ScaledAmount;
///
/// let price: ScaledAmount = "12.345".parse()?;
/// let total = price.checked_mul_int(3)?;
/// assert_eq!(total.to_decimal_string()?, "37.035");
/// # Ok::<(), micro_amount::numeric::AmountError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct ScaledAmount(pub(crate) i64);

impl ScaledAmount {
    /// Number of fractional digits
    pub const DECIMALS: u32 = 6;

    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = 1_000_000;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// Smallest step (0.000001)
    pub const MICRO: Self = Self(1);

    /// One hundredth of a unit (0.01)
    pub const CENT: Self = Self(10_000);

    /// One whole unit (1.0)
    pub const ONE: Self = Self(Self::SCALE);

    /// Largest in-bounds value
    pub const MAX: Self = Self(MAX_BOUND);

    /// Smallest in-bounds value
    pub const MIN: Self = Self(MIN_BOUND);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw micro-unit count.
    ///
    /// No bounds check is made here; out-of-range values are rejected the
    /// next time they cross a conversion boundary.
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Create from a whole number of units.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is outside the bounds.
    #[inline]
    pub fn from_units(units: i64) -> AmountResult<Self> {
        Self::scaled(units, Self::SCALE)
    }

    /// Create from a whole number of cents.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is outside the bounds.
    #[inline]
    pub fn from_cents(cents: i64) -> AmountResult<Self> {
        Self::scaled(cents, Self::CENT.0)
    }

    fn scaled(count: i64, step: i64) -> AmountResult<Self> {
        let micros = count.checked_mul(step).ok_or(AmountError::Overflow)?;
        bounds::check_bounds(micros).map(Self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw micro-unit count.
    #[inline]
    pub const fn micros(self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero.
    #[inline]
    pub const fn whole_units(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Magnitude of the fractional remainder in micro-units.
    #[inline]
    pub const fn fraction_micros(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Whether the value satisfies the bounds policy.
    #[inline]
    pub const fn is_in_bounds(self) -> bool {
        bounds::in_bounds(self.0)
    }
}

impl From<ScaledAmount> for i64 {
    #[inline]
    fn from(amount: ScaledAmount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(ScaledAmount::SCALE, 10_i64.pow(ScaledAmount::DECIMALS));
        assert_eq!(ScaledAmount::ONE.micros(), 1_000_000);
        assert_eq!(ScaledAmount::CENT.micros(), 10_000);
        assert_eq!(ScaledAmount::MICRO.micros(), 1);
        assert_eq!(ScaledAmount::MAX.micros(), 9_000_000_000_000_000);
        assert_eq!(ScaledAmount::MIN.micros(), -9_000_000_000_000_000);
        assert_eq!(ScaledAmount::default(), ScaledAmount::ZERO);
    }

    #[test]
    fn test_from_units_and_cents() {
        assert_eq!(ScaledAmount::from_units(8).unwrap().micros(), 8_000_000);
        assert_eq!(ScaledAmount::from_cents(801).unwrap().micros(), 8_010_000);
        assert_eq!(ScaledAmount::from_cents(-8).unwrap().micros(), -80_000);
        assert_eq!(
            ScaledAmount::from_units(9_000_000_000).unwrap(),
            ScaledAmount::MAX
        );
    }

    #[test]
    fn test_from_units_overflow() {
        assert_eq!(
            ScaledAmount::from_units(9_000_000_001),
            Err(AmountError::Overflow)
        );
        assert_eq!(
            ScaledAmount::from_units(i64::MIN),
            Err(AmountError::Overflow)
        );
    }

    #[test]
    fn test_parts() {
        let x = ScaledAmount::from_micros(123_764_538);
        assert_eq!(x.whole_units(), 123);
        assert_eq!(x.fraction_micros(), 764_538);

        let y = ScaledAmount::from_micros(-999_999);
        assert_eq!(y.whole_units(), 0);
        assert_eq!(y.fraction_micros(), 999_999);
        assert!(y.is_negative());
    }

    #[test]
    fn test_raw_constructor_is_unchecked() {
        let x = ScaledAmount::from_micros(MAX_BOUND + 1);
        assert!(!x.is_in_bounds());
        assert!(ScaledAmount::MAX.is_in_bounds());
        assert_eq!(i64::from(x), MAX_BOUND + 1);
    }

    #[test]
    fn test_ordering() {
        let negative = ScaledAmount::from_micros(-100);
        let zero = ScaledAmount::ZERO;
        let positive = ScaledAmount::from_micros(100);
        assert!(negative < zero);
        assert!(zero < positive);
        assert_eq!(positive.max(negative), positive);
    }
}
