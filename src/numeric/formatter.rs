// ============================================================================
// Decimal Formatter
// Scaled amount -> canonical minimal decimal string
// ============================================================================

use std::fmt;

use super::amount::ScaledAmount;
use super::bounds;
use super::errors::AmountResult;

impl ScaledAmount {
    /// Format as the shortest decimal literal with the exact value.
    ///
    /// Trailing fractional zeros are stripped and a whole value has no
    /// decimal point: `8.01`, `-0.000001`, `123`. The output parses back to
    /// the same amount.
    ///
    /// # Errors
    /// Returns `Overflow` if the amount is outside the bounds.
    pub fn to_decimal_string(self) -> AmountResult<String> {
        bounds::check_bounds(self.0)?;
        Ok(self.to_string())
    }
}

// Display writes any i64 without consulting the bounds; callers that need the
// bounds-checked contract use `to_decimal_string`.
impl fmt::Display for ScaledAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let fraction = self.0 % Self::SCALE;

        // Truncating division drops the sign of values in (-1, 0)
        if fraction < 0 && whole == 0 {
            f.write_str("-")?;
        }
        write!(f, "{whole}")?;

        if fraction != 0 {
            let digits = format!("{:06}", fraction.unsigned_abs());
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

impl fmt::Debug for ScaledAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaledAmount({}, raw={})", self, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::errors::AmountError;
    use proptest::prelude::*;

    fn fmt(micros: i64) -> AmountResult<String> {
        ScaledAmount::from_micros(micros).to_decimal_string()
    }

    #[test]
    fn test_format_positive() {
        assert_eq!(fmt(123_764_538).unwrap(), "123.764538");
        assert_eq!(fmt(12_352_348_976).unwrap(), "12352.348976");
        assert_eq!(fmt(123_523_489_000).unwrap(), "123523.489");
        assert_eq!(fmt(123).unwrap(), "0.000123");
        assert_eq!(fmt(8_010_000).unwrap(), "8.01");
        assert_eq!(fmt(80_000).unwrap(), "0.08");
        assert_eq!(fmt(8_000_000).unwrap(), "8");
        assert_eq!(fmt(0).unwrap(), "0");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(fmt(-123_000_000).unwrap(), "-123");
        assert_eq!(fmt(-123_764_538).unwrap(), "-123.764538");
        assert_eq!(fmt(-8_010_000).unwrap(), "-8.01");
    }

    #[test]
    fn test_format_keeps_sign_near_zero() {
        assert_eq!(fmt(-999_999).unwrap(), "-0.999999");
        assert_eq!(fmt(-1).unwrap(), "-0.000001");
        assert_eq!(fmt(-100_000).unwrap(), "-0.1");
    }

    #[test]
    fn test_format_bounds() {
        assert_eq!(fmt(9_000_000_000_000_000).unwrap(), "9000000000");
        assert_eq!(fmt(-9_000_000_000_000_000).unwrap(), "-9000000000");
        assert_eq!(fmt(9_000_000_000_000_001), Err(AmountError::Overflow));
        assert_eq!(fmt(-9_000_000_000_000_001), Err(AmountError::Overflow));
        assert_eq!(fmt(i64::MIN), Err(AmountError::Overflow));
    }

    #[test]
    fn test_display_ignores_bounds() {
        assert_eq!(ScaledAmount::from_micros(i64::MIN).to_string(), "-9223372036854.775808");
        assert_eq!(ScaledAmount::from_micros(i64::MAX).to_string(), "9223372036854.775807");
    }

    #[test]
    fn test_debug() {
        let x = ScaledAmount::from_micros(1_500_000);
        assert_eq!(format!("{x:?}"), "ScaledAmount(1.5, raw=1500000)");
    }

    proptest! {
        #[test]
        fn prop_format_parse_round_trip(micros in -9_000_000_000_000_000_i64..=9_000_000_000_000_000) {
            let amount = ScaledAmount::from_micros(micros);
            let text = amount.to_decimal_string().unwrap();
            prop_assert_eq!(ScaledAmount::parse(&text), Ok(amount));
        }

        #[test]
        fn prop_format_is_minimal(micros in -9_000_000_000_000_000_i64..=9_000_000_000_000_000) {
            let text = ScaledAmount::from_micros(micros).to_decimal_string().unwrap();
            prop_assert!(!text.ends_with('0') || !text.contains('.'));
            prop_assert!(!text.ends_with('.'));
            prop_assert_ne!(text.as_str(), "-0");
        }

        #[test]
        fn prop_padding_zeros_do_not_change_value(
            micros in -9_000_000_000_000_000_i64..=9_000_000_000_000_000,
            zeros in 1usize..20,
        ) {
            let amount = ScaledAmount::from_micros(micros);
            let mut text = amount.to_decimal_string().unwrap();
            if !text.contains('.') {
                text.push('.');
            }
            text.push_str(&"0".repeat(zeros));
            prop_assert_eq!(ScaledAmount::parse(&text), Ok(amount));
        }
    }
}
