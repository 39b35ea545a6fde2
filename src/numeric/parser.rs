// ============================================================================
// Decimal Parser
// Decimal literal -> scaled amount, with overflow detection at every step
// ============================================================================
//
// The scan accumulates an unsigned magnitude and applies the sign only at the
// end. Negative literals may reach one unit more of magnitude than positive
// ones (two's complement), so `i64::MIN` never overflows prematurely.
//
// Rounding policy: at most seven fractional digits are kept. The seventh
// decides whether the sixth rounds half away from zero; anything after it is
// accepted syntactically and dropped.

use std::str::FromStr;

use tracing::debug;

use super::amount::ScaledAmount;
use super::bounds;
use super::config::ParseConfig;
use super::errors::{AmountError, AmountResult};

/// Fractional digits kept by the scan: one past the target precision.
const KEPT_FRACTION_DIGITS: u32 = ScaledAmount::DECIMALS + 1;

/// A leading digit at this power of ten or above cannot fit in a `u64`.
const MAX_LEADING_PLACE: i64 = 20;

/// Tokens a float parser would accept that never describe a finite amount.
const SPECIAL_TOKENS: [&str; 3] = ["inf", "infinity", "nan"];

// ============================================================================
// Accumulator
// ============================================================================

/// Scan state for a single parse call.
#[derive(Debug)]
struct ParseAccumulator {
    magnitude: u64,
    negative: bool,
    dot_seen: bool,
    digit_seen: bool,
    significant_seen: bool,
    fraction_digits: u32,
}

impl ParseAccumulator {
    fn new(negative: bool) -> Self {
        Self {
            magnitude: 0,
            negative,
            dot_seen: false,
            digit_seen: false,
            significant_seen: false,
            fraction_digits: 0,
        }
    }

    /// Largest magnitude the signed result can carry.
    fn limit(&self) -> u64 {
        if self.negative {
            i64::MIN.unsigned_abs()
        } else {
            i64::MAX.unsigned_abs()
        }
    }

    fn push(&mut self, byte: u8) -> AmountResult<()> {
        match byte {
            b'.' if self.dot_seen => Err(AmountError::InvalidInput),
            b'.' => {
                self.dot_seen = true;
                Ok(())
            },
            b'0'..=b'9' => self.push_digit(byte - b'0'),
            _ => Err(AmountError::InvalidInput),
        }
    }

    fn push_digit(&mut self, digit: u8) -> AmountResult<()> {
        self.digit_seen = true;

        // Leading zeros of the integer part don't spend the digit budget
        if !self.significant_seen && !self.dot_seen && digit == 0 {
            return Ok(());
        }
        self.significant_seen = true;

        if self.fraction_digits == KEPT_FRACTION_DIGITS {
            return Ok(());
        }

        let next = self
            .magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(digit)))
            .ok_or(AmountError::Overflow)?;
        if next > self.limit() {
            return Err(AmountError::Overflow);
        }

        if self.dot_seen {
            self.fraction_digits += 1;
        }
        self.magnitude = next;
        Ok(())
    }

    fn finish(self) -> AmountResult<ScaledAmount> {
        if !self.digit_seen {
            return Err(AmountError::InvalidInput);
        }

        let mut magnitude = self.magnitude;
        if self.fraction_digits > ScaledAmount::DECIMALS {
            if magnitude % 10 >= 5 {
                // An increment that would wrap is skipped, leaving the value unrounded
                if let Some(bumped) = magnitude.checked_add(10) {
                    magnitude = bumped;
                }
            }
            magnitude /= 10;
        } else {
            for _ in self.fraction_digits..ScaledAmount::DECIMALS {
                magnitude = magnitude.checked_mul(10).ok_or(AmountError::Overflow)?;
            }
        }

        let signed = if self.negative {
            0_i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        }
        .ok_or(AmountError::Overflow)?;

        bounds::check_bounds(signed).map(ScaledAmount::from_micros)
    }
}

// ============================================================================
// Entry Points
// ============================================================================

impl ScaledAmount {
    /// Parse a plain decimal literal such as `"-12.345"`, `".5"` or `"7."`.
    ///
    /// # Errors
    /// - `InvalidInput` for empty input, stray characters or a second `.`
    /// - `Overflow` if the value leaves the bounds, or for `inf`/`nan` tokens
    pub fn parse(text: &str) -> AmountResult<Self> {
        Self::parse_with(text, &ParseConfig::strict())
    }

    /// Parse with explicit [`ParseConfig`] options.
    ///
    /// # Errors
    /// Same as [`ScaledAmount::parse`]; a malformed exponent is `InvalidInput`.
    pub fn parse_with(text: &str, config: &ParseConfig) -> AmountResult<Self> {
        let result = parse_literal(text, config);
        if let Err(err) = &result {
            debug!(input = text, %err, "rejected amount literal");
        }
        result
    }
}

impl FromStr for ScaledAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_literal(text: &str, config: &ParseConfig) -> AmountResult<ScaledAmount> {
    let (negative, body) = split_sign(text);

    if SPECIAL_TOKENS
        .iter()
        .any(|token| body.eq_ignore_ascii_case(token))
    {
        return Err(AmountError::Overflow);
    }

    if config.allow_exponent {
        if let Some((mantissa, exponent)) = body.split_once(['e', 'E']) {
            return parse_scientific(mantissa, exponent, negative);
        }
    }

    let mut acc = ParseAccumulator::new(negative);
    for byte in body.bytes() {
        acc.push(byte)?;
    }
    acc.finish()
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

// ============================================================================
// Scientific Notation
// ============================================================================

/// Parse `mantissa × 10^exponent` by shifting the decimal point.
///
/// The shifted digits are fed through the same accumulator as a plain
/// literal, so rounding and overflow rules are identical.
fn parse_scientific(mantissa: &str, exponent: &str, negative: bool) -> AmountResult<ScaledAmount> {
    let exponent = parse_exponent(exponent)?;

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = || int_part.bytes().chain(frac_part.bytes());
    if (int_part.is_empty() && frac_part.is_empty()) || !digits().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidInput);
    }

    let Some(first) = digits().position(|b| b != b'0') else {
        return Ok(ScaledAmount::ZERO);
    };

    // Power of ten of the leading significant digit after the shift
    let point = i64::try_from(int_part.len())
        .unwrap_or(i64::MAX)
        .saturating_add(exponent);
    let leading_place = point.saturating_sub(
        i64::try_from(first)
            .unwrap_or(i64::MAX)
            .saturating_add(1),
    );

    if leading_place >= MAX_LEADING_PLACE {
        return Err(AmountError::Overflow);
    }
    if leading_place < -i64::from(KEPT_FRACTION_DIGITS) {
        return Ok(ScaledAmount::ZERO);
    }

    // Significant digits that sit left of the decimal point, in -6..=20
    let integer_digits = leading_place + 1;
    let mut acc = ParseAccumulator::new(negative);

    if integer_digits <= 0 {
        acc.push(b'.')?;
        for _ in integer_digits..0 {
            acc.push(b'0')?;
        }
        for byte in digits().skip(first) {
            acc.push(byte)?;
        }
    } else {
        let integer_digits = integer_digits.unsigned_abs() as usize;
        let mut written = 0;
        for byte in digits().skip(first) {
            if written == integer_digits {
                acc.push(b'.')?;
            }
            acc.push(byte)?;
            written += 1;
        }
        for _ in written..integer_digits {
            acc.push(b'0')?;
        }
    }

    acc.finish()
}

/// Signed decimal exponent; magnitudes beyond `i64` saturate.
fn parse_exponent(text: &str) -> AmountResult<i64> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidInput);
    }

    let magnitude = digits.bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Ok(if negative { -magnitude } else { magnitude })
}

// ============================================================================
// Tests
// ============================================================================
