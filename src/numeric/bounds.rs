// ============================================================================
// Bounds Policy
// The single range predicate shared by every conversion boundary
// ============================================================================

use super::errors::{AmountError, AmountResult};

/// Largest accepted value in micro-units (9 billion whole units).
///
/// Deliberately narrower than `i64::MAX` so every in-range micro-unit count
/// is exactly representable as an `f64` (below 2^53) and an order of
/// magnitude of headroom remains for intermediate arithmetic. Converting to
/// whole units in `f64` is exact only below 2^32 units; see
/// [`ScaledAmount::to_f64`](super::ScaledAmount::to_f64). Tune the bound
/// here, not from the integer width.
pub const MAX_BOUND: i64 = 9_000_000_000_000_000;

/// Smallest accepted value in micro-units. Symmetric with [`MAX_BOUND`].
pub const MIN_BOUND: i64 = -MAX_BOUND;

/// Returns `true` if `micros` lies within `[MIN_BOUND, MAX_BOUND]`.
#[inline]
pub const fn in_bounds(micros: i64) -> bool {
    micros >= MIN_BOUND && micros <= MAX_BOUND
}

/// Validate `micros` against the bounds, passing it through on success.
///
/// # Errors
/// Returns `Overflow` if the value is out of range.
#[inline]
pub fn check_bounds(micros: i64) -> AmountResult<i64> {
    if in_bounds(micros) {
        Ok(micros)
    } else {
        Err(AmountError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_symmetric() {
        assert_eq!(MIN_BOUND, -MAX_BOUND);
        // f64 represents every integer up to 2^53 exactly
        assert!(MAX_BOUND < (1_i64 << 53));
    }

    #[test]
    fn test_in_bounds_edges() {
        assert!(in_bounds(0));
        assert!(in_bounds(MAX_BOUND));
        assert!(in_bounds(MIN_BOUND));
        assert!(!in_bounds(MAX_BOUND + 1));
        assert!(!in_bounds(MIN_BOUND - 1));
        assert!(!in_bounds(i64::MAX));
        assert!(!in_bounds(i64::MIN));
    }

    #[test]
    fn test_check_bounds() {
        assert_eq!(check_bounds(42), Ok(42));
        assert_eq!(check_bounds(MAX_BOUND + 1), Err(AmountError::Overflow));
        assert_eq!(check_bounds(MIN_BOUND - 1), Err(AmountError::Overflow));
    }
}
