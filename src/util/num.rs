use crate::{error::EvalError, expression::evaluator::core::EvalResult};

/// Safely converts a non-negative `i64` exponent to `u32`.
///
/// ## Errors
/// Returns `EvalError::Overflow` if the value is negative or exceeds
/// `u32::MAX`. Any exponent that large overflows `i64` for every base other
/// than `-1`, `0` and `1`, which callers handle before converting.
///
/// ## Example
/// ```
/// use notation::{error::EvalError, util::num::i64_to_u32_checked};
///
/// // Safe
/// assert_eq!(i64_to_u32_checked(45).unwrap(), 45);
///
/// // Negative value
/// assert_eq!(i64_to_u32_checked(-1).unwrap_err(), EvalError::Overflow);
///
/// // Too large
/// assert_eq!(i64_to_u32_checked(i64::MAX).unwrap_err(), EvalError::Overflow);
/// ```
pub fn i64_to_u32_checked(value: i64) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| EvalError::Overflow)
}
