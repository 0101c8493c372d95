use crate::{
    error::EvalError,
    expression::{
        evaluator::core::EvalResult,
        operator::Operator,
        value::{NumericMode, Value},
    },
    util::num::i64_to_u32_checked,
};

/// An operand type the evaluators can compute with.
pub trait Number: Copy + std::fmt::Debug + std::fmt::Display + PartialEq {
    /// The mode this type implements.
    const MODE: NumericMode;

    /// Parses a numeric literal as produced by the lexer.
    ///
    /// # Errors
    /// `EvalError::InvalidToken` if the literal has no meaning in this mode,
    /// `EvalError::Overflow` if it is well formed but out of range.
    fn parse(literal: &str) -> EvalResult<Self>;

    /// Computes `lhs op rhs`.
    ///
    /// # Errors
    /// `EvalError::DivisionByZero` for a zero divisor, `EvalError::Overflow`
    /// for integer results that do not fit.
    fn apply(op: Operator, lhs: Self, rhs: Self) -> EvalResult<Self>;

    /// Wraps the number in a mode-tagged [`Value`].
    fn into_value(self) -> Value;
}

impl Number for i64 {
    const MODE: NumericMode = NumericMode::Integer;

    fn parse(literal: &str) -> EvalResult<Self> {
        if literal.contains('.') {
            return Err(EvalError::InvalidToken { token: literal.to_owned() });
        }
        // The lexer only hands over `-?[0-9]+` here, so a failure is a range
        // problem.
        literal.parse().map_err(|_| EvalError::Overflow)
    }

    fn apply(op: Operator, lhs: Self, rhs: Self) -> EvalResult<Self> {
        match op {
            Operator::Add => lhs.checked_add(rhs).ok_or(EvalError::Overflow),
            Operator::Sub => lhs.checked_sub(rhs).ok_or(EvalError::Overflow),
            Operator::Mul => lhs.checked_mul(rhs).ok_or(EvalError::Overflow),
            Operator::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs).ok_or(EvalError::Overflow)
            },
            Operator::Pow => integer_pow(lhs, rhs),
        }
    }

    fn into_value(self) -> Value {
        Value::Integer(self)
    }
}

/// Integer exponentiation, truncated toward zero.
///
/// A negative exponent gives a magnitude below one for every base except
/// `-1`, `0` and `1`, so the truncated result is exact without going through
/// floating point.
fn integer_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    match base {
        1 => Ok(1),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        0 if exponent < 0 => Err(EvalError::DivisionByZero),
        0 => Ok(i64::from(exponent == 0)),
        _ if exponent < 0 => Ok(0),
        _ => base.checked_pow(i64_to_u32_checked(exponent)?)
                 .ok_or(EvalError::Overflow),
    }
}

impl Number for f64 {
    const MODE: NumericMode = NumericMode::Real;

    fn parse(literal: &str) -> EvalResult<Self> {
        literal.parse().map_err(|_| EvalError::InvalidToken { token: literal.to_owned() })
    }

    fn apply(op: Operator, lhs: Self, rhs: Self) -> EvalResult<Self> {
        Ok(match op {
               Operator::Add => lhs + rhs,
               Operator::Sub => lhs - rhs,
               Operator::Mul => lhs * rhs,
               Operator::Div => {
                   if rhs == 0.0 {
                       return Err(EvalError::DivisionByZero);
                   }
                   lhs / rhs
               },
               Operator::Pow => lhs.powf(rhs),
           })
    }

    fn into_value(self) -> Value {
        Value::Real(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert_eq!(i64::apply(Operator::Div, 7, 2), Ok(3));
        assert_eq!(i64::apply(Operator::Div, -7, 2), Ok(-3));
    }

    #[test]
    fn integer_overflow_is_reported() {
        assert_eq!(i64::apply(Operator::Add, i64::MAX, 1), Err(EvalError::Overflow));
        assert_eq!(i64::apply(Operator::Mul, i64::MIN, -1), Err(EvalError::Overflow));
        assert_eq!(i64::apply(Operator::Div, i64::MIN, -1), Err(EvalError::Overflow));
        assert_eq!(i64::apply(Operator::Pow, 2, 63), Err(EvalError::Overflow));
        assert_eq!(i64::apply(Operator::Pow, 2, i64::MAX), Err(EvalError::Overflow));
    }

    #[test]
    fn integer_pow_edge_cases() {
        assert_eq!(integer_pow(2, 10), Ok(1024));
        assert_eq!(integer_pow(2, -1), Ok(0));
        assert_eq!(integer_pow(-3, 3), Ok(-27));
        assert_eq!(integer_pow(-1, -3), Ok(-1));
        assert_eq!(integer_pow(-1, i64::MAX - 1), Ok(1));
        assert_eq!(integer_pow(1, i64::MIN), Ok(1));
        assert_eq!(integer_pow(0, 0), Ok(1));
        assert_eq!(integer_pow(0, 5), Ok(0));
        assert_eq!(integer_pow(0, -2), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn division_by_zero_in_both_modes() {
        assert_eq!(i64::apply(Operator::Div, 6, 0), Err(EvalError::DivisionByZero));
        assert_eq!(f64::apply(Operator::Div, 6.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(f64::apply(Operator::Div, 6.0, -0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn integer_mode_rejects_decimals() {
        assert_eq!(i64::parse("2.5"), Err(EvalError::InvalidToken { token: "2.5".to_owned() }));
        assert_eq!(i64::parse("-25"), Ok(-25));
        assert_eq!(f64::parse("2.5"), Ok(2.5));
    }

    #[test]
    fn integer_literal_out_of_range_overflows() {
        assert_eq!(i64::parse("99999999999999999999"), Err(EvalError::Overflow));
        assert_eq!(i64::parse("-9223372036854775809"), Err(EvalError::Overflow));
        assert_eq!(i64::parse("-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn real_pow() {
        assert_eq!(f64::apply(Operator::Pow, 2.0, -1.0), Ok(0.5));
        assert_eq!(f64::apply(Operator::Pow, 9.0, 0.5), Ok(3.0));
    }
}
