use crate::{
    error::EvalError,
    expression::{evaluator::core::EvalResult, value::Number},
};

/// One of the five supported binary operators.
///
/// The operator set is fixed, so every operation on it is an exhaustive
/// `match` rather than a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Every operator, in ascending precedence.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    /// Returns the operator written as `symbol`, if there is one.
    ///
    /// # Example
    /// ```
    /// use notation::expression::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding precedence: `^` binds tightest, then `*` and `/`, then `+` and
    /// `-`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns `true` if `ch` is one of `+ - * / ^`.
#[must_use]
pub const fn is_operator(ch: char) -> bool {
    Operator::from_symbol(ch).is_some()
}

/// Returns the precedence of `ch`, or `0` if it is not an operator.
///
/// # Example
/// ```
/// use notation::expression::operator::precedence;
///
/// assert!(precedence('^') > precedence('*'));
/// assert_eq!(precedence('*'), precedence('/'));
/// assert!(precedence('/') > precedence('-'));
/// assert_eq!(precedence('('), 0);
/// ```
#[must_use]
pub const fn precedence(ch: char) -> u8 {
    match Operator::from_symbol(ch) {
        Some(op) => op.precedence(),
        None => 0,
    }
}

/// Computes `lhs op rhs` in the numeric mode of `N`.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` for a zero divisor and, in integer
/// mode, `EvalError::Overflow` when the result does not fit.
///
/// # Example
/// ```
/// use notation::expression::operator::{Operator, apply};
///
/// assert_eq!(apply(7_i64, Operator::Div, 2).unwrap(), 3);
/// assert_eq!(apply(7.0_f64, Operator::Div, 2.0).unwrap(), 3.5);
/// assert!(apply(1_i64, Operator::Div, 0).is_err());
/// ```
pub fn apply<N: Number>(lhs: N, op: Operator, rhs: N) -> EvalResult<N> {
    N::apply(op, lhs, rhs)
}

/// Like [`apply`], but takes the operator as a raw character.
///
/// # Errors
/// Returns `EvalError::UnknownOperator` if `symbol` is not an operator, and
/// otherwise whatever [`apply`] returns.
pub fn apply_symbol<N: Number>(lhs: N, symbol: char, rhs: N) -> EvalResult<N> {
    let op = Operator::from_symbol(symbol).ok_or(EvalError::UnknownOperator { symbol })?;
    apply(lhs, op, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert!(is_operator(op.symbol()));
        }
    }

    #[test]
    fn non_operators() {
        for ch in ['(', ')', '%', '1', ' ', 'x', '.'] {
            assert!(!is_operator(ch));
            assert_eq!(precedence(ch), 0);
        }
    }

    #[test]
    fn precedence_table() {
        assert_eq!(precedence('+'), 1);
        assert_eq!(precedence('-'), 1);
        assert_eq!(precedence('*'), 2);
        assert_eq!(precedence('/'), 2);
        assert_eq!(precedence('^'), 3);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert_eq!(apply_symbol(1.0_f64, '%', 2.0), Err(EvalError::UnknownOperator { symbol: '%' }));
        assert_eq!(apply_symbol(2_i64, '^', 10), Ok(1024));
    }
}
