use crate::expression::value::{Number, NumericMode, Value};

/// Shared evaluation machinery.
///
/// Contains the result type, the operand-count structural check and the
/// operand stack helpers used by both evaluators.
pub mod core;
/// Postfix evaluation.
///
/// Scans tokens left to right; each operator takes the two most recent
/// operands, the earlier one on the left.
pub mod postfix;
/// Prefix evaluation.
///
/// Scans tokens right to left; each operator takes the two most recent
/// operands, the most recent one on the left.
pub mod prefix;

pub use self::{
    core::{EvalResult, check},
    postfix::evaluate_postfix,
    prefix::evaluate_prefix,
};

/// Which of the two operator-placement notations an expression is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Operators follow their operands.
    Postfix,
    /// Operators precede their operands.
    Prefix,
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postfix => write!(f, "postfix"),
            Self::Prefix => write!(f, "prefix"),
        }
    }
}

/// Evaluates `expr` in the given notation and numeric mode.
///
/// # Errors
/// Any error of [`evaluate_postfix`] or [`evaluate_prefix`].
///
/// # Example
/// ```
/// use notation::expression::{
///     evaluator::{Notation, evaluate},
///     value::{NumericMode, Value},
/// };
///
/// let value = evaluate("7 2 /", Notation::Postfix, NumericMode::Integer).unwrap();
/// assert_eq!(value, Value::Integer(3));
///
/// let value = evaluate("/ 7 2", Notation::Prefix, NumericMode::Real).unwrap();
/// assert_eq!(value, Value::Real(3.5));
/// ```
pub fn evaluate(expr: &str, notation: Notation, mode: NumericMode) -> EvalResult<Value> {
    match mode {
        NumericMode::Integer => evaluate_as::<i64>(expr, notation),
        NumericMode::Real => evaluate_as::<f64>(expr, notation),
    }
}

fn evaluate_as<N: Number>(expr: &str, notation: Notation) -> EvalResult<Value> {
    let value = match notation {
        Notation::Postfix => evaluate_postfix::<N>(expr)?,
        Notation::Prefix => evaluate_prefix::<N>(expr)?,
    };
    Ok(value.into_value())
}
