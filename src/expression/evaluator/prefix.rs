use crate::expression::{
    evaluator::core::{EvalResult, check_structure, pop_pair, single_result},
    lexer::{Token, tokenize},
    value::Number,
};

/// Evaluates a prefix expression in the numeric mode of `N`.
///
/// Tokens are scanned right to left, so when an operator is reached the most
/// recently pushed operand is its left-hand side.
///
/// # Errors
/// The same as [`evaluate_postfix`](super::evaluate_postfix).
///
/// # Example
/// ```
/// use notation::{error::EvalError, expression::evaluator::evaluate_prefix};
///
/// assert_eq!(evaluate_prefix::<f64>("+ 2 * 3 4").unwrap(), 14.0);
/// assert_eq!(evaluate_prefix::<i64>("- 10 4").unwrap(), 6);
/// assert_eq!(evaluate_prefix::<f64>("/ 6 0"), Err(EvalError::DivisionByZero));
/// ```
#[tracing::instrument(level = "debug", fields(mode = %N::MODE))]
pub fn evaluate_prefix<N: Number>(expr: &str) -> EvalResult<N> {
    let tokens = tokenize(expr)?;
    check_structure(tokens.iter().rev())?;

    let mut stack: Vec<N> = Vec::with_capacity(tokens.len());
    for token in tokens.iter().rev() {
        match token {
            Token::Number(literal) => stack.push(N::parse(literal)?),
            Token::Operator(op) => {
                let (left, right) = pop_pair(&mut stack, *op)?;
                let result = N::apply(*op, left, right)?;
                tracing::trace!(%left, %op, %right, %result, "reduced");
                stack.push(result);
            },
        }
    }

    single_result(stack)
}
