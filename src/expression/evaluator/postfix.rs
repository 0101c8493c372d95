use crate::expression::{
    evaluator::core::{EvalResult, check_structure, pop_pair, single_result},
    lexer::{Token, tokenize},
    value::Number,
};

/// Evaluates a postfix expression in the numeric mode of `N`.
///
/// Tokens are separated by whitespace. The structural check runs before any
/// arithmetic, so a malformed expression never reports an arithmetic error.
///
/// # Errors
/// - `EvalError::EmptyInput` for a blank expression.
/// - `EvalError::InvalidToken` for a word that is not a number or operator,
///   or a decimal literal in integer mode.
/// - `EvalError::MalformedExpression` if the operand count breaks.
/// - `EvalError::DivisionByZero` and, in integer mode, `EvalError::Overflow`.
///
/// # Example
/// ```
/// use notation::{error::EvalError, expression::evaluator::evaluate_postfix};
///
/// assert_eq!(evaluate_postfix::<f64>("2 3 4 * +").unwrap(), 14.0);
/// assert_eq!(evaluate_postfix::<i64>("10 4 -").unwrap(), 6);
/// assert_eq!(evaluate_postfix::<f64>("6 0 /"), Err(EvalError::DivisionByZero));
/// ```
#[tracing::instrument(level = "debug", fields(mode = %N::MODE))]
pub fn evaluate_postfix<N: Number>(expr: &str) -> EvalResult<N> {
    let tokens = tokenize(expr)?;
    check_structure(tokens.iter())?;

    let mut stack: Vec<N> = Vec::with_capacity(tokens.len());
    for token in &tokens {
        match token {
            Token::Number(literal) => stack.push(N::parse(literal)?),
            Token::Operator(op) => {
                let (right, left) = pop_pair(&mut stack, *op)?;
                let result = N::apply(*op, left, right)?;
                tracing::trace!(%left, %op, %right, %result, "reduced");
                stack.push(result);
            },
        }
    }

    single_result(stack)
}
