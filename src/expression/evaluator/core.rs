use crate::{
    error::EvalError,
    expression::{
        evaluator::Notation,
        lexer::{Token, tokenize},
        operator::Operator,
        value::Number,
    },
};

/// Result type used by the evaluators.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Checks that `expr` is a well formed expression in `notation` without
/// computing anything.
///
/// Tokens are scanned in evaluation order while counting operands: a number
/// adds one, an operator needs two and leaves one. The count must end at
/// exactly one.
///
/// # Errors
/// - `EvalError::EmptyInput` for a blank expression.
/// - `EvalError::InvalidToken` for a word that is not a number or operator.
/// - `EvalError::MalformedExpression` if the operand count breaks.
///
/// # Example
/// ```
/// use notation::expression::evaluator::{Notation, check};
///
/// assert!(check("2 3 4 * +", Notation::Postfix).is_ok());
/// assert!(check("+ 2 * 3 4", Notation::Prefix).is_ok());
/// assert!(check("2 3 4 * +", Notation::Prefix).is_err());
/// assert!(check("2 3", Notation::Postfix).is_err());
/// ```
pub fn check(expr: &str, notation: Notation) -> EvalResult<()> {
    let tokens = tokenize(expr)?;
    match notation {
        Notation::Postfix => check_structure(tokens.iter()),
        Notation::Prefix => check_structure(tokens.iter().rev()),
    }
}

/// Runs the operand-count check over tokens already in evaluation order.
pub(crate) fn check_structure<'a>(tokens: impl Iterator<Item = &'a Token>) -> EvalResult<()> {
    let mut operands: usize = 0;

    for token in tokens {
        match token {
            Token::Number(_) => operands += 1,
            Token::Operator(op) => {
                if operands < 2 {
                    return Err(missing_operands(*op));
                }
                operands -= 1;
            },
        }
    }

    match operands {
        1 => Ok(()),
        0 => Err(EvalError::MalformedExpression { details: "no operands".to_owned() }),
        n => Err(EvalError::MalformedExpression { details: format!("{n} operands left without an operator") }),
    }
}

/// Pops the top two operands, most recent first.
pub(crate) fn pop_pair<N: Number>(stack: &mut Vec<N>, op: Operator) -> EvalResult<(N, N)> {
    if stack.len() < 2 {
        return Err(missing_operands(op));
    }
    match (stack.pop(), stack.pop()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(missing_operands(op)),
    }
}

/// Takes the single value left on the operand stack.
pub(crate) fn single_result<N: Number>(mut stack: Vec<N>) -> EvalResult<N> {
    match stack.len() {
        1 => stack.pop().ok_or(EvalError::MalformedExpression { details: "no operands".to_owned() }),
        0 => Err(EvalError::MalformedExpression { details: "no operands".to_owned() }),
        n => Err(EvalError::MalformedExpression { details: format!("too many operands ({n} left)") }),
    }
}

fn missing_operands(op: Operator) -> EvalError {
    EvalError::MalformedExpression { details: format!("not enough operands for operator {op}") }
}
