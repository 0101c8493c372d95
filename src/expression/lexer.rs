use logos::Logos;

use crate::{
    error::EvalError,
    expression::{evaluator::core::EvalResult, operator::Operator},
};

/// A single word of a postfix or prefix expression.
///
/// Parentheses have no place in either notation, so they are not tokens here
/// and fail classification like any other stray text.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-7` or `2.5`. The text is kept
    /// as written so each numeric mode can parse it on its own terms.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_owned())]
    Number(String),
    /// One of `+ - * / ^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
}

/// Classifies a whitespace-free word as a single token.
///
/// Returns `None` unless exactly one token spans the whole word, so `3+` and
/// `4x` are rejected rather than split.
///
/// # Example
/// ```
/// use notation::expression::{
///     lexer::{Token, classify},
///     operator::Operator,
/// };
///
/// assert_eq!(classify("-12.5"), Some(Token::Number("-12.5".to_string())));
/// assert_eq!(classify("^"), Some(Token::Operator(Operator::Pow)));
/// assert_eq!(classify("3+"), None);
/// assert_eq!(classify("("), None);
/// ```
#[must_use]
pub fn classify(word: &str) -> Option<Token> {
    let mut lexer = Token::lexer(word);
    let token = lexer.next()?.ok()?;
    lexer.next().is_none().then_some(token)
}

/// Splits a postfix or prefix expression on whitespace and classifies every
/// word.
///
/// # Errors
/// - `EvalError::EmptyInput` if the expression has no words at all.
/// - `EvalError::InvalidToken` for the first word that is neither a numeric
///   literal nor an operator.
pub fn tokenize(expr: &str) -> EvalResult<Vec<Token>> {
    let tokens = expr.split_whitespace()
                     .map(|word| {
                         classify(word).ok_or_else(|| EvalError::InvalidToken { token: word.to_owned() })
                     })
                     .collect::<EvalResult<Vec<_>>>()?;

    if tokens.is_empty() {
        return Err(EvalError::EmptyInput);
    }

    Ok(tokens)
}
