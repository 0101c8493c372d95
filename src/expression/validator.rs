use crate::{error::ValidationError, expression::operator::is_operator};

/// Runs every lexical check on an infix expression.
///
/// The checks run in order: emptiness, parenthesis balance, then the
/// character set. Digits, the decimal point, the five operators, parentheses
/// and whitespace are allowed.
///
/// # Errors
/// - `ValidationError::EmptyInput` if the trimmed expression is empty.
/// - `ValidationError::UnbalancedParentheses` if a `)` closes nothing or a `(`
///   is never closed.
/// - `ValidationError::InvalidCharacter` for the first unsupported character.
///
/// # Example
/// ```
/// use notation::{error::ValidationError, expression::validator::validate};
///
/// assert!(validate("(1 + 2) * 3").is_ok());
/// assert_eq!(validate("(1 + 2"), Err(ValidationError::UnbalancedParentheses));
/// assert_eq!(validate("2 % 3"),
///            Err(ValidationError::InvalidCharacter { character: '%',
///                                                    position:  2, }));
/// ```
pub fn validate(expr: &str) -> Result<(), ValidationError> {
    ensure_not_empty(expr)?;
    if !is_balanced(expr) {
        return Err(ValidationError::UnbalancedParentheses);
    }
    check_characters(expr)
}

/// Runs the emptiness and character-set checks, leaving parenthesis balance
/// to the caller.
///
/// The converters use this so that a parenthesis problem is reported by the
/// shunting-yard pass itself.
///
/// # Errors
/// `ValidationError::EmptyInput` or `ValidationError::InvalidCharacter`.
pub fn validate_characters(expr: &str) -> Result<(), ValidationError> {
    ensure_not_empty(expr)?;
    check_characters(expr)
}

/// Returns `true` if every `)` closes an earlier `(` and no `(` is left open.
///
/// Characters other than parentheses are ignored.
///
/// # Example
/// ```
/// use notation::expression::validator::is_balanced;
///
/// assert!(is_balanced("((1) + (2))"));
/// assert!(!is_balanced(")1 + 2("));
/// ```
#[must_use]
pub fn is_balanced(expr: &str) -> bool {
    let mut depth: usize = 0;

    for ch in expr.chars() {
        match ch {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {},
        }
    }

    depth == 0
}

/// Returns `true` for characters an infix expression may contain.
#[must_use]
pub fn is_allowed(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == '(' || ch == ')' || ch.is_whitespace() || is_operator(ch)
}

fn ensure_not_empty(expr: &str) -> Result<(), ValidationError> {
    if expr.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(())
}

fn check_characters(expr: &str) -> Result<(), ValidationError> {
    match expr.chars().enumerate().find(|(_, ch)| !is_allowed(*ch)) {
        Some((position, character)) => {
            Err(ValidationError::InvalidCharacter { character, position })
        },
        None => Ok(()),
    }
}
