use crate::{
    error::ConversionError,
    expression::{
        lexer::{Token, classify},
        operator::Operator,
        validator::validate_characters,
    },
};

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Open,
    Operator(Operator),
}

/// Converts an infix expression to postfix notation.
///
/// Operators of equal precedence are emitted left to right, which makes every
/// operator left-associative, `^` included: `2 ^ 3 ^ 2` becomes `2 3 ^ 2 ^`.
/// Numbers may carry one decimal point.
///
/// Only tokens and parentheses are checked here, not the operand/operator
/// structure: `2 3` converts to `2 3` and `()` to an empty string. Use
/// [`check`](crate::expression::evaluator::check) on the output when that
/// matters.
///
/// # Errors
/// - `ConversionError::Invalid` if the expression is empty or contains an
///   unsupported character.
/// - `ConversionError::MismatchedParentheses` if a `)` closes nothing or a `(`
///   is never closed.
/// - `ConversionError::InvalidNumber` for literals such as `1.2.3` or `4.`.
///
/// # Example
/// ```
/// use notation::{error::ConversionError, expression::converter::to_postfix};
///
/// assert_eq!(to_postfix("3 + 4 * 2").unwrap(), "3 4 2 * +");
/// assert_eq!(to_postfix("(1 + 2) * 3").unwrap(), "1 2 + 3 *");
/// assert_eq!(to_postfix("(1 + 2"), Err(ConversionError::MismatchedParentheses));
/// ```
#[tracing::instrument(level = "debug")]
pub fn to_postfix(expr: &str) -> Result<String, ConversionError> {
    validate_characters(expr)?;
    shunting_yard(expr)
}

/// The shunting-yard pass shared by both converters.
///
/// Expects a string that passed the character checks; anything that is not a
/// digit, decimal point, operator or parenthesis is skipped.
pub(crate) fn shunting_yard(expr: &str) -> Result<String, ConversionError> {
    let mut output: Vec<String> = Vec::new();
    let mut stack: Vec<Pending> = Vec::new();
    let mut number = String::new();

    for ch in expr.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            number.push(ch);
            continue;
        }
        flush_number(&mut number, &mut output)?;

        match ch {
            '(' => stack.push(Pending::Open),
            ')' => close_group(&mut stack, &mut output)?,
            _ => {
                if let Some(op) = Operator::from_symbol(ch) {
                    push_operator(op, &mut stack, &mut output);
                }
            },
        }
    }
    flush_number(&mut number, &mut output)?;

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Open => return Err(ConversionError::MismatchedParentheses),
            Pending::Operator(op) => output.push(op.to_string()),
        }
    }

    let postfix = output.join(" ");
    tracing::debug!(%postfix, "converted");
    Ok(postfix)
}

/// Emits the digit run collected so far as one token.
fn flush_number(number: &mut String, output: &mut Vec<String>) -> Result<(), ConversionError> {
    if number.is_empty() {
        return Ok(());
    }
    if !matches!(classify(number), Some(Token::Number(_))) {
        return Err(ConversionError::InvalidNumber { literal: std::mem::take(number) });
    }
    output.push(std::mem::take(number));
    Ok(())
}

/// Pops operators into the output until the matching `(`, which is dropped.
fn close_group(stack: &mut Vec<Pending>, output: &mut Vec<String>) -> Result<(), ConversionError> {
    loop {
        match stack.pop() {
            Some(Pending::Open) => return Ok(()),
            Some(Pending::Operator(op)) => output.push(op.to_string()),
            None => return Err(ConversionError::MismatchedParentheses),
        }
    }
}

/// Pops every stacked operator that binds at least as tightly as `op`, then
/// pushes `op`.
fn push_operator(op: Operator, stack: &mut Vec<Pending>, output: &mut Vec<String>) {
    while let Some(&Pending::Operator(top)) = stack.last() {
        if top.precedence() < op.precedence() {
            break;
        }
        output.push(top.to_string());
        stack.pop();
    }
    stack.push(Pending::Operator(op));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn precedence_orders_output() {
        assert_eq!(to_postfix("3 + 4 * 2").unwrap(), "3 4 2 * +");
        assert_eq!(to_postfix("3 * 4 + 2").unwrap(), "3 4 * 2 +");
        assert_eq!(to_postfix("2 * 3 ^ 2").unwrap(), "2 3 2 ^ *");
    }

    #[test]
    fn equal_precedence_is_left_to_right() {
        assert_eq!(to_postfix("1 - 2 - 3").unwrap(), "1 2 - 3 -");
        assert_eq!(to_postfix("8 / 4 * 2").unwrap(), "8 4 / 2 *");
        assert_eq!(to_postfix("2 ^ 3 ^ 2").unwrap(), "2 3 ^ 2 ^");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(to_postfix("(1 + 2) * 3").unwrap(), "1 2 + 3 *");
        assert_eq!(to_postfix("((1 + 2) * (3 - 4)) / 5").unwrap(), "1 2 + 3 4 - * 5 /");
    }

    #[test]
    fn whitespace_is_optional() {
        assert_eq!(to_postfix("12+34*(5-6)").unwrap(), "12 34 5 6 - * +");
        assert_eq!(to_postfix("   7   ").unwrap(), "7");
    }

    #[test]
    fn decimal_literals() {
        assert_eq!(to_postfix("1.5 * 2.25").unwrap(), "1.5 2.25 *");
        assert_eq!(to_postfix("1.2.3 + 1"),
                   Err(ConversionError::InvalidNumber { literal: "1.2.3".to_owned() }));
        assert_eq!(to_postfix("4. + 1"),
                   Err(ConversionError::InvalidNumber { literal: "4.".to_owned() }));
        assert_eq!(to_postfix(". + 1"),
                   Err(ConversionError::InvalidNumber { literal: ".".to_owned() }));
    }

    #[test]
    fn mismatched_parentheses() {
        assert_eq!(to_postfix("(1 + 2"), Err(ConversionError::MismatchedParentheses));
        assert_eq!(to_postfix("1 + 2)"), Err(ConversionError::MismatchedParentheses));
        assert_eq!(to_postfix(")("), Err(ConversionError::MismatchedParentheses));
    }

    #[test]
    fn structure_is_not_checked() {
        assert_eq!(to_postfix("2 3").unwrap(), "2 3");
        assert_eq!(to_postfix("()").unwrap(), "");
        assert_eq!(to_postfix("1 + + 2").unwrap(), "1 + 2 +");
    }

    #[test]
    fn validation_failures_are_wrapped() {
        assert_eq!(to_postfix(" "), Err(ConversionError::Invalid(ValidationError::EmptyInput)));
        assert_eq!(to_postfix("1 + x"),
                   Err(ConversionError::Invalid(ValidationError::InvalidCharacter { character: 'x',
                                                                                    position:  4, })));
    }
}
