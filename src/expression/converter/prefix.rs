use crate::{
    error::ConversionError,
    expression::{converter::postfix::shunting_yard, validator::validate_characters},
};

/// Converts an infix expression to prefix notation.
///
/// The expression is reversed character by character with every parenthesis
/// flipped, converted to postfix, and the postfix text is reversed again.
/// Reversing characters rather than tokens leaves every literal intact, since
/// each one is reversed exactly twice.
///
/// Because the inner pass breaks precedence ties left to right on the
/// reversed text, chains of equal-precedence operators group from the right:
/// `1 - 2 - 3` becomes `- 1 - 2 3`.
///
/// # Errors
/// The same as [`to_postfix`](crate::expression::converter::to_postfix).
///
/// # Example
/// ```
/// use notation::expression::converter::to_prefix;
///
/// assert_eq!(to_prefix("1 + 2 * 3").unwrap(), "+ 1 * 2 3");
/// assert_eq!(to_prefix("(1 + 2) * 3").unwrap(), "* + 1 2 3");
/// ```
#[tracing::instrument(level = "debug")]
pub fn to_prefix(expr: &str) -> Result<String, ConversionError> {
    validate_characters(expr)?;

    let mirrored = expr.chars()
                       .rev()
                       .map(|ch| match ch {
                           '(' => ')',
                           ')' => '(',
                           other => other,
                       })
                       .collect::<String>();
    tracing::trace!(%mirrored, "reversed input");

    let postfix = shunting_yard(&mirrored)?;
    Ok(postfix.chars().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        assert_eq!(to_prefix("1 + 2 * 3").unwrap(), "+ 1 * 2 3");
        assert_eq!(to_prefix("1 * 2 + 3").unwrap(), "+ * 1 2 3");
        assert_eq!(to_prefix("2 ^ 3 * 4").unwrap(), "* ^ 2 3 4");
    }

    #[test]
    fn multi_digit_and_decimal_literals_survive() {
        assert_eq!(to_prefix("12 + 345").unwrap(), "+ 12 345");
        assert_eq!(to_prefix("1.25 * 10").unwrap(), "* 1.25 10");
    }

    #[test]
    fn nested_groups() {
        assert_eq!(to_prefix("(1 + 2) * (3 - 4)").unwrap(), "* + 1 2 - 3 4");
        assert_eq!(to_prefix("((7))").unwrap(), "7");
    }

    #[test]
    fn equal_precedence_groups_from_the_right() {
        assert_eq!(to_prefix("1 - 2 - 3").unwrap(), "- 1 - 2 3");
        assert_eq!(to_prefix("(1 - 2) - 3").unwrap(), "- - 1 2 3");
    }

    #[test]
    fn mismatched_parentheses() {
        assert_eq!(to_prefix("(1 + 2"), Err(ConversionError::MismatchedParentheses));
        assert_eq!(to_prefix("1 + 2)"), Err(ConversionError::MismatchedParentheses));
        assert_eq!(to_prefix(")1("), Err(ConversionError::MismatchedParentheses));
    }

    #[test]
    fn malformed_literal_is_reported_reversed() {
        assert_eq!(to_prefix("1 + 2.3.4"),
                   Err(ConversionError::InvalidNumber { literal: "4.3.2".to_owned() }));
    }
}
