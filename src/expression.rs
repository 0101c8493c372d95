/// The converter module turns infix expressions into postfix or prefix
/// notation.
///
/// # Responsibilities
/// - Implements the shunting-yard algorithm over the characters of an infix
///   expression.
/// - Derives prefix conversion from the postfix pass by reversal.
/// - Reports mismatched parentheses and malformed numeric literals.
pub mod converter;
/// The evaluator module reduces postfix and prefix expressions to a number.
///
/// # Responsibilities
/// - Checks the operand/operator balance before computing anything.
/// - Runs the operand stack machine in the right direction for each notation.
/// - Dispatches between integer and floating-point modes.
pub mod evaluator;
/// The lexer module classifies the words of postfix and prefix expressions.
///
/// Each whitespace-delimited word must be exactly one numeric literal or one
/// operator.
pub mod lexer;
/// The operator module defines the five binary operators, their precedence
/// and their application.
pub mod operator;
/// The validator module performs the lexical checks on infix input: emptiness,
/// parenthesis balance and the character set.
pub mod validator;
/// The value module defines numeric modes, the [`value::Number`] trait and the
/// mode-tagged [`value::Value`] result.
pub mod value;
