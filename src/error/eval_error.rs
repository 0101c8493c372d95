#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating postfix or prefix
/// notation.
pub enum EvalError {
    /// The expression is empty or consists only of whitespace.
    EmptyInput,
    /// The operand and operator counts do not reduce to a single value.
    MalformedExpression {
        /// What went wrong, e.g. which operator lacked operands.
        details: String,
    },
    /// A token that is neither a numeric literal nor an operator.
    InvalidToken {
        /// The token as written.
        token: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// An operator symbol outside `+ - * / ^`.
    UnknownOperator {
        /// The unrecognized symbol.
        symbol: char,
    },
    /// Integer arithmetic overflowed.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Expression cannot be empty."),
            Self::MalformedExpression { details } => {
                write!(f, "Malformed expression: {details}.")
            },
            Self::InvalidToken { token } => write!(f, "Invalid token in expression: {token}."),
            Self::DivisionByZero => write!(f, "Division by zero is not allowed."),
            Self::UnknownOperator { symbol } => write!(f, "Unknown operator: {symbol}."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for EvalError {}
