use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting infix notation.
pub enum ConversionError {
    /// The expression was rejected by the lexical validator.
    Invalid(ValidationError),
    /// A `)` closed nothing, or a `(` was still open at the end of input.
    MismatchedParentheses,
    /// A run of digits and decimal points that is not a well formed number,
    /// such as `1.2.3` or `4.`.
    InvalidNumber {
        /// The malformed literal, as written in the scanned string.
        literal: String,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{e}"),
            Self::MismatchedParentheses => {
                write!(f, "Mismatched parentheses in the expression.")
            },
            Self::InvalidNumber { literal } => {
                write!(f, "Invalid numeric literal: {literal}.")
            },
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for ConversionError {
    fn from(value: ValidationError) -> Self {
        Self::Invalid(value)
    }
}
