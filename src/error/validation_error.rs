#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors the lexical validator can report.
pub enum ValidationError {
    /// The expression is empty or consists only of whitespace.
    EmptyInput,
    /// A `)` has no matching `(`, or a `(` is never closed.
    UnbalancedParentheses,
    /// A character outside the supported alphabet was found.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character offset of the offending character.
        position:  usize,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Expression cannot be empty."),
            Self::UnbalancedParentheses => {
                write!(f, "Unbalanced parentheses in expression.")
            },
            Self::InvalidCharacter { character, position } => write!(f,
                                                                     "Unsupported character '{character}' at position {position}. Only numbers, operators and parentheses are allowed."),
        }
    }
}

impl std::error::Error for ValidationError {}
