/// Validation errors.
///
/// Raised by the lexical validator before any structural processing of an
/// infix expression: empty input, unbalanced parentheses and characters
/// outside the supported alphabet.
pub mod validation_error;
/// Conversion errors.
///
/// Raised while converting an infix expression into postfix or prefix
/// notation. Wraps validation failures and adds the shunting-yard specific
/// failures such as mismatched parentheses.
pub mod conversion_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a postfix or
/// prefix expression. Evaluation errors include malformed token streams,
/// unrecognized tokens, division by zero and integer overflow.
pub mod eval_error;

pub use conversion_error::ConversionError;
pub use eval_error::EvalError;
pub use validation_error::ValidationError;

#[derive(Debug, PartialEq)]
/// Any error produced by the crate, regardless of the phase it came from.
///
/// The command-line front end and [`crate::run`] report failures through this
/// type so a single `match` covers every phase.
pub enum NotationError {
    /// The infix expression failed the lexical checks.
    Validation(ValidationError),
    /// The infix expression could not be converted.
    Conversion(ConversionError),
    /// The postfix or prefix expression could not be evaluated.
    Eval(EvalError),
}

impl std::fmt::Display for NotationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{e}"),
            Self::Conversion(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Conversion(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<ValidationError> for NotationError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ConversionError> for NotationError {
    fn from(value: ConversionError) -> Self {
        Self::Conversion(value)
    }
}

impl From<EvalError> for NotationError {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}
