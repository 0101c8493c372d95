/// Selects the arithmetic used when evaluating postfix or prefix expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NumericMode {
    /// Checked `i64` arithmetic. Division truncates toward zero and decimal
    /// literals are rejected.
    Integer,
    /// `f64` arithmetic.
    #[default]
    Real,
}

impl std::fmt::Display for NumericMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Real => write!(f, "real"),
        }
    }
}

/// The result of evaluating an expression, tagged with the mode that produced
/// it.
///
/// Real values print the way Rust prints `f64`, so integral results carry no
/// trailing `.0`. Negative zero prints as `0`.
///
/// # Example
/// ```
/// use notation::expression::value::Value;
///
/// assert_eq!(Value::Real(14.0).to_string(), "14");
/// assert_eq!(Value::Real(2.5).to_string(), "2.5");
/// assert_eq!(Value::Integer(-3).to_string(), "-3");
/// assert_eq!(Value::Real(-0.0).to_string(), "0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Produced in [`NumericMode::Integer`].
    Integer(i64),
    /// Produced in [`NumericMode::Real`].
    Real(f64),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            // `-0.0 == 0.0`, so this also drops the sign of negative zero.
            Self::Real(r) if *r == 0.0 => write!(f, "0"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(Value::Real(-0.0).to_string(), "0");
        assert_eq!(Value::Real(0.0).to_string(), "0");
        assert_eq!(Value::Real(-0.5).to_string(), "-0.5");
    }
}
