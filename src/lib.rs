//! # notation
//!
//! notation converts arithmetic expressions between infix, postfix and prefix
//! notation and evaluates postfix and prefix expressions. Expressions are made
//! of integer or decimal literals, the binary operators `+ - * / ^` and
//! parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for validation, conversion and evaluation.
///
/// This module defines every error that can be raised while checking,
/// converting or evaluating an expression, one enum per phase plus
/// [`error::NotationError`] covering all of them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Carries the offending character, literal or token for user feedback.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// The expression-processing pipeline.
///
/// This module ties together the lexical validator, operator table,
/// converters and evaluators. Every operation is a pure function over its
/// input and owns its own stacks.
///
/// # Responsibilities
/// - Validates infix input before conversion.
/// - Converts infix to postfix and prefix notation.
/// - Evaluates postfix and prefix notation in integer or real mode.
pub mod expression;
/// The interactive menu session.
///
/// A line-oriented front end over [`run`]: a numbered menu, expression
/// prompts, help text and exit confirmation. It is generic over its input and
/// output so it can be driven from tests.
pub mod repl;
/// General utilities for safe numeric conversion.
pub mod util;

pub use crate::{
    error::NotationError,
    expression::{
        converter::{to_postfix, to_prefix},
        evaluator::{Notation, evaluate_postfix, evaluate_prefix},
        validator::validate,
        value::{Number, NumericMode, Value},
    },
};

/// One operation the front ends can run on an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Convert infix to postfix.
    ToPostfix,
    /// Convert infix to prefix.
    ToPrefix,
    /// Evaluate a postfix expression.
    EvalPostfix,
    /// Evaluate a prefix expression.
    EvalPrefix,
}

impl Command {
    /// The notation the command expects its input in.
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::ToPostfix | Self::ToPrefix => "infix",
            Self::EvalPostfix => "postfix",
            Self::EvalPrefix => "prefix",
        }
    }

    /// The label printed in front of a successful result.
    #[must_use]
    pub const fn result_label(self) -> &'static str {
        match self {
            Self::ToPostfix => "Postfix Expression",
            Self::ToPrefix => "Prefix Expression",
            Self::EvalPostfix | Self::EvalPrefix => "Result",
        }
    }
}

/// Runs `command` on `expr` and returns the printable result.
///
/// Infix input goes through the full lexical validator before conversion, so
/// an unbalanced expression is reported as
/// [`ValidationError::UnbalancedParentheses`](error::ValidationError). Postfix
/// and prefix input goes through the structural check before evaluation.
///
/// # Errors
/// Returns the validation, conversion or evaluation error that stopped the
/// command.
///
/// # Examples
/// ```
/// use notation::{Command, NumericMode, run};
///
/// let postfix = run(Command::ToPostfix, "3 + 4 * 2", NumericMode::Real).unwrap();
/// assert_eq!(postfix, "3 4 2 * +");
///
/// let value = run(Command::EvalPrefix, "+ 2 * 3 4", NumericMode::Integer).unwrap();
/// assert_eq!(value, "14");
///
/// // Unbalanced parentheses are caught before conversion.
/// assert!(run(Command::ToPrefix, "(1 + 2", NumericMode::Real).is_err());
/// ```
#[tracing::instrument(level = "debug")]
pub fn run(command: Command, expr: &str, mode: NumericMode) -> Result<String, NotationError> {
    let expr = expr.trim();

    let output = match command {
        Command::ToPostfix => {
            validate(expr)?;
            to_postfix(expr)?
        },
        Command::ToPrefix => {
            validate(expr)?;
            to_prefix(expr)?
        },
        Command::EvalPostfix => evaluate_checked(expr, Notation::Postfix, mode)?,
        Command::EvalPrefix => evaluate_checked(expr, Notation::Prefix, mode)?,
    };

    tracing::debug!(%output, "command finished");
    Ok(output)
}

fn evaluate_checked(expr: &str, notation: Notation, mode: NumericMode) -> Result<String, NotationError> {
    expression::evaluator::check(expr, notation)?;
    let value = expression::evaluator::evaluate(expr, notation, mode)?;
    Ok(value.to_string())
}
