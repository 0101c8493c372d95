/// Result values and numeric modes.
///
/// Declares [`Value`], the mode-tagged result of an evaluation, and
/// [`NumericMode`], which selects between integer and floating-point
/// arithmetic.
pub mod core;
/// The [`Number`] trait and its integer and floating-point implementations.
///
/// Evaluators are generic over `Number`, so each numeric mode shares a single
/// code path and differs only in parsing and arithmetic.
pub mod number;

pub use self::{
    core::{NumericMode, Value},
    number::Number,
};
