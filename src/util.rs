/// Numeric conversion helpers.
///
/// This module provides safe functions for narrowing integers without
/// risking silent truncation. The integer evaluation mode uses them to reduce
/// `^` exponents to `u32`.
///
/// All functions return a `Result`, which is `Ok` if the conversion is
/// lossless, or an error if the value is out of range.
pub mod num;
