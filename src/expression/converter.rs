/// Infix to postfix conversion (shunting-yard).
pub mod postfix;
/// Infix to prefix conversion by reversing the input, running the postfix
/// conversion and reversing its output.
pub mod prefix;

pub use postfix::to_postfix;
pub use prefix::to_prefix;
