//! Configuration options for the calculator.

use crate::decimal;

/// Configuration options for a [`Calculator`](super::Calculator).
///
/// # Example
///
/// ```
/// use reckon_core::api::CalculatorOptions;
///
/// let options = CalculatorOptions {
///     precision: 10,
///     stabilize_results: true,
///     ..CalculatorOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Significant digits kept when intermediate results are written back
    /// as text. Clamped to 0..=32 by the calculator setters.
    ///
    /// Default: 16
    pub precision: u8,

    /// Emit a trace line for each reduction step.
    ///
    /// Default: false
    pub debug: bool,

    /// Digits after the decimal point used when a variable or function value
    /// is substituted into the expression.
    ///
    /// Default: 8
    pub substitution_digits: usize,

    /// Write the result of each parenthesized span with
    /// [`smart_round`](crate::decimal::smart_round) instead of plain
    /// formatting. Float mode only.
    ///
    /// Default: false
    pub stabilize_results: bool,

    /// Maximum nesting of function-call arguments.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            precision: decimal::DEFAULT_PRECISION,
            debug: false,
            substitution_digits: decimal::DEFAULT_SUBSTITUTION_DIGITS,
            stabilize_results: false,
            max_depth: 256,
        }
    }
}
