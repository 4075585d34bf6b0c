//! The calculator entry points.

use core::fmt;

use super::{CalculatorOptions, MethodInvoker, Tracer, VariableResolver};
use crate::decimal;
use crate::error::Result;
use crate::evaluator::{self, Mode};

/// Evaluates arithmetic and logical expressions given as text.
///
/// A calculator holds configuration and the host hooks; every call to
/// [`calculate`](Self::calculate) and friends builds its own working state,
/// so one calculator can serve any number of calls, including calls made
/// from inside its own hooks.
///
/// # Example
///
/// ```
/// use reckon_core::Calculator;
///
/// let calculator = Calculator::new();
/// assert_eq!(calculator.calculate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(calculator.calculate_int("7 / 2").unwrap(), 3);
/// assert_eq!(calculator.calculate("POW(2, 10)").unwrap(), 1024.0);
/// ```
#[derive(Default)]
pub struct Calculator {
    options: CalculatorOptions,
    tracer: Option<Box<dyn Tracer>>,
    variable_resolver: Option<Box<dyn VariableResolver>>,
    method_invoker: Option<Box<dyn MethodInvoker>>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with the given options. The precision is clamped
    /// into range.
    pub fn with_options(options: CalculatorOptions) -> Self {
        let mut calculator = Self {
            options,
            ..Self::default()
        };
        calculator.set_precision(i32::from(calculator.options.precision));
        calculator
    }

    pub fn with_precision(precision: i32) -> Self {
        let mut calculator = Self::new();
        calculator.set_precision(precision);
        calculator
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Mutable access to the options. The precision is not re-clamped here;
    /// out-of-range values behave like the nearest bound when formatting.
    pub fn options_mut(&mut self) -> &mut CalculatorOptions {
        &mut self.options
    }

    // ------------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------------

    /// Evaluate `expression` as a floating-point value.
    pub fn calculate(&self, expression: &str) -> Result<f64> {
        evaluator::evaluate(self, expression, Mode::Float, 0)
    }

    /// Evaluate `expression` in signed 32-bit integer mode.
    ///
    /// Every operand and intermediate result must lie within `i32` and is
    /// truncated toward zero.
    pub fn calculate_int(&self, expression: &str) -> Result<i32> {
        evaluator::evaluate(self, expression, Mode::Signed, 0).map(|value| value as i32)
    }

    /// Evaluate `expression` in unsigned 32-bit integer mode.
    ///
    /// Negative operands or results fail with
    /// [`ErrorCode::IntegerUnderflow`](crate::ErrorCode::IntegerUnderflow).
    pub fn calculate_uint(&self, expression: &str) -> Result<u32> {
        evaluator::evaluate(self, expression, Mode::Unsigned, 0).map(|value| value as u32)
    }

    /// Format `value` with the stabilizing rounding at the current precision.
    /// Returns `None` for infinities and NaN.
    pub fn smart_round(&self, value: f64) -> Option<String> {
        decimal::smart_round(value, self.precision())
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    pub fn precision(&self) -> u8 {
        self.options.precision.min(decimal::MAX_PRECISION)
    }

    /// Set the significant-digit precision, clamped to 0..=32. Returns the
    /// previous precision.
    pub fn set_precision(&mut self, precision: i32) -> u8 {
        let previous = self.precision();
        self.options.precision = decimal::clamp_precision(precision);
        previous
    }

    pub fn debug_mode(&self) -> bool {
        self.options.debug
    }

    /// Turn trace output on or off. Returns the previous setting.
    ///
    /// Lines go to the tracer set with [`set_tracer`](Self::set_tracer).
    /// Without one they become `tracing` info events, which release builds
    /// compile out (`release_max_level_warn`): install a tracer to see trace
    /// output there.
    pub fn set_debug_mode(&mut self, debug: bool) -> bool {
        core::mem::replace(&mut self.options.debug, debug)
    }

    pub fn substitution_digits(&self) -> usize {
        self.options.substitution_digits
    }

    // ------------------------------------------------------------------------
    // Hooks
    // ------------------------------------------------------------------------

    pub fn tracer(&self) -> Option<&dyn Tracer> {
        self.tracer.as_deref()
    }

    /// Install a trace sink, returning the previous one. Without a tracer,
    /// debug lines are emitted as `tracing` events under `reckon::trace`.
    pub fn set_tracer(&mut self, tracer: Option<Box<dyn Tracer>>) -> Option<Box<dyn Tracer>> {
        core::mem::replace(&mut self.tracer, tracer)
    }

    pub fn variable_resolver(&self) -> Option<&dyn VariableResolver> {
        self.variable_resolver.as_deref()
    }

    pub fn set_variable_resolver(
        &mut self,
        resolver: Option<Box<dyn VariableResolver>>,
    ) -> Option<Box<dyn VariableResolver>> {
        core::mem::replace(&mut self.variable_resolver, resolver)
    }

    pub fn method_invoker(&self) -> Option<&dyn MethodInvoker> {
        self.method_invoker.as_deref()
    }

    pub fn set_method_invoker(
        &mut self,
        invoker: Option<Box<dyn MethodInvoker>>,
    ) -> Option<Box<dyn MethodInvoker>> {
        core::mem::replace(&mut self.method_invoker, invoker)
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("options", &self.options)
            .field("tracer", &self.tracer.is_some())
            .field("variable_resolver", &self.variable_resolver.is_some())
            .field("method_invoker", &self.method_invoker.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_is_clamped() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.precision(), 16);
        assert_eq!(calculator.set_precision(40), 16);
        assert_eq!(calculator.precision(), 32);
        assert_eq!(calculator.set_precision(-1), 32);
        assert_eq!(calculator.precision(), 0);
        assert_eq!(Calculator::with_precision(8).precision(), 8);
    }

    #[test]
    fn test_with_options_clamps_precision() {
        let calculator = Calculator::with_options(CalculatorOptions {
            precision: 99,
            ..CalculatorOptions::default()
        });
        assert_eq!(calculator.precision(), 32);
    }

    #[test]
    fn test_setters_return_previous() {
        let mut calculator = Calculator::new();
        assert!(!calculator.set_debug_mode(true));
        assert!(calculator.set_debug_mode(false));

        let tracer: Box<dyn Tracer> = Box::new(|_: &str| {});
        assert!(calculator.set_tracer(Some(tracer)).is_none());
        assert!(calculator.tracer().is_some());
        assert!(calculator.set_tracer(None).is_some());
        assert!(calculator.tracer().is_none());

        let resolver: Box<dyn VariableResolver> = Box::new(|_: &Calculator, _: &str| Some(1.0));
        assert!(calculator.set_variable_resolver(Some(resolver)).is_none());
        assert!(calculator.variable_resolver().is_some());

        let invoker: Box<dyn MethodInvoker> =
            Box::new(|_: &Calculator, _: &str, _: &[f64]| None);
        assert!(calculator.set_method_invoker(Some(invoker)).is_none());
        assert!(calculator.set_method_invoker(None).is_some());
    }

    #[test]
    fn test_smart_round_uses_precision() {
        let calculator = Calculator::new();
        assert_eq!(calculator.smart_round(1.2999999999).as_deref(), Some("1.3"));
        assert_eq!(calculator.smart_round(f64::INFINITY), None);
    }

    #[test]
    fn test_debug_output() {
        let calculator = Calculator::new();
        let text = format!("{:?}", calculator);
        assert!(text.contains("precision: 16"));
        assert!(text.contains("tracer: false"));
    }

    #[test]
    fn test_debug_mode_without_tracer() {
        let mut calculator = Calculator::new();
        calculator.set_debug_mode(true);
        assert!(calculator.tracer().is_none());
        assert_eq!(calculator.calculate("(1+2)*3").unwrap(), 9.0);
    }
}
