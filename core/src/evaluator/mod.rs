//! Text-reduction evaluator.
//!
//! An expression is evaluated without building tokens or a tree. The raw
//! input is copied into an [`Expression`] buffer, with variables and function
//! calls replaced by their values. Then the innermost parenthesized span is
//! reduced operator by operator and its result is spliced back as text,
//! until no parentheses remain and the whole buffer is reduced to one
//! literal.
//!
//! ## Example
//!
//! ```
//! use reckon_core::Calculator;
//!
//! let calculator = Calculator::new();
//! assert_eq!(calculator.calculate("(2+3)*4").unwrap(), 20.0);
//! ```

mod cascade;
pub mod expression;
mod mode;
pub mod operand;
pub(crate) mod operators;
pub mod parens;
mod substitute;


pub use expression::Expression;
pub use mode::Mode;

use core::fmt;
use core::ops::Range;

use crate::api::Calculator;
use crate::decimal;
use crate::error::{Error, ErrorCode, Result};

/// Per-call state shared by every reduction of one evaluation.
#[derive(Clone, Copy)]
pub(crate) struct Context<'c> {
    pub calculator: &'c Calculator,
    pub mode: Mode,
    /// Nesting level of function-call arguments; 0 for the top-level call.
    pub depth: usize,
}

impl<'c> Context<'c> {
    pub fn new(calculator: &'c Calculator, mode: Mode, depth: usize) -> Self {
        Self {
            calculator,
            mode,
            depth,
        }
    }

    /// Send a line to the trace sink when debug mode is on.
    pub fn trace(&self, line: fmt::Arguments<'_>) {
        if !self.calculator.debug_mode() {
            return;
        }
        match self.calculator.tracer() {
            Some(tracer) => tracer.trace(&line.to_string()),
            None => tracing::info!(target: "reckon::trace", "{}", line),
        }
    }

    /// Text written back into the buffer for an intermediate result.
    pub fn format_value(&self, value: f64) -> Result<String> {
        if self.mode.is_integer() {
            self.format_integer(value)
        } else {
            decimal::format_decimal(value, self.calculator.precision()).ok_or_else(|| {
                Error::new(
                    ErrorCode::DoubleTextConversion,
                    "Double to text conversion failed.",
                )
            })
        }
    }

    pub fn format_integer(&self, value: f64) -> Result<String> {
        decimal::format_integer(value).ok_or_else(|| {
            Error::new(
                ErrorCode::IntegerTextConversion,
                "Integer to text conversion failed.",
            )
        })
    }

    /// Text for the result of a whole parenthesized span.
    fn format_span_result(&self, value: f64) -> Result<String> {
        if !self.mode.is_integer() && self.calculator.options().stabilize_results {
            return decimal::smart_round(value, self.calculator.precision()).ok_or_else(|| {
                Error::new(
                    ErrorCode::DoubleTextConversion,
                    "Double to text conversion failed.",
                )
            });
        }
        self.format_value(self.mode.check(value)?)
    }
}

/// One evaluation: the working buffer and the running total.
pub(crate) struct Evaluation<'c> {
    ctx: Context<'c>,
    expression: Expression,
    running_total: f64,
}

impl<'c> Evaluation<'c> {
    pub fn new(ctx: Context<'c>, expression: Expression) -> Self {
        Self {
            ctx,
            expression,
            running_total: 0.0,
        }
    }

    /// Reduce parenthesized spans innermost first, then the remaining buffer.
    pub fn run(mut self) -> Result<f64> {
        parens::check_balance(self.expression.as_str())?;

        while let Some(span) = parens::innermost_span(self.expression.as_str())? {
            let inner = &self.expression.as_str()[span.start + 1..span.end - 1];
            let mut sub = Expression::from_text(inner)?;
            self.running_total = cascade::reduce(&self.ctx, &mut sub)?;

            let text = self.ctx.format_span_result(self.running_total)?;
            let (span, text) = fold_sign(&self.expression, span, text);
            tracing::trace!(span = ?span, result = %text, "Reduced parentheses");
            self.expression.replace(span, &text)?;
        }

        self.running_total = cascade::reduce(&self.ctx, &mut self.expression)?;
        Ok(self.running_total)
    }
}

/// Merge a negative span result into a `+`/`-` right before the span, so
/// `-(-3)` becomes `+3` instead of the unreadable `--3`.
fn fold_sign(expression: &Expression, span: Range<usize>, text: String) -> (Range<usize>, String) {
    if !text.starts_with('-') {
        return (span, text);
    }
    let flipped = match span.start.checked_sub(1).map(|i| expression.as_bytes()[i]) {
        Some(b'-') => '+',
        Some(b'+') => '-',
        _ => return (span, text),
    };
    (span.start - 1..span.end, format!("{}{}", flipped, &text[1..]))
}

/// Evaluate `source` from scratch. `depth` is the nesting level of
/// function-call arguments.
pub(crate) fn evaluate(
    calculator: &Calculator,
    source: &str,
    mode: Mode,
    depth: usize,
) -> Result<f64> {
    let ctx = Context::new(calculator, mode, depth);
    ctx.trace(format_args!("\"{}\" = {{", source));
    tracing::debug!(source, ?mode, depth, "Evaluating expression");

    let result = substitute::build_expression(&ctx, source)
        .and_then(|expression| Evaluation::new(ctx, expression).run());

    match &result {
        Ok(value) => {
            ctx.trace(format_args!("}} = {:.4}", value));
            tracing::debug!(source, value, "Evaluated expression");
        }
        Err(err) => {
            if depth == 0 {
                ctx.trace(format_args!("\t{}", err.message()));
            }
            ctx.trace(format_args!("}}"));
            tracing::debug!(source, code = ?err.code(), error = %err, "Evaluation failed");
        }
    }
    result
}
