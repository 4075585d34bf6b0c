//! Builds the working buffer from raw input.
//!
//! Whitespace is dropped and every identifier is replaced by its value:
//! `name(args)` is a call, dispatched to the native library first and then to
//! the host's method invoker; a bare `name` is looked up through the host's
//! variable resolver. Values are written in fixed notation so the reducer
//! only ever sees digits, operators and parentheses.

use core::ops::Range;

use smallvec::SmallVec;

use super::{Context, Expression, Mode};
use crate::decimal;
use crate::error::{Error, ErrorCode, Result};
use crate::stdlib::math;
use crate::syntax::scanner;

/// Longest accepted variable or function name, in bytes.
pub const MAX_IDENTIFIER_LEN: usize = 255;

/// Evaluated call arguments. Most calls take a handful.
pub type Arguments = SmallVec<[f64; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Unset,
    Numeric,
    Other,
}

pub(crate) fn build_expression(ctx: &Context<'_>, source: &str) -> Result<Expression> {
    let bytes = source.as_bytes();
    let mut expression = Expression::with_capacity(source.len())?;
    let mut last = Last::Unset;
    let mut after_whitespace = false;
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];
        if scanner::is_whitespace(c) {
            after_whitespace = true;
            pos += 1;
            continue;
        }

        if scanner::is_digit(c) {
            // `1 2` is two numbers, not twelve.
            if after_whitespace && last == Last::Numeric {
                return Err(Error::invalid_char(char::from(c)).with_span(pos..pos + 1));
            }
            last = Last::Numeric;
        } else if scanner::is_valid_char(c) {
            last = Last::Other;
        } else if scanner::is_identifier_start(c) {
            pos = substitute_identifier(ctx, source, pos, &mut expression)?;
            last = Last::Numeric;
            after_whitespace = false;
            continue;
        } else {
            let ch = source[pos..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(Error::invalid_char(ch).with_span(pos..pos + ch.len_utf8()));
        }

        expression.push(char::from(c))?;
        after_whitespace = false;
        pos += 1;
    }

    Ok(expression)
}

/// Replace the identifier starting at `start` with its value and return the
/// position just past what was consumed.
fn substitute_identifier(
    ctx: &Context<'_>,
    source: &str,
    start: usize,
    expression: &mut Expression,
) -> Result<usize> {
    let bytes = source.as_bytes();
    let end = start
        + bytes[start..]
            .iter()
            .take_while(|&&c| scanner::is_identifier_char(c))
            .count();
    let name = &source[start..end];

    if name.len() > MAX_IDENTIFIER_LEN {
        return Err(Error::new(
            ErrorCode::InvalidToken,
            "Variable length limit exceeded.",
        )
        .with_span(start..end));
    }

    if matches!(expression.last(), Some(c) if scanner::is_digit(c) || c == b'.' || c == b')') {
        return Err(Error::new(
            ErrorCode::MissingOperator,
            format!("Missing mathematical operator before: {}.", name),
        )
        .with_span(start..end));
    }

    let open = end
        + bytes[end..]
            .iter()
            .take_while(|&&c| scanner::is_whitespace(c))
            .count();

    let (value, next) = if bytes.get(open) == Some(&b'(') {
        let (arguments, after) = parse_arguments(ctx, source, open)?;
        let value = call(ctx, name, &arguments).map_err(|err| match err.span() {
            Some(_) => err,
            None => err.with_span(start..after),
        })?;
        ctx.trace(format_args!("\t{}({:?}) = {}", name, arguments.as_slice(), value));
        (value, after)
    } else {
        let value = resolve(ctx, name).map_err(|err| err.with_span(start..end))?;
        ctx.trace(format_args!("\t{} = {}", name, value));
        (value, end)
    };
    tracing::trace!(name, value, "Substituted identifier");

    if !value.is_finite() {
        return Err(Error::new(
            ErrorCode::InfiniteOrNan,
            format!("Value of {} is infinite or not a number.", name),
        )
        .with_span(start..next));
    }

    write_value(ctx, expression, value)?;
    Ok(next)
}

/// Append `value` in fixed notation.
///
/// A negative value right after a `+` or `-` folds into it, so `5-x` with
/// `x = -3` becomes `5+3.00000000` rather than `5--3.00000000`.
fn write_value(ctx: &Context<'_>, expression: &mut Expression, value: f64) -> Result<()> {
    let digits = ctx.calculator.substitution_digits();
    // No negative zero in the buffer.
    let value = if value == 0.0 { 0.0 } else { value };

    if value < 0.0 {
        let flipped = match expression.last() {
            Some(b'-') => Some('+'),
            Some(b'+') => Some('-'),
            _ => None,
        };
        if let Some(sign) = flipped {
            expression.pop();
            expression.push(sign)?;
            return expression.push_str(&decimal::format_fixed(-value, digits));
        }
    }

    expression.push_str(&decimal::format_fixed(value, digits))
}

/// Parse and evaluate the argument list whose `(` is at `open`.
///
/// Arguments are split at top-level commas and each one is evaluated as a
/// complete expression in float mode. `f()` has no arguments. Returns the
/// values and the position just past the closing `)`.
fn parse_arguments(ctx: &Context<'_>, source: &str, open: usize) -> Result<(Arguments, usize)> {
    let bytes = source.as_bytes();
    let mut spans: SmallVec<[Range<usize>; 4]> = SmallVec::new();
    let mut depth = 0usize;
    let mut arg_start = open + 1;
    let mut close = None;

    for (pos, &c) in bytes.iter().enumerate().skip(open) {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    spans.push(arg_start..pos);
                    close = Some(pos);
                    break;
                }
            }
            b',' if depth == 1 => {
                spans.push(arg_start..pos);
                arg_start = pos + 1;
            }
            _ => {}
        }
    }

    let Some(close) = close else {
        return Err(Error::parentheses_mismatch().with_span(open..source.len()));
    };

    if spans.len() == 1 && is_blank(&source[spans[0].clone()]) {
        return Ok((Arguments::new(), close + 1));
    }

    let max_depth = ctx.calculator.options().max_depth;
    if ctx.depth >= max_depth {
        return Err(Error::new(
            ErrorCode::DepthExceeded,
            format!("Maximum nesting depth of {} exceeded.", max_depth),
        )
        .with_span(open..close + 1));
    }

    let mut arguments = Arguments::new();
    for span in spans {
        let text = &source[span.clone()];
        if is_blank(text) {
            return Err(Error::new(ErrorCode::InvalidToken, "Missing method parameter.")
                .with_span(span));
        }
        let value = super::evaluate(ctx.calculator, text, Mode::Float, ctx.depth + 1)
            .map_err(|err| err.shifted(span.start))?;
        arguments.push(value);
    }

    Ok((arguments, close + 1))
}

fn call(ctx: &Context<'_>, name: &str, arguments: &[f64]) -> Result<f64> {
    if let Some(function) = math::lookup(name) {
        return function.call(arguments);
    }

    ctx.calculator
        .method_invoker()
        .and_then(|invoker| invoker.invoke(ctx.calculator, name, arguments))
        .ok_or_else(|| {
            Error::new(
                ErrorCode::InvalidToken,
                format!("Undeclared identifier: {}.", name),
            )
        })
}

fn resolve(ctx: &Context<'_>, name: &str) -> Result<f64> {
    ctx.calculator
        .variable_resolver()
        .and_then(|resolver| resolver.resolve(ctx.calculator, name))
        .ok_or_else(|| {
            Error::new(
                ErrorCode::InvalidToken,
                format!("Variable was not defined: {}.", name),
            )
        })
}

fn is_blank(text: &str) -> bool {
    text.bytes().all(scanner::is_whitespace)
}
