//! Reduction of a parenthesis-free span, tier by tier.

use super::Context;
use super::expression::Expression;
use super::operand::{self, left_operand, right_operand};
use super::operators::{Reduction, apply_binary, apply_unary};
use crate::error::{Error, ErrorCode, Result};
use crate::syntax::operators::{
    THIRD_ORDER, find_first_order, find_prefix_not, find_second_order, find_third_order,
};
use crate::syntax::{Operator, scanner};

/// Reduce `expr`, which must not contain parentheses, to a single literal and
/// return its value.
pub(crate) fn reduce(ctx: &Context<'_>, expr: &mut Expression) -> Result<f64> {
    while let Some(pos) = find_prefix_not(expr.as_str()) {
        reduce_bound(ctx, expr, Operator::Not, pos)?;
    }

    while let Some((pos, op)) = find_first_order(expr.as_str()) {
        reduce_bound(ctx, expr, op, pos)?;
    }

    let mut start = 1;
    while let Some((pos, op)) = find_second_order(expr.as_str(), start) {
        if reduce_operator(ctx, expr, op, pos)? == Reduction::LeadingSign {
            start = pos + 1;
        }
    }

    for &op in THIRD_ORDER {
        while let Some(pos) = find_third_order(expr.as_str(), op) {
            reduce_bound(ctx, expr, op, pos)?;
        }
    }

    finish(ctx, expr)
}

/// Reduce an operator that can never be a sign.
fn reduce_bound(ctx: &Context<'_>, expr: &mut Expression, op: Operator, pos: usize) -> Result<()> {
    match reduce_operator(ctx, expr, op, pos)? {
        Reduction::Reduced => Ok(()),
        Reduction::LeadingSign => Err(invalid_operator_token(op)),
    }
}

/// Reduce the occurrence of `op` at `pos` and splice the result back.
pub(crate) fn reduce_operator(
    ctx: &Context<'_>,
    expr: &mut Expression,
    op: Operator,
    pos: usize,
) -> Result<Reduction> {
    let text = expr.as_str();
    let left = left_operand(text, pos)?;
    let right_start = pos + op.lexeme().len();

    if left.is_empty() {
        if op.is_sign() {
            return Ok(Reduction::LeadingSign);
        }
        if !op.is_prefix() {
            return Err(invalid_operator_token(op));
        }

        let right = right_operand(text, right_start)?;
        if !right.has_digits() {
            return Err(Error::right_value_missing());
        }
        let value = right.value()?;
        let result = ctx.mode.check(apply_unary(op, value)?)?;
        let result_text = ctx.format_integer(result)?;

        ctx.trace(format_args!("\t{}{} = {}", op, right.text, result_text));
        tracing::trace!(op = %op, operand = %right.text, result = %result_text, "Reduced unary");

        expr.replace(pos..right.span.end, &result_text)?;
        return Ok(Reduction::Reduced);
    }

    let right = right_operand(text, right_start)?;
    if !right.has_digits() {
        return Err(Error::right_value_missing());
    }

    let lhs = ctx.mode.check(left.value()?)?;
    let rhs = ctx.mode.check(right.value()?)?;
    let result = ctx.mode.check(apply_binary(op, lhs, rhs)?)?;
    let result_text = ctx.format_value(result)?;

    if ctx.mode.is_integer() {
        ctx.trace(format_args!(
            "\t({} {} {}) = {}",
            left.text, op, right.text, result_text
        ));
    } else {
        ctx.trace(format_args!(
            "\t({:.4} {} {:.4}) = {:.4}",
            lhs, op, rhs, result
        ));
    }
    tracing::trace!(
        left = %left.text,
        op = %op,
        right = %right.text,
        result = %result_text,
        "Reduced binary"
    );

    expr.replace(left.span.start..right.span.end, &result_text)?;
    Ok(Reduction::Reduced)
}

/// Read the value of a fully reduced span.
fn finish(ctx: &Context<'_>, expr: &Expression) -> Result<f64> {
    let text = expr.as_str();
    let Some(&first) = text.as_bytes().first() else {
        return Err(Error::new(ErrorCode::InvalidToken, "Expression is empty."));
    };

    if scanner::is_numeric(text) {
        return ctx.mode.check(operand::parse_number(text)?).map(positive_zero);
    }

    let prefix = match first {
        b'!' => Some(Operator::Not),
        b'~' => Some(Operator::Complement),
        _ => None,
    };
    let literal = match prefix {
        Some(op) => {
            let rest = &text[1..];
            if scanner::is_numeric(rest) {
                let result = ctx.mode.check(apply_unary(op, operand::parse_number(rest)?)?)?;
                ctx.trace(format_args!("\t{} = {}", text, ctx.format_integer(result)?));
                return Ok(positive_zero(result));
            }
            rest
        }
        None => text,
    };

    Err(Error::new(
        ErrorCode::InvalidToken,
        format!("Invalid token: {}", first_invalid_char(literal)),
    ))
}

/// `-0` folds to `0`.
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// The character that keeps `literal` from being a number.
fn first_invalid_char(literal: &str) -> char {
    let digits = literal.strip_prefix(['-', '+']).unwrap_or(literal);
    let mut seen_point = false;
    for (i, c) in digits.char_indices() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point && i > 0 && i + 1 < digits.len() => seen_point = true,
            _ => return c,
        }
    }
    literal.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn invalid_operator_token(op: Operator) -> Error {
    Error::new(ErrorCode::InvalidToken, format!("Invalid token: {}", op))
}
