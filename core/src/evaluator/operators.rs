//! Binary and unary operator implementations.

use crate::error::{Error, ErrorCode, Result};
use crate::syntax::Operator;

/// Outcome of reducing a single operator occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reduction {
    /// The operator and its operands were replaced by the result.
    Reduced,
    /// The `+`/`-` had nothing to its left: it is the sign of the number that
    /// follows, and the buffer was left unchanged.
    LeadingSign,
}

/// Apply a binary operator.
///
/// Comparisons and the logical operators produce `1` or `0`. The
/// integer-exclusive operators work on the operands truncated to `i64`.
/// Results that are infinite or NaN are rejected.
pub(crate) fn apply_binary(op: Operator, left: f64, right: f64) -> Result<f64> {
    if op.is_integer_exclusive() {
        return apply_integer(op, left.trunc() as i64, right.trunc() as i64).map(|v| v as f64);
    }

    let result = match op {
        Operator::Mul => left * right,
        Operator::Div => {
            if right == 0.0 {
                return Err(Error::new(ErrorCode::InvalidOperator, "Divide by zero."));
            }
            left / right
        }
        Operator::Mod => {
            if right == 0.0 {
                return Err(Error::new(ErrorCode::InvalidOperator, "Mod by zero."));
            }
            left % right
        }
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::LogicalAnd => truth(left != 0.0 && right != 0.0),
        Operator::LogicalOr => truth(left != 0.0 || right != 0.0),
        Operator::Equal => truth(left == right),
        Operator::Greater => truth(left > right),
        Operator::Less => truth(left < right),
        Operator::GreaterEqual => truth(left >= right),
        Operator::LessEqual => truth(left <= right),
        // A `!` with a number on both sides compares like `!=`.
        Operator::LessGreater | Operator::NotEqual | Operator::Not => truth(left != right),
        _ => return Err(invalid_operator(op)),
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(Error::new(
            ErrorCode::InfiniteOrNan,
            format!("Result of {} is infinite or not a number.", op),
        ))
    }
}

/// Apply `!` or `~` to the operand to its right.
pub(crate) fn apply_unary(op: Operator, value: f64) -> Result<f64> {
    let value = value.trunc() as i64;
    match op {
        Operator::Not => Ok(truth(value == 0)),
        Operator::Complement => Ok(!value as f64),
        _ => Err(invalid_operator(op)),
    }
}

fn apply_integer(op: Operator, left: i64, right: i64) -> Result<i64> {
    match op {
        Operator::BitAnd | Operator::AndEq => Ok(left & right),
        Operator::BitOr | Operator::OrEq => Ok(left | right),
        Operator::BitXor | Operator::XorEq => Ok(left ^ right),
        Operator::ShiftLeft => shift_amount(right).map(|s| left << s),
        Operator::ShiftRight => shift_amount(right).map(|s| left >> s),
        _ => Err(invalid_operator(op)),
    }
}

fn shift_amount(amount: i64) -> Result<u32> {
    u32::try_from(amount)
        .ok()
        .filter(|&s| s < i64::BITS)
        .ok_or_else(|| {
            Error::new(
                ErrorCode::InvalidOperator,
                format!("Invalid shift amount: {}.", amount),
            )
        })
}

fn truth(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

fn invalid_operator(op: Operator) -> Error {
    Error::new(ErrorCode::InvalidOperator, format!("Invalid operator: {}.", op))
}
