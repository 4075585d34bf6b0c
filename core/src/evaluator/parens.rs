//! Finds the next parenthesized span to reduce.

use core::ops::Range;

use crate::error::{Error, ErrorCode, Result};
use crate::syntax::scanner;

/// Fail unless every `(` has a matching `)`.
pub fn check_balance(text: &str) -> Result<()> {
    let depth = text.bytes().fold(0isize, |depth, c| match c {
        b'(' => depth + 1,
        b')' => depth - 1,
        _ => depth,
    });
    if depth == 0 {
        Ok(())
    } else {
        Err(Error::parentheses_mismatch())
    }
}

/// The leftmost innermost `(...)` pair, parentheses included.
///
/// The pair closed by the first `)` in the buffer contains no other
/// parentheses. Returns `None` once no parentheses remain.
pub fn innermost_span(text: &str) -> Result<Option<Range<usize>>> {
    let Some(close) = text.find(')') else {
        return if text.contains('(') {
            Err(Error::parentheses_mismatch())
        } else {
            Ok(None)
        };
    };
    let open = text[..close]
        .rfind('(')
        .ok_or_else(Error::parentheses_mismatch)?;

    let bytes = text.as_bytes();
    if open > 0 {
        let before = bytes[open - 1];
        if !scanner::is_operator(before) && before != b'(' {
            return Err(Error::new(
                ErrorCode::MissingOperator,
                "Missing mathematical operator near: (.",
            ));
        }
    }
    if let Some(&after) = bytes.get(close + 1) {
        if !scanner::is_operator(after) && after != b')' {
            return Err(Error::new(
                ErrorCode::MissingOperator,
                "Missing mathematical operator near: ).",
            ));
        }
    }

    Ok(Some(open..close + 1))
}
