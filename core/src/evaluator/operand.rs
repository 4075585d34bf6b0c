//! Recovers the numeric operands on either side of an operator.

use core::ops::Range;

use crate::error::{Error, ErrorCode, Result};
use crate::syntax::scanner;

/// Operand text cut out of the buffer, with the span it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub text: String,
    pub span: Range<usize>,
}

impl Operand {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether any digit was collected. A bare sign is not an operand.
    pub fn has_digits(&self) -> bool {
        self.text.bytes().any(scanner::is_digit)
    }

    pub fn value(&self) -> Result<f64> {
        parse_number(&self.text)
    }
}

/// Parse a complete numeric literal.
pub(crate) fn parse_number(text: &str) -> Result<f64> {
    if !scanner::is_numeric(text) {
        return Err(invalid_literal(text));
    }
    text.parse::<f64>().map_err(|_| invalid_literal(text))
}

fn invalid_literal(text: &str) -> Error {
    Error::new(ErrorCode::InvalidToken, format!("Invalid token: {}", text))
}

/// Scan left from the operator at `op_pos`.
///
/// Digits and one decimal point are collected until an operator glyph is
/// reached. A `+`/`-` is taken as the operand's sign only when digits were
/// already collected and the sign starts the buffer or follows another
/// operator; `3-2` stops at the `-`, while `-3` and `2*-3` keep it.
pub fn left_operand(text: &str, op_pos: usize) -> Result<Operand> {
    let bytes = text.as_bytes();
    let mut collected = Vec::new();
    let mut seen_point = false;
    let mut pos = op_pos;

    while pos > 0 {
        let c = bytes[pos - 1];
        if scanner::is_operator(c) {
            let sign_position = pos - 1 == 0 || scanner::is_operator(bytes[pos - 2]);
            if scanner::is_sign(c) && !collected.is_empty() && sign_position {
                collected.push(c);
                pos -= 1;
            }
            break;
        }
        accept_numeric_char(c, &mut seen_point)?;
        collected.push(c);
        pos -= 1;
    }

    collected.reverse();
    Ok(Operand {
        text: collected.into_iter().map(char::from).collect(),
        span: pos..op_pos,
    })
}

/// Scan right from `start`, the first byte after an operator.
///
/// A `+`/`-` right at `start` is the operand's sign; scanning then stops at
/// the next operator glyph.
pub fn right_operand(text: &str, start: usize) -> Result<Operand> {
    let bytes = text.as_bytes();
    let mut collected = String::new();
    let mut seen_point = false;
    let mut pos = start;

    if pos < bytes.len()
        && scanner::is_sign(bytes[pos])
        && (pos == 0 || scanner::is_operator(bytes[pos - 1]))
    {
        collected.push(char::from(bytes[pos]));
        pos += 1;
    }

    while pos < bytes.len() {
        let c = bytes[pos];
        if scanner::is_operator(c) {
            break;
        }
        accept_numeric_char(c, &mut seen_point)?;
        collected.push(char::from(c));
        pos += 1;
    }

    Ok(Operand {
        text: collected,
        span: start..pos,
    })
}

fn accept_numeric_char(c: u8, seen_point: &mut bool) -> Result<()> {
    if c == b'.' {
        if *seen_point {
            return Err(Error::invalid_char('.'));
        }
        *seen_point = true;
        Ok(())
    } else if scanner::is_digit(c) {
        Ok(())
    } else {
        Err(Error::invalid_char(char::from(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn left(text: &str, op_pos: usize) -> (String, Range<usize>) {
        let operand = left_operand(text, op_pos).unwrap();
        (operand.text, operand.span)
    }

    fn right(text: &str, start: usize) -> (String, Range<usize>) {
        let operand = right_operand(text, start).unwrap();
        (operand.text, operand.span)
    }

    #[test]
    fn test_left_stops_at_operator() {
        assert_eq!(left("12+34*5", 5), ("34".to_string(), 3..5));
        assert_eq!(left("3-2", 1), ("3".to_string(), 0..1));
    }

    #[test]
    fn test_left_takes_leading_sign() {
        assert_eq!(left("-5+3", 2), ("-5".to_string(), 0..2));
        assert_eq!(left("1<-2+3", 4), ("-2".to_string(), 2..4));
    }

    #[test]
    fn test_left_sign_after_digit_is_an_operator() {
        assert_eq!(left("2-5+3", 3), ("5".to_string(), 2..3));
    }

    #[test]
    fn test_left_empty() {
        let operand = left_operand("1+~5", 2).unwrap();
        assert!(operand.is_empty());
        assert_eq!(operand.span, 2..2);

        let operand = left_operand("-5", 0).unwrap();
        assert!(operand.is_empty());
    }

    #[test]
    fn test_right_takes_sign_at_origin() {
        assert_eq!(right("3*-2", 2), ("-2".to_string(), 2..4));
        assert_eq!(right("3*+2.5-1", 2), ("+2.5".to_string(), 2..6));
        assert_eq!(right("3*2-1", 2), ("2".to_string(), 2..3));
    }

    #[test]
    fn test_right_bare_sign_has_no_digits() {
        let operand = right_operand("2*--3", 2).unwrap();
        assert_eq!(operand.text, "-");
        assert!(!operand.has_digits());
        assert!(operand.value().is_err());
    }

    #[test]
    fn test_second_decimal_point_is_invalid() {
        let err = right_operand("1+2.3.4", 2).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidToken);
        assert_eq!(err.message(), "Token is invalid: .");

        let err = left_operand("1.2.3+4", 5).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidToken);
    }

    #[test]
    fn test_foreign_character_is_invalid() {
        let err = right_operand("1+(2", 2).unwrap_err();
        assert_eq!(err.message(), "Token is invalid: (");
    }

    #[test]
    fn test_value() {
        assert_eq!(left_operand("-2.5*4", 4).unwrap().value().unwrap(), -2.5);
        assert_eq!(right_operand("4*+3", 2).unwrap().value().unwrap(), 3.0);
        assert!(parse_number("5.").is_err());
        assert!(parse_number(".5").is_err());
        assert_eq!(parse_number("0.125").unwrap(), 0.125);
    }
}
