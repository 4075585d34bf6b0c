//! Character classification and literal search over the working buffer.
//!
//! The buffer only ever holds ASCII (digits, operator glyphs, `.`, and
//! parentheses), so everything here works on bytes.

/// Whitespace that is dropped while the raw input is copied.
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n')
}

pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Operator glyphs. Multi-character operators are made of these.
pub fn is_operator(c: u8) -> bool {
    matches!(
        c,
        b'*' | b'/' | b'+' | b'-' | b'>' | b'<' | b'!' | b'=' | b'&' | b'|' | b'^' | b'%' | b'~'
    )
}

pub fn is_sign(c: u8) -> bool {
    c == b'+' || c == b'-'
}

/// Characters copied verbatim into the working buffer.
pub fn is_valid_char(c: u8) -> bool {
    is_digit(c) || is_operator(c) || c == b'.' || c == b'(' || c == b')'
}

/// First character of a variable or function name.
pub fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Any later character of a variable or function name.
pub fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Whether `text` is a complete numeric literal: an optional sign, digits,
/// and at most one decimal point that is neither first nor last.
pub fn is_numeric(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text).as_bytes();
    if digits.is_empty() || digits[0] == b'.' || digits[digits.len() - 1] == b'.' {
        return false;
    }

    let mut seen_point = false;
    for &c in digits {
        if c == b'.' {
            if seen_point {
                return false;
            }
            seen_point = true;
        } else if !is_digit(c) {
            return false;
        }
    }
    true
}

/// Byte offset of the first occurrence of `needle` in `haystack` at or after
/// `start`.
pub fn find(needle: &str, haystack: &str, start: usize) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .get(start..)?
        .find(needle)
        .map(|offset| offset + start)
}
