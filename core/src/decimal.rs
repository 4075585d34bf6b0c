//! Conversion between `f64` values and the decimal text kept in the working
//! buffer.
//!
//! Every intermediate result is written back into the expression as text and
//! parsed again by the next reduction, so the text form must be plain
//! (no exponent), canonical (no trailing zeros) and stable across passes.

/// Lowest accepted precision.
pub const MIN_PRECISION: u8 = 0;
/// Highest accepted precision.
pub const MAX_PRECISION: u8 = 32;
/// Precision used by a default-constructed calculator.
pub const DEFAULT_PRECISION: u8 = 16;

/// Digits after the point used when substituting variable and method values.
pub const DEFAULT_SUBSTITUTION_DIGITS: usize = 8;

// Heuristic limits of `smart_round`. They are carried over unchanged and have
// no derivation beyond "works for the values seen in practice".
const ISOLATED_DIGIT_MIN_REPEATS: usize = 3;
const NINES_RUN_LIMIT: usize = 8;
const ZEROS_RUN_LIMIT: usize = 4;

/// Clamp a requested precision into `MIN_PRECISION..=MAX_PRECISION`.
pub fn clamp_precision(precision: i32) -> u8 {
    precision.clamp(i32::from(MIN_PRECISION), i32::from(MAX_PRECISION)) as u8
}

/// Format `value` with `precision` significant digits in fixed notation.
///
/// Numbers below one keep their leading zeros (`0.000125`), trailing zero
/// digits and a dangling decimal point are removed, and integral digits are
/// never dropped (`100` stays `100`). Precision `0` behaves like `1`.
///
/// Returns `None` for infinities and NaN, which have no decimal form.
///
/// # Example
///
/// ```
/// use reckon_core::decimal::format_decimal;
///
/// assert_eq!(format_decimal(0.1 + 0.2, 16).as_deref(), Some("0.3"));
/// assert_eq!(format_decimal(-1234.5, 16).as_deref(), Some("-1234.5"));
/// ```
pub fn format_decimal(value: f64, precision: u8) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        return Some(String::from("0"));
    }

    let significant = i32::from(precision.clamp(1, MAX_PRECISION));
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (significant - 1 - magnitude).max(0) as usize;

    let mut text = format!("{:.*}", decimals, value);
    trim_fraction(&mut text);
    if text == "-0" {
        text.remove(0);
    }
    Some(text)
}

/// Format `value` with exactly `digits` digits after the decimal point.
pub fn format_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

/// Integer-mode text of a running total, truncated toward zero.
///
/// The caller has already checked the value against the range of the active
/// integer mode.
pub fn format_integer(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    Some((value.trunc() as i64).to_string())
}

/// Format `value` and then clean up binary-to-decimal artifacts in the tail.
///
/// Starting from [`format_decimal`]:
///
/// 1. a final digit that differs from a run of at least three equal digits
///    before it is dropped (`1.2223` becomes `1.222`);
/// 2. more than eight trailing `9`s are carried by rounding at the digit
///    before the run (`1.2999999999` becomes `1.3`);
/// 3. otherwise more than four `0`s before the final digit are rounded away
///    (`2.5000001` becomes `2.5`);
/// 4. zeros left behind after the decimal point are stripped.
///
/// Returns `None` for infinities and NaN.
pub fn smart_round(value: f64, precision: u8) -> Option<String> {
    let literal = format_decimal(value, precision)?;
    let Some(dec_pos) = literal.find('.') else {
        return Some(format!("{:.0}", value));
    };

    let mut digits = literal.into_bytes();
    let len = digits.len();

    let mut truncated = false;
    if digits[len - 1] != digits[len - 2] {
        let repeated = digits[len - 2];
        let run = digits[..len - 1]
            .iter()
            .rev()
            .take_while(|&&c| c == repeated)
            .count();
        if run >= ISOLATED_DIGIT_MIN_REPEATS {
            digits.truncate(len - 1);
            truncated = true;
        }
    }

    // Runs are measured against the length before truncation.
    let nines = if truncated {
        0
    } else {
        trailing_chars(&digits, len - 1, b'9')
    };

    let mut out = if nines > NINES_RUN_LIMIT {
        let round_to = (len - nines).saturating_sub(dec_pos + 1);
        format!("{:.*}", round_to, value)
    } else {
        let zeros = trailing_chars(&digits, len - 2, b'0');
        if zeros > ZEROS_RUN_LIMIT {
            let round_to = (len - zeros).saturating_sub(dec_pos + 2);
            format!("{:.*}", round_to, value)
        } else {
            String::from_utf8(digits).ok()?
        }
    };

    trim_fraction(&mut out);
    if out == "-0" {
        out.remove(0);
    }
    Some(out)
}

/// Number of consecutive `c` bytes ending at `start` (inclusive), never
/// looking at index 0.
fn trailing_chars(text: &[u8], start: usize, c: u8) -> usize {
    if start >= text.len() {
        return 0;
    }
    (1..=start)
        .rev()
        .find(|&i| text[i] != c)
        .map_or(start, |i| start - i)
}

/// Remove trailing zeros after a decimal point, then the point itself.
fn trim_fraction(text: &mut String) {
    if !text.contains('.') {
        return;
    }
    let kept = text.trim_end_matches('0').trim_end_matches('.').len();
    text.truncate(kept);
}
