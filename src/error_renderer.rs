//! Error rendering using ariadne
//!
//! Errors that carry a span are drawn as a report over the source text with
//! the offending range labelled. Errors without a span (most reduction
//! failures) are printed as a single line.

use crate::{Error, ErrorCode};
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expression>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use reckon::{Calculator, render_error};
///
/// let calculator = Calculator::new();
/// let source = "2 * unknown";
/// if let Err(e) = calculator.calculate(source) {
///     render_error(source, &e);
/// }
/// ```
pub fn render_error(source: &str, error: &Error) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(source: &str, error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String (useful for web UIs, logs, etc.)
pub fn render_error_to_string(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let Some(span) = error.span().filter(|span| span.end <= source.len()) else {
        return writeln!(writer, "Error [{}]: {}", code_name(error.code()), error);
    };

    // ariadne counts characters, spans are byte offsets.
    let start = source[..span.start].chars().count();
    let end = start + source[span.clone()].chars().count();

    Report::build(ReportKind::Error, (SOURCE_ID, start..end))
        .with_code(code_name(error.code()))
        .with_message(error.message())
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_label(
            Label::new((SOURCE_ID, start..end))
                .with_message(error.code().to_string())
                .with_color(Color::Red),
        )
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

fn code_name(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InfiniteOrNan => "InfiniteOrNan",
        ErrorCode::MissingOperator => "MissingOperator",
        ErrorCode::InvalidOperator => "InvalidOperator",
        ErrorCode::InvalidToken => "InvalidToken",
        ErrorCode::IntegerUnderflow => "IntegerUnderflow",
        ErrorCode::IntegerOverflow => "IntegerOverflow",
        ErrorCode::IntegerTextConversion => "IntegerTextConversion",
        ErrorCode::DoubleTextConversion => "DoubleTextConversion",
        ErrorCode::RightValueMissing => "RightValueMissing",
        ErrorCode::ParenthesesMismatch => "ParenthesesMismatch",
        ErrorCode::AllocationFailed => "AllocationFailed",
        ErrorCode::UndefinedVariable => "UndefinedVariable",
        ErrorCode::DepthExceeded => "DepthExceeded",
    }
}
