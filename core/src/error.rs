//! Evaluation errors.
//!
//! Every failure aborts the current calculation and is returned to the caller
//! as an [`Error`]: a closed [`ErrorCode`] plus a formatted message. Errors
//! raised while the raw input is still being read (invalid characters, unknown
//! identifiers) also carry the byte span of the offending text, so front ends
//! can point at it.

use core::ops::Range;

/// The kind of failure, mirroring the result codes a host checks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorCode {
    /// A floating-point operation produced infinity or NaN.
    #[error("infinite or not a number")]
    InfiniteOrNan,
    /// Two values or a value and a parenthesis are not joined by an operator.
    #[error("missing operator")]
    MissingOperator,
    /// Unknown operator, or an operator applied to operands it cannot take
    /// (division or modulo by zero included).
    #[error("invalid operator")]
    InvalidOperator,
    /// A character, literal, identifier or argument list is malformed.
    #[error("invalid token")]
    InvalidToken,
    /// An operand or result fell below the integer range of the active mode.
    #[error("integer underflow")]
    IntegerUnderflow,
    /// An operand or result exceeded the integer range of the active mode.
    #[error("integer overflow")]
    IntegerOverflow,
    /// An integer result could not be written back as text.
    #[error("integer to text conversion failed")]
    IntegerTextConversion,
    /// A floating-point result could not be written back as text.
    #[error("double to text conversion failed")]
    DoubleTextConversion,
    /// The value to the right of an operator is missing or malformed.
    #[error("right value missing")]
    RightValueMissing,
    /// Opening and closing parentheses do not pair up.
    #[error("parentheses mismatch")]
    ParenthesesMismatch,
    /// The working buffer could not grow.
    #[error("allocation failed")]
    AllocationFailed,
    /// Part of the closed code set for hosts. Unresolved variables are
    /// reported as [`InvalidToken`](Self::InvalidToken).
    #[error("undefined variable")]
    UndefinedVariable,
    /// Function-call arguments nest deeper than the configured limit.
    #[error("nesting depth exceeded")]
    DepthExceeded,
}

/// A failed calculation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
    span: Option<Range<usize>>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            span: None,
        }
    }

    /// Attach the byte range of the source text the error refers to.
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = Some(span);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte range in the source text, when the failure can be traced back
    /// to it. Errors raised after reduction has started carry no span because
    /// the working buffer no longer matches the input.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    /// Move the span right by `offset` bytes. Used when an error raised while
    /// evaluating a call argument is reported against the enclosing input.
    pub(crate) fn shifted(mut self, offset: usize) -> Self {
        self.span = self
            .span
            .map(|span| span.start + offset..span.end + offset);
        self
    }

    pub(crate) fn invalid_char(c: char) -> Self {
        Self::new(ErrorCode::InvalidToken, format!("Token is invalid: {}", c))
    }

    pub(crate) fn right_value_missing() -> Self {
        Self::new(
            ErrorCode::RightValueMissing,
            "Value to the right of operator is missing or invalid.",
        )
    }

    pub(crate) fn parentheses_mismatch() -> Self {
        Self::new(ErrorCode::ParenthesesMismatch, "Parentheses mismatch.")
    }

    pub(crate) fn allocation_failed() -> Self {
        Self::new(ErrorCode::AllocationFailed, "Memory allocation error.")
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = Error::new(ErrorCode::InvalidOperator, "Divide by zero.");
        assert_eq!(err.to_string(), "Divide by zero.");
        assert_eq!(err.code(), ErrorCode::InvalidOperator);
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_with_span() {
        let err = Error::invalid_char('$').with_span(3..4);
        assert_eq!(err.message(), "Token is invalid: $");
        assert_eq!(err.span(), Some(3..4));
    }

    #[test]
    fn test_shifted() {
        let err = Error::invalid_char('#').with_span(1..2).shifted(5);
        assert_eq!(err.span(), Some(6..7));

        let err = Error::parentheses_mismatch().shifted(5);
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_code_display() {
        assert_eq!(ErrorCode::ParenthesesMismatch.to_string(), "parentheses mismatch");
        assert_eq!(ErrorCode::IntegerOverflow.to_string(), "integer overflow");
    }
}
