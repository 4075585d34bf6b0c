//! The working text buffer that reductions splice into.

use core::fmt;
use core::ops::Range;

use crate::error::{Error, ErrorCode, Result};

/// Owned, growable text holding the current reduced form of an expression.
///
/// The buffer is only mutated by appending during construction and by
/// [`Expression::replace`] afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    text: String,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut text = String::new();
        text.try_reserve(capacity)
            .map_err(|_| Error::allocation_failed())?;
        Ok(Self { text })
    }

    /// Copy `text` into a fresh buffer. Used for parenthesized sub-spans.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut expression = Self::with_capacity(text.len())?;
        expression.text.push_str(text);
        Ok(expression)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.text.capacity()
    }

    /// Last byte of the buffer.
    pub fn last(&self) -> Option<u8> {
        self.text.as_bytes().last().copied()
    }

    pub(crate) fn push(&mut self, c: char) -> Result<()> {
        self.text
            .try_reserve(c.len_utf8())
            .map_err(|_| Error::allocation_failed())?;
        self.text.push(c);
        Ok(())
    }

    pub(crate) fn push_str(&mut self, s: &str) -> Result<()> {
        self.text
            .try_reserve(s.len())
            .map_err(|_| Error::allocation_failed())?;
        self.text.push_str(s);
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Splice `with` over `span`, growing or shrinking the buffer.
    ///
    /// An equal-length replacement is a plain overwrite. On error the buffer
    /// is left exactly as it was.
    ///
    /// # Example
    ///
    /// ```
    /// use reckon_core::evaluator::Expression;
    ///
    /// let mut expr = Expression::from_text("2+3*4").unwrap();
    /// expr.replace(2..5, "12").unwrap();
    /// assert_eq!(expr.as_str(), "2+12");
    /// ```
    pub fn replace(&mut self, span: Range<usize>, with: &str) -> Result<()> {
        if span.start > span.end
            || span.end > self.text.len()
            || !self.text.is_char_boundary(span.start)
            || !self.text.is_char_boundary(span.end)
        {
            return Err(Error::new(
                ErrorCode::InvalidToken,
                format!(
                    "Replacement span {}..{} is outside the expression.",
                    span.start, span.end
                ),
            ));
        }

        let removed = span.end - span.start;
        if with.len() > removed {
            self.text
                .try_reserve(with.len() - removed)
                .map_err(|_| Error::allocation_failed())?;
        }
        self.text.replace_range(span, with);
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
