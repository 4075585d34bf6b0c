//! Operator tables and the per-tier search functions.
//!
//! Reduction happens in four tiers. Inside the third tier the table order is
//! the tie-break: every occurrence of an earlier lexeme is reduced across the
//! whole buffer before a later lexeme is looked at.

use core::fmt;

use super::scanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `!`, logical not.
    Not,
    /// `~`, bitwise complement.
    Complement,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    /// `<>`, not equal.
    LessGreater,
    /// `|=`, bitwise or.
    OrEq,
    /// `&=`, bitwise and.
    AndEq,
    /// `^=`, bitwise xor.
    XorEq,
    LessEqual,
    GreaterEqual,
    NotEqual,
    ShiftLeft,
    ShiftRight,
    Equal,
    Greater,
    Less,
    LogicalAnd,
    LogicalOr,
    BitOr,
    BitAnd,
    BitXor,
}

impl Operator {
    pub fn lexeme(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::Complement => "~",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::LessGreater => "<>",
            Operator::OrEq => "|=",
            Operator::AndEq => "&=",
            Operator::XorEq => "^=",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::NotEqual => "!=",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
            Operator::Equal => "=",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::LogicalAnd => "&&",
            Operator::LogicalOr => "||",
            Operator::BitOr => "|",
            Operator::BitAnd => "&",
            Operator::BitXor => "^",
        }
    }

    /// Operators that take a single operand to their right when nothing
    /// numeric stands to their left.
    pub fn is_prefix(self) -> bool {
        matches!(self, Operator::Not | Operator::Complement)
    }

    /// Operators that may turn out to be the sign of a number.
    pub fn is_sign(self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }

    /// Operators that only make sense on integers; their operands are
    /// truncated before use in every mode.
    pub fn is_integer_exclusive(self) -> bool {
        matches!(
            self,
            Operator::BitAnd
                | Operator::BitOr
                | Operator::BitXor
                | Operator::AndEq
                | Operator::OrEq
                | Operator::XorEq
                | Operator::ShiftLeft
                | Operator::ShiftRight
        )
    }

    fn from_glyph(c: u8) -> Option<Self> {
        Some(match c {
            b'!' => Operator::Not,
            b'~' => Operator::Complement,
            b'*' => Operator::Mul,
            b'/' => Operator::Div,
            b'%' => Operator::Mod,
            b'+' => Operator::Add,
            b'-' => Operator::Sub,
            _ => return None,
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

pub const PRE_ORDER: &[Operator] = &[Operator::Not];

pub const FIRST_ORDER: &[Operator] = &[
    Operator::Complement,
    Operator::Mul,
    Operator::Div,
    Operator::Mod,
];

pub const SECOND_ORDER: &[Operator] = &[Operator::Add, Operator::Sub];

pub const THIRD_ORDER: &[Operator] = &[
    Operator::LessGreater,
    Operator::OrEq,
    Operator::AndEq,
    Operator::XorEq,
    Operator::LessEqual,
    Operator::GreaterEqual,
    Operator::NotEqual,
    Operator::ShiftLeft,
    Operator::ShiftRight,
    Operator::Equal,
    Operator::Greater,
    Operator::Less,
    Operator::LogicalAnd,
    Operator::LogicalOr,
    Operator::BitOr,
    Operator::BitAnd,
    Operator::BitXor,
];

/// Position of the first `!` that is not the start of `!=` and has
/// something after it.
pub fn find_prefix_not(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    PRE_ORDER
        .iter()
        .filter_map(|op| {
            let glyph = op.lexeme().as_bytes()[0];
            (0..bytes.len())
                .find(|&i| bytes[i] == glyph && bytes.get(i + 1).is_some_and(|&c| c != b'='))
        })
        .min()
}

/// First `~ * / %` at or after position 1.
pub fn find_first_order(text: &str) -> Option<(usize, Operator)> {
    find_glyph(text, 1, FIRST_ORDER)
}

/// First `+` or `-` at or after `start`. A match at position 0 is always a
/// sign, so `start` is expected to be at least 1.
pub fn find_second_order(text: &str, start: usize) -> Option<(usize, Operator)> {
    find_glyph(text, start.max(1), SECOND_ORDER)
}

/// First occurrence of a third-tier lexeme with something to its left.
pub fn find_third_order(text: &str, op: Operator) -> Option<usize> {
    scanner::find(op.lexeme(), text, 1)
}

fn find_glyph(text: &str, start: usize, tier: &[Operator]) -> Option<(usize, Operator)> {
    text.as_bytes()
        .iter()
        .enumerate()
        .skip(start)
        .find_map(|(i, &c)| {
            Operator::from_glyph(c)
                .filter(|op| tier.contains(op))
                .map(|op| (i, op))
        })
}
