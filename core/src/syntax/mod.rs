//! Lexical helpers shared by the evaluator: byte classification and the
//! operator tier tables.

pub mod operators;
pub mod scanner;

pub use operators::Operator;
