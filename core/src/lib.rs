//! Reckon evaluates arithmetic and logical expressions given as text.
//!
//! The engine reduces the expression text in place: it finds the innermost
//! parenthesized span, reduces its operators in a fixed precedence order and
//! splices each result back as decimal text, until one number remains.
//! Variables and custom functions are resolved through host hooks.
//!
//! ```
//! use reckon_core::{Calculator, ErrorCode};
//!
//! let calculator = Calculator::new();
//! assert_eq!(calculator.calculate("(2+3)*4").unwrap(), 20.0);
//!
//! let err = calculator.calculate("5/0").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::InvalidOperator);
//! ```

pub mod api;
pub mod decimal;
pub mod error;
pub mod evaluator;
pub mod stdlib;
pub mod syntax;

pub use api::{Calculator, CalculatorOptions, MethodInvoker, Tracer, VariableResolver, Variables};
pub use error::{Error, ErrorCode, Result};
pub use evaluator::Mode;
