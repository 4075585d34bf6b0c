//! Reckon - an embeddable text-reducing expression calculator
//!
//! # Overview
//!
//! Reckon evaluates arithmetic, bitwise and logical expressions given as
//! plain text. Common use cases include:
//!
//! - Formula fields in configuration files and forms
//! - Threshold and limit expressions in rule engines
//! - Quick integer and bit arithmetic in tools
//!
//! # Quick Start
//!
//! ```
//! use reckon::{Calculator, Variables};
//!
//! let mut calculator = Calculator::new();
//! let variables: Variables = [("width", 12.0), ("height", 3.5)].into_iter().collect();
//! calculator.set_variable_resolver(Some(Box::new(variables)));
//!
//! assert_eq!(calculator.calculate("width * height / 2").unwrap(), 21.0);
//! assert_eq!(calculator.calculate_uint("255 & 15").unwrap(), 15);
//! ```
//!
//! # Modes
//!
//! The same expression text can be evaluated in three modes:
//!
//! 1. **Float** (`calculate`): 64-bit floating point, results rounded to the
//!    configured number of significant digits
//! 2. **Signed** (`calculate_int`): every value must fit an `i32`
//! 3. **Unsigned** (`calculate_uint`): every value must fit a `u32`
//!
//! # Host Functions
//!
//! Functions the built-in math library does not know are forwarded to a
//! [`MethodInvoker`]:
//!
//! ```
//! use reckon::Calculator;
//!
//! let mut calculator = Calculator::new();
//! calculator.set_method_invoker(Some(Box::new(
//!     |_: &Calculator, name: &str, args: &[f64]| match name {
//!         "CLAMP" => Some(args[0].clamp(args[1], args[2])),
//!         _ => None,
//!     },
//! )));
//!
//! assert_eq!(calculator.calculate("CLAMP(17, 0, 10) * 2").unwrap(), 20.0);
//! ```

// Re-export public API from reckon_core
pub use reckon_core::api::{
    Calculator, CalculatorOptions, MethodInvoker, Tracer, VariableResolver, Variables,
};

// Re-export commonly used modules
pub use reckon_core::evaluator::Mode;
pub use reckon_core::stdlib::{self, NativeFunction};
pub use reckon_core::{decimal, error};

// Re-export errors
pub use reckon_core::error::{Error, ErrorCode, Result};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
