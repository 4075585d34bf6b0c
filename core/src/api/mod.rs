//! Public API for the Reckon expression calculator.
//!
//! # Example
//!
//! ```
//! use reckon_core::api::{Calculator, CalculatorOptions};
//!
//! let mut calculator = Calculator::with_options(CalculatorOptions {
//!     precision: 12,
//!     ..CalculatorOptions::default()
//! });
//!
//! calculator.set_method_invoker(Some(Box::new(
//!     |_: &Calculator, name: &str, args: &[f64]| match name {
//!         "DOUBLE" => args.first().map(|v| v * 2.0),
//!         _ => None,
//!     },
//! )));
//!
//! assert_eq!(calculator.calculate("DOUBLE(21)").unwrap(), 42.0);
//! assert_eq!(calculator.calculate_uint("(1 << 4) | 3").unwrap(), 19);
//! ```

pub mod calculator;
pub mod hooks;
pub mod options;

pub use calculator::Calculator;
pub use hooks::{MethodInvoker, Tracer, VariableResolver, Variables};
pub use options::CalculatorOptions;
