//! Reckon standard library
//!
//! Functions that are always available to expressions, before the host's
//! method invoker is consulted.

pub mod math;

pub use math::{Arity, NATIVE_FUNCTIONS, NativeFunction, is_native, lookup};
