//! Native math functions
//!
//! Trigonometric: SIN, COS, TAN, ASIN, ACOS, ATAN, ATAN2
//! Hyperbolic:    SINH, COSH, TANH
//! Exponential:   LOG, LOG10, EXP, POW, LDEXP, SQRT, MODPOW
//! Rounding:      FLOOR, CEIL
//! Aggregate:     SUM, AVG
//! Other:         ABS, NOT
//!
//! Names are matched case-insensitively. Every function checks its argument
//! count before running, so the implementations below can index `args`
//! freely.

use core::fmt;

use crate::error::{Error, ErrorCode, Result};

/// Number of arguments a native function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

/// A built-in function callable from expressions.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: Arity,
    func: fn(&[f64]) -> Result<f64>,
}

impl NativeFunction {
    const fn new(name: &'static str, arity: Arity, func: fn(&[f64]) -> Result<f64>) -> Self {
        Self { name, arity, func }
    }

    /// Check the argument count and run the function.
    pub fn call(&self, args: &[f64]) -> Result<f64> {
        if !self.arity.accepts(args.len()) {
            return Err(Error::new(
                ErrorCode::InvalidToken,
                format!("Invalid number of parameters passed to method: {}", self.name),
            ));
        }
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Every native function, by canonical (upper-case) name.
pub static NATIVE_FUNCTIONS: &[NativeFunction] = &[
    NativeFunction::new("SIN", Arity::Exactly(1), math_sin),
    NativeFunction::new("COS", Arity::Exactly(1), math_cos),
    NativeFunction::new("TAN", Arity::Exactly(1), math_tan),
    NativeFunction::new("ASIN", Arity::Exactly(1), math_asin),
    NativeFunction::new("ACOS", Arity::Exactly(1), math_acos),
    NativeFunction::new("ATAN", Arity::Exactly(1), math_atan),
    NativeFunction::new("ATAN2", Arity::Exactly(2), math_atan2),
    NativeFunction::new("SINH", Arity::Exactly(1), math_sinh),
    NativeFunction::new("COSH", Arity::Exactly(1), math_cosh),
    NativeFunction::new("TANH", Arity::Exactly(1), math_tanh),
    NativeFunction::new("LOG", Arity::Exactly(1), math_log),
    NativeFunction::new("LOG10", Arity::Exactly(1), math_log10),
    NativeFunction::new("EXP", Arity::Exactly(1), math_exp),
    NativeFunction::new("POW", Arity::Exactly(2), math_pow),
    NativeFunction::new("LDEXP", Arity::Exactly(2), math_ldexp),
    NativeFunction::new("SQRT", Arity::Exactly(1), math_sqrt),
    NativeFunction::new("MODPOW", Arity::Exactly(3), math_modpow),
    NativeFunction::new("FLOOR", Arity::Exactly(1), math_floor),
    NativeFunction::new("CEIL", Arity::Exactly(1), math_ceil),
    NativeFunction::new("SUM", Arity::AtLeast(1), math_sum),
    NativeFunction::new("AVG", Arity::AtLeast(1), math_avg),
    NativeFunction::new("ABS", Arity::Exactly(1), math_abs),
    NativeFunction::new("NOT", Arity::Exactly(1), math_not),
];

/// Find a native function by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static NativeFunction> {
    NATIVE_FUNCTIONS
        .iter()
        .find(|function| function.name.eq_ignore_ascii_case(name))
}

pub fn is_native(name: &str) -> bool {
    lookup(name).is_some()
}

// ============================================================================
// Trigonometric Functions
// ============================================================================

fn math_sin(args: &[f64]) -> Result<f64> {
    Ok(args[0].sin())
}

fn math_cos(args: &[f64]) -> Result<f64> {
    Ok(args[0].cos())
}

fn math_tan(args: &[f64]) -> Result<f64> {
    Ok(args[0].tan())
}

fn math_asin(args: &[f64]) -> Result<f64> {
    Ok(args[0].asin())
}

fn math_acos(args: &[f64]) -> Result<f64> {
    Ok(args[0].acos())
}

fn math_atan(args: &[f64]) -> Result<f64> {
    Ok(args[0].atan())
}

/// Arc tangent of `y / x`, using the signs of both to pick the quadrant.
fn math_atan2(args: &[f64]) -> Result<f64> {
    Ok(args[0].atan2(args[1]))
}

fn math_sinh(args: &[f64]) -> Result<f64> {
    Ok(args[0].sinh())
}

fn math_cosh(args: &[f64]) -> Result<f64> {
    Ok(args[0].cosh())
}

fn math_tanh(args: &[f64]) -> Result<f64> {
    Ok(args[0].tanh())
}

// ============================================================================
// Exponential and Logarithmic Functions
// ============================================================================

/// Natural logarithm.
fn math_log(args: &[f64]) -> Result<f64> {
    Ok(args[0].ln())
}

fn math_log10(args: &[f64]) -> Result<f64> {
    Ok(args[0].log10())
}

fn math_exp(args: &[f64]) -> Result<f64> {
    Ok(args[0].exp())
}

fn math_pow(args: &[f64]) -> Result<f64> {
    Ok(args[0].powf(args[1]))
}

/// `x * 2^exp`, with the exponent truncated to an integer.
fn math_ldexp(args: &[f64]) -> Result<f64> {
    let exponent = args[1].trunc().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
    Ok(args[0] * 2f64.powi(exponent))
}

fn math_sqrt(args: &[f64]) -> Result<f64> {
    Ok(args[0].sqrt())
}

/// `base^exponent mod modulus` over integers truncated from the arguments.
fn math_modpow(args: &[f64]) -> Result<f64> {
    mod_pow(args[0] as i64, args[1] as i64, args[2] as i64).map(|v| v as f64)
}

/// Square-and-multiply modular exponentiation.
///
/// Intermediate products are taken in `i128`, so no operand in `i64` range
/// can overflow. A non-positive exponent yields 1.
pub fn mod_pow(base: i64, exponent: i64, modulus: i64) -> Result<i64> {
    if modulus == 0 {
        return Err(Error::new(ErrorCode::InvalidOperator, "Mod by zero."));
    }

    let modulus = i128::from(modulus);
    let mut base = i128::from(base) % modulus;
    let mut exponent = exponent;
    let mut result: i128 = 1;

    while exponent > 0 {
        if exponent % 2 == 1 {
            result = result * base % modulus;
        }
        exponent >>= 1;
        base = base * base % modulus;
    }

    // |result| < |modulus| once a multiplication happened, and 1 otherwise.
    Ok(result as i64)
}

// ============================================================================
// Rounding Functions
// ============================================================================

fn math_floor(args: &[f64]) -> Result<f64> {
    Ok(args[0].floor())
}

fn math_ceil(args: &[f64]) -> Result<f64> {
    Ok(args[0].ceil())
}

// ============================================================================
// Aggregates
// ============================================================================

fn math_sum(args: &[f64]) -> Result<f64> {
    Ok(args.iter().sum())
}

fn math_avg(args: &[f64]) -> Result<f64> {
    Ok(args.iter().sum::<f64>() / args.len() as f64)
}

// ============================================================================
// Other
// ============================================================================

fn math_abs(args: &[f64]) -> Result<f64> {
    Ok(args[0].abs())
}

/// Integer logical negation: 1 if the truncated argument is zero, else 0.
fn math_not(args: &[f64]) -> Result<f64> {
    Ok(if args[0] as i64 == 0 { 1.0 } else { 0.0 })
}

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;
