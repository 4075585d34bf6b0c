//! Tests for the native math functions

use super::*;
use crate::api::Calculator;

fn call(name: &str, args: &[f64]) -> Result<f64> {
    lookup(name)
        .unwrap_or_else(|| panic!("{} is not native", name))
        .call(args)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_table_is_complete() {
    let names: Vec<&str> = NATIVE_FUNCTIONS.iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        [
            "SIN", "COS", "TAN", "ASIN", "ACOS", "ATAN", "ATAN2", "SINH", "COSH", "TANH", "LOG",
            "LOG10", "EXP", "POW", "LDEXP", "SQRT", "MODPOW", "FLOOR", "CEIL", "SUM", "AVG",
            "ABS", "NOT"
        ]
    );
}

#[test]
fn test_lookup_ignores_case() {
    assert!(is_native("sqrt"));
    assert!(is_native("Log10"));
    assert!(is_native("MODPOW"));
    assert!(!is_native("SQRTX"));
    assert!(!is_native(""));
    assert_eq!(lookup("atan2").map(|f| f.name), Some("ATAN2"));
}

#[test]
fn test_arity_is_checked() {
    let err = call("SQRT", &[1.0, 2.0]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidToken);
    assert_eq!(err.message(), "Invalid number of parameters passed to method: SQRT");

    assert!(call("POW", &[2.0]).is_err());
    assert!(call("SUM", &[]).is_err());
    assert!(call("AVG", &[]).is_err());
    assert!(call("MODPOW", &[1.0, 2.0]).is_err());
}

#[test]
fn test_trigonometric() {
    assert_close(call("SIN", &[0.0]).unwrap(), 0.0);
    assert_close(call("COS", &[0.0]).unwrap(), 1.0);
    assert_close(call("TAN", &[core::f64::consts::FRAC_PI_4]).unwrap(), 1.0);
    assert_close(call("ASIN", &[1.0]).unwrap(), core::f64::consts::FRAC_PI_2);
    assert_close(call("ACOS", &[1.0]).unwrap(), 0.0);
    assert_close(call("ATAN", &[1.0]).unwrap(), core::f64::consts::FRAC_PI_4);
    assert_close(call("ATAN2", &[1.0, -1.0]).unwrap(), 3.0 * core::f64::consts::FRAC_PI_4);
    assert_close(call("SINH", &[0.0]).unwrap(), 0.0);
    assert_close(call("COSH", &[0.0]).unwrap(), 1.0);
    assert_close(call("TANH", &[0.0]).unwrap(), 0.0);
}

#[test]
fn test_exponential() {
    assert_close(call("LOG", &[core::f64::consts::E]).unwrap(), 1.0);
    assert_close(call("LOG10", &[1000.0]).unwrap(), 3.0);
    assert_close(call("EXP", &[0.0]).unwrap(), 1.0);
    assert_eq!(call("POW", &[2.0, 10.0]).unwrap(), 1024.0);
    assert_eq!(call("LDEXP", &[3.0, 4.0]).unwrap(), 48.0);
    assert_eq!(call("LDEXP", &[3.0, 4.9]).unwrap(), 48.0);
    assert_eq!(call("SQRT", &[16.0]).unwrap(), 4.0);
}

#[test]
fn test_rounding_and_aggregates() {
    assert_eq!(call("FLOOR", &[-1.5]).unwrap(), -2.0);
    assert_eq!(call("CEIL", &[-1.5]).unwrap(), -1.0);
    assert_eq!(call("SUM", &[1.0, 2.0, 3.0]).unwrap(), 6.0);
    assert_eq!(call("AVG", &[2.0, 4.0]).unwrap(), 3.0);
    assert_eq!(call("AVG", &[5.0]).unwrap(), 5.0);
    assert_eq!(call("ABS", &[-7.25]).unwrap(), 7.25);
    assert_eq!(call("NOT", &[0.0]).unwrap(), 1.0);
    assert_eq!(call("NOT", &[0.9]).unwrap(), 1.0);
    assert_eq!(call("NOT", &[3.0]).unwrap(), 0.0);
}

#[test]
fn test_mod_pow() {
    assert_eq!(mod_pow(4, 13, 497).unwrap(), 445);
    assert_eq!(mod_pow(2, 10, 1000).unwrap(), 24);
    assert_eq!(mod_pow(7, 0, 13).unwrap(), 1);
    assert_eq!(mod_pow(i64::MAX, 3, i64::MAX - 1).unwrap(), 1);
    assert_eq!(call("MODPOW", &[4.0, 13.0, 497.0]).unwrap(), 445.0);

    let err = mod_pow(3, 2, 0).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidOperator);
}

#[test]
fn test_native_calls_in_expressions() {
    let calculator = Calculator::new();
    assert_eq!(calculator.calculate("SQRT(16)").unwrap(), 4.0);
    assert_eq!(calculator.calculate("POW(2,10)").unwrap(), 1024.0);
    assert_eq!(calculator.calculate("SUM(1,2,3)").unwrap(), 6.0);
    assert_eq!(calculator.calculate("AVG(2,4)").unwrap(), 3.0);
    assert_eq!(calculator.calculate("modpow(4, 13, 497)").unwrap(), 445.0);
    assert_eq!(calculator.calculate("floor(2.7) + ceil(0.2)").unwrap(), 3.0);
    assert_eq!(
        calculator.calculate("SQRT(1,2)").unwrap_err().code(),
        ErrorCode::InvalidToken
    );
}
