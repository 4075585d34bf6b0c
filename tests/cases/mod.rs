//! Shared fixtures for the expression test suites.
//!
//! Every suite evaluates its inputs against the same calculator: a handful
//! of variables and a few host functions on top of the built-in math
//! library.

use reckon::{Calculator, Variables};

/// Variables known to every test case.
pub const VARIABLES: &[(&str, f64)] = &[
    ("x", 2.0),
    ("y", -3.0),
    ("half", 0.5),
    ("third", 1.0 / 3.0),
    ("big", 3_000_000_000.0),
    ("max_int", 2_147_483_647.0),
];

pub fn calculator() -> Calculator {
    let mut calculator = Calculator::new();
    let variables: Variables = VARIABLES.iter().copied().collect();
    calculator.set_variable_resolver(Some(Box::new(variables)));
    calculator.set_method_invoker(Some(Box::new(
        |calc: &Calculator, name: &str, args: &[f64]| match name {
            "MAX" => args.iter().copied().reduce(f64::max),
            "MIN" => args.iter().copied().reduce(f64::min),
            "DOUBLE" if args.len() == 1 => Some(args[0] * 2.0),
            // Re-enters the calculator from inside a call.
            "SQUARE_SUM" => calc
                .calculate(
                    &args
                        .iter()
                        .map(|a| format!("({a})*({a})"))
                        .collect::<Vec<_>>()
                        .join("+"),
                )
                .ok(),
            _ => None,
        },
    )));
    calculator
}

/// Declare a test that evaluates `input` in one or more modes.
///
/// Each mode block holds the expected outcome, `Ok(value)` or
/// `Err(ErrorCode)`. Modes that are not listed are not evaluated.
///
/// ```ignore
/// test_case! {
///     name: addition,
///     input: "1 + 2",
///     float: { Ok(3.0) },
///     int: { Ok(3) },
/// }
/// ```
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $( float: { $float:expr }, )?
        $( int: { $int:expr }, )?
        $( uint: { $uint:expr }, )?
    ) => {
        #[test]
        fn $name() {
            let calculator = $crate::cases::calculator();
            let input: &str = $input;
            $(
                pretty_assertions::assert_eq!(
                    calculator.calculate(input).map_err(|err| err.code()),
                    $float,
                    "float mode: {:?}",
                    input
                );
            )?
            $(
                pretty_assertions::assert_eq!(
                    calculator.calculate_int(input).map_err(|err| err.code()),
                    $int,
                    "signed mode: {:?}",
                    input
                );
            )?
            $(
                pretty_assertions::assert_eq!(
                    calculator.calculate_uint(input).map_err(|err| err.code()),
                    $uint,
                    "unsigned mode: {:?}",
                    input
                );
            )?
        }
    };
}
