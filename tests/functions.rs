use reckon::ErrorCode;

mod cases;

test_case! {
    name: square_root,
    input: "SQRT(16)",
    float: { Ok(4.0) },
    int: { Ok(4) },
}

test_case! {
    name: names_are_case_insensitive,
    input: "sqrt(16) + Sqrt(9)",
    float: { Ok(7.0) },
}

test_case! {
    name: power,
    input: "POW(2, 10)",
    float: { Ok(1024.0) },
}

test_case! {
    name: arguments_are_expressions,
    input: "POW(1 + 1, 2 * 5) - 24",
    float: { Ok(1000.0) },
}

test_case! {
    name: nested_calls,
    input: "SQRT(POW(3, 2) + POW(4, 2))",
    float: { Ok(5.0) },
}

test_case! {
    name: variadic_sum,
    input: "SUM(1, 2, 3, 4, 5, 6)",
    float: { Ok(21.0) },
}

test_case! {
    name: average,
    input: "AVG(2, 4, 9)",
    float: { Ok(5.0) },
}

test_case! {
    name: comma_inside_nested_call,
    input: "SUM(POW(2, 3), 1)",
    float: { Ok(9.0) },
}

test_case! {
    name: absolute_value,
    input: "2 * ABS(0 - 3) + 1",
    float: { Ok(7.0) },
}

test_case! {
    name: negative_result_after_minus,
    input: "10 - FLOOR(0 - 2.5)",
    float: { Ok(13.0) },
}

test_case! {
    name: rounding,
    input: "FLOOR(2.7) + CEIL(2.2)",
    float: { Ok(5.0) },
}

test_case! {
    name: modular_power,
    input: "MODPOW(4, 13, 497)",
    float: { Ok(445.0) },
    int: { Ok(445) },
}

test_case! {
    name: logical_not_function,
    input: "NOT(0) + NOT(7)",
    float: { Ok(1.0) },
}

test_case! {
    name: results_are_substituted_with_eight_decimals,
    input: "LOG(EXP(1))",
    float: { Ok(1.0) },
}

test_case! {
    name: host_function,
    input: "MAX(3, 9, 4) + MIN(3, 9, 4)",
    float: { Ok(12.0) },
}

test_case! {
    name: host_function_reenters_calculator,
    input: "SQUARE_SUM(3, 4)",
    float: { Ok(25.0) },
}

test_case! {
    name: host_function_with_native_argument,
    input: "DOUBLE(SQRT(49))",
    float: { Ok(14.0) },
}

test_case! {
    name: space_before_argument_list,
    input: "SQRT (9)",
    float: { Ok(3.0) },
}

test_case! {
    name: wrong_argument_count,
    input: "SQRT(1, 2)",
    float: { Err(ErrorCode::InvalidToken) },
}

test_case! {
    name: empty_argument_list,
    input: "SUM()",
    float: { Err(ErrorCode::InvalidToken) },
}

test_case! {
    name: blank_argument,
    input: "SUM(1, , 2)",
    float: { Err(ErrorCode::InvalidToken) },
}

test_case! {
    name: unknown_function,
    input: "FROB(1)",
    float: { Err(ErrorCode::InvalidToken) },
}

test_case! {
    name: unclosed_call,
    input: "SQRT(4",
    float: { Err(ErrorCode::ParenthesesMismatch) },
}

test_case! {
    name: error_inside_argument,
    input: "SQRT(1 / 0)",
    float: { Err(ErrorCode::InvalidOperator) },
}

test_case! {
    name: non_finite_result,
    input: "LOG(0)",
    float: { Err(ErrorCode::InfiniteOrNan) },
}

test_case! {
    name: domain_error,
    input: "SQRT(0 - 1)",
    float: { Err(ErrorCode::InfiniteOrNan) },
}
