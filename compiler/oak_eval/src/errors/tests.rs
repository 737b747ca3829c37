use super::*;
use pretty_assertions::assert_eq;

#[test]
fn categories() {
    assert_eq!(division_by_zero().category(), ErrorCategory::Arithmetic);
    assert_eq!(modulo_by_zero().category(), ErrorCategory::Arithmetic);
    assert_eq!(negative_exponent().category(), ErrorCategory::Arithmetic);
    assert_eq!(integer_overflow("addition").category(), ErrorCategory::Arithmetic);
    assert_eq!(shift_out_of_range(64).category(), ErrorCategory::Arithmetic);
    assert_eq!(recursion_limit_exceeded(10).category(), ErrorCategory::StackOverflow);
    assert_eq!(undefined_variable("x").category(), ErrorCategory::Runtime);
    assert_eq!(missing_main().category(), ErrorCategory::Runtime);
}

#[test]
fn messages() {
    assert_eq!(undefined_variable("count").to_string(), "undefined variable: count");
    assert_eq!(
        undeclared_assignment("y").to_string(),
        "variable 'y' is not declared"
    );
    assert_eq!(
        recursion_limit_exceeded(500).to_string(),
        "maximum recursion depth exceeded (limit: 500)"
    );
    assert_eq!(
        index_out_of_bounds(5, 3).to_string(),
        "index 5 out of bounds for length 3"
    );
    assert_eq!(
        unsupported_operands(BinaryOp::Sub, &Value::Int(1), &Value::Double(1.0)).to_string(),
        "unsupported operand types for `-`: Integer and Double"
    );
    assert_eq!(
        ambiguous_main(&["A", "B"]).to_string(),
        "method 'main' is defined in more than one class: A, B"
    );
}

#[test]
fn arity_pluralizes() {
    assert_eq!(wrong_arg_count("f", 1, 0).to_string(), "f expects 1 argument, got 0");
    assert_eq!(wrong_arg_count("g", 2, 3).to_string(), "g expects 2 arguments, got 3");
    assert_eq!(
        wrong_arg_count_range("substring", 1, 2, 0).to_string(),
        "substring expects 1 or 2 arguments, got 0"
    );
}

#[test]
fn innermost_line_wins() {
    let err = division_by_zero().at_line(7).at_line(3);
    assert_eq!(err.line, Some(7));
}

#[test]
fn innermost_backtrace_wins() {
    let err = division_by_zero()
        .with_backtrace(vec!["Main.inner".into(), "Main.main".into()])
        .with_backtrace(vec!["Main.main".into()]);
    assert_eq!(err.backtrace, vec!["Main.inner".to_string(), "Main.main".to_string()]);
}
