use super::*;
use ascript_ir::ParamType;
use pretty_assertions::assert_eq;

#[test]
fn parse_errors_carry_line() {
    let err = unexpected_token(";", "endif", "statement must end with ';'", 12);
    assert!(err.is_parse());
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(
        err.to_string(),
        "[E1001] expected ';' got 'endif', statement must end with ';' on line 12"
    );

    assert_eq!(unterminated_string(3).line, Some(3));
    assert_eq!(duplicate_function("main", 8).code, ErrorCode::E1006);
}

#[test]
fn value_error_codes() {
    let mismatch = ValueError::TypeMismatch {
        op: "addition",
        left: ValueKind::Integer,
        right: ValueKind::Decimal,
    };
    let err = value_error(&mismatch);
    assert_eq!(err.code, ErrorCode::E2002);
    assert!(err.is_interpreter());
    assert_eq!(err.message, "addition type mismatch: integer and decimal");

    let overflow = ValueError::Overflow { op: "addition" };
    assert_eq!(value_error(&overflow).code, ErrorCode::E2008);
}

#[test]
fn call_errors_name_function_and_parameter() {
    let err = arity_mismatch("sum", 2, 3);
    assert_eq!(err.message, "function 'sum' expects 2 arguments, got 3");
    assert_eq!(
        arity_mismatch("one", 1, 0).message,
        "function 'one' expects 1 argument, got 0"
    );

    let param = Parameter::new("n", ParamType::Integer);
    let err = argument_type_mismatch("sum", &param, ValueKind::Text);
    assert_eq!(err.code, ErrorCode::E2005);
    assert_eq!(err.message, "argument 'n' of function 'sum' must be integer, got text");
}

#[test]
fn user_and_host_categories() {
    let err = user_fail("boom");
    assert!(err.is_user());
    assert_eq!(err.message, "boom");

    let err = host_error("symbol 'hp' is not defined");
    assert!(err.is_host());
    assert_eq!(err.code, ErrorCode::E4001);
}

#[test]
fn environment_messages() {
    assert_eq!(unknown_instance(7).message, "no interpreter with id 7");
    assert_eq!(
        function_already_loaded("main").message,
        "a function named 'main' is already loaded"
    );
}
