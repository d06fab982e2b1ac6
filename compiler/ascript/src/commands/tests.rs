#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use ascript_diagnostic::{Backtrace, BacktraceFrame, ErrorCode};
use pretty_assertions::assert_eq;

#[test]
fn literals_read_like_source() {
    assert_eq!(parse_literal("3").unwrap(), Value::Integer(3));
    assert_eq!(parse_literal("-2.5").unwrap(), Value::Decimal(-2.5));
    assert_eq!(parse_literal("false").unwrap(), Value::Boolean(false));
    assert_eq!(parse_literal("\"hi there\"").unwrap(), Value::text("hi there"));
    assert_eq!(parse_literal("  7 ").unwrap(), Value::Integer(7));
}

#[test]
fn non_literals_are_rejected() {
    assert_eq!(parse_literal("").unwrap_err().code, ErrorCode::E1007);
    assert_eq!(parse_literal("1 2").unwrap_err().code, ErrorCode::E1008);
    assert_eq!(parse_literal("score").unwrap_err().code, ErrorCode::E1008);
    assert_eq!(parse_literal("loop").unwrap_err().code, ErrorCode::E1008);
    assert_eq!(parse_literal("1.2.3").unwrap_err().code, ErrorCode::E1004);
    assert!(parse_literal("@").unwrap_err().is_parse());
}

#[test]
fn literal_lists_stop_at_the_first_bad_one() {
    let values = parse_literals(&["1", "true", "\"x\""]).unwrap();
    assert_eq!(values, vec![Value::Integer(1), Value::Boolean(true), Value::text("x")]);

    let err = parse_literals(&["1", "two", "3"]).unwrap_err();
    assert_eq!(err.message, "'identifier' cannot be used as a value");
}

#[test]
fn outcomes_are_described() {
    assert_eq!(
        describe_outcome(&ReturnValue::Value(Value::Integer(9))),
        "returned integer:9"
    );
    assert_eq!(describe_outcome(&ReturnValue::Nothing), "returned nothing");
    assert_eq!(
        describe_outcome(&ReturnValue::Yield),
        "yielded, execution not finished"
    );
}

#[test]
fn rendered_errors_include_the_backtrace() {
    let err = errors::user_fail("boom").with_line(4);
    assert_eq!(render_error(&err), "error: [E3001] boom on line 4");

    let err = err.with_backtrace(Backtrace::new(vec![
        BacktraceFrame {
            function: "inner".into(),
            line: Some(4),
        },
        BacktraceFrame {
            function: "main".into(),
            line: Some(2),
        },
    ]));
    assert_eq!(
        render_error(&err),
        "error: [E3001] boom on line 4\n\
         stack backtrace:\n  \
         0: inner at line 4\n  \
         1: main at line 2"
    );
}
