use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_includes_code_and_line() {
    let err = ScriptError::new(ErrorKind::Interpreter, ErrorCode::E2001, "undefined variable 'x'")
        .with_line(4);
    assert_eq!(err.to_string(), "[E2001] undefined variable 'x' on line 4");

    let err = ScriptError::new(ErrorKind::User, ErrorCode::E3001, "boom");
    assert_eq!(err.to_string(), "[E3001] boom");
}

#[test]
fn or_line_keeps_existing_line() {
    let err = ScriptError::new(ErrorKind::Host, ErrorCode::E4001, "nope")
        .with_line(2)
        .or_line(9);
    assert_eq!(err.line, Some(2));

    let err = ScriptError::new(ErrorKind::Host, ErrorCode::E4001, "nope").or_line(9);
    assert_eq!(err.line, Some(9));
}

#[test]
fn kind_predicates() {
    let err = ScriptError::new(ErrorKind::Parse, ErrorCode::E1001, "x");
    assert!(err.is_parse());
    assert!(!err.is_interpreter());
    assert!(!err.is_user());
    assert!(!err.is_host());
}

#[test]
fn backtrace_display() {
    let backtrace = Backtrace::new(vec![
        BacktraceFrame {
            function: "inner".into(),
            line: Some(7),
        },
        BacktraceFrame {
            function: "main".into(),
            line: Some(2),
        },
    ]);
    assert_eq!(backtrace.len(), 2);
    assert_eq!(
        backtrace.to_string(),
        "stack backtrace:\n  0: inner at line 7\n  1: main at line 2\n"
    );
    assert_eq!(Backtrace::default().to_string(), "");
}
