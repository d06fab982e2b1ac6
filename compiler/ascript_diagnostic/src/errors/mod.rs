//! Error factory functions.
//!
//! One constructor per failure condition, grouped by category. Callers attach
//! the source line with [`ScriptError::with_line`] where they know it.

use ascript_ir::{Parameter, ValueError, ValueKind};

use crate::{ErrorCode, ErrorKind, ScriptError};

fn parse(code: ErrorCode, message: String, line: u32) -> ScriptError {
    ScriptError::new(ErrorKind::Parse, code, message).with_line(line)
}

fn interpreter(code: ErrorCode, message: String) -> ScriptError {
    ScriptError::new(ErrorKind::Interpreter, code, message)
}

// Parse Errors

/// Token did not match what the grammar required.
#[cold]
pub fn unexpected_token(expected: &str, found: &str, context: &str, line: u32) -> ScriptError {
    parse(
        ErrorCode::E1001,
        format!("expected '{expected}' got '{found}', {context}"),
        line,
    )
}

/// Token stream ended in the middle of a construct.
#[cold]
pub fn unexpected_end(expected: &str, context: &str, line: u32) -> ScriptError {
    parse(
        ErrorCode::E1007,
        format!("expected '{expected}' got end of input, {context}"),
        line,
    )
}

#[cold]
pub fn unterminated_string(line: u32) -> ScriptError {
    parse(
        ErrorCode::E1002,
        "unterminated string literal".to_string(),
        line,
    )
}

#[cold]
pub fn invalid_character(ch: char, line: u32) -> ScriptError {
    parse(ErrorCode::E1003, format!("invalid character '{ch}'"), line)
}

#[cold]
pub fn invalid_number(text: &str, line: u32) -> ScriptError {
    parse(ErrorCode::E1004, format!("invalid number literal '{text}'"), line)
}

/// Built-in called with an argument count it never accepts.
#[cold]
pub fn builtin_arg_count(builtin: &str, expected: &str, got: usize, line: u32) -> ScriptError {
    parse(
        ErrorCode::E1005,
        format!("{builtin} expects {expected}, got {got}"),
        line,
    )
}

#[cold]
pub fn duplicate_function(name: &str, line: u32) -> ScriptError {
    parse(
        ErrorCode::E1006,
        format!("function '{name}' is defined more than once"),
        line,
    )
}

/// Token cannot appear in value position.
#[cold]
pub fn not_a_value(found: &str, line: u32) -> ScriptError {
    parse(
        ErrorCode::E1008,
        format!("'{found}' cannot be used as a value"),
        line,
    )
}

#[cold]
pub fn unreadable_source(path: &str, reason: &str) -> ScriptError {
    ScriptError::new(
        ErrorKind::Parse,
        ErrorCode::E1009,
        format!("cannot read '{path}': {reason}"),
    )
}

// Interpreter Errors

#[cold]
pub fn undefined_variable(name: &str) -> ScriptError {
    interpreter(ErrorCode::E2001, format!("undefined variable '{name}'"))
}

/// Assignment would change the tag of an existing variable.
#[cold]
pub fn assignment_type_mismatch(name: &str, expected: ValueKind, got: ValueKind) -> ScriptError {
    interpreter(
        ErrorCode::E2002,
        format!("type mismatch for assignment to '{name}': expected {expected}, got {got}"),
    )
}

/// Built-in received an argument of the wrong kind.
#[cold]
pub fn builtin_arg_type(builtin: &str, expected: &str, got: ValueKind) -> ScriptError {
    interpreter(
        ErrorCode::E2002,
        format!("{builtin} expects a {expected} argument, got {got}"),
    )
}

/// Failed comparison or arithmetic on values.
#[cold]
pub fn value_error(err: &ValueError) -> ScriptError {
    let code = match err {
        ValueError::Overflow { .. } => ErrorCode::E2008,
        ValueError::TypeMismatch { .. }
        | ValueError::NotNumeric { .. }
        | ValueError::NotText { .. } => ErrorCode::E2002,
    };
    interpreter(code, err.to_string())
}

#[cold]
pub fn undefined_function(name: &str) -> ScriptError {
    interpreter(ErrorCode::E2003, format!("undefined function '{name}'"))
}

#[cold]
pub fn arity_mismatch(function: &str, expected: usize, got: usize) -> ScriptError {
    let plural = if expected == 1 { "" } else { "s" };
    interpreter(
        ErrorCode::E2004,
        format!("function '{function}' expects {expected} argument{plural}, got {got}"),
    )
}

#[cold]
pub fn argument_type_mismatch(function: &str, param: &Parameter, got: ValueKind) -> ScriptError {
    interpreter(
        ErrorCode::E2005,
        format!(
            "argument '{}' of function '{function}' must be {}, got {got}",
            param.name, param.ty
        ),
    )
}

#[cold]
pub fn break_outside_loop() -> ScriptError {
    interpreter(ErrorCode::E2006, "break outside loop".to_string())
}

#[cold]
pub fn already_declared(name: &str) -> ScriptError {
    interpreter(
        ErrorCode::E2007,
        format!("variable '{name}' is already declared"),
    )
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> ScriptError {
    interpreter(
        ErrorCode::E2009,
        format!("maximum call depth of {limit} exceeded"),
    )
}

#[cold]
pub fn non_boolean_condition(got: ValueKind) -> ScriptError {
    interpreter(
        ErrorCode::E2010,
        format!("condition must produce a boolean, got {got}"),
    )
}

#[cold]
pub fn invalid_yield_duration(detail: &str) -> ScriptError {
    interpreter(ErrorCode::E2011, format!("invalid yield duration: {detail}"))
}

#[cold]
pub fn empty_return_register() -> ScriptError {
    interpreter(
        ErrorCode::E2012,
        "called function did not return a value".to_string(),
    )
}

#[cold]
pub fn not_resumable(reason: &str) -> ScriptError {
    interpreter(ErrorCode::E2013, reason.to_string())
}

#[cold]
pub fn unknown_instance(id: u64) -> ScriptError {
    interpreter(ErrorCode::E2014, format!("no interpreter with id {id}"))
}

#[cold]
pub fn function_already_loaded(name: &str) -> ScriptError {
    interpreter(
        ErrorCode::E2015,
        format!("a function named '{name}' is already loaded"),
    )
}

#[cold]
pub fn not_timed_yield(id: u64) -> ScriptError {
    interpreter(
        ErrorCode::E2016,
        format!("interpreter {id} is not in a timed yield"),
    )
}

#[cold]
pub fn missing_block(function: &str, index: usize) -> ScriptError {
    interpreter(
        ErrorCode::E2017,
        format!("function '{function}' has no block {index}"),
    )
}

// User Errors

/// Raised by the `fail` procedure.
#[cold]
pub fn user_fail(message: impl Into<String>) -> ScriptError {
    ScriptError::new(ErrorKind::User, ErrorCode::E3001, message)
}

// Host Errors

#[cold]
pub fn host_error(message: impl Into<String>) -> ScriptError {
    ScriptError::new(ErrorKind::Host, ErrorCode::E4001, message)
}

#[cfg(test)]
mod tests;
