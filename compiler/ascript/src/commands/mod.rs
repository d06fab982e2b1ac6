//! Command handlers for the `ascript` CLI.
//!
//! Handlers return their report or outcome instead of printing, so
//! `main.rs` owns stdout and the tests can inspect what a command produced.

mod debug;
mod run;

pub use debug::{print_report, tokens_report};
pub use run::{drive, run_file};

use ascript_diagnostic::{errors, ScriptError, ScriptResult};
use ascript_eval::ReturnValue;
use ascript_ir::{TokenKind, Value};

/// Read a command-line argument as a single literal.
///
/// Uses the script lexer, so `3`, `-2.5`, `true` and `"text"` mean what
/// they mean in source. Anything else is rejected.
pub fn parse_literal(arg: &str) -> ScriptResult<Value> {
    let mut tokens = ascript_lexer::tokenize(arg)?;
    let token = match (tokens.pop(), tokens.is_empty()) {
        (Some(token), true) => token,
        (None, _) => {
            return Err(errors::unexpected_end("value", "reading a command-line argument", 1));
        }
        (Some(_), false) => return Err(errors::not_a_value(arg, 1)),
    };
    match token.kind {
        TokenKind::Text(s) => Ok(Value::Text(s)),
        TokenKind::Integer(n) => Ok(Value::Integer(n)),
        TokenKind::Decimal(d) => Ok(Value::Decimal(d)),
        TokenKind::Boolean(b) => Ok(Value::Boolean(b)),
        other => Err(errors::not_a_value(other.display_name(), token.line)),
    }
}

/// Parse every argument, stopping at the first that is not a literal.
pub fn parse_literals<S: AsRef<str>>(args: &[S]) -> ScriptResult<Vec<Value>> {
    args.iter().map(|arg| parse_literal(arg.as_ref())).collect()
}

/// One-line summary of how a run ended.
pub fn describe_outcome(outcome: &ReturnValue) -> String {
    match outcome {
        ReturnValue::Value(value) => format!("returned {value}"),
        ReturnValue::Nothing => "returned nothing".to_string(),
        ReturnValue::Yield => "yielded, execution not finished".to_string(),
    }
}

/// Error text for stderr, followed by the backtrace when there is one.
pub fn render_error(err: &ScriptError) -> String {
    let mut rendered = format!("error: {err}");
    if let Some(backtrace) = err.backtrace.as_ref().filter(|bt| !bt.is_empty()) {
        rendered.push('\n');
        rendered.push_str(backtrace.to_string().trim_end());
    }
    rendered
}

#[cfg(test)]
mod tests;
