//! ascript - an embeddable scripting language with cooperative suspension.
//!
//! # Architecture
//!
//! ```text
//! source text
//!     │
//!     ▼
//! ascript_lexer::tokenize() ──► Vec<Token>
//!     │
//!     ▼
//! ascript_parse::parse() ──► Vec<Function>   (control flow lowered to blocks)
//!     │
//!     ▼
//! Environment::run() / resume() ──► ReturnValue
//! ```
//!
//! This crate re-exports the pieces an embedding application needs and hosts
//! the `ascript` command-line driver.

pub mod commands;

use std::sync::Once;

pub use ascript_diagnostic::{
    Backtrace, BacktraceFrame, ErrorCode, ErrorKind, ScriptError, ScriptResult,
};
pub use ascript_eval::{
    BufferSink, Environment, Host, HostError, Interpreter, InterpreterBuilder, MapHost, OutSink,
    ReturnValue, StdoutSink, DEFAULT_MAX_CALL_DEPTH,
};
pub use ascript_ir::{Function, ParamType, Parameter, Token, TokenKind, Value, ValueKind};
pub use ascript_lexer::{tokenize, tokenize_file};
pub use ascript_parse::{parse, parse_file, parse_source};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
/// Try `RUST_LOG=ascript_eval=debug`, or `=trace` for every instruction.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
