//! Error reporting for ascript.
//!
//! Every failure in the pipeline becomes a `ScriptError` in one of four
//! categories:
//! - **Parse**: malformed source, reported before anything runs
//! - **Interpreter**: a well-formed program misused at runtime
//! - **User**: the program called `fail`
//! - **Host**: the embedding application rejected a request
//!
//! Each error carries an `ErrorCode` for searchability, the source line when
//! one is known, and a `Backtrace` for runtime errors.
//!
//! Construct errors through the factory functions in [`errors`] rather than
//! assembling `ScriptError` by hand.

mod error;
mod error_code;
pub mod errors;

pub use error::{Backtrace, BacktraceFrame, ErrorKind, ScriptError, ScriptResult};
pub use error_code::ErrorCode;
