//! ascript Eval - execution engine for compiled ascript functions.
//!
//! # Architecture
//!
//! - `RunContext`: per-frame symbol table plus the signal, value and return
//!   registers an instruction writes
//! - `exec`: executes one instruction against a context; instructions only
//!   write signals and never touch frames
//! - `Interpreter`: explicit frame stack that acts on those signals, with
//!   cooperative yield/resume
//! - `Environment`: function table plus every suspended interpreter, keyed
//!   by id
//! - `Host` / `OutSink`: capabilities the embedding application supplies on
//!   each `run`/`resume` call

mod context;
mod environment;
pub mod exec;
mod host;
pub mod interpreter;
mod out;
mod return_value;

pub use context::{RunContext, Signal, SymbolTable};
pub use environment::Environment;
pub use host::{Host, HostError, MapHost};
pub use interpreter::{
    prepare_symbol_table, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH,
};
pub use out::{BufferSink, OutSink, StdoutSink};
pub use return_value::ReturnValue;
