//! Instruction execution.
//!
//! - `value`: argument solving and the built-in value functions
//! - `procedure`: built-in effects (`out`, `fail`, `host_*`)
//! - `instruction`: dispatch over every instruction kind
//!
//! Executing an instruction only reads and writes a [`RunContext`]: its
//! outcome is the signal left in the context. The interpreter owns frames
//! and acts on that signal afterwards.
//!
//! [`RunContext`]: crate::RunContext

pub mod instruction;
pub mod procedure;
pub mod value;

pub use instruction::execute;
pub use value::{evaluate, solve, solve_one};
