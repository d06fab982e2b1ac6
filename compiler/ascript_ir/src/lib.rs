//! ascript IR - values, tokens and the compiled program model.
//!
//! This crate contains the data structures shared by every other stage:
//! - `Value` for literals, parameters and interpreter registers
//! - `Token` / `TokenKind` for lexer output
//! - `Function`, `Block` and `Instruction` for parser output
//!
//! # Design Philosophy
//!
//! - **Flatten control flow**: a function is a flat list of blocks, and
//!   `if`/`loop` bodies are referenced by `BlockId` instead of being nested.
//! - **Closed instruction set**: one enum case per instruction kind, matched
//!   exhaustively by the interpreter.
//! - **Immutable after parsing**: nothing in a `Function` changes once built.

mod param;
mod program;
mod token;
mod value;

pub use param::{ParamType, Parameter};
pub use program::{
    Block, BlockId, BlockKind, Branch, Function, FunctionExpr, FunctionOp, InstrKind,
    Instruction, ProcedureOp,
};
pub use token::{Token, TokenKind};
pub use value::{Plain, Value, ValueError, ValueKind};
