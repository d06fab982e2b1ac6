//! Grammar Modules
//!
//! Each module extends `Parser` with methods for specific productions:
//!
//! - [`function`]: the root sequence of function declarations and parameters
//! - [`statement`]: statement dispatch inside a block
//! - [`control`]: `if`/`elseif`/`else` and `loop` lowering
//! - [`value`]: operands, argument lists, value functions and arity rules
//!
//! ```text
//! root      := function*
//! function  := "beginfunction" ident [ "[" params "]" ] ";" stmt* "endfunction" ";"
//! stmt      := let | set | if | loop | break | exit | return | yield
//!            | procedure "[" args "]" ";" | ident "[" args "]" ";"
//! cond      := ["not"] valuefn "[" args "]"
//! value     := literal | ident | ident "[" args "]" | valuefn "[" args "]"
//! operand   := literal | ident
//! ```

mod control;
mod function;
mod statement;
mod value;

pub use value::{build_function, check_argcount, Arity};
