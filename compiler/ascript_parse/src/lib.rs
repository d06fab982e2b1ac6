//! Recursive descent parser for ascript.
//!
//! Produces one [`Function`] per `beginfunction ... endfunction;` block.
//! Structured control flow is lowered while parsing: every `if` clause and
//! every `loop` body becomes its own block in the function's flat block
//! list, and the enclosing block gets a `conditional_branch` or `loop`
//! instruction that jumps there by index.
//!
//! The first error aborts the whole parse. Nothing partially parsed is ever
//! returned.

mod cursor;
mod grammar;

pub use cursor::Cursor;
pub use grammar::{build_function, check_argcount, Arity};

use std::path::Path;

use ascript_diagnostic::ScriptResult;
use ascript_ir::{Function, Token};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse every function in the token stream.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(mut self) -> ScriptResult<Vec<Function>> {
        let functions = self.parse_root()?;
        debug!(count = functions.len(), "parsed functions");
        Ok(functions)
    }
}

/// Parse a lexed token stream.
pub fn parse(tokens: &[Token]) -> ScriptResult<Vec<Function>> {
    Parser::new(tokens).parse()
}

/// Lex and parse source text.
pub fn parse_source(source: &str) -> ScriptResult<Vec<Function>> {
    let tokens = ascript_lexer::tokenize(source)?;
    parse(&tokens)
}

/// Read, lex and parse a source file.
pub fn parse_file(path: impl AsRef<Path>) -> ScriptResult<Vec<Function>> {
    let tokens = ascript_lexer::tokenize_file(path)?;
    parse(&tokens)
}

#[cfg(test)]
mod tests;
