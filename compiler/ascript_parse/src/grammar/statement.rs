//! Statement dispatch.
//!
//! Every statement appends one or more instructions to the block it was
//! parsed in and must end with `;`.

use ascript_diagnostic::ScriptResult;
use ascript_ir::{BlockId, Function, InstrKind, Instruction, TokenKind, Value};
use tracing::trace;

use super::value::{check_argcount, procedure_op, push, Arity};
use crate::Parser;

const TERMINATOR: &str = "statements end with ';'";

impl Parser<'_> {
    /// Parse statements into `block` until the current token is one of
    /// `terminators`. The terminator is left unconsumed.
    pub(super) fn parse_body(
        &mut self,
        func: &mut Function,
        block: BlockId,
        terminators: &[TokenKind],
    ) -> ScriptResult<()> {
        while !self.cursor.check_any(terminators) {
            if self.cursor.is_at_end() {
                let expected = terminators.first().map_or("statement", TokenKind::display_name);
                return Err(self.cursor.expect_error(expected, "block is never closed"));
            }
            self.parse_statement(func, block)?;
        }
        Ok(())
    }

    fn parse_statement(&mut self, func: &mut Function, block: BlockId) -> ScriptResult<()> {
        let line = self.cursor.line();
        let Some(kind) = self.cursor.current_kind() else {
            return Err(self.cursor.expect_error("statement", "function body"));
        };
        trace!(line, token = kind.display_name(), "statement");

        match kind {
            TokenKind::Let => {
                self.cursor.advance();
                let name = self.cursor.expect_ident("'let' names a variable")?;
                self.cursor.expect(&TokenKind::Be, "declarations read 'let x be value'")?;
                self.parse_binding(func, block, line, |value| InstrKind::Declare { name, value })?;
            }
            TokenKind::Set => {
                self.cursor.advance();
                let name = self.cursor.expect_ident("'set' names a variable")?;
                self.cursor.expect(&TokenKind::To, "assignments read 'set x to value'")?;
                self.parse_binding(func, block, line, |value| InstrKind::Assign { name, value })?;
            }
            TokenKind::If => return self.parse_if(func, block),
            TokenKind::Loop => return self.parse_loop(func, block),
            TokenKind::Break => {
                self.cursor.advance();
                push(func, block, Instruction::new(line, InstrKind::Break))?;
            }
            TokenKind::Exit => {
                self.cursor.advance();
                push(func, block, Instruction::new(line, InstrKind::Exit))?;
            }
            TokenKind::Return => {
                self.cursor.advance();
                let value = self.parse_optional_operand("return takes one value")?;
                push(func, block, Instruction::new(line, InstrKind::Return(value)))?;
            }
            TokenKind::Yield => {
                self.cursor.advance();
                let ms = if self.cursor.check(&TokenKind::For) {
                    self.cursor.advance();
                    Some(self.parse_operand("'yield for' takes a duration in milliseconds")?)
                } else {
                    None
                };
                push(func, block, Instruction::new(line, InstrKind::Yield(ms)))?;
            }
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.cursor.advance();
                let args = self.parse_args("calls read 'name[args]'")?;
                push(func, block, Instruction::new(line, InstrKind::Call { name, args }))?;
            }
            other => {
                let Some(op) = procedure_op(other) else {
                    return Err(self
                        .cursor
                        .expect_error("statement", "not a statement keyword"));
                };
                self.cursor.advance();
                let args = self.parse_args("procedure arguments start with '['")?;
                check_argcount(op.name(), Arity::of_procedure(op), args.len(), line)?;
                push(func, block, Instruction::new(line, InstrKind::Procedure { op, args }))?;
            }
        }

        self.cursor.expect(&TokenKind::Semicolon, TERMINATOR)?;
        Ok(())
    }

    fn parse_optional_operand(&mut self, context: &str) -> ScriptResult<Option<Value>> {
        if self.cursor.check(&TokenKind::Semicolon) {
            Ok(None)
        } else {
            self.parse_operand(context).map(Some)
        }
    }
}
