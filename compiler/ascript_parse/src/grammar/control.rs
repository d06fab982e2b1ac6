//! Control-flow lowering.
//!
//! `if` and `loop` never nest in the output. Their bodies are appended to the
//! function as new blocks, and the block containing the statement receives a
//! single instruction that jumps there.

use ascript_diagnostic::ScriptResult;
use ascript_ir::{BlockId, BlockKind, Branch, Function, InstrKind, Instruction, TokenKind};
use tracing::trace;

use super::value::push;
use crate::Parser;

const CLAUSE_END: [TokenKind; 3] = [TokenKind::ElseIf, TokenKind::Else, TokenKind::EndIf];

impl Parser<'_> {
    /// `"if" cond ";" stmt* ("elseif" cond ";" stmt*)* ["else" ";" stmt*] "endif" ";"`
    ///
    /// Each clause gets a fresh `Linear` block. The `conditional_branch`
    /// holding every clause goes into `block` once all clauses are parsed.
    pub(super) fn parse_if(&mut self, func: &mut Function, block: BlockId) -> ScriptResult<()> {
        let line = self.cursor.line();
        self.cursor.expect(&TokenKind::If, "conditional")?;

        let mut branches = Vec::new();
        let mut clause_line = line;
        loop {
            let negated = if self.cursor.check(&TokenKind::Not) {
                self.cursor.advance();
                true
            } else {
                false
            };
            let condition = self.parse_function_expr()?;
            self.cursor
                .expect(&TokenKind::Semicolon, "conditions end with ';'")?;

            let target = func.push_block(BlockKind::Linear);
            self.parse_body(func, target, &CLAUSE_END)?;
            branches.push(Branch {
                condition: Some(condition),
                target,
                negated,
                line: clause_line,
            });

            if self.cursor.check(&TokenKind::ElseIf) {
                clause_line = self.cursor.line();
                self.cursor.advance();
                continue;
            }
            if self.cursor.check(&TokenKind::Else) {
                let else_line = self.cursor.line();
                self.cursor.advance();
                self.cursor
                    .expect(&TokenKind::Semicolon, "'else' is followed by ';'")?;
                let target = func.push_block(BlockKind::Linear);
                self.parse_body(func, target, &[TokenKind::EndIf])?;
                branches.push(Branch {
                    condition: None,
                    target,
                    negated: false,
                    line: else_line,
                });
            }
            break;
        }

        self.cursor
            .expect(&TokenKind::EndIf, "conditionals close with 'endif'")?;
        self.cursor
            .expect(&TokenKind::Semicolon, "'endif' is followed by ';'")?;

        trace!(line, clauses = branches.len(), "lowered if");
        push(
            func,
            block,
            Instruction::new(line, InstrKind::ConditionalBranch(branches)),
        )?;
        Ok(())
    }

    /// `"loop" ";" stmt* "endloop" ";"`
    pub(super) fn parse_loop(&mut self, func: &mut Function, block: BlockId) -> ScriptResult<()> {
        let line = self.cursor.line();
        self.cursor.expect(&TokenKind::Loop, "loop")?;
        self.cursor
            .expect(&TokenKind::Semicolon, "'loop' is followed by ';'")?;

        let target = func.push_block(BlockKind::Loop);
        self.parse_body(func, target, &[TokenKind::EndLoop])?;
        self.cursor
            .expect(&TokenKind::EndLoop, "loops close with 'endloop'")?;
        self.cursor
            .expect(&TokenKind::Semicolon, "'endloop' is followed by ';'")?;

        trace!(line, target = target.raw(), "lowered loop");
        push(func, block, Instruction::new(line, InstrKind::Loop(target)))?;
        Ok(())
    }
}
