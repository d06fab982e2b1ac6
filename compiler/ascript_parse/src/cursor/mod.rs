//! Token cursor for navigating the token stream.
//!
//! Provides lookahead, consumption and the `expect` helpers every grammar
//! production uses to insist on a token.

use std::mem;

use ascript_diagnostic::{errors, ScriptError, ScriptResult};
use ascript_ir::{Token, TokenKind};

/// Cursor over a lexed token slice.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<&'a TokenKind> {
        self.current().map(|t| &t.kind)
    }

    /// One-token lookahead past the current token.
    #[inline]
    pub fn peek_next_kind(&self) -> Option<&'a TokenKind> {
        self.tokens.get(self.pos + 1).map(|t| &t.kind)
    }

    /// Line of the current token, or of the last token once the stream is
    /// exhausted.
    pub fn line(&self) -> u32 {
        self.current()
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    /// Check the current token's kind, ignoring literal payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind()
            .is_some_and(|k| mem::discriminant(k) == mem::discriminant(kind))
    }

    /// Check if the current token is any of `kinds`.
    pub fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|k| self.check(k))
    }

    #[inline]
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of `kind` or fail naming what was expected.
    pub fn expect(&mut self, kind: &TokenKind, context: &str) -> ScriptResult<&'a Token> {
        if self.check(kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.expect_error(kind.display_name(), context))
    }

    /// Consume an identifier and return its name.
    pub fn expect_ident(&mut self, context: &str) -> ScriptResult<String> {
        match self.current_kind() {
            Some(TokenKind::Ident(name)) => {
                self.pos += 1;
                Ok(name.clone())
            }
            _ => Err(self.expect_error("identifier", context)),
        }
    }

    /// Build the error for a failed `expect`.
    #[cold]
    #[inline(never)]
    pub fn expect_error(&self, expected: &str, context: &str) -> ScriptError {
        match self.current() {
            Some(token) => {
                errors::unexpected_token(expected, token.kind.display_name(), context, token.line)
            }
            None => errors::unexpected_end(expected, context, self.line()),
        }
    }
}
