//! Function declarations.

use ascript_diagnostic::{errors, ScriptResult};
use ascript_ir::{BlockId, Function, ParamType, Parameter, TokenKind};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::Parser;

impl Parser<'_> {
    /// `root := function*`
    ///
    /// Function names must be unique within one source.
    pub(crate) fn parse_root(&mut self) -> ScriptResult<Vec<Function>> {
        let mut functions = Vec::new();
        let mut seen = FxHashSet::default();
        while !self.cursor.is_at_end() {
            let line = self.cursor.line();
            let func = self.parse_function()?;
            if !seen.insert(func.name.clone()) {
                return Err(errors::duplicate_function(&func.name, line));
            }
            functions.push(func);
        }
        Ok(functions)
    }

    /// `function := "beginfunction" ident [ "[" params "]" ] ";" stmt* "endfunction" ";"`
    fn parse_function(&mut self) -> ScriptResult<Function> {
        self.cursor.expect(
            &TokenKind::BeginFunction,
            "functions start with 'beginfunction'",
        )?;
        let name = self
            .cursor
            .expect_ident("'beginfunction' is followed by the function name")?;
        let params = if self.cursor.check(&TokenKind::OpenBracket) {
            self.parse_params()?
        } else {
            Vec::new()
        };
        self.cursor
            .expect(&TokenKind::Semicolon, "function headers end with ';'")?;

        let mut func = Function::new(name, params);
        self.parse_body(&mut func, BlockId::ENTRY, &[TokenKind::EndFunction])?;
        self.cursor
            .expect(&TokenKind::EndFunction, "functions close with 'endfunction'")?;
        self.cursor
            .expect(&TokenKind::Semicolon, "'endfunction' is followed by ';'")?;

        debug!(
            name = %func.name,
            params = func.params.len(),
            blocks = func.blocks.len(),
            "parsed function"
        );
        Ok(func)
    }

    /// `params := "[" (ident "as" type ("," ident "as" type)*)? "]"`
    fn parse_params(&mut self) -> ScriptResult<Vec<Parameter>> {
        self.cursor
            .expect(&TokenKind::OpenBracket, "parameter lists start with '['")?;
        let mut params = Vec::new();
        if self.cursor.check(&TokenKind::CloseBracket) {
            self.cursor.advance();
            return Ok(params);
        }
        loop {
            let name = self.cursor.expect_ident("parameters read 'name as type'")?;
            self.cursor
                .expect(&TokenKind::As, "parameters read 'name as type'")?;
            let ty = self.parse_param_type()?;
            params.push(Parameter::new(name, ty));

            if self.cursor.check(&TokenKind::Comma) {
                self.cursor.advance();
                continue;
            }
            self.cursor
                .expect(&TokenKind::CloseBracket, "parameter lists end with ']'")?;
            return Ok(params);
        }
    }

    fn parse_param_type(&mut self) -> ScriptResult<ParamType> {
        let ty = match self.cursor.current_kind() {
            Some(TokenKind::IntType) => ParamType::Integer,
            Some(TokenKind::DoubleType) => ParamType::Decimal,
            Some(TokenKind::BoolType) => ParamType::Boolean,
            Some(TokenKind::StringType) => ParamType::Text,
            Some(TokenKind::AnyType) => ParamType::Any,
            _ => {
                return Err(self
                    .cursor
                    .expect_error("type", "one of int, double, bool, string, any"))
            }
        };
        self.cursor.advance();
        Ok(ty)
    }
}
