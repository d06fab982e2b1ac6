//! Operands, argument lists and value functions.

use ascript_diagnostic::{errors, ScriptResult};
use ascript_ir::{
    BlockId, Function, FunctionExpr, FunctionOp, InstrKind, Instruction, ProcedureOp, TokenKind,
    Value,
};

use crate::Parser;

/// Accepted argument counts for a built-in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    pub fn of_procedure(op: ProcedureOp) -> Self {
        match op {
            ProcedureOp::HostSet | ProcedureOp::HostAdd => Arity::Exactly(2),
            ProcedureOp::HostDelete => Arity::Exactly(1),
            ProcedureOp::Out | ProcedureOp::Fail | ProcedureOp::HostDo => Arity::Any,
        }
    }

    pub fn of_function(op: FunctionOp) -> Self {
        match op {
            FunctionOp::IsEqual
            | FunctionOp::IsGreaterThan
            | FunctionOp::IsLesserThan
            | FunctionOp::Add
            | FunctionOp::Substract
            | FunctionOp::Concatenate => Arity::AtLeast(1),
            FunctionOp::HostGet | FunctionOp::HostHas | FunctionOp::Constant => Arity::Exactly(1),
            FunctionOp::ReadReturn => Arity::Exactly(0),
            FunctionOp::IsInt
            | FunctionOp::IsBool
            | FunctionOp::IsDouble
            | FunctionOp::IsString
            | FunctionOp::HostQuery => Arity::Any,
        }
    }

    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Any => true,
        }
    }

    fn describe(self) -> String {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        match self {
            Arity::Exactly(n) => format!("{n} argument{}", plural(n)),
            Arity::AtLeast(n) => format!("at least {n} argument{}", plural(n)),
            Arity::Any => "any number of arguments".to_string(),
        }
    }
}

/// Reject an argument count the built-in never accepts.
pub fn check_argcount(builtin: &str, arity: Arity, count: usize, line: u32) -> ScriptResult<()> {
    if arity.accepts(count) {
        Ok(())
    } else {
        Err(errors::builtin_arg_count(builtin, &arity.describe(), count, line))
    }
}

/// Map a value-function token to its operation.
pub fn build_function(kind: &TokenKind, line: u32) -> ScriptResult<FunctionOp> {
    let op = match kind {
        TokenKind::IsEqual => FunctionOp::IsEqual,
        TokenKind::IsGreaterThan => FunctionOp::IsGreaterThan,
        TokenKind::IsLesserThan => FunctionOp::IsLesserThan,
        TokenKind::Add => FunctionOp::Add,
        TokenKind::Substract => FunctionOp::Substract,
        TokenKind::Concatenate => FunctionOp::Concatenate,
        TokenKind::IsInt => FunctionOp::IsInt,
        TokenKind::IsBool => FunctionOp::IsBool,
        TokenKind::IsDouble => FunctionOp::IsDouble,
        TokenKind::IsString => FunctionOp::IsString,
        TokenKind::HostHas => FunctionOp::HostHas,
        TokenKind::HostGet => FunctionOp::HostGet,
        TokenKind::HostQuery => FunctionOp::HostQuery,
        other => return Err(errors::not_a_value(other.display_name(), line)),
    };
    Ok(op)
}

/// Map a procedure token to its operation.
pub(super) fn procedure_op(kind: &TokenKind) -> Option<ProcedureOp> {
    match kind {
        TokenKind::Out => Some(ProcedureOp::Out),
        TokenKind::Fail => Some(ProcedureOp::Fail),
        TokenKind::HostSet => Some(ProcedureOp::HostSet),
        TokenKind::HostAdd => Some(ProcedureOp::HostAdd),
        TokenKind::HostDelete => Some(ProcedureOp::HostDelete),
        TokenKind::HostDo => Some(ProcedureOp::HostDo),
        _ => None,
    }
}

fn literal_value(kind: &TokenKind) -> Option<Value> {
    match kind {
        TokenKind::Text(s) => Some(Value::Text(s.clone())),
        TokenKind::Integer(n) => Some(Value::Integer(*n)),
        TokenKind::Decimal(d) => Some(Value::Decimal(*d)),
        TokenKind::Boolean(b) => Some(Value::Boolean(*b)),
        _ => None,
    }
}

impl Parser<'_> {
    /// `operand := literal | ident`
    pub(super) fn parse_operand(&mut self, context: &str) -> ScriptResult<Value> {
        let Some(kind) = self.cursor.current_kind() else {
            return Err(self.cursor.expect_error("value", context));
        };
        let value = match kind {
            TokenKind::Ident(name) => Value::symbol(name.clone()),
            other => match literal_value(other) {
                Some(value) => value,
                None => return Err(self.cursor.expect_error("value", context)),
            },
        };
        self.cursor.advance();
        Ok(value)
    }

    /// `args := "[" (operand ("," operand)*)? "]"`
    pub(super) fn parse_args(&mut self, context: &str) -> ScriptResult<Vec<Value>> {
        self.cursor.expect(&TokenKind::OpenBracket, context)?;
        let mut args = Vec::new();
        if self.cursor.check(&TokenKind::CloseBracket) {
            self.cursor.advance();
            return Ok(args);
        }
        loop {
            args.push(self.parse_operand("arguments are literals or identifiers")?);
            if self.cursor.check(&TokenKind::Comma) {
                self.cursor.advance();
                continue;
            }
            self.cursor
                .expect(&TokenKind::CloseBracket, "argument lists end with ']'")?;
            return Ok(args);
        }
    }

    /// `valuefn "[" args "]"`, arity-checked.
    pub(super) fn parse_function_expr(&mut self) -> ScriptResult<FunctionExpr> {
        let line = self.cursor.line();
        let Some(kind) = self.cursor.current_kind() else {
            return Err(self.cursor.expect_error("function", "a condition needs a function"));
        };
        let op = build_function(kind, line)?;
        self.cursor.advance();
        let args = self.parse_args("function arguments start with '['")?;
        check_argcount(op.name(), Arity::of_function(op), args.len(), line)?;
        Ok(FunctionExpr::new(op, args))
    }

    /// Right-hand side of `let`/`set`, appended to `block`.
    ///
    /// A user function call lowers to a `call` followed by the binding
    /// instruction reading the return register. Everything else produces
    /// the binding alone.
    pub(super) fn parse_binding(
        &mut self,
        func: &mut Function,
        block: BlockId,
        line: u32,
        bind: impl FnOnce(FunctionExpr) -> InstrKind,
    ) -> ScriptResult<()> {
        let Some(kind) = self.cursor.current_kind() else {
            return Err(self.cursor.expect_error("value", "a binding needs a value"));
        };

        let value = if let Some(literal) = literal_value(kind) {
            self.cursor.advance();
            FunctionExpr::constant(literal)
        } else if let TokenKind::Ident(name) = kind {
            let name = name.clone();
            self.cursor.advance();
            if self.cursor.check(&TokenKind::OpenBracket) {
                let args = self.parse_args("call arguments start with '['")?;
                push(func, block, Instruction::new(line, InstrKind::Call { name, args }))?;
                FunctionExpr::read_return()
            } else {
                FunctionExpr::constant(Value::Symbol(name))
            }
        } else {
            self.parse_function_expr()?
        };

        push(func, block, Instruction::new(line, bind(value)))?;
        Ok(())
    }
}

/// Append an instruction to a block of the function being built.
///
/// `block` must come from `Function::push_block` on the same function.
pub(super) fn push(
    func: &mut Function,
    block: BlockId,
    instruction: Instruction,
) -> ScriptResult<()> {
    let line = instruction.line;
    let Some(target) = func.blocks.get_mut(block.index()) else {
        return Err(errors::missing_block(&func.name, block.index()).with_line(line));
    };
    target.instructions.push(instruction);
    Ok(())
}
