//! Deterministic textual dump of compiled functions.
//!
//! Output depends only on the function's structure, so parsing the same
//! source twice prints the same text.

use std::fmt;

use super::{Block, BlockKind, Branch, Function, FunctionExpr, InstrKind, Instruction};
use crate::value::Value;

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Value]) -> fmt::Result {
    f.write_str("[")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str("]")
}

impl fmt::Display for FunctionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.op.name())?;
        write_args(f, &self.args)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.condition {
            None => write!(f, "else jump to {}", self.target.raw()),
            Some(condition) => {
                f.write_str("if ")?;
                if self.negated {
                    f.write_str("not ")?;
                }
                write!(f, "{condition} jump to {}", self.target.raw())
            }
        }
    }
}

impl fmt::Display for InstrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstrKind::Procedure { op, args } => {
                f.write_str(op.name())?;
                write_args(f, args)
            }
            InstrKind::Declare { name, value } => write!(f, "let '{name}' be {value}"),
            InstrKind::Assign { name, value } => write!(f, "set '{name}' to {value}"),
            InstrKind::Call { name, args } => {
                write!(f, "call '{name}'")?;
                write_args(f, args)
            }
            InstrKind::Return(None) => f.write_str("return"),
            InstrKind::Return(Some(value)) => write!(f, "return {value}"),
            InstrKind::Yield(None) => f.write_str("yield"),
            InstrKind::Yield(Some(ms)) => write!(f, "yield for {ms}"),
            InstrKind::Break => f.write_str("break"),
            InstrKind::Exit => f.write_str("exit"),
            InstrKind::ConditionalBranch(branches) => {
                f.write_str("branch {")?;
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{branch}")?;
                }
                f.write_str("}")
            }
            InstrKind::Loop(target) => write!(f, "jump to and loop {}", target.raw()),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.kind, self.line)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Linear => f.write_str("linear"),
            BlockKind::Loop => f.write_str("loop"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} block:", self.kind)?;
        for (i, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "    {i}: {instruction}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function '{}' takes [", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        writeln!(f, "]")?;
        for (i, block) in self.blocks.iter().enumerate() {
            write!(f, "  [{i}] {block}")?;
        }
        Ok(())
    }
}
