//! Compiled program model.
//!
//! A `Function` is a flat list of `Block`s. Block 0 is the entry block; every
//! `if` clause and `loop` body the parser lowers becomes another block that
//! instructions reference by `BlockId`. Nothing here nests.

mod format;

use crate::param::Parameter;
use crate::value::Value;

/// Index of a block within its function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct BlockId(u32);

impl BlockId {
    /// The entry block of every function.
    pub const ENTRY: BlockId = BlockId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        BlockId(index)
    }

    /// Get the index into the function's block list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_entry(self) -> bool {
        self.0 == 0
    }
}

/// How the interpreter treats the end of a block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Falls back to the parent frame.
    Linear,
    /// Restarts at its first instruction with a fresh scope.
    Loop,
}

/// Ordered instructions sharing one end-of-block behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub instructions: Vec<Instruction>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Block {
            kind,
            instructions: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// A named, parameterized function.
///
/// Immutable once the parser hands it out.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub name: String,
    pub params: Vec<Parameter>,
    pub blocks: Vec<Block>,
}

impl Function {
    /// A function with an empty entry block.
    pub fn new(name: impl Into<String>, params: Vec<Parameter>) -> Self {
        Function {
            name: name.into(),
            params,
            blocks: vec![Block::new(BlockKind::Linear)],
        }
    }

    #[inline]
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.index())
    }

    /// Append a block and return its id.
    pub fn push_block(&mut self, kind: BlockKind) -> BlockId {
        let id = BlockId::new(u32::try_from(self.blocks.len()).unwrap_or(u32::MAX));
        self.blocks.push(Block::new(kind));
        id
    }
}

/// A single instruction plus the line it was parsed from.
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    pub line: u32,
    pub kind: InstrKind,
}

impl Instruction {
    #[inline]
    pub fn new(line: u32, kind: InstrKind) -> Self {
        Instruction { line, kind }
    }
}

/// Built-in effects. These never produce a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProcedureOp {
    Out,
    Fail,
    HostSet,
    HostAdd,
    HostDelete,
    HostDo,
}

impl ProcedureOp {
    pub fn name(self) -> &'static str {
        match self {
            ProcedureOp::Out => "out",
            ProcedureOp::Fail => "fail",
            ProcedureOp::HostSet => "host_set",
            ProcedureOp::HostAdd => "host_add",
            ProcedureOp::HostDelete => "host_delete",
            ProcedureOp::HostDo => "host_do",
        }
    }
}

/// Built-in value functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FunctionOp {
    IsEqual,
    IsGreaterThan,
    IsLesserThan,
    Add,
    Substract,
    Concatenate,
    IsInt,
    IsBool,
    IsDouble,
    IsString,
    HostHas,
    HostGet,
    HostQuery,
    /// Produces its single argument (a literal, or a symbol's current value).
    Constant,
    /// Reads the return register filled by the last call.
    ReadReturn,
}

impl FunctionOp {
    pub fn name(self) -> &'static str {
        match self {
            FunctionOp::IsEqual => "is_equal",
            FunctionOp::IsGreaterThan => "is_greater_than",
            FunctionOp::IsLesserThan => "is_lesser_than",
            FunctionOp::Add => "add",
            FunctionOp::Substract => "substract",
            FunctionOp::Concatenate => "concatenate",
            FunctionOp::IsInt => "is_int",
            FunctionOp::IsBool => "is_bool",
            FunctionOp::IsDouble => "is_double",
            FunctionOp::IsString => "is_string",
            FunctionOp::HostHas => "host_has",
            FunctionOp::HostGet => "host_get",
            FunctionOp::HostQuery => "host_query",
            FunctionOp::Constant => "constant",
            FunctionOp::ReadReturn => "read_return",
        }
    }
}

/// A value function applied to unevaluated arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionExpr {
    pub op: FunctionOp,
    pub args: Vec<Value>,
}

impl FunctionExpr {
    pub fn new(op: FunctionOp, args: Vec<Value>) -> Self {
        FunctionExpr { op, args }
    }

    pub fn constant(value: Value) -> Self {
        FunctionExpr {
            op: FunctionOp::Constant,
            args: vec![value],
        }
    }

    pub fn read_return() -> Self {
        FunctionExpr {
            op: FunctionOp::ReadReturn,
            args: Vec::new(),
        }
    }
}

/// One clause of a lowered `if`/`elseif`/`else`.
///
/// `condition: None` is the `else` clause and always matches.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub condition: Option<FunctionExpr>,
    pub target: BlockId,
    pub negated: bool,
    pub line: u32,
}

impl Branch {
    /// Whether a condition result selects this branch.
    #[inline]
    pub fn matches(&self, condition: bool) -> bool {
        condition != self.negated
    }
}

/// Instruction kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum InstrKind {
    /// Built-in effect over solved arguments.
    Procedure { op: ProcedureOp, args: Vec<Value> },
    /// `let name be ...;`
    Declare { name: String, value: FunctionExpr },
    /// `set name to ...;`
    Assign { name: String, value: FunctionExpr },
    /// Call to a user function. The result lands in the return register.
    Call { name: String, args: Vec<Value> },
    Return(Option<Value>),
    /// Optional argument is the suspension time in milliseconds.
    Yield(Option<Value>),
    Break,
    Exit,
    /// Ordered clauses; the first match jumps.
    ConditionalBranch(Vec<Branch>),
    /// Enter a `Loop` block.
    Loop(BlockId),
}
