//! Per-frame run context and the signal protocol.

use ascript_ir::{BlockId, Value};
use rustc_hash::FxHashMap;

/// Variables visible to one frame.
pub type SymbolTable = FxHashMap<String, Value>;

/// What an executed instruction asks the interpreter to do next.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Signal {
    #[default]
    None,
    Break,
    Return,
    ReturnWithValue(Value),
    /// Suspend; a duration makes it a timed yield (milliseconds).
    Yield(Option<u64>),
    /// Push the given block of the current function.
    Jump(BlockId),
    /// Call a user function with the context's pending arguments.
    Call(String),
    Exit,
    Fail(String),
}

/// Registers and scope of one frame.
///
/// `reset` runs before every instruction: the signal, the value register
/// and the pending call arguments never outlive the instruction that wrote
/// them. The symbol table and the return register persist.
#[derive(Clone, Debug, Default)]
pub struct RunContext {
    pub symbols: SymbolTable,
    pub signal: Signal,
    pub value: Option<Value>,
    /// Value produced by the last completed call, if it returned one.
    pub return_value: Option<Value>,
    pub arguments: Vec<Value>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbols(symbols: SymbolTable) -> Self {
        RunContext {
            symbols,
            ..Self::default()
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.signal = Signal::None;
        self.value = None;
        self.arguments.clear();
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.symbols.get(name)
    }

    /// Fold an exiting child frame's table back into this one.
    ///
    /// Names present here take the child's value; names only the child
    /// declared are dropped.
    pub fn merge_from(&mut self, child: SymbolTable) {
        for (name, value) in child {
            if let Some(slot) = self.symbols.get_mut(&name) {
                *slot = value;
            }
        }
    }
}

#[cfg(test)]
mod tests;
