//! `InterpreterBuilder` for configuring Interpreter instances.

use std::sync::Arc;

use ascript_ir::Function;
use rustc_hash::FxHashMap;

use super::{FunctionTable, Interpreter};

/// Default limit on nested user-function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Builder for creating Interpreter instances.
///
/// Cheap to clone; the environment keeps one and builds every instance it
/// runs from it.
#[derive(Clone, Debug)]
pub struct InterpreterBuilder {
    max_call_depth: usize,
    functions: FunctionTable,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            functions: FxHashMap::default(),
        }
    }

    /// Limit on active user-function calls, including the one `run` starts.
    ///
    /// Exceeding it fails the instance with an interpreter error.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Make a function callable. A later function with the same name
    /// replaces an earlier one.
    #[must_use]
    pub fn function(mut self, function: Arc<Function>) -> Self {
        self.functions.insert(function.name.clone(), function);
        self
    }

    #[must_use]
    pub fn functions(mut self, functions: impl IntoIterator<Item = Arc<Function>>) -> Self {
        for function in functions {
            self.functions.insert(function.name.clone(), function);
        }
        self
    }

    pub fn build(&self) -> Interpreter {
        Interpreter::from_parts(self.functions.clone(), self.max_call_depth)
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
