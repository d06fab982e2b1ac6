//! Function table plus every suspended program instance.
//!
//! Each `run` builds a fresh [`Interpreter`] sharing all loaded functions
//! and gives it the next id. An instance is kept only while it yields; one
//! that returns, exits or fails is dropped as soon as the call that finished
//! it comes back.

use std::path::Path;
use std::sync::Arc;

use ascript_diagnostic::{errors, ScriptResult};
use ascript_ir::{Function, Value};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::host::Host;
use crate::interpreter::{FunctionTable, Interpreter, InterpreterBuilder};
use crate::out::OutSink;
use crate::return_value::ReturnValue;

/// A retained instance and the function it was started with.
#[derive(Debug)]
struct Pack {
    function: String,
    interpreter: Interpreter,
}

#[derive(Debug, Default)]
pub struct Environment {
    functions: FunctionTable,
    packs: FxHashMap<u64, Pack>,
    last_id: u64,
    builder: InterpreterBuilder,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instances are built from `builder`, plus every loaded function.
    pub fn with_builder(builder: InterpreterBuilder) -> Self {
        Environment {
            builder,
            ..Self::default()
        }
    }

    /// Parse `source` and load every function in it.
    ///
    /// Nothing is loaded if parsing fails or any name is already taken.
    /// Returns the names loaded, in source order.
    pub fn load_source(&mut self, source: &str) -> ScriptResult<Vec<String>> {
        let functions = ascript_parse::parse_source(source)?;
        self.load_all(functions)
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> ScriptResult<Vec<String>> {
        let functions = ascript_parse::parse_file(path)?;
        self.load_all(functions)
    }

    pub fn load_function(&mut self, function: Function) -> ScriptResult<()> {
        if self.functions.contains_key(&function.name) {
            return Err(errors::function_already_loaded(&function.name));
        }
        debug!(function = %function.name, "load");
        self.functions
            .insert(function.name.clone(), Arc::new(function));
        Ok(())
    }

    fn load_all(&mut self, functions: Vec<Function>) -> ScriptResult<Vec<String>> {
        if let Some(taken) = functions
            .iter()
            .find(|f| self.functions.contains_key(&f.name))
        {
            return Err(errors::function_already_loaded(&taken.name));
        }
        let names = functions.iter().map(|f| f.name.clone()).collect();
        for function in functions {
            self.load_function(function)?;
        }
        Ok(names)
    }

    /// Remove a function. Suspended instances that already hold it keep
    /// their copy. Returns whether it was loaded.
    pub fn unload(&mut self, name: &str) -> bool {
        self.functions.remove(name).is_some()
    }

    /// Loaded function names, sorted.
    pub fn function_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn function(&self, name: &str) -> Option<&Arc<Function>> {
        self.functions.get(name)
    }

    pub fn run(
        &mut self,
        host: &mut dyn Host,
        out: &mut dyn OutSink,
        name: &str,
        args: Vec<Value>,
    ) -> ScriptResult<ReturnValue> {
        self.run_with_id(host, out, name, args).map(|(value, _)| value)
    }

    /// Like [`run`](Self::run), also returning the id the instance got.
    /// The id is only useful while the instance yields.
    #[tracing::instrument(level = "debug", skip(self, host, out, args))]
    pub fn run_with_id(
        &mut self,
        host: &mut dyn Host,
        out: &mut dyn OutSink,
        name: &str,
        args: Vec<Value>,
    ) -> ScriptResult<(ReturnValue, u64)> {
        self.last_id += 1;
        let id = self.last_id;
        let mut interpreter = self
            .builder
            .clone()
            .functions(self.functions.values().cloned())
            .build();
        let value = interpreter.run(host, out, name, args)?;
        if value.is_yield() {
            debug!(id, "retain yielding instance");
            self.packs.insert(
                id,
                Pack {
                    function: name.to_owned(),
                    interpreter,
                },
            );
        }
        Ok((value, id))
    }

    /// Resume instance `id`. It is dropped unless it yields again.
    #[tracing::instrument(level = "debug", skip(self, host, out))]
    pub fn resume(
        &mut self,
        host: &mut dyn Host,
        out: &mut dyn OutSink,
        id: u64,
    ) -> ScriptResult<ReturnValue> {
        let pack = self
            .packs
            .get_mut(&id)
            .ok_or_else(|| errors::unknown_instance(id))?;
        if pack.interpreter.is_failed() {
            self.packs.remove(&id);
            return Err(errors::not_resumable("cannot resume a failed interpreter"));
        }
        let result = pack.interpreter.resume(host, out);
        if !matches!(result, Ok(ReturnValue::Yield)) {
            debug!(id, "drop finished instance");
            self.packs.remove(&id);
        }
        result
    }

    /// Freeze every timed yield.
    pub fn pause(&mut self) {
        for pack in self.packs.values_mut() {
            pack.interpreter.pause();
        }
    }

    pub fn unpause(&mut self) {
        for pack in self.packs.values_mut() {
            pack.interpreter.unpause();
        }
    }

    /// Milliseconds left on instance `id`'s timed yield.
    pub fn yield_time(&self, id: u64) -> ScriptResult<u64> {
        let pack = self
            .packs
            .get(&id)
            .ok_or_else(|| errors::unknown_instance(id))?;
        pack.interpreter
            .yield_ms_left()
            .ok_or_else(|| errors::not_timed_yield(id))
    }

    /// Ids of retained instances, ascending.
    pub fn yield_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.packs.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Function a retained instance was started with.
    pub fn instance_function(&self, id: u64) -> Option<&str> {
        self.packs.get(&id).map(|pack| pack.function.as_str())
    }

    /// Drop a retained instance. Returns whether it existed.
    pub fn discard(&mut self, id: u64) -> bool {
        self.packs.remove(&id).is_some()
    }
}
