//! Frame-stack interpreter with cooperative suspension.
//!
//! Every open block is a [`Frame`] on an explicit stack: a function's entry
//! block, each `if` clause it jumped into, each loop body it is running.
//! Instructions report what they want through a [`Signal`]; the loop in
//! `machine` acts on it by pushing or popping frames. Nothing recurses on the
//! native stack, so a `yield` simply returns with the frame stack intact and
//! `resume` picks up at the next instruction.
//!
//! Scoping follows from the stack. A jumped-to block starts with a copy of
//! its parent's table and, when it ends, writes back the values of names the
//! parent already had. Entry frames start from the call arguments only and
//! merge nothing back.
//!
//! [`Signal`]: crate::Signal

mod builder;
mod frame;
mod machine;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use std::sync::Arc;
use std::time::{Duration, Instant};

use ascript_diagnostic::{errors, Backtrace, BacktraceFrame, ScriptResult};
use ascript_ir::{Function, Value};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::context::SymbolTable;
use crate::host::Host;
use crate::out::OutSink;
use crate::return_value::ReturnValue;
use frame::Frame;

pub(crate) type FunctionTable = FxHashMap<String, Arc<Function>>;

/// A single program instance.
///
/// Constructed empty; [`run`](Self::run) starts a function and drives it
/// until it returns, yields, or fails. A yielding instance continues with
/// [`resume`](Self::resume). Any error leaves the instance failed for good.
#[derive(Debug)]
pub struct Interpreter {
    functions: FunctionTable,
    frames: Vec<Frame>,
    max_call_depth: usize,
    /// Number of entry frames on the stack.
    call_depth: usize,
    /// Line of a `break` still unwinding toward its loop.
    pending_break: Option<u32>,
    yielding: bool,
    failed: bool,
    deadline: Option<Instant>,
    /// Time left on a paused timed yield. Set only while paused.
    paused_remaining: Option<Duration>,
}

impl Interpreter {
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub(crate) fn from_parts(functions: FunctionTable, max_call_depth: usize) -> Self {
        Interpreter {
            functions,
            frames: Vec::new(),
            max_call_depth,
            call_depth: 0,
            pending_break: None,
            yielding: false,
            failed: false,
            deadline: None,
            paused_remaining: None,
        }
    }

    /// Make a function callable, replacing one with the same name.
    pub fn load(&mut self, function: Arc<Function>) {
        self.functions.insert(function.name.clone(), function);
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Start `name` with `args` and execute until it returns, yields or
    /// fails.
    #[tracing::instrument(level = "debug", skip(self, host, out, args))]
    pub fn run(
        &mut self,
        host: &mut dyn Host,
        out: &mut dyn OutSink,
        name: &str,
        args: Vec<Value>,
    ) -> ScriptResult<ReturnValue> {
        if self.failed {
            return Err(errors::not_resumable("cannot run a failed interpreter"));
        }
        if !self.frames.is_empty() {
            return Err(errors::not_resumable("interpreter is already running a function"));
        }
        let result = self.start(name, args).and_then(|()| self.execute(host, out));
        self.settle(result)
    }

    /// Continue a yielding instance.
    ///
    /// A timed yield that is paused or whose deadline has not passed
    /// reports `Yield` again without executing anything.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn resume(
        &mut self,
        host: &mut dyn Host,
        out: &mut dyn OutSink,
    ) -> ScriptResult<ReturnValue> {
        if self.failed {
            return Err(errors::not_resumable("cannot resume a failed interpreter"));
        }
        if !self.yielding {
            return Err(errors::not_resumable("interpreter is not yielding"));
        }
        if self.paused_remaining.is_some() {
            return Ok(ReturnValue::Yield);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() < deadline {
                return Ok(ReturnValue::Yield);
            }
        }
        self.yielding = false;
        self.deadline = None;
        let result = self.execute(host, out);
        self.settle(result)
    }

    #[inline]
    pub fn is_yielding(&self) -> bool {
        self.yielding
    }

    /// Yielding with a duration, paused or not.
    #[inline]
    pub fn is_timed_yield(&self) -> bool {
        self.yielding && (self.deadline.is_some() || self.paused_remaining.is_some())
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused_remaining.is_some()
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// No frames left: never started, returned, exited or failed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.frames.is_empty()
    }

    /// Active user-function calls.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Milliseconds until a timed yield may resume; `None` unless the
    /// instance is in a timed yield.
    pub fn yield_ms_left(&self) -> Option<u64> {
        let remaining = match (self.paused_remaining, self.deadline) {
            (Some(remaining), _) => remaining,
            (None, Some(deadline)) => deadline.saturating_duration_since(Instant::now()),
            (None, None) => return None,
        };
        Some(u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX))
    }

    /// Freeze a timed yield's remaining time. No effect otherwise.
    pub fn pause(&mut self) {
        if let Some(deadline) = self.deadline.take() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            debug!(remaining_ms = remaining.as_millis(), "pause");
            self.paused_remaining = Some(remaining);
        }
    }

    /// Re-arm a paused timed yield as `now + remaining`.
    pub fn unpause(&mut self) {
        if let Some(remaining) = self.paused_remaining {
            if let Some(deadline) = Instant::now().checked_add(remaining) {
                debug!(remaining_ms = remaining.as_millis(), "unpause");
                self.deadline = Some(deadline);
                self.paused_remaining = None;
            }
        }
    }

    fn start(&mut self, name: &str, args: Vec<Value>) -> ScriptResult<()> {
        let function = self
            .functions
            .get(name)
            .cloned()
            .ok_or_else(|| errors::undefined_function(name))?;
        let symbols = prepare_symbol_table(&function, args)?;
        self.push_call(function, symbols)
    }

    /// Mark the instance failed on error, attaching a backtrace of the
    /// functions that were active.
    fn settle(&mut self, result: ScriptResult<ReturnValue>) -> ScriptResult<ReturnValue> {
        let err = match result {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        let backtrace = self.capture_backtrace();
        self.frames.clear();
        self.call_depth = 0;
        self.pending_break = None;
        self.yielding = false;
        self.deadline = None;
        self.paused_remaining = None;
        self.failed = true;
        debug!(error = %err, "interpreter failed");
        if backtrace.is_empty() {
            Err(err)
        } else {
            Err(err.with_backtrace(backtrace))
        }
    }

    /// One entry per active function, innermost first.
    fn capture_backtrace(&self) -> Backtrace {
        let mut frames = Vec::with_capacity(self.call_depth);
        let mut starts_function = true;
        for frame in self.frames.iter().rev() {
            if starts_function {
                frames.push(BacktraceFrame {
                    function: frame.function.name.clone(),
                    line: frame.current_line(),
                });
            }
            starts_function = frame.is_entry();
        }
        Backtrace::new(frames)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check call arguments against `function`'s parameters and build the
/// callee's initial symbol table.
///
/// Counts must match exactly. Each argument must carry the declared tag
/// unless the parameter is `any`.
pub fn prepare_symbol_table(
    function: &Function,
    arguments: Vec<Value>,
) -> ScriptResult<SymbolTable> {
    if arguments.len() != function.params.len() {
        return Err(errors::arity_mismatch(
            &function.name,
            function.params.len(),
            arguments.len(),
        ));
    }
    let mut table = SymbolTable::default();
    table.reserve(arguments.len());
    for (param, value) in function.params.iter().zip(arguments) {
        if value.is_symbol() || !param.ty.accepts(&value) {
            return Err(errors::argument_type_mismatch(&function.name, param, value.kind()));
        }
        table.insert(param.name.clone(), value);
    }
    Ok(table)
}

#[cfg(test)]
mod tests;
