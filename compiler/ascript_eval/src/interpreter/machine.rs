//! The execution loop and signal handling.

use std::mem;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ascript_diagnostic::{errors, ScriptResult};
use ascript_ir::{BlockId, BlockKind, Function, Value};
use tracing::{debug, trace};

use super::frame::Frame;
use super::{prepare_symbol_table, Interpreter};
use crate::context::{RunContext, Signal, SymbolTable};
use crate::exec;
use crate::host::Host;
use crate::out::OutSink;
use crate::return_value::ReturnValue;

impl Interpreter {
    /// Run until the outermost function finishes, the program yields or
    /// exits, or an error occurs. Frames are left in place on error.
    pub(super) fn execute(
        &mut self,
        host: &mut dyn Host,
        out: &mut dyn OutSink,
    ) -> ScriptResult<ReturnValue> {
        loop {
            let Some(frame) = self.frames.last_mut() else {
                return Ok(ReturnValue::Nothing);
            };
            let function = Arc::clone(&frame.function);
            let Some(block) = function.block(frame.block) else {
                return Err(errors::missing_block(&function.name, frame.block.index()));
            };

            if let Some(line) = self.pending_break {
                if block.kind == BlockKind::Loop {
                    self.pending_break = None;
                    if let Some(value) = self.leave_block() {
                        return Ok(value);
                    }
                } else if frame.is_entry() {
                    return Err(errors::break_outside_loop().with_line(line));
                } else {
                    self.pop_frame();
                }
                continue;
            }

            let Some(instruction) = block.instructions.get(frame.next) else {
                let finished = match block.kind {
                    BlockKind::Loop => {
                        self.restart_loop();
                        None
                    }
                    BlockKind::Linear => self.leave_block(),
                };
                if let Some(value) = finished {
                    return Ok(value);
                }
                continue;
            };

            frame.next += 1;
            frame.ctx.reset();
            trace!(
                function = %function.name,
                block = frame.block.raw(),
                line = instruction.line,
                "execute"
            );
            exec::execute(instruction, &mut frame.ctx, host, out)?;
            let signal = mem::take(&mut frame.ctx.signal);
            let arguments = mem::take(&mut frame.ctx.arguments);

            if let Some(value) = self.apply(signal, arguments, &function, instruction.line)? {
                return Ok(value);
            }
        }
    }

    /// Act on the signal left by the instruction at `line`. Returns the
    /// outcome when control leaves the interpreter.
    fn apply(
        &mut self,
        signal: Signal,
        arguments: Vec<Value>,
        function: &Arc<Function>,
        line: u32,
    ) -> ScriptResult<Option<ReturnValue>> {
        match signal {
            Signal::None => {}
            Signal::Fail(message) => return Err(errors::user_fail(message).with_line(line)),
            Signal::Break => self.pending_break = Some(line),
            Signal::Return => return Ok(self.finish_function(None)),
            Signal::ReturnWithValue(value) => return Ok(self.finish_function(Some(value))),
            Signal::Yield(millis) => {
                self.suspend(millis).map_err(|e| e.with_line(line))?;
                return Ok(Some(ReturnValue::Yield));
            }
            Signal::Call(name) => self.call(&name, arguments).map_err(|e| e.with_line(line))?,
            Signal::Jump(target) => self.jump(function, target).map_err(|e| e.with_line(line))?,
            Signal::Exit => {
                debug!(depth = self.call_depth, "exit");
                self.frames.clear();
                self.call_depth = 0;
                return Ok(Some(ReturnValue::Nothing));
            }
        }
        Ok(None)
    }

    fn call(&mut self, name: &str, arguments: Vec<Value>) -> ScriptResult<()> {
        let callee = self
            .functions
            .get(name)
            .cloned()
            .ok_or_else(|| errors::undefined_function(name))?;
        let symbols = prepare_symbol_table(&callee, arguments)?;
        self.push_call(callee, symbols)
    }

    /// Push the entry frame of a function, enforcing the call-depth limit.
    pub(super) fn push_call(
        &mut self,
        function: Arc<Function>,
        symbols: SymbolTable,
    ) -> ScriptResult<()> {
        if self.call_depth >= self.max_call_depth {
            return Err(errors::call_depth_exceeded(self.max_call_depth));
        }
        self.call_depth += 1;
        debug!(function = %function.name, depth = self.call_depth, "call");
        self.frames.push(Frame::new(
            function,
            BlockId::ENTRY,
            RunContext::with_symbols(symbols),
        ));
        Ok(())
    }

    fn jump(&mut self, function: &Arc<Function>, target: BlockId) -> ScriptResult<()> {
        if function.block(target).is_none() {
            return Err(errors::missing_block(&function.name, target.index()));
        }
        let symbols = self.inherited_symbols();
        debug!(block = target.raw(), "push frame");
        self.frames.push(Frame::new(
            Arc::clone(function),
            target,
            RunContext::with_symbols(symbols),
        ));
        Ok(())
    }

    fn inherited_symbols(&self) -> SymbolTable {
        self.frames
            .last()
            .map(|parent| parent.ctx.symbols.clone())
            .unwrap_or_default()
    }

    /// Pop the top frame. A non-entry frame merges its scope into its
    /// parent first.
    fn pop_frame(&mut self) -> Option<Frame> {
        let mut frame = self.frames.pop()?;
        if frame.is_entry() {
            self.call_depth = self.call_depth.saturating_sub(1);
        } else if let Some(parent) = self.frames.last_mut() {
            parent.ctx.merge_from(mem::take(&mut frame.ctx.symbols));
        }
        debug!(block = frame.block.raw(), "pop frame");
        Some(frame)
    }

    /// End the top frame normally. Leaving an entry frame finishes its
    /// function without a value.
    fn leave_block(&mut self) -> Option<ReturnValue> {
        match self.frames.last() {
            Some(frame) if frame.is_entry() => self.finish_function(None),
            Some(_) => {
                self.pop_frame();
                None
            }
            None => Some(ReturnValue::Nothing),
        }
    }

    /// Start the next iteration of the loop on top with a fresh scope.
    fn restart_loop(&mut self) {
        let Some(top) = self.frames.last_mut() else {
            return;
        };
        if top.is_entry() {
            top.next = 0;
            return;
        }
        if let Some(frame) = self.pop_frame() {
            let symbols = self.inherited_symbols();
            self.frames.push(Frame::new(
                frame.function,
                frame.block,
                RunContext::with_symbols(symbols),
            ));
        }
    }

    /// Unwind the current function. With a caller left, the value lands in
    /// its return register; otherwise it is the outcome of the run.
    fn finish_function(&mut self, value: Option<Value>) -> Option<ReturnValue> {
        while let Some(frame) = self.frames.pop() {
            if frame.is_entry() {
                self.call_depth = self.call_depth.saturating_sub(1);
                debug!(function = %frame.function.name, "return");
                break;
            }
        }
        match self.frames.last_mut() {
            Some(caller) => {
                caller.ctx.return_value = value;
                None
            }
            None => Some(ReturnValue::from(value)),
        }
    }

    fn suspend(&mut self, millis: Option<u64>) -> ScriptResult<()> {
        self.deadline = match millis {
            None => None,
            Some(ms) => Some(
                Instant::now()
                    .checked_add(Duration::from_millis(ms))
                    .ok_or_else(|| {
                        errors::invalid_yield_duration(&format!("{ms} ms is out of range"))
                    })?,
            ),
        };
        self.paused_remaining = None;
        self.yielding = true;
        debug!(millis, "yield");
        Ok(())
    }
}
