use std::sync::Arc;

use ascript_ir::{Block, BlockId, Function};

use crate::context::RunContext;

/// One open block of one active function.
///
/// A function's execution spans its entry frame (block 0) plus a frame for
/// every `if` clause and loop body currently open inside it.
#[derive(Debug)]
pub(super) struct Frame {
    pub function: Arc<Function>,
    pub block: BlockId,
    /// Index of the next instruction to execute.
    pub next: usize,
    pub ctx: RunContext,
}

impl Frame {
    pub fn new(function: Arc<Function>, block: BlockId, ctx: RunContext) -> Self {
        Frame {
            function,
            block,
            next: 0,
            ctx,
        }
    }

    /// Entry frames are call boundaries: nothing merges across them.
    #[inline]
    pub fn is_entry(&self) -> bool {
        self.block.is_entry()
    }

    pub fn current_block(&self) -> Option<&Block> {
        self.function.block(self.block)
    }

    /// Line of the instruction executed last in this frame.
    pub fn current_line(&self) -> Option<u32> {
        let block = self.current_block()?;
        let index = self.next.checked_sub(1)?;
        block.instructions.get(index).map(|i| i.line)
    }
}
