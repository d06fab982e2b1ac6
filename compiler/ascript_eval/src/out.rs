//! Output sinks for the `out` procedure.
//!
//! `out[a, b, c];` emits each solved argument in plain form, then flushes
//! once. What a flush means is up to the sink.

use std::io::{self, Write};
use std::sync::Arc;

use ascript_ir::Value;
use parking_lot::Mutex;
use tracing::warn;

/// Destination of `out` instructions.
///
/// Sinks cannot fail a script. One that hits an I/O error reports it
/// through `tracing` and carries on.
pub trait OutSink {
    fn emit(&mut self, value: &Value);

    /// Ends one `out` instruction.
    fn flush(&mut self);
}

/// Writes to stdout. Each `out` instruction becomes one line.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl OutSink for StdoutSink {
    fn emit(&mut self, value: &Value) {
        report(write_plain(&mut io::stdout().lock(), value));
    }

    fn flush(&mut self) {
        report(end_line(&mut io::stdout().lock()));
    }
}

fn write_plain(writer: &mut impl Write, value: &Value) -> io::Result<()> {
    write!(writer, "{}", value.plain())
}

/// Terminate the line and push it out.
fn end_line(writer: &mut impl Write) -> io::Result<()> {
    writer.write_all(b"\n")?;
    writer.flush()
}

fn report(result: io::Result<()>) {
    if let Err(err) = result {
        warn!(error = %err, "stdout write failed");
    }
}

/// Captures output in memory.
///
/// Clones share one buffer, so a test can keep a handle while the
/// interpreter writes through another.
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl OutSink for BufferSink {
    fn emit(&mut self, value: &Value) {
        use std::fmt::Write as _;
        // Writing to a String cannot fail.
        let _ = write!(self.buffer.lock(), "{}", value.plain());
    }

    fn flush(&mut self) {
        self.buffer.lock().push('\n');
    }
}
