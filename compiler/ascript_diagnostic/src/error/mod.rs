//! The `ScriptError` type and its backtrace.

use std::fmt;

use crate::ErrorCode;

/// Result of any fallible ascript operation.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// The four error categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed source. Nothing from the failed source is loaded.
    Parse,
    /// A well-formed program misused at runtime.
    Interpreter,
    /// The program called `fail`.
    User,
    /// The host rejected a request.
    Host,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse error",
            ErrorKind::Interpreter => "interpreter error",
            ErrorKind::User => "user error",
            ErrorKind::Host => "host error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One active function at the moment an error was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Function name.
    pub function: String,
    /// Line of the instruction the function was executing.
    pub line: Option<u32>,
}

/// Snapshot of the interpreter's active functions, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Backtrace {
    frames: Vec<BacktraceFrame>,
}

impl Backtrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for Backtrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            write!(f, "  {i}: {}", frame.function)?;
            if let Some(line) = frame.line {
                write!(f, " at line {line}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// An error raised while loading or running a script.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptError {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    /// Human-readable message, without code or line.
    pub message: String,
    /// Source line the error originated from.
    pub line: Option<u32>,
    /// Active functions when a runtime error was raised.
    ///
    /// Filled in by the interpreter as the error leaves it.
    pub backtrace: Option<Backtrace>,
}

impl ScriptError {
    pub fn new(kind: ErrorKind, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            line: None,
            backtrace: None,
        }
    }

    /// Attach a source line.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a line only if none is set yet.
    #[must_use]
    pub fn or_line(mut self, line: u32) -> Self {
        if self.line.is_none() {
            self.line = Some(line);
        }
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: Backtrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    #[inline]
    pub fn is_parse(&self) -> bool {
        self.kind == ErrorKind::Parse
    }

    #[inline]
    pub fn is_interpreter(&self) -> bool {
        self.kind == ErrorKind::Interpreter
    }

    #[inline]
    pub fn is_user(&self) -> bool {
        self.kind == ErrorKind::User
    }

    #[inline]
    pub fn is_host(&self) -> bool {
        self.kind == ErrorKind::Host
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(line) = self.line {
            write!(f, " on line {line}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ScriptError {}

#[cfg(test)]
mod tests;
