//! Byte cursor over source text.
//!
//! Tracks the current line. Comment and string bodies are skipped with
//! `memchr` instead of byte-at-a-time loops.

/// Position within the source, plus the current 1-based line.
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Cursor {
            src,
            pos: 0,
            line: 1,
        }
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Current byte, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Full character at the cursor, for error reporting on non-ASCII input.
    pub(crate) fn current_char(&self) -> Option<char> {
        self.src.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Advance one byte, counting newlines.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.current() == Some(b'\n') {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Consume bytes while `pred` holds and return them.
    ///
    /// `pred` must only accept ASCII bytes so the slice ends on a char boundary.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.advance();
        }
        &self.src[start..self.pos]
    }

    /// Skip a `#` comment, leaving the cursor on the terminating newline.
    pub(crate) fn skip_comment(&mut self) {
        let rest = &self.src.as_bytes()[self.pos..];
        match memchr::memchr(b'\n', rest) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Consume a string body after its opening quote, including the closing
    /// quote, and return the body.
    ///
    /// Returns `None` if a newline or end of input comes first; the cursor is
    /// left where the body started.
    pub(crate) fn eat_string_body(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let rest = &self.src.as_bytes()[start..];
        match memchr::memchr2(b'"', b'\n', rest) {
            Some(offset) if rest[offset] == b'"' => {
                self.pos = start + offset + 1;
                Some(&self.src[start..start + offset])
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
