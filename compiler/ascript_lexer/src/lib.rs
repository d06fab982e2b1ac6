//! Lexer for ascript.
//!
//! Turns source text into a flat `Vec<Token>`. Each token carries the line
//! it started on; literal payloads are already decoded.
//!
//! Lexical rules:
//! - whitespace separates words, and `;` `,` `[` `]` are always tokens of
//!   their own
//! - `#` starts a comment that runs to the end of the line
//! - `"..."` is a text literal with no escapes, and it may not span lines
//! - `true`/`false` are booleans, `-?digits` an integer and `-?digits.digits`
//!   a decimal
//! - everything else must be a keyword or an identifier (`[A-Za-z_][A-Za-z0-9_]*`)

mod cursor;
mod keywords;

use std::path::Path;

use ascript_diagnostic::{errors, ScriptResult};
use ascript_ir::{Token, TokenKind};
use tracing::debug;

use cursor::Cursor;

/// Bytes that may appear inside a word. Classification happens afterwards.
#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-')
}

/// Lex a complete source text.
///
/// Stops at the first error; there is no recovery.
pub fn tokenize(source: &str) -> ScriptResult<Vec<Token>> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    while let Some(b) = cursor.current() {
        let line = cursor.line();
        match b {
            b' ' | b'\t' | b'\r' | b'\n' => cursor.advance(),
            b'#' => cursor.skip_comment(),
            b';' => {
                cursor.advance();
                tokens.push(Token::new(TokenKind::Semicolon, line));
            }
            b',' => {
                cursor.advance();
                tokens.push(Token::new(TokenKind::Comma, line));
            }
            b'[' => {
                cursor.advance();
                tokens.push(Token::new(TokenKind::OpenBracket, line));
            }
            b']' => {
                cursor.advance();
                tokens.push(Token::new(TokenKind::CloseBracket, line));
            }
            b'"' => {
                cursor.advance();
                let body = cursor
                    .eat_string_body()
                    .ok_or_else(|| errors::unterminated_string(line))?;
                tokens.push(Token::new(TokenKind::Text(body.to_string()), line));
            }
            b if is_word_byte(b) => {
                let word = cursor.eat_while(is_word_byte);
                tokens.push(Token::new(classify_word(word, line)?, line));
            }
            _ => {
                let ch = cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(errors::invalid_character(ch, line));
            }
        }
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Read and lex a source file.
pub fn tokenize_file(path: impl AsRef<Path>) -> ScriptResult<Vec<Token>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .map_err(|e| errors::unreadable_source(&path.display().to_string(), &e.to_string()))?;
    tokenize(&source)
}

/// Decide what a run of word bytes is.
fn classify_word(word: &str, line: u32) -> ScriptResult<TokenKind> {
    if let Some(kind) = keywords::lookup(word) {
        return Ok(kind);
    }

    let bytes = word.as_bytes();
    let starts_numeric = match bytes {
        [b'-', second, ..] => second.is_ascii_digit(),
        [first, ..] => first.is_ascii_digit(),
        [] => false,
    };
    if starts_numeric {
        return classify_number(word, line);
    }

    if let Some(bad) = word
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(errors::invalid_character(bad, line));
    }
    Ok(TokenKind::Ident(word.to_string()))
}

fn classify_number(word: &str, line: u32) -> ScriptResult<TokenKind> {
    let digits = word.strip_prefix('-').unwrap_or(word);
    let mut parts = digits.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let well_formed = parts.next().is_none()
        && all_digits(whole)
        && match fraction {
            Some(f) => all_digits(f),
            None => true,
        };
    if !well_formed {
        return Err(errors::invalid_number(word, line));
    }

    if fraction.is_some() {
        word.parse::<f64>()
            .map(TokenKind::Decimal)
            .map_err(|_| errors::invalid_number(word, line))
    } else {
        word.parse::<i64>()
            .map(TokenKind::Integer)
            .map_err(|_| errors::invalid_number(word, line))
    }
}

#[cfg(test)]
mod tests;
