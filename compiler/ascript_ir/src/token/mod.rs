//! Tokens produced by the lexer.
//!
//! Literal payloads live inside the kind, so a token is just a kind plus the
//! source line it came from.

use std::fmt;

/// A lexed token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based source line.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Token { kind, line }
    }
}

/// Token kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals and names
    Ident(String),
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),

    // Value functions
    IsEqual,
    IsGreaterThan,
    IsLesserThan,
    Add,
    Substract,
    Concatenate,
    IsInt,
    IsBool,
    IsDouble,
    IsString,
    HostHas,
    HostGet,
    HostQuery,

    // Procedures
    HostDelete,
    HostSet,
    HostAdd,
    HostDo,
    Out,
    Fail,

    // Keywords
    Not,
    If,
    ElseIf,
    Else,
    EndIf,
    Loop,
    Break,
    EndLoop,
    Yield,
    For,
    Return,
    Exit,
    Let,
    Be,
    Set,
    To,
    IntType,
    StringType,
    BoolType,
    DoubleType,
    AnyType,
    As,
    BeginFunction,
    EndFunction,

    // Punctuation
    Semicolon,
    Comma,
    OpenBracket,
    CloseBracket,
}

impl TokenKind {
    /// Name used in parse errors and token dumps.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Text(_) => "string value",
            TokenKind::Integer(_) => "integer value",
            TokenKind::Decimal(_) => "double value",
            TokenKind::Boolean(_) => "boolean value",
            TokenKind::IsEqual => "is_equal",
            TokenKind::IsGreaterThan => "is_greater_than",
            TokenKind::IsLesserThan => "is_lesser_than",
            TokenKind::Add => "add",
            TokenKind::Substract => "substract",
            TokenKind::Concatenate => "concatenate",
            TokenKind::IsInt => "is_int",
            TokenKind::IsBool => "is_bool",
            TokenKind::IsDouble => "is_double",
            TokenKind::IsString => "is_string",
            TokenKind::HostHas => "host_has",
            TokenKind::HostGet => "host_get",
            TokenKind::HostQuery => "host_query",
            TokenKind::HostDelete => "host_delete",
            TokenKind::HostSet => "host_set",
            TokenKind::HostAdd => "host_add",
            TokenKind::HostDo => "host_do",
            TokenKind::Out => "out",
            TokenKind::Fail => "fail",
            TokenKind::Not => "not",
            TokenKind::If => "if",
            TokenKind::ElseIf => "elseif",
            TokenKind::Else => "else",
            TokenKind::EndIf => "endif",
            TokenKind::Loop => "loop",
            TokenKind::Break => "break",
            TokenKind::EndLoop => "endloop",
            TokenKind::Yield => "yield",
            TokenKind::For => "for",
            TokenKind::Return => "return",
            TokenKind::Exit => "exit",
            TokenKind::Let => "let",
            TokenKind::Be => "be",
            TokenKind::Set => "set",
            TokenKind::To => "to",
            TokenKind::IntType => "int",
            TokenKind::StringType => "string",
            TokenKind::BoolType => "bool",
            TokenKind::DoubleType => "double",
            TokenKind::AnyType => "any",
            TokenKind::As => "as",
            TokenKind::BeginFunction => "beginfunction",
            TokenKind::EndFunction => "endfunction",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
        }
    }

    /// Literal tokens: text, integer, decimal, boolean.
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Text(_)
                | TokenKind::Integer(_)
                | TokenKind::Decimal(_)
                | TokenKind::Boolean(_)
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.display_name())?;
        match &self.kind {
            TokenKind::Ident(name) => write!(f, " \"{name}\"")?,
            TokenKind::Text(s) => write!(f, " (\"{s}\")")?,
            TokenKind::Integer(n) => write!(f, " ({n})")?,
            TokenKind::Decimal(d) => write!(f, " ({d})")?,
            TokenKind::Boolean(b) => write!(f, " ({b})")?,
            _ => {}
        }
        write!(f, " on line {}", self.line)
    }
}

#[cfg(test)]
mod tests;
