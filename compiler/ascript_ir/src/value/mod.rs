//! Runtime values.
//!
//! A `Value` is the tagged datum shared by literals, call arguments and the
//! interpreter's registers. Four scalar kinds exist at runtime; `Symbol` is
//! the fifth kind and only lives inside the unevaluated program, naming a
//! variable that is resolved when the instruction runs.

use std::fmt;

/// A tagged runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    Text(String),
    /// Reference to a variable by name. Never stored in a live symbol table.
    Symbol(String),
}

/// The tag of a [`Value`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Integer,
    Decimal,
    Text,
    Symbol,
}

impl ValueKind {
    /// Human-readable name used in diagnostics and in format-out.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Decimal => "decimal",
            ValueKind::Text => "text",
            ValueKind::Symbol => "symbol",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure of a value-level operation (comparison or arithmetic).
///
/// Carries no source line; the interpreter attaches one when it converts
/// this into a script error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// Operands have different tags.
    TypeMismatch {
        op: &'static str,
        left: ValueKind,
        right: ValueKind,
    },
    /// Operation is only defined for integers and decimals.
    NotNumeric { op: &'static str, kind: ValueKind },
    /// Operation is only defined for text.
    NotText { op: &'static str, kind: ValueKind },
    /// Integer result does not fit in 64 bits.
    Overflow { op: &'static str },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::TypeMismatch { op, left, right } => {
                write!(f, "{op} type mismatch: {left} and {right}")
            }
            ValueError::NotNumeric { op, kind } => {
                write!(f, "{op} is only applicable to numeric types, got {kind}")
            }
            ValueError::NotText { op, kind } => {
                write!(f, "{op} is only applicable to text, got {kind}")
            }
            ValueError::Overflow { op } => write!(f, "integer overflow in {op}"),
        }
    }
}

impl std::error::Error for ValueError {}

impl Value {
    /// Build a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Build a symbolic reference to a variable.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// The tag of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Text(_) => ValueKind::Text,
            Value::Symbol(_) => ValueKind::Symbol,
        }
    }

    #[inline]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Text payload of a `Text` value.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// `self < other`, defined for two integers or two decimals.
    pub fn less_than(&self, other: &Value) -> Result<bool, ValueError> {
        const OP: &str = "lesser than";
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Ok(a < b),
            (Value::Decimal(a), Value::Decimal(b)) => Ok(a < b),
            _ => Err(numeric_mismatch(OP, self, other)),
        }
    }

    /// `self > other`, defined for two integers or two decimals.
    pub fn greater_than(&self, other: &Value) -> Result<bool, ValueError> {
        const OP: &str = "greater than";
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Ok(a > b),
            (Value::Decimal(a), Value::Decimal(b)) => Ok(a > b),
            _ => Err(numeric_mismatch(OP, self, other)),
        }
    }

    /// `self + other`. Integer addition is checked.
    pub fn checked_add(&self, other: &Value) -> Result<Value, ValueError> {
        const OP: &str = "addition";
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a
                .checked_add(*b)
                .map(Value::Integer)
                .ok_or(ValueError::Overflow { op: OP }),
            (Value::Decimal(a), Value::Decimal(b)) => Ok(Value::Decimal(a + b)),
            _ => Err(numeric_mismatch(OP, self, other)),
        }
    }

    /// `self - other`. Integer subtraction is checked.
    pub fn checked_sub(&self, other: &Value) -> Result<Value, ValueError> {
        const OP: &str = "substraction";
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a
                .checked_sub(*b)
                .map(Value::Integer)
                .ok_or(ValueError::Overflow { op: OP }),
            (Value::Decimal(a), Value::Decimal(b)) => Ok(Value::Decimal(a - b)),
            _ => Err(numeric_mismatch(OP, self, other)),
        }
    }

    /// Text concatenation.
    pub fn concat(&self, other: &Value) -> Result<Value, ValueError> {
        const OP: &str = "concatenation";
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::Text(joined))
            }
            (Value::Text(_), _) | (_, Value::Text(_)) => Err(ValueError::TypeMismatch {
                op: OP,
                left: self.kind(),
                right: other.kind(),
            }),
            _ => Err(ValueError::NotText {
                op: OP,
                kind: self.kind(),
            }),
        }
    }

    /// Untagged rendering used by the `out` instruction.
    pub fn plain(&self) -> Plain<'_> {
        Plain(self)
    }
}

fn numeric_mismatch(op: &'static str, left: &Value, right: &Value) -> ValueError {
    if left.kind() == right.kind() {
        ValueError::NotNumeric {
            op,
            kind: left.kind(),
        }
    } else {
        ValueError::TypeMismatch {
            op,
            left: left.kind(),
            right: right.kind(),
        }
    }
}

/// Tagged rendering (`integer:3`), used by program format-out.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.plain())
    }
}

/// Untagged display adapter returned by [`Value::plain`].
pub struct Plain<'a>(&'a Value);

impl fmt::Display for Plain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Text(s) | Value::Symbol(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
