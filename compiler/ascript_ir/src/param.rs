//! Function parameters and their declared types.

use std::fmt;

use crate::value::{Value, ValueKind};

/// Declared type of a function parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamType {
    Integer,
    Decimal,
    Boolean,
    Text,
    /// Accepts any runtime value.
    Any,
}

impl ParamType {
    /// Whether `value` satisfies this declared type.
    ///
    /// Tags must match exactly; there is no numeric widening.
    #[inline]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            ParamType::Any => true,
            ParamType::Integer => value.kind() == ValueKind::Integer,
            ParamType::Decimal => value.kind() == ValueKind::Decimal,
            ParamType::Boolean => value.kind() == ValueKind::Boolean,
            ParamType::Text => value.kind() == ValueKind::Text,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ParamType::Integer => "integer",
            ParamType::Decimal => "decimal",
            ParamType::Boolean => "boolean",
            ParamType::Text => "text",
            ParamType::Any => "any",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named, typed function parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: ParamType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: ParamType) -> Self {
        Parameter {
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} type", self.name, self.ty)
    }
}
