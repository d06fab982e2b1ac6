use ascript_ir::Value;

/// Outcome of a `run` or `resume` call that did not fail.
#[derive(Clone, Debug, PartialEq)]
pub enum ReturnValue {
    /// The function returned a value.
    Value(Value),
    /// The function finished without a value, or the program ran `exit`.
    Nothing,
    /// Execution suspended; the instance can be resumed.
    Yield,
}

impl ReturnValue {
    #[inline]
    pub fn is_yield(&self) -> bool {
        matches!(self, ReturnValue::Yield)
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            ReturnValue::Value(value) => Some(value),
            ReturnValue::Nothing | ReturnValue::Yield => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            ReturnValue::Value(value) => Some(value),
            ReturnValue::Nothing | ReturnValue::Yield => None,
        }
    }
}

impl From<Option<Value>> for ReturnValue {
    fn from(value: Option<Value>) -> Self {
        value.map_or(ReturnValue::Nothing, ReturnValue::Value)
    }
}
