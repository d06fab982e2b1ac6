//! Host capability interface.
//!
//! A running script reaches the embedding application only through the
//! `host_*` built-ins. Each maps onto one method of [`Host`]. Failures are
//! reported as [`HostError`] and surface as host-category script errors
//! carrying the line of the instruction that made the request.

use std::fmt;

use ascript_diagnostic::{errors, ScriptError};
use ascript_ir::Value;
use rustc_hash::FxHashMap;

/// Failure reported by a host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostError {
    message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        HostError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HostError {}

impl From<HostError> for ScriptError {
    fn from(err: HostError) -> Self {
        errors::host_error(err.message)
    }
}

/// Capabilities an embedding application exposes to scripts.
///
/// The interpreter borrows a host for the duration of one `run` or
/// `resume` call and never stores it.
pub trait Host {
    /// `host_has[name]`
    fn has(&self, name: &str) -> bool;

    /// `host_get[name]`. Fails when `name` is not defined.
    fn get(&self, name: &str) -> Result<Value, HostError>;

    /// `host_add[name, value]`. Fails when `name` is already defined.
    fn add(&mut self, name: &str, value: Value) -> Result<(), HostError>;

    /// `host_set[name, value]`. Fails when `name` is not defined.
    fn set(&mut self, name: &str, value: Value) -> Result<(), HostError>;

    /// `host_delete[name]`. Fails when `name` is not defined.
    fn delete(&mut self, name: &str) -> Result<(), HostError>;

    /// `host_query[...]`, an application-defined computation.
    fn query(&self, args: &[Value]) -> Result<Value, HostError>;

    /// `host_do[...]`, an application-defined effect.
    fn run_do(&mut self, args: &[Value]) -> Result<(), HostError>;
}

/// Map-backed host.
///
/// Implements the symbol contract of [`Host`] over an `FxHashMap`.
/// `host_do` requests are recorded in order and can be inspected with
/// [`MapHost::actions`]; `host_query` has no meaning for a plain map and
/// always fails.
#[derive(Clone, Debug, Default)]
pub struct MapHost {
    symbols: FxHashMap<String, Value>,
    actions: Vec<Vec<Value>>,
}

impl MapHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `name` up front, replacing any existing value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.symbols.insert(name.into(), value.into());
        self
    }

    pub fn symbol(&self, name: &str) -> Option<&Value> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Argument lists of every `host_do` received so far.
    pub fn actions(&self) -> &[Vec<Value>] {
        &self.actions
    }
}

#[cold]
fn symbol_error(name: &str, operation: &str, problem: &str) -> HostError {
    HostError::new(format!("{name} -> {operation} -> {problem}"))
}

impl Host for MapHost {
    fn has(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    fn get(&self, name: &str) -> Result<Value, HostError> {
        self.symbols
            .get(name)
            .cloned()
            .ok_or_else(|| symbol_error(name, "host_get", "symbol not defined"))
    }

    fn add(&mut self, name: &str, value: Value) -> Result<(), HostError> {
        if self.symbols.contains_key(name) {
            return Err(symbol_error(name, "host_add", "already defined"));
        }
        self.symbols.insert(name.to_owned(), value);
        Ok(())
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), HostError> {
        match self.symbols.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(symbol_error(name, "host_set", "symbol not defined")),
        }
    }

    fn delete(&mut self, name: &str) -> Result<(), HostError> {
        self.symbols
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| symbol_error(name, "host_delete", "symbol not defined"))
    }

    fn query(&self, _args: &[Value]) -> Result<Value, HostError> {
        Err(HostError::new("host_query is not supported by this host"))
    }

    fn run_do(&mut self, args: &[Value]) -> Result<(), HostError> {
        self.actions.push(args.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests;
