//! Argument solving and built-in value functions.

use ascript_diagnostic::{errors, ScriptResult};
use ascript_ir::{FunctionExpr, FunctionOp, Value, ValueError, ValueKind};

use crate::context::{RunContext, SymbolTable};
use crate::host::Host;

/// Resolve a symbol to the current value of the variable it names.
/// Any other value is already solved.
pub fn solve_one(arg: &Value, symbols: &SymbolTable) -> ScriptResult<Value> {
    match arg {
        Value::Symbol(name) => symbols
            .get(name)
            .cloned()
            .ok_or_else(|| errors::undefined_variable(name)),
        other => Ok(other.clone()),
    }
}

pub fn solve(args: &[Value], symbols: &SymbolTable) -> ScriptResult<Vec<Value>> {
    args.iter().map(|arg| solve_one(arg, symbols)).collect()
}

/// Compute a value function.
pub fn evaluate(expr: &FunctionExpr, ctx: &RunContext, host: &dyn Host) -> ScriptResult<Value> {
    let op = expr.op;
    let symbols = &ctx.symbols;
    match op {
        FunctionOp::Constant => solve_one(single(op, &expr.args)?, symbols),
        FunctionOp::ReadReturn => ctx
            .return_value
            .clone()
            .ok_or_else(errors::empty_return_register),
        FunctionOp::IsEqual => {
            let args = solve(&expr.args, symbols)?;
            let (first, rest) = split_first(op, &args)?;
            Ok(Value::Boolean(rest.iter().all(|other| other == first)))
        }
        FunctionOp::IsGreaterThan => {
            let args = solve(&expr.args, symbols)?;
            let (first, rest) = split_first(op, &args)?;
            compare_all(first, rest, Value::greater_than)
        }
        FunctionOp::IsLesserThan => {
            let args = solve(&expr.args, symbols)?;
            let (first, rest) = split_first(op, &args)?;
            compare_all(first, rest, Value::less_than)
        }
        FunctionOp::Add => {
            let args = solve(&expr.args, symbols)?;
            let (first, rest) = split_first(op, &args)?;
            fold(first, rest, Value::checked_add)
        }
        FunctionOp::Substract => {
            let args = solve(&expr.args, symbols)?;
            let (first, rest) = split_first(op, &args)?;
            fold(first, rest, Value::checked_sub)
        }
        FunctionOp::Concatenate => {
            let args = solve(&expr.args, symbols)?;
            let (first, rest) = split_first(op, &args)?;
            fold(first, rest, Value::concat)
        }
        FunctionOp::IsInt => all_of_kind(&expr.args, symbols, ValueKind::Integer),
        FunctionOp::IsBool => all_of_kind(&expr.args, symbols, ValueKind::Boolean),
        FunctionOp::IsDouble => all_of_kind(&expr.args, symbols, ValueKind::Decimal),
        FunctionOp::IsString => all_of_kind(&expr.args, symbols, ValueKind::Text),
        FunctionOp::HostHas => {
            let name = solve_one(single(op, &expr.args)?, symbols)?;
            Ok(Value::Boolean(host.has(text_arg(op.name(), &name)?)))
        }
        FunctionOp::HostGet => {
            let name = solve_one(single(op, &expr.args)?, symbols)?;
            Ok(host.get(text_arg(op.name(), &name)?)?)
        }
        FunctionOp::HostQuery => {
            let args = solve(&expr.args, symbols)?;
            Ok(host.query(&args)?)
        }
    }
}

fn single(op: FunctionOp, args: &[Value]) -> ScriptResult<&Value> {
    match args {
        [arg] => Ok(arg),
        _ => Err(errors::arity_mismatch(op.name(), 1, args.len())),
    }
}

fn split_first(op: FunctionOp, args: &[Value]) -> ScriptResult<(&Value, &[Value])> {
    args.split_first()
        .ok_or_else(|| errors::arity_mismatch(op.name(), 1, 0))
}

/// Name argument of a `host_*` built-in.
pub(crate) fn text_arg<'a>(op: &str, value: &'a Value) -> ScriptResult<&'a str> {
    value
        .as_text()
        .ok_or_else(|| errors::builtin_arg_type(op, "text", value.kind()))
}

/// True when `first` relates to every other argument. Every pair is
/// checked, so a type mismatch anywhere is an error.
fn compare_all(
    first: &Value,
    rest: &[Value],
    relation: fn(&Value, &Value) -> Result<bool, ValueError>,
) -> ScriptResult<Value> {
    rest.iter()
        .try_fold(true, |all, other| relation(first, other).map(|holds| holds && all))
        .map(Value::Boolean)
        .map_err(|e| errors::value_error(&e))
}

fn fold(
    first: &Value,
    rest: &[Value],
    step: fn(&Value, &Value) -> Result<Value, ValueError>,
) -> ScriptResult<Value> {
    rest.iter()
        .try_fold(first.clone(), |acc, other| step(&acc, other))
        .map_err(|e| errors::value_error(&e))
}

fn all_of_kind(args: &[Value], symbols: &SymbolTable, kind: ValueKind) -> ScriptResult<Value> {
    let args = solve(args, symbols)?;
    Ok(Value::Boolean(args.iter().all(|v| v.kind() == kind)))
}
