//! Dispatch over every instruction kind.

use ascript_diagnostic::{errors, ScriptResult};
use ascript_ir::{Branch, InstrKind, Instruction, Value};

use super::procedure;
use super::value::{evaluate, solve, solve_one};
use crate::context::{RunContext, Signal};
use crate::host::Host;
use crate::out::OutSink;

/// Execute one instruction, leaving its outcome in `ctx.signal`.
///
/// Errors carry the instruction's line unless a more precise one (a branch
/// clause) was already attached.
pub fn execute(
    instruction: &Instruction,
    ctx: &mut RunContext,
    host: &mut dyn Host,
    out: &mut dyn OutSink,
) -> ScriptResult<()> {
    execute_kind(&instruction.kind, ctx, host, out).map_err(|e| e.or_line(instruction.line))
}

fn execute_kind(
    kind: &InstrKind,
    ctx: &mut RunContext,
    host: &mut dyn Host,
    out: &mut dyn OutSink,
) -> ScriptResult<()> {
    match kind {
        InstrKind::Procedure { op, args } => procedure::execute(*op, args, ctx, host, out)?,
        InstrKind::Declare { name, value } => {
            if ctx.symbols.contains_key(name) {
                return Err(errors::already_declared(name));
            }
            let value = evaluate(value, ctx, host)?;
            ctx.value = Some(value.clone());
            ctx.symbols.insert(name.clone(), value);
        }
        InstrKind::Assign { name, value } => {
            let Some(current) = ctx.symbols.get(name) else {
                return Err(errors::undefined_variable(name));
            };
            let expected = current.kind();
            let value = evaluate(value, ctx, host)?;
            if value.kind() != expected {
                return Err(errors::assignment_type_mismatch(name, expected, value.kind()));
            }
            ctx.value = Some(value.clone());
            ctx.symbols.insert(name.clone(), value);
        }
        InstrKind::Call { name, args } => {
            ctx.arguments = solve(args, &ctx.symbols)?;
            ctx.signal = Signal::Call(name.clone());
        }
        InstrKind::Return(None) => ctx.signal = Signal::Return,
        InstrKind::Return(Some(value)) => {
            ctx.signal = Signal::ReturnWithValue(solve_one(value, &ctx.symbols)?);
        }
        InstrKind::Yield(None) => ctx.signal = Signal::Yield(None),
        InstrKind::Yield(Some(duration)) => {
            let millis = yield_millis(&solve_one(duration, &ctx.symbols)?)?;
            ctx.signal = Signal::Yield(Some(millis));
        }
        InstrKind::Break => ctx.signal = Signal::Break,
        InstrKind::Exit => ctx.signal = Signal::Exit,
        InstrKind::ConditionalBranch(branches) => branch(branches, ctx, host)?,
        InstrKind::Loop(target) => ctx.signal = Signal::Jump(*target),
    }
    Ok(())
}

/// Jump to the first clause whose condition matches. No match falls
/// through to the next instruction.
fn branch(branches: &[Branch], ctx: &mut RunContext, host: &dyn Host) -> ScriptResult<()> {
    for branch in branches {
        let taken = match &branch.condition {
            None => true,
            Some(condition) => {
                let value = evaluate(condition, ctx, host).map_err(|e| e.or_line(branch.line))?;
                let Some(result) = value.as_bool() else {
                    return Err(errors::non_boolean_condition(value.kind()).with_line(branch.line));
                };
                ctx.value = Some(value);
                branch.matches(result)
            }
        };
        if taken {
            ctx.signal = Signal::Jump(branch.target);
            break;
        }
    }
    Ok(())
}

fn yield_millis(duration: &Value) -> ScriptResult<u64> {
    match duration {
        Value::Integer(ms) => u64::try_from(*ms)
            .map_err(|_| errors::invalid_yield_duration(&format!("{ms} is negative"))),
        other => Err(errors::invalid_yield_duration(&format!(
            "expected integer milliseconds, got {}",
            other.kind()
        ))),
    }
}
