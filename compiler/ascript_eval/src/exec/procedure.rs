//! Built-in effects.

use ascript_diagnostic::{errors, ScriptResult};
use ascript_ir::{ProcedureOp, Value};

use super::value::{solve, text_arg};
use crate::context::{RunContext, Signal};
use crate::host::Host;
use crate::out::OutSink;

pub fn execute(
    op: ProcedureOp,
    args: &[Value],
    ctx: &mut RunContext,
    host: &mut dyn Host,
    out: &mut dyn OutSink,
) -> ScriptResult<()> {
    let args = solve(args, &ctx.symbols)?;
    match op {
        ProcedureOp::Out => {
            for value in &args {
                out.emit(value);
            }
            out.flush();
        }
        ProcedureOp::Fail => {
            let message = args.iter().map(|v| v.plain().to_string()).collect();
            ctx.signal = Signal::Fail(message);
        }
        ProcedureOp::HostSet => {
            let (name, value) = name_and_value(op, args)?;
            host.set(&name, value)?;
        }
        ProcedureOp::HostAdd => {
            let (name, value) = name_and_value(op, args)?;
            host.add(&name, value)?;
        }
        ProcedureOp::HostDelete => {
            let [name] = args.as_slice() else {
                return Err(errors::arity_mismatch(op.name(), 1, args.len()));
            };
            host.delete(text_arg(op.name(), name)?)?;
        }
        ProcedureOp::HostDo => host.run_do(&args)?,
    }
    Ok(())
}

fn name_and_value(op: ProcedureOp, args: Vec<Value>) -> ScriptResult<(String, Value)> {
    let count = args.len();
    let Ok([name, value]) = <[Value; 2]>::try_from(args) else {
        return Err(errors::arity_mismatch(op.name(), 2, count));
    };
    match name {
        Value::Text(name) => Ok((name, value)),
        other => Err(errors::builtin_arg_type(op.name(), "text", other.kind())),
    }
}
