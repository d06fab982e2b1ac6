//! The `run` command: load a file, start a function, see it through.

use std::path::Path;
use std::thread;
use std::time::Duration;

use ascript_diagnostic::ScriptResult;
use ascript_eval::{Environment, Host, OutSink, ReturnValue};
use ascript_ir::Value;
use tracing::debug;

/// Load `path` into a fresh environment and drive `function` to the end.
pub fn run_file(
    path: impl AsRef<Path>,
    function: &str,
    args: Vec<Value>,
    host: &mut dyn Host,
    out: &mut dyn OutSink,
) -> ScriptResult<ReturnValue> {
    let mut env = Environment::new();
    env.load_file(path)?;
    drive(&mut env, host, out, function, args)
}

/// Run `function` and keep resuming it until it stops yielding.
///
/// A timed yield is waited out with a sleep; a plain yield is resumed
/// straight away.
#[tracing::instrument(level = "debug", skip(env, host, out, args))]
pub fn drive(
    env: &mut Environment,
    host: &mut dyn Host,
    out: &mut dyn OutSink,
    function: &str,
    args: Vec<Value>,
) -> ScriptResult<ReturnValue> {
    let (mut outcome, id) = env.run_with_id(host, out, function, args)?;
    while outcome.is_yield() {
        let wait_ms = env.yield_time(id).unwrap_or(0);
        if wait_ms > 0 {
            debug!(id, wait_ms, "waiting out timed yield");
            thread::sleep(Duration::from_millis(wait_ms));
        }
        outcome = env.resume(host, out, id)?;
    }
    Ok(outcome)
}
