//! Inspection commands: `tokens` and `print`.

use std::fmt::Write;
use std::path::Path;

use ascript_diagnostic::ScriptResult;

/// Lex a file and list its tokens, one per line.
pub fn tokens_report(path: impl AsRef<Path>) -> ScriptResult<String> {
    let path = path.as_ref();
    let tokens = ascript_lexer::tokenize_file(path)?;

    let mut report = format!("Tokens for '{}' ({} tokens):\n", path.display(), tokens.len());
    for token in &tokens {
        // Writing to a String cannot fail.
        let _ = writeln!(report, "  {token}");
    }
    Ok(report)
}

/// Parse a file and dump every function with its lowered blocks.
pub fn print_report(path: impl AsRef<Path>) -> ScriptResult<String> {
    let functions = ascript_parse::parse_file(path)?;

    let mut report = String::new();
    for function in &functions {
        let _ = write!(report, "{function}");
    }
    Ok(report)
}
