use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reset_keeps_symbols_and_return_register() {
    let mut ctx = RunContext::new();
    ctx.symbols.insert("x".into(), Value::Integer(1));
    ctx.return_value = Some(Value::Boolean(true));
    ctx.signal = Signal::Break;
    ctx.value = Some(Value::Integer(9));
    ctx.arguments.push(Value::text("a"));

    ctx.reset();

    assert_eq!(ctx.signal, Signal::None);
    assert_eq!(ctx.value, None);
    assert!(ctx.arguments.is_empty());
    assert_eq!(ctx.lookup("x"), Some(&Value::Integer(1)));
    assert_eq!(ctx.return_value, Some(Value::Boolean(true)));
}

#[test]
fn merge_updates_shared_names_and_drops_locals() {
    let mut parent = RunContext::new();
    parent.symbols.insert("x".into(), Value::Integer(1));
    parent.symbols.insert("y".into(), Value::Integer(2));

    let mut child = parent.symbols.clone();
    child.insert("x".into(), Value::Integer(10));
    child.insert("local".into(), Value::text("gone"));

    parent.merge_from(child);

    assert_eq!(parent.lookup("x"), Some(&Value::Integer(10)));
    assert_eq!(parent.lookup("y"), Some(&Value::Integer(2)));
    assert_eq!(parent.lookup("local"), None);
}
