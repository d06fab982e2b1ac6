#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn get_and_has_follow_definitions() {
    let host = MapHost::new().with("hp", 10i64);
    assert!(host.has("hp"));
    assert!(!host.has("mp"));
    assert_eq!(host.get("hp").unwrap(), Value::Integer(10));
    assert_eq!(
        host.get("mp").unwrap_err().message(),
        "mp -> host_get -> symbol not defined"
    );
}

#[test]
fn add_rejects_existing_symbol() {
    let mut host = MapHost::new();
    host.add("name", Value::text("bob")).unwrap();
    let err = host.add("name", Value::text("alice")).unwrap_err();
    assert_eq!(err.to_string(), "name -> host_add -> already defined");
    assert_eq!(host.symbol("name"), Some(&Value::text("bob")));
}

#[test]
fn set_requires_existing_symbol() {
    let mut host = MapHost::new().with("flag", false);
    host.set("flag", Value::Boolean(true)).unwrap();
    assert_eq!(host.symbol("flag"), Some(&Value::Boolean(true)));
    assert!(host.set("missing", Value::Integer(1)).is_err());
    assert_eq!(host.len(), 1);
}

#[test]
fn delete_removes_symbol_once() {
    let mut host = MapHost::new().with("tmp", 1i64);
    host.delete("tmp").unwrap();
    assert!(host.is_empty());
    assert_eq!(
        host.delete("tmp").unwrap_err().message(),
        "tmp -> host_delete -> symbol not defined"
    );
}

#[test]
fn do_requests_are_recorded_in_order() {
    let mut host = MapHost::new();
    host.run_do(&[Value::text("jump")]).unwrap();
    host.run_do(&[Value::text("walk"), Value::Integer(3)]).unwrap();
    assert_eq!(
        host.actions(),
        &[
            vec![Value::text("jump")],
            vec![Value::text("walk"), Value::Integer(3)],
        ]
    );
}

#[test]
fn query_is_unsupported() {
    let host = MapHost::new();
    assert!(host.query(&[]).is_err());
}
