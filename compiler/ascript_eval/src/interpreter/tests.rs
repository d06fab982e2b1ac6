#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::thread::sleep;
use std::time::Duration;

use super::*;
use crate::{BufferSink, MapHost};
use ascript_diagnostic::{ErrorCode, ScriptError};
use pretty_assertions::assert_eq;

struct Harness {
    interpreter: Interpreter,
    host: MapHost,
    out: BufferSink,
}

impl Harness {
    fn new(source: &str) -> Self {
        Self::with_builder(source, Interpreter::builder())
    }

    fn with_builder(source: &str, builder: InterpreterBuilder) -> Self {
        let functions = ascript_parse::parse_source(source).unwrap();
        Harness {
            interpreter: builder.functions(functions.into_iter().map(Arc::new)).build(),
            host: MapHost::new(),
            out: BufferSink::new(),
        }
    }

    fn run(&mut self, name: &str, args: Vec<Value>) -> ScriptResult<ReturnValue> {
        let mut out = self.out.clone();
        self.interpreter.run(&mut self.host, &mut out, name, args)
    }

    fn resume(&mut self) -> ScriptResult<ReturnValue> {
        let mut out = self.out.clone();
        self.interpreter.resume(&mut self.host, &mut out)
    }

    fn run_err(&mut self, name: &str) -> ScriptError {
        let err = self.run(name, vec![]).unwrap_err();
        assert!(self.interpreter.is_failed());
        assert!(self.interpreter.is_finished());
        err
    }

    fn output(&self) -> String {
        self.out.get_output()
    }
}

fn int(n: i64) -> ReturnValue {
    ReturnValue::Value(Value::Integer(n))
}

#[test]
fn if_block_writes_back_outer_names() {
    let mut h = Harness::new(
        "beginfunction main;
        let x be 1;
        if is_equal[x, 1];
            set x to 2;
            let y be 5;
        endif;
        out[x];
        return x;
        endfunction;",
    );
    assert_eq!(h.run("main", vec![]).unwrap(), int(2));
    assert_eq!(h.output(), "2\n");
    assert!(h.interpreter.is_finished());
    assert!(!h.interpreter.is_failed());
}

#[test]
fn if_block_locals_are_dropped() {
    let mut h = Harness::new(
        "beginfunction main;
        if is_bool[true];
            let y be 5;
        endif;
        let z be y;
        endfunction;",
    );
    let err = h.run_err("main");
    assert_eq!(err.code, ErrorCode::E2001);
    assert_eq!(err.line, Some(5));
}

#[test]
fn loop_scope_is_fresh_each_iteration() {
    let mut h = Harness::new(
        "beginfunction main;
        let i be 0;
        loop;
            let step be 1;
            set i to add[i, step];
            if is_equal[i, 3];
                break;
            endif;
        endloop;
        return i;
        endfunction;",
    );
    assert_eq!(h.run("main", vec![]).unwrap(), int(3));
}

#[test]
fn elseif_chain_picks_first_match() {
    let source = "beginfunction classify [n as int];
        if is_lesser_than[n, 0];
            return \"negative\";
        elseif is_equal[n, 0];
            return \"zero\";
        else;
            return \"positive\";
        endif;
        endfunction;";
    for (n, expected) in [(-5, "negative"), (0, "zero"), (7, "positive")] {
        let mut h = Harness::new(source);
        assert_eq!(
            h.run("classify", vec![Value::Integer(n)]).unwrap(),
            ReturnValue::Value(Value::text(expected))
        );
    }
}

#[test]
fn negated_clause_and_fallthrough() {
    let mut h = Harness::new(
        "beginfunction main [flag as bool];
        if not is_equal[flag, true];
            out[\"off\"];
        endif;
        out[\"end\"];
        endfunction;",
    );
    assert_eq!(h.run("main", vec![Value::Boolean(true)]).unwrap(), ReturnValue::Nothing);
    assert_eq!(h.output(), "end\n");
}

#[test]
fn calls_return_through_the_register() {
    let mut h = Harness::new(
        "beginfunction main;
        let r be sum[2, 3];
        set r to sum[r, r];
        return r;
        endfunction;
        beginfunction sum [a as int, b as int];
        let s be add[a, b];
        return s;
        endfunction;",
    );
    assert_eq!(h.run("main", vec![]).unwrap(), int(10));
    assert_eq!(h.interpreter.call_depth(), 0);
}

#[test]
fn callee_cannot_see_or_change_caller_scope() {
    let mut h = Harness::new(
        "beginfunction main;
        let x be 1;
        bump[x];
        return x;
        endfunction;
        beginfunction bump [x as int];
        set x to 99;
        endfunction;",
    );
    assert_eq!(h.run("main", vec![]).unwrap(), int(1));

    let mut h = Harness::new(
        "beginfunction main;
        let x be 10;
        let r be peek[];
        endfunction;
        beginfunction peek;
        return x;
        endfunction;",
    );
    let err = h.run_err("main");
    assert_eq!(err.code, ErrorCode::E2001);
    assert_eq!(err.line, Some(6));
    let backtrace = err.backtrace.unwrap();
    let frames: Vec<(&str, Option<u32>)> = backtrace
        .frames()
        .iter()
        .map(|f| (f.function.as_str(), f.line))
        .collect();
    assert_eq!(frames, vec![("peek", Some(6)), ("main", Some(3))]);
}

#[test]
fn function_without_return_leaves_register_empty() {
    let mut h = Harness::new(
        "beginfunction main;
        let r be noop[];
        endfunction;
        beginfunction noop;
        endfunction;",
    );
    assert_eq!(h.run_err("main").code, ErrorCode::E2012);
}

#[test]
fn yield_and_resume_keep_the_whole_stack() {
    let mut h = Harness::new(
        "beginfunction main;
        let total be 0;
        loop;
            set total to add[total, 1];
            out[total];
            yield;
            if is_equal[total, 2];
                break;
            endif;
        endloop;
        let r be helper[total];
        return r;
        endfunction;
        beginfunction helper [n as int];
        yield;
        let m be add[n, 10];
        return m;
        endfunction;",
    );
    assert_eq!(h.run("main", vec![]).unwrap(), ReturnValue::Yield);
    assert!(h.interpreter.is_yielding());
    assert!(!h.interpreter.is_timed_yield());
    assert_eq!(h.interpreter.yield_ms_left(), None);
    assert_eq!(h.output(), "1\n");

    assert_eq!(h.resume().unwrap(), ReturnValue::Yield);
    assert_eq!(h.output(), "1\n2\n");

    assert_eq!(h.resume().unwrap(), ReturnValue::Yield);
    assert_eq!(h.interpreter.call_depth(), 2);

    assert_eq!(h.resume().unwrap(), int(12));
    assert!(!h.interpreter.is_yielding());
    assert!(h.interpreter.is_finished());
}

#[test]
fn timed_yield_waits_for_its_deadline() {
    let mut h = Harness::new(
        "beginfunction main;
        yield for 30;
        return 1;
        endfunction;",
    );
    assert_eq!(h.run("main", vec![]).unwrap(), ReturnValue::Yield);
    assert!(h.interpreter.is_timed_yield());
    assert!(h.interpreter.yield_ms_left().unwrap() <= 30);

    assert_eq!(h.resume().unwrap(), ReturnValue::Yield);
    assert!(h.interpreter.is_yielding());

    sleep(Duration::from_millis(45));
    assert_eq!(h.interpreter.yield_ms_left(), Some(0));
    assert_eq!(h.resume().unwrap(), int(1));
}

#[test]
fn paused_timed_yield_does_not_resume() {
    let mut h = Harness::new(
        "beginfunction main;
        yield for 10;
        return 2;
        endfunction;",
    );
    assert_eq!(h.run("main", vec![]).unwrap(), ReturnValue::Yield);
    h.interpreter.pause();
    assert!(h.interpreter.is_paused());
    assert!(h.interpreter.is_timed_yield());

    sleep(Duration::from_millis(25));
    assert_eq!(h.resume().unwrap(), ReturnValue::Yield);
    assert!(h.interpreter.yield_ms_left().unwrap() <= 10);

    h.interpreter.unpause();
    assert!(!h.interpreter.is_paused());
    sleep(Duration::from_millis(25));
    assert_eq!(h.resume().unwrap(), int(2));
}

#[test]
fn pause_ignores_untimed_yield() {
    let mut h = Harness::new(
        "beginfunction main;
        yield;
        endfunction;",
    );
    h.run("main", vec![]).unwrap();
    h.interpreter.pause();
    assert!(!h.interpreter.is_paused());
    assert_eq!(h.resume().unwrap(), ReturnValue::Nothing);
}

#[test]
fn call_arguments_are_type_checked() {
    let source = "beginfunction f [n as int, tag as any];
        return n;
        endfunction;";

    let mut h = Harness::new(source);
    assert_eq!(
        h.run("f", vec![Value::Integer(4), Value::Decimal(0.5)]).unwrap(),
        int(4)
    );

    let mut h = Harness::new(source);
    let err = h.run("f", vec![Value::text("4"), Value::Boolean(true)]).unwrap_err();
    assert_eq!(err.code, ErrorCode::E2005);
    assert_eq!(err.message, "argument 'n' of function 'f' must be integer, got text");

    let mut h = Harness::new(source);
    let err = h.run("f", vec![Value::Integer(4)]).unwrap_err();
    assert_eq!(err.code, ErrorCode::E2004);
    assert_eq!(err.message, "function 'f' expects 2 arguments, got 1");
}

#[test]
fn script_calls_are_type_checked_at_the_call_line() {
    let mut h = Harness::new(
        "beginfunction main;
        twice[1.5];
        endfunction;
        beginfunction twice [n as int];
        endfunction;",
    );
    let err = h.run_err("main");
    assert_eq!(err.code, ErrorCode::E2005);
    assert_eq!(err.line, Some(2));
}

#[test]
fn builtins_inside_programs() {
    let mut h = Harness::new(
        "beginfunction main;
        let s be add[2, 3, 4];
        let same be is_equal[\"a\", \"a\", \"a\"];
        let less be is_lesser_than[1, 2];
        let word be concatenate[\"as\", \"cript\"];
        out[s, \" \", same, \" \", less, \" \", word];
        endfunction;",
    );
    h.run("main", vec![]).unwrap();
    assert_eq!(h.output(), "9 true true ascript\n");
}

#[test]
fn mixed_numeric_types_fail() {
    let mut h = Harness::new(
        "beginfunction main;
        let s be add[1, 2.0];
        endfunction;",
    );
    let err = h.run_err("main");
    assert_eq!(err.code, ErrorCode::E2002);
    assert_eq!(err.line, Some(2));
}

#[test]
fn fail_raises_user_error() {
    let mut h = Harness::new(
        "beginfunction main;
        out[\"before\"];
        fail[\"boom\"];
        out[\"after\"];
        endfunction;",
    );
    let err = h.run_err("main");
    assert!(err.is_user());
    assert_eq!(err.message, "boom");
    assert_eq!(err.line, Some(3));
    assert_eq!(h.output(), "before\n");

    let again = h.resume().unwrap_err();
    assert_eq!(again.code, ErrorCode::E2013);
    let again = h.run("main", vec![]).unwrap_err();
    assert_eq!(again.code, ErrorCode::E2013);
}

#[test]
fn exit_discards_the_stack_from_any_depth() {
    let mut h = Harness::new(
        "beginfunction main;
        a[];
        out[\"after a\"];
        endfunction;
        beginfunction a;
        loop;
            if is_int[1];
                b[];
            endif;
            out[\"after b\"];
        endloop;
        endfunction;
        beginfunction b;
        exit;
        endfunction;",
    );
    assert_eq!(h.run("main", vec![]).unwrap(), ReturnValue::Nothing);
    assert_eq!(h.output(), "");
    assert!(h.interpreter.is_finished());
    assert!(!h.interpreter.is_failed());
    assert_eq!(h.interpreter.call_depth(), 0);
}

#[test]
fn break_outside_loop_is_fatal() {
    let mut h = Harness::new(
        "beginfunction main;
        if is_int[1];
            break;
        endif;
        endfunction;",
    );
    let err = h.run_err("main");
    assert_eq!(err.code, ErrorCode::E2006);
    assert_eq!(err.line, Some(3));
}

#[test]
fn call_depth_limit() {
    let mut h = Harness::with_builder(
        "beginfunction down [n as int];
        let next be add[n, 1];
        down[next];
        endfunction;",
        Interpreter::builder().max_call_depth(8),
    );
    let err = h.run("down", vec![Value::Integer(0)]).unwrap_err();
    assert_eq!(err.code, ErrorCode::E2009);
    assert_eq!(err.line, Some(3));
    assert_eq!(err.backtrace.unwrap().len(), 8);
    assert!(h.interpreter.is_failed());
}

#[test]
fn undefined_function_fails_the_instance() {
    let mut h = Harness::new("beginfunction main;\nmissing[];\nendfunction;");
    let err = h.run_err("main");
    assert_eq!(err.code, ErrorCode::E2003);
    assert_eq!(err.line, Some(2));

    let mut h = Harness::new("beginfunction main;\nendfunction;");
    let err = h.run_err("nope");
    assert_eq!(err.code, ErrorCode::E2003);
    assert!(err.backtrace.is_none());
}

#[test]
fn run_and_resume_reject_wrong_states() {
    let mut h = Harness::new("beginfunction main;\nyield;\nendfunction;");
    let err = h.resume().unwrap_err();
    assert_eq!(err.code, ErrorCode::E2013);
    assert!(!h.interpreter.is_failed());

    h.run("main", vec![]).unwrap();
    let err = h.run("main", vec![]).unwrap_err();
    assert_eq!(err.code, ErrorCode::E2013);
    assert!(h.interpreter.is_yielding());
}

#[test]
fn non_boolean_condition_fails() {
    let mut h = Harness::new(
        "beginfunction main;
        if add[1, 2];
        endif;
        endfunction;",
    );
    let err = h.run_err("main");
    assert_eq!(err.code, ErrorCode::E2010);
    assert_eq!(err.line, Some(2));
}

#[test]
fn host_round_trip() {
    let mut h = Harness::new(
        "beginfunction main;
        host_add[\"score\", 1];
        let s be host_get[\"score\"];
        set s to add[s, 1];
        host_set[\"score\", s];
        if host_has[\"score\"];
            out[\"ok\"];
        endif;
        host_do[\"cheer\", s];
        endfunction;",
    );
    h.run("main", vec![]).unwrap();
    assert_eq!(h.host.symbol("score"), Some(&Value::Integer(2)));
    assert_eq!(h.host.actions(), &[vec![Value::text("cheer"), Value::Integer(2)]]);
    assert_eq!(h.output(), "ok\n");
}

#[test]
fn host_errors_carry_the_line() {
    let mut h = Harness::new(
        "beginfunction main;
        let v be host_get[\"nope\"];
        endfunction;",
    );
    let err = h.run_err("main");
    assert!(err.is_host());
    assert_eq!(err.line, Some(2));
    assert_eq!(err.message, "nope -> host_get -> symbol not defined");
}

#[test]
fn prepare_symbol_table_maps_parameters() {
    let source = "beginfunction f [a as string, b as any];\nendfunction;";
    let function = ascript_parse::parse_source(source).unwrap().remove(0);
    let table =
        prepare_symbol_table(&function, vec![Value::text("x"), Value::Boolean(false)]).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("a"), Some(&Value::text("x")));

    let err = prepare_symbol_table(&function, vec![Value::text("x"), Value::symbol("y")])
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::E2005);
}
