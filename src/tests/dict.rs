//! `spec.md` §8 S5 (dict literal display), S8 (autokeyed then explicit),
//! and invariant #6 (autokey idempotence).

use super::common::run;
use indoc::indoc;

#[test]
fn dict_literal_display_matches_scenario_s5() {
  let source = indoc! {r#"
        print [0:"Wow"]
        b=[0:"Wow",1:"This",2:"is",3:"cool!"]
        print b[3]
        print []
    "#};
  let (result, recorded, _) = run!(source);
  result.unwrap();
  assert_eq!(recorded.borrow().printed, vec![r#"[0 = "Wow"]"#, "cool!", "[]"]);
}

#[test]
fn nested_dict_display_snapshot() {
  let (result, recorded, _) = run!(r#"print [0:1,1:"two",2:[0:"nested"]]"#);
  result.unwrap();
  insta::assert_snapshot!(recorded.borrow().printed[0], @r#"[0 = 1, 1 = "two", 2 = [0 = "nested"]]"#);
}

#[test]
fn autokeyed_then_explicit_matches_scenario_s8() {
  let source = indoc! {r#"
        b = ["a","b",0:"c"]
        print count(b)
        print b[0]
        print b[1]
    "#};
  let (result, recorded, _) = run!(source);
  result.unwrap();
  assert_eq!(recorded.borrow().printed, vec!["2", "c", "b"]);
}

#[test]
fn autokey_literal_is_idempotent_with_explicit_keys() {
  let (result_a, recorded_a, _) = run!("print [0,1,2]\n");
  let (result_b, recorded_b, _) = run!("print [0:0,1:1,2:2]\n");
  result_a.unwrap();
  result_b.unwrap();
  assert_eq!(recorded_a.borrow().printed, recorded_b.borrow().printed);
}

#[test]
fn dict_equality_is_deep_and_order_independent() {
  use crate::value::{Dict, Value};

  let mut a = Dict::new();
  a.insert(Value::Int(0), Value::Str("x".into()));
  a.insert(Value::Int(1), Value::Str("y".into()));

  let mut b = Dict::new();
  b.insert(Value::Int(1), Value::Str("y".into()));
  b.insert(Value::Int(0), Value::Str("x".into()));

  assert_eq!(Value::Dict(a), Value::Dict(b));
}

#[test]
fn undefined_dict_key_lookup_is_an_error() {
  let (result, _, _) = run!("b=[0:1]\nprint b[5]\n");
  assert!(result.is_err());
}

#[test]
fn cannot_subscript_an_int() {
  let (result, _, _) = run!("x=5\nprint x[0]\n");
  assert!(result.is_err());
}
