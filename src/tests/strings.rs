//! `spec.md` §8 S2 (string operators), S3 (grapheme subscripts), S6 (`len`).

use super::common::run;
use indoc::indoc;

#[test]
fn string_operators_match_scenario_s2() {
  let source = indoc! {r#"
        string = "We like " + 2
        string += " eat "
        dessert = "🍪" * 5
        string += dessert
        print string + " ", 4.0 + " ever!"
    "#};
  let (result, recorded, _) = run!(source);
  result.unwrap();
  assert_eq!(recorded.borrow().printed, vec!["We like 2 eat 🍪🍪🍪🍪🍪 4.0 ever!"]);
}

#[test]
fn grapheme_subscripts_match_scenario_s3() {
  let source = indoc! {r#"
        let s="Swift🌀Basic"
        print s[0],s[1],s[2],s[3],s[4]
        print s[5]
        print s[6],s[7],s[8],s[9],s[10]
    "#};
  let (result, recorded, _) = run!(source);
  result.unwrap();
  assert_eq!(recorded.borrow().printed, vec!["Swift", "🌀", "Basic"]);
}

#[test]
fn out_of_range_string_subscript_is_an_error() {
  let (result, _, _) = run!("let s=\"hi\"\nprint s[5]\n");
  assert!(result.is_err());
}

#[test]
fn negative_string_repeat_count_is_an_error() {
  let (result, _, _) = run!("print \"x\" * -1\n");
  assert!(result.is_err());
}

#[test]
fn len_and_count_match_scenario_s6() {
  let source = indoc! {r#"
        let s="This"
        print len(s)
        let d=[]
        print count(d)
        d["a"]="b"
        print count(d)
    "#};
  let (result, recorded, _) = run!(source);
  result.unwrap();
  assert_eq!(recorded.borrow().printed, vec!["4", "0", "1"]);
}

#[test]
fn string_mutation_through_subscript_is_unsupported() {
  let (result, _, _) = run!("let s=\"hi\"\ns[0]=\"H\"\n");
  let err = result.unwrap_err();
  assert!(matches!(err, crate::error::Error::UnknownSymbolError { .. }), "{err:?}");
}

#[test]
fn round_trips_int_and_str_display() {
  use crate::value::Value;

  let v = Value::Int(-42);
  assert_eq!(Value::from_input(&v.to_display_string()), Value::Int(-42));

  let v = Value::Str("hello world".to_string());
  assert_eq!(Value::from_input(&v.to_display_string()), v);
}
