//! `FOR`/`NEXT` (`spec.md` §4.5 S4) and its error paths.

use super::common::run;
use indoc::indoc;

#[test]
fn for_next_matches_scenario_s4() {
  let source = indoc! {r#"
        for i in 1 to 10
        print i
        next
    "#};
  let (result, recorded, _) = run!(source);
  result.unwrap();
  assert_eq!(
    recorded.borrow().printed,
    (1..10).map(|n| n.to_string()).collect::<Vec<_>>()
  );
}

#[test]
fn next_without_for_is_an_error() {
  let (result, _, _) = run!("NEXT\n");
  let err = result.unwrap_err();
  assert!(matches!(err, crate::error::Error::CannotIterate { .. }), "{err:?}");
}

#[test]
fn for_requires_lower_strictly_less_than_upper() {
  let (result, _, _) = run!("FOR i IN 5 TO 5\nNEXT\n");
  let err = result.unwrap_err();
  assert!(matches!(err, crate::error::Error::BadRangeBound { .. }), "{err:?}");
}

#[test]
fn for_upper_bound_is_exclusive() {
  let source = indoc! {r#"
        for i in 0 to 1
        print i
        next
    "#};
  let (result, recorded, _) = run!(source);
  result.unwrap();
  assert_eq!(recorded.borrow().printed, vec!["0"]);
}

#[test]
fn next_fails_if_the_loop_index_was_overwritten_with_a_non_int() {
  let source = indoc! {r#"
        for i in 0 to 3
        i = "oops"
        next
    "#};
  let (result, _, _) = run!(source);
  let err = result.unwrap_err();
  assert!(matches!(err, crate::error::Error::BadIndex { .. }), "{err:?}");
}

#[test]
fn gosub_inside_a_for_body_can_return_into_the_loop() {
  let source = indoc! {r#"
        for i in 0 to 2
        gosub PrintIt
        next
        end
        PrintIt
        print i
        return
    "#};
  let (result, recorded, _) = run!(source);
  result.unwrap();
  assert_eq!(recorded.borrow().printed, vec!["0", "1"]);
}
