//! Comparison operators (`spec.md` §4.1), mirroring the teacher's
//! `isolate/cmp.rs` coercion cascade (Int/Int, Int/Float, Float/Int,
//! Float/Float, then same-type), extended with Str/Str and Dict/Dict.

use crate::error::ValueError;
use crate::value::Value;

/// `==`/`!=` never error (`spec.md` §4.1): a type mismatch simply compares
/// unequal. `None` is never returned; the `Result` shape is kept only so
/// callers can use `?` uniformly alongside ordering comparisons.
pub fn eq(lhs: &Value, rhs: &Value) -> Result<bool, ValueError> {
  Ok(match (lhs, rhs) {
    (Value::Int(a), Value::Int(b)) => a == b,
    (Value::Int(a), Value::Float(b)) => (*a as f64) == *b,
    (Value::Float(a), Value::Int(b)) => *a == (*b as f64),
    (Value::Float(a), Value::Float(b)) => a == b,
    (Value::Str(a), Value::Str(b)) => a == b,
    (Value::Dict(a), Value::Dict(b)) => a == b,
    _ => false,
  })
}

pub fn ne(lhs: &Value, rhs: &Value) -> Result<bool, ValueError> {
  eq(lhs, rhs).map(|b| !b)
}

/// Ordering comparison: requires both operands numeric (`spec.md` §4.1
/// "mixed types ... fail for ordering"; §9 open question resolves that this
/// extends to `Str < Str` too — strings compare for equality only, ordering
/// of any pair involving a `Str` is rejected, per `DESIGN.md`'s resolution).
fn ordering(lhs: &Value, rhs: &Value) -> Result<std::cmp::Ordering, ValueError> {
  match (lhs, rhs) {
    (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
    (Value::Int(a), Value::Float(b)) => (*a as f64)
      .partial_cmp(b)
      .ok_or(ValueError::BadComparison { what: "NaN" }),
    (Value::Float(a), Value::Int(b)) => a
      .partial_cmp(&(*b as f64))
      .ok_or(ValueError::BadComparison { what: "NaN" }),
    (Value::Float(a), Value::Float(b)) => {
      a.partial_cmp(b).ok_or(ValueError::BadComparison { what: "NaN" })
    }
    _ => Err(ValueError::BadComparison { what: "mismatched types" }),
  }
}

pub fn lt(lhs: &Value, rhs: &Value) -> Result<bool, ValueError> {
  Ok(ordering(lhs, rhs)?.is_lt())
}

pub fn gt(lhs: &Value, rhs: &Value) -> Result<bool, ValueError> {
  Ok(ordering(lhs, rhs)?.is_gt())
}

/// `<=` is `< or ==` per `spec.md` §4.1, not derived from `Ordering`
/// directly, so that a same-variant-but-otherwise-incomparable pair (there
/// are none today, but the spec calls this out explicitly) stays expressed
/// the way the spec states it.
pub fn le(lhs: &Value, rhs: &Value) -> Result<bool, ValueError> {
  Ok(lt(lhs, rhs)? || eq(lhs, rhs)?)
}

pub fn ge(lhs: &Value, rhs: &Value) -> Result<bool, ValueError> {
  Ok(gt(lhs, rhs)? || eq(lhs, rhs)?)
}
