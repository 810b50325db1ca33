//! Built-in function dispatch table (`spec.md` §4.7 "Built-in functions").
//!
//! Resolved at *parse* time inside `parseFactor` rather than through a
//! global/module namespace, in the spirit of the teacher's
//! `builtins::register` (a name → function table) — `spec.md` has no
//! user-defined functions or modules (§1 Non-goals), so there is no
//! namespace to register into.

use rand::Rng;

use crate::error::ValueError;
use crate::token::TokenKind;
use crate::value::Value;

/// `true` if `kind` names a built-in function token (as opposed to a
/// keyword or an ordinary identifier).
pub fn is_builtin(kind: TokenKind) -> bool {
  matches!(
    kind,
    TokenKind::Sin
      | TokenKind::Cos
      | TokenKind::Tan
      | TokenKind::Sec
      | TokenKind::Csc
      | TokenKind::Cot
      | TokenKind::Asin
      | TokenKind::Acos
      | TokenKind::Atan
      | TokenKind::Rand
      | TokenKind::Len
      | TokenKind::Count
  )
}

fn numeric_arg(name: &'static str, v: &Value) -> Result<f64, ValueError> {
  v.to_float().ok_or(ValueError::WrongType { context: name, expected: "number" })
}

/// `sin cos tan sec csc cot asin acos atan`: one numeric argument, `Float`
/// result. `sec`/`csc`/`cot` are `1/cos`, `1/sin`, `1/tan`.
pub fn call_trig(kind: TokenKind, arg: &Value) -> Result<Value, ValueError> {
  let name = kind.name();
  let x = numeric_arg(name, arg)?;
  let y = match kind {
    TokenKind::Sin => x.sin(),
    TokenKind::Cos => x.cos(),
    TokenKind::Tan => x.tan(),
    TokenKind::Sec => 1.0 / x.cos(),
    TokenKind::Csc => 1.0 / x.sin(),
    TokenKind::Cot => 1.0 / x.tan(),
    TokenKind::Asin => x.asin(),
    TokenKind::Acos => x.acos(),
    TokenKind::Atan => x.atan(),
    _ => unreachable!("call_trig called with a non-trig TokenKind"),
  };
  Ok(Value::Float(y))
}

/// `rand(lo, hi)`: both `Int`, `lo < hi`, result uniformly sampled in
/// `[lo, hi]` inclusive (`spec.md` §4.7, §9 open question resolved
/// inclusive on both ends).
pub fn call_rand(lo: &Value, hi: &Value) -> Result<Value, ValueError> {
  let lo = lo.to_int().ok_or(ValueError::RequiresInt { context: "rand" })?;
  let hi = hi.to_int().ok_or(ValueError::RequiresInt { context: "rand" })?;
  if lo >= hi {
    return Err(ValueError::WrongType { context: "rand", expected: "lo < hi" });
  }
  Ok(Value::Int(rand::thread_rng().gen_range(lo..=hi)))
}

/// `len(s)`: `Str`, returns grapheme count.
pub fn call_len(arg: &Value) -> Result<Value, ValueError> {
  let s = arg.as_str().ok_or(ValueError::WrongType { context: "len", expected: "string" })?;
  Ok(Value::Int(Value::grapheme_len(s) as i64))
}

/// `count(d)`: `Dict`, returns entry count.
pub fn call_count(arg: &Value) -> Result<Value, ValueError> {
  let d = arg.as_dict().ok_or(ValueError::WrongType { context: "count", expected: "dict" })?;
  Ok(Value::Int(d.len() as i64))
}
