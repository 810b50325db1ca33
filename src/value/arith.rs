//! Arithmetic and bitwise operators (`spec.md` §4.1).
//!
//! Each operator is a coercion cascade in the shape of the teacher's
//! `isolate/binop.rs` (`if let Some(lhs) = lhs.to_int() { if let Some(rhs) =
//! rhs.to_int() { ... } else if let Some(rhs) = rhs.to_float() { ... } }
//! else if let Some(lhs) = lhs.to_float() { ... }`), adapted to return a
//! typed [`ValueError`] and to make Int arithmetic overflow-checked.

use crate::error::ValueError;
use crate::value::Value;

fn str_repr(v: &Value) -> String {
  v.to_display_string()
}

pub fn add(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  if matches!(lhs, Value::Str(_)) || matches!(rhs, Value::Str(_)) {
    return Ok(Value::Str(format!("{}{}", str_repr(lhs), str_repr(rhs))));
  }
  if let Some(a) = lhs.to_int() {
    if let Some(b) = rhs.to_int() {
      return a
        .checked_add(b)
        .map(Value::Int)
        .ok_or(ValueError::Overflow { op: "add" });
    }
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a as f64 + b));
    }
  } else if let Some(a) = lhs.to_float() {
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a + b));
    }
  }
  Err(ValueError::CannotOperate { op: "add", lhs: lhs.clone(), rhs: rhs.clone() })
}

pub fn sub(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  if let Some(a) = lhs.to_int() {
    if let Some(b) = rhs.to_int() {
      return a
        .checked_sub(b)
        .map(Value::Int)
        .ok_or(ValueError::Overflow { op: "sub" });
    }
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a as f64 - b));
    }
  } else if let Some(a) = lhs.to_float() {
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a - b));
    }
  }
  Err(ValueError::CannotOperate { op: "sub", lhs: lhs.clone(), rhs: rhs.clone() })
}

pub fn mul(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  if let (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) = (lhs, rhs) {
    if *n < 0 {
      return Err(ValueError::NegativeRepeat);
    }
    return Ok(Value::Str(s.repeat(*n as usize)));
  }
  if let Some(a) = lhs.to_int() {
    if let Some(b) = rhs.to_int() {
      return a
        .checked_mul(b)
        .map(Value::Int)
        .ok_or(ValueError::Overflow { op: "mul" });
    }
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a as f64 * b));
    }
  } else if let Some(a) = lhs.to_float() {
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a * b));
    }
  }
  Err(ValueError::CannotOperate { op: "mul", lhs: lhs.clone(), rhs: rhs.clone() })
}

pub fn div(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  if let Some(a) = lhs.to_int() {
    if let Some(b) = rhs.to_int() {
      if b == 0 {
        return Err(ValueError::DivisionByZero { op: "div" });
      }
      return a
        .checked_div(b)
        .map(Value::Int)
        .ok_or(ValueError::Overflow { op: "div" });
    }
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a as f64 / b));
    }
  } else if let Some(a) = lhs.to_float() {
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a / b));
    }
  }
  Err(ValueError::CannotOperate { op: "div", lhs: lhs.clone(), rhs: rhs.clone() })
}

pub fn rem(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  if let Some(a) = lhs.to_int() {
    if let Some(b) = rhs.to_int() {
      if b == 0 {
        return Err(ValueError::DivisionByZero { op: "rem" });
      }
      return a
        .checked_rem(b)
        .map(Value::Int)
        .ok_or(ValueError::Overflow { op: "rem" });
    }
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a as f64 % b));
    }
  } else if let Some(a) = lhs.to_float() {
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a % b));
    }
  }
  Err(ValueError::CannotOperate { op: "rem", lhs: lhs.clone(), rhs: rhs.clone() })
}

/// `**` always returns `Float` (pow semantics), matching the teacher's own
/// `pow` shape but without its negative-exponent Int-returning branch —
/// `spec.md` §4.1 fixes `**` to always produce Float.
pub fn pow(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  if let Some(a) = lhs.to_float() {
    if let Some(b) = rhs.to_float() {
      return Ok(Value::Float(a.powf(b)));
    }
  }
  Err(ValueError::CannotOperate { op: "pow", lhs: lhs.clone(), rhs: rhs.clone() })
}

fn both_ints(op: &'static str, lhs: &Value, rhs: &Value) -> Result<(i64, i64), ValueError> {
  match (lhs.to_int(), rhs.to_int()) {
    (Some(a), Some(b)) => Ok((a, b)),
    _ => Err(ValueError::CannotOperate { op, lhs: lhs.clone(), rhs: rhs.clone() }),
  }
}

pub fn bitwise_and(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  let (a, b) = both_ints("and", lhs, rhs)?;
  Ok(Value::Int(a & b))
}

pub fn bitwise_or(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  let (a, b) = both_ints("or", lhs, rhs)?;
  Ok(Value::Int(a | b))
}

pub fn bitwise_xor(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  let (a, b) = both_ints("xor", lhs, rhs)?;
  Ok(Value::Int(a ^ b))
}

pub fn shl(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  let (a, b) = both_ints("shl", lhs, rhs)?;
  if !(0..64).contains(&b) {
    return Err(ValueError::Overflow { op: "shl" });
  }
  a.checked_shl(b as u32)
    .map(Value::Int)
    .ok_or(ValueError::Overflow { op: "shl" })
}

/// Right-shift is arithmetic (`spec.md` §4.1).
pub fn shr(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
  let (a, b) = both_ints("shr", lhs, rhs)?;
  if !(0..64).contains(&b) {
    return Err(ValueError::Overflow { op: "shr" });
  }
  Ok(Value::Int(a >> b))
}
