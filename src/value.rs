//! Tagged-union runtime value (`spec.md` §3, §4.1).

mod arith;
mod cmp;
mod dict;
mod display;

pub use arith::{add, bitwise_and, bitwise_or, bitwise_xor, div, mul, pow, rem, shl, shr, sub};
pub use cmp::{eq, ge, gt, le, lt, ne};
pub use dict::Dict;

use unicode_segmentation::UnicodeSegmentation;

/// The interpreter's dynamically-typed runtime value: an integer, a float, a
/// UTF-8 string (indexed by grapheme cluster, not byte or `char`), or an
/// ordered dictionary keyed by `Value` itself.
#[derive(Clone, Debug)]
pub enum Value {
  Int(i64),
  Float(f64),
  Str(String),
  Dict(Dict),
}

impl Value {
  pub fn to_int(&self) -> Option<i64> {
    match self {
      Value::Int(i) => Some(*i),
      _ => None,
    }
  }

  pub fn to_float(&self) -> Option<f64> {
    match self {
      Value::Int(i) => Some(*i as f64),
      Value::Float(f) => Some(*f),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::Str(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_dict(&self) -> Option<&Dict> {
    match self {
      Value::Dict(d) => Some(d),
      _ => None,
    }
  }

  pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
    match self {
      Value::Dict(d) => Some(d),
      _ => None,
    }
  }

  /// User-input auto-detect constructor (§4.1): int, else double, else
  /// string. Never produces a `Dict`.
  pub fn from_input(text: &str) -> Value {
    if let Ok(i) = text.parse::<i64>() {
      return Value::Int(i);
    }
    if let Ok(f) = text.parse::<f64>() {
      return Value::Float(f);
    }
    Value::Str(text.to_string())
  }

  /// Grapheme count of a `Str` (used by `len`, and by subscripting).
  pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
  }

  /// The grapheme at `index`, or `None` if out of range (§4.7 string
  /// subscript).
  pub fn grapheme_at(s: &str, index: i64) -> Option<&str> {
    if index < 0 {
      return None;
    }
    s.graphemes(true).nth(index as usize)
  }

  pub fn to_display_string(&self) -> String {
    display::to_display_string(self)
  }
}
