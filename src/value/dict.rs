//! `Value::Dict`'s backing map and `Value`'s hand-written `Hash`/`Eq`.
//!
//! `f64` has no `Eq`/`Hash` (NaN), so neither can be derived on `Value`;
//! floats are hashed and compared via their bit pattern instead, matching
//! the teacher's own pattern of hand-written trait impls for its tagged
//! value type.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use super::Value;

/// An insertion-ordered `Value` → `Value` mapping. Insertion order is load-
/// bearing: it's what makes dict-literal display and the auto-key/explicit-
/// key overwrite-in-place semantics (`spec.md` §4.7, S8) reproducible.
#[derive(Clone, Debug, Default)]
pub struct Dict(pub IndexMap<Value, Value>);

impl Dict {
  pub fn new() -> Self {
    Dict(IndexMap::new())
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, key: &Value) -> Option<&Value> {
    self.0.get(key)
  }

  pub fn insert(&mut self, key: Value, value: Value) {
    self.0.insert(key, value);
  }

  pub fn iter(&self) -> indexmap::map::Iter<'_, Value, Value> {
    self.0.iter()
  }
}

/// Deep equality, irrespective of iteration order (`spec.md` §3: "equality
/// of Dict is deep equality"; order is not part of the equality contract,
/// only of display/iteration).
impl PartialEq for Dict {
  fn eq(&self, other: &Self) -> bool {
    self.0.len() == other.0.len()
      && self.0.iter().all(|(k, v)| other.0.get(k).map(|ov| ov == v).unwrap_or(false))
  }
}

impl PartialEq for Value {
  fn eq(&self, other: &Self) -> bool {
    crate::value::cmp::eq(self, other).unwrap_or(false)
  }
}

impl Eq for Value {}

impl Hash for Value {
  fn hash<H: Hasher>(&self, state: &mut H) {
    match self {
      // Int and Float share a hash bucket because `spec.md` §4.1's numeric
      // coercion makes `Int(2) == Float(2.0)`; the tag plus bit pattern of
      // the `f64` cast is the canonical numeric key for both. `-0.0` is
      // folded to `0.0` so it hashes the same as its `==` counterpart.
      Value::Int(i) => {
        0u8.hash(state);
        numeric_bits(*i as f64).hash(state);
      }
      Value::Float(f) => {
        0u8.hash(state);
        numeric_bits(*f).hash(state);
      }
      Value::Str(s) => {
        1u8.hash(state);
        s.hash(state);
      }
      Value::Dict(d) => {
        2u8.hash(state);
        // Order-independent: XOR per-entry hashes together.
        let mut acc = 0u64;
        for (k, v) in d.0.iter() {
          let mut h = std::collections::hash_map::DefaultHasher::new();
          k.hash(&mut h);
          v.hash(&mut h);
          acc ^= h.finish();
        }
        acc.hash(state);
      }
    }
  }
}

fn numeric_bits(f: f64) -> u64 {
  if f == 0.0 {
    0.0f64.to_bits()
  } else {
    f.to_bits()
  }
}
