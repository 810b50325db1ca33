//! Flat, process-wide name → [`Value`] mapping (`spec.md` §3).

use indexmap::IndexMap;

use crate::value::Value;

#[derive(Default)]
pub struct SymbolTable {
  entries: IndexMap<String, Value>,
}

impl SymbolTable {
  pub fn new() -> Self {
    SymbolTable { entries: IndexMap::new() }
  }

  pub fn get(&self, name: &str) -> Option<&Value> {
    self.entries.get(name)
  }

  pub fn insert(&mut self, name: impl Into<String>, value: Value) {
    self.entries.insert(name.into(), value);
  }

  pub fn remove_all(&mut self) {
    self.entries.clear();
  }

  /// Entries sorted by key lexicographically (`spec.md` §3 `list`).
  pub fn list_sorted(&self) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = self.entries.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
  }
}
