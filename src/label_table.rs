//! Label → line-index maps, populated by a pre-pass before `run()`
//! (`spec.md` §4.4).

use std::collections::HashMap;

#[derive(Default)]
pub struct LabelTable {
  integer_map: HashMap<i64, usize>,
  identifier_map: HashMap<String, usize>,
}

impl LabelTable {
  pub fn new() -> Self {
    LabelTable { integer_map: HashMap::new(), identifier_map: HashMap::new() }
  }

  pub fn clear(&mut self) {
    self.integer_map.clear();
    self.identifier_map.clear();
  }

  /// Last occurrence wins (`spec.md` §3).
  pub fn insert_integer(&mut self, label: i64, line: usize) {
    self.integer_map.insert(label, line);
  }

  pub fn insert_identifier(&mut self, label: impl Into<String>, line: usize) {
    self.identifier_map.insert(label.into(), line);
  }

  pub fn get_integer(&self, label: i64) -> Option<usize> {
    self.integer_map.get(&label).copied()
  }

  pub fn get_identifier(&self, label: &str) -> Option<usize> {
    self.identifier_map.get(label).copied()
  }
}
