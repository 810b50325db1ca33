//! `Error::report` (`spec.md` §9 design note bridging executor errors to
//! `sigil_diag::Report`), exercised end to end through a failing program.

use crate::delegate::{Delegate, ListEntries};
use crate::executor::Executor;

struct NullDelegate;
impl Delegate for NullDelegate {
  fn print(&mut self, _line: &str) {}
  fn input(&mut self) -> String {
    String::new()
  }
  fn clear(&mut self) {}
  fn list(&mut self, _entries: ListEntries<'_>) {}
}

#[test]
fn report_renders_a_message_anchored_at_the_failing_line() {
  let source = "PRINT 1\nGOTO Nowhere\n";
  let mut executor = Executor::new(Box::new(NullDelegate));
  executor.load_code(source).unwrap();
  let err = executor.run().unwrap_err();

  let line_offsets: Vec<usize> = {
    let mut offsets = vec![0];
    let mut offset = 0;
    for line in source.split('\n') {
      offset += line.len() + 1;
      offsets.push(offset);
    }
    offsets
  };

  let rendered = err.report(source, &line_offsets).emit_to_string().unwrap();
  assert!(rendered.contains("unknown label"));
}
