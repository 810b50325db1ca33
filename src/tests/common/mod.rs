//! Shared test harness: a [`Delegate`] whose recorded output stays
//! reachable after the [`crate::Executor`] that owns it is dropped, plus a
//! `run!` macro that loads and runs a source string in one call — the same
//! `check!`-style shape the teacher's own `src/tests/common/mod.rs` uses
//! around `Hebi::eval`, adapted to this spec's print/input/clear/list
//! delegate contract (`spec.md` §6) instead of a single return value.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::delegate::{Delegate, ListEntries};
use crate::error::Result;
use crate::executor::Executor;

#[derive(Default)]
pub struct Recorded {
  pub printed: Vec<String>,
  pub clear_count: usize,
  pub listed: Vec<Vec<(String, String)>>,
}

/// A [`Delegate`] that records everything into a shared [`Recorded`] the
/// test keeps its own handle to, and serves `INPUT` from a pre-seeded
/// queue.
pub struct TestDelegate {
  recorded: Rc<RefCell<Recorded>>,
  input_queue: VecDeque<String>,
}

impl Delegate for TestDelegate {
  fn print(&mut self, line: &str) {
    // The core already terminated `line` with `\n` (`spec.md` §6); strip it
    // back off so assertions compare against the line's content, not its
    // terminator.
    self.recorded.borrow_mut().printed.push(line.trim_end_matches('\n').to_string());
  }

  fn input(&mut self) -> String {
    self.input_queue.pop_front().unwrap_or_default()
  }

  fn clear(&mut self) {
    self.recorded.borrow_mut().clear_count += 1;
  }

  fn list(&mut self, entries: ListEntries<'_>) {
    self.recorded.borrow_mut().listed.push(entries.to_vec());
  }
}

/// Loads `source` into a fresh `Executor`, runs it to completion, and
/// returns `(result, recorded, symbols)` so callers can assert on the
/// printed output, the error/ok outcome, and any symbol left behind.
pub fn run_with_input(source: &str, input: Vec<String>) -> (Result<()>, Rc<RefCell<Recorded>>, Executor) {
  let recorded = Rc::new(RefCell::new(Recorded::default()));
  let delegate =
    TestDelegate { recorded: Rc::clone(&recorded), input_queue: input.into_iter().collect() };
  let mut executor = Executor::new(Box::new(delegate));
  executor.load_code(source).expect("load_code never fails in this implementation");
  let result = executor.run();
  (result, recorded, executor)
}

/// `run!(source)` / `run!(source, input = ["7", "3"])`: returns
/// `(Result<()>, Rc<RefCell<Recorded>>, Executor)`.
macro_rules! run {
  ($source:expr) => {{
    $crate::tests::common::run_with_input($source, Vec::<String>::new())
  }};
  ($source:expr, input = [$($line:expr),* $(,)?]) => {{
    $crate::tests::common::run_with_input($source, vec![$($line.to_string()),*])
  }};
}

pub(crate) use run;
