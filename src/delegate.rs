//! The host-provided capability bundle (`spec.md` §6, §9).
//!
//! A plain trait, taken by the executor as `&mut dyn Delegate` — not an
//! associated-type generic, since there is no monomorphized hot path here
//! that would justify one (guest programs have no user-defined functions to
//! specialize over). The executor never calls back into itself through the
//! delegate.

/// Entries passed to [`Delegate::list`]: `(name, value_as_display_string)`,
/// already sorted by name.
pub type ListEntries<'a> = &'a [(String, String)];

pub trait Delegate {
  /// Emit a line. The core appends a trailing newline before passing the
  /// string. Must not fail.
  fn print(&mut self, line: &str);

  /// Produce one line of user input. The core auto-detects Int/Float/Str
  /// from its content via [`crate::value::Value::from_input`].
  fn input(&mut self) -> String;

  /// Clear the host's display surface.
  fn clear(&mut self);

  /// Receive all symbols, sorted by name.
  fn list(&mut self, entries: ListEntries<'_>);
}
