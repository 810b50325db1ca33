//! Error taxonomy (`spec.md` §7).
//!
//! Every variant carries the `line` it occurred on, and where meaningful a
//! `token` cursor index within that line, so a caller can resolve a
//! [`span::Span`] and build a [`diag::Report`] via [`Error::report`].

use crate::value::Value;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum Error {
  #[error("line {line}: expected {expected}, found {actual}")]
  UnexpectedToken {
    line: usize,
    token: usize,
    expected: &'static str,
    actual: &'static str,
  },

  #[error("line {line}: bad factor: {reason}")]
  BadFactor { line: usize, token: usize, reason: String },

  #[error("line {line}: bad statement: {reason}")]
  BadStatement { line: usize, token: usize, reason: String },

  #[error("no delegate set")]
  DelegateNotSet,

  #[error("line {line}: symbol {name:?} is not initialized")]
  UninitializedSymbol { line: usize, token: usize, name: String },

  #[error("line {line}: unknown label {desired_label:?}")]
  UnknownLabel { line: usize, token: usize, desired_label: String },

  #[error("line {line}: bad math in {operation_text}: {reason}")]
  BadMath { line: usize, token: usize, operation_text: String, reason: String },

  #[error("line {line}: bad comparison ({what}): {reason}")]
  BadComparison { line: usize, token: usize, what: String, reason: String },

  #[error("line {line}: integer overflow in {operation}")]
  IntegerOverOrUnderflow { line: usize, token: usize, operation: String },

  #[error("line {line}: cannot subscript this value")]
  CannotSubscript { line: usize, token: usize },

  #[error("line {line}: bad subscript")]
  BadSubscript { line: usize, token: usize },

  #[error("line {line}: bad argument to {name}: {reason}")]
  BadFunctionArgument { line: usize, token: usize, name: String, reason: String },

  #[error("line {line}: RETURN with no matching GOSUB")]
  CannotReturn { line: usize, token: usize },

  #[error("line {line}: NEXT with no matching FOR")]
  CannotIterate { line: usize, token: usize },

  #[error("line {line}: loop index is no longer an integer")]
  BadIndex { line: usize, token: usize },

  #[error("line {line}: FOR requires lower bound < upper bound")]
  BadRangeBound { line: usize, token: usize },

  #[error("internal error: {reason}")]
  InternalDowncastError { reason: String },

  #[error("line {line}: {reason}")]
  UnknownSymbolError { line: usize, token: usize, reason: String },

  /// Internal only: raised by token consumption once `running` has been
  /// cleared by an external `endProgram()`. The run-loop catches this
  /// variant and terminates without surfacing it to the caller.
  #[error("program ended manually")]
  ProgramEndedManually,

  #[error("{method}: {reason}")]
  UnknownError { method: &'static str, reason: String },
}

impl Error {
  pub fn line(&self) -> Option<usize> {
    use Error::*;
    match self {
      UnexpectedToken { line, .. }
      | BadFactor { line, .. }
      | BadStatement { line, .. }
      | UninitializedSymbol { line, .. }
      | UnknownLabel { line, .. }
      | BadMath { line, .. }
      | BadComparison { line, .. }
      | IntegerOverOrUnderflow { line, .. }
      | CannotSubscript { line, .. }
      | BadSubscript { line, .. }
      | BadFunctionArgument { line, .. }
      | CannotReturn { line, .. }
      | CannotIterate { line, .. }
      | BadIndex { line, .. }
      | BadRangeBound { line, .. }
      | UnknownSymbolError { line, .. } => Some(*line),
      DelegateNotSet | InternalDowncastError { .. } | ProgramEndedManually | UnknownError { .. } => None,
    }
  }

  /// `true` for the sentinel variant the run-loop swallows rather than
  /// propagates (`spec.md` §5, §7).
  pub fn is_cancellation(&self) -> bool {
    matches!(self, Error::ProgramEndedManually)
  }

  /// Render a source-anchored, human-facing diagnostic. `line_offsets[i]`
  /// must be the absolute byte offset at which line `i` starts.
  pub fn report<'a>(&self, source: &'a str, line_offsets: &[usize]) -> diag::Report<'a> {
    let message = self.to_string();
    let span: span::Span = self
      .line()
      .and_then(|line| line_offsets.get(line))
      .map(|&start| (start..(start + 1)).into())
      .unwrap_or_else(|| (0..0).into());
    diag::Report::error()
      .source(diag::Source::string(source))
      .message(message)
      .span(span)
      .build()
  }
}

/// Errors produced by [`crate::value::Value`] operators, before they are
/// translated into executor-level [`Error`]s at `run()` (`spec.md` §7's
/// propagation policy). Kept separate so the value layer has no notion of
/// line/token position.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueError {
  CannotOperate { op: &'static str, lhs: Value, rhs: Value },
  DivisionByZero { op: &'static str },
  NegativeRepeat,
  Overflow { op: &'static str },
  BadComparison { what: &'static str },
  RequiresInt { context: &'static str },
  WrongType { context: &'static str, expected: &'static str },
}

impl std::fmt::Display for ValueError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ValueError::CannotOperate { op, lhs, rhs } => {
        write!(f, "cannot {op} {lhs:?} and {rhs:?}")
      }
      ValueError::DivisionByZero { op } => write!(f, "division by zero in {op}"),
      ValueError::NegativeRepeat => write!(f, "string repeat count must be non-negative"),
      ValueError::Overflow { op } => write!(f, "integer overflow in {op}"),
      ValueError::BadComparison { what } => write!(f, "cannot compare {what}"),
      ValueError::RequiresInt { context } => write!(f, "{context} requires an integer"),
      ValueError::WrongType { context, expected } => write!(f, "{context} requires a {expected}"),
    }
  }
}
