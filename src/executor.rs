//! `loadCode`/`run`/cancellation and the token-cursor core `spec.md` §4.5
//! builds on; statement dispatch, expression parsing and jump resolution
//! live in the sibling `executor::{stmt, expr, jump}` modules.

mod expr;
mod jump;
mod stmt;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::delegate::Delegate;
use crate::error::{Error, Result};
use crate::label_table::LabelTable;
use crate::lexer;
use crate::stacks::{ForStack, GosubStack};
use crate::symbol_table::SymbolTable;
use crate::token::{Token, TokenKind};

/// A thread-safe handle that lets a caller cancel a running [`Executor`]
/// from another thread (`spec.md` §5 `endProgram()`).
///
/// Clearing `running` alone is sufficient to bound cancellation latency to
/// one token's worth of work (`spec.md` §5): every token consumption checks
/// it via `check_cancelled`, and `run()`'s own loop condition checks it too.
/// There is no separate atomic PC to advance past the end — `self.pc`
/// itself only ever changes on the executor's own thread, and the `running`
/// check stops that thread before it reads `pc` again.
#[derive(Clone)]
pub struct EndHandle {
  running: Arc<AtomicBool>,
}

impl EndHandle {
  /// Atomically clears `running`. The executor observes this at its next
  /// token consumption.
  pub fn end_program(&self) {
    self.running.store(false, Ordering::SeqCst);
  }
}

pub struct Executor {
  lines: Vec<Vec<Token>>,
  line_offsets: Vec<usize>,
  source: String,
  labels: LabelTable,
  symbols: SymbolTable,
  gosub_stack: GosubStack,
  for_stack: ForStack,
  pc: isize,
  token_cursor: usize,
  running: Arc<AtomicBool>,
  delegate: Box<dyn Delegate>,
}

impl Executor {
  pub fn new(delegate: Box<dyn Delegate>) -> Self {
    Executor {
      lines: Vec::new(),
      line_offsets: Vec::new(),
      source: String::new(),
      labels: LabelTable::new(),
      symbols: SymbolTable::new(),
      gosub_stack: GosubStack::new(),
      for_stack: ForStack::new(),
      pc: -1,
      token_cursor: 0,
      running: Arc::new(AtomicBool::new(false)),
      delegate,
    }
  }

  /// A clonable, thread-safe cancellation handle (`spec.md` §5).
  pub fn end_handle(&self) -> EndHandle {
    EndHandle { running: Arc::clone(&self.running) }
  }

  /// Cancel from the same thread/handle without going through
  /// [`EndHandle`]; equivalent to calling it on `self.end_handle()`.
  pub fn end_program(&self) {
    self.end_handle().end_program();
  }

  pub fn running(&self) -> bool {
    self.running.load(Ordering::SeqCst)
  }

  pub fn symbols(&self) -> &SymbolTable {
    &self.symbols
  }

  /// Reset all state, re-lex `source`, and scan labels (`spec.md` §4.5,
  /// §4.4).
  pub fn load_code(&mut self, source: impl Into<String>) -> Result<()> {
    let source = source.into();
    self.line_offsets = line_offsets(&source);
    self.lines = lexer::lex(&source);
    self.source = source;
    self.labels.clear();
    self.symbols.remove_all();
    self.gosub_stack.clear();
    self.for_stack.clear();
    self.pc = -1;
    self.token_cursor = 0;
    self.running.store(false, Ordering::SeqCst);
    self.scan_labels();
    Ok(())
  }

  /// `spec.md` §4.4: mark the first token of a line as a label when it's an
  /// integer literal, or an identifier not immediately followed by an
  /// assignment operator or `[`.
  fn scan_labels(&mut self) {
    for (line_index, line) in self.lines.iter_mut().enumerate() {
      let Some(first) = line.first() else { continue };
      match first.kind {
        TokenKind::IntegerLiteral => {
          if let Ok(label) = first.raw.parse::<i64>() {
            line[0].is_label = true;
            self.labels.insert_integer(label, line_index);
          }
        }
        TokenKind::Identifier => {
          let next_is_assignment_or_subscript = line
            .get(1)
            .map(|t| t.kind.is_assignment() || t.kind == TokenKind::LBracket)
            .unwrap_or(false);
          if !next_is_assignment_or_subscript {
            let name = first.raw.clone();
            line[0].is_label = true;
            self.labels.insert_identifier(name, line_index);
          }
        }
        _ => {}
      }
    }
  }

  /// Execute until natural termination, `END`, or external `endProgram`
  /// (`spec.md` §4.5).
  pub fn run(&mut self) -> Result<()> {
    self.running.store(true, Ordering::SeqCst);
    self.pc = -1;

    while (self.pc as isize) < self.lines.len() as isize - 1 && self.running() {
      self.token_cursor = 0;
      self.pc += 1;
      match self.parse_line() {
        Ok(()) => {}
        Err(e) if e.is_cancellation() => {
          self.running.store(false, Ordering::SeqCst);
          return Ok(());
        }
        Err(e) => {
          self.running.store(false, Ordering::SeqCst);
          return Err(e);
        }
      }
    }

    self.running.store(false, Ordering::SeqCst);
    Ok(())
  }

  fn current_line(&self) -> &[Token] {
    &self.lines[self.pc as usize]
  }

  fn current(&self) -> Result<&Token> {
    self
      .current_line()
      .get(self.token_cursor)
      .ok_or(Error::InternalDowncastError { reason: "token cursor past end of line".into() })
  }

  fn current_line_number(&self) -> usize {
    self.pc.max(0) as usize
  }

  /// Observes cancellation (`spec.md` §5): once `running` is false, every
  /// consumption fails with `ProgramEndedManually`.
  fn check_cancelled(&self) -> Result<()> {
    if !self.running() {
      return Err(Error::ProgramEndedManually);
    }
    Ok(())
  }

  /// Consume and return the current token, advancing the cursor.
  fn bump(&mut self) -> Result<Token> {
    self.check_cancelled()?;
    let tok = self.current()?.clone();
    self.token_cursor += 1;
    Ok(tok)
  }

  /// Consume the current token if it matches `kind`; error otherwise.
  fn expect(&mut self, kind: TokenKind) -> Result<Token> {
    self.check_cancelled()?;
    let current = self.current()?;
    if current.kind != kind {
      return Err(Error::UnexpectedToken {
        line: self.current_line_number(),
        token: self.token_cursor,
        expected: kind.name(),
        actual: current.kind.name(),
      });
    }
    self.bump()
  }

  fn is_current(&self, kind: TokenKind) -> bool {
    self.current().map(|t| t.kind == kind).unwrap_or(false)
  }
}

fn line_offsets(source: &str) -> Vec<usize> {
  let mut offsets = Vec::new();
  let mut offset = 0usize;
  for line in source.split('\n') {
    offsets.push(offset);
    offset += line.len() + 1;
  }
  offsets
}
