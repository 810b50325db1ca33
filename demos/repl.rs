//! Interactive REPL and one-shot file runner over [`sigil::Executor`].
//!
//! Not part of the core (`spec.md` §1 scopes the host I/O surface out),
//! but wires the same `rustyline`/`clap`/`anyhow` stack the teacher's own
//! `examples/cli/repl.rs` and `cli/src/main.rs` used for its REPL, since
//! neither survived the final trim (see `DESIGN.md`).

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use sigil::delegate::{Delegate, ListEntries};
use sigil::Executor;

/// A small BASIC-dialect interpreter.
#[derive(Debug, Parser)]
#[clap(name = "sigil", version)]
struct App {
  /// Source file to load and run. Starts an interactive REPL when omitted.
  path: Option<PathBuf>,
}

/// Reads `INPUT` from stdin, writes `PRINT`/`LIST` to stdout, and treats
/// `CLEAR` as a literal terminal clear.
struct StdioDelegate;

impl Delegate for StdioDelegate {
  fn print(&mut self, line: &str) {
    print!("{line}");
    let _ = io::stdout().flush();
  }

  fn input(&mut self) -> String {
    print!("? ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line).unwrap_or(0);
    line.trim_end_matches(['\n', '\r']).to_string()
  }

  fn clear(&mut self) {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
  }

  fn list(&mut self, entries: ListEntries<'_>) {
    for (name, value) in entries {
      println!("{name} = {value}");
    }
  }
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .without_time()
    .init();

  let app = App::parse();
  let mut executor = Executor::new(Box::new(StdioDelegate));

  match app.path {
    Some(path) => run_file(&mut executor, &path),
    None => run_repl(&mut executor),
  }
}

fn run_file(executor: &mut Executor, path: &PathBuf) -> anyhow::Result<()> {
  let source = std::fs::read_to_string(path)?;
  executor.load_code(source)?;
  if let Err(e) = executor.run() {
    eprintln!("{e}");
    std::process::exit(1);
  }
  Ok(())
}

fn run_repl(executor: &mut Executor) -> anyhow::Result<()> {
  let mut editor: Editor<()> = Editor::new()?;
  let mut buffer = String::new();

  println!("sigil REPL v{}\nEnter a blank line to run, Ctrl-D to exit", env!("CARGO_PKG_VERSION"));

  loop {
    let prompt = if buffer.is_empty() { "sigil> " } else { "   ... " };
    match editor.readline(prompt) {
      Ok(line) => {
        editor.add_history_entry(line.as_str());
        if line.trim().is_empty() {
          if !buffer.is_empty() {
            eval(executor, &buffer);
            buffer.clear();
          }
          continue;
        }
        buffer.push_str(&line);
        buffer.push('\n');
      }
      Err(ReadlineError::Interrupted) => {
        buffer.clear();
        continue;
      }
      Err(ReadlineError::Eof) => {
        if !buffer.is_empty() {
          eval(executor, &buffer);
        }
        return Ok(());
      }
      Err(e) => return Err(e.into()),
    }
  }
}

fn eval(executor: &mut Executor, source: &str) {
  if let Err(e) = executor.load_code(source) {
    eprintln!("{e}");
    return;
  }
  if let Err(e) = executor.run() {
    eprintln!("{e}");
  }
}
