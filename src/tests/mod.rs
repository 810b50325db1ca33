//! Integration-level tests over the full [`crate::Executor`] pipeline,
//! grouped by subsystem the way the teacher's own `src/tests/*.rs`
//! (`loops.rs`, `strings.rs`, ...) are, each built on the shared harness in
//! `common`. Unit tests closer to a single module (lexer char-classing,
//! diagnostics snippet extraction) stay alongside that module instead.

#[macro_use]
pub(crate) mod common;

mod dict;
mod diagnostics;
mod loops;
mod strings;
