//! `GOTO`/`GOSUB`/`RETURN` target resolution (`spec.md` §4.8).

use crate::error::{Error, Result};
use crate::token::TokenKind;

use super::Executor;

impl Executor {
  /// If the current token is an identifier, resolve it directly against
  /// the identifier label map (it names a label, not a variable — jump
  /// targets are never evaluated as expressions). Otherwise parse an
  /// expression; its result must be `Int`; resolve against the integer
  /// label map. Either way, sets `pc = target - 1` so the run-loop's
  /// increment lands on `target`.
  pub(super) fn parse_jump(&mut self) -> Result<()> {
    if self.is_current(TokenKind::Identifier) {
      let tok = self.bump()?;
      let target = self.labels.get_identifier(&tok.raw).ok_or_else(|| Error::UnknownLabel {
        line: self.current_line_number(),
        token: self.token_cursor,
        desired_label: tok.raw.clone(),
      })?;
      self.pc = target as isize - 1;
      return Ok(());
    }

    let value = self.parse_expression()?;
    let label = value.to_int().ok_or_else(|| Error::BadStatement {
      line: self.current_line_number(),
      token: self.token_cursor,
      reason: "GOTO/GOSUB target must be an integer or identifier label".to_string(),
    })?;
    let target = self.labels.get_integer(label).ok_or_else(|| Error::UnknownLabel {
      line: self.current_line_number(),
      token: self.token_cursor,
      desired_label: label.to_string(),
    })?;
    self.pc = target as isize - 1;
    Ok(())
  }
}
