//! `parseLine`/`parseStatement`/assignment/`FOR`/`NEXT` (`spec.md` §4.5,
//! §4.6).

use crate::error::{Error, Result};
use crate::stacks::LoopFrame;
use crate::token::TokenKind;
use crate::value::{self, Value};

use super::Executor;

impl Executor {
  fn cmp_error(&self, what: &str, err: crate::error::ValueError) -> Error {
    Error::BadComparison {
      line: self.current_line_number(),
      token: self.token_cursor,
      what: what.to_string(),
      reason: err.to_string(),
    }
  }

  /// If the current token is flagged as a label, consume it (it's a pure
  /// target, already indexed by the label pre-pass), then parse the
  /// statement.
  pub(super) fn parse_line(&mut self) -> Result<()> {
    if self.current()?.is_label {
      self.bump()?;
    }
    self.parse_statement()
  }

  pub(super) fn parse_statement(&mut self) -> Result<()> {
    let kind = self.current()?.kind;
    match kind {
      TokenKind::Let => {
        self.bump()?;
        self.parse_assignment()
      }
      TokenKind::Identifier => self.parse_assignment(),
      TokenKind::Print => self.parse_print(),
      TokenKind::If => self.parse_if(),
      TokenKind::Input => self.parse_input(),
      TokenKind::Goto => {
        self.bump()?;
        self.parse_jump()
      }
      TokenKind::Gosub => {
        let return_pc = self.current_line_number();
        self.bump()?;
        self.gosub_stack.push(return_pc);
        self.parse_jump()
      }
      TokenKind::Return => self.parse_return(),
      TokenKind::For => self.parse_for(),
      TokenKind::Next => self.parse_next(),
      TokenKind::Clear => {
        self.bump()?;
        self.delegate.clear();
        self.expect(TokenKind::Newline).map(|_| ())
      }
      TokenKind::List => {
        self.bump()?;
        let entries: Vec<(String, String)> = self
          .symbols
          .list_sorted()
          .into_iter()
          .map(|(k, v)| (k.clone(), v.to_display_string()))
          .collect();
        self.delegate.list(&entries);
        self.expect(TokenKind::Newline).map(|_| ())
      }
      TokenKind::Rem => self.skip_to_newline(),
      TokenKind::Newline => self.bump().map(|_| ()),
      TokenKind::End => {
        self.bump()?;
        self.pc = self.lines.len() as isize;
        self.running.store(false, std::sync::atomic::Ordering::SeqCst);
        Ok(())
      }
      _ => Err(Error::BadStatement {
        line: self.current_line_number(),
        token: self.token_cursor,
        reason: format!("unexpected {} at start of statement", kind.name()),
      }),
    }
  }

  /// Consume every remaining token on the line, including the trailing
  /// newline. Used by `REM`, which ignores the rest of its line verbatim.
  fn skip_to_newline(&mut self) -> Result<()> {
    loop {
      let tok = self.bump()?;
      if tok.kind == TokenKind::Newline {
        return Ok(());
      }
    }
  }

  /// `PRINT`: evaluate an expression list, concatenating display strings
  /// with no implicit separator (commas just chain more expressions).
  fn parse_print(&mut self) -> Result<()> {
    self.bump()?;
    let mut out = String::new();
    loop {
      let value = self.parse_expression()?;
      out.push_str(&value.to_display_string());
      if self.is_current(TokenKind::Comma) {
        self.bump()?;
        continue;
      }
      break;
    }
    out.push('\n');
    self.delegate.print(&out);
    self.expect(TokenKind::Newline)?;
    Ok(())
  }

  /// `IF lhs REL rhs THEN stmt` — the rest of the line is discarded when
  /// the relation is false.
  fn parse_if(&mut self) -> Result<()> {
    self.bump()?;
    let lhs = self.parse_expression()?;
    let op = self.current()?.kind;
    if !op.is_relation() {
      return Err(Error::UnexpectedToken {
        line: self.current_line_number(),
        token: self.token_cursor,
        expected: "relation operator",
        actual: op.name(),
      });
    }
    self.bump()?;
    let rhs = self.parse_expression()?;

    let taken = match op {
      TokenKind::Eq => value::eq(&lhs, &rhs).map_err(|e| self.cmp_error("==", e))?,
      TokenKind::Neq => value::ne(&lhs, &rhs).map_err(|e| self.cmp_error("!=", e))?,
      TokenKind::Lt => value::lt(&lhs, &rhs).map_err(|e| self.cmp_error("<", e))?,
      TokenKind::Gt => value::gt(&lhs, &rhs).map_err(|e| self.cmp_error(">", e))?,
      TokenKind::Le => value::le(&lhs, &rhs).map_err(|e| self.cmp_error("<=", e))?,
      TokenKind::Ge => value::ge(&lhs, &rhs).map_err(|e| self.cmp_error(">=", e))?,
      _ => unreachable!("checked is_relation above"),
    };

    if taken {
      self.expect(TokenKind::Then)?;
      self.parse_statement()
    } else {
      self.skip_to_newline()
    }
  }

  /// `INPUT a, b, ...`: read one delegate line per name, auto-detecting
  /// its `Value`.
  fn parse_input(&mut self) -> Result<()> {
    self.bump()?;
    loop {
      let name_tok = self.expect(TokenKind::Identifier)?;
      let text = self.delegate.input();
      self.symbols.insert(name_tok.raw, Value::from_input(&text));
      if self.is_current(TokenKind::Comma) {
        self.bump()?;
        continue;
      }
      break;
    }
    self.expect(TokenKind::Newline)?;
    Ok(())
  }

  /// `RETURN`: pop the gosub stack; PC becomes the gosub line itself, so
  /// the run-loop's PC-increment lands on the line *after* the call.
  fn parse_return(&mut self) -> Result<()> {
    self.bump()?;
    let target = self.gosub_stack.pop().ok_or_else(|| Error::CannotReturn {
      line: self.current_line_number(),
      token: self.token_cursor,
    })?;
    self.pc = target as isize;
    self.expect(TokenKind::Newline)?;
    Ok(())
  }

  /// `FOR name IN lower TO upper`: `lower`/`upper` must be `Int`, with
  /// `lower < upper`.
  fn parse_for(&mut self) -> Result<()> {
    let start_line = self.current_line_number();
    self.bump()?;
    let name_tok = self.expect(TokenKind::Identifier)?;
    self.expect(TokenKind::In)?;
    let lower = self.parse_expression()?;
    let lower = lower.to_int().ok_or_else(|| Error::BadRangeBound {
      line: self.current_line_number(),
      token: self.token_cursor,
    })?;
    self.expect(TokenKind::To)?;
    let upper = self.parse_expression()?;
    let upper = upper.to_int().ok_or_else(|| Error::BadRangeBound {
      line: self.current_line_number(),
      token: self.token_cursor,
    })?;
    if lower >= upper {
      return Err(Error::BadRangeBound {
        line: self.current_line_number(),
        token: self.token_cursor,
      });
    }
    self.expect(TokenKind::Newline)?;

    self.symbols.insert(name_tok.raw.clone(), Value::Int(lower));
    self.for_stack.push(LoopFrame {
      index_name: name_tok.raw,
      lower,
      upper_exclusive: upper,
      start_line,
    });
    Ok(())
  }

  /// `NEXT`: does not name the index; the loop frame is matched purely
  /// positionally by the top of the for-stack (`spec.md` §9 Open Question:
  /// nested `FOR` with reused index names is undefined).
  fn parse_next(&mut self) -> Result<()> {
    self.bump()?;
    self.expect(TokenKind::Newline)?;

    let frame = self.for_stack.top().cloned().ok_or_else(|| Error::CannotIterate {
      line: self.current_line_number(),
      token: self.token_cursor,
    })?;

    let current = self.symbols.get(&frame.index_name).and_then(Value::to_int).ok_or_else(|| {
      Error::BadIndex { line: self.current_line_number(), token: self.token_cursor }
    })?;
    let next = current + 1;
    self.symbols.insert(frame.index_name.clone(), Value::Int(next));

    if next < frame.upper_exclusive {
      self.pc = frame.start_line as isize;
    } else {
      self.for_stack.pop();
    }
    Ok(())
  }

  /// Read an identifier name, optionally followed by a `[key]` subscript,
  /// then an assignment operator and an RHS expression (`spec.md` §4.6).
  fn parse_assignment(&mut self) -> Result<()> {
    let name_tok = self.expect(TokenKind::Identifier)?;

    let subscript_key = if self.is_current(TokenKind::LBracket) {
      self.bump()?;
      let key = self.parse_expression()?;
      self.expect(TokenKind::RBracket)?;
      Some(key)
    } else {
      None
    };

    let op = self.current()?.kind;
    if !op.is_assignment() {
      return Err(Error::UnexpectedToken {
        line: self.current_line_number(),
        token: self.token_cursor,
        expected: "assignment operator",
        actual: op.name(),
      });
    }
    self.bump()?;
    let rhs = self.parse_expression()?;

    match subscript_key {
      None => self.assign_plain(&name_tok.raw, op, rhs)?,
      Some(key) => self.assign_subscripted(&name_tok.raw, key, op, rhs)?,
    }

    self.expect(TokenKind::Newline)?;
    Ok(())
  }

  fn apply_compound(&self, op: TokenKind, old: &Value, rhs: &Value) -> Result<Value> {
    let result = match op {
      TokenKind::Assign => rhs.clone(),
      TokenKind::PlusAssign => value::add(old, rhs).map_err(|e| self.math_error_pub("+=", e))?,
      TokenKind::MinusAssign => value::sub(old, rhs).map_err(|e| self.math_error_pub("-=", e))?,
      TokenKind::StarAssign => value::mul(old, rhs).map_err(|e| self.math_error_pub("*=", e))?,
      TokenKind::SlashAssign => value::div(old, rhs).map_err(|e| self.math_error_pub("/=", e))?,
      TokenKind::PercentAssign => {
        value::rem(old, rhs).map_err(|e| self.math_error_pub("%=", e))?
      }
      _ => unreachable!("checked is_assignment before calling"),
    };
    Ok(result)
  }

  fn math_error_pub(&self, op_text: &str, err: crate::error::ValueError) -> Error {
    if matches!(err, crate::error::ValueError::Overflow { .. }) {
      return Error::IntegerOverOrUnderflow {
        line: self.current_line_number(),
        token: self.token_cursor,
        operation: op_text.to_string(),
      };
    }
    Error::BadMath {
      line: self.current_line_number(),
      token: self.token_cursor,
      operation_text: op_text.to_string(),
      reason: err.to_string(),
    }
  }

  /// Plain assignment stores the RHS directly; compound forms fetch the
  /// old value (failing if absent) and apply the corresponding operator.
  fn assign_plain(&mut self, name: &str, op: TokenKind, rhs: Value) -> Result<()> {
    let new_value = if op == TokenKind::Assign {
      rhs
    } else {
      let old = self.symbols.get(name).cloned().ok_or_else(|| Error::UninitializedSymbol {
        line: self.current_line_number(),
        token: self.token_cursor,
        name: name.to_string(),
      })?;
      self.apply_compound(op, &old, &rhs)?
    };
    self.symbols.insert(name.to_string(), new_value);
    Ok(())
  }

  /// `name[key] <op> rhs` (`spec.md` §4.6): `=` on an undefined name
  /// creates a new `Dict` with that single entry; compound forms on an
  /// undefined name fail. On an existing `Dict`, the assignment applies to
  /// that entry. On an existing `Str`, subscript-assignment is an explicit
  /// non-goal (§1) and fails `unknown-symbol-error`. Anything else fails
  /// `cannot-subscript`.
  fn assign_subscripted(&mut self, name: &str, key: Value, op: TokenKind, rhs: Value) -> Result<()> {
    match self.symbols.get(name).cloned() {
      None => {
        if op != TokenKind::Assign {
          return Err(Error::UninitializedSymbol {
            line: self.current_line_number(),
            token: self.token_cursor,
            name: name.to_string(),
          });
        }
        let mut dict = crate::value::Dict::new();
        dict.insert(key, rhs);
        self.symbols.insert(name.to_string(), Value::Dict(dict));
        Ok(())
      }
      Some(Value::Dict(mut dict)) => {
        let new_value = if op == TokenKind::Assign {
          rhs
        } else {
          let old = dict.get(&key).cloned().ok_or_else(|| Error::UninitializedSymbol {
            line: self.current_line_number(),
            token: self.token_cursor,
            name: format!("{name}[{}]", key.to_display_string()),
          })?;
          self.apply_compound(op, &old, &rhs)?
        };
        dict.insert(key, new_value);
        self.symbols.insert(name.to_string(), Value::Dict(dict));
        Ok(())
      }
      Some(Value::Str(_)) => Err(Error::UnknownSymbolError {
        line: self.current_line_number(),
        token: self.token_cursor,
        reason: "string-mutation through subscript is not supported".to_string(),
      }),
      Some(_) => Err(Error::CannotSubscript {
        line: self.current_line_number(),
        token: self.token_cursor,
      }),
    }
  }
}
