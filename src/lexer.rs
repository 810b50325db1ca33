//! String → 2-D token array (`spec.md` §4.2).
//!
//! Hand-written rather than built on `logos` (as the teacher's own lexer
//! is) because emoji detection needs grapheme-aware lookahead and the
//! `pi`/`π` raw-text fold happens after a token's text is already sliced;
//! neither fits `logos`'s regex/DFA token table. The `Lexer` still keeps
//! the teacher's overall shape: a struct that owns the source and walks it
//! once, producing `Token`s lazily consumed by `bump`/`current`.

mod emoji;

use unicode_segmentation::UnicodeSegmentation;

use crate::token::{self, Token, TokenKind};

/// Tokenize `source` into one `Vec<Token>` per physical line (split on
/// `\n`; empty lines preserved so later error line numbers match the
/// source), each ending with a `Newline` token.
pub fn lex(source: &str) -> Vec<Vec<Token>> {
  let mut lines = Vec::new();
  let mut line_start = 0usize;

  for line_text in source.split('\n') {
    lines.push(lex_line(line_text, line_start));
    line_start += line_text.len() + 1;
  }

  lines
}

fn lex_line(line: &str, line_start: usize) -> Vec<Token> {
  let mut tokens = Vec::new();
  let graphemes: Vec<(usize, &str)> = line.grapheme_indices(true).collect();
  let mut i = 0usize;

  while i < graphemes.len() {
    let (byte_offset, g) = graphemes[i];
    let c = g.chars().next().unwrap();

    if c.is_whitespace() && g.chars().count() == 1 {
      i += 1;
      continue;
    }

    if token::is_quote_char(c) {
      let (token, next) = lex_string(line, &graphemes, i, line_start);
      tokens.push(token);
      i = next;
      continue;
    }

    if is_separator_char(c) {
      tokens.push(separator_token(c, line_start + byte_offset));
      i += 1;
      continue;
    }

    if is_general_start(g) {
      let (token, next) = lex_general(line, &graphemes, i, line_start);
      tokens.push(token);
      i = next;
      continue;
    }

    if is_operator_char(c) {
      let (token, next) = lex_operator(line, &graphemes, i, line_start);
      tokens.push(token);
      i = next;
      continue;
    }

    // Stray character outside every recognized class: emit it as a single
    // unclassifiable token so downstream parsing sees *something* at this
    // position rather than silently vanishing.
    let end = byte_offset + g.len();
    tokens.push(Token::new(
      TokenKind::Unknown,
      g,
      line_start + byte_offset..line_start + end,
    ));
    i += 1;
  }

  let end = line_start + line.len();
  tokens.push(Token::new(TokenKind::Newline, "\n", end..end));
  tokens
}

fn is_general_start(g: &str) -> bool {
  if emoji::is_emoji(g) {
    return true;
  }
  let mut chars = g.chars();
  match (chars.next(), chars.next()) {
    (Some(c), None) => c.is_alphabetic() || c.is_ascii_digit() || c == '_' || c == '.',
    _ => false,
  }
}

fn is_operator_char(c: char) -> bool {
  matches!(c, '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '|' | '^' | '&')
}

fn is_separator_char(c: char) -> bool {
  matches!(c, ';' | ',' | '(' | ')' | '{' | '}' | '[' | ']')
}

fn separator_token(c: char, start: usize) -> Token {
  let kind = match c {
    ';' => TokenKind::Semicolon,
    ',' => TokenKind::Comma,
    '(' => TokenKind::LParen,
    ')' => TokenKind::RParen,
    '{' => TokenKind::LBrace,
    '}' => TokenKind::RBrace,
    '[' => TokenKind::LBracket,
    ']' => TokenKind::RBracket,
    _ => unreachable!("not a separator character"),
  };
  Token::new(kind, c.to_string(), start..start + c.len_utf8())
}

/// Extend a general token (letter/digit/underscore/emoji/`.`-started) while
/// the next grapheme is in the same class, then classify the accumulated
/// text (§4.3).
fn lex_general(
  line: &str,
  graphemes: &[(usize, &str)],
  start_idx: usize,
  line_start: usize,
) -> (Token, usize) {
  let start_byte = graphemes[start_idx].0;
  let mut end_idx = start_idx + 1;
  while end_idx < graphemes.len() && is_general_start(graphemes[end_idx].1) {
    end_idx += 1;
  }
  let end_byte = if end_idx < graphemes.len() {
    graphemes[end_idx].0
  } else {
    line.len()
  };
  let raw = &line[start_byte..end_byte];
  let span = line_start + start_byte..line_start + end_byte;
  (classify_general(raw, span), end_idx)
}

fn classify_general(raw: &str, span: std::ops::Range<usize>) -> Token {
  let lower = raw.to_lowercase();

  if token::is_pi_constant(&lower) {
    return Token::new(TokenKind::DoubleLiteral, token::pi_literal(), span);
  }
  if let Some(kind) = token::keyword(&lower) {
    return Token::new(kind, raw.to_string(), span);
  }
  if raw.parse::<i64>().is_ok() {
    return Token::new(TokenKind::IntegerLiteral, raw.to_string(), span);
  }
  if raw.parse::<f64>().is_ok() {
    return Token::new(TokenKind::DoubleLiteral, raw.to_string(), span);
  }
  if raw.chars().next().map(token::is_quote_char).unwrap_or(false)
    && raw.chars().last().map(token::is_quote_char).unwrap_or(false)
  {
    return Token::new(TokenKind::StringLiteral, raw.to_string(), span);
  }

  Token::new(TokenKind::Identifier, raw.to_string(), span)
}

/// Extend an operator token while the next grapheme is also a (single
/// scalar) operator character, fusing adjacent operator characters into
/// one token exactly as `spec.md` §4.2 documents — including the `a=-b`
/// vs `a-=b` gotcha.
fn lex_operator(
  line: &str,
  graphemes: &[(usize, &str)],
  start_idx: usize,
  line_start: usize,
) -> (Token, usize) {
  let start_byte = graphemes[start_idx].0;
  let mut end_idx = start_idx + 1;
  while end_idx < graphemes.len() {
    let g = graphemes[end_idx].1;
    let mut chars = g.chars();
    match (chars.next(), chars.next()) {
      (Some(c), None) if is_operator_char(c) => end_idx += 1,
      _ => break,
    }
  }
  let end_byte = if end_idx < graphemes.len() {
    graphemes[end_idx].0
  } else {
    line.len()
  };
  let raw = &line[start_byte..end_byte];
  let span = line_start + start_byte..line_start + end_byte;
  let kind = token::operator(raw).unwrap_or(TokenKind::Unknown);
  (Token::new(kind, raw.to_string(), span), end_idx)
}

/// Extend a string literal: starts with a quote character, extends through
/// (and includes) the next quote character anywhere after it, regardless of
/// whether the two quote characters match in style (§4.2).
fn lex_string(
  line: &str,
  graphemes: &[(usize, &str)],
  start_idx: usize,
  line_start: usize,
) -> (Token, usize) {
  let start_byte = graphemes[start_idx].0;
  let mut end_idx = start_idx + 1;
  while end_idx < graphemes.len() {
    let g = graphemes[end_idx].1;
    let closed = g.chars().count() == 1 && token::is_quote_char(g.chars().next().unwrap());
    end_idx += 1;
    if closed {
      break;
    }
  }
  let end_byte = if end_idx < graphemes.len() {
    graphemes[end_idx].0
  } else {
    line.len()
  };
  let raw = &line[start_byte..end_byte];
  let span = line_start + start_byte..line_start + end_byte;
  (Token::new(TokenKind::StringLiteral, raw.to_string(), span), end_idx)
}

#[cfg(test)]
mod tests;
