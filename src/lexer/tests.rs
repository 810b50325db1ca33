use super::*;
use crate::token::TokenKind;

fn kinds(line: &[Token]) -> Vec<TokenKind> {
  line.iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_let_statement() {
  let lines = lex("let x = 10");
  assert_eq!(lines.len(), 1);
  assert_eq!(
    kinds(&lines[0]),
    vec![
      TokenKind::Let,
      TokenKind::Identifier,
      TokenKind::Assign,
      TokenKind::IntegerLiteral,
      TokenKind::Newline,
    ]
  );
}

#[test]
fn preserves_empty_lines() {
  let lines = lex("let x = 1\n\nlet y = 2");
  assert_eq!(lines.len(), 3);
  assert_eq!(kinds(&lines[1]), vec![TokenKind::Newline]);
}

#[test]
fn fuses_compound_assignment_operator() {
  let lines = lex("x += 1");
  assert_eq!(kinds(&lines[0])[1], TokenKind::PlusAssign);
}

#[test]
fn fused_unrecognized_operator_run_is_unknown() {
  // `=-` isn't a registered compound operator, distinct from `-=`.
  let lines = lex("x =- 1");
  assert_eq!(kinds(&lines[0])[1], TokenKind::Unknown);
}

#[test]
fn distinguishes_minus_assign_from_assign_minus() {
  let lines = lex("x -= 1");
  assert_eq!(kinds(&lines[0])[1], TokenKind::MinusAssign);
}

#[test]
fn folds_pi_keyword_to_double_literal() {
  let lines = lex("let c = pi");
  let token = &lines[0][3];
  assert_eq!(token.kind, TokenKind::DoubleLiteral);
  assert_eq!(token.raw, format!("{}", std::f64::consts::PI));
}

#[test]
fn folds_pi_symbol_to_double_literal() {
  let lines = lex("let c = π");
  let token = &lines[0][3];
  assert_eq!(token.kind, TokenKind::DoubleLiteral);
}

#[test]
fn string_literal_spans_to_next_quote_of_any_style() {
  let lines = lex("print \u{201c}hello\u{201d}");
  let token = &lines[0][1];
  assert_eq!(token.kind, TokenKind::StringLiteral);
  assert_eq!(token.string_value(), "hello");
}

#[test]
fn string_literal_allows_mismatched_quote_styles() {
  let lines = lex("print \"hi«");
  let token = &lines[0][1];
  assert_eq!(token.kind, TokenKind::StringLiteral);
  assert_eq!(token.string_value(), "hi");
}

#[test]
fn emoji_and_underscore_join_an_identifier() {
  let lines = lex("let go🌀 = 1");
  assert_eq!(kinds(&lines[0])[1], TokenKind::Identifier);
  assert_eq!(lines[0][1].raw, "go🌀");
}

#[test]
fn keywords_are_case_insensitive() {
  let lines = lex("PRINT 1");
  assert_eq!(kinds(&lines[0])[0], TokenKind::Print);
}

#[test]
fn separators_are_single_char_tokens() {
  let lines = lex("a[1]");
  assert_eq!(
    kinds(&lines[0]),
    vec![
      TokenKind::Identifier,
      TokenKind::LBracket,
      TokenKind::IntegerLiteral,
      TokenKind::RBracket,
      TokenKind::Newline,
    ]
  );
}

#[test]
fn float_literal_is_classified() {
  let lines = lex("let x = 3.5");
  assert_eq!(kinds(&lines[0])[3], TokenKind::DoubleLiteral);
}

#[test]
fn spans_are_absolute_into_whole_source() {
  let lines = lex("let a = 1\nlet b = 2");
  let second_line_let = &lines[1][0];
  assert_eq!(second_line_let.raw, "let");
  assert_eq!(&"let a = 1\nlet b = 2"[second_line_let.span.range()], "let");
  assert!(second_line_let.span.start > 0);
}
