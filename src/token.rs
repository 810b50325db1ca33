//! Token kinds and the `Token` type produced by the lexer.

use std::f64::consts::PI;

use span::Span;

/// A single lexical token: its classified `kind`, the exact source text it
/// was built from (`raw`), and the byte `span` it occupies in the original
/// source string.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
  pub kind: TokenKind,
  pub raw: String,
  pub span: Span,
  /// Set by the label-indexing pre-pass (§4.4) when this token is the
  /// first token on its line and is a jump target rather than part of an
  /// expression/assignment.
  pub is_label: bool,
}

impl Token {
  pub fn new(kind: TokenKind, raw: impl Into<String>, span: impl Into<Span>) -> Self {
    Token {
      kind,
      raw: raw.into(),
      span: span.into(),
      is_label: false,
    }
  }

  pub fn is(&self, kind: TokenKind) -> bool {
    self.kind == kind
  }

  /// The inner slice of a quoted string literal's raw text (quotes
  /// stripped). Panics if this token is not a `StringLiteral`.
  pub fn string_value(&self) -> &str {
    assert_eq!(self.kind, TokenKind::StringLiteral);
    let mut chars = self.raw.char_indices();
    let (_, first) = chars.next().expect("string literal is never empty");
    let last_start = self.raw.char_indices().last().map(|(i, _)| i).unwrap();
    debug_assert!(first.len_utf8() > 0);
    &self.raw[first.len_utf8()..last_start]
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
  Identifier,

  // Keywords
  Print,
  If,
  Then,
  Input,
  Let,
  Goto,
  Gosub,
  Return,
  Clear,
  List,
  End,
  Rem,
  For,
  In,
  To,
  Next,
  Dict,

  // Built-in function markers
  Sin,
  Cos,
  Tan,
  Sec,
  Csc,
  Cot,
  Asin,
  Acos,
  Atan,
  Rand,
  Len,
  Count,

  // Operators
  Plus,
  Minus,
  Star,
  Slash,
  Percent,
  StarStar,
  ShiftLeft,
  ShiftRight,
  Amp,
  Pipe,
  Caret,

  // Assignment
  Assign,
  PlusAssign,
  MinusAssign,
  StarAssign,
  SlashAssign,
  PercentAssign,

  // Relations
  Eq,
  Neq,
  Lt,
  Gt,
  Le,
  Ge,

  // Separators
  LBracket,
  RBracket,
  LParen,
  RParen,
  LBrace,
  RBrace,
  Comma,
  Semicolon,

  // Literals
  IntegerLiteral,
  DoubleLiteral,
  StringLiteral,

  Newline,

  /// A run of characters the lexer could not classify: either a fused
  /// operator-character sequence with no entry in the multi-character
  /// operator table (`spec.md` §4.2's documented `a=-b` vs `a-=b` gotcha),
  /// or a stray character outside every recognized class.
  Unknown,
}

impl TokenKind {
  pub fn is_relation(self) -> bool {
    matches!(
      self,
      TokenKind::Eq | TokenKind::Neq | TokenKind::Lt | TokenKind::Gt | TokenKind::Le | TokenKind::Ge
    )
  }

  pub fn is_assignment(self) -> bool {
    matches!(
      self,
      TokenKind::Assign
        | TokenKind::PlusAssign
        | TokenKind::MinusAssign
        | TokenKind::StarAssign
        | TokenKind::SlashAssign
        | TokenKind::PercentAssign
    )
  }

  pub fn name(self) -> &'static str {
    use TokenKind::*;
    match self {
      Identifier => "identifier",
      Print => "print",
      If => "if",
      Then => "then",
      Input => "input",
      Let => "let",
      Goto => "goto",
      Gosub => "gosub",
      Return => "return",
      Clear => "clear",
      List => "list",
      End => "end",
      Rem => "rem",
      For => "for",
      In => "in",
      To => "to",
      Next => "next",
      Dict => "dict",
      Sin => "sin",
      Cos => "cos",
      Tan => "tan",
      Sec => "sec",
      Csc => "csc",
      Cot => "cot",
      Asin => "asin",
      Acos => "acos",
      Atan => "atan",
      Rand => "rand",
      Len => "len",
      Count => "count",
      Plus => "+",
      Minus => "-",
      Star => "*",
      Slash => "/",
      Percent => "%",
      StarStar => "**",
      ShiftLeft => "<<",
      ShiftRight => ">>",
      Amp => "&",
      Pipe => "|",
      Caret => "^",
      Assign => "=",
      PlusAssign => "+=",
      MinusAssign => "-=",
      StarAssign => "*=",
      SlashAssign => "/=",
      PercentAssign => "%=",
      Eq => "==",
      Neq => "!=",
      Lt => "<",
      Gt => ">",
      Le => "<=",
      Ge => ">=",
      LBracket => "[",
      RBracket => "]",
      LParen => "(",
      RParen => ")",
      LBrace => "{",
      RBrace => "}",
      Comma => ",",
      Semicolon => ";",
      IntegerLiteral => "integer literal",
      DoubleLiteral => "double literal",
      StringLiteral => "string literal",
      Newline => "<newline>",
      Unknown => "<unknown>",
    }
  }
}

/// Fixed, case-insensitive keyword table (§4.3). Only words that can never
/// also be an ordinary identifier go here; `pi`/`π` are handled separately
/// since they fold into a literal rather than a keyword.
pub fn keyword(lowercase: &str) -> Option<TokenKind> {
  use TokenKind::*;
  Some(match lowercase {
    "print" => Print,
    "if" => If,
    "then" => Then,
    "input" => Input,
    "let" => Let,
    "goto" => Goto,
    "gosub" => Gosub,
    "return" => Return,
    "clear" => Clear,
    "list" => List,
    "end" => End,
    "rem" => Rem,
    "for" => For,
    "in" => In,
    "to" => To,
    "next" => Next,
    "dict" => Dict,
    "sin" => Sin,
    "cos" => Cos,
    "tan" => Tan,
    "sec" => Sec,
    "csc" => Csc,
    "cot" => Cot,
    "asin" => Asin,
    "acos" => Acos,
    "atan" => Atan,
    "rand" => Rand,
    "len" => Len,
    "count" => Count,
    _ => return None,
  })
}

/// Multi-character operator table (§4.3): raw operator text to its compound
/// `TokenKind`. Single-character fallbacks are handled by the lexer directly.
pub fn operator(raw: &str) -> Option<TokenKind> {
  use TokenKind::*;
  Some(match raw {
    "+" => Plus,
    "-" => Minus,
    "*" => Star,
    "/" => Slash,
    "%" => Percent,
    "**" => StarStar,
    "<<" => ShiftLeft,
    ">>" => ShiftRight,
    "&" => Amp,
    "|" => Pipe,
    "^" => Caret,
    "=" => Assign,
    "+=" => PlusAssign,
    "-=" => MinusAssign,
    "*=" => StarAssign,
    "/=" => SlashAssign,
    "%=" => PercentAssign,
    "==" => Eq,
    "!=" => Neq,
    "<" => Lt,
    ">" => Gt,
    "<=" => Le,
    ">=" => Ge,
    _ => return None,
  })
}

/// `true` if `text` (already lowercased) is the `pi`/`π` constant, whose raw
/// text the lexer rewrites to the canonical decimal rendering of `PI` before
/// classification (§4.3, §9).
pub fn is_pi_constant(text: &str) -> bool {
  text == "pi" || text == "π"
}

pub fn pi_literal() -> String {
  format!("{PI}")
}

/// `true` if `c` opens or closes a recognized string literal (§4.2): any
/// matching pair from `"…"`, `"…"`, `«…»`, `「…」`.
pub fn is_quote_char(c: char) -> bool {
  matches!(c, '"' | '\u{201c}' | '\u{201d}' | '\u{ab}' | '\u{bb}' | '\u{300c}' | '\u{300d}')
}
