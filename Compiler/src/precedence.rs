use core::tokens::TokenKind;

use crate::Compiler;

/// Operator-precedence ladder, low to high. `Call`/`Primary` exist because
/// the ladder is the standard Pratt-parser one even though this grammar's
/// `primary` production never needs to parse past `Unary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Precedence {
  None,
  Assignment,
  Or,
  And,
  Equality,
  Comparison,
  Term,
  Factor,
  Unary,
  Call,
  Primary,
}

impl Precedence {
  /// One level higher; used to parse a binary operator's right operand so
  /// that equal-precedence operators associate left.
  pub fn next(self) -> Precedence {
    match self {
      Precedence::None => Precedence::Assignment,
      Precedence::Assignment => Precedence::Or,
      Precedence::Or => Precedence::And,
      Precedence::And => Precedence::Equality,
      Precedence::Equality => Precedence::Comparison,
      Precedence::Comparison => Precedence::Term,
      Precedence::Term => Precedence::Factor,
      Precedence::Factor => Precedence::Unary,
      Precedence::Unary => Precedence::Call,
      Precedence::Call => Precedence::Primary,
      Precedence::Primary => Precedence::Primary,
    }
  }
}

/// A parse function, dispatched through enum variants rather than raw
/// function pointers so the rule table stays `'static` and trivially
/// copyable.
#[derive(Debug, Clone, Copy)]
pub enum ParseFn {
  Number,
  StringLit,
  Literal,
  Grouping,
  Unary,
  Binary,
}

#[derive(Debug, Clone, Copy)]
pub struct ParseRule {
  pub prefix: Option<ParseFn>,
  pub infix: Option<ParseFn>,
  pub precedence: Precedence,
}

const fn rule(prefix: Option<ParseFn>, infix: Option<ParseFn>, precedence: Precedence) -> ParseRule {
  ParseRule { prefix, infix, precedence }
}

/// The Pratt table: every token kind maps to its prefix rule, infix rule,
/// and the precedence at which it binds as an infix operator.
pub fn get_rule(kind: TokenKind) -> ParseRule {
  use ParseFn::*;
  use Precedence as P;
  match kind {
    TokenKind::LeftParen => rule(Some(Grouping), None, P::None),
    TokenKind::Minus => rule(Some(Unary), Some(Binary), P::Term),
    TokenKind::Plus => rule(None, Some(Binary), P::Term),
    TokenKind::Star | TokenKind::Slash | TokenKind::Percent => rule(None, Some(Binary), P::Factor),
    TokenKind::Bang => rule(Some(Unary), None, P::None),
    TokenKind::BangEqual | TokenKind::EqualEqual => rule(None, Some(Binary), P::Equality),
    TokenKind::Less | TokenKind::LessEqual | TokenKind::Greater | TokenKind::GreaterEqual => {
      rule(None, Some(Binary), P::Comparison)
    }
    TokenKind::Number => rule(Some(Number), None, P::None),
    TokenKind::Str => rule(Some(StringLit), None, P::None),
    TokenKind::True | TokenKind::False | TokenKind::Nil => rule(Some(Literal), None, P::None),
    _ => rule(None, None, P::None),
  }
}

impl<'src> Compiler<'src> {
  pub(crate) fn dispatch(&mut self, f: ParseFn) {
    match f {
      ParseFn::Number => self.number(),
      ParseFn::StringLit => self.string_literal(),
      ParseFn::Literal => self.literal(),
      ParseFn::Grouping => self.grouping(),
      ParseFn::Unary => self.unary(),
      ParseFn::Binary => self.binary(),
    }
  }
}
