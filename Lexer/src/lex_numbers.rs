use core::tokens::{Token, TokenKind};

use crate::Lexer;

impl<'src> Lexer<'src> {
  /// Lexes a number literal: one or more digits, optionally followed by a
  /// `.` and one or more digits. A trailing `.` with no digits after it is
  /// left unconsumed, so `5.` lexes as `NUMBER` then `DOT`.
  pub(super) fn number(&mut self, line: u32, column: u32) -> Token<'src> {
    while self.peek().is_ascii_digit() {
      self.advance();
    }

    if self.peek() == '.' && self.peek_next().is_ascii_digit() {
      self.advance();
      while self.peek().is_ascii_digit() {
        self.advance();
      }
    }

    self.make_token(TokenKind::Number, line, column)
  }
}
