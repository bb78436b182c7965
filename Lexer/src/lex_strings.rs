use core::tokens::{Token, TokenKind};

use crate::Lexer;

impl<'src> Lexer<'src> {
  /// Lexes a string literal. The opening quote has already been consumed
  /// by the caller. Embedded newlines are permitted and advance the line
  /// counter; running off the end of source before a closing quote is an
  /// error.
  pub(super) fn string(&mut self, line: u32, column: u32) -> Token<'src> {
    while self.peek() != '"' && !self.is_at_end() {
      self.advance();
    }

    if self.is_at_end() {
      return self.error_token("Unterminated string literal", line, column);
    }

    self.advance();
    Token::new(TokenKind::Str, &self.source[self.start + 1..self.current - 1], line, column)
  }
}
