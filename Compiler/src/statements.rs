use core::bytecode::OpCode;
use core::errors::CompileErrorKind;
use core::tokens::TokenKind;

use crate::Compiler;

impl<'src> Compiler<'src> {
  pub(crate) fn statement(&mut self) {
    if self.matches(TokenKind::Print) {
      self.print_statement();
    } else {
      self.expr_statement();
    }

    if self.is_in_panic {
      self.synchronize();
    }
  }

  fn print_statement(&mut self) {
    self.expression();
    self.consume(TokenKind::Semicolon, CompileErrorKind::ExpectedSemicolonAfterPrint);
    self.chunk.append_instruction(OpCode::Print, self.previous.line);
  }

  fn expr_statement(&mut self) {
    self.expression();
    self.consume(TokenKind::Semicolon, CompileErrorKind::ExpectedSemicolonAfterExpr);
    self.chunk.append_instruction(OpCode::Pop, self.previous.line);
  }

  /// Discards tokens until a statement boundary — a semicolon or the first
  /// token of a statement-starting keyword — so one syntax error doesn't
  /// cascade into unrelated follow-on errors.
  pub(crate) fn synchronize(&mut self) {
    self.is_in_panic = false;

    while self.current.kind != TokenKind::Eof {
      if self.previous.kind == TokenKind::Semicolon {
        return;
      }

      match self.current.kind {
        TokenKind::Class
        | TokenKind::Fun
        | TokenKind::Var
        | TokenKind::For
        | TokenKind::If
        | TokenKind::While
        | TokenKind::Print
        | TokenKind::Return => return,
        _ => {}
      }

      self.advance();
    }
  }
}
