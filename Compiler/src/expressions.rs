use std::rc::Rc;

use core::bytecode::OpCode;
use core::errors::CompileErrorKind;
use core::tokens::TokenKind;
use core::value::{ObjectString, Value};

use crate::precedence::Precedence;
use crate::Compiler;

impl<'src> Compiler<'src> {
  pub(crate) fn expression(&mut self) {
    self.parse_precedence(Precedence::Assignment);
  }

  pub(crate) fn number(&mut self) {
    let line = self.previous.line;
    let value: f64 = self.previous.lexeme.parse().expect("lexer only emits valid digit sequences");
    self.emit_constant(Value::Number(value), line);
  }

  pub(crate) fn string_literal(&mut self) {
    let line = self.previous.line;
    let value = Value::Object(Rc::new(ObjectString::new(self.previous.lexeme)));
    self.emit_constant(value, line);
  }

  pub(crate) fn literal(&mut self) {
    let line = self.previous.line;
    let op = match self.previous.kind {
      TokenKind::True => OpCode::True,
      TokenKind::False => OpCode::False,
      TokenKind::Nil => OpCode::Nil,
      _ => unreachable!("get_rule only routes true/false/nil here"),
    };
    self.chunk.append_instruction(op, line);
  }

  pub(crate) fn grouping(&mut self) {
    self.expression();
    self.consume(TokenKind::RightParen, CompileErrorKind::ExpectedRightParen);
  }

  pub(crate) fn unary(&mut self) {
    let operator = self.previous.kind;
    let line = self.previous.line;
    self.parse_precedence(Precedence::Unary);
    let op = match operator {
      TokenKind::Minus => OpCode::Negate,
      TokenKind::Bang => OpCode::Not,
      _ => unreachable!("get_rule only routes -/! here"),
    };
    self.chunk.append_instruction(op, line);
  }

  /// Compiles a binary expression: the left operand is already on the
  /// chunk by the time this runs (it was the prefix/earlier-infix result);
  /// parse the right operand one precedence level higher so equal-precedence
  /// chains associate left.
  pub(crate) fn binary(&mut self) {
    let operator = self.previous.kind;
    let line = self.previous.line;
    let rule = crate::precedence::get_rule(operator);
    self.parse_precedence(rule.precedence.next());

    let op = match operator {
      TokenKind::Plus => OpCode::Add,
      TokenKind::Minus => OpCode::Subtract,
      TokenKind::Star => OpCode::Multiply,
      TokenKind::Slash => OpCode::Divide,
      TokenKind::Percent => OpCode::Modulo,
      TokenKind::EqualEqual => OpCode::Equal,
      TokenKind::BangEqual => OpCode::NotEqual,
      TokenKind::Less => OpCode::Less,
      TokenKind::LessEqual => OpCode::LessEqual,
      TokenKind::Greater => OpCode::Greater,
      TokenKind::GreaterEqual => OpCode::GreaterEqual,
      _ => unreachable!("get_rule only routes binary operators here"),
    };
    self.chunk.append_instruction(op, line);
  }

  fn emit_constant(&mut self, value: Value, line: u32) {
    if self.chunk.append_constant_instruction(value, line).is_err() {
      let tok = self.previous;
      self.report_semantic(tok, CompileErrorKind::ConstantPoolOverflow);
    }
  }
}
