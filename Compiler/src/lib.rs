use core::bytecode::OpCode;
use core::chunk::Chunk;
use core::errors::{CompileErrorKind, Diagnostic, DiagnosticTag};
use core::tokens::{Token, TokenKind};
use lexer::Lexer;

mod expressions;
mod precedence;
mod statements;

use precedence::Precedence;

/// The outcome of a compile pass, per `spec.md` §4.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
  Success,
  Failure,
  UnexpectedEof,
}

pub struct CompileOutcome {
  pub chunk: Chunk,
  pub status: CompileStatus,
  pub diagnostics: Vec<Diagnostic>,
}

/// Single-pass Pratt compiler: consumes tokens from a `Lexer` and emits
/// bytecode directly into a `Chunk`, with no intermediate AST.
pub struct Compiler<'src> {
  lexer: Lexer<'src>,
  previous: Token<'src>,
  current: Token<'src>,
  had_error: bool,
  is_in_panic: bool,
  hit_eof_during_error: bool,
  chunk: Chunk,
  diagnostics: Vec<Diagnostic>,
}

const SENTINEL: Token<'static> = Token { kind: TokenKind::Eof, lexeme: "", line: 0, column: 0 };

/// Compiles `source` into a chunk, in a single left-to-right pass.
pub fn compile(source: &str) -> CompileOutcome {
  let mut compiler = Compiler {
    lexer: Lexer::new(source),
    previous: SENTINEL,
    current: SENTINEL,
    had_error: false,
    is_in_panic: false,
    hit_eof_during_error: false,
    chunk: Chunk::new(),
    diagnostics: Vec::new(),
  };

  compiler.advance();

  // A source with no tokens at all (possibly after skipping only leading
  // whitespace/comments) is the REPL's "give me more input" case: no
  // diagnostic is warranted. This is distinct from reaching EOF while
  // already reporting an error (e.g. a lone lexical error on otherwise
  // empty source), which is a real `Failure`.
  if compiler.current.kind == TokenKind::Eof && !compiler.had_error {
    return CompileOutcome { chunk: compiler.chunk, status: CompileStatus::UnexpectedEof, diagnostics: compiler.diagnostics };
  }

  while !compiler.check(TokenKind::Eof) {
    compiler.statement();
  }

  let return_line = compiler.previous.line;
  compiler.chunk.append_instruction(OpCode::Return, return_line);

  let status = if compiler.had_error {
    if compiler.hit_eof_during_error {
      CompileStatus::UnexpectedEof
    } else {
      CompileStatus::Failure
    }
  } else {
    CompileStatus::Success
  };

  CompileOutcome { chunk: compiler.chunk, status, diagnostics: compiler.diagnostics }
}

impl<'src> Compiler<'src> {
  fn check(&self, kind: TokenKind) -> bool {
    self.current.kind == kind
  }

  fn matches(&mut self, kind: TokenKind) -> bool {
    if self.check(kind) {
      self.advance();
      true
    } else {
      false
    }
  }

  /// Advances to the next non-error token. Error tokens from the lexer are
  /// translated into `[LEXICAL_ERROR]` diagnostics and skipped.
  fn advance(&mut self) {
    self.previous = self.current;
    loop {
      self.current = self.lexer.next_token();
      if self.current.kind != TokenKind::Error {
        break;
      }
      let message = self.current.lexeme.to_string();
      self.report_syntactic(self.current, CompileErrorKind::Lexical(message));
    }
  }

  fn consume(&mut self, kind: TokenKind, error: CompileErrorKind) {
    if self.check(kind) {
      self.advance();
    } else {
      self.error_at_current(error);
    }
  }

  fn error_at_current(&mut self, kind: CompileErrorKind) {
    self.report_syntactic(self.current, kind);
  }

  fn error_at_previous(&mut self, kind: CompileErrorKind) {
    self.report_syntactic(self.previous, kind);
  }

  /// Reports a lexical or syntactic error. Suppressed while already in
  /// panic mode, so one bad token doesn't cascade into a wall of errors.
  fn report_syntactic(&mut self, tok: Token<'src>, kind: CompileErrorKind) {
    if self.is_in_panic {
      return;
    }
    self.is_in_panic = true;
    self.had_error = true;
    if tok.kind == TokenKind::Eof {
      self.hit_eof_during_error = true;
    }
    let tag = match &kind {
      CompileErrorKind::Lexical(_) => DiagnosticTag::Lexical,
      _ => DiagnosticTag::Syntax,
    };
    self.diagnostics.push(Diagnostic::new(tag, tok.line, tok.column, kind.to_string()));
  }

  /// Reports a semantic error. Unlike syntactic errors, these do not enter
  /// panic mode — they surface at emission time, not parse time.
  fn report_semantic(&mut self, tok: Token<'src>, kind: CompileErrorKind) {
    self.had_error = true;
    if tok.kind == TokenKind::Eof {
      self.hit_eof_during_error = true;
    }
    self.diagnostics.push(Diagnostic::new(DiagnosticTag::Semantic, tok.line, tok.column, kind.to_string()));
  }

  fn parse_precedence(&mut self, precedence: Precedence) {
    self.advance();
    match precedence::get_rule(self.previous.kind).prefix {
      Some(f) => self.dispatch(f),
      None => {
        if self.previous.kind == TokenKind::Eof {
          self.error_at_previous(CompileErrorKind::ExpectedExpression);
        } else {
          self.error_at_previous(CompileErrorKind::ExpectedExpressionAt(self.previous.lexeme.to_string()));
        }
        return;
      }
    }

    while precedence <= precedence::get_rule(self.current.kind).precedence {
      self.advance();
      if let Some(f) = precedence::get_rule(self.previous.kind).infix {
        self.dispatch(f);
      }
    }
  }
}
