use core::tokens::{keyword_kind, Token, TokenKind};

mod lex_numbers;
mod lex_strings;

/// Stateful cursor over a source string, producing one token per call to
/// `next_token`. Tokens are ephemeral and own nothing: lexemes are slices
/// into `source`, so a `Lexer<'src>` and every `Token` it returns share the
/// source buffer's lifetime.
pub struct Lexer<'src> {
  source: &'src str,
  start: usize,
  current: usize,
  line: u32,
  column: u32,
}

impl<'src> Lexer<'src> {
  pub fn new(source: &'src str) -> Self {
    Lexer { source, start: 0, current: 0, line: 1, column: 1 }
  }

  /// Produces the next token. After source end, repeatedly returns an EOF
  /// token positioned one column past the last consumed character.
  pub fn next_token(&mut self) -> Token<'src> {
    self.skip_whitespace_and_comments();
    self.start = self.current;
    let line = self.line;
    let column = self.column;

    if self.is_at_end() {
      return Token::new(TokenKind::Eof, "EOF", line, column);
    }

    let c = self.advance();

    if is_ident_start(c) {
      return self.identifier(line, column);
    }
    if c.is_ascii_digit() {
      return self.number(line, column);
    }

    match c {
      '"' => self.string(line, column),
      '+' => self.make_token(TokenKind::Plus, line, column),
      '-' => self.make_token(TokenKind::Minus, line, column),
      '*' => self.make_token(TokenKind::Star, line, column),
      '/' => self.make_token(TokenKind::Slash, line, column),
      '%' => self.make_token(TokenKind::Percent, line, column),
      '.' => self.make_token(TokenKind::Dot, line, column),
      ',' => self.make_token(TokenKind::Comma, line, column),
      ':' => self.make_token(TokenKind::Colon, line, column),
      ';' => self.make_token(TokenKind::Semicolon, line, column),
      '?' => self.make_token(TokenKind::Question, line, column),
      '(' => self.make_token(TokenKind::LeftParen, line, column),
      ')' => self.make_token(TokenKind::RightParen, line, column),
      '{' => self.make_token(TokenKind::LeftBrace, line, column),
      '}' => self.make_token(TokenKind::RightBrace, line, column),
      '!' => {
        let kind = if self.matches('=') { TokenKind::BangEqual } else { TokenKind::Bang };
        self.make_token(kind, line, column)
      }
      '<' => {
        let kind = if self.matches('=') { TokenKind::LessEqual } else { TokenKind::Less };
        self.make_token(kind, line, column)
      }
      '=' => {
        let kind = if self.matches('=') { TokenKind::EqualEqual } else { TokenKind::Equal };
        self.make_token(kind, line, column)
      }
      '>' => {
        let kind = if self.matches('=') { TokenKind::GreaterEqual } else { TokenKind::Greater };
        self.make_token(kind, line, column)
      }
      _ => self.error_token("Unexpected character", line, column),
    }
  }

  pub(crate) fn is_at_end(&self) -> bool {
    self.current >= self.source.len()
  }

  pub(crate) fn peek(&self) -> char {
    self.source[self.current..].chars().next().unwrap_or('\0')
  }

  pub(crate) fn peek_next(&self) -> char {
    let mut chars = self.source[self.current..].chars();
    chars.next();
    chars.next().unwrap_or('\0')
  }

  /// Consumes and returns the current character, tracking line/column:
  /// `\n` advances the line and resets the column to 1.
  pub(crate) fn advance(&mut self) -> char {
    let c = self.peek();
    self.current += c.len_utf8();
    if c == '\n' {
      self.line += 1;
      self.column = 1;
    } else {
      self.column += 1;
    }
    c
  }

  pub(crate) fn matches(&mut self, expected: char) -> bool {
    if self.peek() != expected {
      return false;
    }
    self.advance();
    true
  }

  fn skip_whitespace_and_comments(&mut self) {
    loop {
      match self.peek() {
        ' ' | '\t' | '\r' | '\x0c' | '\x0b' | '\n' => {
          self.advance();
        }
        '#' => {
          while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
          }
        }
        _ => break,
      }
    }
  }

  pub(crate) fn make_token(&self, kind: TokenKind, line: u32, column: u32) -> Token<'src> {
    Token::new(kind, &self.source[self.start..self.current], line, column)
  }

  pub(crate) fn error_token(&self, message: &'static str, line: u32, column: u32) -> Token<'src> {
    Token::new(TokenKind::Error, message, line, column)
  }

  fn identifier(&mut self, line: u32, column: u32) -> Token<'src> {
    while is_ident_continue(self.peek()) {
      self.advance();
    }
    let lexeme = &self.source[self.start..self.current];
    let kind = keyword_kind(lexeme).unwrap_or(TokenKind::Identifier);
    self.make_token(kind, line, column)
  }
}

fn is_ident_start(c: char) -> bool {
  c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
  c.is_alphanumeric() || c == '_'
}
