use std::fmt;

use thiserror::Error;

/// Static-error categories; each renders under a different diagnostic tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileErrorKind {
  #[error("Expected expression")]
  ExpectedExpression,
  #[error("Expected expression at '{0}'")]
  ExpectedExpressionAt(String),
  #[error("Expected ';' terminating expression statement")]
  ExpectedSemicolonAfterExpr,
  #[error("Expected ';' terminating print statement")]
  ExpectedSemicolonAfterPrint,
  #[error("Expected ')' after expression")]
  ExpectedRightParen,
  #[error("Exceeded chunk constant pool limit")]
  ConstantPoolOverflow,
  /// A lexer error token surfaced as-is; its lexeme already is the message
  /// (`"Unterminated string literal"`, `"Unexpected character"`, ...).
  #[error("{0}")]
  Lexical(String),
}

/// Runtime-error categories produced by the virtual machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeErrorKind {
  #[error("Illegal division by zero")]
  DivisionByZero,
  #[error("Illegal modulo by zero")]
  ModuloByZero,
  #[error("{0}")]
  OperandType(String),
}

/// Builds the `"Expected <descriptor> operand(s) to be number(s) (got ...)"`
/// message: the binary form lists both operand types joined by `and`, the
/// unary (negation) form names a single operand type.
pub fn operand_type_message(descriptor: &str, a_type: &str, b_type: Option<&str>) -> String {
  match b_type {
    Some(b) => format!("Expected {} operands to be numbers (got '{}' and '{}')", descriptor, a_type, b),
    None => format!("Expected {} operand to be number (got '{}')", descriptor, a_type),
  }
}

/// Chunk-level failure: kept distinct from `CompileErrorKind` since `Chunk`
/// has no notion of source position; the compiler wraps this into a
/// `Diagnostic` at the call site where it knows the current line/column.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChunkError {
  #[error("Exceeded chunk constant pool limit")]
  ConstantPoolOverflow,
}

/// The tag prefixing a compile-time diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticTag {
  Lexical,
  Syntax,
  Semantic,
}

impl fmt::Display for DiagnosticTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let tag = match self {
      DiagnosticTag::Lexical => "[LEXICAL_ERROR]",
      DiagnosticTag::Syntax => "[SYNTAX_ERROR]",
      DiagnosticTag::Semantic => "[SEMANTIC_ERROR]",
    };
    write!(f, "{}", tag)
  }
}

/// A single static diagnostic, positioned at the token that produced it.
/// Rendered to the line-oriented wire format `spec.md` §6 defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
  pub tag: DiagnosticTag,
  pub line: u32,
  pub column: u32,
  pub message: String,
}

impl Diagnostic {
  pub fn new(tag: DiagnosticTag, line: u32, column: u32, message: impl Into<String>) -> Self {
    Diagnostic { tag, line, column, message: message.into() }
  }

  pub fn render(&self, file: &str) -> String {
    format!("{} - {}:{}:{} - {}\n", self.tag, file, self.line, self.column, self.message)
  }
}

/// Renders a runtime diagnostic: `"[EXECUTION_ERROR] - <file>:<line> - <message>\n"`.
pub fn render_runtime_error(file: &str, line: u32, message: &str) -> String {
  format!("[EXECUTION_ERROR] - {}:{} - {}\n", file, line, message)
}

/// Renders an internal-inconsistency diagnostic, printed just before abort.
pub fn render_internal_error(file: &str, build_line: u32, message: &str) -> String {
  format!("[ERROR_INTERNAL] - {}:{} - {}\n", file, build_line, message)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn compile_diagnostic_format() {
    let d = Diagnostic::new(DiagnosticTag::Lexical, 1, 1, "Unexpected character");
    assert_eq!(d.render("main.cla"), "[LEXICAL_ERROR] - main.cla:1:1 - Unexpected character\n");
  }

  #[test]
  fn runtime_diagnostic_format() {
    assert_eq!(
      render_runtime_error("main.cla", 1, "Illegal division by zero"),
      "[EXECUTION_ERROR] - main.cla:1 - Illegal division by zero\n"
    );
  }

  #[test]
  fn operand_type_message_binary_vs_unary() {
    assert_eq!(
      operand_type_message("addition", "nil", Some("number")),
      "Expected addition operands to be numbers (got 'nil' and 'number')"
    );
    assert_eq!(
      operand_type_message("negation", "bool", None),
      "Expected negation operand to be number (got 'bool')"
    );
  }
}
