use std::io::Write;
use std::rc::Rc;

use compiler::{compile, CompileStatus};
use core::errors::render_runtime_error;
use core::value::{ObjectString, Value};
use core::INITIAL_STACK_CAPACITY;

mod arithmetic;
mod run;

/// The status the interpreter façade reports to its caller, per `spec.md`
/// §4.6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterStatus {
  Success,
  CompilerFailure,
  CompilerUnexpectedEof,
  VmFailure,
}

/// The stack machine: an operand stack and the registry of heap-allocated
/// strings reachable through it. `objects` stands in for the intrusive
/// singly-linked object list the original VM roots at itself — a `Vec` of
/// owned `Rc`s gives the same O(1)-registration, O(n)-walk-at-drop
/// properties without raw pointers.
pub struct Vm {
  stack: Vec<Value>,
  objects: Vec<Rc<ObjectString>>,
}

impl Default for Vm {
  fn default() -> Self {
    Vm::new()
  }
}

impl Vm {
  pub fn new() -> Self {
    Vm { stack: Vec::with_capacity(INITIAL_STACK_CAPACITY), objects: Vec::new() }
  }

  pub(crate) fn push(&mut self, value: Value) {
    self.stack.push(value);
  }

  pub(crate) fn pop(&mut self) -> Value {
    self.stack.pop().expect("compiler emits only balanced bytecode")
  }

  pub(crate) fn peek(&self, distance: usize) -> &Value {
    &self.stack[self.stack.len() - 1 - distance]
  }

  pub(crate) fn register(&mut self, value: &Value) {
    if let Value::Object(obj) = value {
      self.objects.push(Rc::clone(obj));
    }
  }
}

/// Orchestrates compile-then-execute and maps component statuses to a
/// single `InterpreterStatus`. The VM instance persists across calls so a
/// REPL-style caller can keep accumulating heap objects between lines.
pub struct Interpreter {
  vm: Vm,
  filename: String,
}

impl Interpreter {
  pub fn new(filename: impl Into<String>) -> Self {
    Interpreter { vm: Vm::new(), filename: filename.into() }
  }

  pub fn interpret(&mut self, source: &str, stdout: &mut dyn Write, stderr: &mut dyn Write) -> InterpreterStatus {
    let outcome = compile(source);

    for diagnostic in &outcome.diagnostics {
      let _ = write!(stderr, "{}", diagnostic.render(&self.filename));
    }

    match outcome.status {
      CompileStatus::Failure => InterpreterStatus::CompilerFailure,
      CompileStatus::UnexpectedEof => InterpreterStatus::CompilerUnexpectedEof,
      CompileStatus::Success => match self.vm.run(&outcome.chunk, &self.filename, stdout, stderr) {
        Ok(()) => InterpreterStatus::Success,
        Err(()) => InterpreterStatus::VmFailure,
      },
    }
  }
}

pub(crate) fn write_runtime_error(stderr: &mut dyn Write, filename: &str, line: u32, message: &str) {
  let _ = write!(stderr, "{}", render_runtime_error(filename, line, message));
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run_source(src: &str) -> (InterpreterStatus, String, String) {
    let mut interp = Interpreter::new("test.cla");
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = interp.interpret(src, &mut stdout, &mut stderr);
    (status, String::from_utf8(stdout).unwrap(), String::from_utf8(stderr).unwrap())
  }

  #[test]
  fn simple_addition_leaves_stack_empty() {
    let (status, out, err) = run_source("1 + 2;");
    assert_eq!(status, InterpreterStatus::Success);
    assert_eq!(out, "");
    assert_eq!(err, "");
  }

  #[test]
  fn print_writes_to_output_sink() {
    let (status, out, _) = run_source("print 5;");
    assert_eq!(status, InterpreterStatus::Success);
    assert_eq!(out, "5\n");
  }

  #[test]
  fn division_by_zero_is_vm_failure() {
    let (status, _, err) = run_source("5 / 0;");
    assert_eq!(status, InterpreterStatus::VmFailure);
    assert_eq!(err, "[EXECUTION_ERROR] - test.cla:1 - Illegal division by zero\n");
  }

  #[test]
  fn operand_type_error_message() {
    let (status, _, err) = run_source("nil + 1;");
    assert_eq!(status, InterpreterStatus::VmFailure);
    assert_eq!(
      err,
      "[EXECUTION_ERROR] - test.cla:1 - Expected addition operands to be numbers (got 'nil' and 'number')\n"
    );
  }

  #[test]
  fn negate_preserves_signed_zero() {
    let (status, out, _) = run_source("print -0;");
    assert_eq!(status, InterpreterStatus::Success);
    assert_eq!(out, "-0\n");
  }

  #[test]
  fn vm_state_persists_object_registry_across_calls() {
    let mut interp = Interpreter::new("test.cla");
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    interp.interpret("print \"a\";", &mut stdout, &mut stderr);
    interp.interpret("print \"b\";", &mut stdout, &mut stderr);
    assert_eq!(interp.vm.objects.len(), 2);
  }
}
