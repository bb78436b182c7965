use core::bytecode::OpCode;
use core::errors::{operand_type_message, RuntimeErrorKind};
use core::value::Value;

use crate::Vm;

fn descriptor_for(op: OpCode) -> &'static str {
  match op {
    OpCode::Add => "addition",
    OpCode::Subtract => "subtraction",
    OpCode::Multiply => "multiplication",
    OpCode::Divide => "division",
    OpCode::Modulo => "modulo",
    OpCode::Less => "less-than",
    OpCode::LessEqual => "less-than-or-equal",
    OpCode::Greater => "greater-than",
    OpCode::GreaterEqual => "greater-than-or-equal",
    _ => unreachable!("descriptor_for only called for binary numeric opcodes"),
  }
}

impl Vm {
  /// Pops the two operands for a binary numeric opcode, in `(left, right)`
  /// order. Fails with the exact operand-type message `spec.md` §4.5 and
  /// §8 specify if either operand isn't a number.
  fn numeric_operands(&mut self, op: OpCode) -> Result<(f64, f64), RuntimeErrorKind> {
    let b = self.pop();
    let a = self.pop();
    match (&a, &b) {
      (Value::Number(x), Value::Number(y)) => Ok((*x, *y)),
      _ => Err(RuntimeErrorKind::OperandType(operand_type_message(descriptor_for(op), a.type_name(), Some(b.type_name())))),
    }
  }

  /// Executes `Add`/`Subtract`/`Multiply`/`Divide`/`Modulo`.
  pub(crate) fn arithmetic(&mut self, op: OpCode) -> Result<(), RuntimeErrorKind> {
    let (a, b) = self.numeric_operands(op)?;
    let result = match op {
      OpCode::Add => a + b,
      OpCode::Subtract => a - b,
      OpCode::Multiply => a * b,
      OpCode::Divide => {
        if b == 0.0 {
          return Err(RuntimeErrorKind::DivisionByZero);
        }
        a / b
      }
      OpCode::Modulo => {
        if b == 0.0 {
          return Err(RuntimeErrorKind::ModuloByZero);
        }
        // `fmod` semantics: the result takes the sign of the dividend.
        a % b
      }
      _ => unreachable!("arithmetic only called for Add/Subtract/Multiply/Divide/Modulo"),
    };
    self.push(Value::Number(result));
    Ok(())
  }

  /// Executes `Less`/`LessEqual`/`Greater`/`GreaterEqual`.
  pub(crate) fn comparison(&mut self, op: OpCode) -> Result<(), RuntimeErrorKind> {
    let (a, b) = self.numeric_operands(op)?;
    let result = match op {
      OpCode::Less => a < b,
      OpCode::LessEqual => a <= b,
      OpCode::Greater => a > b,
      OpCode::GreaterEqual => a >= b,
      _ => unreachable!("comparison only called for Less/LessEqual/Greater/GreaterEqual"),
    };
    self.push(Value::Bool(result));
    Ok(())
  }

  /// Executes `Negate`: the sole unary numeric opcode.
  pub(crate) fn negate(&mut self) -> Result<(), RuntimeErrorKind> {
    let v = self.pop();
    match v {
      Value::Number(n) => {
        self.push(Value::Number(-n));
        Ok(())
      }
      other => Err(RuntimeErrorKind::OperandType(operand_type_message("negation", other.type_name(), None))),
    }
  }
}
