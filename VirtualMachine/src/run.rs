use std::io::Write;

use core::bytecode::OpCode;
use core::chunk::Chunk;
use core::errors::{render_internal_error, RuntimeErrorKind};
use core::value::Value;

use crate::{write_runtime_error, Vm};

impl Vm {
  /// Executes `chunk` to completion. One iteration: optional debug trace,
  /// fetch one opcode byte, dispatch. Returns `Err(())` on a runtime error;
  /// the diagnostic has already been written to `stderr` by the time this
  /// returns.
  pub fn run(&mut self, chunk: &Chunk, filename: &str, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<(), ()> {
    let mut ip = 0usize;

    loop {
      let offset = ip;

      log::trace!("stack: {:?}", self.stack);

      let op = match chunk.opcode_at(offset) {
        Some(op) => op,
        None => {
          let _ = write!(stderr, "{}", render_internal_error(file!(), line!(), "unknown opcode"));
          return Err(());
        }
      };
      ip += 1;

      let result = match op {
        OpCode::Return => return Ok(()),
        OpCode::Constant => {
          let index = chunk.code()[ip] as usize;
          ip += 1;
          self.load_constant(chunk, index);
          Ok(())
        }
        OpCode::ConstantLong => {
          let lo = chunk.code()[ip];
          let hi = chunk.code()[ip + 1];
          ip += 2;
          let index = u16::from_le_bytes([lo, hi]) as usize;
          self.load_constant(chunk, index);
          Ok(())
        }
        OpCode::Nil => {
          self.push(Value::Nil);
          Ok(())
        }
        OpCode::True => {
          self.push(Value::Bool(true));
          Ok(())
        }
        OpCode::False => {
          self.push(Value::Bool(false));
          Ok(())
        }
        OpCode::Pop => {
          self.pop();
          Ok(())
        }
        OpCode::Print => {
          let value = self.pop();
          let _ = writeln!(stdout, "{}", value);
          Ok(())
        }
        OpCode::Negate => self.negate(),
        OpCode::Not => {
          let value = self.pop();
          self.push(Value::Bool(!value.is_truthy()));
          Ok(())
        }
        OpCode::Add | OpCode::Subtract | OpCode::Multiply | OpCode::Divide | OpCode::Modulo => self.arithmetic(op),
        OpCode::Equal => {
          let b = self.pop();
          let a = self.pop();
          self.push(Value::Bool(a.values_equal(&b)));
          Ok(())
        }
        OpCode::NotEqual => {
          let b = self.pop();
          let a = self.pop();
          self.push(Value::Bool(!a.values_equal(&b)));
          Ok(())
        }
        OpCode::Less | OpCode::LessEqual | OpCode::Greater | OpCode::GreaterEqual => self.comparison(op),
      };

      if let Err(kind) = result {
        let line = chunk.line_of_instruction(offset);
        write_runtime_error(stderr, filename, line, &runtime_error_message(&kind));
        return Err(());
      }
    }
  }

  fn load_constant(&mut self, chunk: &Chunk, index: usize) {
    let value = chunk.constants()[index].clone();
    self.register(&value);
    self.push(value);
  }
}

fn runtime_error_message(kind: &RuntimeErrorKind) -> String {
  kind.to_string()
}
