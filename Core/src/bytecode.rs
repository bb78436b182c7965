use num_derive::{FromPrimitive, ToPrimitive};

/// The set of instructions supported by the virtual machine.
///
/// **NOTE:** the declaration order doubles as the `u8` encoding; do not
/// reorder variants without also bumping the bytecode format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
#[repr(u8)]
pub enum OpCode {
  Return,
  Constant,
  ConstantLong,
  Nil,
  True,
  False,
  Pop,
  Print,
  Negate,
  Not,
  Add,
  Subtract,
  Multiply,
  Divide,
  Modulo,
  Equal,
  NotEqual,
  Less,
  LessEqual,
  Greater,
  GreaterEqual,
}

impl OpCode {
  /// Total encoded width in bytes (opcode byte plus operand bytes), per §4.5.
  pub fn width(self) -> usize {
    match self {
      OpCode::Constant => 2,
      OpCode::ConstantLong => 3,
      _ => 1,
    }
  }
}
