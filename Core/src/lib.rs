pub mod bytecode;
pub mod chunk;
pub mod errors;
pub mod tokens;
pub mod value;

/// The initial operand-stack capacity the virtual machine reserves (§6).
pub const INITIAL_STACK_CAPACITY: usize = 256;
