use std::io::{self, ErrorKind};
use std::{fs, process};

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;

use virtual_machine::{Interpreter, InterpreterStatus};

/// A one-shot file runner for CLA programs.
#[derive(Parser)]
#[command(name = "cla", version, about = "Runs a CLA source file")]
struct Args {
  /// Path to the `.cla` source file to run.
  path: String,

  /// Print the compiled chunk's instructions to stdout before running.
  #[arg(long)]
  disassemble: bool,
}

fn main() {
  let args = match Args::try_parse() {
    Ok(args) => args,
    Err(error) => {
      let _ = error.print();
      match error.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => process::exit(0),
        _ => process::exit(3),
      }
    }
  };
  simple_logger::init_with_env().ok();

  let source = read_file(&args.path);

  if args.disassemble {
    let outcome = compiler::compile(&source);
    print!("{}", outcome.chunk.disassemble(&args.path));
  }

  let mut interpreter = Interpreter::new(args.path.clone());
  let stdout = io::stdout();
  let stderr = io::stderr();
  let mut stdout = stdout.lock();
  let mut stderr = stderr.lock();
  let status = interpreter.interpret(&source, &mut stdout, &mut stderr);

  process::exit(exit_code(status));
}

fn exit_code(status: InterpreterStatus) -> i32 {
  match status {
    InterpreterStatus::Success => 0,
    InterpreterStatus::CompilerFailure => 1,
    InterpreterStatus::CompilerUnexpectedEof => 1,
    InterpreterStatus::VmFailure => 2,
  }
}

fn read_file(path: &str) -> String {
  match fs::read_to_string(path) {
    Ok(source) => source,
    Err(error) => {
      match error.kind() {
        ErrorKind::NotFound => eprintln!("File '{}' not found.", path),
        ErrorKind::PermissionDenied => eprintln!("Need permission to open '{}'.", path),
        _ => eprintln!("Unexpected error when opening '{}': {}", path, error),
      }
      process::exit(5);
    }
  }
}
