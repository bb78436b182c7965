use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

struct Fixture {
  path: std::path::PathBuf,
}

impl Fixture {
  fn new(name: &str, source: &str) -> Self {
    let path = std::env::temp_dir().join(format!("cla_cli_test_{}_{}.cla", name, std::process::id()));
    fs::write(&path, source).unwrap();
    Fixture { path }
  }
}

impl Drop for Fixture {
  fn drop(&mut self) {
    let _ = fs::remove_file(&self.path);
  }
}

#[test]
fn successful_program_exits_zero_and_prints_to_stdout() {
  let fixture = Fixture::new("success", "print 1 + 2;");
  let mut cmd = Command::cargo_bin("cla").unwrap();
  cmd.arg(&fixture.path);
  cmd.assert().success().stdout(predicate::eq("3\n"));
}

#[test]
fn compiler_failure_exits_one_and_reports_lexical_error() {
  let fixture = Fixture::new("lexical", "@");
  let mut cmd = Command::cargo_bin("cla").unwrap();
  cmd.arg(&fixture.path);
  cmd.assert().code(1).stderr(predicate::str::contains("[LEXICAL_ERROR]"));
}

#[test]
fn incomplete_expression_exits_one_as_unexpected_eof() {
  let fixture = Fixture::new("eof", "1 +");
  let mut cmd = Command::cargo_bin("cla").unwrap();
  cmd.arg(&fixture.path);
  cmd.assert().code(1).stderr(predicate::str::contains("[SYNTAX_ERROR]"));
}

#[test]
fn runtime_failure_exits_two_and_reports_execution_error() {
  let fixture = Fixture::new("runtime", "5 / 0;");
  let mut cmd = Command::cargo_bin("cla").unwrap();
  cmd.arg(&fixture.path);
  cmd.assert().code(2).stderr(predicate::str::contains("[EXECUTION_ERROR]"));
}

#[test]
fn missing_file_exits_five() {
  let mut cmd = Command::cargo_bin("cla").unwrap();
  cmd.arg("/no/such/path/definitely_missing.cla");
  cmd.assert().code(5);
}

#[test]
fn missing_positional_argument_exits_three() {
  let mut cmd = Command::cargo_bin("cla").unwrap();
  cmd.assert().failure().code(3);
}

#[test]
fn disassemble_flag_prints_chunk_before_running() {
  let fixture = Fixture::new("disasm", "print 1 + 2;");
  let mut cmd = Command::cargo_bin("cla").unwrap();
  cmd.arg("--disassemble").arg(&fixture.path);
  cmd.assert().success().stdout(predicate::str::contains("==")).stdout(predicate::str::contains("3\n"));
}
