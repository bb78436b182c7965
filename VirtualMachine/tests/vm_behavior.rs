use virtual_machine::{Interpreter, InterpreterStatus};

fn run(src: &str) -> (InterpreterStatus, String, String) {
  let mut interp = Interpreter::new("main.cla");
  let mut stdout = Vec::new();
  let mut stderr = Vec::new();
  let status = interp.interpret(src, &mut stdout, &mut stderr);
  (status, String::from_utf8(stdout).unwrap(), String::from_utf8(stderr).unwrap())
}

#[test]
fn scenario_1_addition_leaves_empty_stack_no_output() {
  let (status, out, err) = run("1 + 2;");
  assert_eq!(status, InterpreterStatus::Success);
  assert_eq!(out, "");
  assert_eq!(err, "");
}

#[test]
fn scenario_2_grouping_then_multiply() {
  let (status, out, _) = run("print (1 + 2) * 3;");
  assert_eq!(status, InterpreterStatus::Success);
  assert_eq!(out, "9\n");
}

#[test]
fn scenario_3_precedence_without_grouping() {
  let (status, out, _) = run("print 1 + 2 * 3;");
  assert_eq!(status, InterpreterStatus::Success);
  assert_eq!(out, "7\n");
}

#[test]
fn scenario_4_print_writes_to_output_sink() {
  let (status, out, _) = run("print 5;");
  assert_eq!(status, InterpreterStatus::Success);
  assert_eq!(out, "5\n");
}

#[test]
fn scenario_5_division_by_zero() {
  let (status, _, err) = run("5 / 0;");
  assert_eq!(status, InterpreterStatus::VmFailure);
  assert_eq!(err, "[EXECUTION_ERROR] - main.cla:1 - Illegal division by zero\n");
}

#[test]
fn scenario_6_nil_plus_number_operand_type_error() {
  let (status, _, err) = run("nil + 1;");
  assert_eq!(status, InterpreterStatus::VmFailure);
  assert_eq!(
    err,
    "[EXECUTION_ERROR] - main.cla:1 - Expected addition operands to be numbers (got 'nil' and 'number')\n"
  );
}

#[test]
fn scenario_8_unexpected_character_is_compiler_failure() {
  let (status, _, err) = run("@");
  assert_eq!(status, InterpreterStatus::CompilerFailure);
  assert_eq!(err, "[LEXICAL_ERROR] - main.cla:1:1 - Unexpected character\n");
}

#[test]
fn scenario_9_empty_source_is_unexpected_eof_no_diagnostic() {
  let (status, _, err) = run("");
  assert_eq!(status, InterpreterStatus::CompilerUnexpectedEof);
  assert_eq!(err, "");
}

#[test]
fn scenario_9_incomplete_expression_is_unexpected_eof_with_diagnostic() {
  let (status, _, err) = run("1 +");
  assert_eq!(status, InterpreterStatus::CompilerUnexpectedEof);
  assert_eq!(err, "[SYNTAX_ERROR] - main.cla:1:4 - Expected expression\n");
}

#[test]
fn modulo_by_zero_reports_distinct_message() {
  let (status, _, err) = run("5 % 0;");
  assert_eq!(status, InterpreterStatus::VmFailure);
  assert_eq!(err, "[EXECUTION_ERROR] - main.cla:1 - Illegal modulo by zero\n");
}

#[test]
fn modulo_follows_fmod_sign_of_dividend() {
  let (_, out, _) = run("print -5 % 3;");
  assert_eq!(out, "-2\n");
}

#[test]
fn truthiness_only_nil_and_false_are_falsy() {
  let (_, out, _) = run("print !nil; print !false; print !0; print !\"\";");
  assert_eq!(out, "true\ntrue\nfalse\nfalse\n");
}

#[test]
fn equality_is_symmetric_and_cross_type_is_false() {
  let (_, out, _) = run("print 1 == 1; print 1 == \"1\"; print nil == false;");
  assert_eq!(out, "true\nfalse\nfalse\n");
}

#[test]
fn string_values_print_without_quotes() {
  let (_, out, _) = run("print \"hello\";");
  assert_eq!(out, "hello\n");
}

#[test]
fn stack_is_empty_after_a_complete_program() {
  let (status, _, _) = run("1 + 2; print 3 * 4; \"x\" == \"x\";");
  assert_eq!(status, InterpreterStatus::Success);
}
