use crate::vm::{self, CompileError};

fn compile(program: &str) -> Result<(), CompileError> {
    vm::compile(program.as_bytes()).map(|_| ())
}

fn unbalanced(bracket: char, offset: usize) -> Result<(), CompileError> {
    Err(CompileError::UnbalancedLoop { bracket, offset })
}

#[test]
fn lone_closer() {
    assert_eq!(unbalanced(']', 0), compile("]"));
}

#[test]
fn lone_opener() {
    assert_eq!(unbalanced('[', 0), compile("["));
}

#[test]
fn closer_before_opener() {
    assert_eq!(unbalanced(']', 0), compile("]["));
}

#[test]
fn extra_closer_after_balanced_loop() {
    assert_eq!(unbalanced(']', 8), compile("+[->+<]-]"));
}

#[test]
fn unclosed_outer_loop() {
    assert_eq!(
        unbalanced('[', 0),
        compile("[ outer loop never closes\n  [-]\n")
    );
}

#[test]
fn unclosed_inner_loop_reports_innermost() {
    assert_eq!(unbalanced('[', 2), compile("[+[-"));
}

#[test]
fn closer_inside_comment_still_counts() {
    assert_eq!(unbalanced(']', 14), compile("+ this is fine] really"));
}

#[test]
fn balanced_programs_compile() {
    assert_eq!(Ok(()), compile("[]"));
    assert_eq!(Ok(()), compile("[[]][][[[]]]"));
    assert_eq!(Ok(()), compile("no brackets here, just text."));
}

#[test]
fn failed_compilation_produces_no_output() {
    let mut output: Vec<u8> = Vec::new();
    let result = vm::run_source(b"+++.[", &mut (), &mut output);

    assert!(matches!(result, Err(vm::Error::Compile(_))));
    assert!(output.is_empty());
}
