mod bad_programs;
mod programs;

use crate::io::Line;
use crate::vm::{self, ExecutionError};

/// Runs `program` twice, as source and as a precompiled program, checking
/// both agree on output and on how many input lines were consumed.
pub fn run(program: &str, stdin: &[&str], stdout: &[u8], reads: usize) {
    let inputs = stdin
        .iter()
        .rev()
        .map(|line| line.as_bytes().to_vec())
        .collect::<Vec<Line>>();

    let mut i = inputs.clone();
    let mut o: Vec<u8> = Vec::new();
    vm::run_source(program.as_bytes(), &mut i, &mut o).unwrap();
    assert_eq!(stdin.len() - i.len(), reads);
    assert_eq!(o, stdout);

    let compiled = vm::compile(program.as_bytes()).unwrap();
    let mut i = inputs;
    let mut o: Vec<u8> = Vec::new();
    vm::run(&compiled, &mut i, &mut o).unwrap();
    assert_eq!(stdin.len() - i.len(), reads);
    assert_eq!(o, stdout);
}

/// Runs `program` expecting a runtime failure after `stdout` was produced.
pub fn run_failing(program: &str, stdin: &[&str], stdout: &[u8]) -> ExecutionError {
    let mut i = stdin
        .iter()
        .rev()
        .map(|line| line.as_bytes().to_vec())
        .collect::<Vec<Line>>();
    let mut o: Vec<u8> = Vec::new();

    let compiled = vm::compile(program.as_bytes()).unwrap();
    let error = vm::run(&compiled, &mut i, &mut o).unwrap_err();
    assert_eq!(o, stdout);

    error
}
