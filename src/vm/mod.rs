mod compiler;
mod machine;
mod program;

use thiserror::Error;

use crate::io::{InputStream, OutputStream};

use self::compiler::Compiler;
pub use self::compiler::CompileError;
pub use self::machine::{ExecutionError, ExecutionResult, Machine};
pub use self::program::Program;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Compilation failure: {0}")]
    Compile(#[from] CompileError),

    #[error("Runtime failure: {0}")]
    Execution(#[from] ExecutionError),
}

pub fn compile(source: &[u8]) -> Result<Program, CompileError> {
    Compiler::new().compile(source)
}

pub fn run<I, O>(program: &Program, input: &mut I, output: &mut O) -> ExecutionResult<()>
where
    I: InputStream,
    O: OutputStream,
{
    Machine::new(input, output).run(program)
}

/// Compiles `source` and runs it on a fresh tape.
pub fn run_source<I, O>(source: &[u8], input: &mut I, output: &mut O) -> Result<(), Error>
where
    I: InputStream,
    O: OutputStream,
{
    let program = compile(source)?;
    run(&program, input, output)?;
    Ok(())
}
