use std::io;

use thiserror::Error;
use tracing::debug;

use super::program::{Operation, Program};
use crate::io::{InputStream, OutputStream};
use crate::memory::{MemoryError, Tape};
use crate::types::Address;

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("{0}")]
    Memory(#[from] MemoryError),

    #[error("Unexpected end of input while executing operation {position}")]
    UnexpectedEndOfInput { position: Address },

    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
}

pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

enum Retcode {
    Continue,
    Jump(Address),
}

pub struct Machine<'a, I, O> {
    tape: Tape,
    input: &'a mut I,
    output: &'a mut O,
    steps: u64,
}

impl<I, O> Machine<'_, I, O>
where
    I: InputStream,
    O: OutputStream,
{
    pub fn new<'a>(input: &'a mut I, output: &'a mut O) -> Machine<'a, I, O> {
        Machine {
            tape: Tape::new(),
            input,
            output,
            steps: 0,
        }
    }

    #[cfg(test)]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    fn execute(&mut self, operation: &Operation, pc: Address) -> ExecutionResult<Retcode> {
        match *operation {
            Operation::MoveRight(n) => self.tape.move_right(n),
            Operation::MoveLeft(n) => self.tape.move_left(n)?,
            Operation::Increment(n) => self.tape.add(n),
            Operation::Decrement(n) => self.tape.sub(n),
            Operation::Output(n) => {
                let value = self.tape.load();
                for _ in 0..n {
                    self.output.write(value)?;
                }
            }
            Operation::Input(n) => {
                for _ in 0..n {
                    let line = self
                        .input
                        .next_line()?
                        .ok_or(ExecutionError::UnexpectedEndOfInput { position: pc })?;

                    // only the first byte of a line is used, an empty line reads as 0
                    self.tape.store(line.first().copied().unwrap_or(0));
                }
            }
            Operation::LoopStart(target) => {
                if self.tape.load() == 0 {
                    return Ok(Retcode::Jump(target));
                }
            }
            Operation::LoopEnd(target) => {
                if self.tape.load() != 0 {
                    return Ok(Retcode::Jump(target));
                }
            }
        }

        Ok(Retcode::Continue)
    }

    pub fn run(&mut self, program: &Program) -> ExecutionResult<()> {
        let mut pc = 0;
        while pc < program.operations.len() {
            self.steps += 1;
            match self.execute(&program.operations[pc], pc)? {
                Retcode::Continue => pc += 1,
                Retcode::Jump(location) => pc = location,
            }
        }

        debug!(
            steps = self.steps,
            head = self.tape.head(),
            tape_size = self.tape.cells().len(),
            "program halted"
        );
        Ok(())
    }
}
