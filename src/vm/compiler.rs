use thiserror::Error;
use tracing::debug;

use super::program::{Operation, Program};
use crate::lexer::{Lexer, Symbol};
use crate::types::{Address, Count};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("Unbalanced loop: unmatched '{bracket}' at byte {offset}")]
    UnbalancedLoop { bracket: char, offset: usize },
}

pub type Result<T> = std::result::Result<T, CompileError>;

struct PendingLoop {
    address: Address,
    offset: usize, // in the source, for diagnostics only
}

pub struct Compiler {
    program: Program,
    pending: Vec<PendingLoop>,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            program: Program::new(),
            pending: Vec::new(),
        }
    }

    pub fn compile(mut self, source: &[u8]) -> Result<Program> {
        let mut lexer = Lexer::new(source);
        let mut symbol = lexer.next();

        while let Some(current) = symbol {
            match current {
                Symbol::LoopStart => {
                    self.pending.push(PendingLoop {
                        address: self.program.len(),
                        offset: lexer.offset(),
                    });
                    self.program.push(Operation::LoopStart(0));
                    symbol = lexer.next();
                }
                Symbol::LoopEnd => {
                    let start = self
                        .pending
                        .pop()
                        .ok_or_else(|| CompileError::UnbalancedLoop {
                            bracket: ']',
                            offset: lexer.offset(),
                        })?;

                    self.program.push(Operation::LoopEnd(start.address + 1));
                    let exit = self.program.len();
                    self.program.patch(start.address, exit);
                    symbol = lexer.next();
                }
                unary => {
                    let (count, next) = run_length(&mut lexer, unary);
                    self.program.push(Operation::new(unary, count));
                    symbol = next;
                }
            }
        }

        if let Some(unmatched) = self.pending.pop() {
            return Err(CompileError::UnbalancedLoop {
                bracket: '[',
                offset: unmatched.offset,
            });
        }

        debug!(
            operations = self.program.len(),
            source_bytes = source.len(),
            "program compiled"
        );
        Ok(self.program)
    }
}

// Counts how many times `symbol` repeats (including the one already read)
// and returns the first symbol that differs.
fn run_length(lexer: &mut Lexer, symbol: Symbol) -> (Count, Option<Symbol>) {
    let mut count = 1;

    loop {
        match lexer.next() {
            Some(next) if next == symbol => count += 1,
            next => return (count, next),
        }
    }
}
