use std::collections::BTreeSet;
use std::fmt;

use crate::lexer::Symbol;
use crate::types::{Address, Count};

/// Compiled instruction.
///
/// Unary operations carry a repeat count, loop brackets carry the resolved
/// address to continue at when the jump is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    MoveRight(Count),
    MoveLeft(Count),
    Increment(Count),
    Decrement(Count),
    Output(Count),
    Input(Count),
    /// Jumps one past the matching `LoopEnd` if the current cell is zero.
    LoopStart(Address),
    /// Jumps one past the matching `LoopStart` if the current cell is not zero.
    LoopEnd(Address),
}

impl Operation {
    pub fn new(symbol: Symbol, operand: usize) -> Self {
        match symbol {
            Symbol::MoveRight => Operation::MoveRight(operand),
            Symbol::MoveLeft => Operation::MoveLeft(operand),
            Symbol::Increment => Operation::Increment(operand),
            Symbol::Decrement => Operation::Decrement(operand),
            Symbol::Output => Operation::Output(operand),
            Symbol::Input => Operation::Input(operand),
            Symbol::LoopStart => Operation::LoopStart(operand),
            Symbol::LoopEnd => Operation::LoopEnd(operand),
        }
    }

    pub fn symbol(&self) -> Symbol {
        match self {
            Operation::MoveRight(_) => Symbol::MoveRight,
            Operation::MoveLeft(_) => Symbol::MoveLeft,
            Operation::Increment(_) => Symbol::Increment,
            Operation::Decrement(_) => Symbol::Decrement,
            Operation::Output(_) => Symbol::Output,
            Operation::Input(_) => Symbol::Input,
            Operation::LoopStart(_) => Symbol::LoopStart,
            Operation::LoopEnd(_) => Symbol::LoopEnd,
        }
    }

    pub fn operand(&self) -> usize {
        match *self {
            Operation::MoveRight(n)
            | Operation::MoveLeft(n)
            | Operation::Increment(n)
            | Operation::Decrement(n)
            | Operation::Output(n)
            | Operation::Input(n)
            | Operation::LoopStart(n)
            | Operation::LoopEnd(n) => n,
        }
    }

    pub fn jump_target(&self) -> Option<Address> {
        match *self {
            Operation::LoopStart(target) | Operation::LoopEnd(target) => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.symbol() {
            Symbol::MoveRight => "right",
            Symbol::MoveLeft => "left",
            Symbol::Increment => "inc",
            Symbol::Decrement => "dec",
            Symbol::Output => "out",
            Symbol::Input => "in",
            Symbol::LoopStart => "jz",
            Symbol::LoopEnd => "jnz",
        };

        match self.jump_target() {
            Some(target) => write!(f, "{:<5} -> {:04}", name, target),
            None => write!(f, "{:<5} {}", name, self.operand()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub(in crate::vm) operations: Vec<Operation>,
}

impl Program {
    pub fn new() -> Self {
        Program {
            operations: Vec::new(),
        }
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub(in crate::vm) fn push(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    // resolves the placeholder emitted for a loop opener
    pub(in crate::vm) fn patch(&mut self, address: Address, target: Address) {
        debug_assert!(matches!(
            self.operations.get(address),
            Some(Operation::LoopStart(_))
        ));

        if let Some(Operation::LoopStart(operand)) = self.operations.get_mut(address) {
            *operand = target;
        }
    }
}

impl From<Vec<Operation>> for Program {
    fn from(operations: Vec<Operation>) -> Self {
        Program { operations }
    }
}

/// Disassembly listing, one operation per line. Jump targets are marked.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets: BTreeSet<Address> = self
            .operations()
            .filter_map(Operation::jump_target)
            .collect();

        for (address, operation) in self.operations().enumerate() {
            let marker = if targets.contains(&address) { '►' } else { ' ' };
            writeln!(f, "{:04} {} {}", address, marker, operation)?;
        }

        if targets.contains(&self.len()) {
            writeln!(f, "{:04} ► halt", self.len())?;
        }

        Ok(())
    }
}
