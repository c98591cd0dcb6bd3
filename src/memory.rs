use thiserror::Error;

use crate::types::{Cell, Count};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Memory underflow: cannot move {distance} cells left of cell {head}")]
    Underflow { head: usize, distance: Count },
}

type Result<T> = std::result::Result<T, MemoryError>;

/// Byte tape addressed by a single head.
///
/// Cells are zero until written and the tape only grows to the right,
/// on the first move past its current extent.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<Cell>,
    head: usize,
}

const INITIAL_TAPE_SIZE: usize = 1;

impl Tape {
    pub fn new() -> Self {
        Tape {
            cells: vec![0; INITIAL_TAPE_SIZE],
            head: 0,
        }
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn load(&self) -> Cell {
        self.cells[self.head]
    }

    pub fn store(&mut self, value: Cell) {
        self.cells[self.head] = value;
    }

    pub fn add(&mut self, n: Count) {
        let cell = &mut self.cells[self.head];
        *cell = cell.wrapping_add(truncate(n));
    }

    pub fn sub(&mut self, n: Count) {
        let cell = &mut self.cells[self.head];
        *cell = cell.wrapping_sub(truncate(n));
    }

    pub fn move_right(&mut self, distance: Count) {
        self.head += distance;

        if self.head >= self.cells.len() {
            self.cells.resize(self.head + 1, 0);
        }
    }

    pub fn move_left(&mut self, distance: Count) -> Result<()> {
        if self.head < distance {
            return Err(MemoryError::Underflow {
                head: self.head,
                distance,
            });
        }

        self.head -= distance;
        Ok(())
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

// n mod 256, which is all that matters for 8-bit wraparound
fn truncate(n: Count) -> Cell {
    (n % (Cell::MAX as Count + 1)) as Cell
}
