use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::types::Cell;

pub type Line = Vec<Cell>;

pub trait InputStream {
    /// Next line without its terminator, `None` once the stream is exhausted.
    /// Lines are raw bytes, no particular encoding is assumed.
    fn next_line(&mut self) -> io::Result<Option<Line>>;
}

pub trait OutputStream {
    fn write(&mut self, value: Cell) -> io::Result<()>;
}

// IO streams implementations
impl InputStream for Stdin {
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        // whatever the program printed so far should be visible before we block
        io::stdout().flush()?;

        let mut line = Line::new();
        if self.lock().read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(strip_terminator(line)))
    }
}

impl OutputStream for Stdout {
    fn write(&mut self, value: Cell) -> io::Result<()> {
        self.write_all(&[value])
    }
}

impl InputStream for Vec<Line> {
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        Ok(self.pop())
    }
}

impl OutputStream for Vec<Cell> {
    fn write(&mut self, value: Cell) -> io::Result<()> {
        self.push(value);
        Ok(())
    }
}

impl InputStream for () {
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        Ok(None)
    }
}

impl OutputStream for () {
    fn write(&mut self, _: Cell) -> io::Result<()> {
        Ok(())
    }
}

fn strip_terminator(mut line: Line) -> Line {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }

    line
}
