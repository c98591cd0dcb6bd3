use std::fmt;

/// One of the eight instruction characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    MoveRight,
    MoveLeft,
    Increment,
    Decrement,
    Output,
    Input,
    LoopStart,
    LoopEnd,
}

impl Symbol {
    pub fn from_byte(byte: u8) -> Option<Symbol> {
        let symbol = match byte {
            b'>' => Symbol::MoveRight,
            b'<' => Symbol::MoveLeft,
            b'+' => Symbol::Increment,
            b'-' => Symbol::Decrement,
            b'.' => Symbol::Output,
            b',' => Symbol::Input,
            b'[' => Symbol::LoopStart,
            b']' => Symbol::LoopEnd,
            _ => return None,
        };

        Some(symbol)
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::MoveRight => '>',
            Symbol::MoveLeft => '<',
            Symbol::Increment => '+',
            Symbol::Decrement => '-',
            Symbol::Output => '.',
            Symbol::Input => ',',
            Symbol::LoopStart => '[',
            Symbol::LoopEnd => ']',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Lazy view over source text yielding instruction symbols.
///
/// Everything that is not an instruction character is a comment and is
/// skipped silently. The input is scanned byte by byte, so any
/// ASCII-compatible encoding works.
pub struct Lexer<'a> {
    source: &'a [u8],
    index: usize,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Lexer {
            source,
            index: 0,
            offset: 0,
        }
    }

    /// Byte offset of the most recently yielded symbol.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Lexer<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        while let Some(&byte) = self.source.get(self.index) {
            self.index += 1;

            if let Some(symbol) = Symbol::from_byte(byte) {
                self.offset = self.index - 1;
                return Some(symbol);
            }
        }

        None
    }
}
