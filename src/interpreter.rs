use std::error::Error;
use std::fs;
use std::io::{self, Stdin, Stdout, Write};
use std::path::{Path, PathBuf};

use rustyline::error::ReadlineError;
use rustyline::Editor;
use thiserror::Error;
use tracing::{debug, info};

use crate::lexer::Lexer;
use crate::vm;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(String),
    ShowOperations(String),
    ShowSymbols(String),
    Load(PathBuf),
    Help,
}

impl Command {
    fn parse(line: &str) -> crate::nom::Result<Command> {
        crate::nom::parse("command", parse::input_line, line)
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::nom::Error),

    #[error("{0}")]
    Program(#[from] vm::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

const HELP: &str = "\
:run <source>   compile and run a program (same as entering the source alone)
:ops <source>   show compiled operations
:lex <source>   show recognized instruction symbols
:load <path>    run a program from a file
:help           show this message";

pub struct Interpreter {
    input: Stdin,
    output: Stdout,
    history: PathBuf,
}

impl Interpreter {
    pub fn new(history: PathBuf) -> Self {
        Interpreter {
            input: io::stdin(),
            output: io::stdout(),
            history,
        }
    }

    pub fn run_file(&mut self, path: &Path) -> Result<(), CommandError> {
        let source = fs::read(path).map_err(|source| CommandError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = source.len(), "running program");

        self.run_source(&source)
    }

    pub fn run_source(&mut self, source: &[u8]) -> Result<(), CommandError> {
        let result = vm::run_source(source, &mut self.input, &mut self.output);
        // flush even on failure, output produced before a fault still counts
        self.output.flush()?;

        Ok(result?)
    }

    pub fn show_operations(&mut self, source: &[u8]) -> Result<(), CommandError> {
        let program = vm::compile(source).map_err(vm::Error::from)?;
        if program.is_empty() {
            writeln!(self.output, "(no operations)")?;
        } else {
            write!(self.output, "{}", program)?;
        }
        Ok(())
    }

    pub fn show_symbols(&mut self, source: &[u8]) -> Result<(), CommandError> {
        let symbols: String = Lexer::new(source).map(|s| s.as_char()).collect();
        writeln!(self.output, "{}", symbols)?;
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<(), CommandError> {
        debug!(?command, "executing");

        match command {
            Command::Run(source) => {
                self.run_source(source.as_bytes())?;
                // keep the prompt on its own line
                writeln!(self.output)?;
            }
            Command::ShowOperations(source) => self.show_operations(source.as_bytes())?,
            Command::ShowSymbols(source) => self.show_symbols(source.as_bytes())?,
            Command::Load(path) => {
                self.run_file(&path)?;
                writeln!(self.output)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
        }

        Ok(())
    }

    /// Parses and executes one line typed into the shell.
    pub fn execute_line(&mut self, line: &str) -> Result<(), CommandError> {
        let command = Command::parse(line.trim())?;
        self.execute(command)
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let mut editor = Editor::<()>::new();
        if let Err(e) = editor.load_history(&self.history) {
            debug!(history = %self.history.display(), error = %e, "starting without history");
        }

        loop {
            let line = match editor.readline(">> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    tracing::error!(error = %e, "failed to read from the terminal");
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }
            editor.add_history_entry(line.as_str());

            // a failing line is reported and the session goes on
            if let Err(e) = self.execute_line(&line) {
                eprintln!("{}", e);
            }
        }

        editor.save_history(&self.history)?;
        Ok(())
    }
}

mod parse {
    // Input ::= Run | ShowOps | ShowLex | Load | Help | Source
    // Run ::= ':run' Source
    // ShowOps ::= ':ops' Source
    // ShowLex ::= ':lex' Source
    // Load ::= ':load' Path
    // Help ::= ':help'
    // Source ::= any text not starting with ':'

    use std::path::PathBuf;

    use super::Command;
    use crate::nom::{spaces, Input, Parsed};

    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::combinator::{map, rest, verify};
    use nom::sequence::preceded;

    pub fn input_line(input: Input) -> Parsed<Command> {
        alt((
            command(":run", map(text, |s| Command::Run(s.into()))),
            command(":ops", map(text, |s| Command::ShowOperations(s.into()))),
            command(":lex", map(text, |s| Command::ShowSymbols(s.into()))),
            command(":load", map(path, |s| Command::Load(PathBuf::from(s)))),
            command(":help", map(spaces, |_| Command::Help)),
            map(source, |s| Command::Run(s.into())),
        ))(input)
    }

    fn command<'a, P>(prefix: &'a str, parser: P) -> impl Fn(Input<'a>) -> Parsed<'a, Command>
    where
        P: Fn(Input<'a>) -> Parsed<'a, Command>,
    {
        preceded(tag(prefix), parser)
    }

    fn text(input: Input) -> Parsed<Input> {
        preceded(spaces, rest)(input)
    }

    fn path(input: Input) -> Parsed<Input> {
        verify(text, |s: &str| !s.trim().is_empty())(input)
    }

    // anything else is program text, unless it looks like a mistyped command
    fn source(input: Input) -> Parsed<Input> {
        verify(rest, |s: &str| !s.starts_with(':'))(input)
    }
}
