mod interpreter;
mod io;
mod lexer;
mod memory;
mod nom;
#[cfg(test)]
mod regression;
mod types;
mod vm;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::interpreter::Interpreter;

#[derive(Parser)]
#[command(name = "bfvm", version)]
#[command(about = "Compiles and runs tape machine programs", long_about = None)]
struct Args {
    /// Program to run. Starts the interactive shell when omitted
    file: Option<PathBuf>,

    /// Print the compiled operations instead of running the program
    #[arg(long, requires = "file", conflicts_with = "symbols")]
    ops: bool,

    /// Print the recognized instruction symbols instead of running the program
    #[arg(long, requires = "file")]
    symbols: bool,

    /// History file of the interactive shell
    #[arg(long, default_value = "history.txt", env = "BFVM_HISTORY")]
    history: PathBuf,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut interpreter = Interpreter::new(args.history);

    match args.file {
        None => interpreter.run()?,
        Some(path) if args.ops || args.symbols => {
            let source = fs::read(&path)?;
            if args.ops {
                interpreter.show_operations(&source)?;
            } else {
                interpreter.show_symbols(&source)?;
            }
        }
        Some(path) => interpreter.run_file(&path)?,
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // program output owns stdout, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Failure: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
