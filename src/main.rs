//! # Tiny BASIC
//!
//! Runs a program file, or starts an interactive session without one.
//!

use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tinybasic::emit::emit;
use tinybasic::lang::parse_program;
use tinybasic::term;

#[derive(Parser, Debug)]
#[command(name = "tinybasic", version, about = "Tiny BASIC interpreter and C emitter")]
struct Cli {
    /// Program to run; omit for an interactive session
    file: Option<PathBuf>,

    /// Print the parsed lines instead of running them
    #[arg(long, requires = "file", conflicts_with = "compile")]
    parse: bool,

    /// Print the program as C source instead of running it
    #[arg(long, requires = "file")]
    compile: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> io::Result<bool> {
    let path = match cli.file {
        Some(path) => path,
        None => {
            term::interactive()?;
            return Ok(true);
        }
    };
    let text = read_source(&path)?;
    if !cli.parse && !cli.compile {
        return term::batch(&text);
    }
    let lines = match parse_program(&text) {
        Ok(lines) => lines,
        Err(error) => {
            eprintln!("?{}", error);
            return Ok(false);
        }
    };
    if cli.compile {
        print!("{}", emit(&lines));
    } else {
        for line in &lines {
            match line.number() {
                Some(number) => println!("{} {:?}", number, line.statement()),
                None => println!("- {:?}", line.statement()),
            }
        }
    }
    Ok(true)
}

/// Reads UTF-8 source, dropping a byte order mark.
fn read_source(path: &Path) -> io::Result<String> {
    let text = std::fs::read_to_string(path)?;
    match text.strip_prefix('\u{feff}') {
        Some(rest) => Ok(rest.to_string()),
        None => Ok(text),
    }
}
