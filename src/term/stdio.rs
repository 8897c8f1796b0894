use super::{drive, interrupt_flag, Console, Reply};
use crate::lang::Error;
use crate::mach::Runtime;
use std::io::{self, BufRead, Write};

struct Stdio {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl Console for Stdio {
    fn print(&mut self, s: &str) -> io::Result<()> {
        self.stdout.write_all(s.as_bytes())
    }

    fn error(&mut self, error: &Error) -> io::Result<()> {
        self.stdout.flush()?;
        writeln!(io::stderr(), "?{}", error)
    }

    fn input(&mut self, prompt: &str) -> io::Result<Reply> {
        self.stdout.write_all(prompt.as_bytes())?;
        self.stdout.flush()?;
        let mut s = String::new();
        if self.stdin.lock().read_line(&mut s)? == 0 {
            return Ok(Reply::Eof);
        }
        Ok(Reply::Line(s.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Loads a whole program and runs it with stdin answering `INPUT`.
/// Returns false if the program failed to load.
pub fn batch(text: &str) -> io::Result<bool> {
    let interrupted = interrupt_flag()?;
    let mut runtime = Runtime::new();
    let loaded = runtime.enter(text);
    let mut console = Stdio {
        stdin: io::stdin(),
        stdout: io::stdout(),
    };
    drive(&mut runtime, &mut console, &interrupted)?;
    console.stdout.flush()?;
    Ok(loaded)
}
