/*!
## Rust Terminal Module

Front ends that drive a [`Runtime`] through its events: an interactive
line editor and a batch runner over stdin/stdout.

*/

mod linefeed;
mod stdio;

pub use self::linefeed::interactive;
pub use self::stdio::batch;

use crate::lang::Error;
use crate::mach::{Event, Runtime};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Statements run between checks for Ctrl-C.
const CYCLES: usize = 5000;

/// What came back from a request for one line of `INPUT`.
#[derive(Debug, PartialEq)]
pub enum Reply {
    Line(String),
    Interrupt,
    Eof,
}

pub trait Console {
    fn print(&mut self, s: &str) -> io::Result<()>;
    fn error(&mut self, error: &Error) -> io::Result<()>;
    fn input(&mut self, prompt: &str) -> io::Result<Reply>;
}

/// Runs until the runtime stops. False if input ran out while a program
/// was waiting on `INPUT`.
pub fn drive<C: Console>(
    runtime: &mut Runtime,
    console: &mut C,
    interrupted: &AtomicBool,
) -> io::Result<bool> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES) {
            Event::Stopped => return Ok(true),
            Event::Running => {}
            Event::Print(s) => console.print(&s)?,
            Event::List(s) => console.print(&format!("{}\n", s))?,
            Event::Errors(errors) => {
                for error in &errors {
                    console.error(error)?;
                }
            }
            Event::Input(prompt) => match console.input(&prompt)? {
                Reply::Line(s) => {
                    runtime.enter(&s);
                }
                Reply::Interrupt => runtime.interrupt(),
                Reply::Eof => return Ok(false),
            },
        }
    }
}

/// Installs the Ctrl-C handler. The flag is polled by [`drive`].
fn interrupt_flag() -> io::Result<Arc<AtomicBool>> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(interrupted)
}
