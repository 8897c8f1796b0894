extern crate linefeed;
use super::{drive, interrupt_flag, Console, Reply};
use crate::lang::Error;
use crate::mach::Runtime;
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use log::debug;
use std::io;

const PROMPT: &str = "> ";

struct Session {
    interface: Interface<DefaultTerminal>,
}

impl Console for Session {
    fn print(&mut self, s: &str) -> io::Result<()> {
        self.interface.write_fmt(format_args!("{}", s))
    }

    fn error(&mut self, error: &Error) -> io::Result<()> {
        self.interface.write_fmt(format_args!(
            "{}\n",
            Style::new().bold().paint(format!("?{}", error))
        ))
    }

    fn input(&mut self, prompt: &str) -> io::Result<Reply> {
        self.interface.set_prompt(prompt)?;
        let reply = match self.interface.read_line()? {
            ReadResult::Input(s) => Reply::Line(s),
            ReadResult::Signal(Signal::Interrupt) => {
                self.interface.set_buffer("")?;
                Reply::Interrupt
            }
            ReadResult::Signal(_) | ReadResult::Eof => Reply::Eof,
        };
        self.interface.set_prompt(PROMPT)?;
        Ok(reply)
    }
}

/// The interactive session. Each line is loaded into the runtime and run
/// to completion before the next is read. `QUIT` or end of input leaves.
pub fn interactive() -> io::Result<()> {
    let interrupted = interrupt_flag()?;
    let interface = Interface::new("tinybasic")?;
    interface.set_prompt(PROMPT)?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut session = Session { interface };
    let mut runtime = Runtime::new();
    loop {
        let line = match session.interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(Signal::Interrupt) => {
                session.interface.set_buffer("")?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if line.trim().eq_ignore_ascii_case("QUIT") {
            debug!("QUIT");
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        if runtime.enter(&line) {
            session.interface.add_history_unique(line);
        }
        if !drive(&mut runtime, &mut session, &interrupted)? {
            break;
        }
    }
    Ok(())
}
