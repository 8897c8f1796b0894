use super::eval::{evaluate, evaluate_item};
use super::{Program, Val, Var};
use crate::error;
use crate::lang::ast::{Statement, Variable};
use crate::lang::{parse_program, Error, Line, LineNumber};
use log::{debug, trace};
use std::collections::VecDeque;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub const PROMPT: &str = "? ";

/// ## Interpreter state machine
///
/// Text goes in with [`Runtime::enter`]. The front end then calls
/// [`Runtime::execute`] until it returns `Event::Stopped`, rendering each
/// event it receives. An `Event::Input` is answered with another `enter`.
#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    vars: Var,
    cursor: Cursor,
    scan: Option<Scan>,
    direct: VecDeque<Rc<Statement>>,
    input: VecDeque<Variable>,
    events: VecDeque<Event>,
    interrupted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Errors(Vec<Error>),
    Input(String),
    List(String),
    Print(String),
    Running,
    Stopped,
}

/// Execution position among the stored lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cursor {
    Halted,
    Line(LineNumber),
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::Line(0)
    }
}

/// Where the run loop picks up its next line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Scan {
    From(LineNumber),
    After(LineNumber),
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Answers a pending `INPUT`, or loads program text: numbered lines are
    /// stored, direct lines are queued to execute in order. Returns false
    /// if the text did not parse; nothing is loaded in that case.
    pub fn enter(&mut self, s: &str) -> bool {
        if let Some(var) = self.input.pop_front() {
            self.vars.store(var, Val::from(s));
            return true;
        }
        match parse_program(s) {
            Ok(lines) => {
                self.load(lines);
                true
            }
            Err(error) => {
                debug!("load failed: {}", error);
                self.events.push_back(Event::Errors(vec![error]));
                false
            }
        }
    }

    fn load(&mut self, lines: Vec<Line>) {
        let direct = self.program.load(lines);
        debug!(
            "loaded {} stored lines, {} direct statements",
            self.program.len(),
            direct.len()
        );
        self.direct
            .extend(direct.iter().map(|line| line.statement().clone()));
        self.cursor = Cursor::Line(0);
    }

    /// Stops the running program at the next step.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_awaiting_input(&self) -> bool {
        !self.input.is_empty()
    }

    /// Runs at most `cycles` statements.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.interrupted {
            self.interrupted = false;
            let line_number = self.current_line();
            self.abort();
            return Event::Errors(vec![error!(Break).in_line_number(line_number)]);
        }
        for _ in 0..cycles {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            if self.is_awaiting_input() {
                return Event::Input(PROMPT.to_string());
            }
            match self.step() {
                Ok(true) => {}
                Ok(false) => return Event::Stopped,
                Err(error) => self.events.push_back(Event::Errors(vec![error])),
            }
        }
        match self.events.pop_front() {
            Some(event) => event,
            None => Event::Running,
        }
    }

    fn current_line(&self) -> Option<LineNumber> {
        match (self.scan, self.cursor) {
            (Some(_), Cursor::Line(number)) => Some(number),
            _ => None,
        }
    }

    fn abort(&mut self) {
        self.scan = None;
        self.direct.clear();
        self.input.clear();
        self.events.clear();
    }

    /// One statement from the run loop, or from the direct queue when no
    /// program is running. False when there is nothing left to do.
    fn step(&mut self) -> Result<bool> {
        if let Some(scan) = self.scan {
            let next = match scan {
                Scan::From(number) => self.program.at_or_after(number),
                Scan::After(number) => self.program.after(number),
            };
            let (number, statement) = match next {
                Some(next) => next,
                None => {
                    debug!("halted after line {:?}", self.cursor);
                    self.scan = None;
                    return Ok(true);
                }
            };
            self.cursor = Cursor::Line(number);
            self.scan = Some(Scan::After(number));
            if let Err(error) = self.statement(&statement) {
                self.scan = None;
                return Err(error.in_line_number(Some(number)));
            }
            return Ok(true);
        }
        match self.direct.pop_front() {
            Some(statement) => {
                self.statement(&statement)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn statement(&mut self, statement: &Statement) -> Result<()> {
        use Statement::*;
        match statement {
            Clear => self.r#clear(),
            End => self.r#end(),
            Goto(expr) => {
                let target = i64::try_from(evaluate(expr, &self.vars)?)?;
                self.r#goto(target);
            }
            If(predicate, then) => match evaluate(predicate, &self.vars) {
                Ok(Val::Boolean(true)) => self.statement(then)?,
                Ok(_) => {}
                Err(error) => debug!("IF condition taken as false: {}", error),
            },
            Input(vars) => self.input.extend(vars.iter().copied()),
            Let(var, item) => {
                let value = evaluate_item(item, &self.vars)?;
                self.vars.store(*var, value);
            }
            List => self.r#list(),
            // Fields are joined by one space unless the text so far
            // already ends in whitespace.
            Print(items) => {
                let mut s = String::new();
                for (index, item) in items.iter().enumerate() {
                    let field = evaluate_item(item, &self.vars)?.to_string();
                    if index > 0 && !s.ends_with(char::is_whitespace) {
                        s.push(' ');
                    }
                    s.push_str(&field);
                }
                s.push('\n');
                self.events.push_back(Event::Print(s));
            }
            Rem(_) => {}
            Run => self.r#run(),
        }
        Ok(())
    }

    /// Only stored lines go; variables are kept.
    fn r#clear(&mut self) {
        self.program.clear();
    }

    fn r#end(&mut self) {
        self.cursor = Cursor::Halted;
        self.scan = None;
    }

    /// Replaces the scan rather than nesting a new run loop, so GOTO
    /// cycles run in constant stack. A target between stored lines lands
    /// on the next line after it.
    fn r#goto(&mut self, target: i64) {
        trace!("GOTO {}", target);
        match LineNumber::try_from(target) {
            Ok(number) => {
                self.cursor = Cursor::Line(number);
                self.scan = Some(Scan::From(number));
            }
            Err(_) => self.r#end(),
        }
    }

    fn r#list(&mut self) {
        for line in self.program.lines() {
            self.events.push_back(Event::List(line.to_string()));
        }
    }

    fn r#run(&mut self) {
        if self.program.is_empty() {
            debug!("RUN with no stored lines");
            return;
        }
        if let Cursor::Line(number) = self.cursor {
            debug!("RUN from line {}", number);
            self.scan = Some(Scan::From(number));
        }
    }
}
