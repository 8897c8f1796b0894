use crate::lang::{ast::Statement, Line, LineNumber};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::rc::Rc;

/// ## Stored program lines
///
/// Lines are kept in line number order. Lookups always read the live
/// map, so a `CLEAR` or a redefined line is seen by a program that is
/// already running.

#[derive(Debug, Default)]
pub struct Program {
    lines: BTreeMap<LineNumber, Line>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Stores a numbered line, replacing any line with the same number.
    /// Direct lines are handed back to the caller.
    pub fn insert(&mut self, line: Line) -> Option<Line> {
        match line.number() {
            Some(number) => {
                self.lines.insert(number, line);
                None
            }
            None => Some(line),
        }
    }

    /// Stores the numbered lines and returns the direct ones in source order.
    pub fn load(&mut self, lines: Vec<Line>) -> Vec<Line> {
        lines
            .into_iter()
            .filter_map(|line| self.insert(line))
            .collect()
    }

    /// Lines numbered `cursor` or higher, ascending.
    pub fn from(&self, cursor: LineNumber) -> impl Iterator<Item = (LineNumber, &Line)> {
        self.lines.range(cursor..).map(|(n, line)| (*n, line))
    }

    /// The first line numbered `cursor` or higher.
    pub fn at_or_after(&self, cursor: LineNumber) -> Option<(LineNumber, Rc<Statement>)> {
        self.next((Included(cursor), Unbounded))
    }

    /// The first line numbered strictly higher than `cursor`.
    pub fn after(&self, cursor: LineNumber) -> Option<(LineNumber, Rc<Statement>)> {
        self.next((Excluded(cursor), Unbounded))
    }

    fn next(
        &self,
        range: (std::ops::Bound<LineNumber>, std::ops::Bound<LineNumber>),
    ) -> Option<(LineNumber, Rc<Statement>)> {
        self.lines
            .range(range)
            .next()
            .map(|(n, line)| (*n, line.statement().clone()))
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }
}
