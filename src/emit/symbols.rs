use crate::lang::ast::{AcceptVisitor, Item, Statement, Variable, Visitor};
use crate::lang::LineNumber;
use crate::mach::Program;
use std::collections::{BTreeMap, BTreeSet};
use std::convert::TryFrom;

/// How a variable is represented in C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `long`, assigned only from expressions.
    Number,
    /// `const char *`, assigned only from string literals.
    Text,
    /// Heap `char *` sized for a line of input. Used for `INPUT` targets
    /// and for variables assigned both text and numbers.
    Buffer,
}

/// Every variable the program mentions, its C representation, and
/// whether its declaration can sit at its first `LET`.
#[derive(Debug, Default)]
pub struct Symbols {
    kinds: BTreeMap<Variable, Kind>,
    seen: BTreeSet<Variable>,
    inline: BTreeMap<Variable, LineNumber>,
    jumps: Vec<(LineNumber, i64)>,
    line: LineNumber,
    dispatch: bool,
}

impl Symbols {
    pub fn scan(program: &Program) -> Symbols {
        let mut this = Symbols::default();
        for (number, line) in program.from(0) {
            this.line = number;
            let statement = line.statement();
            if let Statement::Let(var, item) = &**statement {
                let unseen = !this.seen.contains(var);
                item.accept(&mut this);
                if unseen && !this.seen.contains(var) {
                    this.inline.insert(*var, number);
                }
            }
            statement.accept(&mut this);
        }
        let landings: Vec<(LineNumber, LineNumber)> = this
            .jumps
            .iter()
            .filter_map(|(from, target)| {
                let target = LineNumber::try_from(*target).ok()?;
                let (to, _) = program.at_or_after(target)?;
                Some((*from, to))
            })
            .collect();
        let kinds = &this.kinds;
        let dispatch = this.dispatch;
        // A declaration a jump can skip over must be hoisted.
        this.inline.retain(|var, at| {
            kinds.get(var) != Some(&Kind::Buffer)
                && !dispatch
                && !landings.iter().any(|(from, to)| from < at && to > at)
        });
        this
    }

    pub fn kind(&self, var: Variable) -> Kind {
        self.kinds.get(&var).copied().unwrap_or(Kind::Number)
    }

    /// Declared where first assigned rather than at the top of `main`.
    pub fn is_inline(&self, var: Variable) -> bool {
        self.inline.contains_key(&var)
    }

    pub fn hoisted(&self) -> impl Iterator<Item = (Variable, Kind)> + '_ {
        self.seen
            .iter()
            .filter(move |var| !self.inline.contains_key(*var))
            .map(move |var| (*var, self.kind(*var)))
    }

    pub fn buffers(&self) -> impl Iterator<Item = Variable> + '_ {
        self.kinds
            .iter()
            .filter(|(_, kind)| **kind == Kind::Buffer)
            .map(|(var, _)| *var)
    }

    /// True when some `GOTO` target is only known at run time.
    pub fn has_dispatch(&self) -> bool {
        self.dispatch
    }

    fn assign(&mut self, var: Variable, kind: Kind) {
        let merged = match self.kinds.get(&var) {
            None => kind,
            Some(prev) if *prev == kind => kind,
            Some(_) => Kind::Buffer,
        };
        self.kinds.insert(var, merged);
    }
}

impl Visitor for Symbols {
    fn visit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Let(var, Item::String(_)) => self.assign(*var, Kind::Text),
            Statement::Let(var, Item::Expression(_)) => self.assign(*var, Kind::Number),
            Statement::Input(vars) => {
                for var in vars {
                    self.kinds.insert(*var, Kind::Buffer);
                }
            }
            Statement::Goto(expr) => match expr.constant() {
                Some(target) => self.jumps.push((self.line, target)),
                None => self.dispatch = true,
            },
            _ => {}
        }
    }

    fn visit_variable(&mut self, var: &Variable) {
        self.seen.insert(*var);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::parse_program;

    fn scan(text: &str) -> Symbols {
        let mut program = Program::new();
        program.load(parse_program(text).unwrap());
        Symbols::scan(&program)
    }

    fn var(ch: char) -> Variable {
        Variable::new(ch).unwrap()
    }

    #[test]
    fn test_first_let_declares_inline() {
        let s = scan("10 LET A = 1\n20 LET B = B + A\n30 IF A = 1 THEN LET C = 2");
        assert!(s.is_inline(var('A')));
        assert!(!s.is_inline(var('B')));
        assert!(!s.is_inline(var('C')));
        let hoisted: Vec<Variable> = s.hoisted().map(|(v, _)| v).collect();
        assert_eq!(hoisted, vec![var('B'), var('C')]);
    }

    #[test]
    fn test_kinds() {
        let s = scan("10 LET A = 1\n20 LET S = \"HI\"\n30 INPUT N\n40 LET M = 1\n50 LET M = \"X\"");
        assert_eq!(s.kind(var('A')), Kind::Number);
        assert_eq!(s.kind(var('S')), Kind::Text);
        assert_eq!(s.kind(var('N')), Kind::Buffer);
        assert_eq!(s.kind(var('M')), Kind::Buffer);
        assert!(!s.is_inline(var('M')));
        let buffers: Vec<Variable> = s.buffers().collect();
        assert_eq!(buffers, vec![var('M'), var('N')]);
    }

    #[test]
    fn test_skippable_let_is_hoisted() {
        let s = scan("10 GOTO 30\n20 LET A = 1\n30 PRINT A");
        assert!(!s.is_inline(var('A')));
        let s = scan("10 IF 1 = 1 THEN GOTO 25\n20 LET A = 1\n30 PRINT A");
        assert!(!s.is_inline(var('A')));
        let s = scan("10 GOTO 20\n20 LET A = 1\n30 GOTO 10");
        assert!(s.is_inline(var('A')));
        let s = scan("10 LET T = 20\n20 LET A = 1\n30 GOTO T");
        assert!(!s.is_inline(var('A')));
        assert!(!s.is_inline(var('T')));
    }

    #[test]
    fn test_dispatch() {
        assert!(!scan("10 GOTO 10").has_dispatch());
        assert!(scan("10 GOTO A * 10").has_dispatch());
    }
}
