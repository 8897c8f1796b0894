use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Clear,
    End,
    Goto(Expression),
    If(Expression, Box<Statement>),
    Input(Vec<Variable>),
    Let(Variable, Item),
    List,
    Print(Vec<Item>),
    Rem(Rc<str>),
    Run,
}

/// A single-letter variable, `A` through `Z`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Variable(char);

const NAMES: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

impl Variable {
    pub fn new(ch: char) -> Option<Variable> {
        let ch = ch.to_ascii_uppercase();
        if ch.is_ascii_uppercase() {
            Some(Variable(ch))
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        NAMES[(self.0 as u8 - b'A') as usize]
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `PRINT` field or `LET` right-hand side.
#[derive(Debug, PartialEq, Clone)]
pub enum Item {
    String(Rc<str>),
    Expression(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(i64),
    Var(Variable),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Equal(Box<Expression>, Box<Expression>),
    NotEqual(Box<Expression>, Box<Expression>),
    Less(Box<Expression>, Box<Expression>),
    LessEqual(Box<Expression>, Box<Expression>),
    Greater(Box<Expression>, Box<Expression>),
    GreaterEqual(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn is_relational(&self) -> bool {
        use Expression::*;
        matches!(
            self,
            Equal(..) | NotEqual(..) | Less(..) | LessEqual(..) | Greater(..) | GreaterEqual(..)
        )
    }

    /// The value of an expression with no variables, if it has no operators.
    pub fn constant(&self) -> Option<i64> {
        match self {
            Expression::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_variable(&mut self, _: &Variable) {}
    fn visit_item(&mut self, _: &Item) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Variable {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_variable(self)
    }
}

impl AcceptVisitor for Item {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if let Item::Expression(expr) = self {
            expr.accept(visitor);
        }
        visitor.visit_item(self)
    }
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            Clear | End | List | Run | Rem(_) => {}
            Goto(expr) => expr.accept(visitor),
            If(predicate, stmt) => {
                predicate.accept(visitor);
                stmt.accept(visitor);
            }
            Input(vars) => {
                for var in vars {
                    var.accept(visitor);
                }
            }
            Let(var, item) => {
                var.accept(visitor);
                item.accept(visitor);
            }
            Print(items) => {
                for item in items {
                    item.accept(visitor);
                }
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Integer(_) => {}
            Var(var) => var.accept(visitor),
            Multiply(expr1, expr2)
            | Divide(expr1, expr2)
            | Add(expr1, expr2)
            | Subtract(expr1, expr2)
            | Equal(expr1, expr2)
            | NotEqual(expr1, expr2)
            | Less(expr1, expr2)
            | LessEqual(expr1, expr2)
            | Greater(expr1, expr2)
            | GreaterEqual(expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_expression(self)
    }
}
