use super::{ast::*, token::*, Column, Error, Line, LineNumber};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Parses the tokens of one line into its statement.
pub fn parse(line_number: Option<LineNumber>, tokens: &[Token]) -> Result<Statement> {
    match Parser::parse(tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

/// Parses a whole program. Loading is atomic: the first line that fails
/// to parse fails the program and no lines are returned.
pub fn parse_program(text: &str) -> Result<Vec<Line>> {
    let multiline = text.lines().filter(|s| !s.trim().is_empty()).count() > 1;
    let mut lines = vec![];
    for (index, source) in text.lines().enumerate() {
        if source.trim().is_empty() {
            continue;
        }
        match Line::new(source) {
            Ok(line) => lines.push(line),
            Err(e) if multiline => return Err(e.in_source_line(index + 1)),
            Err(e) => return Err(e),
        }
    }
    Ok(lines)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
        };
        let statement = match parse.statement() {
            Ok(s) => s,
            Err(e) => return Err(e.in_column(&parse.col)),
        };
        match parse.next() {
            None => Ok(statement),
            Some(_) => Err(error!(SyntaxError, ..&parse.col; "UNEXPECTED TOKEN")),
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.next() {
            Some(Token::Word(word)) => Statement::for_word(self, *word),
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    let expr = this.expression()?;
                    this.expect(Token::RParen)?;
                    expr
                }
                Some(Token::Ident(ch)) => Expression::Var(this.variable(*ch)?),
                Some(Token::Literal(Literal::Integer(s))) => Expression::for_literal(s, false)?,
                Some(Token::Operator(Operator::Minus)) => this.negative_literal(true)?,
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            let mut compared = false;
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) => *op,
                    _ => break,
                };
                let op_precedence = Expression::op_precedence(op);
                if op_precedence < precedence {
                    break;
                }
                if op.is_relational() {
                    if compared {
                        return Err(error!(SyntaxError; "CHAINED COMPARISON"));
                    }
                    compared = true;
                }
                this.next();
                let rhs = parse(this, op_precedence + 1)?;
                lhs = Expression::for_binary_op(op, lhs, rhs);
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    /// Negation belongs to the literal, not the evaluator: `--5` is `5`
    /// and `-A` is not an expression.
    fn negative_literal(&mut self, negative: bool) -> Result<Expression> {
        match self.next() {
            Some(Token::Operator(Operator::Minus)) => self.negative_literal(!negative),
            Some(Token::Literal(Literal::Integer(s))) => Expression::for_literal(s, negative),
            _ => Err(error!(SyntaxError; "EXPECTED NUMBER")),
        }
    }

    fn item(&mut self) -> Result<Item> {
        if let Some(Token::Literal(Literal::String(s))) = self.peek() {
            let s: Rc<str> = s.as_str().into();
            self.next();
            return Ok(Item::String(s));
        }
        Ok(Item::Expression(self.expression()?))
    }

    fn item_list(&mut self) -> Result<Vec<Item>> {
        let mut v: Vec<Item> = vec![];
        if self.peek().is_none() {
            return Ok(v);
        }
        loop {
            v.push(self.item()?);
            match self.next() {
                None => return Ok(v),
                Some(Token::Comma) => continue,
                _ => return Err(error!(SyntaxError; "EXPECTED END OR SEPARATOR")),
            }
        }
    }

    fn variable(&mut self, ch: char) -> Result<Variable> {
        match Variable::new(ch) {
            Some(var) => Ok(var),
            None => Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        }
    }

    fn ident(&mut self) -> Result<Variable> {
        match self.next() {
            Some(Token::Ident(ch)) => self.variable(*ch),
            _ => Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        }
    }

    fn var_list(&mut self) -> Result<Vec<Variable>> {
        let mut v: Vec<Variable> = vec![];
        loop {
            v.push(self.ident()?);
            match self.next() {
                None => return Ok(v),
                Some(Token::Comma) => continue,
                _ => return Err(error!(SyntaxError; "EXPECTED END OR SEPARATOR")),
            }
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) => {"UNEXPECTED TOKEN"}
                Literal(_) => {"EXPECTED LITERAL"}
                Word(super::token::Word::Then) => {"EXPECTED THEN"}
                Word(_) => {"EXPECTED RESERVED WORD"}
                Operator(super::token::Operator::Equal) => {"EXPECTED EQUALS SIGN"}
                Operator(_) => {"EXPECTED OPERATOR"}
                Ident(_) => {"EXPECTED VARIABLE"}
                LParen => {"EXPECTED LEFT PARENTHESIS"}
                RParen => {"EXPECTED RIGHT PARENTHESIS"}
                Comma => {"EXPECTED COMMA"}
            }
        ))
    }
}

impl Expression {
    fn for_binary_op(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match op {
            Multiply => Expression::Multiply(lhs, rhs),
            Divide => Expression::Divide(lhs, rhs),
            Plus => Expression::Add(lhs, rhs),
            Minus => Expression::Subtract(lhs, rhs),
            Equal => Expression::Equal(lhs, rhs),
            NotEqual => Expression::NotEqual(lhs, rhs),
            Less => Expression::Less(lhs, rhs),
            LessEqual => Expression::LessEqual(lhs, rhs),
            Greater => Expression::Greater(lhs, rhs),
            GreaterEqual => Expression::GreaterEqual(lhs, rhs),
        }
    }

    fn op_precedence(op: Operator) -> usize {
        use Operator::*;
        match op {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => 5,
            Plus | Minus => 10,
            Multiply | Divide => 20,
        }
    }

    fn for_literal(s: &str, negative: bool) -> Result<Expression> {
        let parsed = if negative {
            format!("-{}", s).parse::<i64>()
        } else {
            s.parse::<i64>()
        };
        match parsed {
            Ok(n) => Ok(Expression::Integer(n)),
            Err(_) => Err(error!(Overflow; "INTEGER LITERAL OUT OF RANGE")),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        use Word::*;
        match word {
            Clear => Ok(Statement::Clear),
            End => Ok(Statement::End),
            Goto => Self::r#goto(parse),
            If => Self::r#if(parse),
            Input => Self::r#input(parse),
            Let => Self::r#let(parse),
            List => Ok(Statement::List),
            Print => Self::r#print(parse),
            Rem => Self::r#rem(parse),
            Run => Ok(Statement::Run),
            Then => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
            Dim | For | Gosub | Next | Return | Step | To | Wend | While => {
                Err(error!(UnknownStatement; word.as_str()))
            }
        }
    }

    fn r#goto(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Goto(parse.expression()?))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let predicate = parse.expression()?;
        parse.expect(Token::Word(Word::Then))?;
        let then = parse.statement()?;
        Ok(Statement::If(predicate, Box::new(then)))
    }

    fn r#input(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Input(parse.var_list()?))
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let var = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let item = parse.item()?;
        Ok(Statement::Let(var, item))
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Print(parse.item_list()?))
    }

    fn r#rem(parse: &mut Parser) -> Result<Statement> {
        let text = match parse.peek() {
            Some(Token::Unknown(s)) => s.trim(),
            _ => "",
        };
        let text: Rc<str> = text.into();
        if !text.is_empty() {
            parse.next();
        }
        Ok(Statement::Rem(text))
    }
}
