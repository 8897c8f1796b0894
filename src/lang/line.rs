use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::LineNumber;
use std::rc::Rc;

/// One source line: an optional line number and its parsed statement.
/// Lines without a number are direct (immediate) statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: Option<LineNumber>,
    tokens: Vec<Token>,
    statement: Rc<Statement>,
}

impl Line {
    pub fn new(source_line: &str) -> Result<Line, Error> {
        let (line_number, tokens) = lex(source_line);
        let number = match line_number {
            Some(s) => Some(Line::line_number(&s)?),
            None => None,
        };
        let statement = parse(number, &tokens)?;
        Ok(Line {
            number,
            tokens,
            statement: Rc::new(statement),
        })
    }

    fn line_number(s: &str) -> Result<LineNumber, Error> {
        if s.starts_with('-') {
            return Err(error!(InvalidLineNumber; "NEGATIVE LINE NUMBER"));
        }
        match s.parse::<LineNumber>() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(InvalidLineNumber; "LINE NUMBER OUT OF RANGE")),
        }
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn statement(&self) -> &Rc<Statement> {
        &self.statement
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self
            .tokens
            .iter()
            .filter(|t| !matches!(t, Token::Whitespace(_)))
            .map(|t| t.to_string().trim().to_string())
            .collect::<Vec<String>>()
            .join(" ");
        match self.number {
            Some(number) => write!(f, "{} {}", number, s),
            None => write!(f, "{}", s),
        }
    }
}
