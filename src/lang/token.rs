#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(char),
    LParen,
    RParen,
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(c) => write!(f, "{}", c),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(s) => write!(f, "{}", s),
            String(s) => {
                write!(f, "\"")?;
                for ch in s.chars() {
                    match ch {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\u{8}' => write!(f, "\\b")?,
                        '\u{c}' => write!(f, "\\f")?,
                        '\n' => write!(f, "\\n")?,
                        '\r' => write!(f, "\\r")?,
                        '\t' => write!(f, "\\t")?,
                        _ => write!(f, "{}", ch)?,
                    }
                }
                write!(f, "\"")
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Clear,
    End,
    Goto,
    If,
    Input,
    Let,
    List,
    Print,
    Rem,
    Run,
    Then,
    // Reserved by the wider BASIC family; no statement here uses them.
    Dim,
    For,
    Gosub,
    Next,
    Return,
    Step,
    To,
    Wend,
    While,
}

const WORDS: &[(&str, Word)] = &[
    ("CLEAR", Word::Clear),
    ("END", Word::End),
    ("GOTO", Word::Goto),
    ("IF", Word::If),
    ("INPUT", Word::Input),
    ("LET", Word::Let),
    ("LIST", Word::List),
    ("PRINT", Word::Print),
    ("REM", Word::Rem),
    ("RUN", Word::Run),
    ("THEN", Word::Then),
    ("DIM", Word::Dim),
    ("FOR", Word::For),
    ("GOSUB", Word::Gosub),
    ("NEXT", Word::Next),
    ("RETURN", Word::Return),
    ("STEP", Word::Step),
    ("TO", Word::To),
    ("WEND", Word::Wend),
    ("WHILE", Word::While),
];

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        WORDS.iter().find(|(w, _)| *w == s).map(|(_, word)| *word)
    }

    pub fn as_str(self) -> &'static str {
        WORDS
            .iter()
            .find(|(_, word)| *word == self)
            .map(|(s, _)| *s)
            .unwrap_or("")
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

/// Longest spellings first so `<>` never lexes as `<` then `>`.
pub const OPERATORS: &[(&str, Operator)] = &[
    ("<>", Operator::NotEqual),
    ("><", Operator::NotEqual),
    ("<=", Operator::LessEqual),
    (">=", Operator::GreaterEqual),
    ("<", Operator::Less),
    (">", Operator::Greater),
    ("=", Operator::Equal),
    ("+", Operator::Plus),
    ("-", Operator::Minus),
    ("*", Operator::Multiply),
    ("/", Operator::Divide),
];

impl Operator {
    pub fn is_relational(self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Multiply | Divide | Plus | Minus => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}
