use super::token::*;

/// Splits one source line into its line number text, if any, and tokens.
/// The line number is returned unparsed so a negative or oversized number
/// can be rejected by the caller rather than lexed as an expression.
pub fn lex(s: &str) -> (Option<String>, Vec<Token>) {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        while let Some(pk) = self.chars().peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.chars().next();
            len += 1;
        }
        Some(Token::Whitespace(len))
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Some(Token::Literal(Literal::Integer(s)))
    }

    fn string(&mut self) -> Option<Token> {
        let quote = self.chars().next()?;
        let mut raw = String::new();
        raw.push(quote);
        let mut s = String::new();
        let mut valid = true;
        loop {
            let ch = match self.chars().next() {
                Some(ch) => ch,
                None => return Some(Token::Unknown(raw)),
            };
            raw.push(ch);
            if ch == quote {
                break;
            }
            if ch == '\\' {
                let esc = match self.chars().next() {
                    Some(esc) => esc,
                    None => return Some(Token::Unknown(raw)),
                };
                raw.push(esc);
                match esc {
                    '\'' | '"' | '/' | '\\' => s.push(esc),
                    'b' => s.push('\u{8}'),
                    'f' => s.push('\u{c}'),
                    'n' => s.push('\n'),
                    'r' => s.push('\r'),
                    't' => s.push('\t'),
                    _ => valid = false,
                }
                continue;
            }
            if (ch as u32) < 0x20 {
                valid = false;
            }
            s.push(ch);
        }
        if valid {
            Some(Token::Literal(Literal::String(s)))
        } else {
            Some(Token::Unknown(raw))
        }
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_alphabetic(*pk) && !is_basic_digit(*pk) && *pk != '_' {
                break;
            }
            s.push(pk.to_ascii_uppercase());
            self.chars().next();
        }
        if let Some(word) = Word::from_string(&s) {
            return Some(Token::Word(word));
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if is_basic_alphabetic(ch) => Some(Token::Ident(ch)),
            _ => Some(Token::Unknown(s)),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let ahead: String = self.chars().clone().take(2).collect();
        for (spelling, op) in OPERATORS {
            if ahead.starts_with(spelling) {
                for _ in 0..spelling.len() {
                    self.chars().next();
                }
                return Some(Token::Operator(*op));
            }
        }
        match self.chars().peek() {
            Some('(') => {
                self.chars().next();
                return Some(Token::LParen);
            }
            Some(')') => {
                self.chars().next();
                return Some(Token::RParen);
            }
            Some(',') => {
                self.chars().next();
                return Some(Token::Comma);
            }
            _ => {}
        }
        let mut s = String::new();
        while let Some(ch) = self.chars().next() {
            s.push(ch);
            match self.chars().peek() {
                Some(pk) if !is_basic_alphabetic(*pk)
                    && !is_basic_digit(*pk)
                    && !is_basic_whitespace(*pk) =>
                {
                    continue
                }
                _ => break,
            }
        }
        Some(Token::Unknown(s))
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if self.remark {
            return Some(Token::Unknown(self.chars.by_ref().collect::<String>()));
        }
        if is_basic_whitespace(pk) {
            return self.whitespace();
        }
        if is_basic_digit(pk) {
            return self.number();
        }
        if is_basic_alphabetic(pk) {
            let r = self.alphabetic();
            if let Some(Token::Word(Word::Rem)) = r {
                self.remark = true;
            }
            return r;
        }
        if pk == '"' || pk == '\'' {
            return self.string();
        }
        self.minutia()
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> (Option<String>, Vec<Token>) {
        let trimmed = s.trim_start_matches(is_basic_whitespace);
        let mut ln = 0;
        if trimmed.starts_with('-') {
            ln = 1;
        }
        let digits = trimmed[ln..].chars().take_while(|c| is_basic_digit(*c)).count();
        let (line_number, rest) = if digits > 0 {
            let (number, rest) = trimmed.split_at(ln + digits);
            (Some(number.to_string()), rest)
        } else {
            (None, s)
        };
        let mut tokens = BasicLexer {
            chars: rest.chars().peekable(),
            remark: false,
        }
        .collect();
        BasicLexer::trim_end(&mut tokens);
        (line_number, tokens)
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
        if let Some(Token::Unknown(_)) = tokens.last() {
            if let Some(Token::Unknown(s)) = tokens.pop() {
                tokens.push(Token::Unknown(s.trim_end().to_string()));
            }
        }
    }
}
