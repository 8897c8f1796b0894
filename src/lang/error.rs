use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    source_line: Option<usize>,
    column: Column,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            source_line: None,
            column: 0..0,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn in_line_number(&self, line: Option<LineNumber>) -> Error {
        Error {
            line_number: line,
            ..self.clone()
        }
    }

    /// 1-based index of the source text line a load failed on.
    pub fn in_source_line(&self, index: usize) -> Error {
        Error {
            source_line: Some(index),
            ..self.clone()
        }
    }

    pub fn in_column(&self, column: &Column) -> Error {
        if self.column != (0..0) {
            return self.clone();
        }
        Error {
            column: column.clone(),
            ..self.clone()
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    Break = 1,
    SyntaxError = 2,
    UnknownStatement = 3,
    UndefinedVariable = 4,
    Overflow = 6,
    InvalidLineNumber = 8,
    DivisionByZero = 11,
    TypeMismatch = 13,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "BREAK",
            2 => "SYNTAX ERROR",
            3 => "UNKNOWN STATEMENT",
            4 => "UNDEFINED VARIABLE",
            6 => "OVERFLOW",
            8 => "INVALID LINE NUMBER",
            11 => "DIVISION BY ZERO",
            13 => "TYPE MISMATCH",
            _ => "",
        };
        let mut place = String::new();
        if let Some(line_number) = self.line_number {
            place.push_str(&format!(" {}", line_number));
        }
        if let Some(index) = self.source_line {
            place.push_str(&format!(" SOURCE LINE {}", index));
        }
        if (0..0) != self.column {
            place.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if !place.is_empty() {
            write!(f, " IN{}", place)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
