use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

/// The truth token: how a true comparison prints.
pub const TRUE: &str = "True";
pub const FALSE: &str = "False";

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    String(Rc<str>),
    Boolean(bool),
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            String(s) => write!(f, "{}", s),
            Boolean(true) => write!(f, "{}", TRUE),
            Boolean(false) => write!(f, "{}", FALSE),
        }
    }
}

/// Text takes part in arithmetic when it spells a decimal integer.
impl TryFrom<Val> for i64 {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(n),
            Val::String(s) => match s.trim().parse::<i64>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(TypeMismatch; "TEXT IS NOT A NUMBER")),
            },
            Val::Boolean(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.into())
    }
}
