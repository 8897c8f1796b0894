use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    fn integers(lhs: Val, rhs: Val) -> Result<(i64, i64)> {
        Ok((i64::try_from(lhs)?, i64::try_from(rhs)?))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        match l.checked_mul(r) {
            Some(i) => Ok(Val::Integer(i)),
            None => Err(error!(Overflow)),
        }
    }

    /// Truncates toward zero.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        match l.checked_div(r) {
            Some(i) => Ok(Val::Integer(i)),
            None => {
                if r == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        match l.checked_add(r) {
            Some(i) => Ok(Val::Integer(i)),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        match l.checked_sub(r) {
            Some(i) => Ok(Val::Integer(i)),
            None => Err(error!(Overflow)),
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::equal_bool(lhs, rhs)?))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(!Operation::equal_bool(lhs, rhs)?))
    }

    fn equal_bool(lhs: Val, rhs: Val) -> Result<bool> {
        use Val::*;
        match (lhs, rhs) {
            (Boolean(l), Boolean(r)) => Ok(l == r),
            (Boolean(_), _) | (_, Boolean(_)) => Err(error!(TypeMismatch)),
            (lhs, rhs) => Ok(Operation::compare(lhs, rhs)? == Ordering::Equal),
        }
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::compare(lhs, rhs)? == Ordering::Less))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::compare(lhs, rhs)? != Ordering::Greater))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::compare(lhs, rhs)? == Ordering::Greater))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::compare(lhs, rhs)? != Ordering::Less))
    }

    /// Two strings compare as text; anything else compares as integers.
    fn compare(lhs: Val, rhs: Val) -> Result<Ordering> {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => Ok(l.cmp(&r)),
            (Boolean(_), _) | (_, Boolean(_)) => Err(error!(TypeMismatch)),
            (lhs, rhs) => {
                let (l, r) = Operation::integers(lhs, rhs)?;
                Ok(l.cmp(&r))
            }
        }
    }
}
