use super::{Operation, Val, Var};
use crate::lang::ast::{Expression, Item};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Resolves an expression against the current variables.
pub fn evaluate(expr: &Expression, vars: &Var) -> Result<Val> {
    use Expression::*;
    match expr {
        Integer(n) => Ok(Val::Integer(*n)),
        Var(var) => vars.fetch(*var),
        Multiply(l, r) => Operation::multiply(evaluate(l, vars)?, evaluate(r, vars)?),
        Divide(l, r) => Operation::divide(evaluate(l, vars)?, evaluate(r, vars)?),
        Add(l, r) => Operation::sum(evaluate(l, vars)?, evaluate(r, vars)?),
        Subtract(l, r) => Operation::subtract(evaluate(l, vars)?, evaluate(r, vars)?),
        Equal(l, r) => Operation::equal(evaluate(l, vars)?, evaluate(r, vars)?),
        NotEqual(l, r) => Operation::not_equal(evaluate(l, vars)?, evaluate(r, vars)?),
        Less(l, r) => Operation::less(evaluate(l, vars)?, evaluate(r, vars)?),
        LessEqual(l, r) => Operation::less_equal(evaluate(l, vars)?, evaluate(r, vars)?),
        Greater(l, r) => Operation::greater(evaluate(l, vars)?, evaluate(r, vars)?),
        GreaterEqual(l, r) => Operation::greater_equal(evaluate(l, vars)?, evaluate(r, vars)?),
    }
}

/// String literals evaluate to their text.
pub fn evaluate_item(item: &Item, vars: &Var) -> Result<Val> {
    match item {
        Item::String(s) => Ok(Val::String(s.clone())),
        Item::Expression(expr) => evaluate(expr, vars),
    }
}
