use super::Val;
use crate::error;
use crate::lang::ast::Variable;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Variable, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    /// Reading a variable that was never assigned is an error.
    pub fn fetch(&self, var: Variable) -> Result<Val> {
        match self.vars.get(&var) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UndefinedVariable; var.name())),
        }
    }

    pub fn store(&mut self, var: Variable, value: Val) {
        self.vars.insert(var, value);
    }
}
