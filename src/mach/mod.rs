/*!
## Rust Machine Module

This Rust module is the interpreter for Tiny BASIC: the stored program,
variable memory, expression evaluation, and the run loop.

*/

mod eval;
mod operation;
mod program;
mod runtime;
mod val;
mod var;

pub use eval::evaluate;
pub use eval::evaluate_item;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Cursor;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::PROMPT;
pub use val::Val;
pub use val::{FALSE, TRUE};
pub use var::Var;

#[cfg(test)]
mod tests;
