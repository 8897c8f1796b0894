/*!
## Rust Emit Module

Lowers a parsed Tiny BASIC program into a single C translation unit.
Stored lines become `line_N` labels; direct lines are not compiled.

*/

mod codegen;
mod symbols;

use crate::lang::Line;
use crate::mach::Program;
use log::debug;

/// Emits C source for the numbered lines. A later line with the same
/// number replaces an earlier one, as it would in the interpreter.
pub fn emit(lines: &[Line]) -> String {
    let mut program = Program::new();
    let direct = program.load(lines.to_vec());
    if !direct.is_empty() {
        debug!("{} direct statements not compiled", direct.len());
    }
    codegen::codegen(&program)
}

#[cfg(test)]
mod tests;
