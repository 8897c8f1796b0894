/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the Tiny BASIC
language. Source text becomes a sequence of [`Line`] records, each an
optional line number and one parsed [`ast::Statement`].

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use parse::parse_program;

pub type LineNumber = u32;
pub type Column = std::ops::Range<usize>;

#[cfg(test)]
mod tests;
