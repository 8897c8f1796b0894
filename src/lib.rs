//! # Tiny BASIC
//!
//! A line-numbered BASIC with single-letter variables, integer
//! arithmetic, and `GOTO`. Programs can be run by the interpreter or
//! lowered to C.
//!
//! ```
//! use tinybasic::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::new();
//! runtime.enter("10 LET A = 0\n20 PRINT A+1,A+2,A+3\nRUN");
//! let mut out = String::new();
//! loop {
//!     match runtime.execute(100) {
//!         Event::Print(s) => out.push_str(&s),
//!         Event::Stopped => break,
//!         _ => {}
//!     }
//! }
//! assert_eq!(out, "1 2 3\n");
//! ```
//!
//! Statements: `PRINT`, `LET`, `INPUT`, `IF ... THEN`, `GOTO`, `RUN`,
//! `END`, `CLEAR`, `LIST`, and `REM`.

pub mod emit;
pub mod lang;
pub mod mach;
pub mod term;
