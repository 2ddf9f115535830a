/*!
# Rust Language Module

This Rust module normalizes input lines and classifies them into
statements for the calculator.

*/

#[macro_use]
mod error;
mod line;
mod number;
mod paren;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use line::{Continuation, Line, ESCAPE};
pub use parse::parse;

pub mod ast;
