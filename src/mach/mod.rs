/*!
## Rust Machine Module

This Rust module evaluates statements against the operand stack and the
alias table.

*/

mod alias;
mod command;
mod function;
mod operation;
mod runtime;
mod stack;

pub use alias::Aliases;
pub use command::Command;
pub use function::Function;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::MAX_DEPTH;
pub use stack::Stack;

#[cfg(test)]
mod tests;
