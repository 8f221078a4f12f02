#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;

mod config;
mod engine;
pub mod errors;
mod frontend;
mod number;
mod operation;
mod parsing;
#[cfg(test)]
mod testing;

pub use config::{Config, DEFAULT_INVALID_INPUT_LIMIT, DEFAULT_STACK_LIMIT};
pub use engine::{Engine, Instruction, Label, Step};
pub use frontend::{Frontend, Outcome};
pub use number::Number;
pub use operation::{Entry, Operation};
pub use parsing::{classify, Token};
