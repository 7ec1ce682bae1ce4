/*!
# Machine Module

This module is the goofy execution engine: a dispatch loop over
classified tokens, an integer stack, and the per-opcode handlers.

*/

pub type Address = usize;

mod engine;
mod error;
mod opcode;
mod stack;

pub use engine::Engine;
pub use engine::Event;
pub use error::Error;
pub use error::ErrorCode;
pub use opcode::Opcode;
pub use stack::Stack;

#[cfg(test)]
mod tests;
