/*!
## Rust Machine Module

This Rust module is the BasicML virtual machine: a fixed-size word
memory, a loader that fills it from program text, and a runtime that
drives the fetch-decode-execute loop against a single accumulator.

*/

pub use crate::lang::{Address, Word};

/// Words of memory in the current machine.
pub const MEMORY_SIZE: usize = 250;

/// Words of memory in the original 100-word machine, still supported
/// as a configuration for old course material.
pub const LEGACY_MEMORY_SIZE: usize = 100;

mod loader;
mod memory;
mod opcode;
mod runtime;
mod state;

pub use loader::Load;
pub use loader::Loader;
pub use memory::Memory;
pub use opcode::decode;
pub use opcode::Opcode;
pub use runtime::run;
pub use runtime::ExecutionResult;
pub use runtime::IoPort;
pub use runtime::Runtime;
pub use state::State;
pub use state::Status;

#[cfg(test)]
mod tests;
