//! # UVSim
//!
//! An educational virtual machine for the BasicML instruction format:
//! a fixed-size word memory, one accumulator, and a two-digit opcode in
//! front of every operand.
//!
//! Run the `uvsim` binary, give it a program file at the `FILE?`
//! prompt, and the machine loads and executes it:
//! ```text
//! UVSIM BASICML MACHINE
//! FILE? adder.txt
//! LOADED 7 INSTRUCTIONS (OLD FORMAT)
//! ENTER A NUMBER: 4
//! ENTER A NUMBER: 5
//! 9
//! HALTED
//! ACCUMULATOR 9 COUNTER 7
//! ```
//!
//! The machine itself lives in [`mach`] and depends on nothing from the
//! terminal; embedders hand it program lines and an [`mach::IoPort`].

#[path = "doc/basicml.rs"]
#[allow(non_snake_case)]
pub mod _BasicML_Reference;

pub mod lang;
pub mod mach;
pub mod term;
