/*!
# BasicML Language Module

The textual side of BasicML: the two word formats a program file may be
written in, and the diagnostic type shared by the loader, the machine,
and the terminal front end.

*/

/// A single signed instruction or data value.
pub type Word = i64;

/// A memory location, `0..capacity`.
pub type Address = usize;

#[macro_use]
mod error;
mod format;

pub use error::Error;
pub use error::ErrorCode;
pub use format::WordFormat;

#[cfg(test)]
mod tests;
