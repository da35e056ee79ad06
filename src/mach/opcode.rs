use super::{Address, Word};
use crate::lang::WordFormat;

/// ## BasicML instruction set
///
/// Every instruction is one word: a 2-digit opcode in front of a memory
/// address operand. The machine has a single accumulator register; all
/// arithmetic runs between it and a memory word.
///
/// For example: `1005` in the old format is `READ` into address 5.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** I/O
    /// Read one word from the I/O port into memory.
    Read,
    /// Emit a memory word to the I/O port.
    Write,

    // *** Data movement
    Load,
    Store,

    // *** Arithmetic
    Add,
    Subtract,
    Divide,
    Multiply,

    // *** Branch control
    /// Unconditional branch to the operand address.
    Branch,
    /// Branch if the accumulator is negative.
    BranchNeg,
    /// Branch if the accumulator is zero.
    BranchZero,
    /// Stop the machine normally.
    Halt,
}

/// Split a word into its opcode code and operand address.
///
/// Pure function of the absolute value of the word; a sign on the
/// instruction word is not part of either field. The operand may name
/// an address past the end of memory, which the runtime validates.
pub fn decode(word: Word, format: WordFormat) -> (Word, Address) {
    let magnitude = word.abs();
    let divisor = format.divisor();
    (magnitude / divisor, (magnitude % divisor) as Address)
}

impl Opcode {
    /// The `None` arm is a reachable state: the runtime reports it as
    /// an `InvalidOpcode` fault rather than an unmatched branch.
    pub fn from_code(code: Word) -> Option<Opcode> {
        use Opcode::*;
        match code {
            10 => Some(Read),
            11 => Some(Write),
            20 => Some(Load),
            21 => Some(Store),
            30 => Some(Add),
            31 => Some(Subtract),
            32 => Some(Divide),
            33 => Some(Multiply),
            40 => Some(Branch),
            41 => Some(BranchNeg),
            42 => Some(BranchZero),
            43 => Some(Halt),
            _ => None,
        }
    }

    pub fn code(self) -> Word {
        use Opcode::*;
        match self {
            Read => 10,
            Write => 11,
            Load => 20,
            Store => 21,
            Add => 30,
            Subtract => 31,
            Divide => 32,
            Multiply => 33,
            Branch => 40,
            BranchNeg => 41,
            BranchZero => 42,
            Halt => 43,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Read => write!(f, "READ"),
            Write => write!(f, "WRITE"),
            Load => write!(f, "LOAD"),
            Store => write!(f, "STORE"),
            Add => write!(f, "ADD"),
            Subtract => write!(f, "SUBTRACT"),
            Divide => write!(f, "DIVIDE"),
            Multiply => write!(f, "MULTIPLY"),
            Branch => write!(f, "BRANCH"),
            BranchNeg => write!(f, "BRANCHNEG"),
            BranchZero => write!(f, "BRANCHZERO"),
            Halt => write!(f, "HALT"),
        }
    }
}
