use super::{Address, Word, MEMORY_SIZE};
use crate::lang::WordFormat;

/// ## Fixed-capacity word store
///
/// Addresses are indices into a zero-initialized vector of words. The
/// store also carries the word format the program was loaded under,
/// which fixes the value domain of every word for the life of the run.
#[derive(Debug, Clone)]
pub struct Memory {
    words: Vec<Word>,
    format: WordFormat,
}

impl Memory {
    pub fn new(format: WordFormat) -> Memory {
        Memory::with_capacity(format, MEMORY_SIZE)
    }

    pub fn with_capacity(format: WordFormat, capacity: usize) -> Memory {
        Memory {
            words: vec![0; capacity],
            format,
        }
    }

    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    pub fn format(&self) -> WordFormat {
        self.format
    }

    /// Callers validate addresses against `capacity()` before use; the
    /// runtime faults with `InvalidAddress` rather than reach here with
    /// one out of bounds.
    pub fn fetch(&self, address: Address) -> Word {
        self.words[address]
    }

    pub fn store(&mut self, address: Address, word: Word) {
        self.words[address] = word;
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
