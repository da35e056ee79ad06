use super::*;
use crate::error;
use crate::lang::{Error, ErrorCode, WordFormat};
use std::collections::VecDeque;

mod loader_test;

/// I/O port scripted with canned input lines; collects everything the
/// machine writes.
pub struct ScriptedPort {
    inputs: VecDeque<&'static str>,
    pub outputs: Vec<Word>,
}

impl ScriptedPort {
    pub fn new() -> ScriptedPort {
        ScriptedPort::with_inputs(&[])
    }

    pub fn with_inputs(inputs: &[&'static str]) -> ScriptedPort {
        ScriptedPort {
            inputs: inputs.iter().copied().collect(),
            outputs: Vec::new(),
        }
    }
}

impl IoPort for ScriptedPort {
    fn request_input(&mut self) -> Result<Word, Error> {
        match self.inputs.pop_front() {
            Some(text) => text
                .trim()
                .parse()
                .map_err(|_| error!(InvalidInput; text)),
            None => Err(error!(InternalError; "SCRIPT OUT OF INPUT")),
        }
    }

    fn emit_output(&mut self, value: Word) {
        self.outputs.push(value);
    }
}

/// Old-format machine with `words` stored from address 0.
pub fn machine(words: &[Word]) -> Runtime {
    let mut memory = Memory::new(WordFormat::Old);
    for (address, word) in words.iter().enumerate() {
        memory.store(address, *word);
    }
    Runtime::new(memory)
}
