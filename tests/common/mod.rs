use std::collections::VecDeque;
use uvsim::error;
use uvsim::lang::Error;
use uvsim::mach::{IoPort, Word};

/// I/O port scripted with canned input lines, standing in for the
/// human at the terminal.
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
