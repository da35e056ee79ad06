use super::{Address, Word};
use crate::lang::Error;

/// Where the machine is in its lifecycle. `Halted` and `Faulted` are
/// terminal; a finished machine is discarded, never resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted,
    Faulted,
}

/// ## Machine registers
///
/// One of these is created fresh for every run and mutated only by the
/// runtime, one step at a time. The accumulator's legal range is the
/// loaded format's value domain; the runtime faults before committing
/// a value outside it.
#[derive(Debug, Clone)]
pub struct State {
    pub accumulator: Word,
    pub program_counter: Address,
    pub status: Status,
    pub fault: Option<Error>,
}

impl State {
    pub fn new() -> State {
        State {
            accumulator: 0,
            program_counter: 0,
            status: Status::Running,
            fault: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub(crate) fn halt(&mut self) {
        self.status = Status::Halted;
    }

    pub(crate) fn fault(&mut self, error: Error) {
        self.status = Status::Faulted;
        self.fault = Some(error);
    }
}

impl Default for State {
    fn default() -> State {
        State::new()
    }
}
