use super::{decode, Address, Loader, Memory, Opcode, State, Status, Word};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Collaborator consulted by `READ` and `WRITE`. The terminal front end
/// implements this over an interactive prompt; tests script it.
pub trait IoPort {
    /// Supply one word. An implementation returns `InvalidInput` when
    /// the text it collected does not parse as an integer; the runtime
    /// separately faults on values outside the format's domain.
    fn request_input(&mut self) -> Result<Word>;
    fn emit_output(&mut self, value: Word);
}

/// The observable outcome of one run: final registers, how the machine
/// finished, every word `WRITE` emitted, in order, and any warnings the
/// loader raised on the way in (empty for a hand-built `Runtime`).
#[derive(Debug)]
pub struct ExecutionResult {
    pub accumulator: Word,
    pub program_counter: Address,
    pub status: Status,
    pub fault: Option<Error>,
    pub outputs: Vec<Word>,
    pub warnings: Vec<Error>,
}

/// ## Execution engine
///
/// Owns one `Memory` and one `State` for exactly one run; construct a
/// fresh `Runtime` per program so nothing leaks between runs. The loop
/// is plain and sequential, blocking only inside `IoPort::request_input`.
/// Branch cycles are legal and unbounded, so embedders wanting a limit
/// drive `execute_n` instead of `execute`.
pub struct Runtime {
    memory: Memory,
    state: State,
    outputs: Vec<Word>,
}

impl Runtime {
    pub fn new(memory: Memory) -> Runtime {
        Runtime {
            memory,
            state: State::new(),
            outputs: Vec::new(),
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn accumulator(&self) -> Word {
        self.state.accumulator
    }

    pub fn program_counter(&self) -> Address {
        self.state.program_counter
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn fault(&self) -> Option<&Error> {
        self.state.fault.as_ref()
    }

    pub fn outputs(&self) -> &[Word] {
        &self.outputs
    }

    /// One fetch-decode-execute step. A machine that is already halted
    /// or faulted stays put. Running off the end of memory is reported
    /// as a normal halt.
    pub fn step(&mut self, io: &mut dyn IoPort) -> Status {
        if !self.state.is_running() {
            return self.state.status;
        }
        if self.state.program_counter >= self.memory.capacity() {
            self.state.halt();
            return self.state.status;
        }
        if let Err(error) = self.dispatch(io) {
            self.state.fault(error);
        }
        self.state.status
    }

    /// Step until the machine halts or faults. May never return if the
    /// program loops forever.
    pub fn execute(&mut self, io: &mut dyn IoPort) -> Status {
        loop {
            if self.step(io) != Status::Running {
                return self.state.status;
            }
        }
    }

    /// Step at most `steps` times, returning `Running` when the budget
    /// runs out first. Front ends use this to stay interruptible.
    pub fn execute_n(&mut self, io: &mut dyn IoPort, steps: usize) -> Status {
        for _ in 0..steps {
            if self.step(io) != Status::Running {
                break;
            }
        }
        self.state.status
    }

    /// Borrowing view of the result so far; the runtime stays usable.
    pub fn result(&self) -> ExecutionResult {
        ExecutionResult {
            accumulator: self.state.accumulator,
            program_counter: self.state.program_counter,
            status: self.state.status,
            fault: self.state.fault.clone(),
            outputs: self.outputs.clone(),
            warnings: Vec::new(),
        }
    }

    pub fn into_result(self) -> ExecutionResult {
        ExecutionResult {
            accumulator: self.state.accumulator,
            program_counter: self.state.program_counter,
            status: self.state.status,
            fault: self.state.fault,
            outputs: self.outputs,
            warnings: Vec::new(),
        }
    }

    fn dispatch(&mut self, io: &mut dyn IoPort) -> Result<()> {
        use Opcode::*;
        let format = self.memory.format();
        let here = self.state.program_counter;
        let instruction = self.memory.fetch(here);
        let (code, operand) = decode(instruction, format);
        // The operand must name a real address before any effect is
        // applied, branch targets included.
        if operand >= self.memory.capacity() {
            return Err(error!(InvalidAddress, ..operand));
        }
        self.state.program_counter += 1;
        let opcode = match Opcode::from_code(code) {
            Some(opcode) => opcode,
            None => return Err(error!(InvalidOpcode, ..here; &format!("OPCODE {}", code))),
        };
        match opcode {
            Read => {
                let value = io.request_input()?;
                if !format.contains(value) {
                    return Err(error!(InvalidInput, ..operand; &value.to_string()));
                }
                self.memory.store(operand, value);
            }
            Write => {
                let value = self.memory.fetch(operand);
                self.outputs.push(value);
                io.emit_output(value);
            }
            Load => self.state.accumulator = self.memory.fetch(operand),
            Store => self.memory.store(operand, self.state.accumulator),
            Add => {
                let rhs = self.memory.fetch(operand);
                let result = self.state.accumulator.checked_add(rhs);
                self.commit(result, opcode, here)?;
            }
            Subtract => {
                let rhs = self.memory.fetch(operand);
                let result = self.state.accumulator.checked_sub(rhs);
                self.commit(result, opcode, here)?;
            }
            Multiply => {
                let rhs = self.memory.fetch(operand);
                let result = self.state.accumulator.checked_mul(rhs);
                self.commit(result, opcode, here)?;
            }
            Divide => {
                let rhs = self.memory.fetch(operand);
                if rhs == 0 {
                    return Err(error!(DivisionByZero, ..operand));
                }
                let result = floor_div(self.state.accumulator, rhs);
                self.commit(Some(result), opcode, here)?;
            }
            Branch => self.state.program_counter = operand,
            BranchNeg => {
                if self.state.accumulator < 0 {
                    self.state.program_counter = operand;
                }
            }
            BranchZero => {
                if self.state.accumulator == 0 {
                    self.state.program_counter = operand;
                }
            }
            Halt => self.state.halt(),
        }
        Ok(())
    }

    /// Arithmetic results land in the accumulator only when they fit
    /// the format's domain; a faulting operation leaves the accumulator
    /// holding its previous, still-legal value.
    fn commit(&mut self, result: Option<Word>, opcode: Opcode, here: Address) -> Result<()> {
        match result {
            Some(value) if self.memory.format().contains(value) => {
                self.state.accumulator = value;
                Ok(())
            }
            _ => Err(error!(Overflow, ..here; &opcode.to_string())),
        }
    }
}

/// Quotient rounded toward negative infinity, the division BasicML has
/// always used, for both formats.
fn floor_div(lhs: Word, rhs: Word) -> Word {
    let quotient = lhs / rhs;
    if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
        quotient - 1
    } else {
        quotient
    }
}

/// Load and execute in one call. Loader warnings ride along in
/// `ExecutionResult::warnings` so nothing the loader skipped goes
/// unreported.
pub fn run<I, S>(lines: I, io: &mut dyn IoPort) -> Result<ExecutionResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let load = Loader::new().load(lines)?;
    let mut runtime = Runtime::new(load.memory);
    runtime.execute(io);
    let mut result = runtime.into_result();
    result.warnings = load.warnings;
    Ok(result)
}
