/*!
## Terminal front end

Interactive console for the machine: prompts for a BasicML program
file, loads and runs it, and implements the machine's I/O port over a
line editor. `CTRL-C` interrupts a running program; `CTRL-D` exits.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

use crate::error;
use crate::lang::Error;
use crate::mach::{IoPort, Loader, Memory, Runtime, Status, Word};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Steps executed between interrupt checks.
const STEP_SLICE: usize = 5000;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let command = Interface::new("UVSim")?;
    command.set_prompt("FILE? ")?;
    let input = Interface::new("INPUT")?;
    input.set_prompt("ENTER A NUMBER: ")?;
    println!("UVSIM BASICML MACHINE");
    let mut last_program: Option<(Memory, usize)> = None;
    loop {
        let line = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        command.add_history_unique(line.to_string());
        if let Some(filename) = strip_save_command(line) {
            match &last_program {
                Some((memory, count)) => match save(memory, *count, filename) {
                    Ok(_) => println!("SAVED {} WORDS TO {}", count, filename),
                    Err(error) => print_error(&error),
                },
                None => print_error(&error!(InternalError; "NOTHING TO SAVE")),
            }
            continue;
        }
        interrupted.store(false, Ordering::SeqCst);
        match load(line) {
            Ok(lines) => {
                if let Some(program) = run_program(&lines, &input, &interrupted) {
                    last_program = Some(program);
                }
            }
            Err(error) => print_error(&error),
        }
    }
    Ok(())
}

/// Loads the given lines, reports warnings, and runs the machine in
/// interruptible slices. Returns the loaded image so it can be saved.
fn run_program(
    lines: &[String],
    input: &Interface<DefaultTerminal>,
    interrupted: &Arc<AtomicBool>,
) -> Option<(Memory, usize)> {
    let load = match Loader::new().load(lines) {
        Ok(load) => load,
        Err(error) => {
            print_error(&error);
            return None;
        }
    };
    for warning in &load.warnings {
        print_error(warning);
    }
    println!("LOADED {} INSTRUCTIONS ({} FORMAT)", load.count, load.format);
    let image = (load.memory.clone(), load.count);
    let mut runtime = Runtime::new(load.memory);
    let mut port = TermPort { input };
    loop {
        match runtime.execute_n(&mut port, STEP_SLICE) {
            Status::Running => {
                if interrupted.load(Ordering::SeqCst) {
                    println!("BREAK");
                    break;
                }
            }
            Status::Halted => {
                println!("HALTED");
                break;
            }
            Status::Faulted => {
                match runtime.fault() {
                    Some(fault) => print_error(fault),
                    None => print_error(&error!(InternalError; "FAULT WITHOUT CAUSE")),
                }
                break;
            }
        }
    }
    println!(
        "ACCUMULATOR {} COUNTER {}",
        runtime.accumulator(),
        runtime.program_counter()
    );
    Some(image)
}

/// I/O port over the line editor. `READ` blocks on the prompt; bad text
/// is reported as `InvalidInput` and faults the run.
struct TermPort<'a> {
    input: &'a Interface<DefaultTerminal>,
}

impl<'a> IoPort for TermPort<'a> {
    fn request_input(&mut self) -> Result<Word, Error> {
        match self.input.read_line() {
            Ok(ReadResult::Input(text)) => {
                let text = text.trim();
                self.input.add_history_unique(text.to_string());
                text.parse().map_err(|_| error!(InvalidInput; text))
            }
            Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => {
                Err(error!(InvalidInput; "INPUT INTERRUPTED"))
            }
            Err(error) => Err(error!(InternalError; &error.to_string())),
        }
    }

    fn emit_output(&mut self, value: Word) {
        println!("{}", value);
    }
}

fn strip_save_command(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("SAVE ").or_else(|| line.strip_prefix("save "))?;
    let rest = rest.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

fn print_error(error: &Error) {
    println!("{}", Style::new().bold().paint(error.to_string()));
}

/// Read a program file into lines for the loader.
pub fn load(filename: &str) -> Result<Vec<String>, Error> {
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; &msg)),
                _ => return Err(error!(InternalError; &msg)),
            }
        }
    };
    let mut lines = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(error) => return Err(error!(InternalError; &error.to_string())),
        }
    }
    Ok(lines)
}

/// Write the first `count` words of memory, one per line, zero-padded
/// to the format's width.
pub fn save(memory: &Memory, count: usize, filename: &str) -> Result<(), Error> {
    if count == 0 {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(InternalError; &error.to_string())),
    };
    let format = memory.format();
    for word in memory.words().iter().take(count) {
        if let Err(error) = writeln!(file, "{}", format.render(*word)) {
            return Err(error!(InternalError; &error.to_string()));
        }
    }
    Ok(())
}
