use super::{Memory, Word, MEMORY_SIZE};
use crate::error;
use crate::lang::{Error, WordFormat};

type Result<T> = std::result::Result<T, Error>;

/// A successfully loaded program: memory filled from address 0, the
/// format the file committed to, how many words were accepted, and any
/// out-of-range lines that were skipped along the way.
#[derive(Debug)]
pub struct Load {
    pub memory: Memory,
    pub format: WordFormat,
    pub count: usize,
    pub warnings: Vec<Error>,
}

/// ## Program loader
///
/// Turns an ordered sequence of text lines into a `Memory`. The first
/// substantive line fixes the word format for the whole file. Fatal
/// errors abort with nothing committed; a numeric value outside the
/// format's domain is only a warning and the line is skipped.
pub struct Loader {
    capacity: usize,
}

impl Loader {
    pub fn new() -> Loader {
        Loader::with_capacity(MEMORY_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Loader {
        Loader { capacity }
    }

    pub fn load<I, S>(&self, lines: I) -> Result<Load>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut format: Option<WordFormat> = None;
        let mut words: Vec<Word> = Vec::new();
        let mut warnings: Vec<Error> = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            // The terminator is honored before the format is known, so
            // both sentinels stop any file.
            if WordFormat::is_terminator(line) {
                break;
            }
            let format = match format {
                Some(format) => {
                    if line.len() != format.width() {
                        return Err(error!(MixedWordFormat, line_number; line));
                    }
                    format
                }
                None => match WordFormat::from_width(line.len()) {
                    Some(detected) => {
                        format = Some(detected);
                        detected
                    }
                    None => {
                        return Err(error!(UnrecognizedWordLength, line_number; line));
                    }
                },
            };
            if words.len() >= self.capacity {
                return Err(error!(ProgramTooLarge, line_number));
            }
            let word = match line.parse::<Word>() {
                Ok(word) => word,
                Err(_) => return Err(error!(MalformedInstruction, line_number; line)),
            };
            if !format.contains(word) {
                warnings.push(error!(OutOfRangeValue, line_number; &word.to_string()));
                continue;
            }
            words.push(word);
        }
        let format = match format {
            Some(format) => format,
            None => return Err(error!(UnrecognizedWordLength; "EMPTY PROGRAM")),
        };
        let mut memory = Memory::with_capacity(format, self.capacity);
        for (address, word) in words.iter().enumerate() {
            memory.store(address, *word);
        }
        Ok(Load {
            memory,
            format,
            count: words.len(),
            warnings,
        })
    }
}

impl Default for Loader {
    fn default() -> Loader {
        Loader::new()
    }
}
