use super::Word;

/// The two BasicML word widths.
///
/// A program commits to one format at load time, inferred from the
/// character length of its first substantive line (sign included, as
/// the file format has always counted it). Every later line must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFormat {
    /// 4-character words, values in `-9999..=9999`, 2-digit opcodes.
    Old,
    /// 6-character words, values in `-99999..=99999`, 2-digit opcodes
    /// behind a 3-digit operand.
    New,
}

impl WordFormat {
    /// Infer a format from the character length of a trimmed line.
    pub fn from_width(width: usize) -> Option<WordFormat> {
        match width {
            4 => Some(WordFormat::Old),
            6 => Some(WordFormat::New),
            _ => None,
        }
    }

    pub fn width(self) -> usize {
        match self {
            WordFormat::Old => 4,
            WordFormat::New => 6,
        }
    }

    /// Largest magnitude a word may hold under this format.
    pub fn magnitude(self) -> Word {
        match self {
            WordFormat::Old => 9_999,
            WordFormat::New => 99_999,
        }
    }

    /// Splitting point between opcode and operand.
    pub fn divisor(self) -> Word {
        match self {
            WordFormat::Old => 100,
            WordFormat::New => 1_000,
        }
    }

    pub fn contains(self, word: Word) -> bool {
        word >= -self.magnitude() && word <= self.magnitude()
    }

    /// Sentinel line that ends ingestion early when saved at the tail
    /// of a program file.
    pub fn terminator(self) -> &'static str {
        match self {
            WordFormat::Old => "-9999",
            WordFormat::New => "-99999",
        }
    }

    /// Both sentinels are honored regardless of format since the
    /// terminator is seen before the format is known.
    pub fn is_terminator(line: &str) -> bool {
        line == "-99999" || line == "-9999"
    }

    /// Render a word for saving: zero-padded to the format width, the
    /// sign occupying one column when present.
    pub fn render(self, word: Word) -> String {
        match self {
            WordFormat::Old => format!("{:04}", word),
            WordFormat::New => format!("{:06}", word),
        }
    }
}

impl std::fmt::Display for WordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            WordFormat::Old => write!(f, "OLD"),
            WordFormat::New => write!(f, "NEW"),
        }
    }
}
