use super::Address;

/// Diagnostic carried by every fallible operation in the crate.
///
/// The loader reports these with a source line number, the runtime with
/// the faulting memory address, and either may attach a free-form detail
/// such as the offending text or value.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<usize>,
    address: Option<Address>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .at_address($addr)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            address: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn in_line_number(mut self, line: usize) -> Error {
        debug_assert!(self.line_number.is_none());
        self.line_number = Some(line);
        self
    }

    pub fn at_address(mut self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        self.address = Some(address);
        self
    }

    pub fn message(mut self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.to_string();
        self
    }
}

/// Closed set of everything that can go wrong while loading or running
/// a BasicML program. Load errors are fatal except `OutOfRangeValue`,
/// which the loader surfaces as a warning and skips past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // *** Load-time
    UnrecognizedWordLength = 1,
    MixedWordFormat = 2,
    ProgramTooLarge = 3,
    MalformedInstruction = 4,
    OutOfRangeValue = 5,

    // *** Execution-time
    InvalidAddress = 10,
    InvalidInput = 11,
    Overflow = 12,
    DivisionByZero = 13,
    InvalidOpcode = 14,

    // *** Front end
    FileNotFound = 20,
    InternalError = 21,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            UnrecognizedWordLength => "UNRECOGNIZED WORD LENGTH",
            MixedWordFormat => "MIXED WORD FORMATS",
            ProgramTooLarge => "PROGRAM TOO LARGE",
            MalformedInstruction => "MALFORMED INSTRUCTION",
            OutOfRangeValue => "VALUE OUT OF RANGE",
            InvalidAddress => "INVALID ADDRESS",
            InvalidInput => "INVALID INPUT",
            Overflow => "OVERFLOW",
            DivisionByZero => "DIVISION BY ZERO",
            InvalidOpcode => "INVALID OPCODE",
            FileNotFound => "FILE NOT FOUND",
            InternalError => "INTERNAL ERROR",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN LINE {}", line_number));
        }
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {:02}", address));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", code_str, suffix)
    }
}
