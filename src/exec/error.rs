pub struct Error {
    code: u16,
    position: Option<usize>,
    literal: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::exec::Error::new($crate::exec::ErrorCode::$err)
    };
    ($err:ident, $pos:expr) => {
        $crate::exec::Error::new($crate::exec::ErrorCode::$err).at($pos)
    };
    ($err:ident; $lit:expr) => {
        $crate::exec::Error::new($crate::exec::ErrorCode::$err).token($lit)
    };
    ($err:ident, $pos:expr; $lit:expr) => {
        $crate::exec::Error::new($crate::exec::ErrorCode::$err)
            .at($pos)
            .token($lit)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            position: None,
            literal: String::new(),
        }
    }

    /// Attach the 1-based token position the diagnostic points at.
    pub fn at(self, position: usize) -> Error {
        debug_assert!(self.position.is_none());
        Error {
            position: Some(position),
            ..self
        }
    }

    /// Attach the offending literal.
    pub fn token<T: std::fmt::Display>(self, literal: T) -> Error {
        debug_assert!(self.literal.is_empty());
        Error {
            literal: literal.to_string(),
            ..self
        }
    }
}

pub enum ErrorCode {
    EmptyProgram = 1,
    UnrecognizedToken = 2,
    UnsupportedInstruction = 3,
    MissingOperand = 4,
    TypeMismatch = 5,
    StackUnderflow = 6,
    DivideByZero = 7,
    InvalidInput = 8,
    MalformedJump = 9,
    UndefinedLabel = 10,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "EMPTY PROGRAM",
            2 => "UNRECOGNIZED TOKEN",
            3 => "UNSUPPORTED INSTRUCTION",
            4 => "MISSING OPERAND",
            5 => "TYPE MISMATCH",
            6 => "STACK UNDERFLOW",
            7 => "DIVIDE BY ZERO",
            8 => "INVALID INPUT",
            9 => "MALFORMED JUMP",
            10 => "UNDEFINED LABEL",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(position) = self.position {
            suffix.push_str(&format!(" AT {}", position));
        }
        if !self.literal.is_empty() {
            suffix.push_str(&format!("; {}", self.literal));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
