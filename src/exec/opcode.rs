/// ## The goofy instruction catalog
///
/// Every operation works on the integer stack; there are no registers
/// and no variables. `SHOVE 3 SHOVE 4 YEET` leaves `[1]` on the stack.
///
/// The catalog is closed. An uppercase word the classifier marks as an
/// instruction but which is not listed here is reported as unsupported
/// at dispatch time.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push the integer operand, e.g. `SHOVE 3`.
    Shove,

    // *** Arithmetic, two-pop or inline-operand form
    /// Subtract: first popped minus second popped, or minus the inline
    /// literal.
    Yeet,
    /// Add.
    Glue,
    /// Multiply.
    Moosh,
    /// Divide, truncating toward zero. A zero divisor is fatal.
    Snip,

    // *** I/O
    /// Print the following token's literal, quotes stripped.
    Yell,
    /// Read one line of input as a signed integer and push it.
    Snoop,

    // *** Control
    /// Jump to a label when the stack top passes a comparison,
    /// e.g. `BOUNCE > 0 #LOOP`.
    Bounce,
    /// Halt, reporting success. Whatever follows is never dispatched.
    Freeze,
}

impl Opcode {
    /// Catalog lookup for a classified instruction word.
    pub fn from_literal(literal: &str) -> Option<Opcode> {
        use Opcode::*;
        match literal {
            "SHOVE" => Some(Shove),
            "YEET" => Some(Yeet),
            "GLUE" => Some(Glue),
            "MOOSH" => Some(Moosh),
            "SNIP" => Some(Snip),
            "YELL" => Some(Yell),
            "SNOOP" => Some(Snoop),
            "BOUNCE" => Some(Bounce),
            "FREEZE" => Some(Freeze),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Shove => write!(f, "SHOVE"),
            Yeet => write!(f, "YEET"),
            Glue => write!(f, "GLUE"),
            Moosh => write!(f, "MOOSH"),
            Snip => write!(f, "SNIP"),
            Yell => write!(f, "YELL"),
            Snoop => write!(f, "SNOOP"),
            Bounce => write!(f, "BOUNCE"),
            Freeze => write!(f, "FREEZE"),
        }
    }
}
