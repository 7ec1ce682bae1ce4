use super::{Address, Error, Opcode, Stack};
use crate::error;
use crate::lang::{Kind, Relop, Token};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// What the engine has to report after a call to `Engine::execute`.
#[derive(Debug)]
pub enum Event {
    /// A single terminal diagnostic. The run is over; the next
    /// `execute` reports `Stopped`.
    Errors(Arc<Vec<Error>>),
    /// Suspended in `SNOOP`, waiting for a line via `Engine::enter`.
    Input,
    /// Output produced by `YELL`, newline terminated.
    Print(String),
    /// The cycle budget ran out with work remaining. Call again.
    Running,
    /// The program finished.
    Stopped,
}

/// ## The goofy virtual machine
///
/// Owns the classified token sequence, the instruction pointer, and the
/// integer stack for exactly one run. Nothing is shared across runs or
/// across engines; independent engines may run on independent threads.
///
/// The engine is pumped, not called once: `execute` runs until it has
/// an event worth reporting or the cycle budget is spent. `SNOOP` is
/// the single suspension point; the host answers it with `enter` and
/// pumps again.
pub struct Engine {
    tokens: Vec<Token>,
    pointer: Address,
    stack: Stack<i64>,
    state: State,
    pending: Option<Error>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Running,
    Input,
    Stopped,
}

impl Engine {
    pub fn new(tokens: Vec<Token>) -> Engine {
        Engine {
            tokens,
            pointer: 0,
            stack: Stack::new(),
            state: State::Running,
            pending: None,
        }
    }

    /// The stack snapshot, bottom to top. On success this is whatever
    /// remains un-popped; after a failure, whatever the failing run had
    /// mutated stays observable.
    pub fn stack(&self) -> &[i64] {
        self.stack.as_slice()
    }

    /// Run up to `cycles` dispatch steps and report what happened.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(error) = self.pending.take() {
            self.state = State::Stopped;
            return Event::Errors(Arc::new(vec![error]));
        }
        match self.state {
            State::Input => return Event::Input,
            State::Stopped => return Event::Stopped,
            State::Running => {}
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => continue,
                Ok(Some(event)) => return event,
                Err(error) => {
                    self.state = State::Stopped;
                    return Event::Errors(Arc::new(vec![error]));
                }
            }
        }
        Event::Running
    }

    /// Supply the line of input `SNOOP` suspended for. Ignored unless
    /// the engine is waiting. The trailing line terminator is not part
    /// of the line; the rest must be an optionally signed integer with
    /// nothing around it. An unparseable line surfaces on the next
    /// `execute`.
    pub fn enter(&mut self, line: &str) {
        if self.state != State::Input {
            return;
        }
        self.state = State::Running;
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        match line.parse::<i64>() {
            Ok(value) => {
                self.stack.push(value);
                self.pointer += 1;
            }
            Err(_) => self.pending = Some(error!(InvalidInput, self.cursor(); line)),
        }
    }

    fn step(&mut self) -> Result<Option<Event>> {
        if self.tokens.is_empty() {
            return Err(error!(EmptyProgram));
        }
        let token = match self.tokens.get(self.pointer) {
            Some(token) => token,
            None => {
                // Running off the end without FREEZE is still success.
                self.state = State::Stopped;
                return Ok(Some(Event::Stopped));
            }
        };
        match token.kind() {
            // Jump destinations are inert markers; a taken BOUNCE sets
            // the pointer right at one.
            Kind::LabelStart => {
                self.pointer += 1;
                Ok(None)
            }
            Kind::Instruction => self.dispatch(),
            _ => Err(error!(UnrecognizedToken, self.cursor(); token.literal())),
        }
    }

    fn dispatch(&mut self) -> Result<Option<Event>> {
        let op = match Opcode::from_literal(self.instruction()) {
            Some(op) => op,
            None => {
                return Err(error!(UnsupportedInstruction, self.cursor(); self.instruction()))
            }
        };
        match op {
            Opcode::Shove => self.shove().map(|_| None),
            Opcode::Yeet | Opcode::Glue | Opcode::Moosh | Opcode::Snip => {
                self.arithmetic(op).map(|_| None)
            }
            Opcode::Yell => self.yell().map(Some),
            Opcode::Snoop => {
                self.state = State::Input;
                Ok(Some(Event::Input))
            }
            Opcode::Bounce => self.bounce().map(|_| None),
            Opcode::Freeze => {
                self.state = State::Stopped;
                Ok(Some(Event::Stopped))
            }
        }
    }

    fn shove(&mut self) -> Result<()> {
        let value = match self.tokens.get(self.pointer + 1) {
            Some(token) => match token.integer() {
                Some(value) => value,
                None => return Err(error!(TypeMismatch, self.cursor() + 1; token.literal())),
            },
            None => return Err(error!(MissingOperand, self.cursor(); self.instruction())),
        };
        self.stack.push(value);
        self.pointer += 2;
        Ok(())
    }

    /// YEET, GLUE, MOOSH and SNIP share one shape. An integer literal
    /// right after the instruction selects the inline-operand form (pop
    /// one, combine with the literal); anything else selects the
    /// two-pop form. First-popped OP second-popped, so `SHOVE 4 SHOVE 2
    /// YEET` is 2 - 4. Results wrap at the i64 bounds.
    fn arithmetic(&mut self, op: Opcode) -> Result<()> {
        let inline = match self.tokens.get(self.pointer + 1) {
            Some(token) if token.kind() == Kind::IntLiteral => match token.integer() {
                Some(value) => Some(value),
                None => return Err(error!(TypeMismatch, self.cursor() + 1; token.literal())),
            },
            _ => None,
        };
        let (first, second, advance) = match inline {
            Some(value) => match self.stack.pop() {
                Ok(first) => (first, value, 2),
                Err(error) => return Err(self.describe(error)),
            },
            None => match self.stack.pop_2() {
                Ok((below, top)) => (top, below, 1),
                Err(error) => return Err(self.describe(error)),
            },
        };
        let result = match op {
            Opcode::Glue => first.wrapping_add(second),
            Opcode::Yeet => first.wrapping_sub(second),
            Opcode::Moosh => first.wrapping_mul(second),
            Opcode::Snip if second == 0 => {
                // Divisor checked after the pops; consumed operands
                // stay consumed.
                return Err(error!(DivideByZero, self.cursor(); self.instruction()));
            }
            Opcode::Snip => first.wrapping_div(second),
            _ => return Err(error!(UnsupportedInstruction, self.cursor(); self.instruction())),
        };
        self.stack.push(result);
        self.pointer += advance;
        Ok(())
    }

    fn yell(&mut self) -> Result<Event> {
        let text = match self.tokens.get(self.pointer + 1) {
            Some(token) => format!("{}\n", token.printable()),
            None => return Err(error!(MissingOperand, self.cursor(); self.instruction())),
        };
        self.pointer += 2;
        Ok(Event::Print(text))
    }

    /// BOUNCE takes a comparator, an integer bound, and a `#target`, in
    /// that order. The stack top is peeked, never popped. A passing
    /// test relocates the pointer to the first matching `name:` marker
    /// in token order; a failing test skips all four tokens.
    fn bounce(&mut self) -> Result<()> {
        let relop = match self.tokens.get(self.pointer + 1) {
            Some(token) => match Relop::from_literal(token.literal()) {
                Some(relop) => relop,
                None => return Err(self.malformed()),
            },
            None => return Err(self.malformed()),
        };
        let bound = match self.tokens.get(self.pointer + 2) {
            Some(token) if token.kind() == Kind::IntLiteral => match token.integer() {
                Some(value) => value,
                None => return Err(error!(TypeMismatch, self.cursor() + 2; token.literal())),
            },
            _ => return Err(self.malformed()),
        };
        let target = match self.tokens.get(self.pointer + 3) {
            Some(token) => match token.label_target() {
                Some(name) => name,
                None => return Err(self.malformed()),
            },
            None => return Err(self.malformed()),
        };
        let top = match self.stack.last() {
            Some(top) => *top,
            None => return Err(error!(StackUnderflow, self.cursor(); self.instruction())),
        };
        if !relop.test(top, bound) {
            self.pointer += 4;
            return Ok(());
        }
        match self
            .tokens
            .iter()
            .position(|token| token.label_name() == Some(target))
        {
            Some(index) => {
                self.pointer = index;
                Ok(())
            }
            None => {
                Err(error!(UndefinedLabel, self.cursor() + 3; self.tokens[self.pointer + 3].literal()))
            }
        }
    }

    fn cursor(&self) -> usize {
        self.pointer + 1
    }

    fn instruction(&self) -> &str {
        self.tokens[self.pointer].literal()
    }

    /// Point a bare stack error at the current instruction.
    fn describe(&self, error: Error) -> Error {
        error.at(self.cursor()).token(self.instruction())
    }

    fn malformed(&self) -> Error {
        error!(MalformedJump, self.cursor(); self.instruction())
    }
}
