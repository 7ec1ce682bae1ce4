use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Underflow checked vector
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { vec: vec![] }
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val)
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(error!(StackUnderflow)),
        }
    }
    /// Pops the top two values. `two` comes off first, so `two` is the
    /// most recently pushed. No rollback: failing on the second pop
    /// leaves the first consumed.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}
