use crate::error;
use crate::lang::Error;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## Double-ended operand stack
///
/// The back is the top. There is no size limit.

#[derive(Clone, Default, PartialEq)]
pub struct Stack<T> {
    deque: VecDeque<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.deque)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for val in self.deque.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}", val)?;
        }
        Ok(())
    }
}

impl<T> Stack<T> {
    fn underflow_error(&self) -> Error {
        error!(Underflow)
    }
    fn require(&self, len: usize) -> Result<()> {
        if self.deque.len() < len {
            Err(self.underflow_error())
        } else {
            Ok(())
        }
    }
    pub fn clear(&mut self) {
        self.deque.clear()
    }
    pub fn len(&self) -> usize {
        self.deque.len()
    }
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.deque.iter()
    }
    pub fn push(&mut self, val: T) {
        self.deque.push_back(val);
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.deque.pop_back() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Pops the top two values as `(second, top)`.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        self.require(2)?;
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Exchanges the top two values.
    pub fn swap(&mut self) -> Result<()> {
        self.require(2)?;
        let len = self.deque.len();
        self.deque.swap(len - 1, len - 2);
        Ok(())
    }
    /// Moves the oldest value to the top.
    pub fn roll(&mut self) -> Result<()> {
        self.require(2)?;
        self.deque.rotate_left(1);
        Ok(())
    }
}

impl<T: Clone> Stack<T> {
    /// Pushes a copy of the top value.
    pub fn duplicate(&mut self) -> Result<()> {
        match self.deque.back() {
            Some(v) => {
                let v = v.clone();
                self.deque.push_back(v);
                Ok(())
            }
            None => Err(self.underflow_error()),
        }
    }
    /// Pushes a copy of the value at `index`.
    ///
    /// Non-negative indexes count from the oldest value, negative ones from
    /// the top with `-1` naming the top.
    pub fn pick(&mut self, index: i64) -> Result<()> {
        let len = self.deque.len() as i64;
        let idx = if index < 0 { index + len } else { index };
        if idx < 0 || idx >= len {
            return Err(error!(IndexOutOfRange));
        }
        let v = self.deque[idx as usize].clone();
        self.deque.push_back(v);
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.deque.iter()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(vec: Vec<T>) -> Stack<T> {
        Stack { deque: vec.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn stack(v: &[f64]) -> Stack<f64> {
        Stack::from(v.to_vec())
    }

    fn values(s: &Stack<f64>) -> Vec<f64> {
        s.iter().cloned().collect()
    }

    #[test]
    fn test_pop_2_order() {
        let mut s = stack(&[1.0, 2.0, 3.0]);
        assert_eq!(s.pop_2(), Ok((2.0, 3.0)));
        assert_eq!(values(&s), [1.0]);
    }

    #[test]
    fn test_pop_2_underflow_leaves_stack() {
        let mut s = stack(&[1.0]);
        assert_eq!(s.pop_2().unwrap_err().code(), ErrorCode::Underflow);
        assert_eq!(values(&s), [1.0]);
    }

    #[test]
    fn test_swap() {
        let mut s = stack(&[1.0, 2.0, 3.0]);
        s.swap().unwrap();
        assert_eq!(values(&s), [1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_roll() {
        let mut s = stack(&[1.0, 2.0, 3.0]);
        s.roll().unwrap();
        assert_eq!(values(&s), [2.0, 3.0, 1.0]);
        let mut one = stack(&[1.0]);
        assert!(one.roll().is_err());
    }

    #[test]
    fn test_pick() {
        let mut s = stack(&[10.0, 20.0, 30.0]);
        s.pick(-1).unwrap();
        assert_eq!(values(&s), [10.0, 20.0, 30.0, 30.0]);
        s.pick(0).unwrap();
        assert_eq!(values(&s), [10.0, 20.0, 30.0, 30.0, 10.0]);
        assert_eq!(s.pick(5).unwrap_err().code(), ErrorCode::IndexOutOfRange);
        assert_eq!(s.pick(-6).unwrap_err().code(), ErrorCode::IndexOutOfRange);
    }

    #[test]
    fn test_display() {
        assert_eq!(stack(&[1.0, 2.5, -3.0]).to_string(), "1 2.5 -3");
        assert_eq!(stack(&[]).to_string(), "");
    }
}
