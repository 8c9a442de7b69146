//! Last-in-first-out container holding the dispenser's candies

use crate::error::{StackError, StackResult};

/// A plain LIFO stack.
///
/// Items are only reachable through the top or through [`Stack::iter`], so
/// callers never see the backing storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Create an empty stack
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item on top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> StackResult<T> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Borrow the top item without removing it
    pub fn peek(&self) -> StackResult<&T> {
        self.items.last().ok_or(StackError::Empty)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over the current items from top to bottom.
    ///
    /// The iterator is cloneable (so it can be restarted) and double-ended:
    /// `stack.iter().rev()` walks bottom-up, which is the order candies are
    /// drawn in.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter().rev(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Top-to-bottom iterator returned by [`Stack::iter`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: std::iter::Rev<std::slice::Iter<'a, T>>,
}

// No `T: Clone` bound, unlike the derive
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), Err(StackError::Empty));
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.push('b');

        assert_eq!(stack.pop(), Ok('b'));
        assert_eq!(stack.pop(), Ok('a'));
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_pop_empty_keeps_len_at_zero() {
        let mut stack: Stack<u8> = Stack::new();
        assert!(stack.pop().is_err());
        assert_eq!(stack.len(), 0);
        stack.push(7);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let mut stack = Stack::new();
        for i in 1..=3 {
            stack.push(i);
        }

        let top_down: Vec<_> = stack.iter().copied().collect();
        assert_eq!(top_down, vec![3, 2, 1]);

        let bottom_up: Vec<_> = stack.iter().rev().copied().collect();
        assert_eq!(bottom_up, vec![1, 2, 3]);
        assert_eq!(stack.iter().len(), 3);
    }

    #[test]
    fn test_iter_restarts_from_clone() {
        let mut stack = Stack::new();
        stack.push("x");
        stack.push("y");

        let mut iter = stack.iter();
        let restart = iter.clone();
        assert_eq!(iter.next(), Some(&"y"));
        assert_eq!(iter.next(), Some(&"x"));
        assert_eq!(iter.next(), None);
        assert_eq!(restart.count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }
}
