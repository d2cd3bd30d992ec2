//! Bounded deque backing the notification queue and the activity feed
//!
//! Fixed capacity; pushing onto a full deque evicts the oldest item.

use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// A zero capacity turns every push into a no-op
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(256)),
        }
    }

    /// Push a new value, returning the evicted one if the deque was full
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.cap == 0 {
            return None;
        }
        let evicted = if self.buf.len() == self.cap {
            self.buf.pop_front()
        } else {
            None
        };
        self.buf.push_back(value);
        evicted
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Newest to oldest
    pub fn iter_newest(&self) -> impl Iterator<Item = &T> {
        self.buf.iter().rev()
    }

    /// Remove the first item matching the predicate
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let index = self.buf.iter().position(predicate)?;
        self.buf.remove(index)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest() {
        let mut deque = BoundedDeque::new(3);
        assert_eq!(deque.push(1), None);
        deque.push(2);
        deque.push(3);
        assert_eq!(deque.push(4), Some(1));
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(deque.iter_newest().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
    }

    #[test]
    fn test_remove_where() {
        let mut deque = BoundedDeque::new(4);
        for i in 1..=4 {
            deque.push(i);
        }
        assert_eq!(deque.remove_where(|v| *v == 3), Some(3));
        assert_eq!(deque.remove_where(|v| *v == 30), None);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut deque = BoundedDeque::new(0);
        deque.push(1);
        assert!(deque.is_empty());
    }
}
