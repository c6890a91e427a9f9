//! Rolling window of recent reaction times

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Bounded FIFO of the last N reaction times (seconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionWindow {
    times: VecDeque<f32>,
    capacity: usize,
}

impl ReactionWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            times: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a reaction time, evicting the oldest on overflow
    pub fn push(&mut self, time: f32) {
        self.times.push_back(time);
        while self.times.len() > self.capacity {
            self.times.pop_front();
        }
    }

    /// Mean of the recorded times, `None` while empty
    pub fn average(&self) -> Option<f32> {
        if self.times.is_empty() {
            return None;
        }
        Some(self.times.iter().sum::<f32>() / self.times.len() as f32)
    }

    pub fn clear(&mut self) {
        self.times.clear();
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.times.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_average() {
        let window = ReactionWindow::new(5);
        assert!(window.is_empty());
        assert_eq!(window.average(), None);
    }

    #[test]
    fn test_average() {
        let mut window = ReactionWindow::new(5);
        window.push(1.0);
        window.push(2.0);
        assert_eq!(window.average(), Some(1.5));
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut window = ReactionWindow::new(3);
        for t in [1.0, 2.0, 3.0, 4.0] {
            window.push(t);
        }
        assert_eq!(window.len(), 3);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
        assert_eq!(window.average(), Some(3.0));
    }

    #[test]
    fn test_clear() {
        let mut window = ReactionWindow::new(2);
        window.push(0.5);
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 2);
    }
}
