//! Majority voting over a bounded window of per-frame classifications
//!
//! Individual frame classifications are noisy; a short ring buffer of the
//! most recent symbols is collapsed into one "current" symbol by majority
//! vote. Ties are broken deterministically: among symbols sharing the
//! maximum count, the one seen most recently wins.

use std::collections::VecDeque;

/// Default vote window capacity
pub const DEFAULT_WINDOW: usize = 6;

/// Bounded ring window of recent symbol classifications
#[derive(Debug)]
pub struct VoteWindow {
    symbols: VecDeque<char>,
    capacity: usize,
}

impl VoteWindow {
    /// Create a window holding at most `capacity` symbols
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            symbols: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Append a symbol, evicting the oldest entry at capacity
    pub fn push(&mut self, symbol: char) {
        if self.symbols.len() == self.capacity {
            self.symbols.pop_front();
        }
        self.symbols.push_back(symbol);
    }

    /// The symbol with the highest occurrence count, or `None` when empty
    ///
    /// Tie-break: scanning from most recent to oldest, the first symbol
    /// whose count equals the maximum wins.
    #[must_use]
    pub fn majority(&self) -> Option<char> {
        let count = |c: char| self.symbols.iter().filter(|&&s| s == c).count();

        let max = self.symbols.iter().map(|&c| count(c)).max()?;
        self.symbols.iter().rev().find(|&&c| count(c) == max).copied()
    }

    /// Empty the window
    ///
    /// Called on every commit so a stale majority cannot re-trigger.
    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    /// Number of symbols currently in the window
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the window holds no symbols
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for VoteWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_has_no_majority() {
        let window = VoteWindow::new(6);
        assert_eq!(window.majority(), None);
    }

    #[test]
    fn majority_picks_most_frequent() {
        let mut window = VoteWindow::new(6);
        for c in ['A', 'B', 'A', 'C', 'A'] {
            window.push(c);
        }
        assert_eq!(window.majority(), Some('A'));
    }

    #[test]
    fn tie_breaks_toward_most_recent() {
        let mut window = VoteWindow::new(6);
        for c in ['A', 'A', 'B', 'B'] {
            window.push(c);
        }
        assert_eq!(window.majority(), Some('B'));

        window.push('A');
        // A now leads 3-2
        assert_eq!(window.majority(), Some('A'));
    }

    #[test]
    fn oldest_evicted_at_capacity() {
        let mut window = VoteWindow::new(3);
        for c in ['A', 'A', 'A', 'B', 'B'] {
            window.push(c);
        }
        // Window is [A, B, B]
        assert_eq!(window.len(), 3);
        assert_eq!(window.majority(), Some('B'));
    }

    #[test]
    fn clear_empties_window() {
        let mut window = VoteWindow::new(6);
        window.push('A');
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.majority(), None);
    }
}
