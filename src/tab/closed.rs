//! Bounded history of closed tabs
//!
//! Closing a tab moves it here so "Restore Last Closed Tab" can bring it
//! back. The history holds at most [`MAX_CLOSED_TABS`] entries, oldest at the
//! front; the bound is enforced on every push path, batch closes included.

use super::DocumentTab;
use std::collections::VecDeque;

/// Maximum number of closed tabs retained for restore.
pub const MAX_CLOSED_TABS: usize = 20;

/// Most-recent-last stack of closed tabs, bounded at [`MAX_CLOSED_TABS`].
#[derive(Debug, Default)]
pub struct ClosedTabHistory {
    entries: VecDeque<DocumentTab>,
}

impl ClosedTabHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Record a closed tab, evicting the oldest entry past the bound.
    pub fn push(&mut self, tab: DocumentTab) {
        self.entries.push_back(tab);
        self.evict();
    }

    /// Record a batch of closed tabs in their original order.
    pub fn push_batch(&mut self, tabs: impl IntoIterator<Item = DocumentTab>) {
        self.entries.extend(tabs);
        self.evict();
    }

    fn evict(&mut self) {
        while self.entries.len() > MAX_CLOSED_TABS {
            self.entries.pop_front();
        }
    }

    /// Take the most recently closed tab.
    pub fn pop(&mut self) -> Option<DocumentTab> {
        self.entries.pop_back()
    }

    /// Number of retained closed tabs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is anything to restore.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate oldest-closed first.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentTab> {
        self.entries.iter()
    }
}
