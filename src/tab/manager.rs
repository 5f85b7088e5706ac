//! Tab manager coordinating the open-document collection

use super::closed::ClosedTabHistory;
use super::{DocumentTab, TabColor, TabId, TabOptions, TabUpdate};

/// Manages the ordered collection of open documents, the active-tab pointer,
/// and the closed-tab history.
///
/// All mutators are synchronous and infallible: operations on a tab id that is
/// no longer present are silent no-ops. The active pointer is `None` exactly
/// when the collection is empty, and otherwise always names a present tab.
pub struct TabManager {
    /// All open tabs, in display order
    tabs: Vec<DocumentTab>,
    /// Currently active tab id
    active_tab_id: Option<TabId>,
    /// Counter for generating unique tab ids
    next_tab_id: TabId,
    /// Recently closed tabs, feeding restore
    closed: ClosedTabHistory,
}

impl TabManager {
    /// Create a new empty tab manager.
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            next_tab_id: 1,
            closed: ClosedTabHistory::new(),
        }
    }

    fn take_next_id(&mut self) -> TabId {
        let id = self.next_tab_id;
        self.next_tab_id += 1;
        id
    }

    /// Open a new tab and return its id.
    ///
    /// Missing fields take their defaults (see [`TabOptions`]); the synthesized
    /// name is numbered from the current tab count, not the unique id. The new
    /// tab is appended at the end and always becomes active.
    pub fn add_tab(&mut self, opts: TabOptions) -> TabId {
        let id = self.take_next_id();
        let tab_number = self.tabs.len() + 1;
        let tab = DocumentTab::new(id, tab_number, opts);
        self.tabs.push(tab);
        self.active_tab_id = Some(id);
        log::info!("Opened tab {} (total: {})", id, self.tabs.len());
        id
    }

    /// Close a tab by id, recording it in the closed-tab history.
    ///
    /// If the closed tab was active, focus moves to the closest surviving
    /// neighbor: the tab now occupying the removed index, or the new last tab
    /// when the rightmost tab was closed.
    pub fn close_tab(&mut self, id: TabId) {
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };

        let tab = self.tabs.remove(idx);
        self.closed.push(tab);
        log::info!("Closed tab {} (index {}, total: {})", id, idx, self.tabs.len());

        if self.active_tab_id == Some(id) {
            self.active_tab_id = if self.tabs.is_empty() {
                None
            } else {
                let new_idx = idx.min(self.tabs.len() - 1);
                Some(self.tabs[new_idx].id)
            };
        }
    }

    /// Close every tab, recording all of them in the closed-tab history.
    pub fn close_all_tabs(&mut self) {
        let closed = std::mem::take(&mut self.tabs);
        if closed.is_empty() {
            return;
        }
        log::info!("Closed all {} tabs", closed.len());
        self.closed.push_batch(closed);
        self.active_tab_id = None;
    }

    /// Close every tab except `id`, which becomes the sole, active tab.
    ///
    /// No-op when `id` is not present.
    pub fn close_other_tabs(&mut self, id: TabId) {
        if !self.tabs.iter().any(|t| t.id == id) {
            return;
        }
        let (kept, closed): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.tabs).into_iter().partition(|t| t.id == id);
        self.tabs = kept;
        log::info!("Closed {} tabs, kept tab {}", closed.len(), id);
        self.closed.push_batch(closed);
        self.active_tab_id = Some(id);
    }

    /// Close the contiguous run of tabs strictly left of `id`.
    ///
    /// No-op when `id` is absent or already leftmost. If the active tab was in
    /// the closed run, focus moves to the kept tab.
    pub fn close_tabs_to_left(&mut self, id: TabId) {
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        if idx == 0 {
            return;
        }
        let closed: Vec<DocumentTab> = self.tabs.drain(..idx).collect();
        log::info!("Closed {} tabs left of tab {}", closed.len(), id);
        let active_closed = closed.iter().any(|t| Some(t.id) == self.active_tab_id);
        self.closed.push_batch(closed);
        if active_closed {
            self.active_tab_id = Some(id);
        }
    }

    /// Close the contiguous run of tabs strictly right of `id`.
    ///
    /// No-op when `id` is absent or already rightmost. If the active tab was in
    /// the closed run, focus moves to the kept tab.
    pub fn close_tabs_to_right(&mut self, id: TabId) {
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        if idx + 1 >= self.tabs.len() {
            return;
        }
        let closed: Vec<DocumentTab> = self.tabs.drain(idx + 1..).collect();
        log::info!("Closed {} tabs right of tab {}", closed.len(), id);
        let active_closed = closed.iter().any(|t| Some(t.id) == self.active_tab_id);
        self.closed.push_batch(closed);
        if active_closed {
            self.active_tab_id = Some(id);
        }
    }

    /// Close every unmodified tab, keeping everything with unsaved edits.
    ///
    /// If the active tab was closed, the first remaining tab becomes active.
    pub fn close_unchanged_tabs(&mut self) {
        self.close_where(|t| !t.is_modified);
    }

    /// Close every unpinned tab.
    ///
    /// If the active tab was closed, the first remaining tab becomes active.
    pub fn close_all_but_pinned(&mut self) {
        self.close_where(|t| !t.is_pinned);
    }

    /// Close every tab matching `should_close`, then repair the active pointer.
    fn close_where(&mut self, should_close: impl Fn(&DocumentTab) -> bool) {
        let (closed, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.tabs).into_iter().partition(&should_close);
        self.tabs = kept;
        if closed.is_empty() {
            return;
        }
        log::info!("Closed {} tabs ({} kept)", closed.len(), self.tabs.len());
        self.closed.push_batch(closed);

        let active_present = self
            .active_tab_id
            .is_some_and(|id| self.tabs.iter().any(|t| t.id == id));
        if !active_present {
            self.active_tab_id = self.tabs.first().map(|t| t.id);
        }
    }

    /// Reopen the most recently closed tab and return its new id.
    ///
    /// Restores are LIFO: repeated calls replay closures newest-first. No-op
    /// (returns `None`) when the history is empty.
    pub fn restore_last_closed_tab(&mut self) -> Option<TabId> {
        let mut tab = self.closed.pop()?;
        // The id the tab carried out is stale; hand it a fresh one on the way back.
        tab.id = self.take_next_id();
        let id = tab.id;
        self.tabs.push(tab);
        self.active_tab_id = Some(id);
        log::info!("Restored closed tab {} (total: {})", id, self.tabs.len());
        Some(id)
    }

    /// Switch focus to a tab by id. No-op when the id is not present.
    pub fn set_active_tab(&mut self, id: TabId) {
        if self.tabs.iter().any(|t| t.id == id) {
            self.active_tab_id = Some(id);
            log::debug!("Switched to tab {id}");
        }
    }

    /// Apply a partial update to a tab. No-op when the id is not present.
    pub fn update_tab(&mut self, id: TabId, update: TabUpdate) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.apply_update(update);
        }
    }

    /// Replace a tab's content and re-derive its modification flag.
    ///
    /// This is the only path that derives `is_modified` from content; setting
    /// the text back to the original flips the flag off again.
    pub fn update_tab_content(&mut self, id: TabId, content: impl Into<String>) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.content = content.into();
            tab.is_modified = tab.content != tab.original_content;
        }
    }

    /// Toggle a tab's pinned flag. No-op when the id is not present.
    pub fn toggle_pin_tab(&mut self, id: TabId) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.is_pinned = !tab.is_pinned;
            log::debug!("Tab {} pinned: {}", id, tab.is_pinned);
        }
    }

    /// Set a tab's accent color. No-op when the id is not present.
    pub fn set_tab_color(&mut self, id: TabId, color: TabColor) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.tab_color = color;
        }
    }

    /// Move the tab at `from` so it ends up at index `to` (drag-and-drop
    /// reordering). Out-of-range `from` is a no-op; `to` is clamped.
    pub fn move_tab(&mut self, from: usize, to: usize) {
        if from >= self.tabs.len() {
            return;
        }
        let to = to.min(self.tabs.len() - 1);
        if from == to {
            return;
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        log::debug!("Moved tab from index {from} to {to}");
    }

    /// Switch to the next tab in display order, wrapping from last to first.
    /// No-op with fewer than two tabs.
    pub fn next_tab(&mut self) {
        if self.tabs.len() <= 1 {
            return;
        }
        if let Some(idx) = self.active_tab_index() {
            let next = (idx + 1) % self.tabs.len();
            let id = self.tabs[next].id;
            self.set_active_tab(id);
        }
    }

    /// Switch to the previous tab in display order, wrapping from first to
    /// last. No-op with fewer than two tabs.
    pub fn prev_tab(&mut self) {
        if self.tabs.len() <= 1 {
            return;
        }
        if let Some(idx) = self.active_tab_index() {
            let prev = (idx + self.tabs.len() - 1) % self.tabs.len();
            let id = self.tabs[prev].id;
            self.set_active_tab(id);
        }
    }

    /// Switch to the tab at a display index (0-based). Out-of-range is a no-op.
    pub fn go_to_tab(&mut self, index: usize) {
        if index < self.tabs.len() {
            let id = self.tabs[index].id;
            self.set_active_tab(id);
        }
    }

    /// Swap the active tab with its right neighbor. No-op when the active tab
    /// is already rightmost. The active id is unchanged; only position moves.
    pub fn move_active_tab_forward(&mut self) {
        let Some(idx) = self.active_tab_index() else {
            return;
        };
        if idx + 1 < self.tabs.len() {
            self.tabs.swap(idx, idx + 1);
            log::debug!("Moved active tab from index {} to {}", idx, idx + 1);
        }
    }

    /// Swap the active tab with its left neighbor. No-op when the active tab
    /// is already leftmost. The active id is unchanged; only position moves.
    pub fn move_active_tab_backward(&mut self) {
        let Some(idx) = self.active_tab_index() else {
            return;
        };
        if idx > 0 {
            self.tabs.swap(idx, idx - 1);
            log::debug!("Moved active tab from index {} to {}", idx, idx - 1);
        }
    }

    /// All open tabs, in display order.
    pub fn tabs(&self) -> &[DocumentTab] {
        &self.tabs
    }

    /// Number of open tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// The active tab id, `None` only when no tabs are open.
    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    /// Reference to the active tab.
    pub fn active_tab(&self) -> Option<&DocumentTab> {
        self.active_tab_id
            .and_then(|id| self.tabs.iter().find(|t| t.id == id))
    }

    /// Display index of the active tab (0-based).
    pub fn active_tab_index(&self) -> Option<usize> {
        self.active_tab_id
            .and_then(|id| self.tabs.iter().position(|t| t.id == id))
    }

    /// Look up a tab by id.
    pub fn get_tab(&self, id: TabId) -> Option<&DocumentTab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// The closed-tab history feeding restore.
    pub fn closed_tabs(&self) -> &ClosedTabHistory {
        &self.closed
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::{LineEnding, MAX_CLOSED_TABS};

    /// Open one tab per name and return the manager plus the ids in order.
    fn manager_with(names: &[&str]) -> (TabManager, Vec<TabId>) {
        let mut mgr = TabManager::new();
        let ids = names
            .iter()
            .map(|name| {
                mgr.add_tab(TabOptions {
                    name: Some(name.to_string()),
                    ..TabOptions::default()
                })
            })
            .collect();
        (mgr, ids)
    }

    fn names(mgr: &TabManager) -> Vec<&str> {
        mgr.tabs().iter().map(|t| t.name.as_str()).collect()
    }

    /// The active pointer is `None` iff the collection is empty, and otherwise
    /// names a present tab.
    fn assert_active_valid(mgr: &TabManager) {
        match mgr.active_tab_id() {
            None => assert!(mgr.tabs().is_empty(), "active is None but tabs remain"),
            Some(id) => assert!(
                mgr.tabs().iter().any(|t| t.id == id),
                "active id {id} not present"
            ),
        }
    }

    #[test]
    fn add_tab_synthesizes_name_and_activates() {
        let mut mgr = TabManager::new();
        let id = mgr.add_tab(TabOptions::default());
        assert_eq!(mgr.tab_count(), 1);
        assert_eq!(mgr.tabs()[0].name, "new 1");
        assert_eq!(mgr.active_tab_id(), Some(id));

        let id2 = mgr.add_tab(TabOptions::default());
        assert_eq!(mgr.tabs()[1].name, "new 2");
        assert_eq!(mgr.active_tab_id(), Some(id2));
    }

    #[test]
    fn add_tab_applies_options() {
        let mut mgr = TabManager::new();
        mgr.add_tab(TabOptions {
            name: Some("test.js".into()),
            content: Some("console.log(1)".into()),
            line_ending: Some(LineEnding::Crlf),
            ..TabOptions::default()
        });
        let tab = &mgr.tabs()[0];
        assert_eq!(tab.name, "test.js");
        assert_eq!(tab.content, "console.log(1)");
        assert_eq!(tab.language, "javascript");
        assert_eq!(tab.line_ending, LineEnding::Crlf);
        assert!(!tab.is_modified);
    }

    #[test]
    fn ids_are_unique_across_add_and_restore() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        mgr.close_tab(ids[0]);
        mgr.close_tab(ids[1]);
        mgr.restore_last_closed_tab();
        mgr.restore_last_closed_tab();
        mgr.add_tab(TabOptions::default());

        let mut seen: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), mgr.tab_count());
    }

    #[test]
    fn close_tab_records_history() {
        let (mut mgr, ids) = manager_with(&["keep", "close-me"]);
        mgr.close_tab(ids[1]);
        assert_eq!(names(&mgr), vec!["keep"]);
        assert_eq!(mgr.closed_tabs().len(), 1);
        assert_eq!(mgr.closed_tabs().iter().next().unwrap().name, "close-me");
    }

    #[test]
    fn close_middle_tab_activates_former_right_neighbor() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        mgr.set_active_tab(ids[1]);
        mgr.close_tab(ids[1]);
        assert_eq!(names(&mgr), vec!["a", "c"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[2]));
        assert_active_valid(&mgr);
    }

    #[test]
    fn close_last_tab_activates_left_neighbor() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[2]));
        mgr.close_tab(ids[2]);
        assert_eq!(mgr.active_tab_id(), Some(ids[1]));
        assert_active_valid(&mgr);
    }

    #[test]
    fn close_inactive_tab_leaves_focus_alone() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        mgr.close_tab(ids[0]);
        assert_eq!(mgr.active_tab_id(), Some(ids[2]));
    }

    #[test]
    fn close_only_tab_clears_active() {
        let (mut mgr, ids) = manager_with(&["solo"]);
        mgr.close_tab(ids[0]);
        assert_eq!(mgr.tab_count(), 0);
        assert_eq!(mgr.active_tab_id(), None);
        assert_active_valid(&mgr);
    }

    #[test]
    fn close_missing_tab_is_noop() {
        let (mut mgr, _) = manager_with(&["a"]);
        mgr.close_tab(999);
        assert_eq!(mgr.tab_count(), 1);
        assert_eq!(mgr.closed_tabs().len(), 0);
    }

    #[test]
    fn single_closes_keep_history_bounded() {
        let mut mgr = TabManager::new();
        let ids: Vec<TabId> = (0..25)
            .map(|i| {
                mgr.add_tab(TabOptions {
                    name: Some(format!("t{i}")),
                    ..TabOptions::default()
                })
            })
            .collect();
        for id in ids {
            mgr.close_tab(id);
        }
        assert_eq!(mgr.closed_tabs().len(), MAX_CLOSED_TABS);
        // The 20 most recent closures remain, in closure order
        assert_eq!(mgr.closed_tabs().iter().next().unwrap().name, "t5");
        assert_eq!(mgr.closed_tabs().iter().last().unwrap().name, "t24");
    }

    #[test]
    fn bulk_close_keeps_history_bounded() {
        let mut mgr = TabManager::new();
        for i in 0..30 {
            mgr.add_tab(TabOptions {
                name: Some(format!("t{i}")),
                ..TabOptions::default()
            });
        }
        mgr.close_all_tabs();
        assert_eq!(mgr.closed_tabs().len(), MAX_CLOSED_TABS);
        assert_eq!(mgr.closed_tabs().iter().next().unwrap().name, "t10");
    }

    #[test]
    fn close_all_tabs_empties_collection() {
        let (mut mgr, _) = manager_with(&["a", "b", "c"]);
        mgr.close_all_tabs();
        assert_eq!(mgr.tab_count(), 0);
        assert_eq!(mgr.active_tab_id(), None);
        assert_eq!(mgr.closed_tabs().len(), 3);
        assert_active_valid(&mgr);
    }

    #[test]
    fn close_other_tabs_keeps_sole_survivor_active() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        mgr.close_other_tabs(ids[0]);
        assert_eq!(names(&mgr), vec!["a"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
        assert_eq!(mgr.closed_tabs().len(), 2);
        assert_active_valid(&mgr);
    }

    #[test]
    fn close_other_tabs_with_missing_id_is_noop() {
        let (mut mgr, _) = manager_with(&["a", "b"]);
        mgr.close_other_tabs(999);
        assert_eq!(mgr.tab_count(), 2);
        assert_eq!(mgr.closed_tabs().len(), 0);
    }

    #[test]
    fn close_tabs_to_left() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c", "d"]);
        mgr.set_active_tab(ids[2]);
        mgr.close_tabs_to_left(ids[2]);
        assert_eq!(names(&mgr), vec!["c", "d"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[2]));
        assert_eq!(mgr.closed_tabs().len(), 2);
    }

    #[test]
    fn close_tabs_to_left_of_leftmost_is_noop() {
        let (mut mgr, ids) = manager_with(&["a", "b"]);
        mgr.close_tabs_to_left(ids[0]);
        assert_eq!(mgr.tab_count(), 2);
    }

    #[test]
    fn close_tabs_to_left_repairs_active_pointer() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        mgr.set_active_tab(ids[0]);
        mgr.close_tabs_to_left(ids[2]);
        assert_eq!(names(&mgr), vec!["c"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[2]));
        assert_active_valid(&mgr);
    }

    #[test]
    fn close_tabs_to_right() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c", "d"]);
        mgr.set_active_tab(ids[1]);
        mgr.close_tabs_to_right(ids[1]);
        assert_eq!(names(&mgr), vec!["a", "b"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[1]));
        assert_eq!(mgr.closed_tabs().len(), 2);
    }

    #[test]
    fn close_tabs_to_right_of_rightmost_is_noop() {
        let (mut mgr, ids) = manager_with(&["a", "b"]);
        mgr.close_tabs_to_right(ids[1]);
        assert_eq!(mgr.tab_count(), 2);
    }

    #[test]
    fn close_tabs_to_right_repairs_active_pointer() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[2]));
        mgr.close_tabs_to_right(ids[0]);
        assert_eq!(names(&mgr), vec!["a"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
        assert_active_valid(&mgr);
    }

    #[test]
    fn close_unchanged_keeps_modified_tabs() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        mgr.update_tab_content(ids[1], "edited");
        mgr.close_unchanged_tabs();
        assert_eq!(names(&mgr), vec!["b"]);
        // Active was "c" (closed); first remaining takes over
        assert_eq!(mgr.active_tab_id(), Some(ids[1]));
        assert_eq!(mgr.closed_tabs().len(), 2);
        assert_active_valid(&mgr);
    }

    #[test]
    fn close_unchanged_with_no_modified_tabs_closes_everything() {
        let (mut mgr, _) = manager_with(&["a", "b"]);
        mgr.close_unchanged_tabs();
        assert_eq!(mgr.tab_count(), 0);
        assert_eq!(mgr.active_tab_id(), None);
        assert_active_valid(&mgr);
    }

    #[test]
    fn close_all_but_pinned() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        mgr.toggle_pin_tab(ids[0]);
        mgr.close_all_but_pinned();
        assert_eq!(names(&mgr), vec!["a"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
        assert_active_valid(&mgr);
    }

    #[test]
    fn restore_replays_closures_newest_first() {
        let (mut mgr, ids) = manager_with(&["x", "a", "b", "c"]);
        mgr.close_tab(ids[1]);
        mgr.close_tab(ids[2]);
        mgr.close_tab(ids[3]);
        mgr.restore_last_closed_tab();
        mgr.restore_last_closed_tab();
        mgr.restore_last_closed_tab();
        assert_eq!(names(&mgr), vec!["x", "c", "b", "a"]);
    }

    #[test]
    fn restore_assigns_fresh_id_and_activates() {
        let (mut mgr, ids) = manager_with(&["a", "b"]);
        mgr.close_tab(ids[0]);
        let restored = mgr.restore_last_closed_tab().unwrap();
        assert_ne!(restored, ids[0]);
        assert_eq!(mgr.active_tab_id(), Some(restored));
        assert_eq!(mgr.tabs().last().unwrap().name, "a");
    }

    #[test]
    fn restore_with_empty_history_is_noop() {
        let mut mgr = TabManager::new();
        assert_eq!(mgr.restore_last_closed_tab(), None);
        assert_eq!(mgr.tab_count(), 0);
    }

    #[test]
    fn restored_tab_keeps_its_content_and_metadata() {
        let mut mgr = TabManager::new();
        let id = mgr.add_tab(TabOptions {
            name: Some("notes.md".into()),
            content: Some("# heading".into()),
            ..TabOptions::default()
        });
        mgr.update_tab_content(id, "# heading\nmore");
        mgr.close_tab(id);
        mgr.restore_last_closed_tab().unwrap();
        let tab = mgr.active_tab().unwrap();
        assert_eq!(tab.name, "notes.md");
        assert_eq!(tab.content, "# heading\nmore");
        assert!(tab.is_modified);
    }

    #[test]
    fn set_active_tab_ignores_missing_id() {
        let (mut mgr, ids) = manager_with(&["a", "b"]);
        mgr.set_active_tab(999);
        assert_eq!(mgr.active_tab_id(), Some(ids[1]));
        mgr.set_active_tab(ids[0]);
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
    }

    #[test]
    fn update_tab_merges_only_given_fields() {
        let (mut mgr, ids) = manager_with(&["draft"]);
        mgr.update_tab_content(ids[0], "body");
        // Save completion: name/path land, flag clears, baseline moves
        mgr.update_tab(
            ids[0],
            TabUpdate {
                name: Some("draft.txt".into()),
                path: Some("/tmp/draft.txt".into()),
                original_content: Some("body".into()),
                is_modified: Some(false),
                ..TabUpdate::default()
            },
        );
        let tab = mgr.get_tab(ids[0]).unwrap();
        assert_eq!(tab.name, "draft.txt");
        assert_eq!(tab.path.as_deref(), Some("/tmp/draft.txt"));
        assert_eq!(tab.content, "body");
        assert!(!tab.is_modified);
        // Untouched fields keep their values
        assert_eq!(tab.encoding, "utf-8");
    }

    #[test]
    fn update_tab_missing_id_is_noop() {
        let (mut mgr, _) = manager_with(&["a"]);
        mgr.update_tab(
            999,
            TabUpdate {
                name: Some("ghost".into()),
                ..TabUpdate::default()
            },
        );
        assert_eq!(mgr.tabs()[0].name, "a");
    }

    #[test]
    fn update_tab_content_derives_modification() {
        let mut mgr = TabManager::new();
        let id = mgr.add_tab(TabOptions {
            content: Some("original".into()),
            ..TabOptions::default()
        });
        mgr.update_tab_content(id, "changed");
        assert!(mgr.get_tab(id).unwrap().is_modified);
        mgr.update_tab_content(id, "original");
        assert!(!mgr.get_tab(id).unwrap().is_modified);
    }

    #[test]
    fn toggle_pin_flips_flag() {
        let (mut mgr, ids) = manager_with(&["a"]);
        mgr.toggle_pin_tab(ids[0]);
        assert!(mgr.get_tab(ids[0]).unwrap().is_pinned);
        mgr.toggle_pin_tab(ids[0]);
        assert!(!mgr.get_tab(ids[0]).unwrap().is_pinned);
    }

    #[test]
    fn set_tab_color() {
        let (mut mgr, ids) = manager_with(&["a"]);
        mgr.set_tab_color(ids[0], TabColor::Color3);
        assert_eq!(mgr.get_tab(ids[0]).unwrap().tab_color, TabColor::Color3);
    }

    #[test]
    fn move_tab_reorders() {
        let (mut mgr, _) = manager_with(&["a", "b", "c", "d"]);
        mgr.move_tab(0, 2);
        assert_eq!(names(&mgr), vec!["b", "c", "a", "d"]);
        mgr.move_tab(3, 0);
        assert_eq!(names(&mgr), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn move_tab_clamps_target_and_ignores_bad_source() {
        let (mut mgr, _) = manager_with(&["a", "b", "c"]);
        mgr.move_tab(0, 100);
        assert_eq!(names(&mgr), vec!["b", "c", "a"]);
        mgr.move_tab(50, 0);
        assert_eq!(names(&mgr), vec!["b", "c", "a"]);
    }

    #[test]
    fn move_tab_does_not_change_active_id() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        mgr.set_active_tab(ids[0]);
        mgr.move_tab(0, 2);
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
        assert_active_valid(&mgr);
    }

    #[test]
    fn next_and_prev_tab_wrap_around() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[2]));
        mgr.next_tab();
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
        mgr.prev_tab();
        assert_eq!(mgr.active_tab_id(), Some(ids[2]));
        mgr.prev_tab();
        assert_eq!(mgr.active_tab_id(), Some(ids[1]));
    }

    #[test]
    fn navigation_is_noop_with_single_tab() {
        let (mut mgr, ids) = manager_with(&["solo"]);
        mgr.next_tab();
        mgr.prev_tab();
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
    }

    #[test]
    fn go_to_tab_checks_bounds() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        mgr.go_to_tab(0);
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
        mgr.go_to_tab(17);
        assert_eq!(mgr.active_tab_id(), Some(ids[0]));
    }

    #[test]
    fn move_active_tab_forward_and_backward() {
        let (mut mgr, ids) = manager_with(&["a", "b", "c"]);
        mgr.set_active_tab(ids[1]);
        mgr.move_active_tab_forward();
        assert_eq!(names(&mgr), vec!["a", "c", "b"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[1]));
        mgr.move_active_tab_forward();
        // Already rightmost
        assert_eq!(names(&mgr), vec!["a", "c", "b"]);

        mgr.move_active_tab_backward();
        assert_eq!(names(&mgr), vec!["a", "b", "c"]);
        mgr.move_active_tab_backward();
        assert_eq!(names(&mgr), vec!["b", "a", "c"]);
        mgr.move_active_tab_backward();
        // Already leftmost
        assert_eq!(names(&mgr), vec!["b", "a", "c"]);
        assert_eq!(mgr.active_tab_id(), Some(ids[1]));
    }
}
