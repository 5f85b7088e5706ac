//! Capture the current tab collection into a session snapshot

use super::{SessionState, SessionTab, SidebarPanel};
use crate::tab::TabManager;

/// Capture the current session state from the tab collection.
///
/// Content is kept only for tabs without a durable path; documents backed by
/// a file are re-read from disk on restore. `sidebar_panel` is whatever panel
/// the shell currently shows.
pub fn capture_session(
    tab_manager: &TabManager,
    sidebar_panel: Option<SidebarPanel>,
) -> SessionState {
    let tabs: Vec<SessionTab> = tab_manager
        .tabs()
        .iter()
        .map(|tab| SessionTab {
            name: tab.name.clone(),
            path: tab.path.clone(),
            language: tab.language.clone(),
            content: if tab.path.is_none() {
                Some(tab.content.clone())
            } else {
                None
            },
            cursor_line: tab.cursor_line,
            cursor_column: tab.cursor_column,
            scroll_top: tab.scroll_top,
        })
        .collect();

    SessionState {
        tabs,
        active_tab_index: tab_manager.active_tab_index().unwrap_or(0),
        sidebar_panel,
    }
}
