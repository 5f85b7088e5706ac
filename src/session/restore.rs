//! Rebuild a tab collection from a session snapshot

use super::SessionState;
use crate::tab::{TabManager, TabOptions, TabUpdate};

/// Build a fresh tab collection from a saved session.
///
/// Tabs are recreated through the normal `add_tab` defaulting path, so they
/// get fresh ids and the usual fallbacks for anything the snapshot is missing
/// (empty name, empty language). An out-of-range active index falls back to
/// the first tab; an empty snapshot yields an empty collection. Never fails —
/// session restore must not take down application startup.
pub fn restore_session(session: &SessionState) -> TabManager {
    let mut manager = TabManager::new();

    for tab in &session.tabs {
        let id = manager.add_tab(TabOptions {
            name: (!tab.name.is_empty()).then(|| tab.name.clone()),
            path: tab.path.clone(),
            content: tab.content.clone(),
            language: (!tab.language.is_empty()).then(|| tab.language.clone()),
            ..TabOptions::default()
        });
        manager.update_tab(
            id,
            TabUpdate {
                cursor_line: Some(tab.cursor_line),
                cursor_column: Some(tab.cursor_column),
                scroll_top: Some(tab.scroll_top),
                ..TabUpdate::default()
            },
        );
    }

    match manager.tabs().get(session.active_tab_index) {
        Some(tab) => {
            let id = tab.id;
            manager.set_active_tab(id);
        }
        None => {
            if let Some(first) = manager.tabs().first() {
                log::warn!(
                    "Session restore: active index {} out of range, falling back to first tab",
                    session.active_tab_index
                );
                let id = first.id;
                manager.set_active_tab(id);
            }
        }
    }

    log::info!("Restored session with {} tabs", manager.tab_count());
    manager
}
