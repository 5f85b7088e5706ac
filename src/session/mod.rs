//! Session state types for save/restore across runs
//!
//! A session snapshot is the serializable projection of the open-tab set: a
//! light descriptor per tab, the active-tab index, and the sidebar panel
//! selector. Capture it on exit with [`capture::capture_session`], persist it
//! with [`storage`], and rebuild the collection on next launch with
//! [`restore::restore_session`].
//!
//! The on-disk shape is JSON with camelCase keys; tabs backed by a durable
//! path carry no content (the document is re-read from its path on restore),
//! unsaved tabs carry their full text.

pub mod capture;
pub mod restore;
pub mod storage;

use serde::{Deserialize, Serialize};

/// Top-level session snapshot: the open-tab set at the time of save
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// All open tabs, in display order
    #[serde(default)]
    pub tabs: Vec<SessionTab>,
    /// Index of the active tab within `tabs`
    #[serde(default)]
    pub active_tab_index: usize,
    /// Sidebar panel that was open, if any
    #[serde(default)]
    pub sidebar_panel: Option<SidebarPanel>,
}

/// A single tab in a saved session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTab {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Durable-storage path (None = unsaved document)
    #[serde(default)]
    pub path: Option<String>,
    /// Language id
    #[serde(default)]
    pub language: String,
    /// In-memory text, present only for unsaved tabs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// 1-based cursor line
    #[serde(default = "one")]
    pub cursor_line: usize,
    /// 1-based cursor column
    #[serde(default = "one")]
    pub cursor_column: usize,
    /// Vertical scroll offset in pixels
    #[serde(default)]
    pub scroll_top: f64,
}

fn one() -> usize {
    1
}

/// Sidebar panel selector persisted with the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SidebarPanel {
    Explorer,
    Search,
    Functions,
    Project,
    ClipboardHistory,
    CharPanel,
    DocList,
}
