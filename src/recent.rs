//! Persistent recent-file registry
//!
//! Tracks documents opened from durable storage and persists them across
//! sessions to `~/.config/par-edit/recent_files.json`. Entries are most
//! recent first, deduplicated by path: re-opening a known path moves it to
//! the front instead of duplicating it.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

/// Maximum number of recent files retained.
pub const MAX_RECENT_FILES: usize = 20;

/// A single recent-file entry persisted across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentFile {
    /// Durable-storage path of the document
    pub path: String,
    /// Display name shown in the recent-files menu
    pub name: String,
}

/// Manages a persistent, deduplicated recent-file list bounded at
/// [`MAX_RECENT_FILES`].
#[derive(Debug)]
pub struct RecentFiles {
    entries: VecDeque<RecentFile>,
    path: PathBuf,
    dirty: bool,
}

/// JSON wrapper for serialization
#[derive(Debug, Serialize, Deserialize)]
struct RecentFilesFile {
    files: Vec<RecentFile>,
}

impl RecentFiles {
    /// Create an empty registry with the default persistence path.
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    /// Create an empty registry persisting to a specific file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            entries: VecDeque::new(),
            path,
            dirty: false,
        }
    }

    /// Get the default persistence path.
    fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("par-edit")
            .join("recent_files.json")
    }

    /// Record a document opened from durable storage.
    ///
    /// A path already in the list moves to the front; past the bound the
    /// oldest entry is dropped from the tail.
    pub fn add(&mut self, path: impl Into<String>, name: impl Into<String>) {
        let path = path.into();
        self.entries.retain(|f| f.path != path);
        self.entries.push_front(RecentFile {
            path,
            name: name.into(),
        });
        self.truncate();
        self.dirty = true;
    }

    fn truncate(&mut self) {
        self.entries.truncate(MAX_RECENT_FILES);
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &RecentFile> {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the registry from disk, replacing any in-memory entries.
    pub fn load(&mut self) {
        if !self.path.exists() {
            return;
        }
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str::<RecentFilesFile>(&contents) {
                Ok(file) => {
                    self.entries = file.files.into();
                    self.truncate();
                    log::info!("Loaded {} recent files", self.entries.len());
                }
                Err(e) => {
                    log::error!("Failed to parse recent files: {}", e);
                }
            },
            Err(e) => {
                log::error!("Failed to read recent files: {}", e);
            }
        }
    }

    /// Save the registry to disk. No-op unless something changed since the
    /// last save.
    pub fn save(&mut self) {
        if !self.dirty {
            return;
        }
        let file = RecentFilesFile {
            files: self.entries.iter().cloned().collect(),
        };
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            log::error!("Failed to create recent files directory: {}", e);
            return;
        }
        match serde_json::to_string_pretty(&file) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    log::error!("Failed to write recent files: {}", e);
                } else {
                    self.dirty = false;
                    log::debug!("Saved {} recent files", self.entries.len());
                }
            }
            Err(e) => {
                log::error!("Failed to serialize recent files: {}", e);
            }
        }
    }
}

impl Default for RecentFiles {
    fn default() -> Self {
        Self::new()
    }
}
