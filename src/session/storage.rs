//! File I/O for session persistence
//!
//! Sessions are stored in `~/.config/par-edit/last_session.json`

use super::SessionState;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the path to the session state file
pub fn session_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("par-edit")
        .join("last_session.json")
}

/// Save session state to the default location
pub fn save_session(state: &SessionState) -> Result<()> {
    save_session_to(state, session_path())
}

/// Save session state to a specific file
pub fn save_session_to(state: &SessionState, path: PathBuf) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let contents =
        serde_json::to_string_pretty(state).context("Failed to serialize session state")?;

    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write session state to {:?}", path))?;

    log::info!(
        "Saved session state ({} tabs) to {:?}",
        state.tabs.len(),
        path
    );
    Ok(())
}

/// Load session state from the default location
///
/// Returns `None` if the file doesn't exist or is empty.
/// Returns an error if the file exists but is corrupt.
pub fn load_session() -> Result<Option<SessionState>> {
    load_session_from(session_path())
}

/// Load session state from a specific file
pub fn load_session_from(path: PathBuf) -> Result<Option<SessionState>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read session state from {:?}", path))?;

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let state: SessionState = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session state from {:?}", path))?;

    log::info!(
        "Loaded session state ({} tabs) from {:?}",
        state.tabs.len(),
        path
    );
    Ok(Some(state))
}

/// Remove the session state file (e.g., after the user turns session restore off)
pub fn clear_session() -> Result<()> {
    let path = session_path();
    if path.exists() {
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to remove session state file {:?}", path))?;
    }
    Ok(())
}
