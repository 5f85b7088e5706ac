//! Tab management for the multi-document editor shell
//!
//! This module provides the core tab infrastructure:
//! - `DocumentTab`: one open document and its editing metadata
//! - `TabManager`: the ordered tab collection and every lifecycle operation
//! - `ClosedTabHistory`: bounded undo-history of closed tabs, feeding restore
//! - `TabId`: unique identifier for each tab instance

mod closed;
mod manager;

pub use closed::{ClosedTabHistory, MAX_CLOSED_TABS};
pub use manager::TabManager;

use crate::language::detect_language;

/// Unique identifier for a tab instance.
///
/// Assigned from a monotonic counter at creation and never reused while the
/// process lives. Restoring a closed tab assigns a fresh id.
pub type TabId = u64;

/// Accent color assignable to a tab from the tab-bar context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabColor {
    /// No accent, the default chrome color
    #[default]
    None,
    Color1,
    Color2,
    Color3,
    Color4,
    Color5,
}

/// Line-ending convention of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix (`\n`)
    #[default]
    Lf,
    /// Windows (`\r\n`)
    Crlf,
    /// Classic Mac (`\r`)
    Cr,
}

impl LineEnding {
    /// Detect the dominant line ending in `content`.
    ///
    /// Ties go to CRLF, then CR over LF; all-one-line content reads as LF.
    pub fn detect(content: &str) -> Self {
        let mut crlf = 0usize;
        let mut lf = 0usize;
        let mut cr = 0usize;
        let bytes = content.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    crlf += 1;
                    i += 2;
                    continue;
                }
                b'\r' => cr += 1,
                b'\n' => lf += 1,
                _ => {}
            }
            i += 1;
        }
        if crlf + lf + cr == 0 {
            LineEnding::Lf
        } else if crlf >= lf && crlf >= cr {
            LineEnding::Crlf
        } else if cr > lf {
            LineEnding::Cr
        } else {
            LineEnding::Lf
        }
    }

    /// Rewrite every line break in `content` to this convention.
    pub fn convert(self, content: &str) -> String {
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        match self {
            LineEnding::Lf => normalized,
            LineEnding::Crlf => normalized.replace('\n', "\r\n"),
            LineEnding::Cr => normalized.replace('\n', "\r"),
        }
    }
}

/// A styled mark annotation placed by the editing surface.
///
/// Carried by the tab, never interpreted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkStyle {
    /// 1-based line of the mark
    pub line: usize,
    /// 1-based column where the mark starts
    pub column: usize,
    /// Marked span length in characters
    pub length: usize,
    /// Mark style slot (1-5)
    pub style: u8,
}

/// One open document and its editing metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTab {
    /// Unique identifier for this tab
    pub id: TabId,
    /// Display name (file name, or synthesized "new N" for unsaved documents)
    pub name: String,
    /// Durable-storage location; `None` for documents never saved to disk
    pub path: Option<String>,
    /// Current in-memory text
    pub content: String,
    /// Text as last loaded or saved; `is_modified` is derived against this
    pub original_content: String,
    /// Language id for syntax highlighting (see [`crate::language`])
    pub language: String,
    /// Character encoding label (e.g. "utf-8")
    pub encoding: String,
    /// Line-ending convention
    pub line_ending: LineEnding,
    /// Whether `content` differs from `original_content`
    pub is_modified: bool,
    /// Whether edits are rejected by the editing surface
    pub is_read_only: bool,
    /// Pinned tabs are exempt from bulk-close operations
    pub is_pinned: bool,
    /// Accent color shown in the tab bar
    pub tab_color: TabColor,
    /// 1-based cursor line (view state, owned by the editing surface)
    pub cursor_line: usize,
    /// 1-based cursor column (view state, owned by the editing surface)
    pub cursor_column: usize,
    /// Vertical scroll offset in pixels (view state, owned by the editing surface)
    pub scroll_top: f64,
    /// Bookmarked lines, 1-based (owned by the editing surface)
    pub bookmarks: Vec<usize>,
    /// Styled marks (owned by the editing surface)
    pub marks: Vec<MarkStyle>,
    /// Lines hidden by the editing surface's fold/hide feature
    pub hidden_lines: Vec<usize>,
    /// Whether the external tail-file feature is watching this document
    pub is_monitoring: bool,
}

impl DocumentTab {
    /// Create a new tab from the defaulting record.
    ///
    /// # Arguments
    /// * `id` - Unique tab identifier
    /// * `tab_number` - Display number used for the synthesized name (1-indexed,
    ///   based on current tab count, not the unique id)
    /// * `opts` - Caller-supplied fields; anything `None` takes its default
    pub fn new(id: TabId, tab_number: usize, opts: TabOptions) -> Self {
        let name = opts.name.unwrap_or_else(|| format!("new {tab_number}"));
        let language = opts
            .language
            .unwrap_or_else(|| detect_language(&name).to_string());
        let content = opts.content.unwrap_or_default();

        Self {
            id,
            name,
            path: opts.path,
            original_content: content.clone(),
            content,
            language,
            encoding: opts.encoding.unwrap_or_else(|| "utf-8".to_string()),
            line_ending: opts.line_ending.unwrap_or_default(),
            is_modified: false,
            is_read_only: opts.read_only,
            is_pinned: false,
            tab_color: TabColor::None,
            cursor_line: 1,
            cursor_column: 1,
            scroll_top: 0.0,
            bookmarks: Vec::new(),
            marks: Vec::new(),
            hidden_lines: Vec::new(),
            is_monitoring: false,
        }
    }

    /// Apply a partial update, leaving `None` fields untouched.
    ///
    /// Content changes do not go through here — `TabManager::update_tab_content`
    /// is the one path that re-derives `is_modified`.
    pub(crate) fn apply_update(&mut self, update: TabUpdate) {
        let TabUpdate {
            name,
            path,
            language,
            encoding,
            line_ending,
            original_content,
            is_modified,
            is_read_only,
            is_monitoring,
            cursor_line,
            cursor_column,
            scroll_top,
            bookmarks,
            marks,
            hidden_lines,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(path) = path {
            self.path = Some(path);
        }
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(encoding) = encoding {
            self.encoding = encoding;
        }
        if let Some(line_ending) = line_ending {
            self.line_ending = line_ending;
        }
        if let Some(original_content) = original_content {
            self.original_content = original_content;
        }
        if let Some(is_modified) = is_modified {
            self.is_modified = is_modified;
        }
        if let Some(is_read_only) = is_read_only {
            self.is_read_only = is_read_only;
        }
        if let Some(is_monitoring) = is_monitoring {
            self.is_monitoring = is_monitoring;
        }
        if let Some(cursor_line) = cursor_line {
            self.cursor_line = cursor_line;
        }
        if let Some(cursor_column) = cursor_column {
            self.cursor_column = cursor_column;
        }
        if let Some(scroll_top) = scroll_top {
            self.scroll_top = scroll_top;
        }
        if let Some(bookmarks) = bookmarks {
            self.bookmarks = bookmarks;
        }
        if let Some(marks) = marks {
            self.marks = marks;
        }
        if let Some(hidden_lines) = hidden_lines {
            self.hidden_lines = hidden_lines;
        }
    }
}

/// Optional fields for [`TabManager::add_tab`].
///
/// Anything left `None` takes the documented default, so callers spell out
/// only what they know (a file open supplies name/path/content, a bare
/// "New Tab" supplies nothing).
#[derive(Debug, Clone, Default)]
pub struct TabOptions {
    /// Display name; defaults to `"new N"` where N is the tab count + 1
    pub name: Option<String>,
    /// Durable-storage location; `None` for unsaved documents
    pub path: Option<String>,
    /// Initial content; also becomes the original content
    pub content: Option<String>,
    /// Language id; defaults to name-based detection
    pub language: Option<String>,
    /// Character encoding; defaults to `"utf-8"`
    pub encoding: Option<String>,
    /// Line-ending convention; defaults to LF
    pub line_ending: Option<LineEnding>,
    /// Open the document read-only
    pub read_only: bool,
}

/// Partial update record for [`TabManager::update_tab`].
///
/// `None` fields are left untouched. Used for save completion (`path`/`name`/
/// `original_content` plus `is_modified: false`), language/encoding/line-ending
/// changes, view-state sync, and annotation hand-back from the editing surface.
#[derive(Debug, Clone, Default)]
pub struct TabUpdate {
    pub name: Option<String>,
    pub path: Option<String>,
    pub language: Option<String>,
    pub encoding: Option<String>,
    pub line_ending: Option<LineEnding>,
    pub original_content: Option<String>,
    pub is_modified: Option<bool>,
    pub is_read_only: Option<bool>,
    pub is_monitoring: Option<bool>,
    pub cursor_line: Option<usize>,
    pub cursor_column: Option<usize>,
    pub scroll_top: Option<f64>,
    pub bookmarks: Option<Vec<usize>>,
    pub marks: Option<Vec<MarkStyle>>,
    pub hidden_lines: Option<Vec<usize>>,
}
