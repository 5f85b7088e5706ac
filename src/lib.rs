//! Document tab lifecycle and session state core for a multi-document editor shell
//!
//! par-edit owns the hard state of a tabbed text editor: the ordered set of
//! open documents, the active-tab pointer, the bounded history of closed tabs
//! that feeds "Restore Last Closed Tab", the recent-file registry, and the
//! session snapshot/restore protocol. The editing surface, menu routing, and
//! platform bridges live in the embedding shell and talk to this crate through
//! [`tab::TabManager`] and the [`session`] modules.
//!
//! Every mutator is synchronous and infallible: operating on a tab id that no
//! longer exists is a silent no-op (the triggering UI element may already be
//! stale by the time the event arrives), and capacity overflows evict the
//! oldest entry rather than failing. Only the storage boundary
//! ([`session::storage`] and [`recent`] persistence) returns errors.

/// Crate version (for use by the embedding shell).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod language;
pub mod recent;
pub mod session;
pub mod tab;
