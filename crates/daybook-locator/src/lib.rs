//! Transcript session discovery.
//!
//! Two on-disk arrangements are supported, detected once per scan:
//!
//! - Flat (repo checkout): `root/<date>/<project>_<session_id>.md`
//! - Nested (local capture): `root/<project>/<date>/<session_id>/conversation.md`
//!   with an optional `metadata.json` sibling.

mod flat;
mod nested;

use chrono::{DateTime, Utc};
use daybook_types::{SessionDescriptor, is_day, parse_day};
use std::path::Path;

pub use nested::{CONVERSATION_FILE, METADATA_FILE};

/// On-disk transcript arrangement, decided once per `locate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Date directories at the top level, one file per session.
    Flat,
    /// Project directories at the top level, one directory per session.
    Nested,
}

/// Detect which layout `root` uses by sampling its first non-hidden
/// subdirectory: a `YYYY-MM-DD` name means the flat layout, anything else
/// is treated as a project name. Returns `None` for a missing root or one
/// with no subdirectories to sample.
pub fn detect_layout(root: &Path) -> Option<LayoutKind> {
    let entries = std::fs::read_dir(root).ok()?;

    for entry in entries.filter_map(|e| e.ok()) {
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        return Some(if is_day(&name) {
            LayoutKind::Flat
        } else {
            LayoutKind::Nested
        });
    }

    None
}

/// Scan `root` for transcript sessions.
///
/// A missing, empty, or unreadable root yields an empty list, never an
/// error. Discovery order is unspecified; callers must not rely on it.
pub fn locate(root: &Path) -> Vec<SessionDescriptor> {
    match detect_layout(root) {
        Some(LayoutKind::Flat) => flat::scan(root),
        Some(LayoutKind::Nested) => nested::scan(root),
        None => Vec::new(),
    }
}

/// Sessions dated on or after the calendar day of `since`.
///
/// The cutoff is day-granular: the time-of-day component of `since` is
/// ignored, so a watermark written at 23:59 still re-discovers sessions
/// from that same day. `None` returns everything.
pub fn find_new(root: &Path, since: Option<DateTime<Utc>>) -> Vec<SessionDescriptor> {
    let sessions = locate(root);
    let Some(since) = since else {
        return sessions;
    };
    let cutoff = since.date_naive();

    sessions
        .into_iter()
        .filter(|s| parse_day(&s.date).is_some_and(|day| day >= cutoff))
        .collect()
}
