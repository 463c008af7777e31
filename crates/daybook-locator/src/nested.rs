//! Nested (local capture) layout:
//! `root/<project>/<date>/<session_id>/conversation.md` with an optional
//! `metadata.json` sibling.

use daybook_types::{SessionDescriptor, is_day};
use serde_json::Value;
use std::path::Path;
use walkdir::WalkDir;

/// Transcript file a session directory must contain to count as a session.
pub const CONVERSATION_FILE: &str = "conversation.md";
/// Optional structured sidecar next to the conversation file.
pub const METADATA_FILE: &str = "metadata.json";

pub(crate) fn scan(root: &Path) -> Vec<SessionDescriptor> {
    let mut sessions = Vec::new();

    // Session directories live exactly three levels down: project/date/session.
    for entry in WalkDir::new(root)
        .min_depth(3)
        .max_depth(3)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        let session_dir = entry.path();

        let Ok(rel) = session_dir.strip_prefix(root) else {
            continue;
        };
        let mut parts = rel.components().filter_map(|c| c.as_os_str().to_str());
        let (Some(project), Some(date), Some(session_id)) =
            (parts.next(), parts.next(), parts.next())
        else {
            continue;
        };

        if project.starts_with('.') || !is_day(date) {
            continue;
        }

        let content_path = session_dir.join(CONVERSATION_FILE);
        if !content_path.is_file() {
            continue;
        }

        let metadata_path = session_dir.join(METADATA_FILE);
        sessions.push(SessionDescriptor {
            project: project.to_string(),
            date: date.to_string(),
            session_id: session_id.to_string(),
            session_dir: session_dir.to_path_buf(),
            content_path,
            has_metadata: metadata_path.exists(),
            metadata: read_metadata(&metadata_path),
        });
    }

    sessions
}

/// Best-effort metadata read: a missing or unparseable sidecar is not an
/// error, the session is kept without it.
fn read_metadata(path: &Path) -> Option<Value> {
    let bytes = std::fs::read(path).ok()?;
    serde_json::from_slice(&bytes).ok()
}
