use serde_json::Value;
use std::path::PathBuf;

/// A transcript session discovered on disk.
///
/// Descriptors are rebuilt fresh on every scan and never persisted; the
/// durable record of a session is the id entry in its project's daily log.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDescriptor {
    /// Logical project name, derived from the directory or filename.
    pub project: String,
    /// Day the session took place (`YYYY-MM-DD`, validated by the locator).
    pub date: String,
    /// Session identifier, unique within (project, date) by convention.
    pub session_id: String,
    /// Directory the session was found in.
    pub session_dir: PathBuf,
    /// Path to the conversation transcript file.
    pub content_path: PathBuf,
    /// Whether a sidecar metadata file exists (nested layout only).
    pub has_metadata: bool,
    /// Parsed sidecar metadata, when present and well-formed.
    pub metadata: Option<Value>,
}

impl SessionDescriptor {
    /// Read the conversation transcript.
    ///
    /// Reads permissively: invalid UTF-8 is replaced, and a missing or
    /// unreadable file reads as the empty string rather than an error.
    pub fn read_content(&self) -> String {
        match std::fs::read(&self.content_path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => String::new(),
        }
    }
}
