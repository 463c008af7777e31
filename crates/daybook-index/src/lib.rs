// JSON document index
// One durable file, loaded whole and flushed whole on every update

mod store;
mod summarizer;
mod updater;

// Public API
pub use store::IndexStore;
pub use summarizer::{
    ClaudeCliSummarizer, DailySummary, SUMMARY_CONTENT_CAP, Summarizer, truncate_chars,
};
pub use updater::{UpdateStats, merge_sessions, refresh_project_summary, update_summaries};
use std::fmt;

/// Result type for daybook-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the index layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Index document could not be serialized
    Serialize(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Serialize(err) => write!(f, "Index serialization error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err)
    }
}
