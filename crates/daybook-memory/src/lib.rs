mod config;
mod context;
mod memory;
mod traits;

pub use config::Config;
pub use context::{HISTORY_WINDOW, build_context};
pub use memory::{IndexStats, ProjectMemory};
pub use traits::{Generator, Sanitizer};
use std::fmt;

/// Result type for daybook-memory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the service layer
#[derive(Debug)]
pub enum Error {
    /// Index layer error
    Index(daybook_index::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Index(err) => write!(f, "Index error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Index(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<daybook_index::Error> for Error {
    fn from(err: daybook_index::Error) -> Self {
        Error::Index(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
