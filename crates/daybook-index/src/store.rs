use crate::Result;
use daybook_types::ProjectIndex;
use std::path::{Path, PathBuf};

/// Durable home of the project index.
///
/// The on-disk JSON document is the only persistent copy; callers hold the
/// working copy in memory and flush it wholesale through [`IndexStore::save`].
/// Single-writer: no locking, no atomic rename.
#[derive(Debug, Clone)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index, or start fresh.
    ///
    /// A missing file and a file that no longer parses are handled the same
    /// way: the caller gets an empty index and the next save overwrites
    /// whatever was on disk. History accumulated in a damaged file is lost;
    /// that trade is accepted over making load fallible.
    pub fn load(&self) -> ProjectIndex {
        match std::fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => ProjectIndex::default(),
        }
    }

    /// Write the full index, creating parent directories as needed.
    /// Overwrites unconditionally.
    pub fn save(&self, index: &ProjectIndex) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(index)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
