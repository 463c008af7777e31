use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths daybook operates on.
///
/// Both fields are optional; unset fields fall through a conventional
/// resolution chain so the CLI works out of the box while tests and scripts
/// can pin everything explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Root directory holding transcript sessions.
    #[serde(default)]
    pub transcript_dir: Option<PathBuf>,

    /// Location of the persisted project index.
    #[serde(default)]
    pub index_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("daybook").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Resolve the transcript root based on priority:
    /// 1. Explicit config value
    /// 2. DAYBOOK_TRANSCRIPTS environment variable
    /// 3. `~/transcript` when it exists and is non-empty (local capture)
    /// 4. `./transcripts` (repo checkout fallback)
    pub fn resolve_transcript_dir(&self) -> PathBuf {
        if let Some(dir) = &self.transcript_dir {
            return dir.clone();
        }

        if let Ok(env_dir) = std::env::var("DAYBOOK_TRANSCRIPTS") {
            return PathBuf::from(env_dir);
        }

        if let Some(home) = dirs::home_dir() {
            let local = home.join("transcript");
            if dir_is_populated(&local) {
                return local;
            }
        }

        PathBuf::from("transcripts")
    }

    /// Resolve the index file path based on priority:
    /// 1. Explicit config value
    /// 2. DAYBOOK_INDEX environment variable
    /// 3. XDG data directory: `<data>/daybook/project_index.json`
    /// 4. `~/.daybook/project_index.json` (systems without XDG)
    pub fn resolve_index_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.index_path {
            return Ok(path.clone());
        }

        if let Ok(env_path) = std::env::var("DAYBOOK_INDEX") {
            return Ok(PathBuf::from(env_path));
        }

        if let Some(data_dir) = dirs::data_dir() {
            return Ok(data_dir.join("daybook").join("project_index.json"));
        }

        if let Some(home) = dirs::home_dir() {
            return Ok(home.join(".daybook").join("project_index.json"));
        }

        Err(Error::Config(
            "Could not determine index path: no HOME directory or XDG data directory found"
                .to_string(),
        ))
    }
}

fn dir_is_populated(path: &Path) -> bool {
    std::fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
