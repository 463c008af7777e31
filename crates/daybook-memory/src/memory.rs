use crate::Result;
use crate::config::Config;
use crate::context::build_context;
use chrono::{DateTime, Utc};
use daybook_index::{IndexStore, Summarizer, UpdateStats, merge_sessions, update_summaries};
use daybook_locator::{find_new, locate};
use daybook_types::{BlogContext, ProjectIndex, ProjectRecord, today};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Cross-day project memory.
///
/// Owns the working copy of the index for the lifetime of a process
/// invocation; every successful update flushes the whole document back
/// through the store. One mutator at a time, no cross-process locking.
pub struct ProjectMemory {
    transcript_dir: PathBuf,
    store: IndexStore,
    index: ProjectIndex,
}

impl ProjectMemory {
    pub fn new(transcript_dir: impl Into<PathBuf>, index_path: impl Into<PathBuf>) -> Self {
        let store = IndexStore::new(index_path);
        let index = store.load();
        Self {
            transcript_dir: transcript_dir.into(),
            store,
            index,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let transcript_dir = config.resolve_transcript_dir();
        let index_path = config.resolve_index_path()?;
        Ok(Self::new(transcript_dir, index_path))
    }

    pub fn index(&self) -> &ProjectIndex {
        &self.index
    }

    pub fn transcript_dir(&self) -> &Path {
        &self.transcript_dir
    }

    /// One incremental update run.
    ///
    /// Locates sessions dated on or after the watermark day, merges them
    /// (idempotently, so the day-granular overlap with the previous run is
    /// harmless), optionally summarizes what changed, then advances the
    /// watermark and persists. The watermark advances even when nothing new
    /// was found so the next run scans from today.
    pub fn update(&mut self, summarizer: Option<&dyn Summarizer>) -> Result<UpdateStats> {
        let new_sessions = find_new(&self.transcript_dir, self.index.last_updated);
        let stats = merge_sessions(&mut self.index, &new_sessions);

        if let Some(summarizer) = summarizer
            && stats.new_sessions > 0
        {
            update_summaries(&mut self.index, &new_sessions, summarizer);
        }

        self.index.last_updated = Some(Utc::now());
        self.store.save(&self.index)?;

        Ok(stats)
    }

    /// Generation payload for `date`, defaulting to the current local day.
    pub fn context_for(&self, date: Option<&str>) -> BlogContext {
        let date = date.map(str::to_string).unwrap_or_else(today);
        let sessions = locate(&self.transcript_dir);
        build_context(&self.index, &sessions, &date)
    }

    /// Full accumulated history for one project, if any.
    pub fn project_history(&self, project: &str) -> Option<&ProjectRecord> {
        self.index.projects.get(project)
    }

    /// Names of every tracked project.
    pub fn projects(&self) -> Vec<&str> {
        self.index.projects.keys().map(String::as_str).collect()
    }

    /// Point-in-time totals for status output.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_projects: self.index.projects.len(),
            total_sessions: self
                .index
                .projects
                .values()
                .map(|record| record.total_sessions)
                .sum(),
            last_updated: self.index.last_updated,
            projects: self.index.projects.keys().cloned().collect(),
        }
    }
}

/// Index totals as reported by `daybook stats`.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub total_projects: usize,
    pub total_sessions: u64,
    pub last_updated: Option<DateTime<Utc>>,
    pub projects: Vec<String>,
}
