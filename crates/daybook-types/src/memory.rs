use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The persisted project-memory index.
///
/// One JSON document on disk is the sole durable representation; processes
/// hold a working copy and flush it wholesale after each successful update.
/// Unknown or missing fields deserialize to their defaults so the document
/// stays readable across minor shape changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectIndex {
    /// Watermark of the last successful update. `None` before the first
    /// run; monotonically non-decreasing afterwards.
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    /// Everything known about each project, keyed by project name.
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectRecord>,
}

/// Aggregated history for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Earliest day a session was ever observed. Immutable after creation,
    /// even when an older session surfaces later.
    pub first_seen: String,
    /// Latest day observed so far. Moves forward only.
    pub last_touched: String,
    /// Count of distinct (day, session id) pairs ever merged.
    #[serde(default)]
    pub total_sessions: u64,
    /// Rolled-up free-text summary derived from recent daily logs.
    #[serde(default)]
    pub summary: String,
    /// Per-day aggregation, keyed by `YYYY-MM-DD`. The key order doubles
    /// as chronological order.
    #[serde(default)]
    pub daily_logs: BTreeMap<String, DailyLog>,
}

impl ProjectRecord {
    /// Fresh record for a project first observed on `date`.
    pub fn new(date: &str) -> Self {
        Self {
            first_seen: date.to_string(),
            last_touched: date.to_string(),
            total_sessions: 0,
            summary: String::new(),
            daily_logs: BTreeMap::new(),
        }
    }

    /// Distinct session ids recorded across all daily logs.
    ///
    /// Equal to `total_sessions` whenever the merge invariants hold.
    pub fn recorded_sessions(&self) -> u64 {
        self.daily_logs
            .values()
            .map(|log| log.sessions.len() as u64)
            .sum()
    }
}

/// One project's activity on one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Session ids seen that day. Append-only, no duplicates.
    #[serde(default)]
    pub sessions: Vec<String>,
    /// Generated one-day summary, empty until a summarizer fills it in.
    #[serde(default)]
    pub summary: String,
    /// Key topics extracted alongside the summary.
    #[serde(default)]
    pub key_topics: Vec<String>,
}
