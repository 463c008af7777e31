use crate::memory::DailyLog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Generation-ready payload for one day: today's raw transcripts plus a
/// bounded window of historical summaries for the projects touched today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogContext {
    /// Target day (`YYYY-MM-DD`).
    pub date: String,
    /// Raw content of every session dated `date`, including sessions whose
    /// transcript reads as empty.
    pub today: Vec<SessionContent>,
    /// Historical context for today's projects that already have an index
    /// entry. Projects with no prior history are omitted.
    pub history: Vec<ProjectHistory>,
    /// Distinct project names among today's sessions, in first-occurrence
    /// order.
    pub projects_worked_on: Vec<String>,
}

/// One session's transcript, ready for the generation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContent {
    pub project: String,
    pub session_id: String,
    pub content: String,
}

/// Summarized history for a single project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectHistory {
    pub project: String,
    /// Day the project was first observed.
    pub first_worked: String,
    pub total_sessions: u64,
    /// The project's rolled-up summary.
    pub summary: String,
    /// The chronologically-latest daily logs dated strictly before the
    /// context's target day.
    pub recent_sessions: BTreeMap<String, DailyLog>,
}

/// Outcome of the external generation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
