use crate::summarizer::{SUMMARY_CONTENT_CAP, Summarizer, truncate_chars};
use daybook_types::{ProjectIndex, ProjectRecord, SessionDescriptor};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// How many most-recent daily logs feed a project's rolled-up summary.
const ROLLUP_WINDOW: usize = 5;
/// At most this many sessions contribute to one (project, day) summary.
const SESSIONS_PER_SUMMARY: usize = 3;
/// Leading characters taken from each contributing session.
const SNIPPET_CHARS: usize = 2000;
/// Separator between session snippets in a combined summary request.
const SNIPPET_SEPARATOR: &str = "\n\n---\n\n";

/// What one update run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// Session ids newly recorded in a daily log.
    pub new_sessions: usize,
    /// Project records created this run.
    pub new_projects: usize,
    /// Incremented alongside `new_sessions`; see the note in
    /// [`merge_sessions`].
    pub updated_projects: usize,
}

/// Merge located sessions into the index.
///
/// The merge is commutative and idempotent per session: a session id
/// already listed in its daily log changes nothing and counts nothing, so
/// replaying a previous run's sessions is harmless.
pub fn merge_sessions(index: &mut ProjectIndex, sessions: &[SessionDescriptor]) -> UpdateStats {
    let mut stats = UpdateStats::default();

    for session in sessions {
        let record = match index.projects.entry(session.project.clone()) {
            Entry::Vacant(entry) => {
                stats.new_projects += 1;
                entry.insert(ProjectRecord::new(&session.date))
            }
            Entry::Occupied(entry) => entry.into_mut(),
        };

        // Plain string comparison: fixed-width YYYY-MM-DD sorts chronologically.
        if session.date > record.last_touched {
            record.last_touched = session.date.clone();
        }

        let daily = record.daily_logs.entry(session.date.clone()).or_default();

        if !daily.sessions.contains(&session.session_id) {
            daily.sessions.push(session.session_id.clone());
            record.total_sessions += 1;
            stats.new_sessions += 1;
            // Counts once per merged session, not once per distinct project:
            // three new sessions for one project add three here. Kept so the
            // stat stays comparable with what earlier runs reported.
            stats.updated_projects += 1;
        }
    }

    stats
}

/// Run the summarizer over every (project, day) pair covered by `sessions`
/// and refresh the affected project rollups.
///
/// A `None` from the summarizer leaves that day's log untouched; the
/// remaining pairs still run.
pub fn update_summaries(
    index: &mut ProjectIndex,
    sessions: &[SessionDescriptor],
    summarizer: &dyn Summarizer,
) {
    let mut grouped: BTreeMap<(&str, &str), Vec<&SessionDescriptor>> = BTreeMap::new();
    for session in sessions {
        grouped
            .entry((session.project.as_str(), session.date.as_str()))
            .or_default()
            .push(session);
    }

    for ((project, date), day_sessions) in grouped {
        let mut snippets = Vec::new();
        for session in day_sessions.iter().take(SESSIONS_PER_SUMMARY) {
            let content = session.read_content();
            if !content.is_empty() {
                snippets.push(truncate_chars(&content, SNIPPET_CHARS).to_string());
            }
        }
        if snippets.is_empty() {
            continue;
        }

        let combined = snippets.join(SNIPPET_SEPARATOR);
        let Some(result) =
            summarizer.summarize(project, date, truncate_chars(&combined, SUMMARY_CONTENT_CAP))
        else {
            continue;
        };

        if let Some(record) = index.projects.get_mut(project) {
            if let Some(daily) = record.daily_logs.get_mut(date) {
                daily.summary = result.summary;
                daily.key_topics = result.key_topics;
            }
            refresh_project_summary(record);
        }
    }
}

/// Recompute a project's rolled-up summary from its most recent daily logs.
///
/// Takes the last [`ROLLUP_WINDOW`] logs by date and renders the ones that
/// carry a summary; with none, falls back to a session-count line.
pub fn refresh_project_summary(record: &mut ProjectRecord) {
    let skip = record.daily_logs.len().saturating_sub(ROLLUP_WINDOW);
    let lines: Vec<String> = record
        .daily_logs
        .iter()
        .skip(skip)
        .filter(|(_, log)| !log.summary.is_empty())
        .map(|(date, log)| format!("- {}: {}", date, log.summary))
        .collect();

    record.summary = if lines.is_empty() {
        format!("Project worked on {} times", record.total_sessions)
    } else {
        lines.join("\n")
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::DailySummary;
    use daybook_types::DailyLog;
    use std::path::PathBuf;

    fn session(project: &str, date: &str, id: &str) -> SessionDescriptor {
        SessionDescriptor {
            project: project.to_string(),
            date: date.to_string(),
            session_id: id.to_string(),
            session_dir: PathBuf::from("/nonexistent"),
            content_path: PathBuf::from("/nonexistent/conversation.md"),
            has_metadata: false,
            metadata: None,
        }
    }

    /// Session whose transcript actually exists on disk.
    fn session_with_content(
        dir: &std::path::Path,
        project: &str,
        date: &str,
        id: &str,
        content: &str,
    ) -> SessionDescriptor {
        let path = dir.join(format!("{project}_{id}.md"));
        std::fs::write(&path, content).unwrap();
        SessionDescriptor {
            content_path: path,
            ..session(project, date, id)
        }
    }

    struct CannedSummarizer(Option<DailySummary>);

    impl Summarizer for CannedSummarizer {
        fn summarize(&self, _: &str, _: &str, _: &str) -> Option<DailySummary> {
            self.0.clone()
        }
    }

    #[test]
    fn merge_records_sessions_and_counts() {
        let mut index = ProjectIndex::default();
        let stats = merge_sessions(
            &mut index,
            &[
                session("AutoBlog", "2026-01-13", "s1"),
                session("AutoBlog", "2026-01-14", "s2"),
                session("PenguinCAM", "2026-01-14", "s3"),
            ],
        );

        assert_eq!(stats.new_projects, 2);
        assert_eq!(stats.new_sessions, 3);
        assert_eq!(stats.updated_projects, 3);

        let auto = &index.projects["AutoBlog"];
        assert_eq!(auto.first_seen, "2026-01-13");
        assert_eq!(auto.last_touched, "2026-01-14");
        assert_eq!(auto.total_sessions, 2);
        assert_eq!(auto.daily_logs["2026-01-13"].sessions, vec!["s1"]);
    }

    #[test]
    fn merge_is_idempotent_per_session() {
        let mut index = ProjectIndex::default();
        let sessions = [session("AutoBlog", "2026-01-14", "s1")];

        merge_sessions(&mut index, &sessions);
        let again = merge_sessions(&mut index, &sessions);

        assert_eq!(again, UpdateStats::default());
        let record = &index.projects["AutoBlog"];
        assert_eq!(record.total_sessions, 1);
        assert_eq!(record.daily_logs["2026-01-14"].sessions, vec!["s1"]);
    }

    #[test]
    fn last_touched_is_max_date_regardless_of_order() {
        let mut index = ProjectIndex::default();
        merge_sessions(
            &mut index,
            &[
                session("AutoBlog", "2026-01-14", "s2"),
                session("AutoBlog", "2026-01-10", "s1"),
                session("AutoBlog", "2026-01-12", "s3"),
            ],
        );

        let record = &index.projects["AutoBlog"];
        assert_eq!(record.last_touched, "2026-01-14");
        // first_seen reflects creation, not the earliest date ever merged
        assert_eq!(record.first_seen, "2026-01-14");
    }

    #[test]
    fn total_sessions_matches_daily_log_contents() {
        let mut index = ProjectIndex::default();
        merge_sessions(
            &mut index,
            &[
                session("AutoBlog", "2026-01-13", "s1"),
                session("AutoBlog", "2026-01-13", "s2"),
                session("AutoBlog", "2026-01-14", "s3"),
            ],
        );
        // Replays and a later merge keep the invariant
        merge_sessions(
            &mut index,
            &[
                session("AutoBlog", "2026-01-13", "s2"),
                session("AutoBlog", "2026-01-15", "s4"),
            ],
        );

        let record = &index.projects["AutoBlog"];
        assert_eq!(record.total_sessions, record.recorded_sessions());
        assert_eq!(record.total_sessions, 4);
    }

    #[test]
    fn updated_projects_counts_per_session_not_per_project() {
        let mut index = ProjectIndex::default();
        let stats = merge_sessions(
            &mut index,
            &[
                session("AutoBlog", "2026-01-14", "s1"),
                session("AutoBlog", "2026-01-14", "s2"),
                session("AutoBlog", "2026-01-14", "s3"),
            ],
        );

        assert_eq!(stats.new_projects, 1);
        assert_eq!(stats.updated_projects, 3);
    }

    #[test]
    fn summaries_fill_daily_log_and_rollup() {
        let dir = tempfile::tempdir().unwrap();
        let sessions = [session_with_content(
            dir.path(),
            "AutoBlog",
            "2026-01-14",
            "s1",
            "worked on the updater",
        )];

        let mut index = ProjectIndex::default();
        merge_sessions(&mut index, &sessions);
        update_summaries(
            &mut index,
            &sessions,
            &CannedSummarizer(Some(DailySummary {
                summary: "Built the incremental updater".to_string(),
                key_topics: vec!["rust".to_string(), "indexing".to_string()],
            })),
        );

        let record = &index.projects["AutoBlog"];
        let daily = &record.daily_logs["2026-01-14"];
        assert_eq!(daily.summary, "Built the incremental updater");
        assert_eq!(daily.key_topics.len(), 2);
        assert_eq!(
            record.summary,
            "- 2026-01-14: Built the incremental updater"
        );
    }

    #[test]
    fn failed_summarizer_leaves_existing_summary_alone() {
        let dir = tempfile::tempdir().unwrap();
        let sessions = [session_with_content(
            dir.path(),
            "AutoBlog",
            "2026-01-14",
            "s1",
            "content",
        )];

        let mut index = ProjectIndex::default();
        merge_sessions(&mut index, &sessions);
        index
            .projects
            .get_mut("AutoBlog")
            .unwrap()
            .daily_logs
            .get_mut("2026-01-14")
            .unwrap()
            .summary = "earlier summary".to_string();

        update_summaries(&mut index, &sessions, &CannedSummarizer(None));

        assert_eq!(
            index.projects["AutoBlog"].daily_logs["2026-01-14"].summary,
            "earlier summary"
        );
    }

    #[test]
    fn unreadable_sessions_skip_the_summarizer_entirely() {
        struct Exploding;
        impl Summarizer for Exploding {
            fn summarize(&self, _: &str, _: &str, _: &str) -> Option<DailySummary> {
                panic!("summarizer must not run without content");
            }
        }

        let sessions = [session("AutoBlog", "2026-01-14", "s1")];
        let mut index = ProjectIndex::default();
        merge_sessions(&mut index, &sessions);

        update_summaries(&mut index, &sessions, &Exploding);
    }

    #[test]
    fn rollup_takes_last_five_days_in_ascending_order() {
        let mut record = ProjectRecord::new("2026-01-01");
        for day in 1..=7 {
            record.daily_logs.insert(
                format!("2026-01-{:02}", day),
                DailyLog {
                    sessions: vec!["s".to_string()],
                    summary: format!("day {}", day),
                    key_topics: Vec::new(),
                },
            );
        }

        refresh_project_summary(&mut record);

        let expected = (3..=7)
            .map(|day| format!("- 2026-01-{:02}: day {}", day, day))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(record.summary, expected);
    }

    #[test]
    fn rollup_falls_back_to_session_count() {
        let mut record = ProjectRecord::new("2026-01-14");
        record.total_sessions = 4;
        record
            .daily_logs
            .insert("2026-01-14".to_string(), DailyLog::default());

        refresh_project_summary(&mut record);

        assert_eq!(record.summary, "Project worked on 4 times");
    }
}
