use daybook_types::{
    BlogContext, DailyLog, ProjectHistory, ProjectIndex, ProjectRecord, SessionContent,
    SessionDescriptor,
};
use std::collections::BTreeMap;

/// How many prior daily logs accompany each project in the context payload.
pub const HISTORY_WINDOW: usize = 5;

/// Assemble the generation payload for one day.
///
/// `today` carries the raw transcript of every session dated `date`,
/// including ones that read as empty; deciding what to do with an empty day
/// is the caller's job. `history` draws only on daily logs dated strictly
/// before `date`, so the day being written about never appears in its own
/// history. Projects without an index entry are silently absent from
/// `history`.
pub fn build_context(
    index: &ProjectIndex,
    sessions: &[SessionDescriptor],
    date: &str,
) -> BlogContext {
    let mut today = Vec::new();
    let mut projects_worked_on: Vec<String> = Vec::new();

    for session in sessions {
        if session.date != date {
            continue;
        }
        if !projects_worked_on.contains(&session.project) {
            projects_worked_on.push(session.project.clone());
        }
        today.push(SessionContent {
            project: session.project.clone(),
            session_id: session.session_id.clone(),
            content: session.read_content(),
        });
    }

    let history = projects_worked_on
        .iter()
        .filter_map(|project| {
            index.projects.get(project).map(|record| ProjectHistory {
                project: project.clone(),
                first_worked: record.first_seen.clone(),
                total_sessions: record.total_sessions,
                summary: record.summary.clone(),
                recent_sessions: recent_window(record, date),
            })
        })
        .collect();

    BlogContext {
        date: date.to_string(),
        today,
        history,
        projects_worked_on,
    }
}

/// The chronologically-latest daily logs dated strictly before `date`,
/// capped at [`HISTORY_WINDOW`].
fn recent_window(record: &ProjectRecord, date: &str) -> BTreeMap<String, DailyLog> {
    let prior: Vec<_> = record.daily_logs.range(..date.to_string()).collect();
    let skip = prior.len().saturating_sub(HISTORY_WINDOW);
    prior
        .into_iter()
        .skip(skip)
        .map(|(day, log)| (day.clone(), log.clone()))
        .collect()
}
