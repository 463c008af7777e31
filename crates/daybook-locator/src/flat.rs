//! Flat (repo checkout) layout: `root/<date>/<project>_<session_id>.md`.

use daybook_types::{SessionDescriptor, is_day};
use std::path::Path;

pub(crate) fn scan(root: &Path) -> Vec<SessionDescriptor> {
    let mut sessions = Vec::new();
    let Ok(entries) = std::fs::read_dir(root) else {
        return sessions;
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let date_dir = entry.path();
        let name = entry.file_name();
        let date = name.to_string_lossy();

        if !date_dir.is_dir() || date.starts_with('.') || !is_day(&date) {
            continue;
        }

        let Ok(files) = std::fs::read_dir(&date_dir) else {
            continue;
        };

        for file in files.filter_map(|e| e.ok()) {
            let path = file.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let (project, session_id) = split_stem(stem);
            sessions.push(SessionDescriptor {
                project,
                date: date.to_string(),
                session_id,
                session_dir: date_dir.clone(),
                content_path: path,
                has_metadata: false,
                metadata: None,
            });
        }
    }

    sessions
}

/// Split a `project_sessionid` stem on its last underscore. A stem with no
/// underscore uses the whole stem for both fields.
fn split_stem(stem: &str) -> (String, String) {
    match stem.rsplit_once('_') {
        Some((project, session_id)) => (project.to_string(), session_id.to_string()),
        None => (stem.to_string(), stem.to_string()),
    }
}
