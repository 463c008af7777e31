use serde::{Deserialize, Serialize};
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Content handed to a summarizer is capped at this many characters.
pub const SUMMARY_CONTENT_CAP: usize = 4000;

const DEFAULT_DEADLINE: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// One day's generated summary for a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_topics: Vec<String>,
}

/// External summarization capability, injected into the updater.
///
/// Implementations enforce their own deadlines and signal every failure
/// mode (timeout, unparseable output, nonzero exit) by returning `None`;
/// the updater treats an absent result as "keep whatever summary exists".
pub trait Summarizer {
    fn summarize(&self, project: &str, date: &str, content: &str) -> Option<DailySummary>;
}

/// Summarizer backed by the `claude` CLI.
pub struct ClaudeCliSummarizer {
    deadline: Duration,
}

impl ClaudeCliSummarizer {
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }
}

impl Default for ClaudeCliSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_DEADLINE)
    }
}

impl Summarizer for ClaudeCliSummarizer {
    fn summarize(&self, project: &str, date: &str, content: &str) -> Option<DailySummary> {
        let prompt = build_prompt(project, date, content);
        let stdout = run_with_deadline("claude", &["--print", "-p", &prompt], self.deadline)?;
        extract_json(&stdout).and_then(|raw| serde_json::from_str(raw).ok())
    }
}

fn build_prompt(project: &str, date: &str, content: &str) -> String {
    format!(
        "Summarize this coding session for the project \"{project}\" on {date}.\n\n\
         Provide a JSON response with:\n\
         - \"summary\": A 1-2 sentence summary of what was done\n\
         - \"key_topics\": A list of 3-5 key topics/technologies discussed\n\n\
         Session content:\n{content}\n\n\
         Respond with only valid JSON, no other text."
    )
}

/// The outermost `{...}` span in a possibly chatty response.
fn extract_json(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (end >= start).then(|| &response[start..=end])
}

/// Char-boundary-safe prefix of at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Run a command and capture stdout, killing it once the deadline passes.
/// Any failure (spawn error, timeout, nonzero exit, empty output) is `None`.
fn run_with_deadline(program: &str, args: &[&str], deadline: Duration) -> Option<String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let cutoff = Instant::now() + deadline;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                if !status.success() {
                    return None;
                }
                let mut stdout = String::new();
                child.stdout.take()?.read_to_string(&mut stdout).ok()?;
                let stdout = stdout.trim();
                return (!stdout.is_empty()).then(|| stdout.to_string());
            }
            Ok(None) => {
                if Instant::now() >= cutoff {
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_json_from_chatty_response() {
        let response = "Sure! Here is the summary:\n{\"summary\": \"Built the index\", \
                        \"key_topics\": [\"rust\", \"json\"]}\nHope that helps.";

        let raw = extract_json(response).unwrap();
        let parsed: DailySummary = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.summary, "Built the index");
        assert_eq!(parsed.key_topics, vec!["rust", "json"]);
    }

    #[test]
    fn extract_json_requires_braces() {
        assert!(extract_json("no json here").is_none());
        assert!(extract_json("} reversed {").is_none());
    }

    #[test]
    fn daily_summary_tolerates_missing_fields() {
        let parsed: DailySummary = serde_json::from_str(r#"{"summary": "did things"}"#).unwrap();
        assert_eq!(parsed.summary, "did things");
        assert!(parsed.key_topics.is_empty());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // Multi-byte characters count as one
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
