use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One line of the append-only audit trail: every report, vote, and status
/// change lands here, from both the dashboard and the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub timestamp: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

pub fn new_event(
    action: &str,
    issue_id: Option<&str>,
    issue_title: Option<&str>,
    detail: Option<&str>,
) -> ActivityEvent {
    ActivityEvent {
        timestamp: chrono::Utc::now().to_rfc3339(),
        action: action.to_string(),
        issue_id: issue_id.map(String::from),
        issue_title: issue_title.map(String::from),
        detail: detail.map(String::from),
    }
}

fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("activity.jsonl")
}

pub fn append_event(data_dir: &Path, event: &ActivityEvent) -> Result<()> {
    let path = log_path(data_dir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    let line = serde_json::to_string(event)?;
    writeln!(file, "{line}")?;
    Ok(())
}

/// Reads events oldest-first; `limit` keeps only the most recent entries.
pub fn read_events(data_dir: &Path, limit: Option<usize>) -> Vec<ActivityEvent> {
    let path = log_path(data_dir);
    if !path.exists() {
        return Vec::new();
    }
    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    let mut events: Vec<ActivityEvent> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect();

    if let Some(limit) = limit {
        let len = events.len();
        if len > limit {
            events = events.split_off(len - limit);
        }
    }

    events
}
