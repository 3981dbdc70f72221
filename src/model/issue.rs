use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One reported civic problem. The serialized field names (`title`, `desc`,
/// `loc`, `votes`, `status`) are the on-disk contract; `id` and `reported_at`
/// are additive and default when reading older data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub desc: String,
    pub loc: String,
    pub votes: u32,
    pub status: IssueStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_at: Option<String>,
}

impl Issue {
    pub fn new(id: impl Into<String>, draft: IssueDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            desc: draft.desc,
            loc: draft.loc,
            votes: 0,
            status: IssueStatus::Pending,
            reported_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }
}

/// Caller-supplied fields for a new report. Non-empty values are the
/// caller's contract, checked by `validate::report` before the store runs.
#[derive(Debug, Clone)]
pub struct IssueDraft {
    pub title: String,
    pub desc: String,
    pub loc: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "Pending",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(IssueStatus::Pending),
            "in-progress" | "in progress" => Ok(IssueStatus::InProgress),
            "resolved" => Ok(IssueStatus::Resolved),
            other => Err(format!(
                "unknown status '{other}' (expected pending, in-progress, or resolved)"
            )),
        }
    }
}
