use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::model::issue::{Issue, IssueDraft, IssueStatus};

const ID_PREFIX: &str = "PP-";

/// Single source of truth for the issue collection, persisted as one JSON
/// array in `issues.json`. Every mutation rewrites the whole file; reads of
/// missing or unparseable data yield the empty state rather than an error.
pub struct IssueStore {
    path: PathBuf,
    issues: Vec<Issue>,
    primed: bool,
}

impl IssueStore {
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("issues.json");
        let primed = path.exists();
        let issues = if primed {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            Vec::new()
        };
        let mut store = Self {
            path,
            issues,
            primed,
        };
        store.backfill_ids()?;
        Ok(store)
    }

    /// Writes the three example issues the first time the store is observed
    /// with no backing file. A present file is never overwritten, even one
    /// holding an empty list.
    pub fn ensure_seeded(&mut self) -> Result<()> {
        if self.primed {
            return Ok(());
        }
        self.issues = seed_issues();
        self.save()
    }

    /// Appends a new issue with zero votes and Pending status. Titles are
    /// not checked for uniqueness.
    pub fn append(&mut self, draft: IssueDraft) -> Result<Issue> {
        let issue = Issue::new(self.next_id(), draft);
        self.issues.push(issue.clone());
        self.save()?;
        Ok(issue)
    }

    /// Increments the vote count of the first issue with a matching title.
    /// Returns whether a match was found; an absent title leaves the list
    /// untouched.
    pub fn vote(&mut self, title: &str) -> Result<bool> {
        match self.issues.iter_mut().find(|i| i.title == title) {
            Some(issue) => {
                issue.votes += 1;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Sets the first title match to Resolved (`true`) or Pending (`false`),
    /// the two states the dashboard checkbox can express.
    pub fn set_status(&mut self, title: &str, resolved: bool) -> Result<bool> {
        let status = if resolved {
            IssueStatus::Resolved
        } else {
            IssueStatus::Pending
        };
        self.update_status(title, status)
    }

    /// Sets the first title match to an arbitrary status.
    pub fn update_status(&mut self, title: &str, status: IssueStatus) -> Result<bool> {
        match self.issues.iter_mut().find(|i| i.title == title) {
            Some(issue) => {
                issue.status = status;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Id-keyed variant used by the dashboard toggles, where duplicate
    /// titles must not collide.
    pub fn set_status_by_id(&mut self, id: &str, status: IssueStatus) -> Result<bool> {
        match self.issues.iter_mut().find(|i| i.id == id) {
            Some(issue) => {
                issue.status = status;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Snapshot ordered by votes descending. `sort_by` is stable, so issues
    /// with equal votes keep their insertion order.
    pub fn sorted_by_votes(&self) -> Vec<Issue> {
        let mut snapshot = self.issues.clone();
        snapshot.sort_by(|a, b| b.votes.cmp(&a.votes));
        snapshot
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.title == title)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Re-reads the backing file so writes from a concurrent `pulse` CLI
    /// invocation show up in a running dashboard.
    pub fn reload(&mut self) -> Result<()> {
        if self.path.exists() {
            let contents = std::fs::read_to_string(&self.path)?;
            self.issues = serde_json::from_str(&contents).unwrap_or_default();
            self.primed = true;
            self.backfill_ids()?;
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.issues)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        self.primed = true;
        Ok(())
    }

    /// Assigns ids to records from older data that predates them.
    fn backfill_ids(&mut self) -> Result<()> {
        if self.issues.iter().all(|i| !i.id.is_empty()) {
            return Ok(());
        }
        let mut next = self.max_id_number() + 1;
        for issue in &mut self.issues {
            if issue.id.is_empty() {
                issue.id = format!("{ID_PREFIX}{next}");
                next += 1;
            }
        }
        self.save()
    }

    fn next_id(&self) -> String {
        format!("{ID_PREFIX}{}", self.max_id_number() + 1)
    }

    fn max_id_number(&self) -> u64 {
        self.issues
            .iter()
            .filter_map(|i| i.id.strip_prefix(ID_PREFIX))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
    }
}

fn seed_issues() -> Vec<Issue> {
    vec![
        seed(
            "PP-1",
            "Pothole near school",
            "Large pothole causing accidents.",
            "17.3850, 78.4867",
            25,
            IssueStatus::Pending,
        ),
        seed(
            "PP-2",
            "Broken streetlight",
            "Streetlight out on Main St.",
            "17.3851, 78.4868",
            10,
            IssueStatus::InProgress,
        ),
        seed(
            "PP-3",
            "Garbage dumping area",
            "Illegal dumping near park.",
            "17.3852, 78.4869",
            5,
            IssueStatus::Pending,
        ),
    ]
}

fn seed(
    id: &str,
    title: &str,
    desc: &str,
    loc: &str,
    votes: u32,
    status: IssueStatus,
) -> Issue {
    Issue {
        id: id.into(),
        title: title.into(),
        desc: desc.into(),
        loc: loc.into(),
        votes,
        status,
        reported_at: None,
    }
}
