use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::contact::Contact;

fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("contacts.jsonl")
}

pub fn append_contact(data_dir: &Path, contact: &Contact) -> Result<()> {
    let path = log_path(data_dir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    let line = serde_json::to_string(contact)?;
    writeln!(file, "{line}")?;
    Ok(())
}

pub fn read_contacts(data_dir: &Path) -> Vec<Contact> {
    let path = log_path(data_dir);
    if !path.exists() {
        return Vec::new();
    }
    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn append_then_read_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        append_contact(dir.path(), &Contact::new("Asha", "asha@example.com", "First")).unwrap();
        append_contact(dir.path(), &Contact::new("Ravi", "ravi@example.com", "Second")).unwrap();

        let contacts = read_contacts(dir.path());
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "Asha");
        assert_eq!(contacts[1].message, "Second");
    }

    #[test]
    fn read_skips_unparseable_lines() {
        let dir = tempfile::tempdir().unwrap();
        append_contact(dir.path(), &Contact::new("Asha", "asha@example.com", "Hi")).unwrap();
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(log_path(dir.path()))
            .unwrap();
        writeln!(file, "not json").unwrap();

        let contacts = read_contacts(dir.path());
        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn missing_log_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_contacts(dir.path()).is_empty());
    }
}
