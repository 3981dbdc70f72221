use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::config;
use crate::model::issue::{IssueDraft, IssueStatus};
use crate::store::activity::{append_event, new_event};
use crate::store::contacts::read_contacts;
use crate::store::issues::IssueStore;

/// Dispatch for everything that isn't the TUI.
pub fn run(args: &[String]) -> Result<()> {
    match args[0].as_str() {
        "report" => handle_report(&args[1..]),
        "vote" => handle_vote(&args[1..]),
        "status" => handle_status(&args[1..]),
        "issues" => handle_issues(),
        "contacts" => handle_contacts(),
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        other => {
            print_help();
            bail!("Unknown command: {other}")
        }
    }
}

fn open_store() -> Result<(IssueStore, PathBuf)> {
    let config = config::load_config()?;
    let data_dir = config::data_dir(&config);
    let mut store = IssueStore::open(&data_dir)?;
    store.ensure_seeded()?;
    Ok((store, data_dir))
}

fn handle_report(args: &[String]) -> Result<()> {
    let (title, desc, loc) = parse_report_args(args)?;
    if let Err(e) = crate::validate::report(&title, &desc, &loc) {
        bail!("{e}");
    }

    let (mut store, data_dir) = open_store()?;
    let issue = store.append(IssueDraft { title, desc, loc })?;
    let _ = append_event(
        &data_dir,
        &new_event("reported", Some(&issue.id), Some(&issue.title), None),
    );
    println!("Reported {}: {}", issue.id, issue.title);
    Ok(())
}

fn handle_vote(args: &[String]) -> Result<()> {
    let title = args.join(" ");
    if title.is_empty() {
        bail!("Usage: pulse vote <title>");
    }

    let (mut store, data_dir) = open_store()?;
    if !store.vote(&title)? {
        bail!("No issue titled \"{title}\"");
    }
    let issue = store.find_by_title(&title).map(|i| (i.id.clone(), i.votes));
    if let Some((id, votes)) = issue {
        let _ = append_event(&data_dir, &new_event("voted", Some(&id), Some(&title), None));
        println!("Voted for \"{title}\" ({votes} votes)");
    }
    Ok(())
}

fn handle_status(args: &[String]) -> Result<()> {
    let (title, status) = parse_status_args(args)?;

    let (mut store, data_dir) = open_store()?;
    if !store.update_status(&title, status)? {
        bail!("No issue titled \"{title}\"");
    }
    let id = store.find_by_title(&title).map(|i| i.id.clone());
    let _ = append_event(
        &data_dir,
        &new_event("status", id.as_deref(), Some(&title), Some(status.as_str())),
    );
    println!("\"{title}\" is now {status}");
    Ok(())
}

fn handle_issues() -> Result<()> {
    let (store, _) = open_store()?;
    for issue in store.sorted_by_votes() {
        println!(
            "{:>5}  {:<12} {}  ({})",
            issue.votes,
            issue.status.to_string(),
            issue.title,
            issue.loc
        );
    }
    Ok(())
}

fn handle_contacts() -> Result<()> {
    let config = config::load_config()?;
    let data_dir = config::data_dir(&config);
    let contacts = read_contacts(&data_dir);
    if contacts.is_empty() {
        println!("No feedback received yet.");
        return Ok(());
    }
    for contact in contacts {
        println!("{}  {} <{}>", contact.sent_at, contact.name, contact.email);
        println!("  {}", contact.message);
    }
    Ok(())
}

/// Parse `pulse report` arguments into (title, description, location).
///
/// Supported forms:
///   pulse report "Leak on 5th Ave" -d "Water leak" -l "17.1, 78.1"
///   pulse report Leak on 5th Ave --desc "Water leak" --loc "17.1, 78.1"
pub fn parse_report_args(args: &[String]) -> Result<(String, String, String)> {
    if args.is_empty() {
        bail!("Usage: pulse report <title> -d <description> -l <location>\n\nExample:\n  pulse report \"Leak on 5th Ave\" -d \"Water leak\" -l \"17.1, 78.1\"");
    }

    let mut title_parts: Vec<String> = Vec::new();
    let mut desc: Option<String> = None;
    let mut loc: Option<String> = None;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-d" | "--desc" | "--description" => {
                i += 1;
                if i < args.len() {
                    desc = Some(args[i].clone());
                } else {
                    bail!("Missing value for -d/--desc flag");
                }
            }
            "-l" | "--loc" | "--location" => {
                i += 1;
                if i < args.len() {
                    loc = Some(args[i].clone());
                } else {
                    bail!("Missing value for -l/--loc flag");
                }
            }
            _ => {
                title_parts.push(args[i].clone());
            }
        }
        i += 1;
    }

    let title = title_parts.join(" ");
    if title.is_empty() {
        bail!("Report title cannot be empty");
    }

    Ok((title, desc.unwrap_or_default(), loc.unwrap_or_default()))
}

/// Parse `pulse status` arguments: the last word is the new status, the
/// rest is the title.
pub fn parse_status_args(args: &[String]) -> Result<(String, IssueStatus)> {
    if args.len() < 2 {
        bail!("Usage: pulse status <title> <pending|in-progress|resolved>");
    }
    let (title_parts, status_word) = args.split_at(args.len() - 1);
    let status: IssueStatus = match status_word[0].parse() {
        Ok(s) => s,
        Err(e) => bail!("{e}"),
    };
    Ok((title_parts.join(" "), status))
}

pub fn print_help() {
    println!("pulse — civic issue reporting and tracking\n");
    println!("USAGE:");
    println!("  pulse                          Launch the dashboard");
    println!("  pulse report <title> -d <description> -l <location>");
    println!("  pulse vote <title>             Vote for an issue");
    println!("  pulse status <title> <status>  Set pending, in-progress, or resolved");
    println!("  pulse issues                   List issues by votes");
    println!("  pulse contacts                 Show received feedback");
    println!();
    println!("EXAMPLES:");
    println!("  pulse report \"Leak on 5th Ave\" -d \"Water leak\" -l \"17.1, 78.1\"");
    println!("  pulse vote \"Leak on 5th Ave\"");
    println!("  pulse status \"Leak on 5th Ave\" in-progress");
}
