use tempfile::TempDir;

use crate::model::issue::{IssueDraft, IssueStatus};
use crate::store::issues::IssueStore;

fn draft(title: &str, desc: &str, loc: &str) -> IssueDraft {
    IssueDraft {
        title: title.to_string(),
        desc: desc.to_string(),
        loc: loc.to_string(),
    }
}

fn seeded_store(dir: &TempDir) -> IssueStore {
    let mut store = IssueStore::open(dir.path()).unwrap();
    store.ensure_seeded().unwrap();
    store
}

fn raw_file(dir: &TempDir) -> String {
    std::fs::read_to_string(dir.path().join("issues.json")).unwrap()
}

#[test]
fn seed_writes_the_three_examples() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir);

    let issues = store.issues();
    assert_eq!(issues.len(), 3);
    assert_eq!(issues[0].title, "Pothole near school");
    assert_eq!(issues[0].votes, 25);
    assert_eq!(issues[0].status, IssueStatus::Pending);
    assert_eq!(issues[1].title, "Broken streetlight");
    assert_eq!(issues[1].votes, 10);
    assert_eq!(issues[1].status, IssueStatus::InProgress);
    assert_eq!(issues[2].title, "Garbage dumping area");
    assert_eq!(issues[2].votes, 5);
    assert_eq!(issues[2].status, IssueStatus::Pending);
}

#[test]
fn seed_is_idempotent_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir);
    store.vote("Broken streetlight").unwrap();

    let mut reopened = IssueStore::open(dir.path()).unwrap();
    reopened.ensure_seeded().unwrap();
    assert_eq!(reopened.len(), 3);
    assert_eq!(
        reopened.find_by_title("Broken streetlight").unwrap().votes,
        11
    );
}

#[test]
fn seed_never_overwrites_a_present_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("issues.json"), "[]").unwrap();

    let mut store = IssueStore::open(dir.path()).unwrap();
    store.ensure_seeded().unwrap();
    assert!(store.is_empty());
}

#[test]
fn append_grows_list_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir);

    store
        .append(draft("Leak on 5th Ave", "Water leak", "17.1, 78.1"))
        .unwrap();
    store
        .append(draft("Fallen tree", "Blocking the lane", "17.2, 78.2"))
        .unwrap();

    assert_eq!(store.len(), 5);
    let issues = store.issues();
    assert_eq!(issues[3].title, "Leak on 5th Ave");
    assert_eq!(issues[3].votes, 0);
    assert_eq!(issues[3].status, IssueStatus::Pending);
    assert_eq!(issues[4].title, "Fallen tree");
}

#[test]
fn append_assigns_sequential_ids() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir);

    let first = store.append(draft("Leak on 5th Ave", "Water leak", "17.1, 78.1")).unwrap();
    let second = store.append(draft("Fallen tree", "Blocking", "17.2, 78.2")).unwrap();
    assert_eq!(first.id, "PP-4");
    assert_eq!(second.id, "PP-5");
}

#[test]
fn vote_increments_only_the_match() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir);

    let found = store.vote("Broken streetlight").unwrap();
    assert!(found);
    assert_eq!(store.find_by_title("Broken streetlight").unwrap().votes, 11);
    assert_eq!(store.find_by_title("Pothole near school").unwrap().votes, 25);
    assert_eq!(store.find_by_title("Garbage dumping area").unwrap().votes, 5);
}

#[test]
fn vote_for_absent_title_leaves_list_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir);
    let before = raw_file(&dir);

    let found = store.vote("No such issue").unwrap();
    assert!(!found);
    assert_eq!(raw_file(&dir), before);
}

#[test]
fn vote_with_duplicate_titles_hits_first_match() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = IssueStore::open(dir.path()).unwrap();
    store.append(draft("Pothole", "On 1st St", "17.1, 78.1")).unwrap();
    store.append(draft("Pothole", "On 2nd St", "17.2, 78.2")).unwrap();

    store.vote("Pothole").unwrap();
    let issues = store.issues();
    assert_eq!(issues[0].votes, 1);
    assert_eq!(issues[1].votes, 0);
}

#[test]
fn set_status_toggles_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir);

    assert!(store.set_status("Pothole near school", true).unwrap());
    assert_eq!(
        store.find_by_title("Pothole near school").unwrap().status,
        IssueStatus::Resolved
    );

    // Applying the same call twice yields the same state as once.
    store.set_status("Pothole near school", true).unwrap();
    assert_eq!(
        store.find_by_title("Pothole near school").unwrap().status,
        IssueStatus::Resolved
    );

    store.set_status("Pothole near school", false).unwrap();
    assert_eq!(
        store.find_by_title("Pothole near school").unwrap().status,
        IssueStatus::Pending
    );
}

#[test]
fn set_status_for_absent_title_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir);
    let before = raw_file(&dir);

    assert!(!store.set_status("No such issue", true).unwrap());
    assert_eq!(raw_file(&dir), before);
}

#[test]
fn set_status_by_id_disambiguates_duplicate_titles() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = IssueStore::open(dir.path()).unwrap();
    let first = store.append(draft("Pothole", "On 1st St", "17.1, 78.1")).unwrap();
    let second = store.append(draft("Pothole", "On 2nd St", "17.2, 78.2")).unwrap();

    assert!(store
        .set_status_by_id(&second.id, IssueStatus::Resolved)
        .unwrap());
    let issues = store.issues();
    assert_eq!(issues[0].id, first.id);
    assert_eq!(issues[0].status, IssueStatus::Pending);
    assert_eq!(issues[1].status, IssueStatus::Resolved);
}

#[test]
fn update_status_sets_in_progress() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir);

    assert!(store
        .update_status("Garbage dumping area", IssueStatus::InProgress)
        .unwrap());
    assert_eq!(
        store.find_by_title("Garbage dumping area").unwrap().status,
        IssueStatus::InProgress
    );
}

#[test]
fn sorted_by_votes_is_descending_with_stable_ties() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = IssueStore::open(dir.path()).unwrap();
    store.append(draft("Alpha", "a", "1, 1")).unwrap();
    store.append(draft("Beta", "b", "2, 2")).unwrap();
    store.append(draft("Gamma", "c", "3, 3")).unwrap();

    store.vote("Beta").unwrap();
    store.vote("Beta").unwrap();
    store.vote("Gamma").unwrap();
    store.vote("Gamma").unwrap();

    // Beta and Gamma tie at 2; Beta was inserted first and must stay first.
    let sorted = store.sorted_by_votes();
    let titles: Vec<&str> = sorted.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Beta", "Gamma", "Alpha"]);
}

#[test]
fn sort_does_not_disturb_stored_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir);
    store.append(draft("Leak on 5th Ave", "Water leak", "17.1, 78.1")).unwrap();

    let _ = store.sorted_by_votes();
    assert_eq!(store.issues()[3].title, "Leak on 5th Ave");
    assert_eq!(store.issues()[0].title, "Pothole near school");
}

#[test]
fn appended_issue_tops_the_board_once_voted_past_the_field() {
    // Cleared store so the seed's 25-vote pothole can't shadow the result.
    let dir = tempfile::tempdir().unwrap();
    let mut store = IssueStore::open(dir.path()).unwrap();

    store
        .append(draft("Leak on 5th Ave", "Water leak", "17.1,78.1"))
        .unwrap();
    for _ in 0..3 {
        store.vote("Leak on 5th Ave").unwrap();
    }

    let sorted = store.sorted_by_votes();
    assert_eq!(sorted[0].title, "Leak on 5th Ave");
    assert_eq!(sorted[0].votes, 3);
}

#[test]
fn legacy_blob_without_ids_loads_and_keeps_field_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("issues.json"),
        r#"[
            {"title":"Pothole near school","desc":"Large pothole causing accidents.","loc":"17.3850, 78.4867","votes":25,"status":"Pending"},
            {"title":"Broken streetlight","desc":"Streetlight out on Main St.","loc":"17.3851, 78.4868","votes":10,"status":"In Progress"}
        ]"#,
    )
    .unwrap();

    let mut store = IssueStore::open(dir.path()).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.issues().iter().all(|i| !i.id.is_empty()));
    assert_eq!(
        store.find_by_title("Broken streetlight").unwrap().status,
        IssueStatus::InProgress
    );

    store.vote("Broken streetlight").unwrap();
    let rewritten = raw_file(&dir);
    assert!(rewritten.contains("\"desc\""));
    assert!(rewritten.contains("\"loc\""));
    assert!(rewritten.contains("\"In Progress\""));
    assert!(rewritten.contains("\"votes\": 11"));
}

#[test]
fn corrupt_blob_reads_as_empty_and_is_not_reseeded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("issues.json"), "{ this is not json").unwrap();

    let mut store = IssueStore::open(dir.path()).unwrap();
    assert!(store.is_empty());

    // The slot was present, so seeding must not fire.
    store.ensure_seeded().unwrap();
    assert!(store.is_empty());
}

#[test]
fn reload_picks_up_an_external_write() {
    let dir = tempfile::tempdir().unwrap();
    let mut dashboard = seeded_store(&dir);

    let mut cli = IssueStore::open(dir.path()).unwrap();
    cli.append(draft("Leak on 5th Ave", "Water leak", "17.1, 78.1")).unwrap();

    assert_eq!(dashboard.len(), 3);
    dashboard.reload().unwrap();
    assert_eq!(dashboard.len(), 4);
}

#[test]
fn mutations_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = seeded_store(&dir);
        store.append(draft("Leak on 5th Ave", "Water leak", "17.1, 78.1")).unwrap();
        store.vote("Leak on 5th Ave").unwrap();
        store.set_status("Broken streetlight", true).unwrap();
    }

    let store = IssueStore::open(dir.path()).unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(store.find_by_title("Leak on 5th Ave").unwrap().votes, 1);
    assert_eq!(
        store.find_by_title("Broken streetlight").unwrap().status,
        IssueStatus::Resolved
    );
}
