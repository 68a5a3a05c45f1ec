//! Store and session integration tests
//!
//! A form session saving through the JSON file store, reopened the way a
//! new application session would.

use std::fs;

use agent_map_core::export::{ExportFormat, write_export};
use agent_map_core::{
    AssociateRecord, FormSession, JsonFileStore, Level, ProfileUpdate, Rank, RecordStore, Segment,
};
use tempfile::TempDir;

#[test]
fn test_session_saves_to_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data_store.json");

    let mut session = FormSession::new(JsonFileStore::open(&path));
    session.open("Alex Tan").unwrap();
    session
        .update_profile(&ProfileUpdate {
            email: Some("alex@example.com".to_string()),
            ..Default::default()
        })
        .unwrap();
    session.set_row(Level::Interest, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    session.save().unwrap();

    let store = JsonFileStore::open(&path);
    let record = store.get("Alex Tan").unwrap().unwrap();
    assert_eq!(record.profile.email, "alex@example.com");
    assert!(record.scores.is_row_complete(Level::Interest));
    assert_eq!(record.totals.get(Segment::SocialMedia), 8);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["Alex Tan"]["scores"]["Interest"]["HDB"], 1);
    assert_eq!(raw["Alex Tan"]["scores"]["Knowledge"]["HDB"], "");
    assert_eq!(raw["Alex Tan"]["totals"]["Landed"], 3);
}

#[test]
fn test_first_open_persists_empty_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data_store.json");

    let mut session = FormSession::new(JsonFileStore::open(&path));
    session.open("Sam").unwrap();
    drop(session);

    assert!(JsonFileStore::open(&path).contains("Sam").unwrap());
}

#[test]
fn test_last_write_wins_between_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data_store.json");

    let mut first = FormSession::new(JsonFileStore::open(&path));
    let mut second = FormSession::new(JsonFileStore::open(&path));
    first.open("Alex").unwrap();
    second.open("Alex").unwrap();

    first.set_cell(Level::Income, Segment::Hdb, 2).unwrap();
    first.save().unwrap();
    second.set_cell(Level::Income, Segment::Hdb, 7).unwrap();
    second.save().unwrap();

    let record = JsonFileStore::open(&path).get("Alex").unwrap().unwrap();
    assert_eq!(record.scores.compute_totals().get(Segment::Hdb), 7);
}

#[test]
fn test_corrupt_store_starts_empty_and_recovers_on_save() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data_store.json");
    fs::write(&path, "\u{0}garbage").unwrap();

    let mut session = FormSession::new(JsonFileStore::open(&path));
    assert!(session.associates().unwrap().is_empty());
    session.open("Alex").unwrap();
    session.save().unwrap();

    assert_eq!(JsonFileStore::open(&path).names().unwrap(), vec!["Alex"]);
    let backup = fs::read_to_string(temp_dir.path().join("data_store.json.bak")).unwrap();
    assert_eq!(backup, "\u{0}garbage");
}

#[test]
fn test_one_bad_record_does_not_cost_the_others() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data_store.json");
    fs::write(
        &path,
        r#"{
  "Alex": {"profile": {"name": "Alex"}, "scores": {"Interest": {"HDB": "4"}}},
  "Sam": {"profile": {"name": "Sam"}, "scores": {"Interest": {"HDB": true, "Landed": 2}}},
  "Kim": {"profile": {"name": "Kim"}, "totals": {"HDB": -3}}
}"#,
    )
    .unwrap();

    let mut session = FormSession::new(JsonFileStore::open(&path));
    assert_eq!(session.store().names().unwrap(), vec!["Alex", "Sam"]);
    session.open("Zoe").unwrap();
    session.save().unwrap();

    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.names().unwrap(), vec!["Alex", "Sam", "Zoe"]);
    let alex = reopened.get("Alex").unwrap().unwrap();
    assert_eq!(alex.scores.get(Level::Interest, Segment::Hdb), Rank::new(4));
    let sam = reopened.get("Sam").unwrap().unwrap();
    assert_eq!(sam.scores.filled_count(), 1);

    // Kim is still in the file exactly as written, and in the backup
    assert_eq!(reopened.unreadable_names().collect::<Vec<_>>(), vec!["Kim"]);
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["Kim"]["totals"]["HDB"], -3);
    assert!(fs::read_to_string(temp_dir.path().join("data_store.json.bak")).unwrap().contains("\"Kim\""));
}

#[test]
fn test_exports_for_saved_record() {
    let temp_dir = TempDir::new().unwrap();
    let mut record = AssociateRecord::new("Alex Tan");
    record.scores.set_row(Level::Knowledge, &[8, 7, 6, 5, 4, 3, 2, 1]).unwrap();

    for format in [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Svg, ExportFormat::Report] {
        let path = temp_dir.path().join(format.file_name("Alex Tan"));
        write_export(&record, format, &path, (480, 480)).unwrap();
        assert!(!fs::read_to_string(&path).unwrap().is_empty());
    }

    let csv = fs::read_to_string(temp_dir.path().join("Alex_Tan_totals.csv")).unwrap();
    assert!(csv.contains("HDB,8\n"));
}
