//! Snapshot loading from JSON files, the development stand-in for the
//! data-access layer.

use mlog::model::UserId;
use mlog::report;
use mlog::snapshot::Snapshot;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_snapshot(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes()).expect("Failed to write snapshot");
    file
}

const SAMPLE: &str = r#"{
  "users": [
    {"id": 1, "name": "John Doe", "username": "jdoe", "email": "john@gmail.com"},
    {"id": 2, "name": "Jane Doe", "username": "j_doe", "email": "jane@gmail.com"}
  ],
  "messages": [
    {"id": 1, "content": "check check check", "created_at": "2023-08-07T20:24:00Z", "author": 2},
    {"id": 2, "content": "test test test", "created_at": "2023-08-07T20:25:00Z", "author": 1, "edited": true}
  ],
  "follows": [
    {"follower": 1, "following": 2}
  ]
}"#;

#[test]
fn loads_and_computes_statistics() {
    let file = write_snapshot(SAMPLE);
    let snapshot = Snapshot::load_from_file(file.path()).unwrap();

    assert_eq!(snapshot.all_users().len(), 2);
    assert_eq!(snapshot.all_messages().len(), 2);
    assert!(snapshot.all_messages()[1].edited);

    let report = report::compute_statistics(snapshot.all_users(), snapshot.all_messages()).unwrap();
    assert_eq!(report.total_messages, 2);
    assert_eq!(report.busiest_hour.count, 2);
    assert_eq!(report.busiest_hour.label(), "8 PM on 8/7/2023");
}

#[test]
fn feed_resolves_follow_edges_from_file() {
    let file = write_snapshot(SAMPLE);
    let snapshot = Snapshot::load_from_file(file.path()).unwrap();

    let feed = snapshot.feed_for(UserId(1)).unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].author, UserId(2));
}

#[test]
fn rejects_malformed_json_with_path_context() {
    let file = write_snapshot("{ not json");
    let err = Snapshot::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse JSON"));
}

#[test]
fn rejects_self_follow_at_load() {
    let json = r#"{
      "users": [{"id": 1, "name": "John Doe", "username": "jdoe", "email": "john@gmail.com"}],
      "messages": [],
      "follows": [{"follower": 1, "following": 1}]
    }"#;
    let file = write_snapshot(json);
    let err = Snapshot::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("follows itself"));
}

#[test]
fn missing_file_reports_path() {
    let err = Snapshot::load_from_file(std::path::Path::new("/no/such/snapshot.json")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read snapshot file"));
}
