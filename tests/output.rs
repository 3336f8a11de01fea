use legroster::output::write_records;
use legroster::types::Legislator;

fn record(name: &str) -> Legislator {
    Legislator {
        name: name.to_string(),
        title: Some("Senator".to_string()),
        position: Some("District A".to_string()),
        party: Some("Republican".to_string()),
        address: Some("Juneau".to_string()),
        phone: Some("907-555-1212".to_string()),
        email: Some("x@y.com".to_string()),
        url: Some("https://akleg.gov/legislator.php?id=x".to_string()),
    }
}

#[test]
fn round_trips_through_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster.json");

    let records = vec![
        record("Jane Doe"),
        Legislator {
            party: None,
            address: None,
            ..record("John Roe")
        },
        record("Ann Other"),
    ];

    write_records(&records, &path).expect("write succeeds");

    let json = std::fs::read_to_string(&path).expect("file readable");
    let reparsed: Vec<Legislator> = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(reparsed, records);
}

#[test]
fn output_is_a_pretty_printed_array_with_stable_key_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster.json");

    write_records(&[record("Jane Doe")], &path).expect("write succeeds");
    let json = std::fs::read_to_string(&path).expect("file readable");

    assert!(json.starts_with('['));
    assert!(json.contains('\n'));
    let name_pos = json.find("\"name\"").expect("name key present");
    let title_pos = json.find("\"title\"").expect("title key present");
    let url_pos = json.find("\"url\"").expect("url key present");
    assert!(name_pos < title_pos && title_pos < url_pos);
}

#[test]
fn overwrites_an_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster.json");

    write_records(&[record("Jane Doe"), record("John Roe")], &path).expect("first write");
    write_records(&[record("Only One")], &path).expect("second write");

    let json = std::fs::read_to_string(&path).expect("file readable");
    let reparsed: Vec<Legislator> = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(reparsed.len(), 1);
    assert_eq!(reparsed[0].name, "Only One");
}

#[test]
fn write_failure_is_reported_not_panicked() {
    let err = write_records(&[record("Jane Doe")], "/nonexistent-dir/roster.json".as_ref())
        .expect_err("write should fail");
    assert!(err.contains("/nonexistent-dir/roster.json"));
}
