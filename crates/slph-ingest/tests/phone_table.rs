use std::fs;
use std::path::PathBuf;

use slph_core::{PipelineOptions, RawPhoneEntry, normalize, process_entries};
use slph_ingest::{IngestError, IngestOptions, read_phone_table};
use tempfile::TempDir;

fn temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_mixed_text_column() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(
        &dir,
        "contacts.csv",
        "id,phone\n0,0712345678\n1,abc\n2,94712345678\n3,\n4,712345678\n",
    );

    let table = read_phone_table(&path, &IngestOptions::default()).expect("read table");

    assert_eq!(table.columns, vec!["id", "phone"]);
    assert_eq!(table.column, "phone");
    assert_eq!(table.len(), 5);
    assert_eq!(table.entries[0], RawPhoneEntry::from("0712345678"));
    assert_eq!(table.entries[1], RawPhoneEntry::from("abc"));
    assert_eq!(table.entries[2], RawPhoneEntry::from("94712345678"));
    assert_eq!(table.entries[4], RawPhoneEntry::from("712345678"));
}

#[test]
fn digit_only_column_is_read_as_text() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "numeric.csv", "id,phone\n1,0712345678\n2,\n3,94712345678\n");

    let table = read_phone_table(&path, &IngestOptions::default()).expect("read table");

    assert_eq!(
        table.entries,
        vec![
            RawPhoneEntry::from("0712345678"),
            RawPhoneEntry::Missing,
            RawPhoneEntry::from("94712345678"),
        ]
    );
}

#[test]
fn international_zero_prefix_rejected_in_digit_only_column() {
    let dir = TempDir::new().unwrap();
    let digits = temp_file(&dir, "digits.csv", "phone\n0094712345678\n0712345678\n");
    let mixed = temp_file(&dir, "mixed.csv", "phone\n0094712345678\nabc\n");

    let digits = read_phone_table(&digits, &IngestOptions::default()).expect("read digits");
    let mixed = read_phone_table(&mixed, &IngestOptions::default()).expect("read mixed");

    assert_eq!(digits.entries[0], RawPhoneEntry::from("0094712345678"));
    assert_eq!(digits.entries[0], mixed.entries[0]);
    let outcome = process_entries(&digits.entries, &PipelineOptions::default());
    let rows: Vec<usize> = outcome.accepted.iter().map(|row| row.row).collect();
    assert_eq!(rows, vec![1]);
}

#[test]
fn oversized_digit_cell_is_a_row_rejection() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(
        &dir,
        "long.csv",
        "phone\n0712345678\n123456789012345678901234\n0771234567\n",
    );

    let table = read_phone_table(&path, &IngestOptions::default()).expect("read table");
    let outcome = process_entries(&table.entries, &PipelineOptions::default());

    assert_eq!(table.len(), 3);
    assert_eq!(outcome.accepted_count(), 2);
    let rows: Vec<usize> = outcome.accepted.iter().map(|row| row.row).collect();
    assert_eq!(rows, vec![0, 2]);
}

#[test]
fn trunk_zero_kept_for_quoted_and_bare_cells() {
    let dir = TempDir::new().unwrap();
    let bare = temp_file(&dir, "bare.csv", "phone\n0112345678\n0712345678\n");
    let quoted = temp_file(&dir, "quoted.csv", "phone\n\"0112345678\"\n\"0712345678\"\n");
    let mixed = temp_file(&dir, "mixed.csv", "phone\n0112345678\nabc\n");

    for path in [bare, quoted, mixed] {
        let table = read_phone_table(&path, &IngestOptions::default()).expect("read table");
        assert_eq!(table.entries[0], RawPhoneEntry::from("0112345678"));
        let phone = normalize(&table.entries[0]).into_canonical().expect("accepted");
        assert_eq!(phone.as_str(), "94112345678");
    }
}

#[test]
fn missing_phone_column_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "wrong.csv", "name,Phone\nA,0712345678\n");

    let err = read_phone_table(&path, &IngestOptions::default()).unwrap_err();

    assert_eq!(err.to_string(), "CSV must contain a column named 'phone'.");
    match err {
        IngestError::MissingPhoneColumn { available, .. } => {
            assert_eq!(available, vec!["name", "Phone"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn custom_column_name() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "mobile.csv", "mobile\n+94 71 234 5678\n");
    let options = IngestOptions::default().with_column("mobile");

    let table = read_phone_table(&path, &options).expect("read table");

    assert_eq!(table.entries, vec![RawPhoneEntry::from("+94 71 234 5678")]);
}

#[test]
fn byte_order_mark_on_phone_header() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "bom.csv", "\u{feff}phone,name\n+94712345678,A\n");

    let table = read_phone_table(&path, &IngestOptions::default()).expect("read table");

    assert_eq!(table.entries, vec![RawPhoneEntry::from("+94712345678")]);
}

#[test]
fn header_only_file_has_no_rows() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "empty.csv", "phone\n");

    let table = read_phone_table(&path, &IngestOptions::default()).expect("read table");

    assert!(table.is_empty());
}

#[test]
fn empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "blank.csv", "");

    let result = read_phone_table(&path, &IngestOptions::default());

    assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
}
