//! Tests for loading record files
//!
//! These tests verify:
//! - Save/load round trips
//! - Format errors leave the store untouched
//! - Partial loads keep the blocks read so far
//! - Duplicate roll numbers collapse to the sentinel
//! - Loads append after existing records

use std::fs;
use std::path::PathBuf;

use rollcall::store::RecordStore;
use rollcall::{RecordError, Student};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_file(temp: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn rolls(store: &RecordStore) -> Vec<i32> {
    store.records().iter().map(|s| s.roll_number).collect()
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_round_trip_into_empty_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("class.txt");

    let mut original = RecordStore::new();
    original.add(10, "Grace Hopper", 88.5).unwrap();
    original.add(3, "", 0.0).unwrap();
    original.add(7, "Alan  Turing", 49.75).unwrap();
    original.add(-1, "Unassigned", 100.0).unwrap();
    original.save(&path).unwrap();

    let mut loaded = RecordStore::new();
    let report = loaded.load(&path).unwrap();

    assert_eq!(report.added, 4);
    assert_eq!(report.expected, 4);
    assert!(report.is_complete());
    assert!(report.reassigned.is_empty());
    assert_eq!(loaded.records(), original.records());
}

#[test]
fn test_round_trip_keeps_fine_grained_marks() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fine.txt");

    let mut original = RecordStore::new();
    original.add(1, "Small step", 1.0000001).unwrap();
    original.add(2, "Fraction", 0.1234567).unwrap();
    original.add(3, "Negative", -0.000_123_45).unwrap();
    original.save(&path).unwrap();

    let mut loaded = RecordStore::new();
    loaded.load(&path).unwrap();

    let marks: Vec<f32> = loaded.records().iter().map(|s| s.marks).collect();
    assert_eq!(marks, vec![1.0000001, 0.1234567, -0.000_123_45]);
    assert_eq!(loaded.records(), original.records());
}

#[test]
fn test_load_accepts_fixed_point_marks() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "fixed.txt", "1\nAda\n1\n72.500000\n");

    let mut store = RecordStore::new();
    store.load(&path).unwrap();

    assert_eq!(store.records()[0].marks, 72.5);
}

#[test]
fn test_round_trip_keeps_repeated_sentinels() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "s.txt", "3\nA\n-1\n1\nB\n-1\n2\nC\n5\n3\n");

    let mut store = RecordStore::new();
    store.load(&path).unwrap();
    assert_eq!(rolls(&store), vec![-1, -1, 5]);

    let copy = temp.path().join("copy.txt");
    store.save(&copy).unwrap();

    let mut again = RecordStore::new();
    let report = again.load(&copy).unwrap();
    assert!(report.reassigned.is_empty());
    assert_eq!(again.records(), store.records());
}

// =============================================================================
// Count Line Tests
// =============================================================================

#[test]
fn test_garbage_count_is_format_error() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "bad.txt", "abc\nAda\n1\n90\n");

    let mut store = RecordStore::new();
    store.add(1, "Existing", 50.0).unwrap();
    let before = store.records().to_vec();
    let capacity = store.capacity();

    let result = store.load(&path);

    assert!(matches!(result, Err(RecordError::Format(_))));
    assert_eq!(store.records(), &before[..]);
    assert_eq!(store.capacity(), capacity);
}

#[test]
fn test_negative_count_is_format_error() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "neg.txt", "-4\n");

    let result = RecordStore::new().load(&path);
    assert!(matches!(result, Err(RecordError::Format(_))));
}

#[test]
fn test_empty_file_is_format_error() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "empty.txt", "");

    let result = RecordStore::new().load(&path);
    assert!(matches!(result, Err(RecordError::Format(_))));
}

#[test]
fn test_zero_count_loads_nothing() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "zero.txt", "0\n");

    let mut store = RecordStore::new();
    let report = store.load(&path).unwrap();

    assert_eq!(report.added, 0);
    assert_eq!(report.expected, 0);
    assert!(store.is_empty());
    assert_eq!(store.capacity(), 0);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let result = RecordStore::new().load(&temp.path().join("absent.txt"));
    assert!(matches!(result, Err(RecordError::Io(_))));
}

// =============================================================================
// Partial Load Tests
// =============================================================================

#[test]
fn test_truncated_file_keeps_complete_blocks() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        &temp,
        "short.txt",
        "5\nA\n1\n10\nB\n2\n20\nC\n3\n30\n",
    );

    let mut store = RecordStore::new();
    let report = store.load(&path).unwrap();

    assert_eq!(report.added, 3);
    assert_eq!(report.expected, 5);
    assert!(!report.is_complete());
    assert_eq!(rolls(&store), vec![1, 2, 3]);
}

#[test]
fn test_block_cut_mid_way_is_dropped() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "cut.txt", "2\nA\n1\n10\nB\n2\n");

    let mut store = RecordStore::new();
    let report = store.load(&path).unwrap();

    assert_eq!(report.added, 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_bad_roll_stops_load() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "roll.txt", "3\nA\n1\n10\nB\ntwo\n20\nC\n3\n30\n");

    let mut store = RecordStore::new();
    let report = store.load(&path).unwrap();

    assert_eq!(report.added, 1);
    assert_eq!(report.expected, 3);
    assert_eq!(rolls(&store), vec![1]);
}

#[test]
fn test_bad_marks_stops_load() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "marks.txt", "2\nA\n1\nten\nB\n2\n20\n");

    let mut store = RecordStore::new();
    let report = store.load(&path).unwrap();

    assert_eq!(report.added, 0);
    assert!(store.is_empty());
}

#[test]
fn test_extra_blocks_beyond_count_are_ignored() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "extra.txt", "1\nA\n1\n10\nB\n2\n20\n");

    let mut store = RecordStore::new();
    let report = store.load(&path).unwrap();

    assert_eq!(report.added, 1);
    assert_eq!(rolls(&store), vec![1]);
}

// =============================================================================
// Duplicate Handling Tests
// =============================================================================

#[test]
fn test_duplicate_of_existing_record_becomes_sentinel() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "dup.txt", "2\nNew\n1\n70\nOther\n2\n80\n");

    let mut store = RecordStore::new();
    store.add(1, "Old", 60.0).unwrap();
    let report = store.load(&path).unwrap();

    assert_eq!(report.added, 2);
    assert_eq!(report.reassigned, vec![1]);
    assert_eq!(rolls(&store), vec![1, -1, 2]);
    assert_eq!(store.records()[1], Student::new(-1, "New", 70.0).unwrap());
}

#[test]
fn test_colliding_block_with_bad_marks_is_not_reported() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "dupbad.txt", "2\nNew\n1\nlots\nOther\n2\n80\n");

    let mut store = RecordStore::new();
    store.add(1, "Old", 60.0).unwrap();
    let report = store.load(&path).unwrap();

    assert_eq!(report.added, 0);
    assert!(report.reassigned.is_empty());
    assert_eq!(rolls(&store), vec![1]);
}

#[test]
fn test_duplicate_within_same_file_becomes_sentinel() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "dup.txt", "3\nA\n4\n10\nB\n4\n20\nC\n4\n30\n");

    let mut store = RecordStore::new();
    let report = store.load(&path).unwrap();

    assert_eq!(report.added, 3);
    assert_eq!(report.reassigned, vec![4, 4]);
    assert_eq!(rolls(&store), vec![4, -1, -1]);
}

#[test]
fn test_sentinel_in_file_is_not_reported() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "s.txt", "1\nA\n-1\n10\n");

    let mut store = RecordStore::new();
    store.add(-1, "Existing", 1.0).unwrap();
    let report = store.load(&path).unwrap();

    assert!(report.reassigned.is_empty());
    assert_eq!(rolls(&store), vec![-1, -1]);
}

// =============================================================================
// Append Semantics Tests
// =============================================================================

#[test]
fn test_load_appends_after_existing_records() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "more.txt", "2\nC\n30\n3\nD\n40\n4\n");

    let mut store = RecordStore::new();
    store.add(10, "A", 1.0).unwrap();
    store.add(20, "B", 2.0).unwrap();
    store.load(&path).unwrap();

    assert_eq!(rolls(&store), vec![10, 20, 30, 40]);
}

#[test]
fn test_load_reserves_declared_room() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "big.txt", "15\nA\n1\n10\n");

    let mut store = RecordStore::new();
    store.add(100, "X", 1.0).unwrap();
    store.load(&path).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.capacity(), 16);
}

#[test]
fn test_load_accepts_windows_line_endings() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "crlf.txt", "1\r\nAda Lovelace\r\n36\r\n99.500000\r\n");

    let mut store = RecordStore::new();
    store.load(&path).unwrap();

    assert_eq!(store.records()[0], Student::new(36, "Ada Lovelace", 99.5).unwrap());
}
