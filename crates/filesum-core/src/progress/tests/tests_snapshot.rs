//! Tests for progress snapshot math

#![allow(clippy::expect_used)]

use rstest::rstest;

use crate::progress::ProgressSnapshot;

#[rstest]
#[case(0, 100, 0)]
#[case(1, 100, 1)]
#[case(50, 100, 50)]
#[case(99, 100, 99)]
#[case(100, 100, 100)]
#[case(1, 3, 33)]
#[case(2, 3, 66)]
#[case(999, 1000, 99)]
fn test_percent_is_floored(#[case] processed: u64, #[case] total: u64, #[case] expected: u8) {
    assert_eq!(ProgressSnapshot::new(processed, total).percent, expected);
}

#[test]
fn test_zero_total_is_zero_percent() {
    let snapshot = ProgressSnapshot::new(0, 0);
    assert_eq!(snapshot.percent, 0);
    assert_eq!(snapshot.processed, 0);
}

#[test]
fn test_processed_is_clamped_to_total() {
    let snapshot = ProgressSnapshot::new(150, 100);
    assert_eq!(snapshot.processed, 100);
    assert_eq!(snapshot.percent, 100);
}

#[test]
fn test_very_large_file_does_not_overflow() {
    let total = u64::MAX;
    let snapshot = ProgressSnapshot::new(total / 2, total);
    assert_eq!(snapshot.percent, 49);

    let snapshot = ProgressSnapshot::new(total, total);
    assert_eq!(snapshot.percent, 100);
}

#[test]
fn test_serializes_with_wire_field_names() {
    let snapshot = ProgressSnapshot::new(512, 1024);
    let json = serde_json::to_value(snapshot).expect("serializable");
    assert_eq!(json["processed"], 512);
    assert_eq!(json["total"], 1024);
    assert_eq!(json["percent"], 50);
}
