use mediacast::http::range::{resolve, ByteRange, RangeError, DEFAULT_RANGE};

const LEN: u64 = 1000;

#[test]
fn default_range_covers_whole_file() {
    let r = resolve(DEFAULT_RANGE, LEN).unwrap();
    assert_eq!(r, ByteRange { start: 0, end: LEN - 1 });
    assert_eq!(r.content_length(), LEN);
    assert_eq!(r.content_range(LEN), "bytes 0-999/1000");
}

#[test]
fn open_ended_range_runs_to_last_byte() {
    let r = resolve("bytes=50-", LEN).unwrap();
    assert_eq!(r, ByteRange { start: 50, end: 999 });
}

#[test]
fn explicit_range_is_inclusive() {
    let r = resolve("bytes=0-99", LEN).unwrap();
    assert_eq!(r.content_length(), 100);
}

#[test]
fn suffix_range_starts_n_bytes_before_last() {
    let r = resolve("bytes=-100", LEN).unwrap();
    assert_eq!(r, ByteRange { start: LEN - 101, end: LEN - 1 });
    assert_eq!(r.content_length(), 101);
    assert_eq!(r.content_range(LEN), "bytes 899-999/1000");
}

#[test]
fn suffix_longer_than_file_selects_whole_file() {
    let r = resolve("bytes=-5000", LEN).unwrap();
    assert_eq!(r, ByteRange { start: 0, end: 999 });
}

#[test]
fn zero_suffix_selects_last_byte() {
    let r = resolve("bytes=-0", LEN).unwrap();
    assert_eq!(r, ByteRange { start: 999, end: 999 });
}

#[test]
fn suffix_on_single_byte_file() {
    let r = resolve("bytes=-10", 1).unwrap();
    assert_eq!(r, ByteRange { start: 0, end: 0 });
}

#[test]
fn end_past_file_is_clamped() {
    let r = resolve("bytes=900-5000", LEN).unwrap();
    assert_eq!(r, ByteRange { start: 900, end: 999 });
}

#[test]
fn start_after_end_is_unsatisfiable() {
    assert_eq!(
        resolve("bytes=10-5", LEN),
        Err(RangeError::Unsatisfiable { start: 10, file_len: LEN })
    );
}

#[test]
fn start_past_file_is_unsatisfiable() {
    assert!(matches!(
        resolve("bytes=1000-", LEN),
        Err(RangeError::Unsatisfiable { start: 1000, .. })
    ));
}

#[test]
fn any_range_on_empty_file_is_unsatisfiable() {
    assert!(matches!(
        resolve(DEFAULT_RANGE, 0),
        Err(RangeError::Unsatisfiable { .. })
    ));
}

#[test]
fn multi_range_uses_first_range_only() {
    let r = resolve("bytes=0-9, 20-29", LEN).unwrap();
    assert_eq!(r, ByteRange { start: 0, end: 9 });
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let r = resolve("  bytes=10-19 ", LEN).unwrap();
    assert_eq!(r, ByteRange { start: 10, end: 19 });
}

#[test]
fn other_units_are_rejected() {
    assert_eq!(resolve("items=0-5", LEN), Err(RangeError::Unit));
}

#[test]
fn non_numeric_bounds_are_malformed() {
    assert_eq!(resolve("bytes=abc-", LEN), Err(RangeError::Malformed));
    assert_eq!(resolve("bytes=+5-10", LEN), Err(RangeError::Malformed));
    assert_eq!(resolve("bytes=5", LEN), Err(RangeError::Malformed));
    assert_eq!(resolve("bytes=-", LEN), Err(RangeError::Malformed));
}
