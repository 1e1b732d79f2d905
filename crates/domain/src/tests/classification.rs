// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{SegmentSpec, SerialToken};

fn classify(segment: &str) -> SegmentSpec {
    SegmentSpec::classify(segment).expect("segment should classify")
}

#[test]
fn test_plain_token_classifies_as_literal() {
    let spec: SegmentSpec = classify("SN221");
    assert_eq!(
        spec,
        SegmentSpec::Literal(SerialToken::new("SN221").unwrap())
    );
}

#[test]
fn test_numeric_range_classifies_as_range() {
    let spec: SegmentSpec = classify("0001-0010");
    assert_eq!(
        spec,
        SegmentSpec::Range {
            start: String::from("0001"),
            end: String::from("0010"),
        }
    );
}

#[test]
fn test_equal_bounds_classify_as_range() {
    let spec: SegmentSpec = classify("5-5");
    assert_eq!(
        spec,
        SegmentSpec::Range {
            start: String::from("5"),
            end: String::from("5"),
        }
    );
}

#[test]
fn test_surrounding_whitespace_is_trimmed_before_classification() {
    let spec: SegmentSpec = classify("  0001-0003\r");
    assert!(matches!(spec, SegmentSpec::Range { .. }));
}

#[test]
fn test_empty_segment_classifies_to_none() {
    assert_eq!(SegmentSpec::classify(""), None);
    assert_eq!(SegmentSpec::classify("  \t "), None);
}

#[test]
fn test_reversed_bounds_degrade_to_literal() {
    let spec: SegmentSpec = classify("0010-0001");
    assert_eq!(
        spec,
        SegmentSpec::Literal(SerialToken::new("0010-0001").unwrap())
    );
}

#[test]
fn test_non_numeric_side_degrades_to_literal() {
    assert!(matches!(classify("ABC-DEF"), SegmentSpec::Literal(_)));
    assert!(matches!(classify("SN1-SN5"), SegmentSpec::Literal(_)));
    assert!(matches!(classify("1-x"), SegmentSpec::Literal(_)));
}

#[test]
fn test_missing_side_degrades_to_literal() {
    assert!(matches!(classify("-5"), SegmentSpec::Literal(_)));
    assert!(matches!(classify("5-"), SegmentSpec::Literal(_)));
    assert!(matches!(classify("-"), SegmentSpec::Literal(_)));
}

#[test]
fn test_split_happens_at_first_hyphen_only() {
    // "3-5" is not a valid end side, so the whole segment stays literal.
    assert!(matches!(classify("1-3-5"), SegmentSpec::Literal(_)));
}

#[test]
fn test_non_ascii_digits_degrade_to_literal() {
    assert!(matches!(classify("٣-٩"), SegmentSpec::Literal(_)));
}

#[test]
fn test_overflowing_bounds_degrade_to_literal() {
    // Both sides exceed u64; the segment must stay a literal rather than
    // attempt an unexpandable range.
    assert!(matches!(
        classify("99999999999999999999998-99999999999999999999999"),
        SegmentSpec::Literal(_)
    ));
}
