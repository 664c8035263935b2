#[path = "../common/mod.rs"]
mod common;

use numconv::test_support::converter_with_width;
use numconv::{process, Error};

#[test]
fn mixed_tokens_end_to_end() {
    let report = converter_with_width(8)
        .process(common::fixtures::mixed_tokens())
        .unwrap();

    let values: Vec<i64> = report.conversions.iter().map(|c| c.value).collect();
    assert_eq!(values, common::fixtures::mixed_values());
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.skipped[0].token, "abc");
    assert!(matches!(report.skipped[0].error, Error::Parse { .. }));

    assert_eq!(report.conversions[0].binary.to_string(), "1010");
    assert_eq!(report.conversions[1].hexadecimal.as_str(), "FB");
    assert_eq!(report.conversions[2].binary.to_string(), "0");
}

#[test]
fn byte_width_table_matches() {
    let conv = converter_with_width(8);
    for (value, binary, hexadecimal) in common::fixtures::byte_width_table() {
        let (b, h) = conv.convert(value).unwrap();
        assert_eq!(b.to_string(), binary, "binary of {}", value);
        assert_eq!(h.as_str(), hexadecimal, "hex of {}", value);
    }
}

#[test]
fn all_invalid_is_empty_input() {
    match process(["one", "2.5", ""]) {
        Err(Error::EmptyInput { skipped }) => assert_eq!(skipped, 3),
        other => panic!("expected empty input, got: {:?}", other),
    }
}

#[test]
fn default_widths_handle_large_values() {
    let report = process(["549755813887", "-549755813888", "549755813888"]).unwrap();
    assert_eq!(report.conversions.len(), 2);
    assert_eq!(report.conversions[1].hexadecimal.as_str(), "8000000000");
    assert!(matches!(
        report.skipped[0].error,
        Error::WidthOverflow { width: 40, .. }
    ));
}
