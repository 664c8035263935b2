// fixtures.rs — provides commonly used input tokens and expected results

use numconv::types::{BitString, HexString};

/// Mixed input with one invalid record
pub fn mixed_tokens() -> Vec<&'static str> {
    vec!["10", "-5", "abc", "0"]
}

/// Values that survive parsing of `mixed_tokens`, in order
pub fn mixed_values() -> Vec<i64> {
    vec![10, -5, 0]
}

/// (value, binary display at 8 bits, hex at 8 bits)
pub fn byte_width_table() -> Vec<(i64, &'static str, &'static str)> {
    vec![
        (0, "0", "0"),
        (1, "1", "1"),
        (10, "1010", "A"),
        (127, "1111111", "7F"),
        (-1, "11111111", "FF"),
        (-5, "11111011", "FB"),
        (-128, "10000000", "80"),
    ]
}

/// Contents of a data file as the CLI would read it
pub fn data_file_contents() -> &'static str {
    "10\n-5\nabc\n0\n255\n"
}

pub fn bits(s: &str) -> BitString {
    s.parse().unwrap()
}

pub fn hex(s: &str) -> HexString {
    s.parse().unwrap()
}
