// numconv/src/constants.rs
//! Common constants used across the crate

/// Hexadecimal digit alphabet, indexed by nibble value
pub const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Bits folded into one hexadecimal digit
pub const NIBBLE_BITS: usize = 4;

/// Widest supported two's-complement encoding (the width of `i64`)
pub const MAX_BIT_WIDTH: u32 = 64;

/// Width used for negative hexadecimal output unless configured otherwise
pub const DEFAULT_HEX_WIDTH: u32 = 40;

/// Width used for the binary column unless configured otherwise
pub const DEFAULT_BINARY_WIDTH: u32 = 40;

/// Report file written by the `convert_numbers` binary
pub const DEFAULT_REPORT_FILE: &str = "ConvertionResults.txt";
// numconv/src/constants.rs
