//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common converter setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::pipeline::Converter;
use crate::types::{Bit, BitString, BitWidth};

/// Converter using the same width for the binary column and for negative
/// hexadecimal values.
#[doc(hidden)]
pub fn converter_with_width(bits: u32) -> Converter {
    let width = BitWidth::new(bits).unwrap_or(BitWidth::MAX);
    Converter::new(width, width)
}

/// Bit pattern of `value` at `bits` digits taken from the native integer,
/// for comparison against the digit-level encoders.
#[doc(hidden)]
pub fn native_pattern(value: i64, bits: u32) -> BitString {
    BitString::from_bits(
        (0..bits)
            .rev()
            .map(|i| Bit::from_u8(((value as u64) >> i) as u8))
            .collect(),
    )
}
