// numconv/src/encoding/hex.rs

use super::twos_complement;
use crate::constants::{HEX_DIGITS, NIBBLE_BITS};
use crate::types::{BitString, BitWidth, HexString};
use crate::Result;

/// Hexadecimal encoder.
///
/// Non-negative values are converted by repeated division by 16 and carry no
/// fixed width. Negative values only have a hexadecimal form relative to a
/// width, so they are first encoded as two's-complement bits at `width` and
/// then folded one nibble at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexEncoder {
    width: BitWidth,
}

impl Default for HexEncoder {
    fn default() -> Self {
        Self::new(BitWidth::DEFAULT_HEX)
    }
}

impl HexEncoder {
    pub fn new(width: BitWidth) -> Self {
        Self { width }
    }

    /// Width used for negative values.
    pub fn width(&self) -> BitWidth {
        self.width
    }

    pub fn encode(&self, value: i64) -> Result<HexString> {
        if value == 0 {
            return Ok(HexString::from_digits("0".to_string()));
        }
        if value > 0 {
            return Ok(divide_by_16(value as u64));
        }

        let bits = twos_complement::encode(value, self.width)?;
        Ok(fold_nibbles(&bits))
    }
}

/// Digits of `n` by repeated division by 16, most-significant first.
fn divide_by_16(mut n: u64) -> HexString {
    let mut lsd_first = Vec::new();
    while n > 0 {
        lsd_first.push(HEX_DIGITS[(n % 16) as usize]);
        n /= 16;
    }
    HexString::from_digits(lsd_first.into_iter().rev().collect())
}

/// Left-pad `bits` to a multiple of four and map every nibble, most
/// significant group first, to one hexadecimal digit.
pub fn fold_nibbles(bits: &BitString) -> HexString {
    let padded = bits.padded_to_multiple(NIBBLE_BITS);
    let digits = padded
        .bits()
        .chunks(NIBBLE_BITS)
        .map(|nibble| {
            let index = nibble
                .iter()
                .fold(0usize, |acc, b| acc * 2 + b.as_u8() as usize);
            HEX_DIGITS[index]
        })
        .collect();
    HexString::from_digits(digits)
}
