// numconv/src/encoding/twos_complement.rs

use super::adder::add_with_carry;
use crate::types::{Bit, BitString, BitWidth};
use crate::{Error, Result};

/// Unsigned binary digits of `n` by repeated division by 2, without padding.
/// Zero yields an empty string.
pub fn magnitude_bits(mut n: u64) -> BitString {
    let mut lsb_first = Vec::new();
    while n > 0 {
        lsb_first.push(Bit::from_u8((n % 2) as u8));
        n /= 2;
    }
    lsb_first.reverse();
    BitString::from_bits(lsb_first)
}

/// Negate a fixed-width pattern: invert every digit, then add `1` with the
/// ripple-carry adder. Carry out of the top digit is dropped.
pub fn negate(bits: &BitString) -> BitString {
    let (sum, _wrapped) = add_with_carry(&bits.inverted(), &BitString::one(bits.len()));
    sum
}

/// Encode `value` as exactly `width` two's-complement digits.
///
/// Returns `WidthOverflow` when `value` lies outside
/// `-2^(width-1) ..= 2^(width-1) - 1`.
pub fn encode(value: i64, width: BitWidth) -> Result<BitString> {
    if !width.contains(value) {
        return Err(Error::WidthOverflow {
            value,
            width: width.as_u32(),
        });
    }

    let len = width.as_usize();
    if value >= 0 {
        return Ok(magnitude_bits(value as u64).padded_to(len));
    }

    let magnitude = magnitude_bits(value.unsigned_abs()).padded_to(len);
    Ok(negate(&magnitude))
}

/// Decode a two's-complement pattern of 1..=64 digits back into an integer.
pub fn decode(bits: &BitString) -> Result<i64> {
    let len = bits.len();
    if len == 0 || len > crate::constants::MAX_BIT_WIDTH as usize {
        return Err(Error::InvalidWidth(len as u32));
    }

    match bits.leading() {
        Some(Bit::One) => {
            let magnitude = negate(bits)
                .to_unsigned()
                .ok_or(Error::InvalidWidth(len as u32))?;
            // -2^63 has no positive i64 counterpart
            Ok((-(magnitude as i128)) as i64)
        }
        _ => {
            let value = bits.to_unsigned().ok_or(Error::InvalidWidth(len as u32))?;
            Ok(value as i64)
        }
    }
}
