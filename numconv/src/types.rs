// numconv/src/types.rs

use crate::constants::{HEX_DIGITS, MAX_BIT_WIDTH, NIBBLE_BITS};
use crate::{Error, Result};
use derive_more::Display;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

/// A single binary digit
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bit {
    #[display(fmt = "0")]
    Zero,
    #[display(fmt = "1")]
    One,
}

impl Bit {
    /// Lowest bit of `v`.
    pub fn from_u8(v: u8) -> Self {
        if v & 1 == 1 {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            other => Err(Error::InvalidDigit {
                digit: other,
                expected: "'0' or '1'",
            }),
        }
    }
}

impl Not for Bit {
    type Output = Bit;

    fn not(self) -> Bit {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

impl BitXor for Bit {
    type Output = Bit;

    fn bitxor(self, rhs: Bit) -> Bit {
        Bit::from_u8(self.as_u8() ^ rhs.as_u8())
    }
}

impl BitAnd for Bit {
    type Output = Bit;

    fn bitand(self, rhs: Bit) -> Bit {
        Bit::from_u8(self.as_u8() & rhs.as_u8())
    }
}

impl BitOr for Bit {
    type Output = Bit;

    fn bitor(self, rhs: Bit) -> Bit {
        Bit::from_u8(self.as_u8() | rhs.as_u8())
    }
}

/// Binary digit string, most-significant digit first.
///
/// The digit sequence is kept exactly as produced; leading zeros are only
/// removed by [`BitString::trimmed`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitString(Vec<Bit>);

impl BitString {
    pub fn from_bits(bits: Vec<Bit>) -> Self {
        Self(bits)
    }

    pub fn zeros(len: usize) -> Self {
        Self(vec![Bit::Zero; len])
    }

    /// Binary `1` at the given length (`00..01`).
    pub fn one(len: usize) -> Self {
        let mut bits = vec![Bit::Zero; len.max(1)];
        if let Some(last) = bits.last_mut() {
            *last = Bit::One;
        }
        Self(bits)
    }

    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    pub fn into_bits(self) -> Vec<Bit> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most-significant digit, if any.
    pub fn leading(&self) -> Option<Bit> {
        self.0.first().copied()
    }

    /// Left-pad with zeros up to `len` digits. Never shortens.
    pub fn padded_to(&self, len: usize) -> Self {
        if self.0.len() >= len {
            return self.clone();
        }
        let mut bits = vec![Bit::Zero; len - self.0.len()];
        bits.extend_from_slice(&self.0);
        Self(bits)
    }

    /// Left-pad with zeros until the length is a multiple of `group`.
    pub fn padded_to_multiple(&self, group: usize) -> Self {
        let len = self.0.len().div_ceil(group) * group;
        self.padded_to(len)
    }

    /// Every digit flipped (one's complement).
    pub fn inverted(&self) -> Self {
        Self(self.0.iter().map(|&b| !b).collect())
    }

    /// Display form: leading zeros stripped down to the first `1`, or a
    /// single `0` when every digit is zero.
    pub fn trimmed(&self) -> Self {
        match self.0.iter().position(|&b| b == Bit::One) {
            Some(first) => Self(self.0[first..].to_vec()),
            None => Self(vec![Bit::Zero]),
        }
    }

    /// Interpret the digits as an unsigned number. `None` when the value
    /// needs more than 64 bits.
    pub fn to_unsigned(&self) -> Option<u64> {
        self.0.iter().try_fold(0u64, |acc, &b| {
            acc.checked_mul(2)?.checked_add(u64::from(b.as_u8()))
        })
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            fmt::Write::write_char(f, b.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(Bit::try_from)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

/// Hexadecimal digit string over `0123456789ABCDEF`, most-significant first.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct HexString(String);

impl HexString {
    /// Build from digits already known to be in the alphabet.
    pub(crate) fn from_digits(digits: String) -> Self {
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expand every digit into its 4-bit group, most-significant first.
    pub fn to_bit_string(&self) -> BitString {
        let mut bits = Vec::with_capacity(self.0.len() * NIBBLE_BITS);
        for c in self.0.chars() {
            // Digits are validated on construction
            let nibble = HEX_DIGITS.iter().position(|&d| d == c).unwrap_or(0);
            for shift in (0..NIBBLE_BITS).rev() {
                bits.push(Bit::from_u8((nibble >> shift) as u8));
            }
        }
        BitString::from_bits(bits)
    }
}

impl FromStr for HexString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(bad) = s.chars().find(|c| !HEX_DIGITS.contains(c)) {
            return Err(Error::InvalidDigit {
                digit: bad,
                expected: "one of 0-9, A-F",
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for HexString {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<HexString> for String {
    fn from(hex: HexString) -> String {
        hex.0
    }
}

/// Two's-complement bit width (1..=64)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct BitWidth(u32);

impl BitWidth {
    pub const BYTE: Self = Self(8);
    pub const DEFAULT_HEX: Self = Self(crate::constants::DEFAULT_HEX_WIDTH);
    pub const DEFAULT_BINARY: Self = Self(crate::constants::DEFAULT_BINARY_WIDTH);
    pub const MAX: Self = Self(MAX_BIT_WIDTH);

    pub fn new(bits: u32) -> Result<Self> {
        if bits == 0 || bits > MAX_BIT_WIDTH {
            return Err(Error::InvalidWidth(bits));
        }
        Ok(Self(bits))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Smallest value representable at this width.
    pub fn min_value(&self) -> i64 {
        (-(1i128 << (self.0 - 1))) as i64
    }

    /// Largest value representable at this width.
    pub fn max_value(&self) -> i64 {
        ((1i128 << (self.0 - 1)) - 1) as i64
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        Self::new(bits)
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> u32 {
        width.0
    }
}

/// Result triple for one input value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversion {
    pub value: i64,
    /// Display form of the two's-complement encoding
    pub binary: BitString,
    pub hexadecimal: HexString,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number: {}, Binary: {}, Hexadecimal: {}",
            self.value, self.binary, self.hexadecimal
        )
    }
}
