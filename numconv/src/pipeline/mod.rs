// numconv/src/pipeline/mod.rs
//! Batch conversion: token parsing, per-value encoding and result
//! collection.

use crate::encoding::{twos_complement, HexEncoder};
use crate::types::{BitString, BitWidth, Conversion, HexString};
use crate::{Error, Result};

pub mod builder;
pub use builder::ConverterBuilder;

/// A token that produced no conversion.
#[derive(Debug)]
pub struct SkippedToken {
    /// Zero-based position in the input sequence
    pub index: usize,
    pub token: String,
    pub error: Error,
}

/// Outcome of [`Converter::process`].
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per valid input value, in input order
    pub conversions: Vec<Conversion>,
    pub skipped: Vec<SkippedToken>,
}

impl BatchReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Parse one input token as a signed decimal integer. Surrounding
/// whitespace and a leading `+` are accepted.
pub fn parse_token(token: &str) -> Result<i64> {
    token.trim().parse::<i64>().map_err(|e| Error::Parse {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

/// Converts integers to binary and hexadecimal at fixed widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    binary_width: BitWidth,
    hex: HexEncoder,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(BitWidth::DEFAULT_BINARY, BitWidth::DEFAULT_HEX)
    }
}

impl Converter {
    pub fn new(binary_width: BitWidth, hex_width: BitWidth) -> Self {
        Self {
            binary_width,
            hex: HexEncoder::new(hex_width),
        }
    }

    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    pub fn binary_width(&self) -> BitWidth {
        self.binary_width
    }

    pub fn hex_width(&self) -> BitWidth {
        self.hex.width()
    }

    /// Convert one value. The binary form is the fixed-width encoding with
    /// leading zeros trimmed for display.
    pub fn convert(&self, value: i64) -> Result<(BitString, HexString)> {
        let binary = twos_complement::encode(value, self.binary_width)?.trimmed();
        let hexadecimal = self.hex.encode(value)?;
        Ok((binary, hexadecimal))
    }

    pub fn conversion(&self, value: i64) -> Result<Conversion> {
        let (binary, hexadecimal) = self.convert(value)?;
        Ok(Conversion {
            value,
            binary,
            hexadecimal,
        })
    }

    /// Convert every token in order.
    ///
    /// Tokens that do not parse, or whose value does not fit the configured
    /// widths, are logged and recorded in [`BatchReport::skipped`]. Returns
    /// `EmptyInput`, carrying the skipped count, when nothing could be
    /// converted.
    pub fn process<I, S>(&self, tokens: I) -> Result<BatchReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = BatchReport::default();

        for (index, token) in tokens.into_iter().enumerate() {
            let token = token.as_ref();
            match parse_token(token).and_then(|value| self.conversion(value)) {
                Ok(conversion) => {
                    log::debug!("converted {}", conversion);
                    report.conversions.push(conversion);
                }
                Err(error) if error.is_recoverable() => {
                    log::warn!("skipping record {}: {}", index + 1, error);
                    report.skipped.push(SkippedToken {
                        index,
                        token: token.to_string(),
                        error,
                    });
                }
                Err(error) => return Err(error),
            }
        }

        if report.conversions.is_empty() {
            return Err(Error::EmptyInput {
                skipped: report.skipped_count(),
            });
        }

        log::info!(
            "converted {} values, skipped {}",
            report.conversions.len(),
            report.skipped_count()
        );
        Ok(report)
    }
}

/// Convert one value with the default widths.
pub fn convert(value: i64) -> Result<(BitString, HexString)> {
    Converter::default().convert(value)
}

/// Convert a token sequence with the default widths.
pub fn process<I, S>(tokens: I) -> Result<BatchReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Converter::default().process(tokens)
}
