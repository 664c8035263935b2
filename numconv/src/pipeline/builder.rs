// numconv/src/pipeline/builder.rs

use crate::pipeline::Converter;
use crate::types::BitWidth;
use crate::Result;

/// Helper to construct a Converter with optional configuration.
#[derive(Debug, Default)]
pub struct ConverterBuilder {
    binary_width: Option<u32>,
    hex_width: Option<u32>,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the two's-complement encoding behind the binary column.
    pub fn with_binary_width(mut self, bits: u32) -> Self {
        self.binary_width = Some(bits);
        self
    }

    /// Width used to form hexadecimal digits of negative values.
    pub fn with_hex_width(mut self, bits: u32) -> Self {
        self.hex_width = Some(bits);
        self
    }

    /// Validate the widths and build the converter. Unset widths fall back
    /// to the crate defaults.
    pub fn build(self) -> Result<Converter> {
        let binary_width = match self.binary_width {
            Some(bits) => BitWidth::new(bits)?,
            None => BitWidth::DEFAULT_BINARY,
        };
        let hex_width = match self.hex_width {
            Some(bits) => BitWidth::new(bits)?,
            None => BitWidth::DEFAULT_HEX,
        };
        Ok(Converter::new(binary_width, hex_width))
    }
}
