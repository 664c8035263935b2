// numconv/src/prelude.rs

pub use crate::encoding::HexEncoder;
pub use crate::io::{ReportWriter, read_lines};
pub use crate::pipeline::{BatchReport, Converter, ConverterBuilder, SkippedToken, convert, process};
pub use crate::{Bit, BitString, BitWidth, Conversion, Error, HexString, Result};

// Re-export small utilities for convenience
pub use crate::utils::{Stopwatch, seconds};
