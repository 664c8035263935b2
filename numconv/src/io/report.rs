// numconv/src/io/report.rs

use std::io::Write;
use std::time::Duration;

use crate::types::Conversion;
use crate::utils::seconds;
use crate::Result;

/// Format one conversion as a report line, without the trailing newline:
/// `Number: <v>, Binary: <b>, Hexadecimal: <h>`
pub fn format_conversion(conversion: &Conversion) -> String {
    conversion.to_string()
}

/// Writes conversion lines followed by an elapsed-time line.
pub struct ReportWriter<W: Write> {
    inner: W,
    lines: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }

    pub fn write_conversion(&mut self, conversion: &Conversion) -> Result<()> {
        writeln!(self.inner, "{}", format_conversion(conversion))?;
        self.lines += 1;
        Ok(())
    }

    pub fn write_conversions(&mut self, conversions: &[Conversion]) -> Result<()> {
        for conversion in conversions {
            self.write_conversion(conversion)?;
        }
        Ok(())
    }

    /// `Elapsed time: <seconds>`
    pub fn write_elapsed(&mut self, elapsed: Duration) -> Result<()> {
        writeln!(self.inner, "Elapsed time: {}", seconds(elapsed))?;
        self.lines += 1;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
