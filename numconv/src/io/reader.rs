// numconv/src/io/reader.rs

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::{Error, Result};

/// Read every line of `path` as one token.
///
/// A missing file is reported as `FileNotFound`, separately from other I/O
/// failures, so callers can tell the user without treating it as fatal.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    let lines = read_lines_from(BufReader::new(file))?;
    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Collect lines from any buffered reader. Line terminators (`\n` or
/// `\r\n`) are stripped.
pub fn read_lines_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(Error::from)
}
