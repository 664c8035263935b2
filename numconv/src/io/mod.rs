// numconv/src/io/mod.rs
//! Line-oriented input and the text report consumed by the CLI.

pub mod reader;
pub mod report;

pub use reader::{read_lines, read_lines_from};
pub use report::{format_conversion, ReportWriter};
