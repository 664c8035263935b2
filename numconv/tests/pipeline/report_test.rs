#[path = "../common/mod.rs"]
mod common;

use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;

use numconv::io::{read_lines, ReportWriter};
use numconv::test_support::converter_with_width;

#[test]
fn file_round_trip_produces_report() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("data.txt");
    std::fs::write(&input, common::fixtures::data_file_contents())?;

    let lines = read_lines(&input)?;
    assert_eq!(lines.len(), 5);

    let report = converter_with_width(8).process(&lines)?;
    assert_eq!(report.skipped_count(), 2); // "abc" and 255 at 8 bits

    let output = dir.path().join("ConvertionResults.txt");
    let mut writer = ReportWriter::new(BufWriter::new(File::create(&output)?));
    writer.write_conversions(&report.conversions)?;
    writer.write_elapsed(Duration::from_millis(125))?;
    writer.flush()?;
    drop(writer);

    let written = std::fs::read_to_string(&output)?;
    assert_eq!(
        written,
        "Number: 10, Binary: 1010, Hexadecimal: A\n\
         Number: -5, Binary: 11111011, Hexadecimal: FB\n\
         Number: 0, Binary: 0, Hexadecimal: 0\n\
         Elapsed time: 0.125\n"
    );
    Ok(())
}
