//! convert_numbers - print every number in a file as binary and hexadecimal
//!
//! Usage:
//!   convert_numbers fileWithData.txt [--output PATH] [--binary-width N] [--hex-width N]
//!
//! Invalid lines are reported as warnings and skipped. Results go to stdout
//! and to the report file, which ends with the elapsed time.

use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use numconv::constants::{DEFAULT_BINARY_WIDTH, DEFAULT_HEX_WIDTH, DEFAULT_REPORT_FILE};
use numconv::{io, Conversion, Converter, Error, ReportWriter, Stopwatch, seconds};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one integer per line
    input: PathBuf,

    /// Report file (overwritten)
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,

    /// Two's-complement width behind the binary column
    #[arg(long, default_value_t = DEFAULT_BINARY_WIDTH)]
    binary_width: u32,

    /// Width used for hexadecimal digits of negative numbers
    #[arg(long, default_value_t = DEFAULT_HEX_WIDTH)]
    hex_width: u32,
}

fn main() -> anyhow::Result<()> {
    let stopwatch = Stopwatch::start();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let converter = Converter::builder()
        .with_binary_width(args.binary_width)
        .with_hex_width(args.hex_width)
        .build()
        .context("invalid width")?;

    run(&converter, &args)?;

    let elapsed = stopwatch.elapsed();
    println!("Time elapsed: {} seconds", seconds(elapsed));
    append_elapsed(&args.output, elapsed)
}

fn run(converter: &Converter, args: &Args) -> anyhow::Result<()> {
    let lines = match io::read_lines(&args.input) {
        Ok(lines) => lines,
        Err(Error::FileNotFound(path)) => {
            println!("Error: File not found - {}", path.display());
            return Ok(());
        }
        Err(e) => {
            println!("Error: {}", e);
            return Ok(());
        }
    };

    if lines.is_empty() {
        println!("Error: Empty data in the file.");
        return Ok(());
    }
    println!("Total records to analyze: {}", lines.len());

    let report = match converter.process(&lines) {
        Ok(report) => report,
        Err(Error::EmptyInput { skipped }) => {
            println!("Error: No valid numbers in the file ({} skipped).", skipped);
            // Leave only this run's elapsed-time line in the report
            write_report(&args.output, &[])?;
            return Ok(());
        }
        Err(e) => {
            println!("Error: {}", e);
            return Ok(());
        }
    };

    write_report(&args.output, &report.conversions)?;

    for conversion in &report.conversions {
        println!("{}", io::format_conversion(conversion));
    }
    Ok(())
}

/// Create or truncate the report file and write the conversion lines.
fn write_report(path: &Path, conversions: &[Conversion]) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ReportWriter::new(BufWriter::new(file));
    writer.write_conversions(conversions)?;
    writer.flush()?;
    Ok(())
}

fn append_elapsed(path: &Path, elapsed: Duration) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut writer = ReportWriter::new(file);
    writer.write_elapsed(elapsed)?;
    writer.flush()?;
    Ok(())
}
