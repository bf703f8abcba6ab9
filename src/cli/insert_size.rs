//! Insert-size command - histogram of mate-pair insert sizes.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::insert_size::compute_histogram;

#[derive(Args)]
pub struct InsertSizeArgs {
    /// Paired positions file: one `<position> <length>` line per mate,
    /// two consecutive lines per pair (.gz accepted)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Histogram output, one `<insert_size> <count>` line per bucket
    #[arg(required = true)]
    pub output: PathBuf,

    /// Number of histogram buckets; insert sizes must lie in [0, MAX_LEN)
    #[arg(required = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_len: u64,
}

#[derive(Serialize)]
struct InsertSizeReport<'a> {
    input: &'a std::path::Path,
    output: &'a std::path::Path,
    max_len: u64,
    total_mate_pairs: u64,
}

/// Execute the insert-size command
///
/// # Errors
///
/// Returns an error on unreadable input, malformed lines, insert sizes
/// outside the histogram range, or write failures.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: InsertSizeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let max_len = usize::try_from(args.max_len).context("MAX_LEN does not fit in memory")?;

    if verbose {
        eprintln!(
            "Histogram of {} buckets from {}",
            max_len,
            args.input.display()
        );
    }

    let total = compute_histogram(&args.input, &args.output, max_len).with_context(|| {
        format!(
            "Failed to compute insert-size histogram from {}",
            args.input.display()
        )
    })?;

    match format {
        OutputFormat::Text => println!("Total mate-pairs: {total}"),
        OutputFormat::Json => {
            let report = InsertSizeReport {
                input: &args.input,
                output: &args.output,
                max_len: args.max_len,
                total_mate_pairs: total,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
