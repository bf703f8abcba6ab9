//! Glue command - merge circular contig FASTA files of an assembly directory.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::glue::{glue_contigs, GlueOptions, GlueSummary};

#[derive(Args)]
pub struct GlueArgs {
    /// Assembly output directory holding the *.circular.fasta files.
    /// final_metaplasmid.fasta is written here.
    #[arg(required = true)]
    pub output_dir: PathBuf,

    /// Visit files sorted by name instead of directory listing order
    #[arg(long)]
    pub sort: bool,
}

/// Execute the glue command
///
/// # Errors
///
/// Returns an error if the directory cannot be read, a file name is
/// malformed, or the output cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: GlueArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let options = GlueOptions { sort: args.sort };

    let summary = glue_contigs(&args.output_dir, &options)
        .with_context(|| format!("Failed to glue contigs in {}", args.output_dir.display()))?;

    match format {
        OutputFormat::Text => print_text_summary(&summary, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn print_text_summary(summary: &GlueSummary, verbose: bool) {
    if verbose {
        for file in &summary.files {
            eprintln!(
                "  {} (coverage {}): {} records",
                file.file_name, file.coverage, file.records
            );
        }
    }

    println!(
        "Glued {} records from {} circular contig files into {}",
        summary.records,
        summary.files.len(),
        summary.output.display()
    );
}
