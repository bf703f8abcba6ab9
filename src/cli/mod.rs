//! Command-line interface for metaplasmid-utils.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **glue**: Concatenate circular contig FASTA files into `final_metaplasmid.fasta`
//! - **insert-size**: Build an insert-size histogram from paired read positions
//!
//! ## Usage
//!
//! ```text
//! # Glue the circular contigs of an assembly output directory
//! metaplasmid-utils glue assembly_out/
//!
//! # Same, visiting files in name order
//! metaplasmid-utils glue assembly_out/ --sort
//!
//! # Insert-size histogram with 1000 buckets
//! metaplasmid-utils insert-size pairs.txt hist.txt 1000
//!
//! # JSON summary for scripting
//! metaplasmid-utils --format json insert-size pairs.txt.gz hist.txt 1000
//! ```

use clap::{Parser, Subcommand};

pub mod glue;
pub mod insert_size;

#[derive(Parser)]
#[command(name = "metaplasmid-utils")]
#[command(version)]
#[command(about = "Utilities for metaplasmid assembly outputs")]
#[command(
    long_about = "metaplasmid-utils post-processes plasmid assembly outputs.\n\n- glue: merge circular contig FASTA files, tagging headers with their coverage cutoff\n- insert-size: compute an insert-size histogram from paired read positions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Glue circular contig FASTA files into final_metaplasmid.fasta
    Glue(glue::GlueArgs),

    /// Compute an insert-size histogram from paired read positions
    InsertSize(insert_size::InsertSizeArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
