//! Glue circular contig FASTA files into one metaplasmid FASTA.
//!
//! Every `<prefix>_<coverage>.circular.fasta` file in a directory is copied
//! into `<dir>/final_metaplasmid.fasta`, with `_cutoff_<coverage>` appended to
//! each header so records stay traceable to their coverage cutoff.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::candidate::{CandidateFile, CoverageToken};
use crate::parsing::fasta::{rewrite_headers, RewriteStats};

/// Name of the glued output, created inside the scanned directory
pub const OUTPUT_FILE_NAME: &str = "final_metaplasmid.fasta";

#[derive(Error, Debug)]
pub enum GlueError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contig file name '{name}': expected <prefix>_<coverage>.circular.fasta")]
    InvalidFilenameFormat { name: String },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlueOptions {
    /// Visit entries sorted by file name instead of directory listing order
    pub sort: bool,
}

/// One input file that was glued
#[derive(Debug, Clone, Serialize)]
pub struct GluedFile {
    pub file_name: String,
    pub coverage: CoverageToken,
    pub records: usize,
}

/// Outcome of a glue run
#[derive(Debug, Clone, Serialize)]
pub struct GlueSummary {
    pub output: PathBuf,
    pub files: Vec<GluedFile>,
    pub records: usize,
    pub lines: usize,
}

/// Path of the glued output for `output_dir`
#[must_use]
pub fn output_path(output_dir: &Path) -> PathBuf {
    output_dir.join(OUTPUT_FILE_NAME)
}

/// Glue all circular contig files of `output_dir` into
/// `output_dir/final_metaplasmid.fasta`.
///
/// The output is truncated first. Without `options.sort` files are visited in
/// the order the filesystem lists them, which is platform dependent.
///
/// # Errors
///
/// Returns `GlueError::Io` if the directory or a file cannot be read or the
/// output cannot be written, and `GlueError::InvalidFilenameFormat` for a
/// truncated name such as `circular.fasta`. Either aborts the whole run; the
/// partially written output is left in place.
pub fn glue_contigs(output_dir: &Path, options: &GlueOptions) -> Result<GlueSummary, GlueError> {
    let output = output_path(output_dir);
    let mut writer = BufWriter::new(File::create(&output)?);

    let mut names = Vec::new();
    for entry in fs::read_dir(output_dir)? {
        names.push(entry?.file_name());
    }
    if options.sort {
        names.sort();
    }

    let mut files = Vec::new();
    let mut totals = RewriteStats::default();

    for file_name in &names {
        let name = file_name.to_string_lossy();
        let Some(coverage) = CandidateFile::new(&name).classify()? else {
            continue;
        };

        debug!(file = %name, coverage = %coverage, "Gluing contig file");

        let reader = BufReader::new(File::open(output_dir.join(file_name))?);
        let stats = rewrite_headers(reader, &mut writer, &coverage.header_suffix())?;
        totals += stats;

        files.push(GluedFile {
            file_name: name.into_owned(),
            coverage,
            records: stats.records,
        });
    }

    writer.flush()?;

    if files.is_empty() {
        warn!(
            "No *.circular.fasta files found in {}; wrote empty {}",
            output_dir.display(),
            OUTPUT_FILE_NAME
        );
    }

    Ok(GlueSummary {
        output,
        files,
        records: totals.records,
        lines: totals.lines,
    })
}
