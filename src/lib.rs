//! # metaplasmid-utils
//!
//! Post-processing utilities for metaplasmid assembly outputs.
//!
//! - **Contig gluing**: merges every `<prefix>_<coverage>.circular.fasta` file of
//!   an assembly directory into `final_metaplasmid.fasta`, appending
//!   `_cutoff_<coverage>` to each header
//! - **Insert-size histogram**: turns a file of paired `<position> <length>`
//!   lines into a dense histogram of `pos2 - pos1 + len2`
//!
//! Both operations are single-pass and fail on the first malformed input
//! rather than skipping it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use metaplasmid_utils::glue::{glue_contigs, GlueOptions};
//! use metaplasmid_utils::insert_size::compute_histogram;
//! use std::path::Path;
//!
//! let summary = glue_contigs(Path::new("assembly_out"), &GlueOptions { sort: true }).unwrap();
//! println!("{} records glued", summary.records);
//!
//! let total = compute_histogram(Path::new("pairs.txt"), Path::new("hist.txt"), 1000).unwrap();
//! println!("Total mate-pairs: {total}");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: File-name classification and the histogram type
//! - [`parsing`]: FASTA header rewriting and paired-position reading
//! - [`glue`]: Contig gluing
//! - [`insert_size`]: Insert-size histogram computation
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod glue;
pub mod insert_size;
pub mod parsing;

pub use crate::core::candidate::{CandidateFile, CoverageToken};
pub use crate::core::histogram::Histogram;
pub use glue::{GlueError, GlueOptions, GlueSummary};
pub use insert_size::HistogramError;
