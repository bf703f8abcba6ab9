//! Line-oriented readers for the two input formats.
//!
//! - **FASTA**: header rewriting for glued contig files
//! - **Paired positions**: `<position> <length>` lines, two per mate pair,
//!   plain or gzip compressed

pub mod fasta;
pub mod pairs;
