//! Core data types for contig gluing and insert-size histograms.
//!
//! - [`candidate::CandidateFile`]: A directory entry name split into the fields
//!   that decide whether it is glued
//! - [`candidate::CoverageToken`]: The coverage value carried from a file name into headers
//! - [`histogram::Histogram`]: A dense insert-size histogram over `0..max_len`
//!
//! ## File naming
//!
//! | File name                  | Glued | Coverage token |
//! |----------------------------|-------|----------------|
//! | `a_5.circular.fasta`       | yes   | `5`            |
//! | `ab_cd.circular.fasta`     | yes   | `cd`           |
//! | `x.circular.fasta`         | no    |                |
//! | `x.linear.fasta`           | no    |                |
//! | `circular.fasta`           | error |                |

pub mod candidate;
pub mod histogram;
