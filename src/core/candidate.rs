//! File-name classification for circular contig FASTA files.
//!
//! Upstream assembly stages write one FASTA per circular contig using names of
//! the form `<prefix>_<coverage>.circular.fasta`. Only the dot-separated
//! segments at the end of the name are inspected:
//!
//! ```text
//! sample_k55_12.circular.fasta
//! └─core-field─┘ └─tag──┘ └ext┘   (split on '.', read from the right)
//! ```
//!
//! The coverage token is the last `_`-separated part of the core-field (`12`
//! above). A dot inside the coverage value (`..._12.5.circular.fasta`) moves
//! the core-field to `5`, which has no `_`, so such files are skipped.

use serde::Serialize;

use crate::glue::GlueError;

/// Extension a candidate must carry
pub const FASTA_EXTENSION: &str = "fasta";

/// Tag marking a contig as topologically circular
pub const CIRCULAR_TAG: &str = "circular";

/// Coverage value taken verbatim from a file name.
///
/// Not required to be numeric; it is only ever appended to FASTA headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CoverageToken(String);

impl CoverageToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suffix appended to every header of a glued file (`_cutoff_<token>`)
    #[must_use]
    pub fn header_suffix(&self) -> String {
        format!("_cutoff_{}", self.0)
    }
}

impl std::fmt::Display for CoverageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A directory entry name split into the fields used for selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile<'a> {
    pub name: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> CandidateFile<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            segments: name.split('.').collect(),
        }
    }

    /// Last dot-separated segment (the whole name when there is no dot)
    #[must_use]
    pub fn extension(&self) -> &'a str {
        self.segment_from_end(1).unwrap_or(self.name)
    }

    /// Second-to-last dot-separated segment
    #[must_use]
    pub fn tag_field(&self) -> Option<&'a str> {
        self.segment_from_end(2)
    }

    /// Third-to-last dot-separated segment
    #[must_use]
    pub fn core_field(&self) -> Option<&'a str> {
        self.segment_from_end(3)
    }

    fn segment_from_end(&self, n: usize) -> Option<&'a str> {
        self.segments
            .len()
            .checked_sub(n)
            .map(|idx| self.segments[idx])
    }

    /// Decide whether this file takes part in gluing.
    ///
    /// Returns `Ok(None)` for files that are skipped and the coverage token for
    /// files that are glued. The checks run in order (extension, tag, core
    /// field), so a name only fails once it has passed the earlier checks.
    ///
    /// # Errors
    ///
    /// Returns `GlueError::InvalidFilenameFormat` when a name passes the
    /// earlier checks but lacks the segment the next check needs, e.g.
    /// `circular.fasta` (no core-field).
    pub fn classify(&self) -> Result<Option<CoverageToken>, GlueError> {
        if self.extension() != FASTA_EXTENSION {
            return Ok(None);
        }

        let tag = self.tag_field().ok_or_else(|| self.invalid())?;
        if tag != CIRCULAR_TAG {
            return Ok(None);
        }

        let core = self.core_field().ok_or_else(|| self.invalid())?;
        let parts: Vec<&str> = core.split('_').collect();
        if parts.len() < 2 {
            return Ok(None);
        }

        Ok(parts
            .last()
            .map(|cov| CoverageToken((*cov).to_string())))
    }

    fn invalid(&self) -> GlueError {
        GlueError::InvalidFilenameFormat {
            name: self.name.to_string(),
        }
    }
}
