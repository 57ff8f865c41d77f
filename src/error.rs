//! Error type shared by the engines, the corpus loader and the runner.
//!
//! Distance mismatches are *not* errors: [`DistanceEngine::verify`] reports
//! them as `Ok(false)`. Only capacity violations and corpus problems surface
//! here.
//!
//! [`DistanceEngine::verify`]: crate::traits::DistanceEngine::verify

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum DlError {
    /// A reused diagonal table is too small for the pair being compared.
    #[error(
        "diagonal table sized for strings of length {capacity} cannot hold a pair of length {required}"
    )]
    TableTooSmall {
        /// Longest string length in the rejected pair.
        required: usize,
        /// Longest string length the table was built for.
        capacity: usize,
    },

    /// A corpus line could not be parsed.
    #[error("parse error in `{origin}', line {line}: {reason}")]
    Parse {
        /// File name (or other label) of the corpus.
        origin: String,
        /// 1-based line number.
        line: usize,
        reason: String,
    },

    /// A corpus file could not be read.
    #[error("failed to read corpus `{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DlError {
    pub(crate) fn parse(origin: &str, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.to_string(),
            line,
            reason: reason.into(),
        }
    }
}
