// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a report run. Nothing in the pipeline recovers
/// locally; the first error surfaces to the caller.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Network/HTTP failure, or the local feed file could not be read.
    #[error("fetching feed from {source_name} failed: {detail}")]
    Fetch { source_name: String, detail: String },

    /// The feed text is not well-formed XML.
    #[error("malformed feed XML: {0}")]
    Parse(String),

    /// A required field is absent from a listing.
    #[error("listing #{index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// DateListed does not match `YYYY-MM-DD HH:MM:SS`.
    #[error("listing #{index}: DateListed `{value}` is not in YYYY-MM-DD HH:MM:SS format")]
    DateFormat { index: usize, value: String },

    /// The report destination could not be written.
    #[error("writing report to {} failed: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub(crate) fn fetch(source_name: impl Into<String>, detail: impl ToString) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            detail: detail.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
