//! Error types for rollcall-report.

use std::path::PathBuf;

use thiserror::Error;

use rollcall_core::SourceError;

/// All errors that can arise while collecting or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A membership source failed while the report was being collected.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// CSV encoding or write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Output I/O failure, with annotated path when one is known.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two matrix rows would share a name (a board called `google` or `trello`).
    #[error("duplicate report row '{0}'")]
    DuplicateRow(String),

    /// A member name equals the leading `name` header column.
    #[error("member '{0}' collides with the CSV name column")]
    ReservedColumn(String),
}

/// Convenience constructor for [`ReportError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.into(),
        source,
    }
}
