//! Error types for schemagen-sync.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from synchronizer operations.
///
/// None of these escape [`crate::sync`](crate::update::sync): the batch loop
/// logs each failure, records it in the resource's report, and continues.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport failure or non-2xx status for a GET. `ureq` folds both into
    /// one error type; boxed because it is large.
    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The response body could not be read to completion.
    #[error("reading body of {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`SyncError::Http`].
pub(crate) fn http_err(url: impl Into<String>, source: ureq::Error) -> SyncError {
    SyncError::Http {
        url: url.into(),
        source: Box::new(source),
    }
}
