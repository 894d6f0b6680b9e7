//! Error types for schemagen-gen.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// All errors that can arise from a single schema file's generation step.
///
/// The batch loop in [`crate::runner::generate`] logs each failure, records
/// it in the file's report, and continues with the next schema file.
#[derive(Debug, Error)]
pub enum GenError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compiler process could not be launched at all.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compiler ran but reported failure.
    #[error("compiler exited with {status}")]
    CompilerFailed { status: ExitStatus },
}

/// Convenience constructor for [`GenError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenError {
    GenError::Io {
        path: path.into(),
        source,
    }
}
