//! Generation orchestration — the per-file action loop.
//!
//! Discovery ([`crate::scan`]) is pure; this module performs the side
//! effects: stale-output deletion and the compiler subprocess, or, in print
//! mode, a single combined command line with no side effects at all.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

use schemagen_core::Platform;

use crate::error::{io_err, GenError};
use crate::invocation::{split_ipaths, Invocation};
use crate::scan::{scan, SchemaFile};

// ---------------------------------------------------------------------------
// Modes and reports
// ---------------------------------------------------------------------------

/// What to do with the constructed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMode {
    /// Delete stale outputs and run the compiler once per schema file.
    Execute,
    /// Print one reusable batch command line; no deletion, no subprocess.
    Print,
}

/// Outcome of one schema file in execute mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Generated,
    Failed { reason: String },
}

/// Per-file summary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub schema: String,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenSummary {
    pub schema_dir: PathBuf,
    /// The combined batch command (print mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Per-file outcomes (execute mode only).
    pub files: Vec<FileReport>,
}

impl GenSummary {
    fn empty(schema_dir: PathBuf) -> Self {
        Self {
            schema_dir,
            command: None,
            files: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

/// Drive the compiler over every schema file under `<parent>/api`.
///
/// Requires a populated metadir (no validation here beyond what the
/// subprocess itself reports). An absent schema directory is a normal
/// no-op, not an error. Per-file failures are logged and recorded; the
/// loop never short-circuits.
pub fn generate(metadir: &Path, parent: &Path, ipaths: &str, mode: GenMode) -> GenSummary {
    let schema_dir = parent.join("api");
    tracing::info!("path: {}, scanning......", schema_dir.display());
    if !schema_dir.is_dir() {
        return GenSummary::empty(schema_dir);
    }

    let schemas = scan(&schema_dir);
    let mut invocation = Invocation::build(
        metadir,
        &schema_dir,
        &split_ipaths(ipaths),
        &Platform::host(),
    );

    match mode {
        GenMode::Print => GenSummary {
            command: Some(invocation.batch_command_line(&schemas)),
            schema_dir,
            files: Vec::new(),
        },
        GenMode::Execute => {
            let mut files = Vec::with_capacity(schemas.len());
            for schema in &schemas {
                let status = match generate_one(&mut invocation, schema) {
                    Ok(()) => FileStatus::Generated,
                    Err(err) => {
                        tracing::error!("generate failed: {}, err={err}", schema.rel);
                        FileStatus::Failed {
                            reason: err.to_string(),
                        }
                    }
                };
                files.push(FileReport {
                    schema: schema.rel.clone(),
                    status,
                });
            }
            GenSummary {
                schema_dir,
                command: None,
                files,
            }
        }
    }
}

/// Delete the stale output, then run the compiler for one schema file with
/// standard streams inherited so its diagnostics are visible unmodified.
fn generate_one(invocation: &mut Invocation, schema: &SchemaFile) -> Result<(), GenError> {
    remove_stale_output(schema)?;

    tracing::info!("file: {}, generating......", schema.rel);
    invocation.set_schema(&schema.rel);
    let status = Command::new(invocation.program())
        .args(invocation.args())
        .status()
        .map_err(|e| GenError::Launch {
            program: invocation.program().to_path_buf(),
            source: e,
        })?;
    if !status.success() {
        return Err(GenError::CompilerFailed { status });
    }
    Ok(())
}

/// Remove a previously generated output so no stale file survives a schema
/// rename or removal the generator would not clean up itself. Runs before
/// the compiler, regardless of whether the compiler then succeeds.
fn remove_stale_output(schema: &SchemaFile) -> Result<(), GenError> {
    let output = schema.output_path();
    match std::fs::remove_file(&output) {
        Ok(()) => {
            tracing::debug!("removed stale output: {}", output.display());
            Ok(())
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(io_err(output, err)),
    }
}
