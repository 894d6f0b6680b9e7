//! Metadir resolution and the version marker.
//!
//! The metadir is a persistent cache directory next to the running
//! executable. It is created by the synchronizer on first update, mutated
//! only by the synchronizer, and read by the generation orchestrator.
//!
//! # API pattern
//!
//! - `metadir_at(exe_dir)` — pure; used in tests with `TempDir`
//! - `resolve_metadir()` — derives the location from `current_exe()`

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::VERSION_MARKER;
use crate::error::{io_err, CoreError};

/// Directory name of the cache, relative to the executable's directory.
pub const METADIR_NAME: &str = ".schemagen";

/// `<exe_dir>/.schemagen` — pure, no I/O.
pub fn metadir_at(exe_dir: &Path) -> PathBuf {
    exe_dir.join(METADIR_NAME)
}

/// Metadir location for the running executable.
pub fn resolve_metadir() -> Result<PathBuf, CoreError> {
    let exe = std::env::current_exe().map_err(CoreError::ExePath)?;
    let dir = exe.parent().unwrap_or(Path::new("."));
    Ok(metadir_at(dir))
}

/// Stream the metadir's version marker to `out` verbatim, plus a trailing
/// newline.
pub fn print_version(metadir: &Path, out: &mut impl Write) -> Result<(), CoreError> {
    let path = metadir.join(VERSION_MARKER);
    let mut file = File::open(&path).map_err(|e| io_err(&path, e))?;
    io::copy(&mut file, out).map_err(|e| io_err(&path, e))?;
    writeln!(out).map_err(|e| io_err(&path, e))?;
    Ok(())
}
