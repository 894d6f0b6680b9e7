//! MD5 content checksums.
//!
//! The remote protocol publishes a `<url>.md5sum` sidecar per artifact,
//! holding the lowercase hex digest of the artifact body. Local validity is
//! decided by comparing that text against the digest of the cached file.
//! Comparison by content digest rather than timestamps keeps the gate
//! immune to clock skew and proxy caching differences.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use walkdir::WalkDir;

use crate::error::{io_err, SyncError};

/// Sidecar extension carrying an artifact's published digest.
pub const SIDECAR_SUFFIX: &str = ".md5sum";

/// Lowercase hex MD5 digest of the file's contents, streamed.
pub fn md5_hex(path: &Path) -> Result<String, SyncError> {
    let mut file = File::open(path).map_err(|e| io_err(path, e))?;
    let mut hasher = Md5::new();
    io::copy(&mut file, &mut hasher).map_err(|e| io_err(path, e))?;
    Ok(hex::encode(hasher.finalize()))
}

/// Write `<path>.md5sum` next to `path`, holding its digest.
pub fn write_sidecar(path: &Path) -> Result<PathBuf, SyncError> {
    let digest = md5_hex(path)?;
    let sidecar = PathBuf::from(format!("{}{}", path.display(), SIDECAR_SUFFIX));
    std::fs::write(&sidecar, &digest).map_err(|e| io_err(&sidecar, e))?;
    Ok(sidecar)
}

/// Generate checksum sidecars for every publishable file under `root`.
///
/// Used when preparing a resource tree for an origin server. Hidden entries
/// and existing `.md5sum` files are skipped; per-file failures are logged
/// and the walk continues. Returns the sidecars written.
pub fn write_sidecars(root: &Path) -> Vec<PathBuf> {
    let mut written = Vec::new();
    // The root itself is exempt from the hidden-name rule; only entries
    // below it are filtered.
    let walk = WalkDir::new(root).into_iter().filter_entry(|entry| {
        entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
    });
    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable entry under {}: {err}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(SIDECAR_SUFFIX) {
            continue;
        }
        match write_sidecar(entry.path()) {
            Ok(sidecar) => {
                tracing::debug!("wrote {}", sidecar.display());
                written.push(sidecar);
            }
            Err(err) => tracing::warn!("checksum failed: {}: {err}", entry.path().display()),
        }
    }
    written
}
