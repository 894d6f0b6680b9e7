//! Blocking HTTP client for the remote resource protocol.
//!
//! Plain GETs against `<origin>/schemagen/<os>/<name>[.exe]` and the same
//! URL with `.md5sum` appended. One agent per sync run; every call blocks
//! until complete.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::Duration;

use crate::checksum::SIDECAR_SUFFIX;
use crate::error::{http_err, io_err, SyncError};

pub(crate) fn http_agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(10))
        .timeout_read(Duration::from_secs(300))
        .build()
}

/// Fetch the published digest for `url`, trimmed of surrounding whitespace.
///
/// Any transport error or non-2xx status means "cannot verify" to the
/// caller, which re-downloads rather than trusting a stale copy.
pub(crate) fn fetch_remote_checksum(agent: &ureq::Agent, url: &str) -> Result<String, SyncError> {
    let sidecar_url = format!("{url}{SIDECAR_SUFFIX}");
    let response = agent
        .get(&sidecar_url)
        .call()
        .map_err(|e| http_err(&sidecar_url, e))?;
    let text = response.into_string().map_err(|e| SyncError::Body {
        url: sidecar_url,
        source: e,
    })?;
    Ok(text.trim().to_string())
}

/// GET `url` and stream the body into a freshly created/truncated `dest`,
/// creating parent directories as needed.
///
/// A failed stream leaves the partial file in place; the checksum gate
/// classifies it as invalid on the next update.
pub(crate) fn download(agent: &ureq::Agent, url: &str, dest: &Path) -> Result<(), SyncError> {
    let response = agent.get(url).call().map_err(|e| http_err(url, e))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    let mut file = File::create(dest).map_err(|e| io_err(dest, e))?;
    io::copy(&mut response.into_reader(), &mut file).map_err(|e| io_err(dest, e))?;
    Ok(())
}
