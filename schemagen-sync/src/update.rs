//! Resource synchronization — the checksum-gated update loop.
//!
//! ## Per-resource protocol
//!
//! 1. No local copy → invalid.
//! 2. Otherwise GET `<url>.md5sum`; unreachable or non-2xx → invalid
//!    (fail toward freshness, not toward avoiding work).
//! 3. Remote digest equals the local file's MD5 → valid, skip.
//! 4. Invalid → GET the artifact and stream it over the local copy.
//!
//! Resources are independent: a failure is logged, recorded in that
//! resource's report, and the loop continues. [`sync`] itself never fails.

use std::path::Path;

use serde::Serialize;

use schemagen_core::{Resource, SyncConfig};

use crate::checksum;
use crate::client::{self, download, fetch_remote_checksum};
use crate::error::SyncError;

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Outcome of syncing a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResourceStatus {
    /// Local digest matches the published checksum; nothing fetched.
    UpToDate,
    /// The artifact body was fetched and written.
    Downloaded,
    /// This resource was abandoned for the run.
    Failed { reason: String },
}

/// Per-resource summary of one update run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceReport {
    pub name: String,
    #[serde(flatten)]
    pub status: ResourceStatus,
}

// ---------------------------------------------------------------------------
// sync
// ---------------------------------------------------------------------------

/// Bring the metadir up to date against `config`'s origin.
///
/// Creates the metadir if absent. Processes resources strictly in order,
/// one at a time. Never fails the overall process: all failures surface in
/// the returned reports and the log.
pub fn sync(metadir: &Path, config: &SyncConfig) -> Vec<ResourceReport> {
    if let Err(err) = std::fs::create_dir_all(metadir) {
        tracing::error!("mkdir metadir failed: {}: {err}", metadir.display());
        return Vec::new();
    }

    let agent = client::http_agent();
    let mut reports = Vec::with_capacity(config.resources.len());
    for resource in &config.resources {
        let status = match sync_resource(&agent, config, metadir, resource) {
            Ok(status) => status,
            Err(err) => {
                tracing::error!("sync failed: {}: {err}", resource.name);
                ResourceStatus::Failed {
                    reason: err.to_string(),
                }
            }
        };
        reports.push(ResourceReport {
            name: resource.name.clone(),
            status,
        });
    }
    reports
}

fn sync_resource(
    agent: &ureq::Agent,
    config: &SyncConfig,
    metadir: &Path,
    resource: &Resource,
) -> Result<ResourceStatus, SyncError> {
    let url = resource.remote_url(&config.origin, &config.platform);
    let path = resource.local_path(metadir, &config.platform);

    if is_current(agent, &url, &path) {
        tracing::debug!("up to date: {}", path.display());
        return Ok(ResourceStatus::UpToDate);
    }

    tracing::info!("download {} to {}, waiting......", url, path.display());
    download(agent, &url, &path)?;
    if resource.executable {
        mark_executable(&path)?;
    }
    Ok(ResourceStatus::Downloaded)
}

/// The checksum gate. A local copy is current only when the published
/// digest is retrievable and equal to the local file's digest.
fn is_current(agent: &ureq::Agent, url: &str, path: &Path) -> bool {
    if !path.exists() {
        return false;
    }
    let remote = match fetch_remote_checksum(agent, url) {
        Ok(digest) => digest,
        Err(err) => {
            tracing::debug!("cannot verify remote checksum: {err}");
            return false;
        }
    };
    match checksum::md5_hex(path) {
        Ok(local) => local == remote,
        Err(err) => {
            tracing::debug!("cannot checksum local copy: {err}");
            false
        }
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<(), SyncError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| crate::error::io_err(path, e))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<(), SyncError> {
    Ok(())
}
