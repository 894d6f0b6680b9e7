//! # schemagen-sync
//!
//! Checksum-gated resource synchronizer.
//!
//! Call [`sync`] to bring a metadir up to date against a configured remote
//! origin: each resource is re-downloaded only when its local MD5 digest no
//! longer matches the origin's published `.md5sum` sidecar.

pub mod checksum;
pub mod error;
pub mod update;

mod client;

pub use error::SyncError;
pub use update::{sync, ResourceReport, ResourceStatus};
