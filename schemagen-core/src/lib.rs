//! Schemagen core library — configuration data model, metadir resolution,
//! version marker.
//!
//! Public API surface:
//! - [`config`] — [`Platform`], [`Resource`], [`SyncConfig`]
//! - [`metadir`] — cache directory resolution and version printing
//! - [`error`] — [`CoreError`]

pub mod config;
pub mod error;
pub mod metadir;

pub use config::{Platform, Resource, SyncConfig};
pub use error::CoreError;
