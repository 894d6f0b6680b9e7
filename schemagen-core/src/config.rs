//! Configuration data model for the resource synchronizer.
//!
//! Everything the synchronizer needs — origin URL, host platform, resource
//! list — travels as one explicit [`SyncConfig`] value. The resource list is
//! ordinary data: each [`Resource`] knows its own name and whether it is an
//! executable (and therefore platform-suffixed).

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Built-in remote origin, used when neither the CLI nor the environment
/// overrides it.
pub const DEFAULT_ORIGIN: &str = "http://obase.github.io";

/// Environment variable overriding [`DEFAULT_ORIGIN`].
pub const ORIGIN_ENV: &str = "SCHEMAGEN_ORIGIN";

/// URL path segment under which all resources are published.
pub const REMOTE_ROOT: &str = "schemagen";

/// Logical name of the schema compiler binary.
pub const COMPILER_NAME: &str = "protoc";

/// Logical name of the generator plugin binary.
pub const PLUGIN_NAME: &str = "protoc-gen-api";

/// Logical name of the plain-text version marker.
pub const VERSION_MARKER: &str = "version";

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Host platform identity: the OS segment used in remote URLs and the
/// executable suffix appended to binary resources.
///
/// [`Platform::host`] captures the running platform; the plain constructor
/// exists so suffix rules for any platform can be exercised from any host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub os: String,
    pub exe_suffix: String,
}

impl Platform {
    /// The platform this process is running on.
    pub fn host() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            exe_suffix: env::consts::EXE_SUFFIX.to_string(),
        }
    }

    pub fn new(os: impl Into<String>, exe_suffix: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            exe_suffix: exe_suffix.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// A named artifact tracked by the synchronizer.
///
/// Identity is the `name`, stable across runs. Names may contain `/`
/// separators (shared schema files mirror their remote subpaths into the
/// metadir). The local path is a pure function of name and platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    /// Executables gain the platform suffix (`.exe` on Windows) in both the
    /// remote URL and the local path.
    pub executable: bool,
}

impl Resource {
    /// An executable artifact (compiler or plugin binary).
    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            executable: true,
        }
    }

    /// A plain data artifact (version marker, shared schema file).
    pub fn data(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            executable: false,
        }
    }

    /// The platform-suffixed file name, still `/`-separated.
    pub fn file_name(&self, platform: &Platform) -> String {
        if self.executable && !platform.exe_suffix.is_empty() {
            format!("{}{}", self.name, platform.exe_suffix)
        } else {
            self.name.clone()
        }
    }

    /// `<origin>/schemagen/<os>/<name>[.exe]`
    pub fn remote_url(&self, origin: &str, platform: &Platform) -> String {
        format!(
            "{}/{}/{}/{}",
            origin.trim_end_matches('/'),
            REMOTE_ROOT,
            platform.os,
            self.file_name(platform)
        )
    }

    /// Location inside the metadir, mirroring any `/` subpaths in the name.
    pub fn local_path(&self, metadir: &Path, platform: &Platform) -> PathBuf {
        let mut path = metadir.to_path_buf();
        for segment in self.file_name(platform).split('/') {
            path.push(segment);
        }
        path
    }
}

// ---------------------------------------------------------------------------
// SyncConfig
// ---------------------------------------------------------------------------

/// Explicit configuration for one synchronizer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Remote base URL, no trailing slash required.
    pub origin: String,
    pub platform: Platform,
    /// Synced in order, one at a time.
    pub resources: Vec<Resource>,
}

impl SyncConfig {
    /// Host-platform config with the built-in resource set and the origin
    /// taken from `SCHEMAGEN_ORIGIN` (falling back to [`DEFAULT_ORIGIN`]).
    pub fn from_env() -> Self {
        Self::with_origin(origin_from(env::var(ORIGIN_ENV).ok()))
    }

    /// Host-platform config with an explicit origin (CLI override).
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            platform: Platform::host(),
            resources: Self::default_resources(),
        }
    }

    /// The artifacts a populated metadir contains: compiler, plugin,
    /// version marker, and the shared schema files.
    pub fn default_resources() -> Vec<Resource> {
        vec![
            Resource::binary(COMPILER_NAME),
            Resource::binary(PLUGIN_NAME),
            Resource::data(VERSION_MARKER),
            Resource::data("github.com/obase/api/x.proto"),
            Resource::data("google/protobuf/descriptor.proto"),
        ]
    }
}

/// Origin selection, split out from the environment read for testability.
fn origin_from(env_value: Option<String>) -> String {
    match env_value {
        Some(origin) if !origin.is_empty() => origin,
        _ => DEFAULT_ORIGIN.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
