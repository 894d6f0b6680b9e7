//! The reusable compiler invocation.
//!
//! Built once per run; every argument except the trailing schema slot is
//! identical for all files processed in that run. The slot is overwritten
//! per file rather than rebuilding the list, which also pins the argument
//! order.

use std::path::{Path, PathBuf};

use schemagen_core::{
    config::{COMPILER_NAME, PLUGIN_NAME},
    Platform, Resource,
};

use crate::scan::SchemaFile;

/// Reusable argument list for one generation run.
///
/// Layout, in order:
/// 1. `--plugin=protoc-gen-api=<metadir>/protoc-gen-api[.exe]`
/// 2. `--api_out=plugins=grpc+apix:<schema_dir>`
/// 3. one `--proto_path=<p>` per extra include path
/// 4. `--proto_path=<metadir>`
/// 5. `--proto_path=<schema_dir>`
/// 6. the per-file schema slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<String>,
    schema_slot: usize,
}

impl Invocation {
    pub fn build(
        metadir: &Path,
        schema_dir: &Path,
        ipaths: &[String],
        platform: &Platform,
    ) -> Self {
        let program = Resource::binary(COMPILER_NAME).local_path(metadir, platform);
        let plugin = Resource::binary(PLUGIN_NAME).local_path(metadir, platform);

        let mut args = Vec::with_capacity(ipaths.len() + 4);
        args.push(format!("--plugin={}={}", PLUGIN_NAME, plugin.display()));
        args.push(format!("--api_out=plugins=grpc+apix:{}", schema_dir.display()));
        for ipath in ipaths {
            args.push(format!("--proto_path={ipath}"));
        }
        args.push(format!("--proto_path={}", metadir.display()));
        args.push(format!("--proto_path={}", schema_dir.display()));

        let schema_slot = args.len();
        args.push(String::new());
        Self {
            program,
            args,
            schema_slot,
        }
    }

    /// Overwrite the trailing slot with one schema file's relative path.
    pub fn set_schema(&mut self, rel: &str) {
        self.args[self.schema_slot] = rel.to_string();
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The full argument list, including the current schema slot.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Everything before the schema slot — constant across a run.
    pub fn fixed_args(&self) -> &[String] {
        &self.args[..self.schema_slot]
    }

    /// One copy-pasteable command line covering every discovered schema
    /// file (print mode).
    pub fn batch_command_line(&self, schemas: &[SchemaFile]) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.fixed_args().iter().cloned());
        parts.extend(schemas.iter().map(|s| s.rel.clone()));
        parts.join(" ")
    }
}

/// Split a comma-separated include-path list, dropping empty segments.
pub fn split_ipaths(ipaths: &str) -> Vec<String> {
    ipaths
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
