//! `schemagen md5sum` — prepare a resource tree for publishing.
//!
//! Walks the current directory and writes a `.md5sum` sidecar per
//! publishable file, the format the synchronizer's checksum gate reads
//! from the origin.

use anyhow::{Context, Result};
use clap::Args;

use schemagen_sync::checksum::write_sidecars;

/// Arguments for `schemagen md5sum`.
#[derive(Args, Debug)]
pub struct Md5sumArgs {}

impl Md5sumArgs {
    pub fn run(self) -> Result<()> {
        let root = std::env::current_dir().context("could not determine current directory")?;
        let written = write_sidecars(&root);
        println!(
            "✓ wrote {} checksum file(s) under {}",
            written.len(),
            root.display()
        );
        Ok(())
    }
}
