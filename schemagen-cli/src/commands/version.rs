//! `schemagen version` — print the cached toolchain's version marker.

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Args;

use schemagen_core::metadir::print_version;

/// Arguments for `schemagen version`.
#[derive(Args, Debug)]
pub struct VersionArgs {}

impl VersionArgs {
    pub fn run(self, metadir: &Path) -> Result<()> {
        let mut stdout = io::stdout();
        if print_version(metadir, &mut stdout).is_err() {
            println!("no version marker at {}", metadir.display());
            println!("please run `schemagen update` to create it");
        }
        Ok(())
    }
}
