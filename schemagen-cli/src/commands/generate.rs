//! `schemagen generate` — drive the compiler over the schema tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use schemagen_gen::{generate, FileStatus, GenMode, GenSummary};

/// Arguments for `schemagen generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Parent directory holding the `api` schema tree (defaults to the
    /// current directory).
    #[arg(long, value_name = "DIR")]
    pub parent: Option<PathBuf>,

    /// Extra include paths, comma-separated.
    #[arg(long, value_name = "PATHS", default_value = "")]
    pub ipaths: String,

    /// Print one reusable batch command line instead of executing the
    /// compiler.
    #[arg(long)]
    pub print: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn run(self, metadir: &Path) -> Result<()> {
        if !metadir.is_dir() {
            println!("missing metadir: {}", metadir.display());
            println!("please run `schemagen update` to create it");
            return Ok(());
        }

        let parent = match self.parent {
            Some(dir) => dir,
            None => std::env::current_dir().context("could not determine current directory")?,
        };
        let mode = if self.print {
            GenMode::Print
        } else {
            GenMode::Execute
        };
        let summary = generate(metadir, &parent, &self.ipaths, mode);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        print_summary(&summary);
        Ok(())
    }
}

fn print_summary(summary: &GenSummary) {
    if let Some(command) = &summary.command {
        println!("{command}");
        return;
    }

    if summary.files.is_empty() {
        println!("✓ no schema files under {}", summary.schema_dir.display());
        return;
    }

    let generated = summary
        .files
        .iter()
        .filter(|f| f.status == FileStatus::Generated)
        .count();
    let failed = summary.files.len() - generated;
    println!(
        "✓ '{}' processed ({generated} generated, {failed} failed)",
        summary.schema_dir.display()
    );
    for file in &summary.files {
        match &file.status {
            FileStatus::Generated => println!("  ✎  {}", file.schema),
            FileStatus::Failed { reason } => println!("  ✗  {} — {reason}", file.schema),
        }
    }
}
