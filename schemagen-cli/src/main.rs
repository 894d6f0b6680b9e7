//! Schemagen — schema toolchain cache and code-generation launcher.
//!
//! # Usage
//!
//! ```text
//! schemagen update [--origin <url>] [--json]
//! schemagen generate [--parent <dir>] [--ipaths <a,b,c>] [--print] [--json]
//! schemagen version
//! schemagen md5sum
//! ```
//!
//! All commands exit 0; failures are reported through log lines and the
//! printed summaries so a batch run always makes maximal forward progress.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{
    generate::GenerateArgs, md5sum::Md5sumArgs, update::UpdateArgs, version::VersionArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "schemagen",
    version,
    about = "Sync the schema compiler toolchain and drive code generation",
    long_about = None,
)]
struct Cli {
    /// Override the resource cache directory (defaults to `.schemagen`
    /// next to the executable).
    #[arg(long, global = true, value_name = "DIR")]
    metadir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch or refresh the compiler toolchain and shared schemas.
    Update(UpdateArgs),

    /// Regenerate source from every schema file under `<parent>/api`.
    Generate(GenerateArgs),

    /// Print the cached toolchain's version marker.
    Version(VersionArgs),

    /// Write `.md5sum` sidecars for publishing a resource tree.
    Md5sum(Md5sumArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let metadir = match cli.metadir {
        Some(dir) => dir,
        None => schemagen_core::metadir::resolve_metadir()
            .context("could not resolve the metadir location")?,
    };

    match cli.command {
        Commands::Update(args) => args.run(&metadir),
        Commands::Generate(args) => args.run(&metadir),
        Commands::Version(args) => args.run(&metadir),
        Commands::Md5sum(args) => args.run(),
    }
}
