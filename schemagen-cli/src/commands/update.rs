//! `schemagen update` — sync the metadir against the remote origin.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use schemagen_core::SyncConfig;
use schemagen_sync::{sync, ResourceReport, ResourceStatus};

/// Arguments for `schemagen update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Remote origin base URL (overrides SCHEMAGEN_ORIGIN and the built-in
    /// default).
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl UpdateArgs {
    pub fn run(self, metadir: &Path) -> Result<()> {
        let config = match self.origin {
            Some(origin) => SyncConfig::with_origin(origin),
            None => SyncConfig::from_env(),
        };
        let reports = sync(metadir, &config);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
            return Ok(());
        }

        print_reports(metadir, &reports);
        Ok(())
    }
}

fn print_reports(metadir: &Path, reports: &[ResourceReport]) {
    let downloaded = reports
        .iter()
        .filter(|r| r.status == ResourceStatus::Downloaded)
        .count();
    let current = reports
        .iter()
        .filter(|r| r.status == ResourceStatus::UpToDate)
        .count();
    let failed = reports.len() - downloaded - current;

    println!(
        "✓ '{}' updated ({downloaded} downloaded, {current} up-to-date, {failed} failed)",
        metadir.display()
    );
    for report in reports {
        match &report.status {
            ResourceStatus::Downloaded => println!("  ✎  {}", report.name),
            ResourceStatus::UpToDate => println!("  ·  {}", report.name),
            ResourceStatus::Failed { reason } => println!("  ✗  {} — {reason}", report.name),
        }
    }
}
