// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario result archive download

use crate::error::TgError;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tg_adapters::{ApiError, DashboardApi};

pub const DOWNLOAD_STARTING: &str = "Download will begin in a moment..";

#[derive(Args)]
pub struct ResultArgs {
    #[command(subcommand)]
    pub command: ResultCommand,
}

#[derive(Subcommand)]
pub enum ResultCommand {
    /// Download the result archive of one scenario
    Download {
        /// Test plan id
        plan: String,
        /// Scenario result directory, as listed in the scenario summary
        scenario_dir: String,
        /// Where to save the archive (default: <scenario-dir>.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn handle<A: DashboardApi>(api: &A, args: ResultArgs) -> Result<()> {
    match args.command {
        ResultCommand::Download {
            plan,
            scenario_dir,
            output,
        } => {
            let path = output.unwrap_or_else(|| default_archive_path(&scenario_dir));
            let bytes = fetch_result(api, &plan, &scenario_dir).await?;
            println!("{}", DOWNLOAD_STARTING);
            save_archive(&bytes, &path)?;
            println!("Saved {} bytes to {}", bytes.len(), path.display());
            Ok(())
        }
    }
}

pub async fn fetch_result<A: DashboardApi>(
    api: &A,
    plan: &str,
    scenario_dir: &str,
) -> Result<Vec<u8>, TgError> {
    api.scenario_result(plan, scenario_dir)
        .await
        .map_err(|err| match err {
            ApiError::Unauthorized { .. } | ApiError::Transport(_) => TgError::from(err),
            other => TgError::result_download(other),
        })
}

/// `<scenario-dir>.zip` in the working directory
pub fn default_archive_path(scenario_dir: &str) -> PathBuf {
    let name: String = scenario_dir
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    PathBuf::from(format!("{}.zip", name))
}

pub fn save_archive(bytes: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
