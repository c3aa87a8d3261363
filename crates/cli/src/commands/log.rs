// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test run log download

use super::resolve_route;
use crate::error::TgError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tg_adapters::{ApiError, DashboardApi};
use tg_core::LogContent;

pub const DEFAULT_LOG_FILE: &str = "test-run.log";

#[derive(Args)]
pub struct LogArgs {
    /// Test plan id or dashboard URL
    pub plan: String,
    /// Fetch the complete log instead of the server-truncated tail
    #[arg(long)]
    pub full: bool,
    /// Save to a file instead of printing (default name: test-run.log)
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_LOG_FILE)]
    pub output: Option<PathBuf>,
}

pub async fn handle<A: DashboardApi>(api: &A, args: LogArgs, format: OutputFormat) -> Result<()> {
    let id = resolve_route(&args.plan, None, None)?.test_plan_id;
    let log = fetch_log(api, &id, args.full).await?;

    match &args.output {
        Some(path) => {
            save_log(&log, path)?;
            println!(
                "Saved {} bytes to {}",
                log.input_stream_content.len(),
                path.display()
            );
        }
        None => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&log)?),
            OutputFormat::Text => {
                print!("{}", log.input_stream_content);
                if !log.input_stream_content.ends_with('\n') {
                    println!();
                }
            }
        },
    }

    if let Some(note) = truncation_note(&log) {
        eprintln!("{}", note);
    }
    Ok(())
}

/// Fetch a plan's log, checking first that the server has one
pub async fn fetch_log<A: DashboardApi>(
    api: &A,
    id: &str,
    full: bool,
) -> Result<LogContent, TgError> {
    let download_error = |err: ApiError| match err {
        ApiError::Unauthorized { .. } => TgError::from(err),
        other => TgError::log_download(id, other),
    };

    let exists = api.log_exists(id).await.map_err(download_error)?;
    if !exists {
        return Err(download_error(ApiError::NotFound(format!(
            "no test run log is stored for '{}'",
            id
        ))));
    }
    api.test_log(id, !full).await.map_err(download_error)
}

pub fn save_log(log: &LogContent, path: &Path) -> Result<()> {
    std::fs::write(path, &log.input_stream_content)
        .with_context(|| format!("failed to write {}", path.display()))
}

pub fn truncation_note(log: &LogContent) -> Option<String> {
    if !log.truncated {
        return None;
    }
    Some(match log.complete_input_stream_size {
        Some(total) => format!(
            "note: log truncated ({} bytes total); pass --full for the complete log",
            total
        ),
        None => "note: log truncated; pass --full for the complete log".to_string(),
    })
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
