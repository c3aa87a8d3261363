// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test scenario commands

use crate::error::TgError;
use crate::output::{self, OutputFormat};
use crate::views::TestCaseView;
use anyhow::Result;
use clap::{Args, Subcommand};
use tg_adapters::{ApiError, DashboardApi};

#[derive(Args)]
pub struct ScenarioArgs {
    #[command(subcommand)]
    pub command: ScenarioCommand,
}

#[derive(Subcommand)]
pub enum ScenarioCommand {
    /// Show the test cases of a scenario
    Show {
        /// Test scenario id
        id: String,
        /// Product shown in the heading
        #[arg(long)]
        product: Option<String>,
        /// Deployment pattern shown in the heading
        #[arg(long)]
        pattern: Option<String>,
    },
}

pub async fn handle<A: DashboardApi>(
    api: &A,
    args: ScenarioArgs,
    format: OutputFormat,
) -> Result<()> {
    match args.command {
        ScenarioCommand::Show {
            id,
            product,
            pattern,
        } => {
            let context = [
                product.as_deref().unwrap_or_default(),
                pattern.as_deref().unwrap_or_default(),
            ];
            let view = load_case_view(api, &id, &context).await?;
            output::print(&view, format)
        }
    }
}

pub async fn load_case_view<A: DashboardApi>(
    api: &A,
    id: &str,
    context: &[&str],
) -> Result<TestCaseView, TgError> {
    let scenario = api.test_scenario(id).await.map_err(|e| match e {
        ApiError::NotFound(_) => TgError::new(format!("Test scenario '{}' not found", id))
            .with_suggestion("Scenario ids are listed by the dashboard's scenario pages")
            .with_source(e),
        other => TgError::from(other),
    })?;
    Ok(TestCaseView::build(context, &scenario))
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
