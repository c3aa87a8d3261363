// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test plan commands

use super::{reject_unauthorized, resolve_route, trailing_policy};
use crate::error::TgError;
use crate::output::{self, OutputFormat};
use crate::views::{HistoryView, TestRunView};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::time::Duration;
use tg_adapters::{ApiError, DashboardApi};
use tg_core::{RunRoute, TrailingPolicy};
use tokio::time::MissedTickBehavior;

#[derive(Args)]
pub struct PlanArgs {
    #[command(subcommand)]
    pub command: PlanCommand,
}

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Show a test run: status, phases, scenario summary and failed tests
    Show(RunTarget),
    /// Re-render a test run until it finishes
    Watch {
        #[command(flatten)]
        target: RunTarget,
        /// Time between polls
        #[arg(long, default_value = "5s", value_parser = parse_interval)]
        interval: Duration,
    },
    /// List past runs of a test plan
    History {
        /// Test plan id
        plan: String,
    },
}

#[derive(Args)]
pub struct RunTarget {
    /// Test plan id, or a dashboard URL ending in <product>/<pattern>/<view>/<plan-id>
    pub plan: String,
    /// Product shown in the header
    #[arg(long)]
    pub product: Option<String>,
    /// Deployment pattern shown in the header
    #[arg(long)]
    pub pattern: Option<String>,
    /// Show phases after a failed phase as pending instead of done
    #[arg(long)]
    pub strict_phases: bool,
}

impl RunTarget {
    fn resolve(self) -> Result<(RunRoute, TrailingPolicy), TgError> {
        let route = resolve_route(&self.plan, self.product, self.pattern)?;
        Ok((route, trailing_policy(self.strict_phases)))
    }
}

pub async fn handle<A: DashboardApi>(
    api: &A,
    args: PlanArgs,
    format: OutputFormat,
) -> Result<()> {
    match args.command {
        PlanCommand::Show(target) => {
            let (route, trailing) = target.resolve()?;
            let view = load_run_view(api, route, trailing).await?;
            output::print(&view, format)
        }
        PlanCommand::Watch { target, interval } => {
            let (route, trailing) = target.resolve()?;
            watch(api, route, trailing, interval, |view| {
                output::print(view, format)
            })
            .await
        }
        PlanCommand::History { plan } => {
            let plans = api
                .plan_history(&plan)
                .await
                .map_err(|e| plan_error(&plan, e))?;
            output::print(&HistoryView::build(plans), format)
        }
    }
}

/// Parse a poll interval such as `5s` or `1m 30s`; zero is rejected
fn parse_interval(s: &str) -> Result<Duration, String> {
    let every = humantime::parse_duration(s).map_err(|e| e.to_string())?;
    if every.is_zero() {
        return Err("interval must be greater than zero".to_string());
    }
    Ok(every)
}

fn plan_error(id: &str, err: ApiError) -> TgError {
    match err {
        ApiError::NotFound(_) => TgError::plan_not_found(id).with_source(err),
        other => TgError::from(other),
    }
}

/// Fetch everything a test run view needs
///
/// The summary and, for finished plans, the truncated log are fetched
/// together. Only a missing plan or a 401 fails the view.
pub async fn load_run_view<A: DashboardApi>(
    api: &A,
    route: RunRoute,
    trailing: TrailingPolicy,
) -> Result<TestRunView, TgError> {
    let id = route.test_plan_id.clone();
    let plan = api.test_plan(&id).await.map_err(|e| plan_error(&id, e))?;

    let (summary, log) = tokio::join!(api.test_summary(&id), async {
        if plan.status.is_finished() {
            Some(api.test_log(&id, true).await)
        } else {
            None
        }
    });
    let summary = reject_unauthorized(summary)?;
    let log = log.map(reject_unauthorized).transpose()?;

    Ok(TestRunView::build(route, &plan, summary, log, trailing))
}

/// Poll a test run and hand each fresh view to `show` until the plan reaches
/// a terminal status
///
/// Polls never overlap, so every rendered view comes from the latest
/// response. Ctrl-C ends the watch cleanly.
pub async fn watch<A, F>(
    api: &A,
    route: RunRoute,
    trailing: TrailingPolicy,
    every: Duration,
    mut show: F,
) -> Result<()>
where
    A: DashboardApi,
    F: FnMut(&TestRunView) -> Result<()>,
{
    if every.is_zero() {
        return Err(TgError::new("Watch interval must be greater than zero")
            .with_suggestion("Pass a positive interval, e.g. --interval 5s")
            .into());
    }
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let view = tokio::select! {
            _ = &mut ctrl_c => {
                eprintln!("Stopped watching {}", route.test_plan_id);
                return Ok(());
            }
            view = async {
                ticker.tick().await;
                load_run_view(api, route.clone(), trailing).await
            } => view?,
        };

        tracing::debug!(plan = %route.test_plan_id, status = %view.status, "poll");
        show(&view)?;
        if view.status.is_terminal() {
            return Ok(());
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
