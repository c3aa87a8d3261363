// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tg - TestGrid dashboard client

mod commands;
mod error;
mod output;
mod views;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{log, phases, plan, result, scenario};
use error::TgError;
use output::OutputFormat;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tg_adapters::{HttpDashboardApi, TracedDashboardApi};
use tg_core::DashboardConfig;

#[derive(Parser)]
#[command(
    name = "tg",
    version,
    about = "TestGrid dashboard client - test runs, phases and results in the terminal"
)]
struct Cli {
    /// Config file (default: $TG_CONFIG, then ~/.config/tg/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dashboard base URL, overriding the config
    #[arg(long, global = true)]
    url: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test plan runs
    Plan(plan::PlanArgs),
    /// Test scenarios and their test cases
    Scenario(scenario::ScenarioArgs),
    /// Print or save a test run log
    Log(log::LogArgs),
    /// Scenario result archives
    Result(result::ResultArgs),
    /// Render a phase pipeline without contacting the server
    Phases(phases::PhasesArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", error::report(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        url,
        format,
        command,
        ..
    } = cli;

    match command {
        Commands::Phases(args) => phases::handle(args, format),
        Commands::Plan(args) => {
            let api = connect(config.as_deref(), url)?;
            plan::handle(&api, args, format).await
        }
        Commands::Scenario(args) => {
            let api = connect(config.as_deref(), url)?;
            scenario::handle(&api, args, format).await
        }
        Commands::Log(args) => {
            let api = connect(config.as_deref(), url)?;
            log::handle(&api, args, format).await
        }
        Commands::Result(args) => {
            let api = connect(config.as_deref(), url)?;
            result::handle(&api, args).await
        }
    }
}

/// Build the traced HTTP client from config, environment and flags
fn connect(
    config_path: Option<&Path>,
    url: Option<String>,
) -> Result<TracedDashboardApi<HttpDashboardApi>, TgError> {
    let mut config = DashboardConfig::load(config_path).map_err(TgError::from)?;
    if let Some(url) = url {
        config.set_base_url(url).map_err(TgError::from)?;
    }
    tracing::debug!(
        url = %config.base_url,
        context = %config.context,
        timeout = %humantime::format_duration(config.timeout),
        authenticated = config.token.is_some(),
        "dashboard config"
    );
    let api = HttpDashboardApi::new(&config).map_err(TgError::from)?;
    Ok(TracedDashboardApi::new(api))
}

fn setup_logging(verbose: bool) {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // API failures are reported as TgError; their log lines need -v or RUST_LOG
    let default = if verbose { "debug" } else { "warn,tg_adapters=off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}
