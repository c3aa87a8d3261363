// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Offline phase pipeline rendering

use super::trailing_policy;
use crate::error::TgError;
use crate::output::{self, OutputFormat};
use crate::views::PhaseLine;
use anyhow::Result;
use clap::Args;
use tg_core::{PhaseToken, Status};

#[derive(Args)]
pub struct PhasesArgs {
    /// Plan status (SUCCESS, FAIL, RUNNING, PENDING, ERROR, INCOMPLETE, DID_NOT_RUN)
    #[arg(long, value_parser = parse_status)]
    pub outcome: Status,
    /// Current phase token, e.g. DEPLOY_STARTED
    #[arg(long)]
    pub token: Option<String>,
    /// Show phases after a failed phase as pending instead of done
    #[arg(long)]
    pub strict_phases: bool,
}

fn parse_status(s: &str) -> Result<Status, String> {
    match Status::parse(s) {
        Status::Unknown => Err(format!("unknown status '{}'", s)),
        status => Ok(status),
    }
}

pub fn handle(args: PhasesArgs, format: OutputFormat) -> Result<()> {
    let line = render(&args)?;
    output::print(&line, format)
}

pub fn render(args: &PhasesArgs) -> Result<PhaseLine, TgError> {
    let token = args.token.as_deref().map(PhaseToken::parse);
    PhaseLine::render(
        args.outcome.outcome(),
        token.as_ref(),
        trailing_policy(args.strict_phases),
    )
    .map_err(TgError::phase_token_required)
}

#[cfg(test)]
#[path = "phases_tests.rs"]
mod tests;
