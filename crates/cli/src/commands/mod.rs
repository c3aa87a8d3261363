// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod log;
pub mod phases;
pub mod plan;
pub mod result;
pub mod scenario;

use crate::error::TgError;
use tg_adapters::ApiError;
use tg_core::{RunRoute, TrailingPolicy};

/// `--strict-phases` selects the pending rendering for trailing phases
pub fn trailing_policy(strict: bool) -> TrailingPolicy {
    if strict {
        TrailingPolicy::Pending
    } else {
        TrailingPolicy::AssumeDone
    }
}

/// Resolve a plan argument: a bare test plan id or a dashboard page URL
///
/// Explicit `product`/`pattern` values win over those found in the URL.
pub fn resolve_route(
    plan: &str,
    product: Option<String>,
    pattern: Option<String>,
) -> Result<RunRoute, TgError> {
    let mut route = if plan.contains('/') {
        RunRoute::parse(plan).map_err(|e| {
            TgError::new(e.to_string())
                .with_suggestion("Pass the test plan id on its own instead of the URL")
                .with_source(e)
        })?
    } else {
        RunRoute::new("", "", plan)
    };
    if let Some(product) = product {
        route.product = product;
    }
    if let Some(pattern) = pattern {
        route.deployment_pattern = pattern;
    }
    Ok(route)
}

/// Let a 401 abort the command while other failures are handled in place
pub fn reject_unauthorized<T>(
    result: Result<T, ApiError>,
) -> Result<Result<T, ApiError>, TgError> {
    match result {
        Err(ApiError::Unauthorized { login_url }) => Err(TgError::unauthorized(&login_url)),
        other => Ok(other),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
