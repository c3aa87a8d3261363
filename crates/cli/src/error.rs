// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors as `tg` prints them on stderr
//!
//! Dashboard and configuration failures are turned into a [`TgError`]: a
//! one-line message in the dashboard's own wording, `->` lines with the
//! underlying cause, and numbered suggestions. `main` prints the result via
//! [`report`] and exits with status 1.

use std::fmt;
use tg_adapters::ApiError;
use tg_core::{ConfigError, PhaseError};

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct TgError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TgError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for TgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for TgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl TgError {
    /// The dashboard rejected the request for lack of a session.
    pub fn unauthorized(login_url: &str) -> Self {
        TgError::new("Not signed in to the dashboard")
            .with_context("The server answered HTTP 401 Unauthorized")
            .with_suggestion(format!("Sign in at {}", login_url))
            .with_suggestion("Set TG_TOKEN (or `token` in the config file) to your access token")
    }

    /// Error for when a test plan cannot be found.
    pub fn plan_not_found(plan_id: &str) -> Self {
        TgError::new(format!("Test plan '{}' not found", plan_id))
            .with_context("The plan may have been removed or the id mistyped")
            .with_suggestion("Copy the id from the last segment of the dashboard URL")
            .with_suggestion("Pass the whole dashboard URL instead: tg plan show <url>")
    }

    /// Error for when the configuration cannot be used.
    pub fn invalid_config(err: ConfigError) -> Self {
        TgError::new("Invalid configuration")
            .with_context(err.to_string())
            .with_suggestion("Check the file given by --config or TG_CONFIG")
            .with_suggestion("Check TG_URL, TG_CONTEXT and TG_TIMEOUT_MS")
            .with_source(err)
    }

    /// Error for when the server cannot be reached at all.
    pub fn unreachable(detail: &str) -> Self {
        TgError::new("Cannot reach the dashboard")
            .with_context(detail.to_string())
            .with_suggestion("Check the server address: --url <base> or TG_URL")
            .with_suggestion("Raise the timeout with TG_TIMEOUT_MS if the server is slow")
    }

    /// Error for when the test run log cannot be downloaded.
    pub fn log_download(plan_id: &str, err: ApiError) -> Self {
        let mut error = TgError::new("Error on downloading log file...")
            .with_context(format!("Test plan: {}", plan_id))
            .with_context(err.to_string());
        if let ApiError::TooLarge { limit, .. } = &err {
            error = error
                .with_suggestion(format!(
                    "Raise `log_limit` in the config file above {} bytes",
                    limit
                ))
                .with_suggestion("Or drop --full to fetch the truncated log");
        }
        error.with_source(err)
    }

    /// Error for when a scenario result archive cannot be downloaded.
    pub fn result_download(err: ApiError) -> Self {
        TgError::new(err.to_string())
            .with_suggestion("Check that the scenario directory matches the summary table")
            .with_source(err)
    }

    /// Error for when a phase pipeline cannot be rendered.
    pub fn phase_token_required(err: PhaseError) -> Self {
        TgError::new(err.to_string())
            .with_context("Only a successful run renders without a phase token")
            .with_suggestion("Pass the plan's current phase: --token DEPLOY_STARTED")
            .with_source(err)
    }

}

impl From<ApiError> for TgError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized { ref login_url } => {
                let login_url = login_url.clone();
                TgError::unauthorized(&login_url).with_source(err)
            }
            ApiError::Transport(ref detail) => {
                let detail = detail.clone();
                TgError::unreachable(&detail).with_source(err)
            }
            ApiError::Endpoint(ref route) => {
                let detail = route.to_string();
                TgError::new("Invalid dashboard address")
                    .with_context(detail)
                    .with_suggestion("Check the server address: --url <base> or TG_URL")
                    .with_source(err)
            }
            other => TgError::new(other.to_string()).with_source(other),
        }
    }
}

impl From<ConfigError> for TgError {
    fn from(err: ConfigError) -> Self {
        TgError::invalid_config(err)
    }
}

/// Render any error for stderr, preferring the friendly form
pub fn report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TgError>() {
        Some(e) => e.to_string(),
        None => TgError::new(format!("{:#}", err)).to_string(),
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
