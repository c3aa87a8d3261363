// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard API adapters

mod http;

pub use http::HttpDashboardApi;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ApiCall, FakeDashboardApi};

use async_trait::async_trait;
use std::fmt;
use tg_core::{LogContent, RouteError, TestPlan, TestScenario, TestSummary};
use thiserror::Error;

/// Errors from dashboard API calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("not signed in to the dashboard (sign in at {login_url})")]
    Unauthorized { login_url: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{message} (HTTP {code})")]
    Status { code: u16, message: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{resource} is larger than the {limit}-byte read limit")]
    TooLarge { resource: String, limit: u64 },
    #[error(transparent)]
    Endpoint(#[from] RouteError),
}

/// What a request was for; drives error messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    TestPlan(String),
    TestSummary(String),
    TestLog(String),
    PlanHistory(String),
    TestScenario(String),
    ScenarioResult { plan_id: String, scenario_dir: String },
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::TestPlan(id) => write!(f, "test plan '{}'", id),
            Resource::TestSummary(id) => write!(f, "test summary of '{}'", id),
            Resource::TestLog(id) => write!(f, "test run log of '{}'", id),
            Resource::PlanHistory(id) => write!(f, "history of '{}'", id),
            Resource::TestScenario(id) => write!(f, "test scenario '{}'", id),
            Resource::ScenarioResult {
                plan_id,
                scenario_dir,
            } => write!(f, "results of '{}' in '{}'", scenario_dir, plan_id),
        }
    }
}

/// Map an HTTP status to success or an [`ApiError`]
///
/// `server_message` is the `message` field of the server's error body, if any.
pub fn classify_status(
    code: u16,
    resource: &Resource,
    login_url: &str,
    server_message: Option<String>,
) -> Result<(), ApiError> {
    match code {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized {
            login_url: login_url.to_string(),
        }),
        404 => Err(ApiError::NotFound(match resource {
            Resource::ScenarioResult { .. } => {
                "Unable to locate results in the remote storage.".to_string()
            }
            other => format!("{} not found", other),
        })),
        code => {
            let message = match resource {
                Resource::ScenarioResult { .. } => {
                    "Internal server error. Couldn't download the results at the moment."
                        .to_string()
                }
                other => server_message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("failed to load {}", other)),
            };
            Err(ApiError::Status { code, message })
        }
    }
}

/// Read access to the dashboard's REST API
#[async_trait]
pub trait DashboardApi: Clone + Send + Sync + 'static {
    /// Fetch a test plan by id
    async fn test_plan(&self, id: &str) -> Result<TestPlan, ApiError>;

    /// Fetch the scenario execution summary of a test plan
    async fn test_summary(&self, id: &str) -> Result<TestSummary, ApiError>;

    /// Fetch the test run log, optionally truncated by the server
    async fn test_log(&self, id: &str, truncate: bool) -> Result<LogContent, ApiError>;

    /// Check whether a test run log exists in remote storage
    async fn log_exists(&self, id: &str) -> Result<bool, ApiError>;

    /// Fetch earlier runs of the same test plan
    async fn plan_history(&self, id: &str) -> Result<Vec<TestPlan>, ApiError>;

    /// Fetch a test scenario with its test cases
    async fn test_scenario(&self, id: &str) -> Result<TestScenario, ApiError>;

    /// Download the result archive of one scenario
    async fn scenario_result(&self, plan_id: &str, scenario_dir: &str)
        -> Result<Vec<u8>, ApiError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
