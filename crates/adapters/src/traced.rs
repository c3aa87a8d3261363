// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::api::{ApiError, DashboardApi};
use async_trait::async_trait;
use std::time::Instant;
use tg_core::{LogContent, TestPlan, TestScenario, TestSummary};
use tracing::Instrument;

/// Wrapper that adds tracing to any DashboardApi
#[derive(Clone)]
pub struct TracedDashboardApi<A> {
    inner: A,
}

impl<A> TracedDashboardApi<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

/// Log how a call ended
fn finish<T>(result: &Result<T, ApiError>, start: Instant) {
    let elapsed_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(_) => tracing::debug!(elapsed_ms, "ok"),
        Err(ApiError::NotFound(msg)) => tracing::info!(elapsed_ms, msg = %msg, "not found"),
        Err(e) => tracing::error!(elapsed_ms, error = %e, "failed"),
    }
}

#[async_trait]
impl<A: DashboardApi> DashboardApi for TracedDashboardApi<A> {
    async fn test_plan(&self, id: &str) -> Result<TestPlan, ApiError> {
        let span = tracing::info_span!("api.test_plan", id);
        async {
            let start = Instant::now();
            let result = self.inner.test_plan(id).await;
            if let Ok(plan) = &result {
                let phase = plan.phase.as_ref().map(ToString::to_string);
                tracing::debug!(
                    status = %plan.status,
                    phase = %phase.as_deref().unwrap_or("-"),
                    "plan"
                );
            }
            finish(&result, start);
            result
        }
        .instrument(span)
        .await
    }

    async fn test_summary(&self, id: &str) -> Result<TestSummary, ApiError> {
        let span = tracing::info_span!("api.test_summary", id);
        async {
            let start = Instant::now();
            let result = self.inner.test_summary(id).await;
            if let Ok(summary) = &result {
                tracing::debug!(
                    scenarios = summary.scenario_summaries.len(),
                    failed = summary.failed_scenarios().count(),
                    "summary"
                );
            }
            finish(&result, start);
            result
        }
        .instrument(span)
        .await
    }

    async fn test_log(&self, id: &str, truncate: bool) -> Result<LogContent, ApiError> {
        let span = tracing::info_span!("api.test_log", id, truncate);
        async {
            let start = Instant::now();
            let result = self.inner.test_log(id, truncate).await;
            if let Ok(log) = &result {
                tracing::debug!(
                    bytes = log.input_stream_content.len(),
                    truncated = log.truncated,
                    "log"
                );
            }
            finish(&result, start);
            result
        }
        .instrument(span)
        .await
    }

    async fn log_exists(&self, id: &str) -> Result<bool, ApiError> {
        let span = tracing::info_span!("api.log_exists", id);
        async {
            let start = Instant::now();
            let result = self.inner.log_exists(id).await;
            finish(&result, start);
            result
        }
        .instrument(span)
        .await
    }

    async fn plan_history(&self, id: &str) -> Result<Vec<TestPlan>, ApiError> {
        let span = tracing::info_span!("api.plan_history", id);
        async {
            let start = Instant::now();
            let result = self.inner.plan_history(id).await;
            if let Ok(plans) = &result {
                tracing::debug!(runs = plans.len(), "history");
            }
            finish(&result, start);
            result
        }
        .instrument(span)
        .await
    }

    async fn test_scenario(&self, id: &str) -> Result<TestScenario, ApiError> {
        let span = tracing::info_span!("api.test_scenario", id);
        async {
            let start = Instant::now();
            let result = self.inner.test_scenario(id).await;
            finish(&result, start);
            result
        }
        .instrument(span)
        .await
    }

    async fn scenario_result(
        &self,
        plan_id: &str,
        scenario_dir: &str,
    ) -> Result<Vec<u8>, ApiError> {
        let span = tracing::info_span!("api.scenario_result", plan_id, scenario_dir);
        async {
            let start = Instant::now();
            let result = self.inner.scenario_result(plan_id, scenario_dir).await;
            if let Ok(bytes) = &result {
                tracing::info!(bytes = bytes.len(), "archive downloaded");
            }
            finish(&result, start);
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
