// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake dashboard API for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ApiError, DashboardApi};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tg_core::{LogContent, TestPlan, TestScenario, TestSummary};

/// Recorded API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    TestPlan { id: String },
    TestSummary { id: String },
    TestLog { id: String, truncate: bool },
    LogExists { id: String },
    PlanHistory { id: String },
    TestScenario { id: String },
    ScenarioResult { plan_id: String, scenario_dir: String },
}

#[derive(Default)]
struct FakeState {
    /// Successive responses per plan; the last one repeats
    plans: HashMap<String, VecDeque<TestPlan>>,
    summaries: HashMap<String, TestSummary>,
    logs: HashMap<(String, bool), LogContent>,
    histories: HashMap<String, Vec<TestPlan>>,
    scenarios: HashMap<String, TestScenario>,
    results: HashMap<(String, String), Vec<u8>>,
    /// Forced failures keyed by method name
    errors: HashMap<&'static str, ApiError>,
    calls: Vec<ApiCall>,
}

/// Fake dashboard API for testing
#[derive(Clone, Default)]
pub struct FakeDashboardApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeDashboardApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut FakeState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }

    /// Queue a plan response; successive calls walk the queue
    pub fn add_plan(&self, plan: TestPlan) {
        self.with_state(|s| {
            s.plans.entry(plan.id.clone()).or_default().push_back(plan);
        });
    }

    pub fn set_summary(&self, id: &str, summary: TestSummary) {
        self.with_state(|s| {
            s.summaries.insert(id.to_string(), summary);
        });
    }

    pub fn set_log(&self, id: &str, truncate: bool, log: LogContent) {
        self.with_state(|s| {
            s.logs.insert((id.to_string(), truncate), log);
        });
    }

    pub fn set_history(&self, id: &str, plans: Vec<TestPlan>) {
        self.with_state(|s| {
            s.histories.insert(id.to_string(), plans);
        });
    }

    pub fn set_scenario(&self, scenario: TestScenario) {
        self.with_state(|s| {
            s.scenarios.insert(scenario.id.clone(), scenario);
        });
    }

    pub fn set_result(&self, plan_id: &str, scenario_dir: &str, bytes: Vec<u8>) {
        self.with_state(|s| {
            s.results
                .insert((plan_id.to_string(), scenario_dir.to_string()), bytes);
        });
    }

    /// Make every call to `method` fail with `error`
    pub fn fail(&self, method: &'static str, error: ApiError) {
        self.with_state(|s| {
            s.errors.insert(method, error);
        });
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ApiCall> {
        self.with_state(|s| s.calls.clone())
    }

    fn record(&self, method: &'static str, call: ApiCall) -> Result<(), ApiError> {
        self.with_state(|s| {
            s.calls.push(call);
            match s.errors.get(method) {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        })
    }
}

fn missing(what: &str, id: &str) -> ApiError {
    ApiError::NotFound(format!("{} '{}' not found", what, id))
}

#[async_trait]
impl DashboardApi for FakeDashboardApi {
    async fn test_plan(&self, id: &str) -> Result<TestPlan, ApiError> {
        self.record("test_plan", ApiCall::TestPlan { id: id.to_string() })?;
        self.with_state(|s| {
            let queue = s.plans.get_mut(id).ok_or_else(|| missing("test plan", id))?;
            let plan = if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            };
            plan.ok_or_else(|| missing("test plan", id))
        })
    }

    async fn test_summary(&self, id: &str) -> Result<TestSummary, ApiError> {
        self.record("test_summary", ApiCall::TestSummary { id: id.to_string() })?;
        self.with_state(|s| {
            s.summaries
                .get(id)
                .cloned()
                .ok_or_else(|| missing("test summary", id))
        })
    }

    async fn test_log(&self, id: &str, truncate: bool) -> Result<LogContent, ApiError> {
        self.record(
            "test_log",
            ApiCall::TestLog {
                id: id.to_string(),
                truncate,
            },
        )?;
        self.with_state(|s| {
            s.logs
                .get(&(id.to_string(), truncate))
                .cloned()
                .ok_or_else(|| missing("test run log", id))
        })
    }

    async fn log_exists(&self, id: &str) -> Result<bool, ApiError> {
        self.record("log_exists", ApiCall::LogExists { id: id.to_string() })?;
        Ok(self.with_state(|s| s.logs.keys().any(|(log_id, _)| log_id == id)))
    }

    async fn plan_history(&self, id: &str) -> Result<Vec<TestPlan>, ApiError> {
        self.record("plan_history", ApiCall::PlanHistory { id: id.to_string() })?;
        self.with_state(|s| {
            s.histories
                .get(id)
                .cloned()
                .ok_or_else(|| missing("history", id))
        })
    }

    async fn test_scenario(&self, id: &str) -> Result<TestScenario, ApiError> {
        self.record("test_scenario", ApiCall::TestScenario { id: id.to_string() })?;
        self.with_state(|s| {
            s.scenarios
                .get(id)
                .cloned()
                .ok_or_else(|| missing("test scenario", id))
        })
    }

    async fn scenario_result(
        &self,
        plan_id: &str,
        scenario_dir: &str,
    ) -> Result<Vec<u8>, ApiError> {
        self.record(
            "scenario_result",
            ApiCall::ScenarioResult {
                plan_id: plan_id.to_string(),
                scenario_dir: scenario_dir.to_string(),
            },
        )?;
        self.with_state(|s| {
            s.results
                .get(&(plan_id.to_string(), scenario_dir.to_string()))
                .cloned()
                .ok_or_else(|| {
                    ApiError::NotFound("Unable to locate results in the remote storage.".to_string())
                })
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
