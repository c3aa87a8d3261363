// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP dashboard API backed by ureq
//!
//! ureq is blocking, so every call runs on tokio's blocking pool.

use super::{classify_status, ApiError, DashboardApi, Resource};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tg_core::{DashboardConfig, Endpoints, LogContent, TestPlan, TestScenario, TestSummary};
use ureq::http::Response;
use ureq::Body;

/// Cap on bytes read from an error body
const ERROR_BODY_LIMIT: u64 = 64 * 1024;
/// Cap on bytes read from an ordinary JSON document
const JSON_LIMIT: u64 = 10 * 1024 * 1024;

/// Real dashboard API client
#[derive(Clone)]
pub struct HttpDashboardApi {
    agent: ureq::Agent,
    endpoints: Endpoints,
    token: Option<String>,
    log_limit: u64,
}

impl HttpDashboardApi {
    pub fn new(config: &DashboardConfig) -> Result<Self, ApiError> {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            endpoints: config.endpoints()?,
            token: config.token.clone(),
            log_limit: config.log_limit,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Run a blocking request off the async runtime
    async fn blocking<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(HttpDashboardApi) -> Result<T, ApiError> + Send + 'static,
    {
        let api = self.clone();
        tokio::task::spawn_blocking(move || f(api))
            .await
            .map_err(|e| ApiError::Transport(format!("request task failed: {}", e)))?
    }

    fn send_get(&self, url: &str, accept_json: bool) -> Result<Response<Body>, ApiError> {
        let mut request = self.agent.get(url);
        if accept_json {
            request = request.header("Accept", "application/json");
        }
        if let Some(token) = &self.token {
            request = request.header("Authorization", token.as_str());
        }
        tracing::trace!(url, "GET");
        request
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Fail with the right [`ApiError`] unless the response is 2xx
    fn check(&self, response: &mut Response<Body>, resource: &Resource) -> Result<(), ApiError> {
        let code = response.status().as_u16();
        if (200..300).contains(&code) {
            return Ok(());
        }
        let server_message = response
            .body_mut()
            .with_config()
            .limit(ERROR_BODY_LIMIT)
            .read_to_string()
            .ok()
            .and_then(|body| server_message(&body));
        classify_status(code, resource, &self.endpoints.login(), server_message)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: &Resource,
        limit: u64,
    ) -> Result<T, ApiError> {
        let mut response = self.send_get(url, true)?;
        self.check(&mut response, resource)?;
        let body = response
            .body_mut()
            .with_config()
            .limit(limit)
            .read_to_string()
            .map_err(|e| match e {
                ureq::Error::BodyExceedsLimit(limit) => ApiError::TooLarge {
                    resource: resource.to_string(),
                    limit,
                },
                e => ApiError::Transport(format!("failed to read response: {}", e)),
            })?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("{} is not valid: {}", resource, e)))
    }
}

/// `message` field of the server's JSON error body
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn test_plan(&self, id: &str) -> Result<TestPlan, ApiError> {
        let id = id.to_string();
        self.blocking(move |api| {
            let url = api.endpoints.test_plan(&id);
            api.get_json(&url, &Resource::TestPlan(id), JSON_LIMIT)
        })
        .await
    }

    async fn test_summary(&self, id: &str) -> Result<TestSummary, ApiError> {
        let id = id.to_string();
        self.blocking(move |api| {
            let url = api.endpoints.test_summary(&id);
            api.get_json(&url, &Resource::TestSummary(id), JSON_LIMIT)
        })
        .await
    }

    async fn test_log(&self, id: &str, truncate: bool) -> Result<LogContent, ApiError> {
        let id = id.to_string();
        self.blocking(move |api| {
            let url = api.endpoints.test_log(&id, truncate);
            let limit = api.log_limit;
            api.get_json(&url, &Resource::TestLog(id), limit)
        })
        .await
    }

    async fn log_exists(&self, id: &str) -> Result<bool, ApiError> {
        let id = id.to_string();
        self.blocking(move |api| {
            let url = api.endpoints.test_log(&id, true);
            let mut request = api.agent.head(&url);
            if let Some(token) = &api.token {
                request = request.header("Authorization", token.as_str());
            }
            tracing::trace!(url, "HEAD");
            let response = request
                .call()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            match response.status().as_u16() {
                404 => Ok(false),
                code => {
                    classify_status(code, &Resource::TestLog(id), &api.endpoints.login(), None)?;
                    Ok(true)
                }
            }
        })
        .await
    }

    async fn plan_history(&self, id: &str) -> Result<Vec<TestPlan>, ApiError> {
        let id = id.to_string();
        self.blocking(move |api| {
            let url = api.endpoints.plan_history(&id);
            api.get_json(&url, &Resource::PlanHistory(id), JSON_LIMIT)
        })
        .await
    }

    async fn test_scenario(&self, id: &str) -> Result<TestScenario, ApiError> {
        let id = id.to_string();
        self.blocking(move |api| {
            let url = api.endpoints.test_scenario(&id);
            api.get_json(&url, &Resource::TestScenario(id), JSON_LIMIT)
        })
        .await
    }

    async fn scenario_result(
        &self,
        plan_id: &str,
        scenario_dir: &str,
    ) -> Result<Vec<u8>, ApiError> {
        let plan_id = plan_id.to_string();
        let scenario_dir = scenario_dir.to_string();
        self.blocking(move |api| {
            let url = api.endpoints.scenario_result(&plan_id, &scenario_dir);
            let resource = Resource::ScenarioResult {
                plan_id,
                scenario_dir,
            };
            let mut response = api.send_get(&url, false)?;
            api.check(&mut response, &resource)?;
            response
                .body_mut()
                .with_config()
                .limit(u64::MAX)
                .read_to_vec()
                .map_err(|e| ApiError::Transport(format!("failed to read archive: {}", e)))
        })
        .await
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
