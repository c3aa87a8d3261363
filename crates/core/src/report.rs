// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Payloads returned by the dashboard API
//!
//! Field names follow the API's camelCase JSON. Optional or missing
//! collections deserialize to empty so that a partial response still renders.

use crate::phase::PhaseToken;
use crate::status::Status;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single execution of a test plan against one infrastructure combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPlan {
    pub id: String,
    #[serde(default)]
    pub infra_params: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<PhaseToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_run_number: Option<u64>,
    #[serde(
        default,
        deserialize_with = "de_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "de_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_timestamp: Option<DateTime<Utc>>,
}

impl TestPlan {
    /// Infrastructure parameters as ordered `(name, value)` pairs
    ///
    /// `infraParams` is itself a JSON object encoded as a string. Anything
    /// that does not parse as an object yields no parameters.
    pub fn infra_parameters(&self) -> Vec<(String, String)> {
        parse_infra_params(&self.infra_params)
    }
}

/// Parse an `infraParams` string into `(name, value)` pairs
pub fn parse_infra_params(raw: &str) -> Vec<(String, String)> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Object(map)) => map
            .into_iter()
            .map(|(k, v)| {
                let v = match v {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, v)
            })
            .collect(),
        Ok(_) => Vec::new(),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unparseable infraParams");
            Vec::new()
        }
    }
}

/// Execution summary of a test plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSummary {
    #[serde(default, deserialize_with = "de_null_default")]
    pub scenario_summaries: Vec<ScenarioSummary>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub scenario_test_case_entries: Vec<ScenarioFailures>,
}

impl TestSummary {
    /// Scenarios that reported at least one failed test case, in order
    pub fn failed_scenarios(&self) -> impl Iterator<Item = &ScenarioFailures> {
        self.scenario_test_case_entries
            .iter()
            .filter(|s| !s.test_case_entries.is_empty())
    }
}

/// Per-scenario totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    #[serde(default)]
    pub scenario_description: String,
    pub scenario_status: Status,
    #[serde(default)]
    pub total_success: u64,
    #[serde(default)]
    pub total_fail: u64,
    #[serde(default, deserialize_with = "de_percentage")]
    pub success_percentage: Option<f64>,
    #[serde(default)]
    pub scenario_dir: String,
}

impl ScenarioSummary {
    /// Success rate with two decimals; missing or non-numeric values show `0.0`
    pub fn success_percentage_display(&self) -> String {
        match self.success_percentage {
            Some(p) if p.is_finite() => format!("{:.2}", p),
            _ => "0.0".to_string(),
        }
    }
}

/// Failed test cases of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioFailures {
    #[serde(default)]
    pub scenario_description: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub test_case_entries: Vec<TestCaseEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseEntry {
    pub test_case: String,
    #[serde(default)]
    pub failure_message: String,
    #[serde(default)]
    pub is_test_success: bool,
}

/// Test run log, possibly truncated by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogContent {
    #[serde(default)]
    pub input_stream_content: String,
    #[serde(default)]
    pub truncated: bool,
    #[serde(default, deserialize_with = "de_size")]
    pub complete_input_stream_size: Option<u64>,
}

/// A test scenario with its individual test cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScenario {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "unknown_status")]
    pub status: Status,
    #[serde(default, deserialize_with = "de_null_default")]
    pub test_cases: Vec<TestCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub name: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error_msg: String,
}

fn unknown_status() -> Status {
    Status::Unknown
}

fn de_null_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Number, numeric string, or anything else (treated as absent)
fn de_percentage<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(d)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Sizes arrive as numbers or as strings such as `"12345"`
fn de_size<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(d)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    })
}

/// Timestamps arrive as epoch milliseconds or RFC 3339 strings
fn de_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(d)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        _ => None,
    })
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
