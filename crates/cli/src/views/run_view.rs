// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test run page: one plan's status, phases, scenario summary and failures

use super::{one_line, write_table, PhaseLine};
use serde::Serialize;
use std::fmt;
use tg_adapters::ApiError;
use tg_core::{
    Badge, LogContent, RunRoute, ScenarioSummary, Status, TestCaseEntry, TestPlan, TestSummary,
    TrailingPolicy,
};

pub const SUMMARY_ERROR: &str = "Error occurred when loading test summaries.";
pub const LOG_ERROR: &str = "Error on downloading log file...";

/// Everything shown for one test run
#[derive(Debug, Clone, Serialize)]
pub struct TestRunView {
    pub route: RunRoute,
    pub status: Status,
    pub badge: Badge,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_run_number: Option<u64>,
    pub infra_parameters: Vec<InfraParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phases: Option<PhaseLine>,
    pub summary: SummarySection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<LogSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfraParam {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SummarySection {
    Loaded {
        scenarios: Vec<ScenarioRow>,
        failed_tests: Vec<FailedScenario>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRow {
    pub badge: Badge,
    pub scenario: String,
    pub total_success: u64,
    pub total_fail: u64,
    pub success_percentage: String,
    pub scenario_dir: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedScenario {
    pub scenario: String,
    pub test_cases: Vec<FailedCase>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedCase {
    pub test_case: String,
    pub badge: Badge,
    pub failure_message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LogSection {
    Loaded {
        content: String,
        truncated: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        total_bytes: Option<u64>,
    },
    Error {
        message: String,
    },
}

/// Header badge: failed, succeeded, or still going
fn header_badge(status: Status) -> Badge {
    match status {
        Status::Fail => Status::Fail.badge(),
        Status::Success => Status::Success.badge(),
        _ => Status::Running.badge(),
    }
}

impl TestRunView {
    /// Assemble the view from whatever the server returned
    ///
    /// A summary or log that failed to load is shown as an inline error
    /// rather than failing the whole view.
    pub fn build(
        route: RunRoute,
        plan: &TestPlan,
        summary: Result<TestSummary, ApiError>,
        log: Option<Result<LogContent, ApiError>>,
        trailing: TrailingPolicy,
    ) -> Self {
        let phases = match PhaseLine::render(plan.status.outcome(), plan.phase.as_ref(), trailing)
        {
            Ok(line) => Some(line),
            Err(e) => {
                tracing::debug!(plan = %plan.id, error = %e, "no phase pipeline");
                None
            }
        };

        let summary = match summary {
            Ok(summary) => SummarySection::Loaded {
                scenarios: summary.scenario_summaries.iter().map(scenario_row).collect(),
                failed_tests: summary
                    .failed_scenarios()
                    .map(|s| FailedScenario {
                        scenario: s.scenario_description.clone(),
                        test_cases: s.test_case_entries.iter().map(failed_case).collect(),
                    })
                    .collect(),
            },
            Err(e) => {
                tracing::warn!(plan = %plan.id, error = %e, "test summary unavailable");
                SummarySection::Error {
                    message: SUMMARY_ERROR.to_string(),
                }
            }
        };

        let log = log.map(|log| match log {
            Ok(log) => LogSection::Loaded {
                content: log.input_stream_content,
                truncated: log.truncated,
                total_bytes: log.complete_input_stream_size,
            },
            Err(e) => {
                tracing::warn!(plan = %plan.id, error = %e, "test run log unavailable");
                LogSection::Error {
                    message: LOG_ERROR.to_string(),
                }
            }
        });

        Self {
            route,
            status: plan.status,
            badge: header_badge(plan.status),
            test_run_number: plan.test_run_number,
            infra_parameters: plan
                .infra_parameters()
                .into_iter()
                .map(|(name, value)| InfraParam { name, value })
                .collect(),
            phases,
            summary,
            log,
        }
    }
}

fn scenario_row(s: &ScenarioSummary) -> ScenarioRow {
    ScenarioRow {
        badge: s.scenario_status.badge(),
        scenario: s.scenario_description.clone(),
        total_success: s.total_success,
        total_fail: s.total_fail,
        success_percentage: s.success_percentage_display(),
        scenario_dir: s.scenario_dir.clone(),
    }
}

fn failed_case(entry: &TestCaseEntry) -> FailedCase {
    FailedCase {
        test_case: entry.test_case.clone(),
        badge: Badge::for_test_result(entry.is_test_success),
        failure_message: entry.failure_message.clone(),
    }
}

impl fmt::Display for TestRunView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title: Vec<&str> = [
            self.route.product.as_str(),
            self.route.deployment_pattern.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
        if title.is_empty() {
            writeln!(f, "{}  {}", self.badge, self.route.test_plan_id)?;
        } else {
            writeln!(f, "{}  {}", self.badge, title.join(" / "))?;
        }

        write!(f, "Test plan: {} ({})", self.route.test_plan_id, self.status)?;
        if let Some(n) = self.test_run_number {
            write!(f, ", run #{}", n)?;
        }
        writeln!(f)?;

        if !self.infra_parameters.is_empty() {
            writeln!(f, "Infra:")?;
            for param in &self.infra_parameters {
                writeln!(f, "  {}: {}", param.name, param.value)?;
            }
        }
        if let Some(phases) = &self.phases {
            writeln!(f, "Phases: {}", phases)?;
        }

        writeln!(f)?;
        writeln!(f, "Scenario execution summary")?;
        match &self.summary {
            SummarySection::Error { message } => writeln!(f, "{}", message)?,
            SummarySection::Loaded {
                scenarios,
                failed_tests,
            } => {
                let rows: Vec<Vec<String>> = scenarios
                    .iter()
                    .map(|s| {
                        vec![
                            s.badge.to_string(),
                            s.scenario.clone(),
                            s.total_success.to_string(),
                            s.total_fail.to_string(),
                            s.success_percentage.clone(),
                            s.scenario_dir.clone(),
                        ]
                    })
                    .collect();
                write_table(
                    f,
                    &[
                        "STATUS",
                        "SCENARIO",
                        "TOTAL SUCCESS",
                        "TOTAL FAILED",
                        "SUCCESS %",
                        "RESULT DIR",
                    ],
                    &rows,
                )?;

                if !failed_tests.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "Failed Tests")?;
                }
                for scenario in failed_tests {
                    writeln!(f)?;
                    writeln!(f, "{}", scenario.scenario)?;
                    let rows: Vec<Vec<String>> = scenario
                        .test_cases
                        .iter()
                        .map(|c| {
                            vec![
                                c.test_case.clone(),
                                c.badge.to_string(),
                                one_line(&c.failure_message),
                            ]
                        })
                        .collect();
                    write_table(f, &["TEST CASE", "RESULT", "FAILURE MESSAGE"], &rows)?;
                }
            }
        }

        match &self.log {
            None => {}
            Some(LogSection::Error { message }) => {
                writeln!(f)?;
                writeln!(f, "Test run log")?;
                writeln!(f, "{}", message)?;
            }
            Some(LogSection::Loaded {
                content,
                truncated,
                total_bytes,
            }) => {
                writeln!(f)?;
                match (truncated, total_bytes) {
                    (true, Some(total)) => {
                        writeln!(f, "Test run log (truncated, {} bytes total)", total)?
                    }
                    (true, None) => writeln!(f, "Test run log (truncated)")?,
                    (false, _) => writeln!(f, "Test run log")?,
                }
                writeln!(f, "{}", content.trim_end())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "run_view_tests.rs"]
mod tests;
