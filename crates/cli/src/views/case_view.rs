// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test case page for one scenario

use super::{one_line, write_table};
use serde::Serialize;
use std::fmt;
use tg_core::{Badge, TestScenario};

#[derive(Debug, Clone, Serialize)]
pub struct TestCaseView {
    pub heading: String,
    pub scenario_id: String,
    pub test_cases: Vec<CaseRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseRow {
    pub name: String,
    pub badge: Badge,
    pub error_message: String,
}

impl TestCaseView {
    /// `context` is the breadcrumb leading to the scenario, e.g. product and pattern
    pub fn build(context: &[&str], scenario: &TestScenario) -> Self {
        let name = if scenario.name.is_empty() {
            scenario.id.as_str()
        } else {
            scenario.name.as_str()
        };
        let heading = context
            .iter()
            .copied()
            .filter(|s| !s.is_empty())
            .chain(std::iter::once(name))
            .collect::<Vec<_>>()
            .join(" / ");

        Self {
            heading,
            scenario_id: scenario.id.clone(),
            test_cases: scenario
                .test_cases
                .iter()
                .map(|case| CaseRow {
                    name: case.name.clone(),
                    badge: Badge::for_test_result(case.success),
                    error_message: case.error_msg.clone(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for TestCaseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f)?;
        let rows: Vec<Vec<String>> = self
            .test_cases
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    c.badge.to_string(),
                    one_line(&c.error_message),
                ]
            })
            .collect();
        write_table(f, &["TEST CASE", "RESULT", "ERROR MESSAGE"], &rows)
    }
}

#[cfg(test)]
#[path = "case_view_tests.rs"]
mod tests;
