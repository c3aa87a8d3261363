// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Past runs of a test plan

use super::write_table;
use serde::Serialize;
use std::fmt;
use tg_core::{Badge, Status, TestPlan};

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct HistoryView {
    pub runs: Vec<HistoryRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryRow {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_run_number: Option<u64>,
    pub status: Status,
    pub badge: Badge,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl HistoryView {
    /// Newest run first
    pub fn build(mut plans: Vec<TestPlan>) -> Self {
        plans.sort_by(|a, b| {
            b.test_run_number
                .cmp(&a.test_run_number)
                .then(b.created_timestamp.cmp(&a.created_timestamp))
        });
        Self {
            runs: plans
                .into_iter()
                .map(|plan| HistoryRow {
                    badge: plan.status.badge(),
                    status: plan.status,
                    test_run_number: plan.test_run_number,
                    phase: plan.phase.map(|p| p.to_string()),
                    created: plan
                        .created_timestamp
                        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
                    id: plan.id,
                })
                .collect(),
        }
    }
}

impl fmt::Display for HistoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.runs.is_empty() {
            return writeln!(f, "No runs found.");
        }
        let rows: Vec<Vec<String>> = self
            .runs
            .iter()
            .map(|run| {
                vec![
                    run.test_run_number
                        .map_or_else(|| "-".to_string(), |n| format!("#{}", n)),
                    run.badge.to_string(),
                    run.created.clone().unwrap_or_else(|| "-".to_string()),
                    run.phase.clone().unwrap_or_else(|| "-".to_string()),
                    run.id.clone(),
                ]
            })
            .collect();
        write_table(f, &["RUN", "STATUS", "CREATED", "PHASE", "TEST PLAN"], &rows)
    }
}

#[cfg(test)]
#[path = "history_view_tests.rs"]
mod tests;
