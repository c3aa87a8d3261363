// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tg plan history`: past runs of a plan

use crate::prelude::*;

const HISTORY: &str = r#"[
    {"id": "tp-1", "status": "FAIL", "phase": "TEST_ERROR", "testRunNumber": 1},
    {"id": "tp-2", "status": "SUCCESS", "testRunNumber": 2, "createdTimestamp": "2018-01-02T03:04:05Z"}
]"#;

#[test]
fn lists_runs_newest_first() {
    let dashboard = Dashboard::start();
    dashboard.get("test-plans/history/tp-2", 200, HISTORY);

    let run = tg()
        .args(["--url", &dashboard.url(), "plan", "history", "tp-2"])
        .passes()
        .stdout_has("2018-01-02 03:04:05 UTC")
        .stdout_has("TEST_ERROR");

    let stdout = run.stdout();
    let newest = stdout.find("tp-2").unwrap();
    let oldest = stdout.find("tp-1").unwrap();
    assert!(newest < oldest);
}

#[test]
fn missing_history_is_plan_not_found() {
    let dashboard = Dashboard::start();

    tg().args(["--url", &dashboard.url(), "plan", "history", "tp-9"])
        .fails()
        .stderr_has("Test plan 'tp-9' not found");
}
