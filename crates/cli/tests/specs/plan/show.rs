// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tg plan show`: the test run view

use crate::prelude::*;

fn failed_run() -> Dashboard {
    let dashboard = Dashboard::start();
    dashboard.get("test-plans/tp-1", 200, FAILED_PLAN);
    dashboard.get("test-plans/test-summary/tp-1", 200, SUMMARY);
    dashboard.get("test-plans/log/tp-1", 200, TRUNCATED_LOG);
    dashboard
}

#[test]
fn shows_header_phases_and_summary() {
    let dashboard = failed_run();

    tg().args(["--url", &dashboard.url(), "plan", "show", "tp-1"])
        .passes()
        .stdout_has("! Failed!  tp-1")
        .stdout_has("Test plan: tp-1 (FAIL), run #7")
        .stdout_has("  JDK: ORACLE_JDK8")
        .stdout_has("Phases: PREPARATION ✓ → INFRA ✓ → DEPLOY ✓ → TEST ✗")
        .stdout_has("Scenario execution summary")
        .stdout_has("75.00")
        .stdout_has("Failed Tests")
        .stdout_has("pay_with_card")
        .stdout_has("Test run log (truncated, 52000 bytes total)")
        .stdout_has("[INFO] BUILD FAILURE");
}

#[test]
fn dashboard_url_supplies_product_and_pattern() {
    let dashboard = failed_run();
    let page = format!(
        "{}{}/wso2is-5.7.0/pattern-1/infra/tp-1",
        dashboard.url(),
        CONTEXT
    );

    tg().args(["--url", &dashboard.url(), "plan", "show", &page])
        .passes()
        .stdout_has("! Failed!  wso2is-5.7.0 / pattern-1");
}

#[test]
fn fetches_truncated_log_for_finished_plans() {
    let dashboard = Dashboard::start();
    let plan = dashboard.get("test-plans/tp-1", 200, FAILED_PLAN);
    let summary = dashboard.get("test-plans/test-summary/tp-1", 200, SUMMARY);
    let log = dashboard.mock(|when, then| {
        when.method(GET)
            .path(api_path("test-plans/log/tp-1"))
            .query_param("truncate", "true");
        then.status(200).body(TRUNCATED_LOG);
    });

    tg().args(["--url", &dashboard.url(), "plan", "show", "tp-1"])
        .passes();

    plan.assert_calls(1);
    summary.assert_calls(1);
    log.assert_calls(1);
}

#[test]
fn running_plan_shows_pipeline_without_log() {
    let dashboard = Dashboard::start();
    dashboard.get("test-plans/tp-2", 200, RUNNING_PLAN);
    dashboard.get("test-plans/test-summary/tp-2", 200, SUMMARY);
    let log = dashboard.get("test-plans/log/tp-2", 200, TRUNCATED_LOG);

    tg().args(["--url", &dashboard.url(), "plan", "show", "tp-2"])
        .passes()
        .stdout_has("⟳ Running!  tp-2")
        .stdout_has("Phases: PREPARATION ✓ → INFRA ✓ → DEPLOY ⟳ → TEST …")
        .stdout_lacks("Test run log");
    log.assert_calls(0);
}

#[test]
fn summary_failure_is_shown_inline() {
    let dashboard = Dashboard::start();
    dashboard.get("test-plans/tp-2", 200, RUNNING_PLAN);
    dashboard.get(
        "test-plans/test-summary/tp-2",
        500,
        r#"{"message":"database down"}"#,
    );

    tg().args(["--url", &dashboard.url(), "plan", "show", "tp-2"])
        .passes()
        .stdout_has("Error occurred when loading test summaries.")
        .stdout_has("Phases:");
}

#[test]
fn missing_plan_fails() {
    let dashboard = Dashboard::start();

    tg().args(["--url", &dashboard.url(), "plan", "show", "tp-404"])
        .fails()
        .stderr_has("Test plan 'tp-404' not found");
}

#[test]
fn json_format() {
    let dashboard = failed_run();
    let run = tg()
        .args(["--url", &dashboard.url(), "--format", "json", "plan", "show", "tp-1"])
        .passes();

    let view: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(view["status"], "FAIL");
    assert_eq!(view["summary"]["state"], "loaded");
    assert_eq!(view["summary"]["failed_tests"][0]["scenario"], "Checkout");
    assert_eq!(view["log"]["truncated"], true);
}
