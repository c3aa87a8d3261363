// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tg log`: print or save the test run log

use crate::prelude::*;

const FULL_LOG: &str = r#"{
    "inputStreamContent": "[INFO] start\n[INFO] BUILD FAILURE\n",
    "truncated": false
}"#;

/// A stored log: the existence check succeeds and `GET` returns `body`
fn stored_log(body: &str) -> Dashboard {
    let dashboard = Dashboard::start();
    dashboard.head("test-plans/log/tp-1", 200);
    dashboard.get("test-plans/log/tp-1", 200, body);
    dashboard
}

#[test]
fn prints_log_with_truncation_note() {
    let dashboard = Dashboard::start();
    let exists = dashboard.mock(|when, then| {
        when.method(HEAD)
            .path(api_path("test-plans/log/tp-1"))
            .query_param("truncate", "true");
        then.status(200);
    });
    let log = dashboard.mock(|when, then| {
        when.method(GET)
            .path(api_path("test-plans/log/tp-1"))
            .query_param("truncate", "true");
        then.status(200).body(TRUNCATED_LOG);
    });

    tg().args(["--url", &dashboard.url(), "log", "tp-1"])
        .passes()
        .stdout_eq("[INFO] BUILD FAILURE\n")
        .stderr_has("52000 bytes total")
        .stderr_has("--full");

    exists.assert_calls(1);
    log.assert_calls(1);
}

#[test]
fn full_flag_requests_untruncated_log() {
    let dashboard = Dashboard::start();
    dashboard.head("test-plans/log/tp-1", 200);
    let full = dashboard.mock(|when, then| {
        when.method(GET)
            .path(api_path("test-plans/log/tp-1"))
            .query_param("truncate", "false");
        then.status(200).body(FULL_LOG);
    });

    tg().args(["--url", &dashboard.url(), "log", "tp-1", "--full"])
        .passes()
        .stdout_eq("[INFO] start\n[INFO] BUILD FAILURE\n");
    full.assert_calls(1);
}

#[test]
fn output_flag_defaults_to_test_run_log() {
    let dashboard = stored_log(TRUNCATED_LOG);
    let dir = tempfile::tempdir().unwrap();

    tg().current_dir(dir.path())
        .args(["--url", &dashboard.url(), "log", "tp-1", "--output"])
        .passes()
        .stdout_has("test-run.log");

    let saved = std::fs::read_to_string(dir.path().join("test-run.log")).unwrap();
    assert_eq!(saved, "[INFO] BUILD FAILURE\n");
}

#[test]
fn missing_log_reports_download_error() {
    let dashboard = Dashboard::start();
    let log = dashboard.get("test-plans/log/tp-1", 200, TRUNCATED_LOG);

    tg().args(["--url", &dashboard.url(), "log", "tp-1"])
        .fails()
        .stderr_has("Error on downloading log file...");
    // The failed existence check stops before the download
    log.assert_calls(0);
}

#[test]
fn oversized_full_log_suggests_raising_the_limit() {
    let dashboard = stored_log(FULL_LOG);
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("tg.toml");
    std::fs::write(&config, "log_limit = 16\n").unwrap();

    tg().args(["--config", config.to_str().unwrap()])
        .args(["--url", &dashboard.url(), "log", "tp-1", "--full"])
        .fails()
        .stderr_has("Error on downloading log file...")
        .stderr_has("16-byte read limit")
        .stderr_has("log_limit");
}
