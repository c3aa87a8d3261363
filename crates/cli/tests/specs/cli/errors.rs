// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting: friendly messages on stderr, exit code 1

use crate::prelude::*;

#[test]
fn unknown_command_is_misuse() {
    tg().args(["frobnicate"]).misuse();
}

#[test]
fn unknown_outcome_is_misuse() {
    tg().args(["phases", "--outcome", "BROKEN"])
        .misuse()
        .stderr_has("unknown status 'BROKEN'");
}

#[test]
fn missing_phase_token_fails() {
    tg().args(["phases", "--outcome", "FAIL"])
        .fails()
        .stderr_has("invalid input")
        .stderr_has("--token");
}

#[test]
fn non_http_url_is_invalid_config() {
    tg().args(["--url", "ftp://dashboard.example.com", "plan", "show", "tp-1"])
        .fails()
        .stderr_has("Invalid configuration")
        .stderr_has("expected an http(s) URL");
}

#[test]
fn missing_explicit_config_file_fails() {
    tg().args(["--config", "/nonexistent/tg.toml", "plan", "show", "tp-1"])
        .fails()
        .stderr_has("Invalid configuration")
        .stderr_has("/nonexistent/tg.toml");
}

#[test]
fn bad_timeout_env_fails() {
    tg().env("TG_TIMEOUT_MS", "soon")
        .args(["plan", "show", "tp-1"])
        .fails()
        .stderr_has("TG_TIMEOUT_MS");
}

#[test]
fn unreachable_server_suggests_url() {
    // Nothing listens on port 1
    tg().args(["--url", "http://127.0.0.1:1", "plan", "show", "tp-1"])
        .fails()
        .stderr_has("Cannot reach the dashboard")
        .stderr_has("--url");
}

#[test]
fn unauthorized_points_at_login() {
    let dashboard = Dashboard::start();
    dashboard.get("test-plans/tp-1", 401, "");

    tg().args(["--url", &dashboard.url(), "plan", "show", "tp-1"])
        .fails()
        .stderr_has("Not signed in")
        .stderr_has(&format!("{}{}/login", dashboard.url(), CONTEXT))
        .stderr_has("TG_TOKEN");
}

#[test]
fn zero_watch_interval_is_misuse() {
    tg().args(["plan", "watch", "tp-1", "--interval", "0s"])
        .misuse()
        .stderr_has("greater than zero");
}
