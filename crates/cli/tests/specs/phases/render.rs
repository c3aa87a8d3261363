// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tg phases`: offline phase pipeline rendering

use crate::prelude::*;

#[test]
fn success_renders_every_phase_done() {
    tg().args(["phases", "--outcome", "SUCCESS"])
        .passes()
        .stdout_eq("PREPARATION ✓ → INFRA ✓ → DEPLOY ✓ → TEST ✓\n");
}

#[test]
fn deploy_started() {
    tg().args(["phases", "--outcome", "RUNNING", "--token", "DEPLOY_STARTED"])
        .passes()
        .stdout_eq("PREPARATION ✓ → INFRA ✓ → DEPLOY ⟳ → TEST …\n");
}

#[test]
fn infra_error_keeps_trailing_phases_done() {
    tg().args(["phases", "--outcome", "FAIL", "--token", "INFRA_ERROR"])
        .passes()
        .stdout_eq("PREPARATION ✓ → INFRA ✗ → DEPLOY ✓ → TEST ✓\n");
}

#[test]
fn strict_phases_leave_trailing_phases_pending() {
    tg().args([
        "phases",
        "--outcome",
        "FAIL",
        "--token",
        "INFRA_ERROR",
        "--strict-phases",
    ])
    .passes()
    .stdout_eq("PREPARATION ✓ → INFRA ✗ → DEPLOY ? → TEST ?\n");
}

#[test]
fn unknown_phase_renders_done_and_warns() {
    tg().args(["phases", "--outcome", "RUNNING", "--token", "FOO_STARTED"])
        .passes()
        .stdout_eq("PREPARATION ✓ → INFRA ✓ → DEPLOY ✓ → TEST ✓\n")
        .stderr_has("matches no known phase");
}

#[test]
fn json_format() {
    let run = tg()
        .args([
            "--format",
            "json",
            "phases",
            "--outcome",
            "PENDING",
            "--token",
            "INFRA_INCOMPLETE",
        ])
        .passes();
    let chips: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(
        chips,
        serde_json::json!([
            {"phase": "PREPARATION", "state": "done"},
            {"phase": "INFRA", "state": "incomplete"},
            {"phase": "DEPLOY", "state": "done"},
            {"phase": "TEST", "state": "done"},
        ])
    );
}
