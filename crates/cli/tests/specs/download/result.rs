// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tg result download`: scenario result archives

use crate::prelude::*;

#[test]
fn downloads_archive_to_default_name() {
    let dashboard = Dashboard::start();
    let archive = dashboard.get(
        "test-plans/result/tp-1/scenario-a",
        200,
        b"PK\x03\x04archive".to_vec(),
    );
    let dir = tempfile::tempdir().unwrap();

    tg().current_dir(dir.path())
        .args(["--url", &dashboard.url(), "result", "download", "tp-1", "scenario-a"])
        .passes()
        .stdout_has("Download will begin in a moment..")
        .stdout_has("scenario-a.zip");

    let saved = std::fs::read(dir.path().join("scenario-a.zip")).unwrap();
    assert_eq!(saved, b"PK\x03\x04archive");
    archive.assert_calls(1);
}

#[test]
fn missing_results_have_storage_message() {
    let dashboard = Dashboard::start();

    tg().args(["--url", &dashboard.url(), "result", "download", "tp-1", "scenario-a"])
        .fails()
        .stderr_has("Unable to locate results in the remote storage.");
}

#[test]
fn server_error_has_download_message() {
    let dashboard = Dashboard::start();
    dashboard.get("test-plans/result/tp-1/scenario-a", 500, "");

    tg().args(["--url", &dashboard.url(), "result", "download", "tp-1", "scenario-a"])
        .fails()
        .stderr_has("Internal server error. Couldn't download the results at the moment.");
}
