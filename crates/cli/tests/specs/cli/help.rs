// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    tg().args(["--help"])
        .passes()
        .stdout_has("plan")
        .stdout_has("scenario")
        .stdout_has("log")
        .stdout_has("result")
        .stdout_has("phases");
}

#[test]
fn help_lists_global_flags() {
    tg().args(["--help"])
        .passes()
        .stdout_has("--config")
        .stdout_has("--url")
        .stdout_has("--format");
}

#[test]
fn plan_help_lists_subcommands() {
    tg().args(["plan", "--help"])
        .passes()
        .stdout_has("show")
        .stdout_has("watch")
        .stdout_has("history");
}

#[test]
fn plan_show_help_mentions_strict_phases() {
    tg().args(["plan", "show", "--help"])
        .passes()
        .stdout_has("--strict-phases");
}

#[test]
fn version_flag() {
    tg().args(["--version"]).passes().stdout_has("tg ");
}
