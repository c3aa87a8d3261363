// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
pub use httpmock::Method::{GET, HEAD};
pub use httpmock::{Mock, MockServer, Then, When};
use std::path::Path;
use tempfile::TempDir;

pub const CONTEXT: &str = "/testgrid/dashboard";

/// A `tg` invocation isolated from the user's config and environment
pub struct Tg {
    cmd: Command,
    _home: TempDir,
}

pub fn tg() -> Tg {
    let home = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("tg").unwrap();
    for key in ["TG_CONFIG", "TG_URL", "TG_CONTEXT", "TG_TOKEN", "TG_TIMEOUT_MS", "RUST_LOG"] {
        cmd.env_remove(key);
    }
    cmd.env("XDG_CONFIG_HOME", home.path());
    Tg { cmd, _home: home }
}

impl Tg {
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    pub fn passes(mut self) -> Run {
        Run(self.cmd.assert().success())
    }

    /// Runtime failure: exit code 1 with a friendly error
    pub fn fails(mut self) -> Run {
        Run(self.cmd.assert().code(1).stderr(predicate::str::starts_with("error: ")))
    }

    /// Rejected by argument parsing
    pub fn misuse(mut self) -> Run {
        Run(self.cmd.assert().code(2))
    }
}

pub struct Run(Assert);

impl Run {
    pub fn stdout_has(self, needle: &str) -> Self {
        Run(self.0.stdout(predicate::str::contains(needle)))
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        Run(self.0.stdout(predicate::str::contains(needle).not()))
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Run(self.0.stderr(predicate::str::contains(needle)))
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.0.get_output().stdout).to_string();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).to_string()
    }
}

/// Stand-in dashboard on localhost
///
/// Requests without a matching mock get a 404.
pub struct Dashboard {
    server: MockServer,
}

impl Dashboard {
    pub fn start() -> Self {
        Self {
            server: MockServer::start(),
        }
    }

    pub fn url(&self) -> String {
        self.server.base_url()
    }

    /// Answer `GET` on an API path below the dashboard context, any query
    pub fn get(&self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> Mock<'_> {
        let body = body.into();
        self.server.mock(|when, then| {
            when.method(GET).path(api_path(path));
            then.status(status)
                .header("content-type", "application/json")
                .body(body);
        })
    }

    /// Answer `HEAD` on an API path below the dashboard context, any query
    pub fn head(&self, path: &str, status: u16) -> Mock<'_> {
        self.server.mock(|when, then| {
            when.method(HEAD).path(api_path(path));
            then.status(status);
        })
    }

    /// Full control over matching, e.g. on query parameters
    pub fn mock(&self, spec: impl FnOnce(When, Then)) -> Mock<'_> {
        self.server.mock(spec)
    }
}

pub fn api_path(path: &str) -> String {
    format!("{}/api/{}", CONTEXT, path)
}

pub const FAILED_PLAN: &str = r#"{
    "id": "tp-1",
    "infraParams": "{\"OS\":\"CentOS\",\"JDK\":\"ORACLE_JDK8\"}",
    "status": "FAIL",
    "phase": "TEST_ERROR",
    "testRunNumber": 7
}"#;

pub const RUNNING_PLAN: &str = r#"{
    "id": "tp-2",
    "infraParams": "{}",
    "status": "RUNNING",
    "phase": "DEPLOY_STARTED"
}"#;

pub const SUMMARY: &str = r#"{
    "scenarioSummaries": [
        {
            "scenarioDescription": "Login flows",
            "scenarioStatus": "SUCCESS",
            "totalSuccess": 12,
            "totalFail": 0,
            "successPercentage": 100,
            "scenarioDir": "scenario-login"
        },
        {
            "scenarioDescription": "Checkout",
            "scenarioStatus": "FAIL",
            "totalSuccess": 3,
            "totalFail": 1,
            "successPercentage": 75,
            "scenarioDir": "scenario-checkout"
        }
    ],
    "scenarioTestCaseEntries": [
        {
            "scenarioDescription": "Checkout",
            "testCaseEntries": [
                {
                    "testCase": "pay_with_card",
                    "failureMessage": "expected 200 got 500",
                    "isTestSuccess": false
                }
            ]
        }
    ]
}"#;

pub const TRUNCATED_LOG: &str = r#"{
    "inputStreamContent": "[INFO] BUILD FAILURE\n",
    "truncated": true,
    "completeInputStreamSize": 52000
}"#;
