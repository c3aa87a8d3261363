// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run statuses reported by the dashboard API
//!
//! Test plans, scenarios and test runs all share one status vocabulary.
//! Anything the API sends that we do not recognise is kept as
//! [`Status::Unknown`] and displayed the same way as a running item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a test plan or scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Fail,
    Pending,
    Running,
    Error,
    Incomplete,
    DidNotRun,
    #[serde(other)]
    Unknown,
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Fail => "FAIL",
            Status::Pending => "PENDING",
            Status::Running => "RUNNING",
            Status::Error => "ERROR",
            Status::Incomplete => "INCOMPLETE",
            Status::DidNotRun => "DID_NOT_RUN",
            Status::Unknown => "UNKNOWN",
        }
    }

    /// Parse the wire spelling; unrecognised input maps to `Unknown`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "SUCCESS" => Status::Success,
            "FAIL" => Status::Fail,
            "PENDING" => Status::Pending,
            "RUNNING" => Status::Running,
            "ERROR" => Status::Error,
            "INCOMPLETE" => Status::Incomplete,
            "DID_NOT_RUN" => Status::DidNotRun,
            _ => Status::Unknown,
        }
    }

    /// A finished plan has a final log and will not change again
    pub fn is_finished(&self) -> bool {
        matches!(self, Status::Success | Status::Fail)
    }

    /// A terminal plan is done executing, whether or not it produced results
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Status::Success
                | Status::Fail
                | Status::Error
                | Status::Incomplete
                | Status::DidNotRun
        )
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            Status::Success => Outcome::Success,
            Status::Fail => Outcome::Failure,
            _ => Outcome::Other,
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            Status::Success => Badge::new('✓', "Success!", Tone::Positive),
            Status::Fail => Badge::new('!', "Failed!", Tone::Negative),
            Status::Pending => Badge::new('☰', "Pending!", Tone::Neutral),
            Status::Incomplete => Badge::new('⧗', "Incomplete!", Tone::Neutral),
            Status::DidNotRun => Badge::new('⊘', "Did Not Run!", Tone::Neutral),
            Status::Error => Badge::new('✗', "Error!", Tone::Negative),
            Status::Running | Status::Unknown => Badge::new('⟳', "Running!", Tone::Neutral),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Overall outcome of a run, as far as the phase pipeline is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
    Other,
}

impl From<Status> for Outcome {
    fn from(status: Status) -> Self {
        status.outcome()
    }
}

/// Colour family of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

/// Visual marker for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub glyph: char,
    pub label: &'static str,
    pub tone: Tone,
}

impl Badge {
    const fn new(glyph: char, label: &'static str, tone: Tone) -> Self {
        Self { glyph, label, tone }
    }

    /// Badge for a single test case result
    pub fn for_test_result(success: bool) -> Self {
        if success {
            Status::Success.badge()
        } else {
            Status::Fail.badge()
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph, self.label)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
