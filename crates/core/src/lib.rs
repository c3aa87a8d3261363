// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tg-core: domain model for the testgrid dashboard client
//!
//! This crate provides:
//! - Run statuses and their display badges
//! - The phase pipeline renderer
//! - Payload models for the dashboard API
//! - Routes, endpoints and connection configuration

pub mod config;
pub mod phase;
pub mod report;
pub mod route;
pub mod status;

// Re-exports
pub use config::{ConfigError, DashboardConfig};
pub use phase::{
    render_phases, render_phases_with, ChipState, PhaseChip, PhaseError, PhaseName, PhaseRef,
    PhaseToken, StageKind, TrailingPolicy,
};
pub use report::{
    LogContent, ScenarioFailures, ScenarioSummary, TestCase, TestCaseEntry, TestPlan,
    TestScenario, TestSummary,
};
pub use route::{Endpoints, RouteError, RunRoute};
pub use status::{Badge, Outcome, Status, Tone};
