// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration modules

mod dashboard;

pub use dashboard::{ConfigError, DashboardConfig, DEFAULT_CONTEXT, DEFAULT_URL};
