// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard routes and API endpoints
//!
//! Views take their routing state as explicit parameters. A [`RunRoute`] can
//! be built directly or recovered from a dashboard page URL, and
//! [`Endpoints`] builds every API URL from the configured base.

use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("dashboard path '{0}' is too short; expected .../<product>/<deployment-pattern>/<...>/<test-plan-id>")]
    TooShort(String),
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Identifies the test run a view shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRoute {
    pub product: String,
    pub deployment_pattern: String,
    pub test_plan_id: String,
}

impl RunRoute {
    pub fn new(
        product: impl Into<String>,
        deployment_pattern: impl Into<String>,
        test_plan_id: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            deployment_pattern: deployment_pattern.into(),
            test_plan_id: test_plan_id.into(),
        }
    }

    /// Recover a route from a dashboard page URL or path
    ///
    /// Pages are laid out as `.../<product>/<pattern>/<view>/<plan-id>`, so the
    /// product is the fourth segment from the end and the plan id the last.
    pub fn parse(location: &str) -> Result<Self, RouteError> {
        let path = match Url::parse(location) {
            Ok(url) => url.path().to_string(),
            Err(_) => location
                .split(['?', '#'])
                .next()
                .unwrap_or_default()
                .to_string(),
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [.., product, pattern, _, id] => Ok(Self::new(*product, *pattern, *id)),
            _ => Err(RouteError::TooShort(location.to_string())),
        }
    }
}

/// Builds dashboard API URLs
#[derive(Debug, Clone)]
pub struct Endpoints {
    root: Url,
}

impl Endpoints {
    /// `base_url` is the server origin, `context` the dashboard mount point
    pub fn new(base_url: &str, context: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: reason.to_string(),
        };

        let mut root = Url::parse(base_url).map_err(|e| invalid(&e.to_string()))?;
        if root.cannot_be_a_base() || !matches!(root.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL"));
        }
        root.set_query(None);
        root.set_fragment(None);
        if let Ok(mut segs) = root.path_segments_mut() {
            segs.pop_if_empty();
            segs.extend(context.split('/').filter(|s| !s.is_empty()));
        }
        Ok(Self { root })
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.root.clone();
        if let Ok(mut segs) = url.path_segments_mut() {
            segs.pop_if_empty();
            segs.extend(segments);
        }
        url
    }

    pub fn test_plan(&self, id: &str) -> String {
        self.url(&["api", "test-plans", id]).into()
    }

    pub fn test_summary(&self, id: &str) -> String {
        self.url(&["api", "test-plans", "test-summary", id]).into()
    }

    pub fn test_log(&self, id: &str, truncate: bool) -> String {
        let mut url = self.url(&["api", "test-plans", "log", id]);
        url.query_pairs_mut()
            .append_pair("truncate", if truncate { "true" } else { "false" });
        url.into()
    }

    pub fn plan_history(&self, id: &str) -> String {
        self.url(&["api", "test-plans", "history", id]).into()
    }

    pub fn scenario_result(&self, plan_id: &str, scenario_dir: &str) -> String {
        self.url(&["api", "test-plans", "result", plan_id, scenario_dir])
            .into()
    }

    pub fn test_scenario(&self, id: &str) -> String {
        self.url(&["api", "test-scenarios", id]).into()
    }

    pub fn login(&self) -> String {
        self.url(&["login"]).into()
    }
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
