// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn endpoints() -> Endpoints {
    Endpoints::new("https://testgrid.example.com", "/testgrid/dashboard").unwrap()
}

#[test]
fn parses_route_from_page_url() {
    let route = RunRoute::parse(
        "https://testgrid.example.com/testgrid/dashboard/wso2am-2.5.0/pattern-1/test-plans/tp-9?x=1#top",
    )
    .unwrap();
    assert_eq!(route, RunRoute::new("wso2am-2.5.0", "pattern-1", "tp-9"));
}

#[test]
fn parses_route_from_bare_path() {
    let route = RunRoute::parse("product/pattern/infra/tp-1/").unwrap();
    assert_eq!(route.product, "product");
    assert_eq!(route.deployment_pattern, "pattern");
    assert_eq!(route.test_plan_id, "tp-1");
}

#[parameterized(
    empty = { "" },
    three_segments = { "/a/b/c" },
    only_origin = { "https://testgrid.example.com/" },
)]
fn short_paths_are_rejected(location: &str) {
    assert!(matches!(
        RunRoute::parse(location),
        Err(RouteError::TooShort(_))
    ));
}

#[test]
fn builds_api_urls_under_context() {
    let e = endpoints();
    assert_eq!(
        e.test_plan("tp-1"),
        "https://testgrid.example.com/testgrid/dashboard/api/test-plans/tp-1"
    );
    assert_eq!(
        e.test_summary("tp-1"),
        "https://testgrid.example.com/testgrid/dashboard/api/test-plans/test-summary/tp-1"
    );
    assert_eq!(
        e.test_log("tp-1", true),
        "https://testgrid.example.com/testgrid/dashboard/api/test-plans/log/tp-1?truncate=true"
    );
    assert_eq!(
        e.test_log("tp-1", false),
        "https://testgrid.example.com/testgrid/dashboard/api/test-plans/log/tp-1?truncate=false"
    );
    assert_eq!(
        e.plan_history("tp-1"),
        "https://testgrid.example.com/testgrid/dashboard/api/test-plans/history/tp-1"
    );
    assert_eq!(
        e.scenario_result("tp-1", "scenario-a"),
        "https://testgrid.example.com/testgrid/dashboard/api/test-plans/result/tp-1/scenario-a"
    );
    assert_eq!(
        e.test_scenario("sc-3"),
        "https://testgrid.example.com/testgrid/dashboard/api/test-scenarios/sc-3"
    );
    assert_eq!(
        e.login(),
        "https://testgrid.example.com/testgrid/dashboard/login"
    );
}

#[test]
fn path_segments_are_encoded() {
    let url = endpoints().scenario_result("tp-1", "dir with/slash");
    assert!(url.ends_with("/result/tp-1/dir%20with%2Fslash"));
}

#[test]
fn base_path_and_trailing_slashes_are_kept_tidy() {
    let e = Endpoints::new("http://localhost:8080/proxy/", "testgrid/").unwrap();
    assert_eq!(
        e.test_plan("x"),
        "http://localhost:8080/proxy/testgrid/api/test-plans/x"
    );

    let e = Endpoints::new("http://localhost:8080", "").unwrap();
    assert_eq!(e.test_plan("x"), "http://localhost:8080/api/test-plans/x");
}

#[parameterized(
    not_a_url = { "localhost:8080" },
    ftp = { "ftp://example.com" },
    mailto = { "mailto:ops@example.com" },
)]
fn rejects_non_http_base(base: &str) {
    assert!(matches!(
        Endpoints::new(base, "/testgrid/dashboard"),
        Err(RouteError::InvalidBaseUrl { .. })
    ));
}
