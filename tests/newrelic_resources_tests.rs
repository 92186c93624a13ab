//! Integration tests for the New Relic endpoints.
//!
//! These tests walk the application tree from the service root and check
//! URL nesting, the `.json` suffix and metric parameter handling.

use chrono::{TimeZone, Utc};
use saas_api::rest::resources::newrelic::{
    ApplicationListParams, HostListParams, MetricDataParams, MetricNamesParams, Metrics, NewRelic,
};
use saas_api::rest::{ResponseParser, RestResource};
use saas_api::HttpMethod;
use serde_json::json;

fn newrelic() -> NewRelic {
    NewRelic::from_api_key("test-key").unwrap()
}

#[test]
fn test_applications_list() {
    let call = newrelic()
        .applications()
        .get(ApplicationListParams {
            language: Some("rust".to_string()),
            page: Some(2),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(call.request.http_method, HttpMethod::Get);
    assert_eq!(call.request.url, "https://api.newrelic.com/v2/applications.json");
    let query = call.request.query.unwrap();
    assert_eq!(query.len(), 2);
    assert_eq!(query["language"], "rust");
    assert_eq!(query["page"], "2");
}

#[test]
fn test_application_update_wraps_body() {
    let call = newrelic()
        .application(12)
        .update(json!({"settings": {"app_apdex_threshold": 0.5}}))
        .unwrap();

    assert_eq!(call.request.http_method, HttpMethod::Put);
    assert_eq!(call.request.url, "https://api.newrelic.com/v2/applications/12.json");
    assert_eq!(
        call.request.body,
        Some(json!({"application": {"settings": {"app_apdex_threshold": 0.5}}}))
    );
    assert_eq!(call.parser, ResponseParser::Json);
}

#[test]
fn test_application_delete_uses_empty_parser() {
    let call = newrelic().application(12).delete().unwrap();

    assert_eq!(call.request.http_method, HttpMethod::Delete);
    assert_eq!(call.request.url, "https://api.newrelic.com/v2/applications/12.json");
    assert_eq!(call.parser, ResponseParser::Empty);
}

#[test]
fn test_three_level_metric_data_url() {
    let call = newrelic()
        .application(5)
        .instance(7)
        .metric_data(MetricDataParams::new("Apdex"))
        .unwrap();

    assert_eq!(
        call.request.url,
        "https://api.newrelic.com/v2/applications/5/instances/7/metrics/data.json"
    );
    assert_eq!(call.request.query.unwrap()["names"], "Apdex");
}

#[test]
fn test_metric_data_window_keys() {
    let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 1, 2, 12, 30, 0).unwrap();

    let both = newrelic()
        .application(5)
        .metric_data(MetricDataParams::new("CPU").between(from, to))
        .unwrap()
        .request
        .query
        .unwrap();
    assert_eq!(both["from"], "2024-01-01T00:00:00Z");
    assert_eq!(both["to"], "2024-01-02T12:30:00Z");
    assert!(!both.contains_key("from_datetime"));

    let mut only_to = MetricDataParams::new("CPU");
    only_to.to_datetime = Some(to);
    let query = newrelic()
        .application(5)
        .host(3)
        .metric_data(only_to)
        .unwrap()
        .request
        .query
        .unwrap();
    assert!(query.contains_key("to_datetime"));
    assert!(!query.contains_key("to"));
}

#[test]
fn test_metric_names_on_every_single_resource() {
    let app = newrelic().application(5);
    let urls = [
        app.metric_names(MetricNamesParams::default()).unwrap().request.url,
        app.instance(7)
            .metric_names(MetricNamesParams::default())
            .unwrap()
            .request
            .url,
        app.host(9)
            .metric_names(MetricNamesParams::default())
            .unwrap()
            .request
            .url,
    ];

    assert_eq!(
        urls,
        [
            "https://api.newrelic.com/v2/applications/5/metrics.json",
            "https://api.newrelic.com/v2/applications/5/instances/7/metrics.json",
            "https://api.newrelic.com/v2/applications/5/hosts/9/metrics.json",
        ]
    );
}

#[test]
fn test_instance_and_host_lists() {
    let app = newrelic().application(5);
    let filter = HostListParams {
        hostname: Some("web-1".to_string()),
        ..Default::default()
    };

    let call = app.instances().get(filter.clone()).unwrap();
    assert_eq!(
        call.request.url,
        "https://api.newrelic.com/v2/applications/5/instances.json"
    );
    assert_eq!(call.request.query.unwrap()["hostname"], "web-1");

    let call = app.hosts().get(filter).unwrap();
    assert_eq!(
        call.request.url,
        "https://api.newrelic.com/v2/applications/5/hosts.json"
    );
}
