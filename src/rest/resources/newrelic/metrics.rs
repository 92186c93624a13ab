//! Metric names and metric data for applications, instances and hosts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clients::HttpMethod;
use crate::rest::{
    join_url, serialize_to_query, ApiCall, RequestParams, ResourceError, ResponseParser,
    RestResource,
};

/// Parameters for [`Metrics::metric_names`].
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MetricNamesParams {
    /// Filter by metric name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Pagination index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl RequestParams for MetricNamesParams {}

/// Parameters for [`Metrics::metric_data`].
///
/// The time window is sent as `from`/`to` when both ends are given. A
/// single end keeps its `from_datetime` or `to_datetime` key.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetricDataParams {
    /// Metric names to retrieve.
    pub names: String,

    /// Metric values to retrieve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<String>,

    /// Only retrieve data after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_datetime: Option<DateTime<Utc>>,

    /// Only retrieve data before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_datetime: Option<DateTime<Utc>>,

    /// Summarize the data over the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarize: Option<bool>,
}

impl MetricDataParams {
    /// Creates parameters for the given metric names.
    #[must_use]
    pub fn new(names: impl Into<String>) -> Self {
        Self {
            names: names.into(),
            values: None,
            from_datetime: None,
            to_datetime: None,
            summarize: None,
        }
    }

    /// Restricts the data to a time window.
    #[must_use]
    pub fn between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from_datetime = Some(from);
        self.to_datetime = Some(to);
        self
    }
}

impl RequestParams for MetricDataParams {}

/// Metric endpoints nested under a single resource.
///
/// Both calls are GET requests below [`RestResource::url`] with the JSON
/// parser.
pub trait Metrics: RestResource {
    /// Lists the known metrics and their value names.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request cannot be built.
    fn metric_names(&self, params: MetricNamesParams) -> Result<ApiCall, ResourceError> {
        ApiCall::from_params(
            HttpMethod::Get,
            join_url(&self.url(), "metrics.json"),
            &params,
            ResponseParser::Json,
        )
    }

    /// Lists the values of the requested metrics.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request cannot be built.
    fn metric_data(&self, params: MetricDataParams) -> Result<ApiCall, ResourceError> {
        let mut query = serialize_to_query(&params)?;
        if query.contains_key("from_datetime") && query.contains_key("to_datetime") {
            for (old, new) in [("from_datetime", "from"), ("to_datetime", "to")] {
                if let Some(value) = query.remove(old) {
                    query.insert(new.to_string(), value);
                }
            }
        }
        ApiCall::from_query(
            HttpMethod::Get,
            join_url(&self.url(), "metrics/data.json"),
            query,
            ResponseParser::Json,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::Capabilities;
    use chrono::TimeZone;
    use serde_json::Value;

    struct Probe;

    impl RestResource for Probe {
        type GetParams = ();
        type CreateBody = Value;
        type UpdateBody = Value;

        const NAME: &'static str = "Probe";
        const CAPABILITIES: Capabilities = Capabilities::NONE;

        fn url(&self) -> String {
            "https://root/applications/1".to_string()
        }
    }

    impl Metrics for Probe {}

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_metric_names_url_and_params() {
        let call = Probe
            .metric_names(MetricNamesParams {
                name: Some("CPU".to_string()),
                page: None,
            })
            .unwrap();

        assert_eq!(call.request.url, "https://root/applications/1/metrics.json");
        let query = call.request.query.unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("name"), Some(&"CPU".to_string()));
    }

    #[test]
    fn test_metric_data_renames_full_window() {
        let call = Probe
            .metric_data(MetricDataParams::new("Apdex").between(at(1), at(2)))
            .unwrap();

        assert_eq!(
            call.request.url,
            "https://root/applications/1/metrics/data.json"
        );
        let query = call.request.query.unwrap();
        assert_eq!(query.get("from"), Some(&"2024-03-01T00:00:00Z".to_string()));
        assert_eq!(query.get("to"), Some(&"2024-03-02T00:00:00Z".to_string()));
        assert!(!query.contains_key("from_datetime"));
        assert!(!query.contains_key("to_datetime"));
    }

    #[test]
    fn test_metric_data_keeps_single_bound_key() {
        let mut params = MetricDataParams::new("Apdex");
        params.from_datetime = Some(at(1));

        let query = Probe.metric_data(params).unwrap().request.query.unwrap();
        assert!(query.contains_key("from_datetime"));
        assert!(!query.contains_key("from"));
    }

    #[test]
    fn test_metric_data_summarize_is_a_word() {
        let mut params = MetricDataParams::new("Apdex");
        params.summarize = Some(true);
        params.values = Some("score".to_string());

        let query = Probe.metric_data(params).unwrap().request.query.unwrap();
        assert_eq!(query.get("summarize"), Some(&"true".to_string()));
        assert_eq!(query.get("values"), Some(&"score".to_string()));
        assert_eq!(query.get("names"), Some(&"Apdex".to_string()));
    }
}
