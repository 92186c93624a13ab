//! New Relic v2 bindings.
//!
//! The [`NewRelic`] service root leads to the application tree. URLs nest
//! by strict concatenation and every endpoint carries the `.json` suffix:
//!
//! ```text
//! applications.json
//! applications/{id}.json
//! applications/{id}/instances.json
//! applications/{id}/instances/{instance_id}.json
//! applications/{id}/hosts.json
//! applications/{id}/hosts/{host_id}.json
//! ```
//!
//! Single applications, instances and hosts also expose their metrics
//! through the [`Metrics`] trait.
//!
//! # Authentication
//!
//! Calls executed through [`Service::execute`] carry the API key in the
//! `X-Api-Key` header.
//!
//! # Example
//!
//! ```rust
//! use saas_api::rest::resources::newrelic::{MetricDataParams, Metrics, NewRelic};
//!
//! let newrelic = NewRelic::from_api_key("key").unwrap();
//! let call = newrelic
//!     .application(5)
//!     .instance(7)
//!     .metric_data(MetricDataParams::new("Apdex"))
//!     .unwrap();
//!
//! assert_eq!(
//!     call.request.url,
//!     "https://api.newrelic.com/v2/applications/5/instances/7/metrics/data.json"
//! );
//! ```

mod application_hosts;
mod application_instances;
mod applications;
mod metrics;

use serde::Serialize;

use crate::clients::HttpRequest;
use crate::config::{ApiKey, NewRelicConfig};
use crate::error::ConfigError;
use crate::rest::{RequestParams, Service};

pub use application_hosts::{ApplicationHost, ApplicationHosts};
pub use application_instances::{ApplicationInstance, ApplicationInstances};
pub use applications::{Application, ApplicationListParams, Applications};
pub use metrics::{MetricDataParams, MetricNamesParams, Metrics};

/// Appends the `.json` format suffix to a resource URL.
pub(crate) fn json_endpoint(url: &str) -> String {
    format!("{url}.json")
}

/// The New Relic service root.
#[derive(Clone, Debug)]
pub struct NewRelic {
    config: NewRelicConfig,
}

impl NewRelic {
    /// Creates the service root from a validated configuration.
    #[must_use]
    pub const fn new(config: NewRelicConfig) -> Self {
        Self { config }
    }

    /// Creates the service root against the public API root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let config = NewRelicConfig::builder()
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Ok(Self::new(config))
    }

    /// Returns the configuration this root was built from.
    #[must_use]
    pub const fn config(&self) -> &NewRelicConfig {
        &self.config
    }

    /// Returns the applications collection.
    #[must_use]
    pub fn applications(&self) -> Applications {
        Applications::new(self.api_root())
    }

    /// Returns a single application.
    #[must_use]
    pub fn application(&self, application_id: impl ToString) -> Application {
        Application::new(self.api_root(), application_id.to_string())
    }
}

impl Service for NewRelic {
    const NAME: &'static str = "NewRelic";

    fn api_root(&self) -> &str {
        self.config.api_root().as_ref()
    }

    fn apply_filters(&self, request: &mut HttpRequest) {
        request.set_header("X-Api-Key", self.config.api_key().as_ref());
    }

    fn user_agent_prefix(&self) -> Option<&str> {
        self.config.user_agent_prefix()
    }
}

/// Filters for the instance and host lists of an application.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct HostListParams {
    /// Filter by server hostname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Filter by identifiers. Sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Pagination index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl RequestParams for HostListParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::RestResource;

    #[test]
    fn test_filter_sets_api_key_header() {
        let newrelic = NewRelic::from_api_key("nr-key").unwrap();
        let call = newrelic.applications().get(ApplicationListParams::default()).unwrap();
        let prepared = newrelic.prepare(call);

        assert_eq!(prepared.request.header("x-api-key"), Some("nr-key"));
        assert!(prepared.request.header("authorization").is_none());
    }

    #[test]
    fn test_custom_api_root_is_used_for_every_resource() {
        let config = NewRelicConfig::builder()
            .api_key(ApiKey::new("k").unwrap())
            .api_root(crate::config::ApiRoot::new("http://localhost:9000/v2/").unwrap())
            .build()
            .unwrap();
        let newrelic = NewRelic::new(config);

        assert_eq!(
            newrelic.application(1).hosts().url(),
            "http://localhost:9000/v2/applications/1/hosts"
        );
    }

    #[test]
    fn test_from_api_key_rejects_empty_key() {
        assert!(matches!(
            NewRelic::from_api_key(""),
            Err(ConfigError::EmptyApiKey)
        ));
    }
}
