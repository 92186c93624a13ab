//! Applications.
//!
//! [`Applications`] lists the account's applications. A single
//! [`Application`] can be fetched, updated and deleted, and leads to its
//! instances and hosts.

use serde::Serialize;
use serde_json::{json, Value};

use super::{
    json_endpoint, ApplicationHost, ApplicationHosts, ApplicationInstance, ApplicationInstances,
    Metrics,
};
use crate::rest::{join_url, resource_url, Capabilities, RequestParams, RestResource};

const PATH: &str = "applications";

/// Filters for [`Applications`].
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ApplicationListParams {
    /// Filter by application name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Filter by application host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Filter by application identifiers. Sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Filter by application language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Pagination index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl RequestParams for ApplicationListParams {}

/// The applications collection.
#[derive(Debug, Clone)]
pub struct Applications {
    parent: String,
}

impl Applications {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }
}

impl RestResource for Applications {
    type GetParams = ApplicationListParams;
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "Applications";
    const CAPABILITIES: Capabilities = Capabilities::GET;

    fn url(&self) -> String {
        join_url(&self.parent, PATH)
    }

    fn endpoint(&self) -> String {
        json_endpoint(&self.url())
    }
}

/// A single application.
///
/// Update bodies are wrapped as `{"application": obj}`.
#[derive(Debug, Clone)]
pub struct Application {
    parent: String,
    application_id: String,
}

impl Application {
    pub(crate) fn new(parent: &str, application_id: String) -> Self {
        Self {
            parent: parent.to_string(),
            application_id,
        }
    }

    /// Returns the application identifier.
    #[must_use]
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// Returns the application's instances.
    #[must_use]
    pub fn instances(&self) -> ApplicationInstances {
        ApplicationInstances::new(&self.url())
    }

    /// Returns a single instance of the application.
    #[must_use]
    pub fn instance(&self, instance_id: impl ToString) -> ApplicationInstance {
        ApplicationInstance::new(&self.url(), instance_id.to_string())
    }

    /// Returns the application's hosts.
    #[must_use]
    pub fn hosts(&self) -> ApplicationHosts {
        ApplicationHosts::new(&self.url())
    }

    /// Returns a single host of the application.
    #[must_use]
    pub fn host(&self, host_id: impl ToString) -> ApplicationHost {
        ApplicationHost::new(&self.url(), host_id.to_string())
    }
}

impl RestResource for Application {
    type GetParams = ();
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "Application";
    const CAPABILITIES: Capabilities = Capabilities::GET
        .union(Capabilities::UPDATE)
        .union(Capabilities::DELETE);

    fn url(&self) -> String {
        resource_url(&self.parent, PATH, Some(self.application_id.as_str()))
    }

    fn endpoint(&self) -> String {
        json_endpoint(&self.url())
    }

    fn wrap_object(&self, obj: Value) -> Value {
        json!({ "application": obj })
    }
}

impl Metrics for Application {}
