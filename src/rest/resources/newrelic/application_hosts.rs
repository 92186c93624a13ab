//! Application hosts.

use serde_json::Value;

use super::{json_endpoint, HostListParams, Metrics};
use crate::rest::{join_url, resource_url, Capabilities, RestResource};

const PATH: &str = "hosts";

/// The hosts an application runs on.
#[derive(Debug, Clone)]
pub struct ApplicationHosts {
    parent: String,
}

impl ApplicationHosts {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }
}

impl RestResource for ApplicationHosts {
    type GetParams = HostListParams;
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "ApplicationHosts";
    const CAPABILITIES: Capabilities = Capabilities::GET;

    fn url(&self) -> String {
        join_url(&self.parent, PATH)
    }

    fn endpoint(&self) -> String {
        json_endpoint(&self.url())
    }
}

/// A single application host.
#[derive(Debug, Clone)]
pub struct ApplicationHost {
    parent: String,
    host_id: String,
}

impl ApplicationHost {
    pub(crate) fn new(parent: &str, host_id: String) -> Self {
        Self {
            parent: parent.to_string(),
            host_id,
        }
    }
}

impl RestResource for ApplicationHost {
    type GetParams = ();
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "ApplicationHost";
    const CAPABILITIES: Capabilities = Capabilities::GET;

    fn url(&self) -> String {
        resource_url(&self.parent, PATH, Some(self.host_id.as_str()))
    }

    fn endpoint(&self) -> String {
        json_endpoint(&self.url())
    }
}

impl Metrics for ApplicationHost {}
