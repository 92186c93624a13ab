//! Application instances.

use serde_json::Value;

use super::{json_endpoint, HostListParams, Metrics};
use crate::rest::{join_url, resource_url, Capabilities, RestResource};

const PATH: &str = "instances";

/// The instances of one application.
#[derive(Debug, Clone)]
pub struct ApplicationInstances {
    parent: String,
}

impl ApplicationInstances {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }
}

impl RestResource for ApplicationInstances {
    type GetParams = HostListParams;
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "ApplicationInstances";
    const CAPABILITIES: Capabilities = Capabilities::GET;

    fn url(&self) -> String {
        join_url(&self.parent, PATH)
    }

    fn endpoint(&self) -> String {
        json_endpoint(&self.url())
    }
}

/// A single application instance.
#[derive(Debug, Clone)]
pub struct ApplicationInstance {
    parent: String,
    instance_id: String,
}

impl ApplicationInstance {
    pub(crate) fn new(parent: &str, instance_id: String) -> Self {
        Self {
            parent: parent.to_string(),
            instance_id,
        }
    }
}

impl RestResource for ApplicationInstance {
    type GetParams = ();
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "ApplicationInstance";
    const CAPABILITIES: Capabilities = Capabilities::GET;

    fn url(&self) -> String {
        resource_url(&self.parent, PATH, Some(self.instance_id.as_str()))
    }

    fn endpoint(&self) -> String {
        json_endpoint(&self.url())
    }
}

impl Metrics for ApplicationInstance {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::newrelic::MetricDataParams;
    use serde_json::json;

    const APP: &str = "https://api.newrelic.com/v2/applications/5";

    #[test]
    fn test_list_url_and_filters() {
        let call = ApplicationInstances::new(APP)
            .get(HostListParams {
                hostname: Some("web-1".to_string()),
                page: Some(0),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            call.request.url,
            "https://api.newrelic.com/v2/applications/5/instances.json"
        );
        let query = call.request.query.unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("page"), Some(&"0".to_string()));
    }

    #[test]
    fn test_list_sends_empty_ids_filter() {
        let call = ApplicationInstances::new(APP)
            .get(HostListParams {
                ids: Some(vec![]),
                ..Default::default()
            })
            .unwrap();

        let query = call.request.query.unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("ids"), Some(&String::new()));
    }

    #[test]
    fn test_single_instance_metric_data_nests_three_levels() {
        let call = ApplicationInstance::new(APP, "7".to_string())
            .metric_data(MetricDataParams::new("HttpDispatcher"))
            .unwrap();

        assert_eq!(
            call.request.url,
            "https://api.newrelic.com/v2/applications/5/instances/7/metrics/data.json"
        );
    }

    #[test]
    fn test_instances_are_read_only() {
        let list = ApplicationInstances::new(APP);
        let single = ApplicationInstance::new(APP, "7".to_string());

        assert!(list.create(json!({})).is_err());
        assert!(list.delete().is_err());
        assert!(single.update(json!({})).is_err());
        assert!(single.delete().is_err());
        assert_eq!(
            single.get(()).unwrap().request.url,
            "https://api.newrelic.com/v2/applications/5/instances/7.json"
        );
    }
}
