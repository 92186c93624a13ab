//! URL composition for REST resources.
//!
//! Resource URLs are built by strict concatenation: the parent URL, then the
//! resource's path segment(s), then the object identifier if there is one.
//! No segment is ever reordered or dropped.
//!
//! # Example
//!
//! ```rust
//! use saas_api::rest::{join_url, resource_url};
//!
//! let company = resource_url("https://api.intercom.io/v1", "companies", Some("42"));
//! assert_eq!(company, "https://api.intercom.io/v1/companies/42");
//!
//! let users = join_url(&company, "users");
//! assert_eq!(users, "https://api.intercom.io/v1/companies/42/users");
//! ```

use std::fmt;

use crate::clients::HttpMethod;

/// The generic verbs a REST resource may permit.
///
/// Endpoint-specific actions (e.g. replying to a message thread) are not
/// operations; they exist only on the resources that define them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Fetch or list (GET).
    Get,
    /// Create a new object (POST).
    Create,
    /// Update an existing object (PUT).
    Update,
    /// Delete an object (DELETE).
    Delete,
}

impl Operation {
    /// All operations in declaration order.
    pub const ALL: [Self; 4] = [Self::Get, Self::Create, Self::Update, Self::Delete];

    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Get => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appends a path segment to a parent URL.
///
/// The segment may itself contain `/` (e.g. `users/impressions`).
#[must_use]
pub fn join_url(parent: &str, segment: &str) -> String {
    format!("{parent}/{segment}")
}

/// Builds a resource URL from its parent, path, and optional identifier.
///
/// The identifier is percent-encoded so it always stays a single segment.
/// Query values such as `company_id` are sent raw and left to the transport.
#[must_use]
pub fn resource_url(parent: &str, path: &str, object_id: Option<&str>) -> String {
    let url = join_url(parent, path);
    match object_id {
        Some(id) => join_url(&url, &urlencoding::encode(id)),
        None => url,
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Operation>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_default_http_methods() {
        assert_eq!(Operation::Get.default_http_method(), HttpMethod::Get);
        assert_eq!(Operation::Create.default_http_method(), HttpMethod::Post);
        assert_eq!(Operation::Update.default_http_method(), HttpMethod::Put);
        assert_eq!(Operation::Delete.default_http_method(), HttpMethod::Delete);
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "create");
        assert_eq!(Operation::ALL.len(), 4);
    }

    #[test]
    fn test_join_url_keeps_multi_segment_paths() {
        assert_eq!(
            join_url("https://api.intercom.io/v1", "users/impressions"),
            "https://api.intercom.io/v1/users/impressions"
        );
    }

    #[test]
    fn test_resource_url_without_identifier() {
        assert_eq!(
            resource_url("https://api.newrelic.com/v2", "applications", None),
            "https://api.newrelic.com/v2/applications"
        );
    }

    #[test]
    fn test_resource_url_two_levels() {
        let application = resource_url("https://api.newrelic.com/v2", "applications", Some("5"));
        let instances = resource_url(&application, "instances", None);
        assert_eq!(
            instances,
            "https://api.newrelic.com/v2/applications/5/instances"
        );
    }

    #[test]
    fn test_resource_url_three_levels() {
        let application = resource_url("https://root", "applications", Some("5"));
        let instance = resource_url(&application, "instances", Some("7"));
        let data = join_url(&instance, "metrics/data.json");
        assert_eq!(data, "https://root/applications/5/instances/7/metrics/data.json");
    }

    #[test]
    fn test_resource_url_encodes_identifier() {
        assert_eq!(
            resource_url("https://root", "companies", Some("acme/inc 1")),
            "https://root/companies/acme%2Finc%201"
        );
    }
}
