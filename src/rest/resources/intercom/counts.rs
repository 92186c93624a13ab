//! User and company counts.

use serde::Serialize;
use serde_json::Value;

use crate::rest::{join_url, Capabilities, RequestParams, RestResource};

/// Counts of users and companies filtered by some criteria.
#[derive(Debug, Clone)]
pub struct Counts {
    parent: String,
}

impl Counts {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }
}

/// Parameters for [`Counts`].
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CountParams {
    /// The count's type (e.g., "user", "company").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// The count's filter criteria (e.g., "tag", "segment").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
}

impl CountParams {
    /// Creates parameters with both fields set.
    #[must_use]
    pub fn new(kind: impl Into<String>, count: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            count: Some(count.into()),
        }
    }
}

impl RequestParams for CountParams {}

impl RestResource for Counts {
    type GetParams = CountParams;
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "Counts";
    const CAPABILITIES: Capabilities = Capabilities::GET;

    fn url(&self) -> String {
        join_url(&self.parent, "counts")
    }
}
