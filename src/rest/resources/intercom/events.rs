//! Event submission.
//!
//! Events are fire-and-forget: [`Events::create`] posts the event and
//! attaches the empty parser, so executing it yields `None`.
//!
//! # Example
//!
//! ```rust
//! use saas_api::rest::resources::intercom::{Intercom, NewEvent};
//! use saas_api::rest::{ResponseParser, RestResource};
//! use serde_json::json;
//!
//! let intercom = Intercom::from_credentials("app", "key").unwrap();
//! let call = intercom
//!     .events()
//!     .create(NewEvent::new("signed_up", 12345).user_id(42u64))
//!     .unwrap();
//!
//! assert_eq!(
//!     call.request.body,
//!     Some(json!({"event_name": "signed_up", "created_at": 12345, "user_id": 42}))
//! );
//! assert_eq!(call.parser, ResponseParser::Empty);
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::{UserId, USER_OR_EMAIL};
use crate::rest::{
    join_url, require_one_of, serialize_to_body, ApiCall, Capabilities, Operation, RequestParams,
    ResourceError, ResponseParser, RestResource,
};

/// An event to record against a user.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewEvent {
    /// The name of the event that occurred.
    pub event_name: String,

    /// When the event occurred, as a UTC Unix timestamp.
    pub created_at: i64,

    /// The user the event belongs to. Required if no email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// The email of the user. Required if no user_id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Optional metadata about the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl NewEvent {
    /// Creates an event with no user attached yet.
    #[must_use]
    pub fn new(event_name: impl Into<String>, created_at: i64) -> Self {
        Self {
            event_name: event_name.into(),
            created_at,
            user_id: None,
            email: None,
            metadata: None,
        }
    }

    /// Creates an event timestamped at `at`.
    #[must_use]
    pub fn at(event_name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self::new(event_name, at.timestamp())
    }

    /// Attaches the event to a user identifier.
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<UserId>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attaches the event to a user email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Adds metadata to the event.
    #[must_use]
    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl RequestParams for NewEvent {
    fn validate(&self, operation: &'static str) -> Result<(), ResourceError> {
        require_one_of(operation, USER_OR_EMAIL, &[&self.user_id, &self.email])
    }
}

/// The events endpoint.
#[derive(Debug, Clone)]
pub struct Events {
    parent: String,
}

impl Events {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }
}

impl RestResource for Events {
    type GetParams = Value;
    type CreateBody = NewEvent;
    type UpdateBody = Value;

    const NAME: &'static str = "Events";
    const CAPABILITIES: Capabilities = Capabilities::CREATE;

    fn url(&self) -> String {
        join_url(&self.parent, "events")
    }

    fn create(&self, body: NewEvent) -> Result<ApiCall, ResourceError> {
        self.ensure_supported(Operation::Create)?;
        body.validate(Operation::Create.as_str())?;
        ApiCall::from_body(
            Operation::Create.default_http_method(),
            self.url(),
            serialize_to_body(&body)?,
            ResponseParser::Empty,
        )
    }
}
