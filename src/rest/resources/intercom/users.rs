//! Users and single-user lookup.
//!
//! [`Users`] lists, creates and updates users. [`User`] fetches one user by
//! `user_id` or `email`; at least one of the two is required.
//!
//! # Example
//!
//! ```rust
//! use saas_api::rest::resources::intercom::{Intercom, UserLookup};
//! use saas_api::rest::RestResource;
//!
//! let intercom = Intercom::from_credentials("app", "key").unwrap();
//!
//! let call = intercom.user().get(UserLookup::by_email("ann@example.com")).unwrap();
//! let query = call.request.query.unwrap();
//! assert_eq!(query.get("email").map(String::as_str), Some("ann@example.com"));
//! assert!(!query.contains_key("user_id"));
//!
//! assert!(intercom.user().get(UserLookup::default()).is_err());
//! ```

use serde::Serialize;
use serde_json::Value;

use super::{PageParams, UserId, USER_OR_EMAIL};
use crate::rest::{
    join_url, require_one_of, Capabilities, RequestParams, ResourceError, RestResource,
};

const PATH: &str = "users";

/// Identifies a user by `user_id`, `email`, or both.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct UserLookup {
    /// The user's identifier. Required if no email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// The user's email. Required if no user_id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserLookup {
    /// Looks a user up by identifier.
    #[must_use]
    pub fn by_user_id(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            email: None,
        }
    }

    /// Looks a user up by email.
    #[must_use]
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            user_id: None,
            email: Some(email.into()),
        }
    }
}

impl RequestParams for UserLookup {
    fn validate(&self, operation: &'static str) -> Result<(), ResourceError> {
        require_one_of(operation, USER_OR_EMAIL, &[&self.user_id, &self.email])
    }
}

/// The users collection.
#[derive(Debug, Clone)]
pub struct Users {
    parent: String,
}

impl Users {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }
}

impl RestResource for Users {
    type GetParams = PageParams;
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "Users";
    const CAPABILITIES: Capabilities = Capabilities::GET
        .union(Capabilities::CREATE)
        .union(Capabilities::UPDATE);

    fn url(&self) -> String {
        join_url(&self.parent, PATH)
    }
}

/// A single user, looked up by `user_id` or `email`.
#[derive(Debug, Clone)]
pub struct User {
    parent: String,
}

impl User {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }
}

impl RestResource for User {
    type GetParams = UserLookup;
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "User";
    const CAPABILITIES: Capabilities = Capabilities::GET;

    fn url(&self) -> String {
        join_url(&self.parent, PATH)
    }
}
