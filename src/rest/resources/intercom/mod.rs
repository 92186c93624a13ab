//! Intercom v1 bindings.
//!
//! The [`Intercom`] service root hands out the resources below. Every
//! resource URL is `{api_root}/{path}`; Intercom resources never append an
//! object identifier to their own URL.
//!
//! | Resource | Path | Verbs |
//! |---|---|---|
//! | [`Users`] | `users` | get, create, update |
//! | [`User`] | `users` | get |
//! | [`Impressions`] | `users/impressions` | create |
//! | [`MessageThreads`] | `users/message_threads` | get, create, `reply` |
//! | [`MessageThread`] | `users/message_threads` | get |
//! | [`Counts`] | `counts` | get |
//! | [`Events`] | `events` | create |
//! | [`Companies`] | `companies` | get, create |
//! | [`Company`] | `companies` | get, `users` |
//!
//! # Authentication
//!
//! Calls executed through [`Service::execute`] carry HTTP Basic
//! authorization built from the configured `app_id` and `api_key`.
//!
//! # Example
//!
//! ```rust
//! use saas_api::rest::resources::intercom::{Intercom, NewEvent};
//! use saas_api::rest::{ResponseParser, RestResource};
//!
//! let intercom = Intercom::from_credentials("app", "key").unwrap();
//!
//! let call = intercom
//!     .events()
//!     .create(NewEvent::new("signed_up", 12345).user_id(42u64))
//!     .unwrap();
//! assert_eq!(call.request.url, "https://api.intercom.io/v1/events");
//! assert_eq!(call.parser, ResponseParser::Empty);
//! ```

mod companies;
mod counts;
mod events;
mod impressions;
mod message_threads;
mod users;

use base64::prelude::*;
use serde::Serialize;

use crate::clients::{DataType, HttpRequest};
use crate::config::{ApiKey, AppId, IntercomConfig};
use crate::error::ConfigError;
use crate::rest::{Presence, RequestParams, Service};

pub use companies::{Companies, Company};
pub use counts::{CountParams, Counts};
pub use events::{Events, NewEvent};
pub use impressions::Impressions;
pub use message_threads::{MessageThread, MessageThreadLookup, MessageThreads};
pub use users::{User, UserLookup, Users};

/// Parameter names of which at least one identifies a user.
pub(crate) const USER_OR_EMAIL: &[&str] = &["user_id", "email"];

/// The Intercom service root.
#[derive(Clone, Debug)]
pub struct Intercom {
    config: IntercomConfig,
    authorization: String,
}

impl Intercom {
    /// Creates the service root from a validated configuration.
    #[must_use]
    pub fn new(config: IntercomConfig) -> Self {
        let credentials = format!(
            "{}:{}",
            config.app_id().as_ref(),
            config.api_key().as_ref()
        );
        let authorization = format!("Basic {}", BASE64_STANDARD.encode(credentials));
        Self {
            config,
            authorization,
        }
    }

    /// Creates the service root against the public API root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either credential is empty.
    pub fn from_credentials(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = IntercomConfig::builder()
            .app_id(AppId::new(app_id)?)
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Ok(Self::new(config))
    }

    /// Returns the configuration this root was built from.
    #[must_use]
    pub const fn config(&self) -> &IntercomConfig {
        &self.config
    }

    /// Returns the users collection.
    #[must_use]
    pub fn users(&self) -> Users {
        Users::new(self.api_root())
    }

    /// Returns the single-user lookup.
    #[must_use]
    pub fn user(&self) -> User {
        User::new(self.api_root())
    }

    /// Returns the impressions endpoint.
    #[must_use]
    pub fn impressions(&self) -> Impressions {
        Impressions::new(self.api_root())
    }

    /// Returns the message threads collection.
    #[must_use]
    pub fn message_threads(&self) -> MessageThreads {
        MessageThreads::new(self.api_root())
    }

    /// Returns the single message thread lookup.
    #[must_use]
    pub fn message_thread(&self) -> MessageThread {
        MessageThread::new(self.api_root())
    }

    /// Returns the counts endpoint.
    #[must_use]
    pub fn counts(&self) -> Counts {
        Counts::new(self.api_root())
    }

    /// Returns the events endpoint.
    #[must_use]
    pub fn events(&self) -> Events {
        Events::new(self.api_root())
    }

    /// Returns the companies collection.
    #[must_use]
    pub fn companies(&self) -> Companies {
        Companies::new(self.api_root())
    }

    /// Returns a single company.
    #[must_use]
    pub fn company(&self, company_id: impl ToString) -> Company {
        Company::new(self.api_root(), company_id.to_string())
    }
}

impl Service for Intercom {
    const NAME: &'static str = "Intercom";

    fn api_root(&self) -> &str {
        self.config.api_root().as_ref()
    }

    fn apply_filters(&self, request: &mut HttpRequest) {
        let json = DataType::Json.as_content_type();
        request.set_header("Content-Type", json);
        request.set_header("Accept", json);
        request.set_header("Authorization", self.authorization.clone());
    }

    fn user_agent_prefix(&self) -> Option<&str> {
        self.config.user_agent_prefix()
    }
}

/// Pagination parameters shared by the Intercom collections.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PageParams {
    /// The page to return. The first page when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Objects per page, at most 500. 500 when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl RequestParams for PageParams {}

/// A user identifier, numeric or textual.
///
/// Numeric identifiers are sent as JSON numbers in bodies. Zero and the
/// empty string count as absent for "user_id or email" checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserId {
    /// A numeric identifier.
    Numeric(u64),
    /// A textual identifier.
    Text(String),
}

impl Presence for UserId {
    fn is_present(&self) -> bool {
        match self {
            Self::Numeric(id) => *id != 0,
            Self::Text(id) => !id.is_empty(),
        }
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self::Numeric(u64::from(id))
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}
