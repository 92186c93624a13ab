//! Configuration types for the service bindings.
//!
//! This module provides the configuration needed to build service roots and
//! the HTTP client that executes their calls.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`IntercomConfig`] and [`IntercomConfigBuilder`]: credentials and API root for Intercom
//! - [`NewRelicConfig`] and [`NewRelicConfigBuilder`]: credentials and API root for New Relic
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`AppId`]: A validated application identifier
//! - [`ApiRoot`]: A validated API root URL
//!
//! # Example
//!
//! ```rust
//! use saas_api::{IntercomConfig, ApiKey, AppId};
//!
//! let config = IntercomConfig::builder()
//!     .app_id(AppId::new("my-app").unwrap())
//!     .api_key(ApiKey::new("my-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_root().as_ref(), "https://api.intercom.io/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiRoot, AppId};

use crate::error::ConfigError;

/// Default API root for Intercom.
pub const INTERCOM_API_ROOT: &str = "https://api.intercom.io/v1";

/// Default API root for New Relic.
pub const NEWRELIC_API_ROOT: &str = "https://api.newrelic.com/v2";

/// Configuration for the Intercom service.
///
/// # Thread Safety
///
/// `IntercomConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct IntercomConfig {
    app_id: AppId,
    api_key: ApiKey,
    api_root: ApiRoot,
    user_agent_prefix: Option<String>,
}

impl IntercomConfig {
    /// Creates a new builder for constructing an `IntercomConfig`.
    #[must_use]
    pub fn builder() -> IntercomConfigBuilder {
        IntercomConfigBuilder::new()
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API root every resource URL is composed under.
    #[must_use]
    pub const fn api_root(&self) -> &ApiRoot {
        &self.api_root
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`IntercomConfig`] instances.
///
/// Required fields are `app_id` and `api_key`. The API root defaults to
/// [`INTERCOM_API_ROOT`].
#[derive(Debug, Default)]
pub struct IntercomConfigBuilder {
    app_id: Option<AppId>,
    api_key: Option<ApiKey>,
    api_root: Option<ApiRoot>,
    user_agent_prefix: Option<String>,
}

impl IntercomConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application identifier (required).
    #[must_use]
    pub fn app_id(mut self, app_id: AppId) -> Self {
        self.app_id = Some(app_id);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the API root, e.g. to route through a proxy.
    #[must_use]
    pub fn api_root(mut self, root: ApiRoot) -> Self {
        self.api_root = Some(root);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`IntercomConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `app_id` or `api_key`
    /// are not set.
    pub fn build(self) -> Result<IntercomConfig, ConfigError> {
        let app_id = self
            .app_id
            .ok_or(ConfigError::MissingRequiredField { field: "app_id" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_root = match self.api_root {
            Some(root) => root,
            None => ApiRoot::new(INTERCOM_API_ROOT)?,
        };

        Ok(IntercomConfig {
            app_id,
            api_key,
            api_root,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

/// Configuration for the New Relic service.
#[derive(Clone, Debug)]
pub struct NewRelicConfig {
    api_key: ApiKey,
    api_root: ApiRoot,
    user_agent_prefix: Option<String>,
}

impl NewRelicConfig {
    /// Creates a new builder for constructing a `NewRelicConfig`.
    #[must_use]
    pub fn builder() -> NewRelicConfigBuilder {
        NewRelicConfigBuilder::new()
    }

    /// Returns the API key sent in the `X-Api-Key` header.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API root every resource URL is composed under.
    #[must_use]
    pub const fn api_root(&self) -> &ApiRoot {
        &self.api_root
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`NewRelicConfig`] instances.
///
/// The only required field is `api_key`. The API root defaults to
/// [`NEWRELIC_API_ROOT`].
#[derive(Debug, Default)]
pub struct NewRelicConfigBuilder {
    api_key: Option<ApiKey>,
    api_root: Option<ApiRoot>,
    user_agent_prefix: Option<String>,
}

impl NewRelicConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the API root.
    #[must_use]
    pub fn api_root(mut self, root: ApiRoot) -> Self {
        self.api_root = Some(root);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`NewRelicConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<NewRelicConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_root = match self.api_root {
            Some(root) => root,
            None => ApiRoot::new(NEWRELIC_API_ROOT)?,
        };

        Ok(NewRelicConfig {
            api_key,
            api_root,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

// Verify configs are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IntercomConfig>();
    assert_send_sync::<NewRelicConfig>();
};
