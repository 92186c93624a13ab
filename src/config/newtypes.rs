//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated service API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation displays only `ApiKey(*****)`.
///
/// # Example
///
/// ```rust
/// use saas_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated application identifier (Intercom `app_id`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppId(String);

impl AppId {
    /// Creates a new validated application identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppId`] if the identifier is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyAppId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API root URL.
///
/// Every resource URL of a service is composed below this root. Trailing
/// slashes are trimmed so that composition never produces `//`.
///
/// # Example
///
/// ```rust
/// use saas_api::ApiRoot;
///
/// let root = ApiRoot::new("https://api.intercom.io/v1/").unwrap();
/// assert_eq!(root.as_ref(), "https://api.intercom.io/v1");
/// assert_eq!(root.scheme(), "https");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRoot {
    url: String,
    scheme_end: usize,
}

impl ApiRoot {
    /// Creates a new validated API root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiRoot`] if the URL has no `http` or
    /// `https` scheme, has no host, or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidApiRoot { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let remainder = &url[scheme_end + 3..];
        let host = remainder.split(['/', ':']).next().unwrap_or_default();
        if host.is_empty() || remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for ApiRoot {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_app_id_rejects_blank_string() {
        assert!(matches!(AppId::new("   "), Err(ConfigError::EmptyAppId)));
        assert_eq!(AppId::new("abc123").unwrap().as_ref(), "abc123");
    }

    #[test]
    fn test_api_root_trims_trailing_slashes() {
        let root = ApiRoot::new("https://api.newrelic.com/v2//").unwrap();
        assert_eq!(root.as_ref(), "https://api.newrelic.com/v2");
    }

    #[test]
    fn test_api_root_accepts_local_addresses() {
        let root = ApiRoot::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(root.scheme(), "http");
        assert_eq!(root.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_api_root_rejects_invalid() {
        assert!(ApiRoot::new("api.intercom.io/v1").is_err());
        assert!(ApiRoot::new("ftp://api.intercom.io").is_err());
        assert!(ApiRoot::new("https://").is_err());
        assert!(ApiRoot::new("https://api.intercom.io/v1?x=1").is_err());
    }
}
