//! Error types for service configuration.
//!
//! This module contains the error type returned while building service
//! configurations and validated credential newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use saas_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a service.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide the key issued by the service.")]
    EmptyApiKey,

    /// Application identifier cannot be empty.
    #[error("App id cannot be empty. Please provide the application identifier issued by the service.")]
    EmptyAppId,

    /// API root URL is invalid.
    #[error("Invalid API root '{url}'. Expected an absolute http(s) URL without a trailing query (e.g., 'https://api.intercom.io/v1').")]
    InvalidApiRoot {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
