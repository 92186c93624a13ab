//! HTTP-specific error types.
//!
//! This module contains error types for the transport layer: non-2xx
//! responses, request descriptors that fail validation, and network failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use saas_api::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use saas_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"Not found"}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, or a placeholder when the body was empty.
    pub message: String,
}

/// Error returned when a request descriptor fails validation.
///
/// # Example
///
/// ```rust
/// use saas_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request has no target URL.
    #[error("Cannot send a request without a URL.")]
    MissingUrl,

    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
