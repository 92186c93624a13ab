//! Resource-level error types.
//!
//! Only two failures are decided locally, before any request exists:
//!
//! - [`ResourceError::MethodNotSupported`]: the resource disables the verb
//! - [`ResourceError::MissingParameter`]: none of a set of alternative
//!   parameters was supplied
//!
//! The remaining variants wrap failures from serialization, the transport,
//! and the response parser.
//!
//! # Example
//!
//! ```rust,ignore
//! use saas_api::rest::{ResourceError, RestResource};
//!
//! match intercom.events().get(serde_json::Value::Null) {
//!     Err(ResourceError::MethodNotSupported { resource, operation }) => {
//!         println!("{resource} has no {operation}()");
//!     }
//!     other => println!("{other:?}"),
//! }
//! ```

use crate::clients::{HttpError, InvalidHttpRequestError};
use crate::rest::Operation;
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use saas_api::rest::{Operation, ResourceError};
///
/// let error = ResourceError::MethodNotSupported {
///     resource: "Events",
///     operation: Operation::Get,
/// };
/// assert_eq!(error.to_string(), "Events does not support get()");
///
/// let error = ResourceError::MissingParameter {
///     operation: "get",
///     one_of: &["user_id", "email"],
/// };
/// assert_eq!(error.to_string(), "get() must be passed at least one of user_id, email");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource statically disables this operation.
    #[error("{resource} does not support {operation}()")]
    MethodNotSupported {
        /// The resource type name (e.g., "Events").
        resource: &'static str,
        /// The disabled operation.
        operation: Operation,
    },

    /// None of the alternative required parameters was supplied.
    #[error("{operation}() must be passed at least one of {}", .one_of.join(", "))]
    MissingParameter {
        /// The method that was called (e.g., "get", "create").
        operation: &'static str,
        /// The parameter names of which at least one is required.
        one_of: &'static [&'static str],
    },

    /// Parameters could not be serialized into a query or body.
    #[error("Failed to serialize parameters: {message}")]
    Serialization {
        /// The serializer's error message.
        message: String,
    },

    /// The built request descriptor failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// An HTTP-level error occurred while executing the call.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded by the JSON parser.
    #[error("Failed to parse response body: {source}")]
    Parse {
        /// The JSON decoding error.
        #[source]
        source: serde_json::Error,
    },
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
