//! REST resource trait.
//!
//! This module defines the [`RestResource`] trait, the generic base every
//! endpoint type builds on. It provides `get()`, `create()`, `update()`, and
//! `delete()`; each checks the resource's [`Capabilities`] before building
//! anything.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct holding the parent URL (and identifier, if any)
//! 2. Implement `RestResource` with parameter types and constants
//! 3. Override a verb only when the endpoint deviates from the defaults
//!
//! # Example
//!
//! ```rust
//! use saas_api::rest::{join_url, Capabilities, RestResource};
//!
//! struct Tags {
//!     parent: String,
//! }
//!
//! impl RestResource for Tags {
//!     type GetParams = ();
//!     type CreateBody = serde_json::Value;
//!     type UpdateBody = serde_json::Value;
//!
//!     const NAME: &'static str = "Tags";
//!     const CAPABILITIES: Capabilities = Capabilities::GET;
//!
//!     fn url(&self) -> String {
//!         join_url(&self.parent, "tags")
//!     }
//! }
//!
//! let tags = Tags { parent: "https://root".to_string() };
//! assert!(tags.get(()).is_ok());
//! assert!(tags.delete().is_err());
//! ```

use serde_json::Value;

use crate::rest::{
    serialize_to_body, ApiCall, Capabilities, Operation, RequestParams, ResourceError,
    ResponseParser,
};

/// A remote collection or entity addressed by a URL.
///
/// # Associated Types
///
/// - `GetParams`: parameters for `get()` (use `()` if none)
/// - `CreateBody`: body accepted by `create()`
/// - `UpdateBody`: body accepted by `update()`
///
/// Disabled verbs conventionally take [`serde_json::Value`], so they can be
/// called with anything and still fail.
///
/// # Associated Constants
///
/// - `NAME`: The resource type name used in errors
/// - `CAPABILITIES`: The verbs this resource permits
pub trait RestResource {
    /// Parameters for `get()`.
    type GetParams: RequestParams;

    /// Body for `create()`.
    type CreateBody: RequestParams;

    /// Body for `update()`.
    type UpdateBody: RequestParams;

    /// The resource type name (e.g., "Users").
    const NAME: &'static str;

    /// The verbs this resource permits.
    const CAPABILITIES: Capabilities;

    /// Returns the resource URL, used as the parent of nested resources.
    fn url(&self) -> String;

    /// Returns the URL the generic verbs target.
    ///
    /// Defaults to [`url`](Self::url); services with a format suffix
    /// override it.
    fn endpoint(&self) -> String {
        self.url()
    }

    /// Wraps an outgoing create/update body. Identity by default.
    fn wrap_object(&self, obj: Value) -> Value {
        obj
    }

    /// Fails with [`ResourceError::MethodNotSupported`] unless the operation
    /// is in [`CAPABILITIES`](Self::CAPABILITIES).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MethodNotSupported`] for a disabled operation.
    fn ensure_supported(&self, operation: Operation) -> Result<(), ResourceError> {
        if Self::CAPABILITIES.contains(operation) {
            return Ok(());
        }
        tracing::debug!(
            resource = Self::NAME,
            operation = operation.as_str(),
            "Rejected unsupported operation"
        );
        Err(ResourceError::MethodNotSupported {
            resource: Self::NAME,
            operation,
        })
    }

    /// Fetches the resource: GET with query parameters, JSON parser.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MethodNotSupported`] if `get` is disabled, or
    /// [`ResourceError::MissingParameter`] if the parameters fail validation.
    fn get(&self, params: Self::GetParams) -> Result<ApiCall, ResourceError> {
        self.ensure_supported(Operation::Get)?;
        params.validate(Operation::Get.as_str())?;
        ApiCall::from_params(
            Operation::Get.default_http_method(),
            self.endpoint(),
            &params,
            ResponseParser::Json,
        )
    }

    /// Creates an object: POST with a JSON body, JSON parser.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MethodNotSupported`] if `create` is disabled.
    fn create(&self, body: Self::CreateBody) -> Result<ApiCall, ResourceError> {
        self.ensure_supported(Operation::Create)?;
        body.validate(Operation::Create.as_str())?;
        let body = self.wrap_object(serialize_to_body(&body)?);
        ApiCall::from_body(
            Operation::Create.default_http_method(),
            self.endpoint(),
            body,
            ResponseParser::Json,
        )
    }

    /// Updates the resource: PUT with a JSON body, JSON parser.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MethodNotSupported`] if `update` is disabled.
    fn update(&self, body: Self::UpdateBody) -> Result<ApiCall, ResourceError> {
        self.ensure_supported(Operation::Update)?;
        body.validate(Operation::Update.as_str())?;
        let body = self.wrap_object(serialize_to_body(&body)?);
        ApiCall::from_body(
            Operation::Update.default_http_method(),
            self.endpoint(),
            body,
            ResponseParser::Json,
        )
    }

    /// Deletes the resource: DELETE, empty parser.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MethodNotSupported`] if `delete` is disabled.
    fn delete(&self) -> Result<ApiCall, ResourceError> {
        self.ensure_supported(Operation::Delete)?;
        ApiCall::from_params(
            Operation::Delete.default_http_method(),
            self.endpoint(),
            &(),
            ResponseParser::Empty,
        )
    }
}
