//! HTTP transport types.
//!
//! This module holds the request descriptor every endpoint produces and the
//! transport that executes it.
//!
//! # Overview
//!
//! - [`HttpRequest`]: A request descriptor (verb, URL, query or body, headers)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`HttpClient`]: The async reqwest-backed transport
//! - [`HttpResponse`]: A raw response (status, headers, body text)
//! - [`HttpError`]: Transport-level failures
//!
//! # Example
//!
//! ```rust,ignore
//! use saas_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(None)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "https://api.intercom.io/v1/counts")
//!     .query_param("type", "company")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
