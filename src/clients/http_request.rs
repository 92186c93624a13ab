//! HTTP request descriptors.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request
//! is plain data: verb, absolute URL, query map or JSON body, and headers.
//! Nothing here touches the network.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the bound REST APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase wire name of the method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// A request descriptor, not yet executed.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use saas_api::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "https://api.intercom.io/v1/counts")
///     .query_param("type", "user")
///     .build()
///     .unwrap();
/// assert_eq!(get_request.query.unwrap().get("type"), Some(&"user".to_string()));
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "https://api.intercom.io/v1/users")
///     .body(json!({"email": "ben@example.com"}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// assert!(post_request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL for this request.
    pub url: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Headers to include in the request.
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `url` is empty
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.url.is_empty() {
            return Err(InvalidHttpRequestError::MissingUrl);
        }

        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Sets a header, replacing any existing value under the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    query: Option<HashMap<String, String>>,
    headers: HashMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            body_type: None,
            query: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            headers: self.headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display_and_wire_name() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://x.test/users")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, "https://x.test/users");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let result = HttpRequest::builder(HttpMethod::Post, "https://x.test/events").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));

        let result = HttpRequest::builder(HttpMethod::Put, "https://x.test/users").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Post, "https://x.test/users")
            .body(json!({"email": "a@b.c"}))
            .build();

        assert!(matches!(result, Err(InvalidHttpRequestError::MissingBodyType)));
    }

    #[test]
    fn test_verify_rejects_empty_url() {
        let result = HttpRequest::builder(HttpMethod::Get, "").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::MissingUrl)));
    }

    #[test]
    fn test_set_header_replaces_case_insensitively() {
        let mut request = HttpRequest::builder(HttpMethod::Get, "https://x.test/counts")
            .header("accept", "text/plain")
            .build()
            .unwrap();

        request.set_header("Accept", "application/json");

        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("ACCEPT"), Some("application/json"));
    }
}
