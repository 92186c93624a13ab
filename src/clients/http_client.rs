//! HTTP client for executing request descriptors.
//!
//! This module provides the [`HttpClient`] type, the transport that sends an
//! [`HttpRequest`] and hands back the raw [`HttpResponse`].

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for sending request descriptors.
///
/// The client handles:
/// - Default headers including User-Agent and Accept
/// - Merging per-request headers (auth, content type) over the defaults
/// - Query string and JSON body encoding
/// - Mapping non-2xx responses to [`HttpError::Response`]
///
/// It does not retry.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use saas_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(None)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://api.newrelic.com/v2/applications.json")
///     .header("X-Api-Key", "secret")
///     .build()?;
///
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `user_agent_prefix` - Optional prefix placed before the library's own User-Agent
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(user_agent_prefix: Option<&str>) -> Result<Self, HttpError> {
        let user_agent_prefix =
            user_agent_prefix.map_or_else(String::new, |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}SaaS API Bindings v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.merged_headers(&request.headers);
        if let Some(body_type) = &request.body_type {
            headers.retain(|key, _| !key.eq_ignore_ascii_case("Content-Type"));
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = request.http_method.as_str(),
            url = %request.url,
            "Sending request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            method = request.http_method.as_str(),
            url = %request.url,
            code,
            request_id = response.header("x-request-id"),
            "Request failed"
        );

        let message = if response.body.is_empty() {
            "<empty body>".to_string()
        } else {
            response.body
        };
        Err(HttpError::Response(HttpResponseError { code, message }))
    }

    /// Overlays request headers on the client defaults, case-insensitively.
    fn merged_headers(&self, extra: &HashMap<String, String>) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        for (key, value) in extra {
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
            headers.insert(key.clone(), value.clone());
        }
        headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
