//! The (request descriptor, parser) pair every endpoint returns.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{DataType, HttpMethod, HttpRequest, HttpResponse};
use crate::rest::{serialize_to_query, ResourceError, ResponseParser};

/// A request descriptor together with the parser for its response.
///
/// Building an `ApiCall` never touches the network. Execute it with
/// [`Service::execute`](crate::rest::Service::execute), or send
/// [`request`](Self::request) with any transport and feed the response to
/// [`parse`](Self::parse).
///
/// # Example
///
/// ```rust
/// use saas_api::rest::{ApiCall, ResponseParser};
/// use saas_api::HttpMethod;
/// use serde_json::json;
///
/// let call = ApiCall::from_params(
///     HttpMethod::Get,
///     "https://api.intercom.io/v1/counts",
///     &json!({"type": "user", "count": "tag"}),
///     ResponseParser::Json,
/// )
/// .unwrap();
///
/// assert_eq!(call.request.http_method, HttpMethod::Get);
/// assert_eq!(call.request.query.as_ref().unwrap().len(), 2);
/// assert_eq!(call.parser, ResponseParser::Json);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    /// The request to send.
    pub request: HttpRequest,
    /// The parser to apply to the response.
    pub parser: ResponseParser,
}

impl ApiCall {
    /// Builds a call whose parameters travel in the query string.
    ///
    /// An empty parameter set produces a request without a query.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the parameters cannot be
    /// serialized, or [`ResourceError::InvalidRequest`] if the descriptor is invalid.
    pub fn from_params<P: Serialize + ?Sized>(
        method: HttpMethod,
        url: impl Into<String>,
        params: &P,
        parser: ResponseParser,
    ) -> Result<Self, ResourceError> {
        let query = serialize_to_query(params)?;
        Self::from_query(method, url, query, parser)
    }

    /// Builds a call from an already assembled query map.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidRequest`] if the descriptor is invalid.
    pub fn from_query(
        method: HttpMethod,
        url: impl Into<String>,
        query: HashMap<String, String>,
        parser: ResponseParser,
    ) -> Result<Self, ResourceError> {
        let mut builder = HttpRequest::builder(method, url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        Ok(Self {
            request: builder.build()?,
            parser,
        })
    }

    /// Builds a call whose parameters travel as a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidRequest`] if the descriptor is invalid.
    pub fn from_body(
        method: HttpMethod,
        url: impl Into<String>,
        body: Value,
        parser: ResponseParser,
    ) -> Result<Self, ResourceError> {
        let request = HttpRequest::builder(method, url)
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        Ok(Self { request, parser })
    }

    /// Applies this call's parser to a response.
    ///
    /// # Errors
    ///
    /// See [`ResponseParser::parse`].
    pub fn parse(&self, response: &HttpResponse) -> Result<Option<Value>, ResourceError> {
        self.parser.parse(response)
    }

    /// Splits the call into its request and parser.
    #[must_use]
    pub fn into_parts(self) -> (HttpRequest, ResponseParser) {
        (self.request, self.parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_params_with_empty_set_has_no_query() {
        let call = ApiCall::from_params(
            HttpMethod::Get,
            "https://root/companies",
            &(),
            ResponseParser::Json,
        )
        .unwrap();

        assert!(call.request.query.is_none());
        assert!(call.request.body.is_none());
    }

    #[test]
    fn test_from_body_sets_json_body_type() {
        let call = ApiCall::from_body(
            HttpMethod::Post,
            "https://root/events",
            json!({"event_name": "x"}),
            ResponseParser::Empty,
        )
        .unwrap();

        assert_eq!(call.request.body_type, Some(DataType::Json));
        assert_eq!(call.request.body, Some(json!({"event_name": "x"})));
        assert_eq!(call.parser, ResponseParser::Empty);
    }

    #[test]
    fn test_into_parts() {
        let call = ApiCall::from_query(
            HttpMethod::Delete,
            "https://root/applications/1.json",
            HashMap::new(),
            ResponseParser::Empty,
        )
        .unwrap();

        let (request, parser) = call.into_parts();
        assert_eq!(request.http_method, HttpMethod::Delete);
        assert_eq!(parser, ResponseParser::Empty);
    }
}
