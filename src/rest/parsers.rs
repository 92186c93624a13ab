//! Response parsers.
//!
//! Every [`ApiCall`](crate::rest::ApiCall) names the parser that turns the
//! raw response into its result. Parsers are pure: they look only at the
//! status code and body.

use serde_json::Value;

use crate::clients::{HttpError, HttpResponse, HttpResponseError};
use crate::rest::ResourceError;

/// The parser applied to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseParser {
    /// Decode the body as JSON.
    Json,
    /// Discard the body; used for fire-and-forget writes.
    Empty,
}

impl ResponseParser {
    /// Parses a raw response.
    ///
    /// Returns `Some(value)` for [`ResponseParser::Json`] and `None` for
    /// [`ResponseParser::Empty`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for a non-2xx status and
    /// [`ResourceError::Parse`] when a JSON body cannot be decoded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use saas_api::clients::HttpResponse;
    /// use saas_api::rest::ResponseParser;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), r#"{"count": 3}"#);
    /// let value = ResponseParser::Json.parse(&response).unwrap().unwrap();
    /// assert_eq!(value["count"], 3);
    ///
    /// assert!(ResponseParser::Empty.parse(&response).unwrap().is_none());
    /// ```
    pub fn parse(self, response: &HttpResponse) -> Result<Option<Value>, ResourceError> {
        if !response.is_ok() {
            return Err(ResourceError::Http(HttpError::Response(HttpResponseError {
                code: response.code,
                message: response.body.clone(),
            })));
        }

        match self {
            Self::Json => serde_json::from_str(&response.body)
                .map(Some)
                .map_err(|source| ResourceError::Parse { source }),
            Self::Empty => Ok(None),
        }
    }
}
