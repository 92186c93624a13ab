//! HTTP response type.
//!
//! [`HttpResponse`] carries the raw body text. Decoding it is the job of the
//! [`ResponseParser`](crate::rest::ResponseParser) attached to each call.

use std::collections::HashMap;

/// A raw HTTP response.
///
/// Header names are stored lowercase; a header may have multiple values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, normalizing header names to lowercase.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::new();
        for (name, values) in headers {
            normalized
                .entry(name.to_lowercase())
                .or_default()
                .extend(values);
        }

        Self {
            code,
            headers: normalized,
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_covers_2xx_range() {
        assert!(HttpResponse::new(200, HashMap::new(), "").is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(302, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(422, HashMap::new(), "").is_ok());
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            vec!["application/json".to_string()],
        );
        let response = HttpResponse::new(200, headers, "{}");

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }
}
