//! Service roots.
//!
//! A service root owns the API root URL and the filters every outgoing
//! request of that service passes through (authentication, content
//! headers). Resources are reached through accessors on the root.

use serde_json::Value;

use crate::clients::{HttpClient, HttpRequest};
use crate::rest::{ApiCall, ResourceError};

/// The root of a remote service.
///
/// Implementors supply [`api_root`](Self::api_root) and
/// [`apply_filters`](Self::apply_filters); `prepare` and `execute` are
/// provided.
#[allow(async_fn_in_trait)]
pub trait Service {
    /// The service name used in logs (e.g., "Intercom").
    const NAME: &'static str;

    /// Returns the API root that resource URLs nest under.
    fn api_root(&self) -> &str;

    /// Applies service-wide headers to a request.
    fn apply_filters(&self, request: &mut HttpRequest);

    /// Returns the configured User-Agent prefix, if any.
    fn user_agent_prefix(&self) -> Option<&str> {
        None
    }

    /// Creates an [`HttpClient`] whose User-Agent carries this service's
    /// configured prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the client cannot be created.
    fn http_client(&self) -> Result<HttpClient, ResourceError> {
        Ok(HttpClient::new(self.user_agent_prefix())?)
    }

    /// Applies the filters to a call, returning the request ready to send.
    fn prepare(&self, call: ApiCall) -> ApiCall {
        let ApiCall {
            mut request,
            parser,
        } = call;
        self.apply_filters(&mut request);
        ApiCall { request, parser }
    }

    /// Sends a call and parses its response.
    ///
    /// Returns `Some(value)` for JSON calls and `None` for calls using the
    /// empty parser.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport failures and non-2xx
    /// responses, and [`ResourceError::Parse`] for undecodable bodies.
    async fn execute(
        &self,
        client: &HttpClient,
        call: ApiCall,
    ) -> Result<Option<Value>, ResourceError> {
        let (request, parser) = self.prepare(call).into_parts();
        tracing::debug!(
            service = Self::NAME,
            method = request.http_method.as_str(),
            url = %request.url,
            "Executing call"
        );
        let response = client.request(request).await?;
        parser.parse(&response)
    }
}
