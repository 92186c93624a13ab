//! # SaaS API Bindings
//!
//! Thin REST bindings for third-party SaaS APIs (Intercom, New Relic). Every
//! endpoint method builds a request descriptor and names the parser for its
//! response; nothing touches the network until the caller executes it.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`IntercomConfig`] and [`NewRelicConfig`]
//! - Validated newtypes for credentials and API roots
//! - A generic resource base with per-resource capability sets
//!   ([`rest::RestResource`], [`rest::Capabilities`])
//! - Endpoint definitions for Intercom and New Relic
//!   ([`rest::resources`])
//! - An async HTTP client to execute the built calls ([`HttpClient`])
//!
//! ## Quick Start
//!
//! ```rust
//! use saas_api::rest::resources::intercom::{CountParams, Intercom};
//! use saas_api::rest::{ResponseParser, RestResource};
//! use saas_api::{ApiKey, AppId, HttpMethod, IntercomConfig};
//!
//! let config = IntercomConfig::builder()
//!     .app_id(AppId::new("your-app-id").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! let intercom = Intercom::new(config);
//!
//! let call = intercom.counts().get(CountParams::new("user", "tag")).unwrap();
//! assert_eq!(call.request.http_method, HttpMethod::Get);
//! assert_eq!(call.parser, ResponseParser::Json);
//! ```
//!
//! ## Executing Calls
//!
//! A service root applies its authentication filters and runs the call's
//! parser on the response:
//!
//! ```rust,ignore
//! use saas_api::rest::resources::newrelic::{ApplicationListParams, NewRelic};
//! use saas_api::rest::{RestResource, Service};
//!
//! let newrelic = NewRelic::from_api_key("your-api-key")?;
//! let client = newrelic.http_client()?;
//!
//! let call = newrelic.applications().get(ApplicationListParams::default())?;
//! let applications = newrelic.execute(&client, call).await?;
//! ```
//!
//! Calls can also be sent with any other transport: send
//! [`ApiCall::request`](rest::ApiCall::request) and pass the response to
//! [`ApiCall::parse`](rest::ApiCall::parse).
//!
//! ## Unsupported Operations
//!
//! Verbs a resource disables fail before any request is built:
//!
//! ```rust
//! use saas_api::rest::resources::intercom::Intercom;
//! use saas_api::rest::{Operation, ResourceError, RestResource};
//!
//! let intercom = Intercom::from_credentials("app", "key").unwrap();
//! let result = intercom.events().delete();
//!
//! assert!(matches!(
//!     result,
//!     Err(ResourceError::MethodNotSupported { operation: Operation::Delete, .. })
//! ));
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (request dispatch, rejected
//! operations, failed responses) and installs no subscriber.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    ApiKey, ApiRoot, AppId, IntercomConfig, IntercomConfigBuilder, NewRelicConfig,
    NewRelicConfigBuilder, INTERCOM_API_ROOT, NEWRELIC_API_ROOT,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};
