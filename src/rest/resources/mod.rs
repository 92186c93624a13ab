//! Service-specific endpoint definitions.
//!
//! Each submodule holds one service root and the resources reachable from it:
//!
//! ```text
//! resources/
//!   mod.rs          <- This file
//!   intercom/       <- Intercom v1: users, messages, events, companies
//!   newrelic/       <- New Relic v2: applications and their instances/hosts
//! ```
//!
//! # Using Resources
//!
//! Resources are obtained from the service root and build [`ApiCall`]s:
//!
//! ```rust
//! use saas_api::rest::resources::intercom::{CountParams, Intercom};
//! use saas_api::rest::{ResponseParser, RestResource};
//! use saas_api::{ApiKey, AppId, HttpMethod, IntercomConfig};
//!
//! let config = IntercomConfig::builder()
//!     .app_id(AppId::new("app").unwrap())
//!     .api_key(ApiKey::new("key").unwrap())
//!     .build()
//!     .unwrap();
//! let intercom = Intercom::new(config);
//!
//! let call = intercom.counts().get(CountParams::new("user", "tag")).unwrap();
//! assert_eq!(call.request.http_method, HttpMethod::Get);
//! assert_eq!(call.request.url, "https://api.intercom.io/v1/counts");
//! assert_eq!(call.parser, ResponseParser::Json);
//! ```
//!
//! [`ApiCall`]: crate::rest::ApiCall

pub mod intercom;
pub mod newrelic;
