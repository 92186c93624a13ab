//! REST resource infrastructure.
//!
//! This module provides the generic base every endpoint builds on:
//!
//! - **[`RestResource`] trait**: default `get`/`create`/`update`/`delete`
//!   gated by a per-resource [`Capabilities`] set
//! - **[`ApiCall`]**: the (request descriptor, [`ResponseParser`]) pair every
//!   endpoint method returns
//! - **[`RequestParams`]**: serializable parameter sets with local validation
//! - **Path building**: strict parent/segment/id URL composition
//! - **[`Service`] trait**: service roots that filter and execute calls
//! - **[`ResourceError`]**: error types for resource operations
//!
//! # Overview
//!
//! Building a call is pure. Endpoints either return exactly one `ApiCall` or
//! fail before any request exists. Concrete endpoints live in the
//! [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use saas_api::rest::resources::intercom::{Intercom, NewEvent};
//! use saas_api::rest::{RestResource, Service};
//! use saas_api::IntercomConfig;
//!
//! let intercom = Intercom::new(config);
//!
//! // Build only
//! let call = intercom.events().create(NewEvent::for_user("signed_up", 12345, 42))?;
//! assert!(call.request.body.is_some());
//!
//! // Build and execute
//! let client = intercom.http_client()?;
//! let counts = intercom
//!     .execute(&client, intercom.counts().get(CountParams::new("user", "tag"))?)
//!     .await?;
//! ```

mod call;
mod capabilities;
mod errors;
mod params;
mod parsers;
mod path;
mod resource;
mod service;

pub mod resources;

pub use call::ApiCall;
pub use capabilities::Capabilities;
pub use errors::ResourceError;
pub use params::{
    require_one_of, serialize_to_body, serialize_to_query, Presence, RequestParams,
};
pub use parsers::ResponseParser;
pub use path::{join_url, resource_url, Operation};
pub use resource::RestResource;
pub use service::Service;
