//! Declared HTTP APIs turned into working clients.
//!
//! # Overview
//! An API is declared once with `http_api!`: a trait whose methods carry a
//! `GET` path and whose parameters carry query-field names. The macro
//! generates a client type implementing that trait. `ClientFactory` creates
//! instances of it with an injected `Transport` and `Codec`; each method call
//! builds the URL, executes the request and decodes the body into the
//! declared return type.
//!
//! # Design
//! - Generated clients are stateless beyond their base URL and dispatch
//!   table, so one instance can be shared across threads.
//! - Every generated method funnels into `Proxy::invoke`; the per-method
//!   code is only the name and argument list.
//! - The transport is the only I/O boundary and is injected, which keeps the
//!   pipeline testable with spies and stubs.
//! - Query values are written verbatim unless `ClientConfig::encode_query`
//!   is set.

pub mod codec;
pub mod config;
pub mod error;
pub mod factory;
pub mod http;
mod macros;
pub mod metadata;
pub mod proxy;
pub mod query;
pub mod trending;
pub mod types;

pub use codec::{Codec, JsonCodec};
pub use config::ClientConfig;
pub use error::{ApiError, DecodeError, MetadataError, TransportError};
pub use factory::{create_client, ApiService, ClientFactory};
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use metadata::{Endpoint, Field, HttpMethod, MethodDescriptor};
pub use proxy::Proxy;
pub use query::{build_url, build_url_encoded, QueryEncoding};
pub use trending::{TrendingApi, TrendingClient};
pub use types::{Repo, RepoList};
