//! Creation of generated clients.
//!
//! # Design
//! `ClientFactory` owns the collaborators a client needs (transport, codec,
//! config) and injects them into every client it creates. Creation validates
//! the configuration and builds the method-name → descriptor dispatch table
//! once; it performs no I/O.
//!
//! Per-method endpoint and argument checks are deliberately left to dispatch
//! time so a malformed method only fails when it is called.

use std::collections::HashMap;
use std::sync::Arc;

use url::Url;

use crate::codec::{Codec, JsonCodec};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{Transport, UreqTransport};
use crate::metadata::MethodDescriptor;
use crate::proxy::Proxy;

/// Implemented by client types generated with `http_api!`.
///
/// Only `ClientFactory` needs this; it is not part of a generated client's
/// public surface.
#[doc(hidden)]
pub trait ApiService: Sized {
    type Codec: Codec;

    /// Name of the declared interface, used in logs and errors.
    const NAME: &'static str;

    /// One descriptor per declared method, in declaration order.
    fn descriptors() -> Vec<MethodDescriptor>;

    fn from_proxy(proxy: Proxy<Self::Codec>) -> Self;
}

pub struct ClientFactory<C = JsonCodec> {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    codec: C,
}

impl ClientFactory<JsonCodec> {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            codec: JsonCodec,
        }
    }
}

impl<C: Codec + Clone> ClientFactory<C> {
    /// Replace the codec used by clients created from now on.
    pub fn with_codec<D: Codec + Clone>(self, codec: D) -> ClientFactory<D> {
        ClientFactory {
            config: self.config,
            transport: self.transport,
            codec,
        }
    }

    /// Build a client for the interface `S`.
    ///
    /// Fails with `ApiError::Configuration` when the base URL is not an
    /// absolute http(s) URL, when an endpoint path does not start with `/`,
    /// or when two methods share a name.
    pub fn create<S: ApiService<Codec = C>>(&self) -> Result<S, ApiError> {
        let base_url = validate_base_url(self.config.normalized_base_url())?;
        let table = dispatch_table(S::NAME, S::descriptors())?;

        tracing::debug!(
            interface = S::NAME,
            methods = table.len(),
            base_url = %base_url,
            "created client"
        );

        Ok(S::from_proxy(Proxy::new(
            S::NAME,
            base_url,
            self.config.query_encoding(),
            table,
            Arc::clone(&self.transport),
            self.codec.clone(),
        )))
    }
}

/// Create a client for `S` that talks JSON over `ureq`.
pub fn create_client<S: ApiService<Codec = JsonCodec>>(config: ClientConfig) -> Result<S, ApiError> {
    ClientFactory::new(config, Arc::new(UreqTransport::new())).create()
}

fn validate_base_url(base: &str) -> Result<String, ApiError> {
    let parsed =
        Url::parse(base).map_err(|e| ApiError::Configuration(format!("invalid base url `{base}`: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::Configuration(format!(
            "base url `{base}` must use http or https"
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ApiError::Configuration(format!(
            "base url `{base}` must not carry a query or fragment"
        )));
    }
    Ok(base.to_string())
}

fn dispatch_table(
    interface: &str,
    descriptors: Vec<MethodDescriptor>,
) -> Result<HashMap<&'static str, MethodDescriptor>, ApiError> {
    let mut table = HashMap::with_capacity(descriptors.len());
    for descriptor in descriptors {
        if let Some(endpoint) = descriptor.endpoints.iter().find(|e| !e.path.starts_with('/')) {
            return Err(ApiError::Configuration(format!(
                "{interface}::{}: path `{}` must start with `/`",
                descriptor.name, endpoint.path
            )));
        }
        let name = descriptor.name;
        if table.insert(name, descriptor).is_some() {
            return Err(ApiError::Configuration(format!(
                "{interface}: method `{name}` declared twice"
            )));
        }
    }
    Ok(table)
}
