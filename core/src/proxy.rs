//! The single dispatch routine behind every generated client method.
//!
//! # Design
//! A generated method does nothing but forward its name and arguments to
//! `Proxy::invoke`. The proxy owns the dispatch table built at creation time
//! and drives one call through four stages:
//!
//! 1. dispatched: look up the descriptor, its single endpoint tag, and
//!    check the argument count against the declared parameters
//! 2. URL built: fold fields and arguments into the query string
//! 3. response received: execute through the injected `Transport`
//! 4. decoded: hand the body to the injected `Codec`
//!
//! Any failure aborts the call and is returned as-is. The proxy holds no
//! per-call state, so one instance can serve concurrent calls.

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::codec::{Codec, JsonCodec};
use crate::error::{ApiError, MetadataError, TransportError};
use crate::http::{HttpRequest, Transport};
use crate::metadata::MethodDescriptor;
use crate::query::{self, QueryEncoding};

/// Stage an invocation failed in, recorded on failure events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Dispatched,
    UrlBuilt,
    ResponseReceived,
    Decoded,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Stage::Dispatched => "dispatched",
            Stage::UrlBuilt => "url_built",
            Stage::ResponseReceived => "response_received",
            Stage::Decoded => "decoded",
        }
    }
}

pub struct Proxy<C = JsonCodec> {
    interface: &'static str,
    base_url: String,
    encoding: QueryEncoding,
    table: HashMap<&'static str, MethodDescriptor>,
    transport: Arc<dyn Transport>,
    codec: C,
}

impl<C: Codec> Proxy<C> {
    pub(crate) fn new(
        interface: &'static str,
        base_url: String,
        encoding: QueryEncoding,
        table: HashMap<&'static str, MethodDescriptor>,
        transport: Arc<dyn Transport>,
        codec: C,
    ) -> Self {
        Self {
            interface,
            base_url,
            encoding,
            table,
            transport,
            codec,
        }
    }

    /// Run one call of `method` with `args` in declaration order.
    pub fn invoke<T: DeserializeOwned>(
        &self,
        method: &str,
        args: &[&dyn Display],
    ) -> Result<T, ApiError> {
        let call_id = Uuid::new_v4();
        let fail = |stage: Stage, err: ApiError| {
            tracing::warn!(
                %call_id,
                interface = self.interface,
                method,
                stage = stage.as_str(),
                error = %err,
                "invocation failed"
            );
            err
        };

        let descriptor = self.table.get(method).ok_or_else(|| {
            let err = MetadataError::UnknownMethod(method.to_string());
            fail(Stage::Dispatched, ApiError::mismatch(method, err))
        })?;
        let endpoint = descriptor
            .resolve_endpoint()
            .map_err(|e| fail(Stage::Dispatched, ApiError::mismatch(method, e)))?;
        if args.len() != descriptor.arity() {
            let err = MetadataError::ArgumentCount {
                params: descriptor.arity(),
                args: args.len(),
            };
            return Err(fail(Stage::Dispatched, ApiError::mismatch(method, err)));
        }

        let url = query::build_url_with(
            self.encoding,
            &self.base_url,
            endpoint,
            &descriptor.fields,
            args,
        )
        .map_err(|e| fail(Stage::UrlBuilt, ApiError::mismatch(method, e)))?;
        let request = HttpRequest {
            method: endpoint.method,
            url,
        };
        tracing::debug!(%call_id, interface = self.interface, method, request = %request, "dispatching");

        let response = self
            .transport
            .execute(&request)
            .map_err(|e| fail(Stage::ResponseReceived, e.into()))?;
        if !response.is_success() {
            let err = TransportError::Status {
                status: response.status,
                body: response.body,
            };
            return Err(fail(Stage::ResponseReceived, err.into()));
        }

        let value = self
            .codec
            .decode(&response.body)
            .map_err(|e| fail(Stage::Decoded, e.into()))?;
        tracing::debug!(%call_id, interface = self.interface, method, "completed");
        Ok(value)
    }

    pub fn interface(&self) -> &'static str {
        self.interface
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl<C: fmt::Debug> fmt::Debug for Proxy<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<_> = self.table.keys().collect();
        methods.sort();
        f.debug_struct("Proxy")
            .field("interface", &self.interface)
            .field("base_url", &self.base_url)
            .field("encoding", &self.encoding)
            .field("methods", &methods)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
