//! Endpoint and field descriptors attached to declared API methods.
//!
//! # Design
//! Descriptors are built once, when a client is created, and only read
//! afterwards. A `MethodDescriptor` keeps every endpoint tag it was declared
//! with instead of assuming exactly one, so a method with zero or several
//! tags is rejected explicitly at dispatch time.

use std::fmt;

use crate::error::MetadataError;

/// HTTP verb of an endpoint. Only `GET` is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verb plus fixed path of a method, e.g. `GET /repo`.
///
/// Paths are used verbatim; `{id}`-style placeholders are not substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
        }
    }
}

/// Query-parameter key a method parameter maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
}

impl Field {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

/// Everything known about one declared method.
///
/// `fields` must line up positionally with the method's parameters. The
/// descriptor does not enforce that on construction; `query::build_url`
/// rejects a length mismatch before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: &'static str,
    pub params: Vec<&'static str>,
    pub endpoints: Vec<Endpoint>,
    pub fields: Vec<Field>,
}

impl MethodDescriptor {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
            endpoints: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'static str) -> Self {
        self.params.push(name);
        self
    }

    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Shorthand for a parameter tagged with a field of the same key.
    pub fn query(self, key: &'static str) -> Self {
        self.param(key).field(Field::new(key))
    }

    /// The method's single endpoint tag.
    pub fn resolve_endpoint(&self) -> Result<&Endpoint, MetadataError> {
        match self.endpoints.as_slice() {
            [endpoint] => Ok(endpoint),
            [] => Err(MetadataError::MissingEndpoint),
            many => Err(MetadataError::DuplicateEndpoint(many.len())),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
