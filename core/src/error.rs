//! Error types for generated API clients.
//!
//! # Design
//! Every failure of a generated method surfaces as an `ApiError` returned from
//! that call. The four top-level variants map one-to-one onto the stage that
//! failed: client creation, metadata inspection, the network round-trip, or
//! payload decoding. Nothing is retried and no placeholder value is returned.

use thiserror::Error;

/// Errors returned by `ClientFactory::create` and by generated client methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client could not be created from the given configuration or
    /// interface declaration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A method's declared metadata does not line up with how it was called.
    #[error("metadata mismatch in `{method}`: {source}")]
    MetadataMismatch {
        method: String,
        #[source]
        source: MetadataError,
    },

    /// The request could not be executed or the server rejected it.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body does not conform to the declared return type.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ApiError {
    pub(crate) fn mismatch(method: &str, source: MetadataError) -> Self {
        ApiError::MetadataMismatch {
            method: method.to_string(),
            source,
        }
    }
}

/// Ways a method's metadata can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("no method named `{0}` in the dispatch table")]
    UnknownMethod(String),

    #[error("method has no endpoint tag")]
    MissingEndpoint,

    #[error("method has {0} endpoint tags, expected exactly one")]
    DuplicateEndpoint(usize),

    /// The call passed a different number of arguments than the method
    /// declares parameters.
    #[error("{args} arguments for {params} declared parameters")]
    ArgumentCount { params: usize, args: usize },

    /// Field tags and argument values must align positionally.
    #[error("{fields} field tags for {args} arguments")]
    FieldCount { fields: usize, args: usize },
}

/// Failures at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, timeout, or a broken body read.
    #[error("transport failed: {0}")]
    Connection(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// The payload could not be decoded into the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("decoding failed: {0}")]
pub struct DecodeError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_the_method() {
        let err = ApiError::mismatch("repos", MetadataError::FieldCount { fields: 1, args: 2 });
        assert_eq!(
            err.to_string(),
            "metadata mismatch in `repos`: 1 field tags for 2 arguments"
        );
    }

    #[test]
    fn transport_and_decode_convert_into_api_error() {
        let err: ApiError = TransportError::Status {
            status: 503,
            body: "down".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "HTTP 503: down");

        let err: ApiError = DecodeError("expected value".to_string()).into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
