//! URL synthesis from a method's descriptors and its argument values.
//!
//! The URL is `base + path` followed by one `key=value` term per
//! (field, argument) pair, in declaration order: `?` before the first term,
//! `&` before every later one.
//!
//! `build_url` does not escape anything. A value containing `&`, `=`, `?` or
//! `#` produces a URL with a different meaning than intended. Callers that
//! cannot rule that out use `build_url_encoded`, which applies
//! `application/x-www-form-urlencoded` escaping to keys and values.

use std::fmt::Display;

use url::form_urlencoded;

use crate::error::MetadataError;
use crate::metadata::{Endpoint, Field};

/// How keys and values are written into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryEncoding {
    /// Written verbatim.
    #[default]
    Raw,
    /// Form-urlencoded.
    Form,
}

/// Build the request URL with keys and values written verbatim.
pub fn build_url<V: Display>(
    base: &str,
    endpoint: &Endpoint,
    fields: &[Field],
    args: &[V],
) -> Result<String, MetadataError> {
    build_url_with(QueryEncoding::Raw, base, endpoint, fields, args)
}

/// Build the request URL with form-urlencoded keys and values.
pub fn build_url_encoded<V: Display>(
    base: &str,
    endpoint: &Endpoint,
    fields: &[Field],
    args: &[V],
) -> Result<String, MetadataError> {
    build_url_with(QueryEncoding::Form, base, endpoint, fields, args)
}

pub fn build_url_with<V: Display>(
    encoding: QueryEncoding,
    base: &str,
    endpoint: &Endpoint,
    fields: &[Field],
    args: &[V],
) -> Result<String, MetadataError> {
    if fields.len() != args.len() {
        return Err(MetadataError::FieldCount {
            fields: fields.len(),
            args: args.len(),
        });
    }

    let mut url = format!("{base}{}", endpoint.path);
    for (i, (field, arg)) in fields.iter().zip(args).enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        push_term(&mut url, encoding, field.key, &arg.to_string());
    }
    Ok(url)
}

fn push_term(url: &mut String, encoding: QueryEncoding, key: &str, value: &str) {
    match encoding {
        QueryEncoding::Raw => {
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        QueryEncoding::Form => {
            url.extend(form_urlencoded::byte_serialize(key.as_bytes()));
            url.push('=');
            url.extend(form_urlencoded::byte_serialize(value.as_bytes()));
        }
    }
}
