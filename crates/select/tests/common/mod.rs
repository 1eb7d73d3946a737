//! Shared helpers for select request tests.

#![allow(dead_code)]

use sieve_select::Request;
use url::form_urlencoded;

/// Decodes the request URI the way a server would read it:
/// `<handler>?k1=v1&k2=v2...` with every key and value unescaped.
pub fn decoded_uri(request: &Request) -> String {
    let uri = request.uri();
    let Some((handler, query)) = uri.split_once('?') else {
        return uri.to_string();
    };

    let pairs = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", handler, pairs)
}

/// The decoded URI of a query with every default.
pub const DEFAULT_URI: &str = "select?q=*:*&start=0&rows=10&fl=*,score&wt=json";

/// `DEFAULT_URI` followed by `&<suffix>`.
pub fn with_defaults(suffix: &str) -> String {
    format!("{}&{}", DEFAULT_URI, suffix)
}

/// Parameter names in wire order.
pub fn param_names(request: &Request) -> Vec<&str> {
    request.params().iter().map(|(k, _)| k.as_str()).collect()
}
