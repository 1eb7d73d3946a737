//! The request value produced by the builder.

use http::Method;
use url::Url;

use crate::error::SelectResult;

/// An HTTP request descriptor: method, relative URI and optional body.
///
/// The builder only produces `GET` requests without a body. The ordered
/// parameter list is kept next to the encoded URI so callers can inspect
/// what was emitted without decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    uri: String,
    body: Option<String>,
    params: Vec<(String, String)>,
}

impl Request {
    /// Creates a `GET` request without body.
    pub fn get(uri: impl Into<String>, params: Vec<(String, String)>) -> Self {
        Self {
            method: Method::GET,
            uri: uri.into(),
            body: None,
            params,
        }
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the relative URI (`<handler>?<encoded params>`).
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the raw body, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the emitted parameters, unencoded and in wire order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Returns every value emitted for `name`, in wire order.
    pub fn param_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params
            .iter()
            .filter(move |(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Resolves the relative URI against a base URL.
    ///
    /// The base should end with `/` for the handler to be appended rather
    /// than replace the last path segment.
    pub fn absolute_url(&self, base: &Url) -> SelectResult<Url> {
        Ok(base.join(&self.uri)?)
    }

    /// Converts into an `http::Request` addressed at `base`.
    pub fn to_http(&self, base: &Url) -> SelectResult<http::Request<()>> {
        let url = self.absolute_url(base)?;
        Ok(http::Request::builder()
            .method(self.method.clone())
            .uri(url.as_str())
            .body(())?)
    }
}
