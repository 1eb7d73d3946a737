//! Select request builder.
//!
//! Translates a [`SelectQuery`] into a `GET` [`Request`] whose query string
//! follows a fixed parameter order:
//!
//! ```text
//! select?q=..&start=..&rows=..&fl=..&wt=..[&sort=..][&fq=..]*[&facet=true..]
//! ```

use serde_json::Value;

use crate::config::SelectConfig;
use crate::decode;
use crate::error::SelectResult;
use crate::types::{Request, SelectQuery};

use super::facet_handlers;
use super::local_params;
use super::params::ParamList;

/// Default handler path.
pub const DEFAULT_HANDLER: &str = "select";

/// Builds select requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    handler: String,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            handler: DEFAULT_HANDLER.to_string(),
        }
    }
}

impl RequestBuilder {
    /// Creates a builder for the default `select` handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder using the handler from `config`.
    pub fn with_config(config: &SelectConfig) -> Self {
        Self::new().with_handler(config.handler.as_str())
    }

    /// Sets the handler path the parameters are appended to.
    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = handler.into();
        self
    }

    /// Returns the handler path.
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Builds the request for a query.
    pub fn build(&self, query: &SelectQuery) -> Request {
        let mut params = ParamList::new();

        params.push("q", &query.query_string);
        params.push("start", query.start);
        params.push("rows", query.rows);
        params.push("fl", query.field_list());
        params.push("wt", &query.response_writer);
        params.push_opt("sort", query.sort_spec());

        for filter in &query.filter_queries {
            params.push("fq", local_params::with_tags(&filter.tags, &filter.query));
        }

        if let Some(facet_set) = &query.facet_set {
            facet_handlers::append_facet_set(&mut params, facet_set);
        }

        tracing::debug!(
            handler = %self.handler,
            params = params.len(),
            "built select request"
        );

        params.into_request(&self.handler)
    }

    /// Decodes a JSON query description and builds its request.
    ///
    /// Fails with [`SelectError::UnsupportedFacetType`](crate::SelectError::UnsupportedFacetType)
    /// when a facet declares a type outside the supported set; no request is
    /// produced in that case.
    pub fn build_json(&self, description: &Value) -> SelectResult<Request> {
        let query = decode::query_from_json(description)?;
        Ok(self.build(&query))
    }

    /// Same as [`RequestBuilder::build_json`], from JSON text.
    pub fn build_json_str(&self, description: &str) -> SelectResult<Request> {
        let query = decode::query_from_str(description)?;
        Ok(self.build(&query))
    }
}
