//! Select request builder
//!
//! This crate compiles a structured select query (query string, paging,
//! field list, sorting, filter queries and facets) into the `GET` request a
//! Solr-style search server expects. Serialization is deterministic: the
//! parameter order is fixed and part of the contract.
//!
//! # Architecture
//!
//! - [`types`] - query model, facets and the [`Request`](types::Request) value
//! - [`builder`] - the request builder and facet serialization
//! - [`decode`] - queries described as JSON, with facet type checking
//! - [`config`] - handler path and base URL
//! - [`error`] - error types
//!
//! # Quick Start
//!
//! ```
//! use sieve_select::RequestBuilder;
//! use sieve_select::types::{FilterQuery, SelectQuery, SortDirective};
//!
//! let query = SelectQuery::new()
//!     .with_sort(SortDirective::asc("id"))
//!     .with_filter_query(FilterQuery::new("category:23").with_tags(["t1", "t2"]));
//!
//! let request = RequestBuilder::new().build(&query);
//!
//! assert_eq!(request.method(), &http::Method::GET);
//! assert_eq!(request.body(), None);
//! assert_eq!(
//!     request.param_values("fq").collect::<Vec<_>>(),
//!     vec!["{!tag=t1,t2}category:23"]
//! );
//! ```
//!
//! # External query descriptions
//!
//! ```
//! use serde_json::json;
//! use sieve_select::{RequestBuilder, SelectError};
//!
//! let result = RequestBuilder::new().build_json(&json!({
//!     "facet_set": { "facets": [{ "type": "heatmap", "key": "h" }] }
//! }));
//!
//! assert!(matches!(result, Err(SelectError::UnsupportedFacetType { .. })));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builder;
pub mod config;
pub mod decode;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use builder::RequestBuilder;
pub use config::SelectConfig;
pub use error::{SelectError, SelectResult};
pub use types::{Facet, FacetSet, Request, SelectQuery};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
