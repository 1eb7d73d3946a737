//! Core types: the select query model and the request it compiles to.
//!
//! - [`SelectQuery`] - the query model (`q`, paging, fields, sort, filters)
//! - [`FacetSet`], [`Facet`] - facet configuration
//! - [`Request`] - the built request
//!
//! # Example
//!
//! ```
//! use sieve_select::types::{
//!     FacetSet, FieldFacet, FilterQuery, SelectQuery, SortDirective,
//! };
//!
//! let query = SelectQuery::new()
//!     .with_query("title:rust")
//!     .with_sort(SortDirective::desc("price"))
//!     .with_filter_query(FilterQuery::new("inStock:true").with_tag("stock"))
//!     .with_facet_set(FacetSet::new().with_facet(FieldFacet::new("cat", "category")));
//!
//! assert_eq!(query.sort_spec().as_deref(), Some("price desc"));
//! ```

mod facet;
mod query;
mod request;

pub use facet::{
    Facet, FacetQueryEntry, FacetSet, FacetType, FieldFacet, MultiQueryFacet, QueryFacet,
    RangeFacet,
};

pub use query::{
    DEFAULT_FIELDS, DEFAULT_QUERY_STRING, DEFAULT_RESPONSE_WRITER, DEFAULT_ROWS, FilterQuery,
    SelectQuery, SortDirection, SortDirective,
};

pub use request::Request;
