//! Request building.
//!
//! [`RequestBuilder`] walks a query in a fixed order and collects parameters
//! in a [`ParamList`]; facet kinds are serialized by [`facet_handlers`] and
//! every `{!...}` prefix goes through [`local_params`].

pub mod facet_handlers;
pub mod local_params;
pub mod params;
pub mod request_builder;

pub use params::ParamList;
pub use request_builder::{DEFAULT_HANDLER, RequestBuilder};
