//! Error types for select request building.
//!
//! Building a request from an in-process [`SelectQuery`](crate::types::SelectQuery)
//! cannot fail. Errors only arise at the edges: decoding a query that was
//! described externally (where the facet `type` tag is open-ended), and
//! turning a built request into an absolute URL or `http::Request`.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The error type for all select operations.
#[derive(Error, Debug)]
pub enum SelectError {
    /// A facet declared a type that is not one of the supported kinds.
    #[error("unsupported facet type '{facet_type}' for facet '{key}'")]
    UnsupportedFacetType { facet_type: String, key: String },

    /// The query description is structurally invalid.
    #[error("invalid query description: {message}")]
    InvalidQuery { message: String },

    /// The configuration failed validation.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The base URL could not be parsed or joined.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// An `http::Request` could not be assembled.
    #[error(transparent)]
    Http(#[from] http::Error),
}

impl SelectError {
    /// Creates an [`SelectError::InvalidQuery`] from any message.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        SelectError::InvalidQuery {
            message: message.into(),
        }
    }

    /// Returns true if this error was caused by an unsupported facet type.
    pub fn is_unsupported_facet_type(&self) -> bool {
        matches!(self, SelectError::UnsupportedFacetType { .. })
    }
}

/// Result type for select operations.
pub type SelectResult<T> = Result<T, SelectError>;
