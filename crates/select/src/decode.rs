//! Decoding of externally described queries.
//!
//! Queries can arrive as JSON, for example from a configuration file or an
//! upstream service. Facets in such a description carry an open-ended
//! `"type"` tag; a tag outside [`FacetType`] is reported as
//! [`SelectError::UnsupportedFacetType`] before anything is built.
//!
//! ```
//! use serde_json::json;
//! use sieve_select::decode::query_from_json;
//!
//! let query = query_from_json(&json!({
//!     "query_string": "title:rust",
//!     "rows": 25,
//!     "sort": [{"field": "price", "direction": "desc"}],
//!     "facet_set": {
//!         "limit": 10,
//!         "facets": [{"type": "field", "key": "f1", "field": "owner"}]
//!     }
//! }))
//! .unwrap();
//!
//! assert_eq!(query.rows, 25);
//! assert_eq!(query.start, 0);
//! ```

use serde_json::Value;

use crate::error::{SelectError, SelectResult};
use crate::types::{FacetType, SelectQuery};

/// Decodes a query from a JSON value. Missing members take their defaults.
pub fn query_from_json(description: &Value) -> SelectResult<SelectQuery> {
    if !description.is_object() {
        return Err(SelectError::invalid_query("expected a JSON object"));
    }

    let mut description = description.clone();
    if let Some(facets) = description
        .get_mut("facet_set")
        .and_then(|facet_set| facet_set.get_mut("facets"))
    {
        let facets = facets
            .as_array_mut()
            .ok_or_else(|| SelectError::invalid_query("facet_set.facets must be an array"))?;
        for facet in facets.iter_mut() {
            // Tags are matched case-insensitively; serde expects the canonical form.
            let facet_type = check_facet_type(facet)?;
            facet["type"] = Value::String(facet_type.to_string());
        }
    }

    Ok(serde_json::from_value(description)?)
}

/// Decodes a query from JSON text.
pub fn query_from_str(description: &str) -> SelectResult<SelectQuery> {
    let value: Value = serde_json::from_str(description)?;
    query_from_json(&value)
}

/// Checks the `"type"` tag of one facet description.
pub fn check_facet_type(facet: &Value) -> SelectResult<FacetType> {
    let key = facet
        .get("key")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let facet_type = facet
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| SelectError::invalid_query(format!("facet '{}' has no type", key)))?;

    facet_type.parse::<FacetType>().map_err(|_| {
        tracing::warn!(facet_type, key = %key, "unsupported facet type");
        SelectError::UnsupportedFacetType {
            facet_type: facet_type.to_string(),
            key,
        }
    })
}
