//! Select query model.
//!
//! A [`SelectQuery`] is the fully-populated input to the request builder.
//! The `with_*` helpers exist so callers and tests can assemble one in a
//! single expression; the builder itself only ever reads it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::facet::{Facet, FacetSet};

/// Query string used when none is given: match all documents.
pub const DEFAULT_QUERY_STRING: &str = "*:*";

/// Page size used when none is given.
pub const DEFAULT_ROWS: u64 = 10;

/// Field list emitted when no fields were selected: all stored fields plus score.
pub const DEFAULT_FIELDS: &str = "*,score";

/// Response writer used when none is given.
pub const DEFAULT_RESPONSE_WRITER: &str = "json";

/// Sort direction for a sort directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("unknown sort direction: {}", s)),
        }
    }
}

/// A single sort directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    /// The field to sort on.
    pub field: String,
    /// The sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortDirective {
    /// Creates a new sort directive.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Creates an ascending sort directive.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Creates a descending sort directive.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Adds `directive`, replacing the direction of an existing directive on the
/// same field in place.
pub(crate) fn upsert_sort(sort: &mut Vec<SortDirective>, directive: SortDirective) {
    match sort.iter_mut().find(|existing| existing.field == directive.field) {
        Some(existing) => existing.direction = directive.direction,
        None => sort.push(directive),
    }
}

/// Deserializes sort directives; a repeated field keeps its first position
/// and its last direction.
fn unique_sorts<'de, D>(deserializer: D) -> Result<Vec<SortDirective>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut sort = Vec::new();
    for directive in Vec::<SortDirective>::deserialize(deserializer)? {
        upsert_sort(&mut sort, directive);
    }
    Ok(sort)
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

/// An additional constraint applied without affecting scoring.
///
/// The `key` is carried for correlating filter results when parsing the
/// response; it is never part of the emitted `fq` value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    /// Optional identifier for this filter.
    pub key: Option<String>,
    /// The raw filter query text.
    pub query: String,
    /// Tags attached through a local parameter block.
    #[serde(alias = "tag")]
    pub tags: Vec<String>,
}

impl FilterQuery {
    /// Creates an untagged filter query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            key: None,
            query: query.into(),
            tags: Vec::new(),
        }
    }

    /// Sets the filter key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Adds several tags, keeping their order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

/// A select query, ready to be serialized into a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectQuery {
    /// The main query (`q`).
    pub query_string: String,
    /// Result offset (`start`).
    pub start: u64,
    /// Page size (`rows`).
    pub rows: u64,
    /// Fields to return (`fl`). `None` means [`DEFAULT_FIELDS`].
    pub fields: Option<Vec<String>>,
    /// Response format (`wt`).
    pub response_writer: String,
    /// Sort directives in the order they were added, at most one per field.
    #[serde(deserialize_with = "unique_sorts")]
    pub sort: Vec<SortDirective>,
    /// Filter queries in the order they were added.
    pub filter_queries: Vec<FilterQuery>,
    /// Facet configuration, if any.
    pub facet_set: Option<FacetSet>,
}

impl Default for SelectQuery {
    fn default() -> Self {
        Self {
            query_string: DEFAULT_QUERY_STRING.to_string(),
            start: 0,
            rows: DEFAULT_ROWS,
            fields: None,
            response_writer: DEFAULT_RESPONSE_WRITER.to_string(),
            sort: Vec::new(),
            filter_queries: Vec::new(),
            facet_set: None,
        }
    }
}

impl SelectQuery {
    /// Creates a query with all defaults (`*:*`, first ten rows, all fields).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the main query string.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query_string = query.into();
        self
    }

    /// Sets the result offset.
    pub fn with_start(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    /// Sets the page size.
    pub fn with_rows(mut self, rows: u64) -> Self {
        self.rows = rows;
        self
    }

    /// Adds a field to return.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field.into());
        self
    }

    /// Replaces the field list. An empty list is emitted as an empty `fl`.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the response writer.
    pub fn with_response_writer(mut self, writer: impl Into<String>) -> Self {
        self.response_writer = writer.into();
        self
    }

    /// Adds a sort directive. Sorting again on a field already present
    /// changes its direction but keeps its position.
    pub fn with_sort(mut self, directive: SortDirective) -> Self {
        upsert_sort(&mut self.sort, directive);
        self
    }

    /// Adds a filter query.
    pub fn with_filter_query(mut self, filter: FilterQuery) -> Self {
        self.filter_queries.push(filter);
        self
    }

    /// Sets the whole facet set.
    pub fn with_facet_set(mut self, facet_set: FacetSet) -> Self {
        self.facet_set = Some(facet_set);
        self
    }

    /// Adds a facet, creating the facet set if needed.
    pub fn with_facet(mut self, facet: impl Into<Facet>) -> Self {
        self.facet_set
            .get_or_insert_with(FacetSet::default)
            .facets
            .push(facet.into());
        self
    }

    /// Returns the `fl` value: the selected fields, or [`DEFAULT_FIELDS`]
    /// when none were set.
    pub fn field_list(&self) -> String {
        match &self.fields {
            Some(fields) => fields.join(","),
            None => DEFAULT_FIELDS.to_string(),
        }
    }

    /// Returns the `sort` value, or `None` when no sort was added.
    ///
    /// Directives pushed straight onto `sort` are collapsed per field the
    /// same way [`SelectQuery::with_sort`] does.
    pub fn sort_spec(&self) -> Option<String> {
        if self.sort.is_empty() {
            return None;
        }
        let mut sort = Vec::with_capacity(self.sort.len());
        for directive in &self.sort {
            upsert_sort(&mut sort, directive.clone());
        }
        Some(
            sort.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}
