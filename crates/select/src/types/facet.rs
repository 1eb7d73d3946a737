//! Facet types.
//!
//! Facets are a closed set of kinds: field, query, multi-query and range.
//! The wire tag of each kind is exposed through [`FacetType`], which is also
//! the single place where an open-ended tag coming from outside the process
//! is checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// The declared kind of a facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetType {
    /// Counts per distinct value of a field.
    Field,
    /// Count of documents matching one query.
    Query,
    /// Counts for a group of queries, each with its own key.
    MultiQuery,
    /// Counts per bucket of a numeric or date range.
    Range,
}

impl FacetType {
    /// All supported facet kinds.
    pub const ALL: [FacetType; 4] = [
        FacetType::Field,
        FacetType::Query,
        FacetType::MultiQuery,
        FacetType::Range,
    ];
}

impl fmt::Display for FacetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetType::Field => write!(f, "field"),
            FacetType::Query => write!(f, "query"),
            FacetType::MultiQuery => write!(f, "multiquery"),
            FacetType::Range => write!(f, "range"),
        }
    }
}

impl FromStr for FacetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "field" => Ok(FacetType::Field),
            "query" => Ok(FacetType::Query),
            "multiquery" => Ok(FacetType::MultiQuery),
            "range" => Ok(FacetType::Range),
            _ => Err(format!("unknown facet type: {}", s)),
        }
    }
}

/// A field facet with optional per-field overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldFacet {
    /// Key used to label the facet in the response.
    pub key: String,
    /// The field to facet on.
    pub field: String,
    /// Maximum number of values returned for this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Ordering of the values (`count` or `index`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Only values starting with this prefix are counted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Offset into the list of values, for paging facet values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Minimum count for a value to be returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mincount: Option<u64>,
    /// Whether to count documents without a value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<bool>,
    /// Faceting algorithm (`enum`, `fc`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl FieldFacet {
    /// Creates a field facet without overrides.
    pub fn new(key: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            field: field.into(),
            ..Default::default()
        }
    }

    /// Sets the per-field limit.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the per-field sort.
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the per-field prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the per-field offset.
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the per-field minimum count.
    pub fn with_mincount(mut self, mincount: u64) -> Self {
        self.mincount = Some(mincount);
        self
    }

    /// Sets whether missing values are counted for this field.
    pub fn with_missing(mut self, missing: bool) -> Self {
        self.missing = Some(missing);
        self
    }

    /// Sets the faceting method for this field.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

/// A single facet query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFacet {
    /// Key used to label the count in the response.
    pub key: String,
    /// The query to count.
    pub query: String,
}

impl QueryFacet {
    /// Creates a facet query.
    pub fn new(key: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            query: query.into(),
        }
    }
}

/// One entry of a [`MultiQueryFacet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetQueryEntry {
    /// Key of this entry; this is the key that reaches the wire.
    pub key: String,
    /// The query to count.
    pub query: String,
}

/// A group of facet queries.
///
/// Only the entry keys are emitted; the group key identifies the group on the
/// client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiQueryFacet {
    /// Key of the group.
    pub key: String,
    /// Entries in insertion order, at most one per key.
    #[serde(default, deserialize_with = "unique_entries")]
    pub queries: Vec<FacetQueryEntry>,
}

impl MultiQueryFacet {
    /// Creates an empty group.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            queries: Vec::new(),
        }
    }

    /// Adds an entry. Reusing a key replaces that entry's query in place.
    pub fn with_query(mut self, key: impl Into<String>, query: impl Into<String>) -> Self {
        upsert_entry(
            &mut self.queries,
            FacetQueryEntry {
                key: key.into(),
                query: query.into(),
            },
        );
        self
    }

    /// Returns the entries with repeated keys collapsed: first position, last query.
    pub fn unique_queries(&self) -> Vec<FacetQueryEntry> {
        let mut entries = Vec::with_capacity(self.queries.len());
        for entry in &self.queries {
            upsert_entry(&mut entries, entry.clone());
        }
        entries
    }
}

fn upsert_entry(entries: &mut Vec<FacetQueryEntry>, entry: FacetQueryEntry) {
    match entries.iter_mut().find(|existing| existing.key == entry.key) {
        Some(existing) => existing.query = entry.query,
        None => entries.push(entry),
    }
}

fn unique_entries<'de, D>(deserializer: D) -> Result<Vec<FacetQueryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut entries = Vec::new();
    for entry in Vec::<FacetQueryEntry>::deserialize(deserializer)? {
        upsert_entry(&mut entries, entry);
    }
    Ok(entries)
}

/// A range facet.
///
/// Bounds and gap are kept as text so that numbers and date math such as
/// `NOW/DAY-7DAYS` or `+1DAY` pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFacet {
    /// Key used to label the facet in the response.
    pub key: String,
    /// The field to bucket.
    pub field: String,
    /// Lower bound.
    #[serde(deserialize_with = "scalar_string")]
    pub start: String,
    /// Upper bound.
    #[serde(deserialize_with = "scalar_string")]
    pub end: String,
    /// Bucket size.
    #[serde(deserialize_with = "scalar_string")]
    pub gap: String,
    /// Extra counts (`before`, `after`, `between`, `all`, `none`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
    /// Bound inclusion (`lower`, `upper`, `edge`, `outer`, `all`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

impl RangeFacet {
    /// Creates a range facet.
    pub fn new(
        key: impl Into<String>,
        field: impl Into<String>,
        start: impl ToString,
        end: impl ToString,
        gap: impl ToString,
    ) -> Self {
        Self {
            key: key.into(),
            field: field.into(),
            start: start.to_string(),
            end: end.to_string(),
            gap: gap.to_string(),
            other: None,
            include: None,
        }
    }

    /// Sets the `other` option.
    pub fn with_other(mut self, other: impl Into<String>) -> Self {
        self.other = Some(other.into());
        self
    }

    /// Sets the `include` option.
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }
}

/// Accepts a JSON string or number and keeps its textual form.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
    })
}

/// A facet of any supported kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Facet {
    /// Field facet.
    Field(FieldFacet),
    /// Facet query.
    Query(QueryFacet),
    /// Group of facet queries.
    MultiQuery(MultiQueryFacet),
    /// Range facet.
    Range(RangeFacet),
}

impl Facet {
    /// Returns the facet key.
    pub fn key(&self) -> &str {
        match self {
            Facet::Field(f) => &f.key,
            Facet::Query(f) => &f.key,
            Facet::MultiQuery(f) => &f.key,
            Facet::Range(f) => &f.key,
        }
    }

    /// Returns the declared kind of this facet.
    pub fn facet_type(&self) -> FacetType {
        match self {
            Facet::Field(_) => FacetType::Field,
            Facet::Query(_) => FacetType::Query,
            Facet::MultiQuery(_) => FacetType::MultiQuery,
            Facet::Range(_) => FacetType::Range,
        }
    }
}

impl From<FieldFacet> for Facet {
    fn from(facet: FieldFacet) -> Self {
        Facet::Field(facet)
    }
}

impl From<QueryFacet> for Facet {
    fn from(facet: QueryFacet) -> Self {
        Facet::Query(facet)
    }
}

impl From<MultiQueryFacet> for Facet {
    fn from(facet: MultiQueryFacet) -> Self {
        Facet::MultiQuery(facet)
    }
}

impl From<RangeFacet> for Facet {
    fn from(facet: RangeFacet) -> Self {
        Facet::Range(facet)
    }
}

/// Facets plus the options that apply to all of them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetSet {
    /// Count documents without a value (`facet.missing`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<bool>,
    /// Maximum number of values per field (`facet.limit`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Minimum count for a value to be returned (`facet.mincount`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mincount: Option<u64>,
    /// Ordering of values (`facet.sort`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Only count values with this prefix (`facet.prefix`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Facets in insertion order.
    pub facets: Vec<Facet>,
}

impl FacetSet {
    /// Creates an empty facet set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `facet.missing`.
    pub fn with_missing(mut self, missing: bool) -> Self {
        self.missing = Some(missing);
        self
    }

    /// Sets `facet.limit`.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets `facet.mincount`.
    pub fn with_mincount(mut self, mincount: u64) -> Self {
        self.mincount = Some(mincount);
        self
    }

    /// Sets `facet.sort`.
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets `facet.prefix`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Appends a facet.
    pub fn with_facet(mut self, facet: impl Into<Facet>) -> Self {
        self.facets.push(facet.into());
        self
    }

    /// Returns true when there is nothing to emit: no facets and no global option.
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
            && self.missing.is_none()
            && self.limit.is_none()
            && self.mincount.is_none()
            && self.sort.is_none()
            && self.prefix.is_none()
    }
}
