//! Tests for requests built from JSON query descriptions.

mod common;

use serde_json::json;

use sieve_select::types::{
    FacetSet, FieldFacet, FilterQuery, MultiQueryFacet, QueryFacet, RangeFacet, SelectQuery,
    SortDirective,
};
use sieve_select::{RequestBuilder, SelectConfig, SelectError};

use common::{decoded_uri, with_defaults};

#[test]
fn test_json_matches_in_process_query() {
    let description = json!({
        "sort": [
            {"field": "id", "direction": "asc"},
            {"field": "name", "direction": "desc"}
        ],
        "filter_queries": [
            {"key": "f1", "query": "published:true"},
            {"key": "f2", "tags": ["t1", "t2"], "query": "category:23"}
        ],
        "facet_set": {
            "missing": true,
            "limit": 10,
            "facets": [
                {"type": "field", "key": "f1", "field": "owner"},
                {"type": "query", "key": "f2", "query": "category:23"},
                {"type": "multiquery", "key": "f3", "queries": [
                    {"key": "f4", "query": "category:40"}
                ]},
                {"type": "range", "key": "f5", "field": "price",
                 "start": "1", "end": 100, "gap": 10,
                 "other": "all", "include": "outer"}
            ]
        }
    });

    let query = SelectQuery::new()
        .with_sort(SortDirective::asc("id"))
        .with_sort(SortDirective::desc("name"))
        .with_filter_query(FilterQuery::new("published:true").with_key("f1"))
        .with_filter_query(
            FilterQuery::new("category:23")
                .with_key("f2")
                .with_tags(["t1", "t2"]),
        )
        .with_facet_set(
            FacetSet::new()
                .with_missing(true)
                .with_limit(10)
                .with_facet(FieldFacet::new("f1", "owner"))
                .with_facet(QueryFacet::new("f2", "category:23"))
                .with_facet(MultiQueryFacet::new("f3").with_query("f4", "category:40"))
                .with_facet(
                    RangeFacet::new("f5", "price", 1, 100, 10)
                        .with_other("all")
                        .with_include("outer"),
                ),
        );

    let builder = RequestBuilder::new();
    let from_json = builder.build_json(&description).unwrap();
    let in_process = builder.build(&query);
    assert_eq!(from_json, in_process);
}

#[test]
fn test_repeated_keys_collapse_the_same_way_in_json_and_in_process() {
    let description = json!({
        "sort": [
            {"field": "id", "direction": "asc"},
            {"field": "name", "direction": "desc"},
            {"field": "id", "direction": "desc"}
        ],
        "facet_set": {
            "facets": [{"type": "multiquery", "key": "f3", "queries": [
                {"key": "a", "query": "x:1"},
                {"key": "a", "query": "x:2"}
            ]}]
        }
    });

    let query = SelectQuery::new()
        .with_sort(SortDirective::asc("id"))
        .with_sort(SortDirective::desc("name"))
        .with_sort(SortDirective::desc("id"))
        .with_facet(
            MultiQueryFacet::new("f3")
                .with_query("a", "x:1")
                .with_query("a", "x:2"),
        );

    let builder = RequestBuilder::new();
    let from_json = builder.build_json(&description).unwrap();
    assert_eq!(from_json, builder.build(&query));
    assert_eq!(
        decoded_uri(&from_json),
        with_defaults("sort=id desc,name desc&facet=true&facet.query={!key=a}x:2")
    );
}

#[test]
fn test_json_text_defaults() {
    let request = RequestBuilder::new().build_json_str("{}").unwrap();
    assert_eq!(decoded_uri(&request), common::DEFAULT_URI);
}

#[test]
fn test_serialized_query_round_trips_through_builder() {
    let query = SelectQuery::new()
        .with_rows(5)
        .with_facet(RangeFacet::new("r", "price", 0, 100, 25).with_other("after"));
    let text = serde_json::to_string(&query).unwrap();

    let builder = RequestBuilder::new();
    assert_eq!(builder.build_json_str(&text).unwrap(), builder.build(&query));
}

#[test]
fn test_unknown_facet_type_fails_whole_build() {
    let result = RequestBuilder::new().build_json(&json!({
        "facet_set": {
            "facets": [
                {"type": "field", "key": "f0", "field": "category"},
                {"type": "unknown", "key": "f1", "field": "owner"}
            ]
        }
    }));

    match result {
        Err(SelectError::UnsupportedFacetType { facet_type, key }) => {
            assert_eq!(facet_type, "unknown");
            assert_eq!(key, "f1");
        }
        other => panic!("expected unsupported facet type, got {other:?}"),
    }
}

#[test]
fn test_malformed_facets_member() {
    let err = RequestBuilder::new()
        .build_json(&json!({"facet_set": {"facets": {"type": "field"}}}))
        .unwrap_err();
    assert!(matches!(err, SelectError::InvalidQuery { .. }));
}

#[test]
fn test_configured_handler_and_absolute_url() {
    let config = SelectConfig {
        handler: "browse".to_string(),
        base_url: "http://localhost:8983/solr/products/".to_string(),
    };
    config.ensure_valid().unwrap();

    let request = RequestBuilder::with_config(&config)
        .build_json(&json!({"facet_set": {"limit": 3}}))
        .unwrap();
    assert_eq!(
        decoded_uri(&request),
        with_defaults("facet=true&facet.limit=3").replacen("select", "browse", 1)
    );

    let url = request.absolute_url(&config.base_url().unwrap()).unwrap();
    assert_eq!(url.path(), "/solr/products/browse");
    assert_eq!(url.query_pairs().count(), 7);
}
