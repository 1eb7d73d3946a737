//! Facet serialization.
//!
//! Each facet kind appends one or more parameters at the facet's position in
//! the facet set. Per-field options use the `f.<field>.facet.<option>` form.

use crate::types::{Facet, FacetSet, FieldFacet, MultiQueryFacet, QueryFacet, RangeFacet};

use super::local_params;
use super::params::ParamList;

/// Appends `facet=true`, the global facet options and every facet.
///
/// Nothing is appended for an empty facet set.
pub fn append_facet_set(params: &mut ParamList, facet_set: &FacetSet) {
    if facet_set.is_empty() {
        return;
    }

    params.push("facet", "true");
    if facet_set.missing == Some(true) {
        params.push("facet.missing", "1");
    }
    params.push_opt("facet.limit", facet_set.limit);
    params.push_opt("facet.mincount", facet_set.mincount);
    params.push_opt("facet.sort", facet_set.sort.as_deref());
    params.push_opt("facet.prefix", facet_set.prefix.as_deref());

    for facet in &facet_set.facets {
        append_facet(params, facet);
    }
}

/// Appends the parameters for a single facet.
pub fn append_facet(params: &mut ParamList, facet: &Facet) {
    tracing::trace!(key = facet.key(), facet_type = %facet.facet_type(), "serializing facet");

    match facet {
        Facet::Field(field) => append_field(params, field),
        Facet::Query(query) => append_query(params, query),
        Facet::MultiQuery(multi) => append_multi_query(params, multi),
        Facet::Range(range) => append_range(params, range),
    }
}

fn per_field(field: &str, option: &str) -> String {
    format!("f.{}.facet.{}", field, option)
}

fn append_field(params: &mut ParamList, facet: &FieldFacet) {
    params.push(
        "facet.field",
        local_params::with_key(&facet.key, &facet.field),
    );

    let field = facet.field.as_str();
    params.push_opt(per_field(field, "limit"), facet.limit);
    params.push_opt(per_field(field, "sort"), facet.sort.as_deref());
    params.push_opt(per_field(field, "prefix"), facet.prefix.as_deref());
    params.push_opt(per_field(field, "offset"), facet.offset);
    params.push_opt(per_field(field, "mincount"), facet.mincount);
    params.push_opt(per_field(field, "missing"), facet.missing);
    params.push_opt(per_field(field, "method"), facet.method.as_deref());
}

fn append_query(params: &mut ParamList, facet: &QueryFacet) {
    params.push(
        "facet.query",
        local_params::with_key(&facet.key, &facet.query),
    );
}

// The group key is not emitted; each entry is an independent facet query.
fn append_multi_query(params: &mut ParamList, facet: &MultiQueryFacet) {
    for entry in facet.unique_queries() {
        params.push(
            "facet.query",
            local_params::with_key(&entry.key, &entry.query),
        );
    }
}

fn append_range(params: &mut ParamList, facet: &RangeFacet) {
    let field = facet.field.as_str();
    params.push(
        "facet.range",
        local_params::with_key(&facet.key, field),
    );
    params.push(per_field(field, "range.start"), &facet.start);
    params.push(per_field(field, "range.end"), &facet.end);
    params.push(per_field(field, "range.gap"), &facet.gap);
    params.push_opt(per_field(field, "range.other"), facet.other.as_deref());
    params.push_opt(per_field(field, "range.include"), facet.include.as_deref());
}
