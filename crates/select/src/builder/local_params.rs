//! Local parameter blocks.
//!
//! A local parameter block is the `{!name=value}` prefix attached to a
//! parameter value. Filters use it for tags, facets for their result key.

/// Builds `{!<name>=<v1>,<v2>,...}<body>`, or just `<body>` when no
/// non-empty value is left.
///
/// Empty values are skipped; the rest are joined with a bare comma.
pub fn prefix<S: AsRef<str>>(name: &str, values: &[S], body: &str) -> String {
    let values: Vec<&str> = values
        .iter()
        .map(AsRef::as_ref)
        .filter(|value| !value.is_empty())
        .collect();
    if values.is_empty() {
        return body.to_string();
    }

    format!("{{!{}={}}}{}", name, values.join(","), body)
}

/// `{!key=<key>}<body>`
pub fn with_key(key: &str, body: &str) -> String {
    prefix("key", &[key], body)
}

/// `{!tag=<t1>,<t2>}<body>`, or `<body>` when there are no tags.
pub fn with_tags<S: AsRef<str>>(tags: &[S], body: &str) -> String {
    prefix("tag", tags, body)
}
