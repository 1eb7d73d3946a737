//! Ordered parameter buffer.

use url::form_urlencoded;

use crate::types::Request;

/// Parameters in emission order. Repeated names are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList {
    params: Vec<(String, String)>,
}

impl ParamList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name=value`.
    pub fn push(&mut self, name: impl Into<String>, value: impl ToString) {
        self.params.push((name.into(), value.to_string()));
    }

    /// Appends `name=value` only when a value is present.
    pub fn push_opt<T: ToString>(&mut self, name: impl Into<String>, value: Option<T>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if nothing was pushed.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Form-urlencodes the parameters (`application/x-www-form-urlencoded`).
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Finishes into a `GET` request for `handler`.
    pub fn into_request(self, handler: &str) -> Request {
        let uri = if self.params.is_empty() {
            handler.to_string()
        } else {
            format!("{}?{}", handler, self.encode())
        };
        Request::get(uri, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_order_and_repeats() {
        let mut params = ParamList::new();
        params.push("fq", "a:1");
        params.push("q", "*:*");
        params.push("fq", "b:2");
        assert_eq!(params.encode(), "fq=a%3A1&q=*%3A*&fq=b%3A2");
    }

    #[test]
    fn test_spaces_and_local_params_are_encoded() {
        let mut params = ParamList::new();
        params.push("sort", "id asc");
        params.push("facet.field", "{!key=f1}owner");
        assert_eq!(
            params.encode(),
            "sort=id+asc&facet.field=%7B%21key%3Df1%7Downer"
        );
    }

    #[test]
    fn test_push_opt() {
        let mut params = ParamList::new();
        params.push_opt("facet.limit", Some(10));
        params.push_opt("facet.mincount", None::<i64>);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_into_request_without_params() {
        let request = ParamList::new().into_request("select");
        assert_eq!(request.uri(), "select");
        assert!(request.params().is_empty());
    }
}
