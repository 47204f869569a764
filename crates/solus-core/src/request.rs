//! Per-call request options.

use serde::Serialize;
use std::time::Duration;

use crate::query::{Filter, QueryParams};

/// Options of a single call: JSON body, query parameters and deadline.
///
/// The body is serialized eagerly; a serialization failure is kept and
/// reported as a build error when the request is assembled, before any I/O.
#[derive(Debug, Default)]
pub struct RequestOptions {
    body: Option<Result<Vec<u8>, String>>,
    params: QueryParams,
    deadline: Option<Duration>,
}

impl RequestOptions {
    /// Options with no body, no parameters and no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `body` encoded as JSON.
    #[must_use]
    pub fn with_body<B>(mut self, body: &B) -> Self
    where
        B: Serialize + ?Sized,
    {
        self.body = Some(serde_json::to_vec(body).map_err(|e| e.to_string()));
        self
    }

    /// Append the filter's parameters to those already present.
    #[must_use]
    pub fn with_filter(mut self, filter: &Filter) -> Self {
        self.params.extend(filter.to_params());
        self
    }

    /// Append multi-valued parameters to those already present.
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params.extend(params);
        self
    }

    /// Append one query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.params.push(key, value);
        self
    }

    /// Bound the whole call, retries included.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Encoded body, if any.
    ///
    /// # Errors
    ///
    /// Returns the serialization failure message when the body could not be encoded.
    pub fn body(&self) -> Result<Option<&[u8]>, &str> {
        match &self.body {
            None => Ok(None),
            Some(Ok(bytes)) => Ok(Some(bytes.as_slice())),
            Some(Err(message)) => Err(message.as_str()),
        }
    }

    /// Query parameters.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Per-call deadline.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use std::collections::BTreeMap;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("fake error"))
        }
    }

    #[test]
    fn test_without_body() {
        let opts = RequestOptions::new();
        assert_eq!(opts.body(), Ok(None));
        assert!(opts.params().is_empty());
        assert!(opts.deadline().is_none());
    }

    #[test]
    fn test_with_body() {
        let body = BTreeMap::from([("name", "test")]);
        let opts = RequestOptions::new().with_body(&body);
        assert_eq!(opts.body(), Ok(Some(&br#"{"name":"test"}"#[..])));
    }

    #[test]
    fn test_with_body_failure_is_kept() {
        let opts = RequestOptions::new().with_body(&Unserializable);
        assert_eq!(opts.body(), Err("fake error"));
    }

    #[test]
    fn test_with_filter_merges_with_existing_params() {
        let mut filter = Filter::new().add("foo", "bar");
        filter = filter.add("foo", "new");

        let mut existing = QueryParams::new();
        existing.push("filter[foo]", "old");

        let opts = RequestOptions::new()
            .with_params(existing)
            .with_filter(&filter)
            .with_param("page", 2);

        assert_eq!(
            opts.params().get("filter[foo]"),
            Some(&["old".to_string(), "new".to_string()][..])
        );
        assert_eq!(opts.params().get("page"), Some(&["2".to_string()][..]));
    }

    #[test]
    fn test_with_params_keeps_all_values() {
        let opts = RequestOptions::new()
            .with_params([("foo", "new")].into_iter().collect())
            .with_params([("foo", "bar")].into_iter().collect());

        assert_eq!(
            opts.params().get("foo"),
            Some(&["new".to_string(), "bar".to_string()][..])
        );
    }

    #[test]
    fn test_with_deadline() {
        let opts = RequestOptions::new().with_deadline(Duration::from_millis(250));
        assert_eq!(opts.deadline(), Some(Duration::from_millis(250)));
    }
}
