//! Query parameter builders.
//!
//! [`QueryParams`] is the multi-valued bag attached to a request. [`Filter`]
//! is the single-valued, last-write-wins form used by resource filters; it
//! renders each key as `filter[<key>]`.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Multi-valued query parameters.
///
/// Keys are kept sorted and values keep their insertion order, so the encoded
/// query string is stable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key`, keeping values already present.
    pub fn push<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Display,
    {
        self.params
            .entry(key.into())
            .or_default()
            .push(value.to_string());
    }

    /// Append a value when present.
    pub fn push_opt<T>(&mut self, key: impl Into<String>, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Merge `other` into `self`. Values of `other` go after the existing ones.
    pub fn extend(&mut self, other: Self) {
        for (key, values) in other.params {
            self.params.entry(key).or_default().extend(values);
        }
    }

    /// Values stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.params.get(key).map(Vec::as_slice)
    }

    /// Flatten into `(key, value)` pairs in encoding order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.as_str(), v.as_str())))
            .collect()
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

/// Single-valued filter. Setting a key twice keeps the last value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Filter {
    data: BTreeMap<String, String>,
}

impl Filter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `filter[<key>]` to `value`.
    #[must_use]
    pub fn add(mut self, key: &str, value: impl Into<String>) -> Self {
        self.data.insert(format!("filter[{key}]"), value.into());
        self
    }

    /// Set `filter[<key>]` to a numeric value.
    #[must_use]
    pub fn add_int(self, key: &str, value: i64) -> Self {
        self.add(key, value.to_string())
    }

    /// Set `filter[<key>]` to `value` when present.
    #[must_use]
    pub fn add_opt(self, key: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.add(key, value),
            None => self,
        }
    }

    /// Raw `filter[...]` to value map.
    #[must_use]
    pub fn get(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    /// Returns true if nothing has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Render as query parameters.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        self.data.iter().map(|(k, v)| (k.clone(), v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_all_values() {
        let mut params = QueryParams::new();
        params.push("foo", "new");
        params.push("foo", "bar");
        params.push("baz", 1);

        assert_eq!(params.get("foo"), Some(&["new".to_string(), "bar".to_string()][..]));
        assert_eq!(params.pairs(), vec![("baz", "1"), ("foo", "new"), ("foo", "bar")]);
    }

    #[test]
    fn test_push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("name", Option::<String>::None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_extend_appends() {
        let mut params: QueryParams = [("foo", "new")].into_iter().collect();
        params.extend([("foo", "bar"), ("page", "2")].into_iter().collect());

        assert_eq!(params.get("foo"), Some(&["new".to_string(), "bar".to_string()][..]));
        assert_eq!(params.get("page"), Some(&["2".to_string()][..]));
    }

    #[test]
    fn test_filter_last_write_wins() {
        let filter = Filter::new()
            .add("status", "started")
            .add("status", "stopped")
            .add_int("user_id", 42)
            .add_opt("search", Option::<String>::None);

        let expected = BTreeMap::from([
            ("filter[status]".to_string(), "stopped".to_string()),
            ("filter[user_id]".to_string(), "42".to_string()),
        ]);
        assert_eq!(filter.get(), &expected);
        assert_eq!(
            filter.to_params().pairs(),
            vec![("filter[status]", "stopped"), ("filter[user_id]", "42")]
        );
    }

    #[test]
    fn test_empty_filter() {
        assert!(Filter::new().is_empty());
        assert!(Filter::new().to_params().is_empty());
    }
}
