//! Query parameters carried by a navigation entry.
//!
//! A [`Query`] is an unordered string map. Two queries are equal when they
//! hold the same key/value pairs, regardless of insertion order, which is what
//! the reconciler relies on when it diffs two stacks.
//!
//! # Example
//!
//! ```
//! use stack_navigator::Query;
//!
//! let query = Query::from_pairs([("id", "42"), ("tab", "posts")]);
//! assert_eq!(query.get_as::<u32>("id"), Some(42));
//! assert_eq!(query.to_string(), "id=42&tab=posts");
//! ```

use std::collections::HashMap;
use std::fmt;

/// String-to-string parameters attached to a [`NavEntry`](crate::NavEntry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: HashMap<String, String>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing `HashMap`.
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Build a query from `(key, value)` pairs. Later pairs overwrite earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Get a value and parse it as `T`.
    ///
    /// Returns `None` if the key is missing or the value does not parse.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert or overwrite a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.params.insert(key.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over all `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Consume the query and return the underlying map.
    pub fn into_map(self) -> HashMap<String, String> {
        self.params
    }
}

impl From<HashMap<String, String>> for Query {
    fn from(params: HashMap<String, String>) -> Self {
        Self::from_map(params)
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Renders as `k1=v1&k2=v2`, keys sorted so output is stable across runs.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<_> = self.params.iter().collect();
        pairs.sort();
        for (i, (key, value)) in pairs.into_iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = Query::new();
        a.insert("x", "1");
        a.insert("y", "2");

        let b = Query::from_pairs([("y", "2"), ("x", "1")]);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_values_are_not_equal() {
        let a = Query::new().with("id", "1");
        let b = Query::new().with("id", "2");
        assert_ne!(a, b);
        assert_ne!(a, Query::new());
    }

    #[test]
    fn test_get_as() {
        let query = Query::from_pairs([("page", "3"), ("name", "abc")]);
        assert_eq!(query.get_as::<u32>("page"), Some(3));
        assert_eq!(query.get_as::<u32>("name"), None);
        assert_eq!(query.get_as::<u32>("missing"), None);
        assert_eq!(query.get("name"), Some("abc"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut query = Query::new();
        assert_eq!(query.insert("k", "old"), None);
        assert_eq!(query.insert("k", "new"), Some("old".to_string()));
        assert_eq!(query.len(), 1);
        assert_eq!(query.remove("k"), Some("new".to_string()));
        assert!(query.is_empty());
    }

    #[test]
    fn test_display_is_sorted() {
        let query: Query = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        assert_eq!(query.to_string(), "a=1&b=2&c=3");
        assert_eq!(Query::new().to_string(), "");
    }
}
