//! Ordered parameter bag for link query strings and fragments.
//!
//! Keys are known parameter names and are emitted literally; values are
//! percent-encoded when the bag is serialized. Pairs keep insertion order.

use std::fmt::Display;

use crate::encode::encode_component;

/// Builder for assembling ordered key/value parameter pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair.
    ///
    /// Keys are unique: pushing a key that is already present replaces its
    /// value and keeps its original position.
    pub fn push<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Display,
    {
        self.insert(key.into(), value.to_string());
    }

    /// Chaining variant of [`QueryParams::push`].
    #[must_use]
    pub fn with<T>(mut self, key: impl Into<String>, value: T) -> Self
    where
        T: Display,
    {
        self.push(key, value);
        self
    }

    fn insert(&mut self, key: String, value: String) {
        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Look up the raw value stored for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize as `key1=value1&key2=value2`, encoding values only.
    ///
    /// An empty bag yields an empty string.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(&encode_component(value));
        }
        out
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

impl<K, V, const N: usize> From<[(K, V); N]> for QueryParams
where
    K: Into<String>,
    V: Display,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
