//! The metadata map carried inside a SQL comment.
//!
//! This module provides [`Metadata`], a small string-to-string map that
//! remembers insertion order. Order matters for deterministic output:
//! [`wrap_sql`](crate::wrap_sql) emits entries in exactly the order they
//! were inserted, so the same map always renders the same comment.
//!
//! Keys and values are stored verbatim. The plain [`Metadata::insert`] does
//! not validate them (the comment grammar is the caller's responsibility);
//! use [`Metadata::try_insert`] to reject entries that would corrupt the
//! comment.

use crate::error::{HintError, HintResult};

/// Characters that terminate or delimit the comment grammar. An entry
/// containing any of these cannot survive a wrap/parse round trip.
const RESERVED_CHARS: [char; 3] = [';', '=', '*'];

/// An insertion-ordered map of string keys to string values.
///
/// # Example
/// ```
/// use sqlhint::Metadata;
///
/// let mut m = Metadata::new();
/// m.insert("user", "admin");
/// m.insert("transaction", "12345");
/// assert_eq!(m.get("user"), Some("admin"));
/// assert_eq!(m.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, storing key and value verbatim.
    ///
    /// If the key is already present its value is replaced in place, keeping
    /// the key's original position. Otherwise the entry is appended.
    ///
    /// No validation is performed; keys or values containing `;`, `=`, or
    /// `*` will produce a comment that [`parse_metadata`](crate::parse_metadata)
    /// misreads. Use [`try_insert`](Self::try_insert) when the input is not
    /// under the caller's control.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Insert an entry after checking it against the comment grammar.
    ///
    /// Rejects keys that are empty after trimming, and keys or values
    /// containing `;`, `=`, or `*`. On success behaves like
    /// [`insert`](Self::insert).
    pub fn try_insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> HintResult<()> {
        let key = key.into();
        let value = value.into();
        if key.trim().is_empty() {
            return Err(HintError::EmptyKey);
        }
        for ch in RESERVED_CHARS {
            if key.contains(ch) {
                return Err(HintError::ReservedChar { field: "key", ch });
            }
            if value.contains(ch) {
                return Err(HintError::ReservedChar { field: "value", ch });
            }
        }
        self.insert(key, value);
        Ok(())
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove an entry, returning its value if the key was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        metadata.extend(iter);
        metadata
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Metadata {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Metadata {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn as_str_pair(entry: &(String, String)) -> (&str, &str) {
            (entry.0.as_str(), entry.1.as_str())
        }
        self.entries
            .iter()
            .map(as_str_pair as fn(&'a (String, String)) -> (&'a str, &'a str))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Metadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MapVisitor;

        impl<'de> serde::de::Visitor<'de> for MapVisitor {
            type Value = Metadata;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of string keys to string values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut metadata = Metadata::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    metadata.insert(key, value);
                }
                Ok(metadata)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}
