//! Ordered attribute map.
//!
//! `AttrMap` stores element attributes in first-insertion order with unique
//! keys: setting an existing key overwrites its value in place. Precedence
//! between attribute *sources* (base, behavior, overrides) lives in
//! [`crate::style::merge`]; this type only provides the ordered storage
//! those rules rely on.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered mapping from attribute name to string value.
///
/// Keys are unique. Iteration yields entries in the order their keys were
/// first inserted, regardless of later overwrites.
///
/// # Examples
///
/// ```ignore
/// let attrs = AttrMap::new()
///     .with("type", "button")
///     .with("class", "rounded-lg");
/// assert_eq!(attrs.get("type"), Some("button"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrMap {
    entries: Vec<(String, String)>,
}

impl AttrMap {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set an attribute (builder).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute value.
    ///
    /// If the name already exists its value is overwritten in place, keeping
    /// the key's original position in iteration order.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n.as_str() == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Look up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an attribute with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n.as_str() == name)
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n.as_str() == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

// ---------------------------------------------------------------------------
// Serde: serialize as a plain map, preserving entry order
// ---------------------------------------------------------------------------

impl Serialize for AttrMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttrMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttrMapVisitor;

        impl<'de> Visitor<'de> for AttrMapVisitor {
            type Value = AttrMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of attribute names to string values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut attrs = AttrMap::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    attrs.set(name, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(AttrMapVisitor)
    }
}
