//! Behavioral (htmx) attributes.
//!
//! `Behavior` is an ordered verb→value map describing the partial-page
//! updates a component should trigger. Verbs are stored unprefixed; the
//! merge step in [`crate::style::merge`] rewrites each one to `hx-<verb>`
//! exactly once. The crate only guarantees the attributes are correctly
//! named and present — interpreting them is the client-side library's job.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered mapping from interaction verb to value.
///
/// Setting a verb that already exists overwrites its value in place, so
/// [`Behavior::extend`] lets a later source win per verb while keeping a
/// deterministic order.
///
/// # Examples
///
/// ```ignore
/// let behavior = Behavior::new()
///     .get("/load-more")
///     .target("#content")
///     .swap("beforeend");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Behavior {
    entries: Vec<(String, String)>,
}

impl Behavior {
    /// Create an empty behavior map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Issue a GET request to `url` (builder).
    pub fn get(self, url: impl Into<String>) -> Self {
        self.on("get", url)
    }

    /// Issue a POST request to `url` (builder).
    pub fn post(self, url: impl Into<String>) -> Self {
        self.on("post", url)
    }

    /// Target the element matching `selector` with the response (builder).
    pub fn target(self, selector: impl Into<String>) -> Self {
        self.on("target", selector)
    }

    /// Swap strategy for inserting the response (builder).
    pub fn swap(self, strategy: impl Into<String>) -> Self {
        self.on("swap", strategy)
    }

    /// Event that triggers the request (builder).
    pub fn trigger(self, event: impl Into<String>) -> Self {
        self.on("trigger", event)
    }

    /// Include additional element values in the request (builder).
    pub fn include(self, selector: impl Into<String>) -> Self {
        self.on("include", selector)
    }

    /// Enable or disable boosted navigation (builder).
    pub fn boost(self, enabled: bool) -> Self {
        self.on("boost", if enabled { "true" } else { "false" })
    }

    /// Set an arbitrary verb (builder).
    pub fn on(mut self, verb: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(verb, value);
        self
    }

    /// Set a verb's value, overwriting in place if the verb already exists.
    pub fn set(&mut self, verb: impl Into<String>, value: impl Into<String>) {
        let verb = verb.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(v, _)| v.as_str() == verb) {
            entry.1 = value;
        } else {
            self.entries.push((verb, value));
        }
    }

    /// Look up a verb's value.
    pub fn value(&self, verb: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(v, _)| v.as_str() == verb)
            .map(|(_, value)| value.as_str())
    }

    /// Layer `other` on top of this map: verbs from `other` win, new verbs
    /// are appended in `other`'s order.
    pub fn extend(&mut self, other: &Behavior) {
        for (verb, value) in other.iter() {
            self.set(verb, value);
        }
    }

    /// Iterate over `(verb, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(v, val)| (v.as_str(), val.as_str()))
    }

    /// Number of verbs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no verbs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Serde: serialize as a plain map, preserving entry order
// ---------------------------------------------------------------------------

impl Serialize for Behavior {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (verb, value) in &self.entries {
            map.serialize_entry(verb, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Behavior {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BehaviorVisitor;

        impl<'de> Visitor<'de> for BehaviorVisitor {
            type Value = Behavior;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of interaction verbs to string values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut behavior = Behavior::new();
                while let Some((verb, value)) = access.next_entry::<String, String>()? {
                    behavior.set(verb, value);
                }
                Ok(behavior)
            }
        }

        deserializer.deserialize_map(BehaviorVisitor)
    }
}
