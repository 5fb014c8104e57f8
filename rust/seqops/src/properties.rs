//! Named property lookup, backing [`KeySelector::property`](crate::KeySelector::property).

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// Looks up a named property of a record-like value.
///
/// Returns `None` when the value has no property with that name.
pub trait Properties<K> {
    fn property(&self, name: &str) -> Option<K>;
}

impl<V: Clone, S: BuildHasher> Properties<V> for HashMap<String, V, S> {
    fn property(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone> Properties<V> for BTreeMap<String, V> {
    fn property(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

/// JSON properties are keyed by their text: a string property by its contents, any
/// other value by its JSON encoding. `null` is a present property.
#[cfg(feature = "json")]
impl Properties<String> for serde_json::Map<String, serde_json::Value> {
    fn property(&self, name: &str) -> Option<String> {
        self.get(name).map(json_key)
    }
}

/// Only JSON objects carry properties.
#[cfg(feature = "json")]
impl Properties<String> for serde_json::Value {
    fn property(&self, name: &str) -> Option<String> {
        self.as_object()?.property(name)
    }
}

#[cfg(feature = "json")]
fn json_key(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
