//! Record access by facet key.

use std::{borrow::Cow, collections::{BTreeMap, HashMap}};

use serde_json::Value;


/// A record the engine can filter. The engine only ever looks values up by facet key, or walks all
/// of them for free-text search and distinct-value indexing.
pub trait FacetRecord {
    /// String form of the value stored under `key`, `None` when the record has no value for it.
    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Every `(key, value)` pair of the record, values in string form.
    fn facet_entries(&self) -> Box<dyn Iterator<Item = (&str, Cow<'_, str>)> + '_>;
}

/// Stringifies a JSON scalar. `null` counts as missing, nested values are rendered as JSON.
pub fn json_value_to_string(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Array(_) | Value::Object(_) => Some(Cow::Owned(value.to_string())),
    }
}

impl FacetRecord for serde_json::Map<String, Value> {
    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).and_then(json_value_to_string)
    }

    fn facet_entries(&self) -> Box<dyn Iterator<Item = (&str, Cow<'_, str>)> + '_> {
        Box::new(self.iter().filter_map(|(k, v)| Some((k.as_str(), json_value_to_string(v)?))))
    }
}

impl FacetRecord for Value {
    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match self {
            Value::Object(map) => map.facet_value(key),
            _ => None,
        }
    }

    fn facet_entries(&self) -> Box<dyn Iterator<Item = (&str, Cow<'_, str>)> + '_> {
        match self {
            Value::Object(map) => map.facet_entries(),
            _ => Box::new(std::iter::empty()),
        }
    }
}

impl FacetRecord for BTreeMap<String, String> {
    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|s| Cow::Borrowed(s.as_str()))
    }

    fn facet_entries(&self) -> Box<dyn Iterator<Item = (&str, Cow<'_, str>)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), Cow::Borrowed(v.as_str()))))
    }
}

impl FacetRecord for HashMap<String, String> {
    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|s| Cow::Borrowed(s.as_str()))
    }

    fn facet_entries(&self) -> Box<dyn Iterator<Item = (&str, Cow<'_, str>)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), Cow::Borrowed(v.as_str()))))
    }
}

impl<T: FacetRecord + ?Sized> FacetRecord for &T {
    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).facet_value(key)
    }

    fn facet_entries(&self) -> Box<dyn Iterator<Item = (&str, Cow<'_, str>)> + '_> {
        (**self).facet_entries()
    }
}
